// Freelancer dashboard
pub mod a101_freelancer_profile;
pub mod a102_freelancer_student;
pub mod a103_freelancer_session;
pub mod a104_freelancer_payment;
pub mod a105_schedule_slot;
pub mod a106_tutor_resource;
pub mod a107_teaching_zone;

// Site administrator dashboard
pub mod a201_platform_user;
pub mod a202_platform_school;
pub mod a203_admin_document;
pub mod a204_commercial_lead;
pub mod a205_admin_message;
pub mod a206_platform_settings;
pub mod a207_system_health;
pub mod a208_security_audit;
