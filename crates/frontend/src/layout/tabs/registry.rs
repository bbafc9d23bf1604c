//! Tab content registry: the single mapping from tab key to module view.

use crate::domain::a101_freelancer_profile::ui::details::FreelancerProfileDetails;
use crate::domain::a102_freelancer_student::ui::list::FreelancerStudentList;
use crate::domain::a103_freelancer_session::ui::list::FreelancerSessionList;
use crate::domain::a104_freelancer_payment::ui::list::FreelancerPaymentList;
use crate::domain::a105_schedule_slot::ui::list::ScheduleSlotList;
use crate::domain::a106_tutor_resource::ui::list::TutorResourceList;
use crate::domain::a107_teaching_zone::ui::list::GeolocationView;
use crate::domain::a201_platform_user::ui::list::PlatformUserList;
use crate::domain::a202_platform_school::ui::list::PlatformSchoolList;
use crate::domain::a203_admin_document::ui::list::AdminDocumentList;
use crate::domain::a204_commercial_lead::ui::list::CommercialLeadList;
use crate::domain::a205_admin_message::ui::list::CommunicationsView;
use crate::domain::a206_platform_settings::ui::details::PlatformSettingsView;
use crate::domain::a207_system_health::ui::details::SystemHealthView;
use crate::domain::a208_security_audit::ui::list::SecurityAuditView;
use leptos::prelude::*;

/// Content of the tab `key`, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Freelancer dashboard
        "a101_profile" => view! { <FreelancerProfileDetails /> }.into_any(),
        "a102_students" => view! { <FreelancerStudentList /> }.into_any(),
        "a103_sessions" => view! { <FreelancerSessionList /> }.into_any(),
        "a104_payments" => view! { <FreelancerPaymentList /> }.into_any(),
        "a105_schedule" => view! { <ScheduleSlotList /> }.into_any(),
        "a106_resources" => view! { <TutorResourceList /> }.into_any(),
        "a107_geolocation" => view! { <GeolocationView /> }.into_any(),

        // Site administration dashboard
        "a201_users" => view! { <PlatformUserList /> }.into_any(),
        "a202_schools" => view! { <PlatformSchoolList /> }.into_any(),
        "a203_documents" => view! { <AdminDocumentList /> }.into_any(),
        "a204_commercial" => view! { <CommercialLeadList /> }.into_any(),
        "a205_communications" => view! { <CommunicationsView /> }.into_any(),
        "a206_settings" => view! { <PlatformSettingsView /> }.into_any(),
        "a207_health" => view! { <SystemHealthView /> }.into_any(),
        "a208_security" => view! { <SecurityAuditView /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="list-placeholder">{key.to_string()}</div> }.into_any()
        }
    }
}
