pub mod d100_freelancer;
pub mod d200_site_admin;

pub use d100_freelancer::ui::FreelancerDashboard;
pub use d200_site_admin::ui::SiteAdminDashboard;
