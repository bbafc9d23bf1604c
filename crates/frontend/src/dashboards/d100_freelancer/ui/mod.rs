pub mod dashboard;

pub use dashboard::FreelancerDashboard;
