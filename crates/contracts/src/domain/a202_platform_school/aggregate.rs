use serde::{Deserialize, Serialize};

pub const SUBSCRIPTION_ACTIVE: &str = "active";
pub const SUBSCRIPTION_EXPIRED: &str = "expired";
pub const SUBSCRIPTION_SUSPENDED: &str = "suspended";

/// School registered on the platform (`GET /api/admin/platform-schools`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformSchool {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub student_count: u32,
    pub teacher_count: u32,
    pub subscription_status: String,
    /// Monthly revenue in FCFA.
    pub monthly_revenue: f64,
    pub created_at: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

/// Body of `PUT /api/admin/platform-schools/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSubscriptionUpdate {
    pub subscription_status: String,
}
