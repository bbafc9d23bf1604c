use serde::{Deserialize, Serialize};

pub const STATUS_PROSPECT: &str = "prospect";
pub const STATUS_CONTACTED: &str = "contacted";
pub const STATUS_NEGOTIATING: &str = "negotiating";
pub const STATUS_CONVERTED: &str = "converted";
pub const STATUS_LOST: &str = "lost";

/// Pipeline order used by the status selector.
pub const STATUSES: &[&str] = &[
    STATUS_PROSPECT,
    STATUS_CONTACTED,
    STATUS_NEGOTIATING,
    STATUS_CONVERTED,
    STATUS_LOST,
];

/// Sales lead for a school (`GET /api/admin/commercial/leads`, paginated as
/// `{ "leads": [...], "totalPages": n }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommercialLead {
    pub id: i64,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub location: String,
    pub status: String,
    /// Estimated contract value in FCFA.
    pub estimated_value: f64,
    /// `public` or `private`.
    pub school_type: String,
    pub student_count: u32,
    pub assigned_to: String,
    pub last_contact_at: Option<String>,
    pub created_at: String,
    pub notes: Option<String>,
}

/// Body of `PATCH /api/admin/commercial/leads/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadStatusUpdate {
    pub status: String,
}
