use serde::{Deserialize, Serialize};

/// Document stored in the administration library (`GET /api/admin/documents`).
///
/// The endpoint is paginated: `{ "documents": [...], "totalPages": n }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDocument {
    pub id: i64,
    pub name: String,
    /// File kind label (`PDF`, `Excel`, `Word`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub size: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: String,
    pub uploaded_by: String,
    pub downloads: u64,
}

/// Categories offered by the upload form and the category filter.
pub const CATEGORIES: &[&str] = &[
    "Contrats",
    "Finances",
    "Légal",
    "Documentation",
    "Rapports",
    "Divers",
];
