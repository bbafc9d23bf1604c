use serde::{Deserialize, Serialize};

/// Teaching material shared by the tutor (`GET /api/freelancer/resources`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TutorResource {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub level: String,
    pub format: String,
    pub size: String,
    /// RFC 3339 upload timestamp.
    pub uploaded_at: String,
    pub category: String,
    pub downloads: u64,
    pub is_public: bool,
}

/// Body of `PATCH /api/freelancer/resources/<id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceVisibilityDto {
    pub is_public: bool,
}
