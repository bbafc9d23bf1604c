use serde::{Deserialize, Serialize};

pub const STATUS_SCHEDULED: &str = "scheduled";
pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Tutoring session (`GET /api/freelancer/sessions`). `date` is `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelancerSession {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub student_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub location: String,
    pub status: String,
    pub student_count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
    pub materials: Vec<String>,
}

/// Body of `POST /api/freelancer/sessions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionDto {
    pub title: String,
    pub subject: String,
    pub student_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
    pub materials: Vec<String>,
}
