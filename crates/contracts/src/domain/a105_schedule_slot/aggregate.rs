use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_COMPLETED: &str = "completed";

/// Weekly timetable slot (`GET /api/freelancer/schedule`).
/// `day_of_week` follows ISO numbering: 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleSlot {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub student_class: String,
    pub level: String,
    pub day_of_week: u8,
    pub day_name: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub location: String,
    pub recurring: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
}

/// Body of `POST /api/freelancer/schedule`. Times are `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleSlotDto {
    pub title: String,
    pub subject: String,
    pub student_class: String,
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub recurring: bool,
    #[serde(rename = "type")]
    pub kind: String,
}
