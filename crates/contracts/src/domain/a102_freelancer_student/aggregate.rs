use serde::{Deserialize, Serialize};

pub const STATUS_EXCELLENT: &str = "excellent";
pub const STATUS_GOOD: &str = "good";
pub const STATUS_NEEDS_ATTENTION: &str = "needs_attention";

/// Private-lesson student of the current tutor (`GET /api/freelancer/students`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelancerStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub school_name: String,
    /// Average mark on the /20 scale.
    pub average_grade: f64,
    /// Attendance in percent.
    pub attendance_rate: f64,
    pub status: String,
    pub last_session: String,
    pub total_sessions: u32,
    pub next_session: String,
}

impl FreelancerStudent {
    /// `fullName` when the backend sends it, otherwise first + last name.
    pub fn display_name(&self) -> String {
        if !self.full_name.trim().is_empty() {
            return self.full_name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Body of `POST /api/freelancer/students`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub school_name: String,
}
