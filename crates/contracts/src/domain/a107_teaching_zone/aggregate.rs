use serde::{Deserialize, Serialize};

pub const STUDENT_IN_SESSION: &str = "inSession";
pub const STUDENT_ACTIVE: &str = "active";
pub const STUDENT_COMPLETED: &str = "completed";
pub const STUDENT_ABSENT: &str = "absent";

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Area where the tutor gives lessons (`GET /api/freelancer/geolocation/zones`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeachingZone {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinates,
    /// Radius in metres.
    pub radius: f64,
    pub students_today: u32,
}

/// Body of `POST /api/freelancer/geolocation/zones`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Coordinates,
    pub radius: f64,
    pub description: String,
}

/// Live position status of a student (`GET /api/freelancer/geolocation/students`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackedStudent {
    pub id: i64,
    pub student_name: String,
    pub subject: String,
    pub status: String,
    pub last_update: String,
    pub location: String,
}
