use serde::{Deserialize, Serialize};

/// Platform roles as reported by the session endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    SiteAdmin,
    Admin,
    Director,
    Teacher,
    Parent,
    Student,
    Commercial,
    Freelancer,
    #[serde(other)]
    Unknown,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SiteAdmin => "SiteAdmin",
            UserRole::Admin => "Admin",
            UserRole::Director => "Director",
            UserRole::Teacher => "Teacher",
            UserRole::Parent => "Parent",
            UserRole::Student => "Student",
            UserRole::Commercial => "Commercial",
            UserRole::Freelancer => "Freelancer",
            UserRole::Unknown => "Unknown",
        }
    }

    /// Roles allowed into the site administration dashboard.
    pub fn is_site_admin(&self) -> bool {
        matches!(self, UserRole::SiteAdmin | UserRole::Admin)
    }
}

/// Response of `GET /api/auth/me` for a valid session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
