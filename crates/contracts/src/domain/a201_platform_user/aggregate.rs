use serde::{Deserialize, Serialize};

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// Any account on the platform (`GET /api/admin/platform-users`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Role name as sent by the backend (`SiteAdmin`, `Teacher`, ...).
    pub role: String,
    pub school_name: Option<String>,
    pub status: String,
    pub last_login: String,
    pub created_at: String,
}

impl PlatformUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    /// Status the "toggle" action switches to.
    pub fn toggled_status(&self) -> &'static str {
        if self.is_active() {
            STATUS_INACTIVE
        } else {
            STATUS_ACTIVE
        }
    }
}

/// Body of `PUT /api/admin/platform-users/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_status() {
        let mut user = PlatformUser {
            status: STATUS_ACTIVE.into(),
            ..Default::default()
        };
        assert_eq!(user.toggled_status(), STATUS_INACTIVE);
        user.status = "suspended".into();
        assert_eq!(user.toggled_status(), STATUS_ACTIVE);
    }
}
