use contracts::domain::a201_platform_user::aggregate::{PlatformUser, UserStatusUpdate};

use crate::shared::query::MutationRequest;

pub const USERS: &str = "admin/platform-users";

/// Activate an inactive account or deactivate an active one.
pub fn toggle_status(user: &PlatformUser) -> MutationRequest {
    MutationRequest::update(
        USERS,
        user.id,
        &UserStatusUpdate {
            status: user.toggled_status().to_string(),
        },
    )
}

pub fn delete_user(id: i64) -> MutationRequest {
    MutationRequest::delete(USERS, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::transport::HttpMethod;
    use contracts::domain::a201_platform_user::aggregate::STATUS_ACTIVE;

    #[test]
    fn test_toggle_is_a_put_with_the_next_status() {
        let user = PlatformUser {
            id: 42,
            status: STATUS_ACTIVE.into(),
            ..Default::default()
        };
        let request = toggle_status(&user);
        assert_eq!(request.method(), HttpMethod::Put);
        assert_eq!(request.path(), "admin/platform-users/42");
        assert_eq!(request.payload, Some(serde_json::json!({ "status": "inactive" })));
    }
}
