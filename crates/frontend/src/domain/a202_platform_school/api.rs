use contracts::domain::a202_platform_school::aggregate::SchoolSubscriptionUpdate;

use crate::shared::query::MutationRequest;

pub const SCHOOLS: &str = "admin/platform-schools";

pub fn update_subscription(id: i64, status: &str) -> MutationRequest {
    MutationRequest::update(
        SCHOOLS,
        id,
        &SchoolSubscriptionUpdate {
            subscription_status: status.to_string(),
        },
    )
}

pub fn delete_school(id: i64) -> MutationRequest {
    MutationRequest::delete(SCHOOLS, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_update_body_is_camel_case() {
        let request = update_subscription(7, "suspended");
        assert_eq!(request.path(), "admin/platform-schools/7");
        assert_eq!(request.payload, Some(json!({ "subscriptionStatus": "suspended" })));
    }
}
