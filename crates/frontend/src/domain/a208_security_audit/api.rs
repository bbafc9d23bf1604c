use crate::shared::query::MutationRequest;

pub const SECURITY: &str = "admin/security";
pub const AUDIT_LOGS: &str = "admin/security/audit-logs";
pub const ALERTS: &str = "admin/security/alerts";

/// `POST admin/security/<action>` with an empty body; logs and alerts refetch afterwards.
pub fn run_action(name: &str) -> MutationRequest {
    MutationRequest::action(SECURITY, None, name).with_payload(&serde_json::json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::transport::HttpMethod;
    use crate::shared::query::QueryKey;

    #[test]
    fn test_action_request() {
        let request = run_action("clear-sessions");
        assert_eq!(request.method(), HttpMethod::Post);
        assert_eq!(request.path(), "admin/security/clear-sessions");
        assert_eq!(request.payload, Some(serde_json::json!({})));
    }

    #[test]
    fn test_actions_refresh_logs_and_alerts() {
        let invalidated = run_action("scan").invalidated_resources();
        assert!(QueryKey::bare(AUDIT_LOGS).belongs_to(&invalidated[0]));
        assert!(QueryKey::bare(ALERTS).belongs_to(&invalidated[0]));
    }

    #[test]
    fn test_each_action_has_its_own_pending_token() {
        assert_ne!(run_action("scan").pending_token(), run_action("backup").pending_token());
    }
}
