use contracts::domain::a204_commercial_lead::aggregate::LeadStatusUpdate;

use crate::shared::query::MutationRequest;

pub const LEADS: &str = "admin/commercial/leads";

pub fn update_status(id: i64, status: &str) -> MutationRequest {
    MutationRequest::patch(
        LEADS,
        id,
        &LeadStatusUpdate {
            status: status.to_string(),
        },
    )
}

pub fn delete_lead(id: i64) -> MutationRequest {
    MutationRequest::delete(LEADS, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::transport::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_status_update_is_a_patch() {
        let request = update_status(12, "converted");
        assert_eq!(request.method(), HttpMethod::Patch);
        assert_eq!(request.path(), "admin/commercial/leads/12");
        assert_eq!(request.payload, Some(json!({ "status": "converted" })));
        assert_eq!(request.invalidated_resources(), vec![LEADS.to_string()]);
    }
}
