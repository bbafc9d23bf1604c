use serde::Serialize;
use serde_json::Value;

use super::transport::{ApiRequest, HttpMethod};
use crate::shared::errors::ApiError;
use crate::shared::api_utils::{join_url, resource_path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOperation {
    Create,
    Update,
    Patch,
    Delete,
    /// Named action on a resource or entity, sent as POST.
    Action(String),
}

/// One write against the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRequest {
    pub resource: String,
    pub entity_id: Option<String>,
    pub operation: MutationOperation,
    pub payload: Option<Value>,
    /// Set when the payload could not be serialized; such a request is never sent.
    pub payload_error: Option<String>,
    /// Additional resources whose cached reads become stale on success.
    pub invalidates: Vec<String>,
}

impl MutationRequest {
    fn new(resource: &str, operation: MutationOperation) -> Self {
        Self {
            resource: resource.trim_matches('/').to_string(),
            entity_id: None,
            operation,
            payload: None,
            payload_error: None,
            invalidates: Vec::new(),
        }
    }

    pub fn create<T: Serialize>(resource: &str, payload: &T) -> Self {
        Self::new(resource, MutationOperation::Create).with_payload(payload)
    }

    pub fn update<T: Serialize>(resource: &str, id: impl ToString, payload: &T) -> Self {
        Self {
            entity_id: Some(id.to_string()),
            ..Self::new(resource, MutationOperation::Update)
        }
        .with_payload(payload)
    }

    /// PUT on a single-object resource (profile, settings).
    pub fn replace<T: Serialize>(resource: &str, payload: &T) -> Self {
        Self::new(resource, MutationOperation::Update).with_payload(payload)
    }

    pub fn patch<T: Serialize>(resource: &str, id: impl ToString, payload: &T) -> Self {
        Self {
            entity_id: Some(id.to_string()),
            ..Self::new(resource, MutationOperation::Patch)
        }
        .with_payload(payload)
    }

    pub fn delete(resource: &str, id: impl ToString) -> Self {
        Self {
            entity_id: Some(id.to_string()),
            ..Self::new(resource, MutationOperation::Delete)
        }
    }

    pub fn action(resource: &str, id: Option<String>, name: &str) -> Self {
        Self {
            entity_id: id,
            ..Self::new(resource, MutationOperation::Action(name.to_string()))
        }
    }

    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(value) => {
                self.payload = Some(value);
                self.payload_error = None;
            }
            Err(e) => {
                self.payload = None;
                self.payload_error = Some(e.to_string());
            }
        }
        self
    }

    pub fn also_invalidates(mut self, resource: &str) -> Self {
        self.invalidates.push(resource.trim_matches('/').to_string());
        self
    }

    pub fn method(&self) -> HttpMethod {
        match self.operation {
            MutationOperation::Create | MutationOperation::Action(_) => HttpMethod::Post,
            MutationOperation::Update => HttpMethod::Put,
            MutationOperation::Patch => HttpMethod::Patch,
            MutationOperation::Delete => HttpMethod::Delete,
        }
    }

    pub fn path(&self) -> String {
        let suffix = match &self.operation {
            MutationOperation::Action(name) => Some(name.as_str()),
            _ => None,
        };
        resource_path(&self.resource, self.entity_id.as_deref(), suffix)
    }

    /// Resources to invalidate after success, the target resource first.
    pub fn invalidated_resources(&self) -> Vec<String> {
        let mut all = vec![self.resource.clone()];
        for extra in &self.invalidates {
            if !all.contains(extra) {
                all.push(extra.clone());
            }
        }
        all
    }

    /// Token identifying the control that triggered this write.
    pub fn pending_token(&self) -> String {
        format!(
            "{}:{}:{}",
            self.resource,
            self.entity_id.as_deref().unwrap_or(""),
            match &self.operation {
                MutationOperation::Action(name) => name.as_str(),
                _ => self.method().as_str(),
            }
        )
    }

    pub fn to_api_request(&self, base: &str) -> Result<ApiRequest, ApiError> {
        if let Some(reason) = &self.payload_error {
            return Err(ApiError::Encode(reason.clone()));
        }
        Ok(ApiRequest {
            method: self.method(),
            url: join_url(base, &self.path()),
            body: self.payload.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_http_mapping() {
        let create = MutationRequest::create("freelancer/students", &json!({"firstName": "Awa"}));
        let req = create.to_api_request("/api").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "/api/freelancer/students");
        assert_eq!(req.body, Some(json!({"firstName": "Awa"})));

        let update = MutationRequest::update("admin/platform-users", 5, &json!({"status": "inactive"}));
        assert_eq!(update.method(), HttpMethod::Put);
        assert_eq!(update.path(), "admin/platform-users/5");

        let patch = MutationRequest::patch("admin/commercial/leads", 3, &json!({"status": "lost"}));
        assert_eq!(patch.method(), HttpMethod::Patch);

        let delete = MutationRequest::delete("admin/documents", 8)
            .to_api_request("/api/")
            .unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.url, "/api/admin/documents/8");
        assert_eq!(delete.body, None);
    }

    #[test]
    fn test_action_paths() {
        let cancel = MutationRequest::action("freelancer/sessions", Some("4".into()), "cancel");
        assert_eq!(cancel.method(), HttpMethod::Post);
        assert_eq!(cancel.path(), "freelancer/sessions/4/cancel");

        let scan = MutationRequest::action("admin/security", None, "scan");
        assert_eq!(scan.path(), "admin/security/scan");
    }

    #[test]
    fn test_invalidated_resources_are_deduplicated() {
        let req = MutationRequest::delete("freelancer/geolocation/zones", 1)
            .also_invalidates("freelancer/geolocation/zones")
            .also_invalidates("freelancer/geolocation/students");
        assert_eq!(
            req.invalidated_resources(),
            vec![
                "freelancer/geolocation/zones".to_string(),
                "freelancer/geolocation/students".to_string()
            ]
        );
    }

    #[test]
    fn test_pending_tokens_distinguish_rows() {
        let a = MutationRequest::delete("admin/documents", 1);
        let b = MutationRequest::delete("admin/documents", 2);
        assert_ne!(a.pending_token(), b.pending_token());
    }

    #[test]
    fn test_create_token_differs_from_row_tokens() {
        let create = MutationRequest::create("freelancer/students", &json!({}));
        let delete = MutationRequest::delete("freelancer/students", 1);
        let cancel = MutationRequest::action("freelancer/sessions", Some("1".into()), "cancel");
        assert_ne!(create.pending_token(), delete.pending_token());
        assert_ne!(create.pending_token(), cancel.pending_token());
        // The token does not depend on the form contents.
        let filled = MutationRequest::create("freelancer/students", &json!({"firstName": "Awa"}));
        assert_eq!(create.pending_token(), filled.pending_token());
    }

    #[test]
    fn test_unserializable_payload_is_never_sent_without_body() {
        let mut by_cell = HashMap::new();
        by_cell.insert((1, 2), "slot");
        let req = MutationRequest::create("freelancer/schedule", &by_cell);
        assert_eq!(req.payload, None);
        assert!(req.payload_error.is_some());
        assert!(matches!(req.to_api_request("/api"), Err(ApiError::Encode(_))));

        let fixed = req.with_payload(&json!({"day": 1}));
        assert!(fixed.to_api_request("/api").is_ok());
    }
}
