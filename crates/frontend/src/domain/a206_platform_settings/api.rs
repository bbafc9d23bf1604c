use contracts::domain::a206_platform_settings::aggregate::{SecuritySettings, SystemSettings};

use crate::shared::query::MutationRequest;

pub const SYSTEM_SETTINGS: &str = "admin/system-settings";
pub const SECURITY_SETTINGS: &str = "admin/security-settings";

pub fn save_system(settings: &SystemSettings) -> MutationRequest {
    MutationRequest::replace(SYSTEM_SETTINGS, settings)
}

pub fn save_security(settings: &SecuritySettings) -> MutationRequest {
    MutationRequest::replace(SECURITY_SETTINGS, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::transport::HttpMethod;

    #[test]
    fn test_sections_are_replaced_whole() {
        let request = save_security(&SecuritySettings::default());
        assert_eq!(request.method(), HttpMethod::Put);
        assert_eq!(request.path(), "admin/security-settings");
        let body = request.payload.unwrap_or_default();
        assert!(body.get("authentication").is_some());
        assert!(body.get("encryption").is_some());
    }
}
