use serde::{Deserialize, Serialize};

/// `GET|PUT /api/admin/system-settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    pub platform: PlatformSection,
    pub features: FeatureFlags,
    pub limits: PlatformLimits,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformSection {
    pub site_name: String,
    pub version: String,
    pub environment: String,
    pub maintenance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureFlags {
    pub registration_open: bool,
    pub payment_processing: bool,
    pub geo_location: bool,
    pub whatsapp_integration: bool,
    pub sms_notifications: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformLimits {
    pub max_users_per_school: u32,
    pub max_schools_per_commercial: u32,
    pub api_rate_limit: u32,
    /// Megabytes.
    pub file_upload_limit: u32,
}

/// `GET|PUT /api/admin/security-settings`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecuritySettings {
    pub authentication: AuthenticationPolicy,
    pub permissions: PermissionPolicy,
    pub encryption: EncryptionPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticationPolicy {
    pub two_factor_required: bool,
    /// Minutes.
    pub session_timeout: u32,
    pub password_min_length: u32,
    pub max_login_attempts: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionPolicy {
    pub strict_role_access: bool,
    pub admin_approval_required: bool,
    pub audit_logging: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncryptionPolicy {
    pub data_at_rest: bool,
    pub data_in_transit: bool,
    /// Hours.
    pub token_expiry: u32,
}

impl SecuritySettings {
    /// Checks the backend would reject anyway; run before sending.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.authentication.password_min_length < 6 {
            anyhow::bail!("password minimum length must be at least 6");
        }
        if self.authentication.session_timeout == 0 {
            anyhow::bail!("session timeout must be positive");
        }
        if self.authentication.max_login_attempts == 0 {
            anyhow::bail!("max login attempts must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_uses_defaults() {
        let json = r#"{"platform":{"siteName":"EDUCAFRIC","maintenance":true}}"#;
        let settings: SystemSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.platform.site_name, "EDUCAFRIC");
        assert!(settings.platform.maintenance);
        assert!(!settings.features.registration_open);
        assert_eq!(settings.limits.api_rate_limit, 0);
    }

    #[test]
    fn test_security_validation() {
        let mut s = SecuritySettings::default();
        s.authentication.password_min_length = 8;
        s.authentication.session_timeout = 30;
        s.authentication.max_login_attempts = 5;
        assert!(s.validate().is_ok());

        s.authentication.password_min_length = 4;
        assert!(s.validate().is_err());
    }
}
