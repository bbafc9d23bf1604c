use contracts::domain::a206_platform_settings::aggregate::{SecuritySettings, SystemSettings};

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::validation;

pub fn validate_system(settings: &SystemSettings, lang: Language) -> Result<(), AppError> {
    validation::required(&settings.platform.site_name, &tr("settings", "site_name", lang), lang)?;
    let limits = &settings.limits;
    for (value, key) in [
        (limits.max_users_per_school, "max_users_per_school"),
        (limits.max_schools_per_commercial, "max_schools_per_commercial"),
        (limits.api_rate_limit, "api_rate_limit"),
        (limits.file_upload_limit, "file_upload_limit"),
    ] {
        validation::positive(f64::from(value), &tr("settings", key, lang), lang)?;
    }
    Ok(())
}

/// Security policy checks shared with the contracts crate, as a form error.
pub fn validate_security(settings: &SecuritySettings) -> Result<(), AppError> {
    settings
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SystemSettings {
        let mut s = SystemSettings::default();
        s.platform.site_name = "EDUCAFRIC".into();
        s.limits.max_users_per_school = 1000;
        s.limits.max_schools_per_commercial = 50;
        s.limits.api_rate_limit = 1000;
        s.limits.file_upload_limit = 10;
        s
    }

    #[test]
    fn test_system_limits_must_be_positive() {
        assert!(validate_system(&system(), Language::Fr).is_ok());
        let mut s = system();
        s.limits.api_rate_limit = 0;
        assert!(validate_system(&s, Language::Fr).is_err());
        let mut s = system();
        s.platform.site_name = " ".into();
        assert!(validate_system(&s, Language::En).is_err());
    }

    #[test]
    fn test_security_error_becomes_validation_error() {
        let err = validate_security(&SecuritySettings::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg.contains("password")));
    }
}
