//! Checks run before a write is dispatched; a failure means no request is sent.

use contracts::domain::a107_teaching_zone::aggregate::Coordinates;

use crate::shared::date_utils::parse_time;
use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};

pub fn required(value: &str, label: &str, lang: Language) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::validation(format!(
            "{}: {}",
            label,
            tr("validation", "required", lang)
        )))
    } else {
        Ok(())
    }
}

pub fn email(value: &str, lang: Language) -> Result<(), AppError> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.ends_with('.'));
    if valid {
        Ok(())
    } else {
        Err(AppError::validation(tr("validation", "invalid_email", lang)))
    }
}

/// Both times parse and `start` is strictly before `end`.
pub fn time_range(start: &str, end: &str, lang: Language) -> Result<(), AppError> {
    match (parse_time(start), parse_time(end)) {
        (Some(s), Some(e)) if s < e => Ok(()),
        (Some(_), Some(_)) => Err(AppError::validation(tr("validation", "time_order", lang))),
        _ => Err(AppError::validation(tr("validation", "invalid_time", lang))),
    }
}

/// Latitude/longitude typed by the user, or picked from the device position.
pub fn coordinates(lat: &str, lng: &str, lang: Language) -> Result<Coordinates, AppError> {
    let missing = || AppError::validation(tr("validation", "coordinates_required", lang));
    let lat: f64 = lat.trim().parse().map_err(|_| missing())?;
    let lng: f64 = lng.trim().parse().map_err(|_| missing())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(missing());
    }
    Ok(Coordinates { lat, lng })
}

pub fn positive(value: f64, label: &str, lang: Language) -> Result<(), AppError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{}: {}",
            label,
            tr("validation", "positive", lang)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("Awa", "Prénom", Language::Fr).is_ok());
        let err = required("   ", "Prénom", Language::Fr).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.starts_with("Prénom: ")));
    }

    #[test]
    fn test_email() {
        assert!(email("awa@educafric.com", Language::Fr).is_ok());
        assert!(email("awa@educafric", Language::Fr).is_err());
        assert!(email("@educafric.com", Language::Fr).is_err());
        assert!(email("", Language::En).is_err());
    }

    #[test]
    fn test_time_range() {
        assert!(time_range("09:00", "10:30", Language::Fr).is_ok());
        assert!(time_range("10:30", "09:00", Language::Fr).is_err());
        assert!(time_range("10:00", "10:00", Language::Fr).is_err());
        assert!(time_range("", "10:00", Language::Fr).is_err());
    }

    #[test]
    fn test_coordinates() {
        let c = coordinates("3.8480", "11.5021", Language::Fr).unwrap();
        assert_eq!(c, Coordinates { lat: 3.848, lng: 11.5021 });
        assert!(coordinates("", "11.5", Language::Fr).is_err());
        assert!(coordinates("95", "11.5", Language::Fr).is_err());
    }

    #[test]
    fn test_positive() {
        assert!(positive(5000.0, "Tarif", Language::Fr).is_ok());
        assert!(positive(0.0, "Tarif", Language::Fr).is_err());
    }
}
