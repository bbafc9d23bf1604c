use contracts::domain::a101_freelancer_profile::aggregate::{
    FreelancerProfile, FreelancerProfileDto,
};

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::validation;

/// Comma separated input to a tag list, blanks and duplicates removed.
pub fn split_tags(text: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

pub fn validate_profile(dto: &FreelancerProfileDto, lang: Language) -> Result<(), AppError> {
    validation::required(&dto.first_name, &tr("profile", "first_name", lang), lang)?;
    validation::required(&dto.last_name, &tr("profile", "last_name", lang), lang)?;
    validation::required(&dto.email, &tr("profile", "email", lang), lang)?;
    validation::email(&dto.email, lang)?;
    if dto.hourly_rate != 0.0 {
        validation::positive(dto.hourly_rate, &tr("profile", "hourly_rate", lang), lang)?;
    }
    Ok(())
}

/// Profile being edited; tag lists stay as typed text until saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub dto: FreelancerProfileDto,
    pub specializations: String,
    pub languages: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &FreelancerProfile) -> Self {
        Self {
            dto: FreelancerProfileDto::from(profile),
            specializations: join_tags(&profile.specializations),
            languages: join_tags(&profile.languages),
        }
    }

    pub fn to_dto(&self) -> FreelancerProfileDto {
        FreelancerProfileDto {
            specializations: split_tags(&self.specializations),
            languages: split_tags(&self.languages),
            ..self.dto.clone()
        }
    }

    pub fn validate(&self, lang: Language) -> Result<(), AppError> {
        validate_profile(&self.to_dto(), lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_text() {
        let tags = split_tags(" Mathématiques, physique ,, Physique,Chimie ");
        assert_eq!(tags, vec!["Mathématiques", "physique", "Chimie"]);
        assert_eq!(join_tags(&tags), "Mathématiques, physique, Chimie");
        assert!(split_tags("  ").is_empty());
    }

    #[test]
    fn test_form_keeps_tags_as_text() {
        let profile = FreelancerProfile {
            first_name: "Awa".into(),
            specializations: vec!["Maths".into(), "SVT".into()],
            ..Default::default()
        };
        let mut form = ProfileForm::from_profile(&profile);
        assert_eq!(form.specializations, "Maths, SVT");
        form.languages = "Français, English,".into();
        let dto = form.to_dto();
        assert_eq!(dto.languages, vec!["Français", "English"]);
        assert_eq!(dto.first_name, "Awa");
    }

    #[test]
    fn test_profile_validation() {
        let mut dto = FreelancerProfileDto {
            first_name: "Awa".into(),
            last_name: "Mballa".into(),
            ..Default::default()
        };
        assert!(validate_profile(&dto, Language::Fr).is_err());
        dto.email = "awa@educafric.com".into();
        assert!(validate_profile(&dto, Language::Fr).is_ok());
        dto.hourly_rate = -1.0;
        assert!(validate_profile(&dto, Language::Fr).is_err());
    }
}
