use leptos::prelude::*;

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};

/// What a form does with its input after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSuccess {
    /// Creation forms start over.
    Reset,
    /// Edit forms keep showing what was saved.
    Keep,
}

/// User input of a create/edit form plus the last error shown under it.
///
/// The input is only ever cleared by a successful write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft<T> {
    pub value: T,
    pub error: Option<AppError>,
}

impl<T: Clone + Default> FormDraft<T> {
    pub fn new(value: T) -> Self {
        Self { value, error: None }
    }

    /// Payload to send, or the validation error (also kept for inline display).
    pub fn submission(
        &mut self,
        validate: impl FnOnce(&T) -> Result<(), AppError>,
    ) -> Result<T, AppError> {
        match validate(&self.value) {
            Ok(()) => {
                self.error = None;
                Ok(self.value.clone())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Apply the outcome of the write.
    pub fn settle<V>(&mut self, result: &Result<V, AppError>, after: AfterSuccess) {
        match result {
            Ok(_) => {
                self.error = None;
                if after == AfterSuccess::Reset {
                    self.value = T::default();
                }
            }
            Err(e) => self.error = Some(e.clone()),
        }
    }
}

/// Title and body of the notification announcing rejected input.
pub fn validation_notice(error: &AppError, lang: Language) -> (String, String) {
    (tr("common", "error_validation", lang), error.user_message(lang))
}

/// Two-way binding of one text input to a field of a form draft.
#[derive(Clone, Copy)]
pub struct TextBinding {
    pub value: Signal<String>,
    pub set: Callback<String>,
}

#[derive(Clone, Copy)]
pub struct FlagBinding {
    pub checked: Signal<bool>,
    pub set: Callback<bool>,
}

pub fn bind_text<T>(
    draft: RwSignal<FormDraft<T>>,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> TextBinding
where
    T: Send + Sync + 'static,
{
    TextBinding {
        value: Signal::derive(move || draft.with(|d| get(&d.value))),
        set: Callback::new(move |v: String| draft.update(|d| set(&mut d.value, v))),
    }
}

pub fn bind_flag<T>(
    draft: RwSignal<FormDraft<T>>,
    get: fn(&T) -> bool,
    set: fn(&mut T, bool),
) -> FlagBinding
where
    T: Send + Sync + 'static,
{
    FlagBinding {
        checked: Signal::derive(move || draft.with(|d| get(&d.value))),
        set: Callback::new(move |v: bool| draft.update(|d| set(&mut d.value, v))),
    }
}

/// Parse a numeric input; blank or invalid text reads as zero.
pub fn parse_number<N: std::str::FromStr + Default>(value: &str) -> N {
    value.trim().replace(',', ".").parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ApiError;
    use contracts::domain::a101_freelancer_profile::aggregate::FreelancerProfileDto;

    fn edited() -> FreelancerProfileDto {
        FreelancerProfileDto {
            first_name: "Awa".into(),
            last_name: "Mballa".into(),
            email: "awa@educafric.com".into(),
            bio: "Professeure de mathématiques".into(),
            hourly_rate: 7500.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_failed_write_preserves_input() {
        let mut draft = FormDraft::new(edited());
        let payload = draft.submission(|_| Ok(())).unwrap();
        assert_eq!(payload, edited());

        let result: Result<(), AppError> = Err(AppError::Mutation(ApiError::Status {
            status: 500,
            message: "db down".into(),
        }));
        draft.settle(&result, AfterSuccess::Reset);
        assert_eq!(draft.value, edited());
        assert!(draft.error.is_some());
    }

    #[test]
    fn test_successful_write_resets_creation_form() {
        let mut draft = FormDraft::new(edited());
        draft.settle(&Ok::<_, AppError>(()), AfterSuccess::Reset);
        assert_eq!(draft.value, FreelancerProfileDto::default());

        let mut draft = FormDraft::new(edited());
        draft.settle(&Ok::<_, AppError>(()), AfterSuccess::Keep);
        assert_eq!(draft.value, edited());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<f64>("7,5"), 7.5);
        assert_eq!(parse_number::<u32>(" 12 "), 12);
        assert_eq!(parse_number::<u32>("abc"), 0);
    }

    #[test]
    fn test_invalid_input_is_not_submitted() {
        let mut draft = FormDraft::new(FreelancerProfileDto::default());
        let payload = draft.submission(|v| {
            if v.first_name.is_empty() {
                Err(AppError::validation("Prénom requis"))
            } else {
                Ok(())
            }
        });
        assert_eq!(payload, Err(AppError::validation("Prénom requis")));
        assert_eq!(draft.error, Some(AppError::validation("Prénom requis")));
    }

    #[test]
    fn test_rejected_input_is_announced() {
        let mut draft = FormDraft::new(FreelancerProfileDto::default());
        let err = draft
            .submission(|_| Err(AppError::validation("Tarif horaire invalide")))
            .unwrap_err();
        let (title, body) = validation_notice(&err, Language::Fr);
        assert_eq!(title, "Saisie invalide");
        assert_eq!(body, "Tarif horaire invalide");
        assert_eq!(validation_notice(&err, Language::En).0, "Invalid input");
    }
}
