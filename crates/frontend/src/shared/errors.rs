use thiserror::Error;

use crate::shared::i18n::{tr, Language};

/// Failure of one HTTP exchange with the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16 },
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Maps a non-2xx response. 401/403 are authorization failures; for the
    /// rest the backend's `message`/`error` field is used when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 || status == 403 {
            return ApiError::Unauthorized { status };
        }
        ApiError::Status {
            status,
            message: server_message(body),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

fn server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(msg) = value.get(field).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.chars().count() > 200 {
        let cut: String = trimmed.chars().take(200).collect();
        format!("{}…", cut)
    } else {
        trimmed.to_string()
    }
}

/// Errors a dashboard module can surface to the user.
///
/// Empty results are not errors; they are a view state of their own.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("fetch failed: {0}")]
    Fetch(ApiError),
    #[error("mutation failed: {0}")]
    Mutation(ApiError),
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Localized text for placeholders and notifications.
    pub fn user_message(&self, lang: Language) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Fetch(e) | AppError::Mutation(e) if e.is_unauthorized() => {
                tr("common", "error_unauthorized", lang)
            }
            AppError::Fetch(e) => format!("{} ({})", tr("common", "error_fetch", lang), e),
            AppError::Mutation(e) => format!("{} ({})", tr("common", "error_mutation", lang), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses() {
        assert!(ApiError::from_status(401, "").is_unauthorized());
        assert!(ApiError::from_status(403, "forbidden").is_unauthorized());
        assert!(!ApiError::from_status(500, "").is_unauthorized());
    }

    #[test]
    fn test_server_message_is_extracted() {
        let err = ApiError::from_status(422, r#"{"message":"Email déjà utilisé"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "Email déjà utilisé".to_string()
            }
        );
        let err = ApiError::from_status(500, "  Internal Server Error ");
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = AppError::validation("Message vide");
        assert_eq!(err.user_message(Language::Fr), "Message vide");
    }
}
