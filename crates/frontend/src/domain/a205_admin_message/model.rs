use chrono::{DateTime, Utc};
use contracts::domain::a205_admin_message::aggregate::{
    Conversation, SendMessageDto, AUDIENCES, DELIVERY_READ,
};

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{count_where, FilterContext, Filterable, StatisticsSummary, Summarize};
use crate::shared::validation;

/// Conversations whose last message was not read yet.
pub const UNREAD: &str = "unread";

/// Ready-made message bodies, `template_<key>` in the translations.
pub const TEMPLATES: [&str; 3] = ["maintenance", "new_features", "monthly_report"];

impl Filterable for Conversation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.recipient.as_str(), self.last_message.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.audience
    }
}

impl Summarize for Conversation {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(UNREAD, count_where(items, |c| c.status != DELIVERY_READ))
    }
}

/// Broadcast being composed.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub audience: String,
    pub priority: String,
    pub message: String,
}

impl Default for MessageDraft {
    fn default() -> Self {
        Self {
            audience: AUDIENCES[0].to_string(),
            priority: "normal".to_string(),
            message: String::new(),
        }
    }
}

impl MessageDraft {
    pub fn validate(&self, lang: Language) -> Result<(), AppError> {
        validation::required(&self.message, &tr("communications", "message", lang), lang)
    }

    pub fn to_dto(&self, sent_at: DateTime<Utc>) -> SendMessageDto {
        SendMessageDto {
            audience: self.audience.clone(),
            message: self.message.trim().to_string(),
            priority: self.priority.clone(),
            timestamp: sent_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use contracts::domain::a205_admin_message::aggregate::{DELIVERY_DELIVERED, DELIVERY_SENT};

    fn conversation(id: i64, recipient: &str, audience: &str, status: &str) -> Conversation {
        Conversation {
            id,
            recipient: recipient.into(),
            audience: audience.into(),
            last_message: "Réunion trimestrielle".into(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unread_counts_everything_not_read() {
        let items = vec![
            conversation(1, "Équipe commerciale", "commercial", DELIVERY_SENT),
            conversation(2, "Directeurs", "directors", DELIVERY_DELIVERED),
            conversation(3, "Enseignants", "teachers", DELIVERY_READ),
        ];
        let ctx = FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        let summary = Conversation::summarize(&items, &ctx);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(UNREAD), 2.0);
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let mut draft = MessageDraft {
            message: "   \n".into(),
            ..Default::default()
        };
        assert!(draft.validate(Language::Fr).is_err());
        draft.message = "Maintenance ce soir".into();
        assert!(draft.validate(Language::Fr).is_ok());
    }

    #[test]
    fn test_dto_is_trimmed_and_timestamped() {
        let draft = MessageDraft {
            audience: "parents".into(),
            priority: "urgent".into(),
            message: "  Fermeture exceptionnelle  ".into(),
        };
        let sent_at = Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap();
        let dto = draft.to_dto(sent_at);
        assert_eq!(dto.message, "Fermeture exceptionnelle");
        assert_eq!(dto.audience, "parents");
        assert_eq!(dto.timestamp, "2024-05-02T08:30:00+00:00");
    }
}
