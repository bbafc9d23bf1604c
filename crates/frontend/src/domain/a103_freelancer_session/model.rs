use contracts::domain::a103_freelancer_session::aggregate::{
    CreateSessionDto, FreelancerSession, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_ONGOING,
    STATUS_SCHEDULED,
};

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{
    count_where, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::validation;

pub const FILTER_TODAY: &str = "today";

/// Filter dropdown values: the date scope first, then the statuses.
pub const FILTERS: [&str; 5] = [
    FILTER_TODAY,
    STATUS_SCHEDULED,
    STATUS_ONGOING,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

pub const KINDS: [&str; 3] = ["individual", "group", "online"];

pub const COMPLETED: &str = "completed";
pub const SCHEDULED: &str = "scheduled";
pub const THIS_WEEK: &str = "thisWeek";

impl Filterable for FreelancerSession {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.subject.as_str(),
            self.student_name.as_str(),
        ]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }

    fn scoped_match(&self, key: &str, ctx: &FilterContext) -> Option<bool> {
        (key == FILTER_TODAY).then(|| ctx.is_today(&self.date))
    }
}

impl Summarize for FreelancerSession {
    fn summarize(items: &[Self], ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(COMPLETED, count_where(items, |s| s.status == STATUS_COMPLETED))
            .with_count(SCHEDULED, count_where(items, |s| s.status == STATUS_SCHEDULED))
            .with_count(THIS_WEEK, count_where(items, |s| ctx.is_this_week(&s.date)))
    }
}

/// Only sessions still ahead can be cancelled.
pub fn can_cancel(session: &FreelancerSession) -> bool {
    session.status == STATUS_SCHEDULED
}

pub fn validate_new_session(dto: &CreateSessionDto, lang: Language) -> Result<(), AppError> {
    validation::required(&dto.title, &tr("sessions", "session_title", lang), lang)?;
    validation::required(&dto.date, &tr("sessions", "date", lang), lang)?;
    validation::time_range(&dto.start_time, &dto.end_time, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn session(id: i64, date: &str, status: &str) -> FreelancerSession {
        FreelancerSession {
            id,
            title: format!("Cours {id}"),
            subject: "Mathématiques".into(),
            student_name: "Paul Ngono".into(),
            date: date.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        // Wednesday; the week runs 2024-03-10 .. 2024-03-16
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    fn sessions() -> Vec<FreelancerSession> {
        vec![
            session(1, "2024-03-13", STATUS_SCHEDULED),
            session(2, "2024-03-11", STATUS_COMPLETED),
            session(3, "2024-03-20", STATUS_SCHEDULED),
            session(4, "2024-03-13T16:00:00", STATUS_CANCELLED),
        ]
    }

    #[test]
    fn test_today_filter_uses_the_date_prefix() {
        let today = filter_entities(&sessions(), &FilterState::new("", FILTER_TODAY), &ctx());
        assert_eq!(today.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_status_filter_is_exact() {
        let done = filter_entities(&sessions(), &FilterState::new("", STATUS_COMPLETED), &ctx());
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 2);
    }

    #[test]
    fn test_summary() {
        let summary = FreelancerSession::summarize(&sessions(), &ctx());
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.get(COMPLETED), 1.0);
        assert_eq!(summary.get(SCHEDULED), 2.0);
        assert_eq!(summary.get(THIS_WEEK), 3.0);
    }

    #[test]
    fn test_new_session_needs_ordered_times() {
        let mut dto = CreateSessionDto {
            title: "Algèbre".into(),
            date: "2024-03-14".into(),
            start_time: "16:00".into(),
            end_time: "15:00".into(),
            ..Default::default()
        };
        assert!(validate_new_session(&dto, Language::Fr).is_err());
        dto.end_time = "17:30".into();
        assert!(validate_new_session(&dto, Language::Fr).is_ok());
    }

    #[test]
    fn test_only_scheduled_sessions_can_be_cancelled() {
        assert!(can_cancel(&session(1, "2024-03-13", STATUS_SCHEDULED)));
        assert!(!can_cancel(&session(2, "2024-03-11", STATUS_COMPLETED)));
    }
}
