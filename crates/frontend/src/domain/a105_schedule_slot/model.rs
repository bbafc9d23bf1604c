use contracts::domain::a105_schedule_slot::aggregate::{
    CreateScheduleSlotDto, ScheduleSlot, STATUS_ACTIVE, STATUS_CANCELLED, STATUS_COMPLETED,
};

use crate::shared::date_utils::iso_weekday;
use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{
    count_where, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::validation;

pub const STATUSES: [&str; 3] = [STATUS_ACTIVE, STATUS_CANCELLED, STATUS_COMPLETED];
pub const KINDS: [&str; 3] = ["individual", "group", "online"];

pub const RECURRING: &str = "recurring";
pub const ACTIVE: &str = "active";
/// Active slots still ahead in the current week (today included).
pub const THIS_WEEK: &str = "thisWeek";

/// Day-of-week filter keys are the ISO day numbers `"1"`..`"7"`.
fn day_key(key: &str) -> Option<u8> {
    key.parse::<u8>().ok().filter(|d| (1..=7).contains(d))
}

impl Filterable for ScheduleSlot {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.subject.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }

    fn scoped_match(&self, key: &str, _ctx: &FilterContext) -> Option<bool> {
        day_key(key).map(|day| self.day_of_week == day)
    }
}

impl Summarize for ScheduleSlot {
    fn summarize(items: &[Self], ctx: &FilterContext) -> StatisticsSummary {
        let today = iso_weekday(ctx.today);
        StatisticsSummary::new(items.len())
            .with_count(RECURRING, count_where(items, |s| s.recurring))
            .with_count(ACTIVE, count_where(items, |s| s.status == STATUS_ACTIVE))
            .with_count(
                THIS_WEEK,
                count_where(items, |s| s.status == STATUS_ACTIVE && s.day_of_week >= today),
            )
    }
}

pub fn validate_new_slot(dto: &CreateScheduleSlotDto, lang: Language) -> Result<(), AppError> {
    validation::required(&dto.title, &tr("schedule", "slot_title", lang), lang)?;
    if day_key(&dto.day_of_week.to_string()).is_none() {
        return Err(AppError::validation(tr("schedule", "day_required", lang)));
    }
    validation::time_range(&dto.start_time, &dto.end_time, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn slot(id: i64, day: u8, status: &str, recurring: bool) -> ScheduleSlot {
        ScheduleSlot {
            id,
            title: format!("Créneau {id}"),
            subject: if id % 2 == 0 { "Physique" } else { "Chimie" }.into(),
            day_of_week: day,
            status: status.into(),
            recurring,
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        // Wednesday
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    fn slots() -> Vec<ScheduleSlot> {
        vec![
            slot(1, 1, STATUS_ACTIVE, true),
            slot(2, 3, STATUS_ACTIVE, true),
            slot(3, 5, STATUS_CANCELLED, false),
            slot(4, 6, STATUS_ACTIVE, false),
        ]
    }

    #[test]
    fn test_day_filter() {
        let friday = filter_entities(&slots(), &FilterState::new("", "5"), &ctx());
        assert_eq!(friday.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3]);
        let active = filter_entities(&slots(), &FilterState::new("", STATUS_ACTIVE), &ctx());
        assert_eq!(active.len(), 3);
    }

    #[test]
    fn test_search_by_subject() {
        let found = filter_entities(&slots(), &FilterState::new("PHYS", "all"), &ctx());
        assert_eq!(found.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_summary() {
        let summary = ScheduleSlot::summarize(&slots(), &ctx());
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.get(RECURRING), 2.0);
        assert_eq!(summary.get(ACTIVE), 3.0);
        // Wednesday and Saturday are still ahead
        assert_eq!(summary.get(THIS_WEEK), 2.0);
    }

    #[test]
    fn test_new_slot_validation() {
        let mut dto = CreateScheduleSlotDto {
            title: "Terminale C".into(),
            day_of_week: 0,
            start_time: "08:00".into(),
            end_time: "10:00".into(),
            ..Default::default()
        };
        assert!(validate_new_slot(&dto, Language::Fr).is_err());
        dto.day_of_week = 2;
        assert!(validate_new_slot(&dto, Language::Fr).is_ok());
        dto.start_time = "8h".into();
        assert!(validate_new_slot(&dto, Language::En).is_err());
    }
}
