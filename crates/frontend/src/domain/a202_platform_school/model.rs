use contracts::domain::a202_platform_school::aggregate::{
    PlatformSchool, SUBSCRIPTION_ACTIVE, SUBSCRIPTION_EXPIRED, SUBSCRIPTION_SUSPENDED,
};

use crate::shared::list_pipeline::{
    count_where, sum_by, FilterContext, Filterable, StatisticsSummary, Summarize,
};

pub const SUBSCRIPTIONS: [&str; 3] = [SUBSCRIPTION_ACTIVE, SUBSCRIPTION_EXPIRED, SUBSCRIPTION_SUSPENDED];

pub const ACTIVE_SUBSCRIPTIONS: &str = "activeSubscriptions";
pub const TOTAL_STUDENTS: &str = "totalStudents";
/// FCFA per month, all schools.
pub const MONTHLY_REVENUE: &str = "monthlyRevenue";

impl Filterable for PlatformSchool {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.subscription_status
    }
}

impl Summarize for PlatformSchool {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(
                ACTIVE_SUBSCRIPTIONS,
                count_where(items, |s| s.subscription_status == SUBSCRIPTION_ACTIVE),
            )
            .with(TOTAL_STUDENTS, sum_by(items, |s| f64::from(s.student_count)))
            .with(MONTHLY_REVENUE, sum_by(items, |s| s.monthly_revenue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn school(id: i64, name: &str, location: &str, status: &str, students: u32, revenue: f64) -> PlatformSchool {
        PlatformSchool {
            id,
            name: name.into(),
            location: location.into(),
            subscription_status: status.into(),
            student_count: students,
            monthly_revenue: revenue,
            ..Default::default()
        }
    }

    fn schools() -> Vec<PlatformSchool> {
        vec![
            school(1, "Lycée Bilingue", "Yaoundé", SUBSCRIPTION_ACTIVE, 850, 125_000.0),
            school(2, "Collège Saint-Michel", "Douala", SUBSCRIPTION_EXPIRED, 420, 0.0),
            school(3, "École Les Anges", "Yaoundé", SUBSCRIPTION_ACTIVE, 230, 45_000.0),
        ]
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn test_search_covers_location() {
        let found = filter_entities(&schools(), &FilterState::new("yaoundé", "all"), &ctx());
        assert_eq!(found.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_subscription_filter_and_search_combine() {
        let found = filter_entities(
            &schools(),
            &FilterState::new("yaoundé", SUBSCRIPTION_EXPIRED),
            &ctx(),
        );
        assert!(found.is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let summary = PlatformSchool::summarize(&schools(), &ctx());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(ACTIVE_SUBSCRIPTIONS), 2.0);
        assert_eq!(summary.get(TOTAL_STUDENTS), 1500.0);
        assert_eq!(summary.get(MONTHLY_REVENUE), 170_000.0);
    }
}
