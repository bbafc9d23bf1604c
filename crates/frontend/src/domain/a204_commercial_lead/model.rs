use contracts::domain::a204_commercial_lead::aggregate::{
    CommercialLead, STATUSES, STATUS_CONVERTED, STATUS_LOST,
};
use contracts::shared::list_query::ListQuery;

use crate::shared::list_pipeline::{
    count_where, percentage, sum_by, FilterContext, FilterState, StatisticsSummary, Summarize,
};

/// Rows per page requested from the leads endpoint.
pub const PAGE_SIZE: u32 = 20;

pub const SCHOOL_TYPES: [&str; 2] = ["public", "private"];

pub const CONVERTED: &str = "converted";
/// Percentage of leads converted, one decimal.
pub const CONVERSION_RATE: &str = "conversionRate";
/// FCFA, lost leads excluded.
pub const PIPELINE_VALUE: &str = "pipelineValue";

/// Search and status are applied by the server.
pub fn lead_query(page: u32, filter: &FilterState, school_type: &str) -> ListQuery {
    ListQuery::paged(page, PAGE_SIZE)
        .with_search(&filter.search_term)
        .with_status(&filter.filter_key)
        .with_kind(school_type)
}

impl Summarize for CommercialLead {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        let converted = count_where(items, |l| l.status == STATUS_CONVERTED);
        let open: Vec<&CommercialLead> = items.iter().filter(|l| l.status != STATUS_LOST).collect();
        let rate = percentage(converted, items.len());
        STATUSES.iter().fold(
            StatisticsSummary::new(items.len())
                .with_count(CONVERTED, converted)
                .with(CONVERSION_RATE, (rate * 10.0).round() / 10.0)
                .with(PIPELINE_VALUE, sum_by(&open, |l| l.estimated_value)),
            |summary, status| {
                summary.with_count(*status, count_where(items, |l| l.status == *status))
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a204_commercial_lead::aggregate::{
        STATUS_CONTACTED, STATUS_NEGOTIATING, STATUS_PROSPECT,
    };
    use chrono::NaiveDate;

    fn lead(id: i64, status: &str, value: f64) -> CommercialLead {
        CommercialLead {
            id,
            company_name: format!("École {id}"),
            status: status.into(),
            estimated_value: value,
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn test_pipeline_excludes_lost_leads() {
        let leads = vec![
            lead(1, STATUS_PROSPECT, 500_000.0),
            lead(2, STATUS_NEGOTIATING, 1_200_000.0),
            lead(3, STATUS_LOST, 900_000.0),
            lead(4, STATUS_CONVERTED, 750_000.0),
            lead(5, STATUS_CONTACTED, 0.0),
            lead(6, STATUS_CONVERTED, 250_000.0),
        ];
        let summary = CommercialLead::summarize(&leads, &ctx());
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.get(CONVERTED), 2.0);
        // 2 / 6 = 33.33..%
        assert_eq!(summary.get(CONVERSION_RATE), 33.3);
        assert_eq!(summary.get(PIPELINE_VALUE), 2_700_000.0);
        assert_eq!(summary.get(STATUS_LOST), 1.0);
        assert_eq!(summary.get(STATUS_PROSPECT), 1.0);
    }

    #[test]
    fn test_empty_page_has_zero_rate() {
        let summary = CommercialLead::summarize(&[], &ctx());
        assert_eq!(summary.get(CONVERSION_RATE), 0.0);
        assert_eq!(summary.get(PIPELINE_VALUE), 0.0);
    }

    #[test]
    fn test_query_carries_filter_to_the_server() {
        let filter = FilterState::new(" Lycée ", STATUS_NEGOTIATING);
        let q = lead_query(3, &filter, "all");
        assert_eq!(q.page, Some(3));
        assert_eq!(q.limit, Some(20));
        assert_eq!(q.search.as_deref(), Some("Lycée"));
        assert_eq!(q.status.as_deref(), Some(STATUS_NEGOTIATING));
        assert!(q.kind.is_none());

        let unfiltered = lead_query(1, &FilterState::default(), "private");
        assert!(unfiltered.status.is_none());
        assert_eq!(unfiltered.kind.as_deref(), Some("private"));
    }
}
