use contracts::domain::a207_system_health::aggregate::{
    ServiceStatus, SERVICE_DEGRADED, SERVICE_DOWN, SERVICE_OPERATIONAL,
};
use contracts::shared::indicators::IndicatorStatus;

use crate::shared::list_pipeline::{
    average_by, count_where, FilterContext, Filterable, StatisticsSummary, Summarize,
};

pub const SERVICE_STATES: [&str; 3] = [SERVICE_OPERATIONAL, SERVICE_DEGRADED, SERVICE_DOWN];

pub const OPERATIONAL: &str = "operational";
pub const DEGRADED: &str = "degraded";
pub const DOWN: &str = "down";
/// Mean uptime percentage of the listed services.
pub const AVERAGE_UPTIME: &str = "averageUptime";

impl Filterable for ServiceStatus {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }
}

impl Summarize for ServiceStatus {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        let uptime = average_by(items, |s| s.uptime);
        StatisticsSummary::new(items.len())
            .with_count(OPERATIONAL, count_where(items, |s| s.status == SERVICE_OPERATIONAL))
            .with_count(DEGRADED, count_where(items, |s| s.status == SERVICE_DEGRADED))
            .with_count(DOWN, count_where(items, |s| s.status == SERVICE_DOWN))
            .with(AVERAGE_UPTIME, (uptime * 100.0).round() / 100.0)
    }
}

/// Colour of a resource gauge: below 70% fine, below 90% watch, above critical.
pub fn usage_status(percent: f64) -> IndicatorStatus {
    if percent < 70.0 {
        IndicatorStatus::Good
    } else if percent < 90.0 {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Bad
    }
}

pub fn service_status(status: &str) -> IndicatorStatus {
    match status {
        SERVICE_OPERATIONAL => IndicatorStatus::Good,
        SERVICE_DEGRADED => IndicatorStatus::Warning,
        SERVICE_DOWN => IndicatorStatus::Bad,
        _ => IndicatorStatus::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn service(name: &str, status: &str, uptime: f64) -> ServiceStatus {
        ServiceStatus {
            name: name.into(),
            status: status.into(),
            uptime,
        }
    }

    fn services() -> Vec<ServiceStatus> {
        vec![
            service("API Server", SERVICE_OPERATIONAL, 99.9),
            service("Database", SERVICE_OPERATIONAL, 99.8),
            service("WhatsApp Gateway", SERVICE_DEGRADED, 97.5),
            service("SMS Provider", SERVICE_DOWN, 88.0),
        ]
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn test_service_counts() {
        let summary = ServiceStatus::summarize(&services(), &ctx());
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.get(OPERATIONAL), 2.0);
        assert_eq!(summary.get(DEGRADED), 1.0);
        assert_eq!(summary.get(DOWN), 1.0);
        // (99.9 + 99.8 + 97.5 + 88.0) / 4 = 96.3
        assert_eq!(summary.get(AVERAGE_UPTIME), 96.3);
    }

    #[test]
    fn test_status_filter() {
        let down = filter_entities(&services(), &FilterState::new("", SERVICE_DOWN), &ctx());
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].name, "SMS Provider");
    }

    #[test]
    fn test_gauge_thresholds() {
        assert_eq!(usage_status(45.0), IndicatorStatus::Good);
        assert_eq!(usage_status(70.0), IndicatorStatus::Warning);
        assert_eq!(usage_status(95.5), IndicatorStatus::Bad);
        assert_eq!(service_status("unknown"), IndicatorStatus::Neutral);
    }
}
