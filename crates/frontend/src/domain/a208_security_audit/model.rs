use contracts::domain::a208_security_audit::aggregate::{
    is_severe, AuditLogEntry, SecurityActionResult, SecurityAlert, ALERT_OPEN, ALERT_RESOLVED,
    SEVERITY_CRITICAL, SEVERITY_HIGH, SEVERITY_INFO, SEVERITY_LOW, SEVERITY_MEDIUM,
};
use serde_json::Value;

use crate::shared::list_pipeline::{count_where, FilterContext, Filterable, StatisticsSummary, Summarize};
use crate::shared::query::normalize::normalize_object;

pub const SEVERITIES: [&str; 5] = [
    SEVERITY_INFO,
    SEVERITY_LOW,
    SEVERITY_MEDIUM,
    SEVERITY_HIGH,
    SEVERITY_CRITICAL,
];

/// Entries or alerts of `high` or `critical` severity.
pub const SEVERE: &str = "severe";
pub const OPEN_ALERTS: &str = "openAlerts";
pub const RESOLVED_ALERTS: &str = "resolvedAlerts";

impl Filterable for AuditLogEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.action.as_str(), self.user.as_str(), self.ip.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.severity
    }
}

impl Summarize for AuditLogEntry {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len()).with_count(SEVERE, count_where(items, |e| is_severe(&e.severity)))
    }
}

impl Summarize for SecurityAlert {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(SEVERE, count_where(items, |a| is_severe(&a.severity)))
            .with_count(OPEN_ALERTS, count_where(items, |a| a.status == ALERT_OPEN))
            .with_count(RESOLVED_ALERTS, count_where(items, |a| a.status == ALERT_RESOLVED))
    }
}

/// Server refusal carried in a 2xx answer (`{ "success": false, "message": .. }`).
pub fn action_refusal(response: &Value) -> Option<String> {
    let result = normalize_object::<SecurityActionResult>(response)?;
    if result.success {
        None
    } else {
        Some(result.message.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;
    use serde_json::json;

    fn entry(id: i64, action: &str, ip: &str, severity: &str) -> AuditLogEntry {
        AuditLogEntry {
            id,
            action: action.into(),
            user: "admin@educafric.com".into(),
            ip: ip.into(),
            severity: severity.into(),
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    fn logs() -> Vec<AuditLogEntry> {
        vec![
            entry(1, "LOGIN_SUCCESS", "192.168.1.10", SEVERITY_INFO),
            entry(2, "LOGIN_FAILED", "41.202.219.5", SEVERITY_HIGH),
            entry(3, "PERMISSION_DENIED", "41.202.219.5", SEVERITY_CRITICAL),
        ]
    }

    #[test]
    fn test_search_by_ip() {
        let found = filter_entities(&logs(), &FilterState::new("41.202", "all"), &ctx());
        assert_eq!(found.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);
        let critical = filter_entities(&logs(), &FilterState::new("41.202", SEVERITY_CRITICAL), &ctx());
        assert_eq!(critical.len(), 1);
    }

    #[test]
    fn test_severe_entries() {
        let summary = AuditLogEntry::summarize(&logs(), &ctx());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(SEVERE), 2.0);
    }

    #[test]
    fn test_alert_summary() {
        let alert = |status: &str, severity: &str| SecurityAlert {
            status: status.into(),
            severity: severity.into(),
            ..Default::default()
        };
        let alerts = vec![
            alert(ALERT_OPEN, SEVERITY_HIGH),
            alert(ALERT_RESOLVED, SEVERITY_MEDIUM),
            alert(ALERT_RESOLVED, SEVERITY_CRITICAL),
        ];
        let summary = SecurityAlert::summarize(&alerts, &ctx());
        assert_eq!(summary.get(OPEN_ALERTS), 1.0);
        assert_eq!(summary.get(RESOLVED_ALERTS), 2.0);
        assert_eq!(summary.get(SEVERE), 2.0);
    }

    #[test]
    fn test_action_refusal() {
        assert_eq!(action_refusal(&json!({ "success": true })), None);
        assert_eq!(
            action_refusal(&json!({ "success": false, "message": "Sauvegarde en cours" })),
            Some("Sauvegarde en cours".to_string())
        );
        assert_eq!(action_refusal(&Value::Null), None);
    }
}
