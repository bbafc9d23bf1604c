use serde::{Deserialize, Serialize};

pub const SEVERITY_INFO: &str = "info";
pub const SEVERITY_LOW: &str = "low";
pub const SEVERITY_MEDIUM: &str = "medium";
pub const SEVERITY_HIGH: &str = "high";
pub const SEVERITY_CRITICAL: &str = "critical";

pub const ALERT_OPEN: &str = "open";
pub const ALERT_RESOLVED: &str = "resolved";

/// `GET /api/admin/security/audit-logs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogEntry {
    pub id: i64,
    pub action: String,
    pub user: String,
    pub ip: String,
    pub severity: String,
    pub timestamp: String,
}

/// `GET /api/admin/security/alerts`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecurityAlert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub status: String,
    pub created_at: String,
}

/// Response of `POST /api/admin/security/<action>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityActionResult {
    pub success: bool,
    pub message: Option<String>,
}

/// Maintenance actions exposed to administrators.
pub const ACTIONS: &[&str] = &["scan", "clear-sessions", "rotate-keys", "backup"];

pub fn is_severe(severity: &str) -> bool {
    severity == SEVERITY_HIGH || severity == SEVERITY_CRITICAL
}
