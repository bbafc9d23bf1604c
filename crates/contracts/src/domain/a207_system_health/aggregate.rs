use serde::{Deserialize, Serialize};

pub const SERVICE_OPERATIONAL: &str = "operational";
pub const SERVICE_DEGRADED: &str = "degraded";
pub const SERVICE_DOWN: &str = "down";

/// `GET /api/admin/system-health` (polled).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemHealth {
    pub status: String,
    /// Percent.
    pub uptime: f64,
    pub last_incident: String,
    pub services: Vec<ServiceStatus>,
    pub performance: PerformanceSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStatus {
    pub name: String,
    pub status: String,
    pub uptime: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceSnapshot {
    /// Milliseconds.
    pub average_response_time: f64,
    pub error_rate: f64,
    pub throughput: f64,
}

/// `GET /api/admin/performance-metrics` (polled).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    pub response_time: ResponseTime,
    pub throughput: Throughput,
    pub error_rates: ErrorRates,
    pub resource_usage: ResourceUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseTime {
    pub current: f64,
    pub target: f64,
    pub trend: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Throughput {
    pub requests_per_second: f64,
    pub peak_hour: String,
    pub daily_requests: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorRates {
    pub total: f64,
    pub by_type: Vec<ErrorRateByType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorRateByType {
    #[serde(rename = "type")]
    pub kind: String,
    pub rate: f64,
}

/// Percentages of capacity in use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceUsage {
    pub cpu: f64,
    pub memory: f64,
    pub storage: f64,
    pub bandwidth: f64,
}
