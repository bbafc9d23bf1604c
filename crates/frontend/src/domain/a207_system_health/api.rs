pub const SYSTEM_HEALTH: &str = "admin/system-health";
pub const PERFORMANCE: &str = "admin/performance-metrics";
