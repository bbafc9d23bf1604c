pub mod ui;

/// Module tabs of the tutor dashboard, in display order.
pub const TABS: &[&str] = &[
    "a101_profile",
    "a102_students",
    "a103_sessions",
    "a104_payments",
    "a105_schedule",
    "a106_resources",
    "a107_geolocation",
];
