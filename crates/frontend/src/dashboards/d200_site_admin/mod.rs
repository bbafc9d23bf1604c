pub mod ui;

/// Module tabs of the site administration dashboard, in display order.
pub const TABS: &[&str] = &[
    "a201_users",
    "a202_schools",
    "a203_documents",
    "a204_commercial",
    "a205_communications",
    "a206_settings",
    "a207_health",
    "a208_security",
];
