//! Tab labels and icons, keyed by tab key.

/// Translation key (section `tabs`) of the tab title.
pub fn tab_label_key(key: &str) -> &'static str {
    match key {
        "a101_profile" => "profile",
        "a102_students" => "students",
        "a103_sessions" => "sessions",
        "a104_payments" => "payments",
        "a105_schedule" => "schedule",
        "a106_resources" => "resources",
        "a107_geolocation" => "geolocation",
        "a201_users" => "users",
        "a202_schools" => "schools",
        "a203_documents" => "documents",
        "a204_commercial" => "commercial",
        "a205_communications" => "communications",
        "a206_settings" => "settings",
        "a207_health" => "health",
        "a208_security" => "security",
        _ => "unknown",
    }
}

pub fn tab_icon(key: &str) -> &'static str {
    match key {
        "a101_profile" => "user",
        "a102_students" => "users",
        "a103_sessions" => "clock",
        "a104_payments" => "payments",
        "a105_schedule" => "calendar",
        "a106_resources" => "book",
        "a107_geolocation" => "map-pin",
        "a201_users" => "users",
        "a202_schools" => "school",
        "a203_documents" => "file",
        "a204_commercial" => "briefcase",
        "a205_communications" => "mail",
        "a206_settings" => "settings",
        "a207_health" => "activity",
        "a208_security" => "shield",
        _ => "",
    }
}
