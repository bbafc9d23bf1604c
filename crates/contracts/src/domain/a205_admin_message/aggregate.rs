use serde::{Deserialize, Serialize};

pub const DELIVERY_SENT: &str = "sent";
pub const DELIVERY_DELIVERED: &str = "delivered";
pub const DELIVERY_READ: &str = "read";

/// Audiences a broadcast can target.
pub const AUDIENCES: &[&str] = &["commercial", "directors", "teachers", "parents", "all"];

pub const PRIORITIES: &[&str] = &["low", "normal", "high", "urgent"];

/// Outgoing conversation thread (`GET /api/admin/communications/conversations`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conversation {
    pub id: i64,
    pub recipient: String,
    #[serde(rename = "type")]
    pub audience: String,
    pub last_message: String,
    pub timestamp: String,
    /// Delivery state: `sent`, `delivered` or `read`.
    pub status: String,
    pub priority: String,
}

/// Body of `POST /api/admin/communications/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageDto {
    #[serde(rename = "type")]
    pub audience: String,
    pub message: String,
    pub priority: String,
    /// RFC 3339 client timestamp.
    pub timestamp: String,
}
