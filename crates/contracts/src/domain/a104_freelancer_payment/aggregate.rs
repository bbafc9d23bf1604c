use serde::{Deserialize, Serialize};

pub const STATUS_PAID: &str = "paid";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_OVERDUE: &str = "overdue";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Payment received (or expected) by the tutor (`GET /api/freelancer/payments`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelancerPayment {
    pub id: i64,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub method: String,
    pub client_name: String,
    pub date: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub invoice_number: String,
    pub due_date: String,
}
