use crate::shared::query::MutationRequest;

pub const PAYMENTS: &str = "freelancer/payments";

/// Ask the backend to send a payment reminder to the client.
pub fn remind_payment(id: i64) -> MutationRequest {
    MutationRequest::action(PAYMENTS, Some(id.to_string()), "remind")
}
