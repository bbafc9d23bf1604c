use contracts::domain::a103_freelancer_session::aggregate::CreateSessionDto;

use crate::shared::query::MutationRequest;

pub const SESSIONS: &str = "freelancer/sessions";

pub fn create_session(dto: &CreateSessionDto) -> MutationRequest {
    MutationRequest::create(SESSIONS, dto)
}

/// `POST freelancer/sessions/<id>/cancel`
pub fn cancel_session(id: i64) -> MutationRequest {
    MutationRequest::action(SESSIONS, Some(id.to_string()), "cancel")
}

pub fn delete_session(id: i64) -> MutationRequest {
    MutationRequest::delete(SESSIONS, id)
}
