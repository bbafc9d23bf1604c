use contracts::domain::a105_schedule_slot::aggregate::CreateScheduleSlotDto;

use crate::shared::query::MutationRequest;

pub const SCHEDULE: &str = "freelancer/schedule";

pub fn create_slot(dto: &CreateScheduleSlotDto) -> MutationRequest {
    MutationRequest::create(SCHEDULE, dto)
}

pub fn delete_slot(id: i64) -> MutationRequest {
    MutationRequest::delete(SCHEDULE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_delete_does_not_block_create_form() {
        let create = create_slot(&CreateScheduleSlotDto::default()).pending_token();
        assert_ne!(create, delete_slot(7).pending_token());
    }
}
