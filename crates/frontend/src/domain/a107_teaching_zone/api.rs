use contracts::domain::a107_teaching_zone::aggregate::CreateZoneDto;

use crate::shared::query::MutationRequest;

pub const ZONES: &str = "freelancer/geolocation/zones";
pub const TRACKED_STUDENTS: &str = "freelancer/geolocation/students";

pub fn create_zone(dto: &CreateZoneDto) -> MutationRequest {
    MutationRequest::create(ZONES, dto).also_invalidates(TRACKED_STUDENTS)
}

/// Students are matched to zones server-side, so their list goes stale too.
pub fn delete_zone(id: i64) -> MutationRequest {
    MutationRequest::delete(ZONES, id).also_invalidates(TRACKED_STUDENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_delete_refreshes_both_lists() {
        assert_eq!(
            delete_zone(3).invalidated_resources(),
            vec![ZONES.to_string(), TRACKED_STUDENTS.to_string()]
        );
    }

    #[test]
    fn test_pending_delete_does_not_block_create_form() {
        let create = create_zone(&CreateZoneDto::default()).pending_token();
        assert_ne!(create, delete_zone(3).pending_token());
    }
}
