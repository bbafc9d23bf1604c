use contracts::domain::a106_tutor_resource::aggregate::{ResourceVisibilityDto, TutorResource};

use crate::shared::query::MutationRequest;

pub const RESOURCES: &str = "freelancer/resources";

/// Flip a resource between public and private.
pub fn toggle_visibility(resource: &TutorResource) -> MutationRequest {
    MutationRequest::patch(
        RESOURCES,
        resource.id,
        &ResourceVisibilityDto {
            is_public: !resource.is_public,
        },
    )
}

pub fn delete_resource(id: i64) -> MutationRequest {
    MutationRequest::delete(RESOURCES, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_visibility_patch_sends_the_flipped_flag() {
        let resource = TutorResource {
            id: 4,
            is_public: true,
            ..Default::default()
        };
        let request = toggle_visibility(&resource);
        assert_eq!(request.path(), "freelancer/resources/4");
        assert_eq!(request.payload, Some(json!({ "isPublic": false })));
    }
}
