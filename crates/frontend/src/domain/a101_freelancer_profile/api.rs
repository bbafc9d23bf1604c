use contracts::domain::a101_freelancer_profile::aggregate::FreelancerProfileDto;

use crate::shared::query::MutationRequest;

pub const PROFILE: &str = "freelancer/profile";

/// `PUT freelancer/profile`; the profile is a singleton, so no id.
pub fn save_profile(dto: &FreelancerProfileDto) -> MutationRequest {
    MutationRequest::replace(PROFILE, dto)
}
