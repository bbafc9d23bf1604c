use serde::{Deserialize, Serialize};

/// Tutor profile as returned by `GET /api/freelancer/profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelancerProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub location: String,
    pub hourly_rate: f64,
    pub experience_years: u32,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
    pub rating: f64,
    pub total_students: u32,
}

impl FreelancerProfile {
    /// Share of the editable profile fields that are filled in, 0..=100.
    pub fn completeness_percent(&self) -> f64 {
        let checks = [
            !self.first_name.trim().is_empty(),
            !self.last_name.trim().is_empty(),
            !self.email.trim().is_empty(),
            !self.phone.trim().is_empty(),
            !self.bio.trim().is_empty(),
            !self.location.trim().is_empty(),
            self.hourly_rate > 0.0,
            !self.specializations.is_empty(),
            !self.languages.is_empty(),
        ];
        let filled = checks.iter().filter(|c| **c).count();
        (filled as f64 / checks.len() as f64 * 100.0).round()
    }
}

/// Body of `PUT /api/freelancer/profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreelancerProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub location: String,
    pub hourly_rate: f64,
    pub experience_years: u32,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
}

impl From<&FreelancerProfile> for FreelancerProfileDto {
    fn from(p: &FreelancerProfile) -> Self {
        Self {
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            bio: p.bio.clone(),
            location: p.location.clone(),
            hourly_rate: p.hourly_rate,
            experience_years: p.experience_years,
            specializations: p.specializations.clone(),
            languages: p.languages.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_is_zero_percent_complete() {
        assert_eq!(FreelancerProfile::default().completeness_percent(), 0.0);
    }

    #[test]
    fn test_partial_profile_completeness() {
        let profile = FreelancerProfile {
            first_name: "Awa".into(),
            last_name: "Mballa".into(),
            email: "awa@example.com".into(),
            ..Default::default()
        };
        // 3 of 9 fields
        assert_eq!(profile.completeness_percent(), 33.0);
    }
}
