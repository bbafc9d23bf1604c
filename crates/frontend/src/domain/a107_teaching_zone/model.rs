use contracts::domain::a107_teaching_zone::aggregate::{
    CreateZoneDto, TeachingZone, TrackedStudent, STUDENT_ABSENT, STUDENT_ACTIVE,
    STUDENT_COMPLETED, STUDENT_IN_SESSION,
};

use crate::shared::errors::AppError;
use crate::shared::forms::parse_number;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{
    count_where, sum_by, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::validation;

pub const ZONE_KINDS: [&str; 4] = ["home", "school", "library", "online"];
pub const STUDENT_STATUSES: [&str; 4] = [
    STUDENT_IN_SESSION,
    STUDENT_ACTIVE,
    STUDENT_COMPLETED,
    STUDENT_ABSENT,
];

pub const STUDENTS_TODAY: &str = "studentsToday";
/// Students in a session or on their way to one.
pub const ACTIVE_STUDENTS: &str = "activeStudents";
pub const COMPLETED: &str = "completed";

const DEFAULT_RADIUS_M: f64 = 500.0;

impl Filterable for TeachingZone {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.kind
    }
}

impl Summarize for TeachingZone {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with(STUDENTS_TODAY, sum_by(items, |z| f64::from(z.students_today)))
    }
}

impl Filterable for TrackedStudent {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.student_name.as_str(), self.subject.as_str()]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }
}

impl Summarize for TrackedStudent {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(
                ACTIVE_STUDENTS,
                count_where(items, |s| {
                    s.status == STUDENT_IN_SESSION || s.status == STUDENT_ACTIVE
                }),
            )
            .with_count(COMPLETED, count_where(items, |s| s.status == STUDENT_COMPLETED))
    }
}

/// Zone form as typed; coordinates stay text until submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneDraft {
    pub name: String,
    pub kind: String,
    pub lat: String,
    pub lng: String,
    pub radius: String,
    pub description: String,
}

impl Default for ZoneDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ZONE_KINDS[0].to_string(),
            lat: String::new(),
            lng: String::new(),
            radius: format!("{}", DEFAULT_RADIUS_M),
            description: String::new(),
        }
    }
}

impl ZoneDraft {
    /// Request body; fails when the name or a usable position is missing.
    pub fn to_dto(&self, lang: Language) -> Result<CreateZoneDto, AppError> {
        validation::required(&self.name, &tr("geolocation", "zone_name", lang), lang)?;
        let coordinates = validation::coordinates(&self.lat, &self.lng, lang)?;
        let radius: f64 = parse_number(&self.radius);
        Ok(CreateZoneDto {
            name: self.name.trim().to_string(),
            kind: self.kind.clone(),
            coordinates,
            radius: if radius > 0.0 { radius } else { DEFAULT_RADIUS_M },
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState};
    use chrono::NaiveDate;

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    fn tracked(id: i64, name: &str, status: &str) -> TrackedStudent {
        TrackedStudent {
            id,
            student_name: name.into(),
            subject: "Anglais".into(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_zone_requires_coordinates() {
        let mut draft = ZoneDraft {
            name: "Bastos".into(),
            ..Default::default()
        };
        assert!(draft.to_dto(Language::Fr).is_err());

        draft.lat = "3.8867".into();
        draft.lng = "11.5021".into();
        draft.radius = "".into();
        let dto = draft.to_dto(Language::Fr).unwrap();
        assert_eq!(dto.coordinates.lat, 3.8867);
        assert_eq!(dto.radius, DEFAULT_RADIUS_M);
    }

    #[test]
    fn test_zone_requires_a_name() {
        let draft = ZoneDraft {
            lat: "4.05".into(),
            lng: "9.7".into(),
            ..Default::default()
        };
        assert!(draft.to_dto(Language::En).is_err());
    }

    #[test]
    fn test_zone_summary() {
        let zones = vec![
            TeachingZone {
                id: 1,
                students_today: 3,
                ..Default::default()
            },
            TeachingZone {
                id: 2,
                students_today: 2,
                ..Default::default()
            },
        ];
        let summary = TeachingZone::summarize(&zones, &ctx());
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.get(STUDENTS_TODAY), 5.0);
        assert_eq!(TeachingZone::summarize(&[], &ctx()).get(STUDENTS_TODAY), 0.0);
    }

    #[test]
    fn test_student_status_filter_and_summary() {
        let students = vec![
            tracked(1, "Paul Ngono", STUDENT_IN_SESSION),
            tracked(2, "Marie Fotso", STUDENT_ACTIVE),
            tracked(3, "Jean Ekani", STUDENT_COMPLETED),
            tracked(4, "Aïcha Bello", STUDENT_ABSENT),
        ];
        let summary = TrackedStudent::summarize(&students, &ctx());
        assert_eq!(summary.get(ACTIVE_STUDENTS), 2.0);
        assert_eq!(summary.get(COMPLETED), 1.0);

        let absent = filter_entities(&students, &FilterState::new("", STUDENT_ABSENT), &ctx());
        assert_eq!(absent.len(), 1);
        let by_name = filter_entities(&students, &FilterState::new("aïcha", "all"), &ctx());
        assert_eq!(by_name[0].id, 4);
    }
}
