use std::cmp::Ordering;

use contracts::domain::a102_freelancer_student::aggregate::{
    CreateStudentDto, FreelancerStudent, STATUS_EXCELLENT, STATUS_GOOD, STATUS_NEEDS_ATTENTION,
};

use crate::shared::errors::AppError;
use crate::shared::i18n::{tr, Language};
use crate::shared::list_pipeline::{
    average_by, count_where, FilterContext, Filterable, StatisticsSummary, Summarize,
};
use crate::shared::list_utils::{compare_number, compare_text, Sortable};
use crate::shared::validation;

pub const STATUSES: [&str; 3] = [STATUS_EXCELLENT, STATUS_GOOD, STATUS_NEEDS_ATTENTION];

pub const EXCELLENT: &str = "excellent";
/// Students progressing normally (`good`).
pub const ACTIVE_STUDENTS: &str = "activeStudents";
pub const NEEDS_ATTENTION: &str = "needsAttention";
pub const AVERAGE_GRADE: &str = "averageGrade";

impl Filterable for FreelancerStudent {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }

    fn filter_value(&self) -> &str {
        &self.status
    }
}

impl Summarize for FreelancerStudent {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        let average = average_by(items, |s| s.average_grade);
        StatisticsSummary::new(items.len())
            .with_count(EXCELLENT, count_where(items, |s| s.status == STATUS_EXCELLENT))
            .with_count(ACTIVE_STUDENTS, count_where(items, |s| s.status == STATUS_GOOD))
            .with_count(
                NEEDS_ATTENTION,
                count_where(items, |s| s.status == STATUS_NEEDS_ATTENTION),
            )
            .with(AVERAGE_GRADE, (average * 10.0).round() / 10.0)
    }
}

impl Sortable for FreelancerStudent {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.display_name(), &other.display_name()),
            "grade" => compare_number(self.average_grade, other.average_grade),
            "attendance" => compare_number(self.attendance_rate, other.attendance_rate),
            _ => Ordering::Equal,
        }
    }
}

pub fn validate_new_student(dto: &CreateStudentDto, lang: Language) -> Result<(), AppError> {
    validation::required(&dto.first_name, &tr("students", "first_name", lang), lang)?;
    validation::required(&dto.last_name, &tr("students", "last_name", lang), lang)?;
    if !dto.email.trim().is_empty() {
        validation::email(&dto.email, lang)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState, TOTAL};
    use chrono::NaiveDate;

    fn student(id: i64, name: &str, status: &str, grade: f64) -> FreelancerStudent {
        FreelancerStudent {
            id,
            full_name: name.into(),
            email: format!("{}@mail.cm", name.to_lowercase().replace(' ', ".")),
            status: status.into(),
            average_grade: grade,
            ..Default::default()
        }
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap())
    }

    fn students() -> Vec<FreelancerStudent> {
        vec![
            student(1, "Paul Ngono", STATUS_EXCELLENT, 16.5),
            student(2, "Marie Fotso", STATUS_GOOD, 13.0),
            student(3, "Jean Ekani", STATUS_NEEDS_ATTENTION, 8.2),
        ]
    }

    #[test]
    fn test_summary_counts_and_rounded_average() {
        let summary = FreelancerStudent::summarize(&students(), &ctx());
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.get(EXCELLENT), 1.0);
        assert_eq!(summary.get(ACTIVE_STUDENTS), 1.0);
        assert_eq!(summary.get(NEEDS_ATTENTION), 1.0);
        // (16.5 + 13.0 + 8.2) / 3 = 12.5666..
        assert_eq!(summary.get(AVERAGE_GRADE), 12.6);
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = FreelancerStudent::summarize(&[], &ctx());
        assert!(summary.iter().all(|(_, v)| v == 0.0));
        assert_eq!(summary.get(TOTAL), 0.0);
    }

    #[test]
    fn test_statistics_ignore_the_filter() {
        let all = students();
        let filtered = filter_entities(&all, &FilterState::new("ngono", STATUS_EXCELLENT), &ctx());
        assert_eq!(filtered.len(), 1);
        assert_eq!(FreelancerStudent::summarize(&all, &ctx()).total(), 3);
    }

    #[test]
    fn test_search_matches_email() {
        let found = filter_entities(&students(), &FilterState::new("FOTSO@", "all"), &ctx());
        assert_eq!(found.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_new_student_requires_names() {
        let mut dto = CreateStudentDto {
            first_name: "Paul".into(),
            ..Default::default()
        };
        assert!(validate_new_student(&dto, Language::Fr).is_err());
        dto.last_name = "Ngono".into();
        assert!(validate_new_student(&dto, Language::Fr).is_ok());
        dto.email = "paul-at-mail".into();
        assert!(validate_new_student(&dto, Language::Fr).is_err());
    }
}
