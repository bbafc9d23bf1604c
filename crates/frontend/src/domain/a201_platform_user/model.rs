use std::cmp::Ordering;

use contracts::domain::a201_platform_user::aggregate::{PlatformUser, STATUS_ACTIVE, STATUS_INACTIVE};

use crate::shared::list_pipeline::{count_where, FilterContext, Filterable, StatisticsSummary, Summarize};
use crate::shared::list_utils::{compare_text, Sortable};

/// Role names as the backend sends them, in the order of the role filter.
pub const ROLES: [&str; 8] = [
    "SiteAdmin",
    "Admin",
    "Director",
    "Teacher",
    "Parent",
    "Student",
    "Commercial",
    "Freelancer",
];

pub const ACTIVE: &str = "active";
pub const INACTIVE: &str = "inactive";
/// `SiteAdmin` and `Admin` accounts.
pub const ADMINS: &str = "admins";
pub const TEACHERS: &str = "teachers";

pub fn is_admin(user: &PlatformUser) -> bool {
    user.role == "SiteAdmin" || user.role == "Admin"
}

impl Filterable for PlatformUser {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
        ]
    }

    fn filter_value(&self) -> &str {
        &self.role
    }
}

impl Summarize for PlatformUser {
    fn summarize(items: &[Self], _ctx: &FilterContext) -> StatisticsSummary {
        StatisticsSummary::new(items.len())
            .with_count(ACTIVE, count_where(items, |u| u.status == STATUS_ACTIVE))
            .with_count(INACTIVE, count_where(items, |u| u.status == STATUS_INACTIVE))
            .with_count(ADMINS, count_where(items, is_admin))
            .with_count(TEACHERS, count_where(items, |u| u.role == "Teacher"))
    }
}

impl Sortable for PlatformUser {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "user" => compare_text(&self.full_name(), &other.full_name()),
            "role" => compare_text(&self.role, &other.role),
            "last_login" => self.last_login.cmp(&other.last_login),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_pipeline::{filter_entities, FilterState, TOTAL};
    use chrono::NaiveDate;

    fn user(id: i64, first: &str, role: &str, status: &str) -> PlatformUser {
        PlatformUser {
            id,
            first_name: first.into(),
            last_name: "Test".into(),
            email: format!("{}@educafric.com", first.to_lowercase()),
            role: role.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    fn users() -> Vec<PlatformUser> {
        vec![
            user(1, "Alice", "SiteAdmin", STATUS_ACTIVE),
            user(2, "Bruno", "Teacher", STATUS_ACTIVE),
            user(3, "Carine", "Teacher", STATUS_INACTIVE),
            user(4, "Didier", "Parent", "suspended"),
        ]
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
    }

    #[test]
    fn test_role_filter_is_exact() {
        let teachers = filter_entities(&users(), &FilterState::new("", "Teacher"), &ctx());
        assert_eq!(teachers.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 3]);
        let none = filter_entities(&users(), &FilterState::new("", "teacher"), &ctx());
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_by_email() {
        let found = filter_entities(&users(), &FilterState::new("CARINE@", "all"), &ctx());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);
    }

    #[test]
    fn test_summary() {
        let summary = PlatformUser::summarize(&users(), &ctx());
        assert_eq!(summary.get(TOTAL), 4.0);
        assert_eq!(summary.get(ACTIVE), 2.0);
        // "suspended" is neither active nor inactive
        assert_eq!(summary.get(INACTIVE), 1.0);
        assert_eq!(summary.get(ADMINS), 1.0);
        assert_eq!(summary.get(TEACHERS), 2.0);
    }
}
