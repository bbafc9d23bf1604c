use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::shared::list_query::FILTER_ALL;

/// Search box and filter dropdown of one list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub filter_key: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_key: FILTER_ALL.to_string(),
        }
    }
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, filter_key: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            filter_key: filter_key.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty() || self.filter_key != FILTER_ALL
    }
}

/// Values that date-scoped filters need, passed in rather than read from the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext {
    pub today: NaiveDate,
    /// `YYYY-MM`
    pub selected_month: String,
}

impl FilterContext {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_month: today.format("%Y-%m").to_string(),
        }
    }

    pub fn now() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.selected_month = month.into();
        self
    }

    /// Sunday..=Saturday week containing `today`.
    pub fn week_bounds(&self) -> (NaiveDate, NaiveDate) {
        let offset = self.today.weekday().num_days_from_sunday() as i64;
        let start = self.today - Duration::days(offset);
        (start, start + Duration::days(6))
    }

    pub fn is_this_week(&self, date: &str) -> bool {
        let (start, end) = self.week_bounds();
        parse_date(date).is_some_and(|d| d >= start && d <= end)
    }

    pub fn is_today(&self, date: &str) -> bool {
        parse_date(date) == Some(self.today)
    }

    pub fn in_selected_month(&self, date: &str) -> bool {
        !self.selected_month.is_empty() && date.starts_with(&self.selected_month)
    }
}

/// Leading `YYYY-MM-DD` of a date or ISO timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Entity that can be narrowed by a list view's search box and filter.
pub trait Filterable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Field compared for equality with a plain filter key.
    fn filter_value(&self) -> &str;

    /// Resolve keys that are not a plain field value (`today`, `thisMonth`,
    /// `public`...). `None` means "compare with `filter_value`".
    fn scoped_match(&self, _key: &str, _ctx: &FilterContext) -> Option<bool> {
        None
    }

    fn matches_filter(&self, key: &str, ctx: &FilterContext) -> bool {
        if key == FILTER_ALL || key.is_empty() {
            return true;
        }
        self.scoped_match(key, ctx)
            .unwrap_or_else(|| self.filter_value() == key)
    }

    fn matches_search(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Visible subset of `items`, in the original order.
pub fn filter_entities<T: Filterable + Clone>(
    items: &[T],
    state: &FilterState,
    ctx: &FilterContext,
) -> Vec<T> {
    let needle = state.search_term.trim().to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_filter(&state.filter_key, ctx) && item.matches_search(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Lesson {
        id: u32,
        title: &'static str,
        teacher: &'static str,
        status: &'static str,
        date: &'static str,
    }

    impl Filterable for Lesson {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.teacher]
        }

        fn filter_value(&self) -> &str {
            self.status
        }

        fn scoped_match(&self, key: &str, ctx: &FilterContext) -> Option<bool> {
            match key {
                "today" => Some(ctx.is_today(self.date)),
                "thisMonth" => Some(ctx.in_selected_month(self.date)),
                _ => None,
            }
        }
    }

    fn lessons() -> Vec<Lesson> {
        vec![
            Lesson { id: 1, title: "Algèbre", teacher: "M. Ngono", status: "scheduled", date: "2024-03-15" },
            Lesson { id: 2, title: "Physique", teacher: "Mme Biya", status: "completed", date: "2024-03-02" },
            Lesson { id: 3, title: "Anglais", teacher: "M. Ngono", status: "scheduled", date: "2024-02-28" },
            Lesson { id: 4, title: "Chimie", teacher: "Mme Eto'o", status: "cancelled", date: "2024-03-15T09:00:00Z" },
        ]
    }

    fn ctx() -> FilterContext {
        FilterContext::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn test_all_and_empty_search_is_identity() {
        let items = lessons();
        assert_eq!(filter_entities(&items, &FilterState::default(), &ctx()), items);
        assert_eq!(filter_entities(&items, &FilterState::new("   ", "all"), &ctx()), items);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let items = lessons();
        let visible = filter_entities(&items, &FilterState::new("NGONO", "all"), &ctx());
        assert_eq!(visible.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 3]);
        for item in &items {
            let matched = item.title.to_lowercase().contains("ngono")
                || item.teacher.to_lowercase().contains("ngono");
            assert_eq!(visible.contains(item), matched);
        }
    }

    #[test]
    fn test_filter_and_search_are_anded() {
        let visible = filter_entities(&lessons(), &FilterState::new("ngono", "scheduled"), &ctx());
        assert_eq!(visible.len(), 2);
        let visible = filter_entities(&lessons(), &FilterState::new("algè", "completed"), &ctx());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_scoped_keys() {
        let today = filter_entities(&lessons(), &FilterState::new("", "today"), &ctx());
        assert_eq!(today.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 4]);

        let month = filter_entities(&lessons(), &FilterState::new("", "thisMonth"), &ctx().with_month("2024-02"));
        assert_eq!(month.iter().map(|l| l.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_visible_is_ordered_subset() {
        let items = lessons();
        let visible = filter_entities(&items, &FilterState::new("i", "all"), &ctx());
        let mut cursor = items.iter();
        for v in &visible {
            assert!(cursor.any(|i| i == v));
        }
    }

    #[test]
    fn test_week_bounds_start_on_sunday() {
        // 2024-03-15 is a Friday
        let (start, end) = ctx().week_bounds();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert!(ctx().is_this_week("2024-03-10"));
        assert!(!ctx().is_this_week("2024-03-17"));
        assert!(!ctx().is_this_week("not a date"));
    }
}
