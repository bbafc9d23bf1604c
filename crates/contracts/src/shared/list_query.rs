use serde::{Deserialize, Serialize};

/// Filter value meaning "no restriction".
pub const FILTER_ALL: &str = "all";

/// Query parameters accepted by collection endpoints
/// (`GET /api/<resource>?search=&status=&type=&page=&limit=`).
///
/// Absent fields are not sent, so an empty query maps to the bare resource URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Query for a whole collection (no parameters).
    pub fn all() -> Self {
        Self::default()
    }

    /// Query for one page (1-based, as the admin endpoints expect).
    pub fn paged(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page.max(1)),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// `"all"` and empty values clear the status restriction.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = restriction(status);
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = restriction(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn restriction(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == FILTER_ALL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// One page of a paginated admin table, after the collection array has been
/// unwrapped from its envelope (`{ "documents": [...], "totalPages": 3 }`).
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_status_is_not_a_restriction() {
        let q = ListQuery::all().with_status("all").with_kind("");
        assert!(q.is_empty());
    }

    #[test]
    fn test_search_is_trimmed() {
        let q = ListQuery::all().with_search("  Ngono ");
        assert_eq!(q.search.as_deref(), Some("Ngono"));
        assert!(ListQuery::all().with_search("   ").search.is_none());
    }

    #[test]
    fn test_paged_is_one_based() {
        let q = ListQuery::paged(0, 20);
        assert_eq!(q.page, Some(1));
        assert_eq!(q.limit, Some(20));
    }

    #[test]
    fn test_distinct_parameters_are_distinct_queries() {
        let a = ListQuery::paged(1, 20).with_status("prospect");
        let b = ListQuery::paged(2, 20).with_status("prospect");
        assert_ne!(a, b);
    }
}
