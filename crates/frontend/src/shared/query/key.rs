use contracts::shared::list_query::ListQuery;

use crate::shared::api_utils::{query_string, with_query};

/// Cache key: resource path plus canonical query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: String,
    pub params: String,
}

impl QueryKey {
    pub fn new(resource: &str, query: &ListQuery) -> Self {
        Self {
            resource: resource.trim_matches('/').to_string(),
            params: query_string(query),
        }
    }

    pub fn bare(resource: &str) -> Self {
        Self::new(resource, &ListQuery::all())
    }

    /// Path relative to the API base, including the query string.
    pub fn path(&self) -> String {
        with_query(&self.resource, &self.params)
    }

    /// Whether invalidating `resource` affects this key. Nested resources
    /// (`admin/security/alerts` under `admin/security`) are included.
    pub fn belongs_to(&self, resource: &str) -> bool {
        let resource = resource.trim_matches('/');
        self.resource == resource
            || (self.resource.starts_with(resource)
                && self.resource[resource.len()..].starts_with('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_are_part_of_the_key() {
        let a = QueryKey::new("admin/documents", &ListQuery::paged(1, 20));
        let b = QueryKey::new("admin/documents", &ListQuery::paged(2, 20));
        assert_ne!(a, b);
        assert_eq!(a.path(), "admin/documents?page=1&limit=20");
    }

    #[test]
    fn test_belongs_to_prefix_on_segment_boundary() {
        let key = QueryKey::bare("admin/security/alerts");
        assert!(key.belongs_to("admin/security/alerts"));
        assert!(key.belongs_to("admin/security"));
        assert!(!key.belongs_to("admin/sec"));
        assert!(!QueryKey::bare("admin/security").belongs_to("admin/security/alerts"));
    }
}
