//! URL helpers for backend requests.
//!
//! Every path is relative to the configured API base (`/api` by default).

use contracts::shared::list_query::ListQuery;

use crate::shared::config::app_config;

/// Base URL for API requests, without trailing slash.
pub fn api_base() -> String {
    app_config().api.base_path.trim_end_matches('/').to_string()
}

/// Build a full API URL from a resource path such as `admin/platform-users/5`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// `resource[/id][/suffix]`; the id is percent-encoded.
pub fn resource_path(resource: &str, id: Option<&str>, suffix: Option<&str>) -> String {
    let mut path = resource.trim_matches('/').to_string();
    if let Some(id) = id {
        path.push('/');
        path.push_str(&urlencoding::encode(id));
    }
    if let Some(suffix) = suffix {
        path.push('/');
        path.push_str(suffix.trim_matches('/'));
    }
    path
}

/// Canonical query string for a list query; empty when no parameter is set.
pub fn query_string(query: &ListQuery) -> String {
    match serde_qs::to_string(query) {
        Ok(qs) => qs,
        Err(e) => {
            log::warn!("failed to encode list query: {}", e);
            String::new()
        }
    }
}

pub fn with_query(path: &str, query_string: &str) -> String {
    if query_string.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query_string)
    }
}
