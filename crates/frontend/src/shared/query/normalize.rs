//! Response normalisation at the fetcher boundary.
//!
//! Everything downstream sees a `Vec<T>` (or `Page<T>`, `Option<T>`) no matter
//! what shape the backend answered with.

use contracts::shared::list_query::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Envelope fields that may wrap a collection array.
pub const COLLECTION_KEYS: &[&str] = &["documents", "leads", "schools", "users", "items", "data"];

fn collection(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => COLLECTION_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_array())),
        _ => None,
    }
}

/// Decode a collection. Non-collections become `[]`; `null` entries and
/// entries that fail to decode are dropped.
pub fn normalize_list<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    let Some(items) = collection(value) else {
        if !value.is_null() {
            log::warn!("expected a collection, got {}", kind_of(value));
        }
        return Vec::new();
    };
    items
        .iter()
        .filter(|item| !item.is_null())
        .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
            Ok(entity) => Some(entity),
            Err(e) => {
                log::warn!("dropping malformed entry: {}", e);
                None
            }
        })
        .collect()
}

/// Decode one page of a paginated collection (`{ <collection>: [...], totalPages }`).
pub fn normalize_page<T: DeserializeOwned>(value: &Value) -> Page<T> {
    let total_pages = value
        .get("totalPages")
        .and_then(|v| v.as_u64())
        .map(|n| n.max(1) as u32)
        .unwrap_or(1);
    Page {
        items: normalize_list(value),
        total_pages,
    }
}

/// Decode a single-object resource; `null` or an undecodable body is `None`.
pub fn normalize_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    if !value.is_object() {
        if !value.is_null() {
            log::warn!("expected an object, got {}", kind_of(value));
        }
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(entity) => Some(entity),
        Err(e) => {
            log::warn!("failed to decode object: {}", e);
            None
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_plain_array() {
        let rows: Vec<Row> = normalize_list(&json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, 2);
    }

    #[test]
    fn test_non_collections_become_empty() {
        assert!(normalize_list::<Row>(&json!({"message": "ok"})).is_empty());
        assert!(normalize_list::<Row>(&json!("oops")).is_empty());
        assert!(normalize_list::<Row>(&Value::Null).is_empty());
    }

    #[test]
    fn test_null_and_malformed_entries_are_dropped() {
        let rows: Vec<Row> = normalize_list(&json!([
            {"id": 1, "name": "a"},
            null,
            {"id": "x"},
            {"id": 4, "name": "d"}
        ]));
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let page: Page<Row> = normalize_page(&json!({
            "leads": [{"id": 7, "name": "Lycée Bilingue"}],
            "totalPages": 3
        }));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 3);

        let page: Page<Row> = normalize_page(&json!([{"id": 1, "name": "a"}]));
        assert_eq!(page.total_pages, 1);

        let page: Page<Row> = normalize_page(&json!({"documents": [], "totalPages": 0}));
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_single_object() {
        assert_eq!(
            normalize_object::<Row>(&json!({"id": 1, "name": "a"})),
            Some(Row { id: 1, name: "a".into() })
        );
        assert_eq!(normalize_object::<Row>(&Value::Null), None);
        assert_eq!(normalize_object::<Row>(&json!([])), None);
    }
}
