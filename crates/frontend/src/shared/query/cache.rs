use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

use super::key::QueryKey;

pub type ListenerId = u64;
pub type Listener = Rc<dyn Fn()>;

/// Handle of one issued read request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub key: QueryKey,
    /// Increasing per resource, across every query string of it.
    pub seq: u64,
    /// Invalidation epoch of the resource when the request was issued.
    pub epoch: u64,
}

/// Process-wide response cache.
///
/// Entries live until their resource is invalidated. A response belonging to a
/// request issued before the latest invalidation of its resource is never
/// stored, so an invalidation cannot be undone by a late reply.
#[derive(Default)]
pub struct QueryCache {
    /// Stored value together with the sequence of the request that produced it.
    entries: HashMap<QueryKey, (u64, Value)>,
    epochs: HashMap<String, u64>,
    sequences: HashMap<String, u64>,
    listeners: Vec<(ListenerId, String, Listener)>,
    next_listener: ListenerId,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&Value> {
        self.entries.get(key).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn epoch(&self, resource: &str) -> u64 {
        self.epochs.get(resource).copied().unwrap_or(0)
    }

    /// Allocate the next sequence number of `key.resource`.
    pub fn begin(&mut self, key: &QueryKey) -> RequestTicket {
        let seq = self.sequences.entry(key.resource.clone()).or_insert(0);
        *seq += 1;
        RequestTicket {
            key: key.clone(),
            seq: *seq,
            epoch: self.epoch(&key.resource),
        }
    }

    pub fn latest_seq(&self, resource: &str) -> u64 {
        self.sequences.get(resource).copied().unwrap_or(0)
    }

    /// Store a successful response. Returns false when the resource was
    /// invalidated after the request was issued or a newer request for the
    /// same key already completed.
    pub fn complete(&mut self, ticket: &RequestTicket, value: Value) -> bool {
        if ticket.epoch != self.epoch(&ticket.key.resource) {
            return false;
        }
        if let Some((stored_seq, _)) = self.entries.get(&ticket.key) {
            if ticket.seq < *stored_seq {
                return false;
            }
        }
        self.entries.insert(ticket.key.clone(), (ticket.seq, value));
        true
    }

    /// Drop one entry without notifying anyone (forced refresh of a single key).
    pub fn evict(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Drop every entry of `resource` (and nested resources), bump their
    /// epochs and return the listeners to notify. Listeners are returned
    /// rather than called so the caller can release its borrow first.
    pub fn invalidate(&mut self, resource: &str) -> Vec<Listener> {
        let resource = resource.trim_matches('/');
        self.entries.retain(|key, _| !key.belongs_to(resource));

        let mut affected: Vec<String> = self
            .sequences
            .keys()
            .filter(|name| QueryKey::bare(name).belongs_to(resource))
            .cloned()
            .collect();
        affected.push(resource.to_string());
        affected.sort();
        affected.dedup();
        for name in &affected {
            *self.epochs.entry(name.clone()).or_insert(0) += 1;
        }

        self.listeners
            .iter()
            .filter(|(_, subscribed, _)| QueryKey::bare(subscribed).belongs_to(resource))
            .map(|(_, _, listener)| listener.clone())
            .collect()
    }

    pub fn subscribe(&mut self, resource: &str, listener: Listener) -> ListenerId {
        self.next_listener += 1;
        let id = self.next_listener;
        self.listeners
            .push((id, resource.trim_matches('/').to_string(), listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _, _)| *listener_id != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::ListQuery;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_completed_response_is_cached() {
        let mut cache = QueryCache::new();
        let key = QueryKey::bare("freelancer/students");
        let ticket = cache.begin(&key);
        assert!(cache.complete(&ticket, json!([{"id": 1}])));
        assert_eq!(cache.get(&key), Some(&json!([{"id": 1}])));
    }

    #[test]
    fn test_invalidate_drops_entries_and_nested_resources() {
        let mut cache = QueryCache::new();
        let alerts = QueryKey::bare("admin/security/alerts");
        let logs = QueryKey::bare("admin/security/audit-logs");
        let users = QueryKey::bare("admin/platform-users");
        for key in [&alerts, &logs, &users] {
            let t = cache.begin(key);
            cache.complete(&t, json!([]));
        }
        cache.invalidate("admin/security");
        assert!(cache.get(&alerts).is_none());
        assert!(cache.get(&logs).is_none());
        assert!(cache.get(&users).is_some());
    }

    #[test]
    fn test_response_issued_before_invalidation_is_not_stored() {
        let mut cache = QueryCache::new();
        let key = QueryKey::bare("freelancer/payments");
        let ticket = cache.begin(&key);
        cache.invalidate("freelancer/payments");
        assert!(!cache.complete(&ticket, json!([{"id": 9}])));
        assert!(cache.get(&key).is_none());

        let fresh = cache.begin(&key);
        assert!(cache.complete(&fresh, json!([])));
    }

    #[test]
    fn test_superseded_response_does_not_overwrite_newer_one() {
        let mut cache = QueryCache::new();
        let key = QueryKey::bare("admin/commercial/leads");
        let first = cache.begin(&key);
        let second = cache.begin(&key);
        assert_eq!(second.seq, first.seq + 1);
        assert!(cache.complete(&second, json!(["new"])));
        assert!(!cache.complete(&first, json!(["old"])));
        assert_eq!(cache.get(&key), Some(&json!(["new"])));
    }

    #[test]
    fn test_sequence_is_shared_by_every_query_of_a_resource() {
        let mut cache = QueryCache::new();
        let a = QueryKey::new("admin/platform-users", &ListQuery::all().with_search("a"));
        let ab = QueryKey::new("admin/platform-users", &ListQuery::all().with_search("ab"));
        let first = cache.begin(&a);
        let second = cache.begin(&ab);
        assert!(second.seq > first.seq);
        assert_ne!(first, second);
        assert_eq!(cache.latest_seq("admin/platform-users"), second.seq);
        assert_eq!(cache.latest_seq("admin/security/alerts"), 0);

        // Each key keeps its own entry; neither reply blocks the other.
        assert!(cache.complete(&second, json!(["ab"])));
        assert!(cache.complete(&first, json!(["a"])));
        assert_eq!(cache.get(&a), Some(&json!(["a"])));
        assert_eq!(cache.get(&ab), Some(&json!(["ab"])));
    }

    #[test]
    fn test_listeners_of_invalidated_resource_are_returned() {
        let mut cache = QueryCache::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = cache.subscribe("freelancer/sessions", Rc::new(move || h.set(h.get() + 1)));
        cache.subscribe("freelancer/students", Rc::new(|| {}));

        for listener in cache.invalidate("freelancer/sessions") {
            listener();
        }
        assert_eq!(hits.get(), 1);

        cache.unsubscribe(id);
        assert_eq!(cache.listener_count(), 1);
        assert!(cache.invalidate("freelancer/sessions").is_empty());
    }
}
