use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::cache::{Listener, ListenerId, QueryCache, RequestTicket};
use super::key::QueryKey;
use super::mutation::MutationRequest;
use super::transport::{ApiRequest, BrowserTransport, HttpMethod, Transport};
use crate::shared::api_utils::{api_base, join_url};
use crate::shared::errors::ApiError;

/// Shared entry point for reads and writes against the backend.
///
/// Cloning is cheap; all clones share one cache.
#[derive(Clone)]
pub struct QueryClient {
    cache: Rc<RefCell<QueryCache>>,
    transport: Rc<dyn Transport>,
    base: String,
}

impl QueryClient {
    pub fn new(transport: Rc<dyn Transport>, base: impl Into<String>) -> Self {
        Self {
            cache: Rc::new(RefCell::new(QueryCache::new())),
            transport,
            base: base.into(),
        }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserTransport), api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn cached(&self, key: &QueryKey) -> Option<Value> {
        self.cache.borrow().get(key).cloned()
    }

    pub fn begin(&self, key: &QueryKey) -> RequestTicket {
        self.cache.borrow_mut().begin(key)
    }

    /// Issue the GET for `ticket`. Success is cached unless the resource was
    /// invalidated in the meantime.
    pub async fn execute(&self, ticket: &RequestTicket) -> Result<Value, ApiError> {
        let request = ApiRequest {
            method: HttpMethod::Get,
            url: join_url(&self.base, &ticket.key.path()),
            body: None,
        };
        log::debug!("GET {} (#{})", request.url, ticket.seq);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        let value = response.json()?;
        if !self.cache.borrow_mut().complete(ticket, value.clone()) {
            log::debug!("response #{} for {} not cached", ticket.seq, ticket.key.resource);
        }
        Ok(value)
    }

    /// Cached value, or a fresh request when there is none.
    pub async fn read(&self, key: &QueryKey) -> Result<Value, ApiError> {
        if let Some(value) = self.cached(key) {
            return Ok(value);
        }
        let ticket = self.begin(key);
        self.execute(&ticket).await
    }

    /// Perform one write. On success the affected resources are invalidated
    /// and their subscribers notified; on failure the cache is untouched.
    pub async fn mutate(&self, mutation: &MutationRequest) -> Result<Value, ApiError> {
        let request = mutation.to_api_request(&self.base).map_err(|e| {
            log::error!("{} {} not sent: {}", mutation.method().as_str(), mutation.path(), e);
            e
        })?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            log::error!("{} {} failed: {}", mutation.method().as_str(), mutation.path(), err);
            return Err(err);
        }
        let value = response.json().unwrap_or_else(|e| {
            log::warn!("write succeeded with unreadable body: {}", e);
            Value::Null
        });
        for resource in mutation.invalidated_resources() {
            self.invalidate(&resource);
        }
        Ok(value)
    }

    pub fn invalidate(&self, resource: &str) {
        let listeners = self.cache.borrow_mut().invalidate(resource);
        log::debug!("invalidated {} ({} subscribers)", resource, listeners.len());
        for listener in listeners {
            listener();
        }
    }

    pub fn evict(&self, key: &QueryKey) {
        self.cache.borrow_mut().evict(key);
    }

    pub fn subscribe(&self, resource: &str, listener: Listener) -> ListenerId {
        self.cache.borrow_mut().subscribe(resource, listener)
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.cache.borrow_mut().unsubscribe(id);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::query::normalize::normalize_list;
    use crate::shared::query::transport::ApiResponse;
    use async_trait::async_trait;
    use contracts::domain::a102_freelancer_student::aggregate::FreelancerStudent;
    use serde_json::json;
    use std::cell::Cell;

    /// In-memory backend holding one collection per resource.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        pub collections: RefCell<std::collections::HashMap<String, Vec<Value>>>,
        pub requests: RefCell<Vec<ApiRequest>>,
        pub fail_writes: Cell<bool>,
    }

    impl FakeTransport {
        pub fn with(resource: &str, items: Vec<Value>) -> Rc<Self> {
            let fake = Self::default();
            fake.collections
                .borrow_mut()
                .insert(format!("/api/{}", resource), items);
            Rc::new(fake)
        }

        pub fn count(&self, method: HttpMethod) -> usize {
            self.requests
                .borrow()
                .iter()
                .filter(|r| r.method == method)
                .count()
        }
    }

    #[async_trait(?Send)]
    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.requests.borrow_mut().push(request.clone());
            let path = request.url.split('?').next().unwrap_or_default().to_string();
            if request.method != HttpMethod::Get && self.fail_writes.get() {
                return Ok(ApiResponse {
                    status: 500,
                    body: r#"{"message":"boom"}"#.into(),
                });
            }
            let mut collections = self.collections.borrow_mut();
            match request.method {
                HttpMethod::Get => {
                    let items = collections.get(&path).cloned().unwrap_or_default();
                    Ok(ApiResponse {
                        status: 200,
                        body: Value::Array(items).to_string(),
                    })
                }
                HttpMethod::Delete => {
                    let (collection, id) = path.rsplit_once('/').unwrap();
                    if let Some(items) = collections.get_mut(collection) {
                        items.retain(|item| item["id"].to_string() != id);
                    }
                    Ok(ApiResponse {
                        status: 204,
                        body: String::new(),
                    })
                }
                _ => {
                    let body = request.body.unwrap_or(Value::Null);
                    if request.method == HttpMethod::Post {
                        collections.entry(path).or_default().push(body.clone());
                    }
                    Ok(ApiResponse {
                        status: 200,
                        body: body.to_string(),
                    })
                }
            }
        }
    }

    fn students() -> Vec<Value> {
        (1..=6)
            .map(|id| json!({"id": id, "fullName": format!("Student {}", id), "status": "good"}))
            .collect()
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_reads_are_cached_until_invalidated() {
        let fake = FakeTransport::with("freelancer/students", students());
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("freelancer/students");

        client.read(&key).await.unwrap();
        client.read(&key).await.unwrap();
        assert_eq!(fake.count(HttpMethod::Get), 1);

        client.invalidate("freelancer/students");
        client.read(&key).await.unwrap();
        assert_eq!(fake.count(HttpMethod::Get), 2);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_successful_mutation_forces_refetch() {
        let fake = FakeTransport::with("freelancer/students", students());
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("freelancer/students");
        client.read(&key).await.unwrap();

        let create = MutationRequest::create(
            "freelancer/students",
            &json!({"id": 7, "fullName": "Awa Mballa", "status": "excellent"}),
        );
        client.mutate(&create).await.unwrap();
        assert!(client.cached(&key).is_none());

        let rows: Vec<FreelancerStudent> = normalize_list(&client.read(&key).await.unwrap());
        assert_eq!(fake.count(HttpMethod::Get), 2);
        assert!(rows.iter().any(|s| s.full_name == "Awa Mballa"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_deleted_entity_is_absent_after_reread() {
        let fake = FakeTransport::with("admin/platform-users", students());
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("admin/platform-users");
        assert_eq!(normalize_list::<Value>(&client.read(&key).await.unwrap()).len(), 6);

        client
            .mutate(&MutationRequest::delete("admin/platform-users", 5))
            .await
            .unwrap();

        let rows: Vec<Value> = normalize_list(&client.read(&key).await.unwrap());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r["id"] != json!(5)));
        assert_eq!(fake.count(HttpMethod::Delete), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_failed_mutation_keeps_cache() {
        let fake = FakeTransport::with("freelancer/students", students());
        fake.fail_writes.set(true);
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("freelancer/students");
        client.read(&key).await.unwrap();

        let err = client
            .mutate(&MutationRequest::delete("freelancer/students", 1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "boom".into()
            }
        );
        assert!(client.cached(&key).is_some());
        client.read(&key).await.unwrap();
        assert_eq!(fake.count(HttpMethod::Get), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_unserializable_payload_sends_nothing() {
        let fake = FakeTransport::with("freelancer/schedule", vec![]);
        let client = QueryClient::new(fake.clone(), "/api");
        let mut by_cell = std::collections::HashMap::new();
        by_cell.insert((1, 2), "slot");

        let err = client
            .mutate(&MutationRequest::create("freelancer/schedule", &by_cell))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
        assert_eq!(fake.count(HttpMethod::Post), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_mutation_notifies_subscribers_once_per_write() {
        let fake = FakeTransport::with("freelancer/geolocation/zones", vec![]);
        let client = QueryClient::new(fake.clone(), "/api");
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        client.subscribe("freelancer/geolocation/students", Rc::new(move || h.set(h.get() + 1)));

        let create = MutationRequest::create("freelancer/geolocation/zones", &json!({"name": "Bastos"}))
            .also_invalidates("freelancer/geolocation/students");
        client.mutate(&create).await.unwrap();
        assert_eq!(hits.get(), 1);
        assert_eq!(fake.count(HttpMethod::Post), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_in_flight_read_is_not_cached_after_invalidation() {
        let fake = FakeTransport::with("freelancer/payments", vec![json!({"id": 1})]);
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("freelancer/payments");

        let stale = client.begin(&key);
        client.invalidate("freelancer/payments");
        client.execute(&stale).await.unwrap();
        assert!(client.cached(&key).is_none());
    }
}
