//! Reactive wrappers around [`QueryClient`] for Leptos components.

use std::collections::HashSet;
use std::rc::Rc;

use contracts::shared::list_query::{ListQuery, Page};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::cache::RequestTicket;
use super::client::QueryClient;
use super::key::QueryKey;
use super::mutation::MutationRequest;
use super::normalize::{normalize_list, normalize_object, normalize_page};
use crate::shared::errors::AppError;
use crate::shared::forms::{validation_notice, FormDraft};
use crate::shared::i18n::{use_language, Language};
use crate::shared::notifications::{use_notifications, NotificationService};

pub type QueryClientHandle = StoredValue<QueryClient, LocalStorage>;

pub fn provide_query_client(client: QueryClient) {
    provide_context::<QueryClientHandle>(StoredValue::new_local(client));
}

pub fn use_query_client() -> QueryClientHandle {
    use_context::<QueryClientHandle>().expect("QueryClient not provided in context")
}

#[derive(Clone, Copy)]
pub struct FetchOptions {
    /// Requests are only issued while this is true.
    pub enabled: Signal<bool>,
    /// Force a refresh at this interval while mounted.
    pub poll_interval_ms: Option<u32>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            enabled: Signal::derive(|| true),
            poll_interval_ms: None,
        }
    }
}

impl FetchOptions {
    pub fn enabled_when(enabled: Signal<bool>) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn with_polling(self, interval_ms: u32) -> Self {
        Self {
            poll_interval_ms: Some(interval_ms),
            ..self
        }
    }
}

/// Reactive result of one fetcher instance.
pub struct EntityList<T: Send + Sync + 'static> {
    pub data: Signal<T>,
    /// True while the first request is outstanding.
    pub is_loading: Signal<bool>,
    /// True while any request is outstanding.
    pub is_fetching: Signal<bool>,
    pub error: Signal<Option<AppError>>,
    refresh: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for EntityList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for EntityList<T> {}

impl<T: Send + Sync + 'static> EntityList<T> {
    /// Bypass the cache for this key and fetch again.
    pub fn refresh(&self) {
        self.refresh.run(());
    }
}

/// What a fetcher run does for the current key.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchPlan {
    /// Disabled: no request, data is reset to its default.
    Skip,
    Cached(Value),
    Request,
}

pub fn plan_fetch(client: &QueryClient, key: &QueryKey, enabled: bool, force: bool) -> FetchPlan {
    if !enabled {
        return FetchPlan::Skip;
    }
    if force {
        client.evict(key);
        return FetchPlan::Request;
    }
    match client.cached(key) {
        Some(value) => FetchPlan::Cached(value),
        None => FetchPlan::Request,
    }
}

impl FetchPlan {
    /// Data to show without waiting for a request; `None` when one is needed.
    pub fn immediate<T: Default>(&self, decode: fn(&Value) -> T) -> Option<T> {
        match self {
            FetchPlan::Skip => Some(T::default()),
            FetchPlan::Cached(value) => Some(decode(value)),
            FetchPlan::Request => None,
        }
    }
}

/// Whether a resolved read may still be written into the fetcher's state.
///
/// Only the fetcher's most recent request is applied, and nothing is applied
/// once the owning component is gone. `latest` is cleared whenever the fetcher
/// settles without a request (disabled or served from cache).
pub fn accepts_response(
    latest: Option<&RequestTicket>,
    ticket: &RequestTicket,
    mounted: bool,
) -> bool {
    mounted && latest == Some(ticket)
}

fn use_query<T>(
    resource: &'static str,
    query: Signal<ListQuery>,
    options: FetchOptions,
    decode: fn(&Value) -> T,
) -> EntityList<T>
where
    T: Default + Send + Sync + 'static,
{
    let client = use_query_client();
    let data = RwSignal::new(T::default());
    let is_fetching = RwSignal::new(false);
    let has_loaded = RwSignal::new(false);
    let error = RwSignal::new(None::<AppError>);

    let revision = RwSignal::new(0u64);
    let force_next = StoredValue::new(false);
    let latest = StoredValue::new(None::<RequestTicket>);
    let mounted = StoredValue::new(true);

    let listener_id = client.with_value(|c| {
        c.subscribe(
            resource,
            Rc::new(move || {
                revision.try_update(|r| *r += 1);
            }),
        )
    });

    if let Some(interval_ms) = options.poll_interval_ms {
        let interval = Interval::new(interval_ms, move || {
            force_next.try_update_value(|f| *f = true);
            revision.try_update(|r| *r += 1);
        });
        // Dropped together with the owner, which cancels the interval.
        let _ = StoredValue::new_local(interval);
    }

    on_cleanup(move || {
        mounted.try_update_value(|m| *m = false);
        client.try_with_value(|c| c.unsubscribe(listener_id));
    });

    Effect::new(move |_| {
        let params = query.get();
        revision.track();
        let enabled = options.enabled.get();

        let key = QueryKey::new(resource, &params);
        let force = force_next.get_value();
        force_next.set_value(false);

        let plan = client.with_value(|c| plan_fetch(c, &key, enabled, force));
        if let Some(value) = plan.immediate(decode) {
            latest.set_value(None);
            data.set(value);
            error.set(None);
            if matches!(plan, FetchPlan::Cached(_)) {
                has_loaded.set(true);
            }
            is_fetching.set(false);
            return;
        }

        let (client, ticket) = client.with_value(|c| (c.clone(), c.begin(&key)));
        latest.set_value(Some(ticket.clone()));
        is_fetching.set(true);

        spawn_local(async move {
            let result = client.execute(&ticket).await;
            let is_mounted = mounted.try_get_value().unwrap_or(false);
            let current = latest.try_get_value().flatten();
            if !accepts_response(current.as_ref(), &ticket, is_mounted) {
                if is_mounted {
                    log::warn!(
                        "discarding superseded response #{} for {}",
                        ticket.seq,
                        ticket.key.resource
                    );
                } else {
                    log::debug!("{} resolved after unmount", ticket.key.resource);
                }
                return;
            }
            match result {
                Ok(value) => {
                    data.try_set(decode(&value));
                    error.try_set(None);
                }
                Err(e) => {
                    log::error!("GET {} failed: {}", ticket.key.path(), e);
                    data.try_set(T::default());
                    error.try_set(Some(AppError::Fetch(e)));
                }
            }
            has_loaded.try_set(true);
            is_fetching.try_set(false);
        });
    });

    let refresh = Callback::new(move |_| {
        force_next.set_value(true);
        revision.update(|r| *r += 1);
    });

    EntityList {
        data: data.into(),
        is_loading: Signal::derive(move || is_fetching.get() && !has_loaded.get()),
        is_fetching: is_fetching.into(),
        error: error.into(),
        refresh,
    }
}

fn decode_list<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    normalize_list(value)
}

fn decode_page<T: DeserializeOwned>(value: &Value) -> Page<T> {
    normalize_page(value)
}

fn decode_object<T: DeserializeOwned>(value: &Value) -> Option<T> {
    normalize_object(value)
}

/// Collection resource, decoded to `Vec<T>`.
pub fn use_entity_list<T>(
    resource: &'static str,
    query: Signal<ListQuery>,
    options: FetchOptions,
) -> EntityList<Vec<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    use_query(resource, query, options, decode_list::<T>)
}

/// Paginated collection answered as `{ <collection>: [...], totalPages }`.
pub fn use_paged_list<T>(
    resource: &'static str,
    query: Signal<ListQuery>,
    options: FetchOptions,
) -> EntityList<Page<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    use_query(resource, query, options, decode_page::<T>)
}

/// Single-object resource (profile, settings, health snapshot).
pub fn use_entity<T>(resource: &'static str, options: FetchOptions) -> EntityList<Option<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    use_query(
        resource,
        Signal::derive(ListQuery::all),
        options,
        decode_object::<T>,
    )
}

/// Texts shown after a write completes.
#[derive(Debug, Clone, Default)]
pub struct MutationMessages {
    pub success: String,
    pub failure: String,
}

impl MutationMessages {
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// Dispatches writes and tracks which controls have one pending.
#[derive(Clone, Copy)]
pub struct MutationHandle {
    client: QueryClientHandle,
    pending: RwSignal<HashSet<String>>,
    notifications: NotificationService,
    lang: Signal<Language>,
}

impl MutationHandle {
    pub fn is_pending(&self) -> bool {
        self.pending.with(|p| !p.is_empty())
    }

    /// Validate a form draft before a write. Rejected input keeps its inline
    /// error and is announced through an error notification as well.
    pub fn submission<T>(
        &self,
        draft: RwSignal<FormDraft<T>>,
        validate: impl FnOnce(&T) -> Result<(), AppError>,
    ) -> Option<T>
    where
        T: Clone + Default + Send + Sync + 'static,
    {
        match draft.try_update(|d| d.submission(validate))? {
            Ok(value) => Some(value),
            Err(e) => {
                let (title, body) = validation_notice(&e, self.lang.get_untracked());
                self.notifications.error(title, body);
                None
            }
        }
    }

    /// Whether a write built like `request` is in flight.
    pub fn is_pending_for(&self, request: &MutationRequest) -> bool {
        let token = request.pending_token();
        self.pending.with(|p| p.contains(&token))
    }

    /// Send one write. The outcome is reported through a notification and
    /// passed to `on_done` so forms can decide whether to reset.
    pub fn dispatch(
        &self,
        request: MutationRequest,
        messages: MutationMessages,
        on_done: impl FnOnce(Result<Value, AppError>) + 'static,
    ) {
        let token = request.pending_token();
        if self.pending.with_untracked(|p| p.contains(&token)) {
            log::debug!("{} already pending", token);
            return;
        }
        self.pending.update(|p| {
            p.insert(token.clone());
        });

        let notifications = self.notifications;
        let lang = self.lang;
        let client = self.client.with_value(|c| c.clone());
        let pending = self.pending;

        spawn_local(async move {
            let result = client.mutate(&request).await.map_err(AppError::Mutation);
            pending.try_update(|p| p.remove(&token));
            match &result {
                Ok(_) => notifications.success(messages.success, String::new()),
                Err(e) => notifications.error(messages.failure, e.user_message(lang.get_untracked())),
            }
            on_done(result);
        });
    }
}

pub fn use_mutation() -> MutationHandle {
    MutationHandle {
        client: use_query_client(),
        pending: RwSignal::new(HashSet::new()),
        notifications: use_notifications(),
        lang: use_language(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::client::tests::FakeTransport;
    use crate::shared::query::transport::HttpMethod;
    use serde_json::json;

    #[tokio::test(flavor = "current_thread")]
    async fn test_disabled_fetcher_issues_no_request() {
        let fake = FakeTransport::with("freelancer/students", vec![json!({"id": 1})]);
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("freelancer/students");

        assert_eq!(plan_fetch(&client, &key, false, false), FetchPlan::Skip);
        assert_eq!(plan_fetch(&client, &key, false, true), FetchPlan::Skip);
        assert_eq!(fake.count(HttpMethod::Get), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_cached_value_is_reused_unless_forced() {
        let fake = FakeTransport::with("admin/system-health", vec![]);
        let client = QueryClient::new(fake.clone(), "/api");
        let key = QueryKey::bare("admin/system-health");
        assert_eq!(plan_fetch(&client, &key, true, false), FetchPlan::Request);

        client.read(&key).await.unwrap();
        assert_eq!(plan_fetch(&client, &key, true, false), FetchPlan::Cached(json!([])));
        assert_eq!(plan_fetch(&client, &key, true, true), FetchPlan::Request);
        assert!(client.cached(&key).is_none());
    }

    fn ids(value: &Value) -> Vec<i64> {
        value
            .as_array()
            .map(|rows| rows.iter().filter_map(|r| r["id"].as_i64()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_disabled_fetcher_shows_empty_data() {
        assert_eq!(FetchPlan::Skip.immediate(ids), Some(Vec::new()));
        assert_eq!(
            FetchPlan::Cached(json!([{"id": 4}])).immediate(ids),
            Some(vec![4])
        );
        assert_eq!(FetchPlan::Request.immediate(ids), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_response_for_previous_search_is_discarded() {
        let fake = FakeTransport::with("admin/platform-users", vec![json!({"id": 1})]);
        let client = QueryClient::new(fake.clone(), "/api");
        let a = QueryKey::new("admin/platform-users", &ListQuery::all().with_search("a"));
        let ab = QueryKey::new("admin/platform-users", &ListQuery::all().with_search("ab"));

        let old = client.begin(&a);
        let newer = client.begin(&ab);
        assert!(!accepts_response(Some(&newer), &old, true));
        assert!(accepts_response(Some(&newer), &newer, true));

        // The stale reply still resolves and may be cached under its own key.
        client.execute(&old).await.unwrap();
        assert!(client.cached(&a).is_some());
        assert!(client.cached(&ab).is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_in_flight_response_is_discarded_after_switch_to_cached_query() {
        let fake = FakeTransport::with("freelancer/sessions", vec![]);
        let client = QueryClient::new(fake.clone(), "/api");
        let all = QueryKey::bare("freelancer/sessions");
        let planned = QueryKey::new("freelancer/sessions", &ListQuery::all().with_status("planned"));
        client.read(&all).await.unwrap();

        let in_flight = client.begin(&planned);
        let plan = plan_fetch(&client, &all, true, false);
        assert!(plan.immediate(ids).is_some());
        // Settling from cache retires the outstanding request.
        assert!(!accepts_response(None, &in_flight, true));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_response_after_unmount_is_ignored() {
        let fake = FakeTransport::with("freelancer/students", vec![json!({"id": 2})]);
        let client = QueryClient::new(fake.clone(), "/api");
        let ticket = client.begin(&QueryKey::bare("freelancer/students"));
        client.execute(&ticket).await.unwrap();

        assert!(accepts_response(Some(&ticket), &ticket, true));
        assert!(!accepts_response(Some(&ticket), &ticket, false));
    }
}
