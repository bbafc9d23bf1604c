use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::config::app_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

/// Toast notifications, provided once at the application root.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NotificationKind::Success, title.into(), body.into());
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NotificationKind::Error, title.into(), body.into());
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) {
        self.push(NotificationKind::Info, title.into(), body.into());
    }

    fn push(&self, kind: NotificationKind, title: String, body: String) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title,
                body,
            })
        });

        let this = *self;
        Timeout::new(app_config().ui.notification_timeout_ms, move || this.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Stack of active toasts; rendered once by the application shell.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.items().get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                        NotificationKind::Info => "notification notification--info",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status">
                            <div class="notification__title">{n.title}</div>
                            <div class="notification__body">{n.body}</div>
                            <button class="notification__close" on:click=move |_| service.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
