use contracts::system::auth::{CurrentUser, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::errors::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    /// The session lookup has completed (successfully or not).
    pub checked: bool,
    pub error: Option<ApiError>,
}

impl AuthState {
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    spawn_local(async move {
        let state = match api::get_current_user().await {
            Ok(user) => {
                log::info!("session user {} ({})", user.id, user.role.as_str());
                AuthState {
                    user: Some(user),
                    checked: true,
                    error: None,
                }
            }
            Err(e) => {
                if e.is_unauthorized() {
                    log::info!("no active session");
                } else {
                    log::error!("failed to load current user: {}", e);
                }
                AuthState {
                    user: None,
                    checked: true,
                    error: Some(e),
                }
            }
        };
        auth_state.try_set(state);
    });

    provide_context(auth_state.read_only());

    children()
}

/// Hook to access auth state
pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// True once a user is known; fetchers are enabled by this.
pub fn use_signed_in() -> Signal<bool> {
    let auth_state = use_auth();
    Signal::derive(move || auth_state.with(|s| s.user.is_some()))
}
