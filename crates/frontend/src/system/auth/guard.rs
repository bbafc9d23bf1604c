use contracts::system::auth::UserRole;
use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;
use crate::shared::i18n::Texts;

/// Renders `children` only for a signed-in user whose role passes `allowed`.
#[component]
pub fn RequireRole(allowed: fn(UserRole) -> bool, children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();
    let tx = Texts::of("auth");

    move || {
        let state = auth_state.get();
        if !state.checked {
            return view! {
                <div class="list-placeholder list-placeholder--loading"><Spinner /></div>
            }
            .into_any();
        }
        match state.role() {
            None => view! { <div class="access-denied">{tx.get("not_signed_in")}</div> }.into_any(),
            Some(role) if !allowed(role) => {
                view! { <div class="access-denied">{tx.get("access_denied")}</div> }.into_any()
            }
            Some(_) => children().into_any(),
        }
    }
}
