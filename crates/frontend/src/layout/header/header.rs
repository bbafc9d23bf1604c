use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::{Language, Texts};
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Header(
    /// Translation key (in `dashboard`) of the dashboard title
    title_key: &'static str,
) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let auth_state = use_auth();
    let tx = Texts::of("dashboard");

    let user_name = move || {
        auth_state.with(|s| s.user.as_ref().map(|u| u.full_name()).unwrap_or_default())
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__brand">"EDUCAFRIC"</span>
                <span class="header__title">{move || tx.get(title_key)}</span>
            </div>
            <div class="header__actions">
                <span class="header__user">{user_name}</span>
                <button
                    class="button button--ghost"
                    aria-label="Language"
                    on:click=move |_| ctx.set_language(ctx.language.get_untracked().toggled())
                >
                    {move || match ctx.language.get() {
                        Language::Fr => "EN",
                        Language::En => "FR",
                    }}
                </button>
            </div>
        </header>
    }
}
