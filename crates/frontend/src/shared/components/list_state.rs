use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::{use_language, Texts};
use crate::shared::list_pipeline::ListViewState;

/// Renders the placeholder matching `state`, or `children` once loaded.
#[component]
pub fn ListStateView(
    #[prop(into)]
    state: Signal<ListViewState>,
    /// Text of the empty placeholder
    #[prop(into)]
    empty_text: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let tx = Texts::of("common");
    let lang = use_language();

    move || match state.get() {
        ListViewState::Loading => view! {
            <div class="list-placeholder list-placeholder--loading">
                <Spinner />
                <span>{tx.get("loading")}</span>
            </div>
        }
        .into_any(),
        ListViewState::Error(e) => view! {
            <div class="list-placeholder list-placeholder--error">
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{e.user_message(lang.get())}</span>
                </MessageBar>
            </div>
        }
        .into_any(),
        ListViewState::Empty => view! {
            <div class="list-placeholder list-placeholder--empty">{empty_text.get()}</div>
        }
        .into_any(),
        ListViewState::Loaded => children().into_any(),
    }
}
