use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation for server-paginated tables (pages are 1-based).
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<u32>,
    #[prop(into)]
    total_pages: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let tx = Texts::of("common");
    let last = move || total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title=move || tx.get("first_page")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title=move || tx.get("previous_page")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} {} / {}", tx.get("page"), current_page.get(), last())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last()
                title=move || tx.get("next_page")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || current_page.get() >= last()
                title=move || tx.get("last_page")
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
