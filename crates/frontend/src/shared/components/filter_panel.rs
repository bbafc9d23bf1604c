use contracts::shared::list_query::FILTER_ALL;
use leptos::prelude::*;

use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use crate::shared::list_pipeline::FilterState;
use crate::shared::list_utils::SearchInput;

/// Filter choices labelled by the `<prefix><value>` keys of a module section.
pub fn translated_options(
    tx: Texts,
    prefix: &'static str,
    values: &'static [&'static str],
) -> Signal<Vec<(String, String)>> {
    Signal::derive(move || {
        values
            .iter()
            .map(|v| (v.to_string(), tx.get(&format!("{prefix}{v}"))))
            .collect()
    })
}

/// Search box, filter dropdown and action slot of a list view.
///
/// `options` are `(value, label)` pairs; an "all" entry is prepended.
#[component]
pub fn FilterBar(
    filter: RwSignal<FilterState>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    search_placeholder: Signal<String>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let tx = Texts::of("common");

    let active_filters_count = move || {
        filter.with(|f| {
            usize::from(!f.search_term.trim().is_empty()) + usize::from(f.filter_key != FILTER_ALL)
        })
    };

    let active_label = move || {
        let key = filter.with(|f| f.filter_key.clone());
        options
            .get()
            .into_iter()
            .find(|(value, _)| *value == key)
            .map(|(_, label)| label)
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">{move || tx.get("filters")}</span>
                    {move || {
                        let count = active_filters_count();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-content">
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search_term.clone()))
                        on_change=Callback::new(move |term: String| filter.update(|f| f.search_term = term))
                        placeholder=search_placeholder
                    />
                    <select
                        class="filter-select"
                        prop:value=move || filter.with(|f| f.filter_key.clone())
                        on:change=move |ev| {
                            let key = event_target_value(&ev);
                            filter.update(|f| f.filter_key = key);
                        }
                    >
                        <option value=FILTER_ALL>{move || tx.get("filter_all")}</option>
                        {move || options.get().into_iter().map(|(value, label)| {
                            view! { <option value=value>{label}</option> }
                        }).collect_view()}
                    </select>
                    {move || active_label().map(|label| view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| filter.update(|f| f.filter_key = FILTER_ALL.to_string()))
                        />
                    })}
                </div>
                <div class="filter-panel-header__right">
                    {children.map(|c| c())}
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
