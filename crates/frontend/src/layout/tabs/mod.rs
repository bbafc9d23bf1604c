//! Module tabs of a dashboard
//!
//! - `registry` maps tab key → View
//! - `tab_labels` maps tab key → label and icon

pub mod registry;
pub mod tab_labels;

use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::i18n::Texts;
use crate::shared::icons::icon;
use registry::render_tab_content;
use tab_labels::{tab_icon, tab_label_key};

/// Selected key, falling back to the first tab for unknown or empty keys.
pub fn resolve_active_tab(active: &str, keys: &[&'static str]) -> &'static str {
    keys.iter()
        .copied()
        .find(|k| *k == active)
        .or_else(|| keys.first().copied())
        .unwrap_or_default()
}

/// Tab bar plus the content of the selected module. Only the selected module
/// is mounted.
#[component]
pub fn ModuleTabs(keys: &'static [&'static str]) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let tx = Texts::of("tabs");

    let selected = RwSignal::new(resolve_active_tab(&ctx.active_tab.get_untracked(), keys).to_string());

    Effect::new(move |_| {
        let key = selected.get();
        if ctx.active_tab.get_untracked() != key {
            ctx.activate_tab(&key);
        }
    });

    let active = Memo::new(move |_| resolve_active_tab(&selected.get(), keys));

    view! {
        <div class="module-tabs">
            <TabList selected_value=selected>
                {keys.iter().map(|key| {
                    let key = *key;
                    view! {
                        <Tab value=key.to_string()>
                            <span class="module-tabs__label">
                                {icon(tab_icon(key))}
                                {move || tx.get(tab_label_key(key))}
                            </span>
                        </Tab>
                    }
                }).collect_view()}
            </TabList>
            <div class="module-tabs__content">
                {move || render_tab_content(active.get())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tab_falls_back_to_first() {
        let keys: &[&'static str] = &["a102_students", "a103_sessions"];
        assert_eq!(resolve_active_tab("a103_sessions", keys), "a103_sessions");
        assert_eq!(resolve_active_tab("", keys), "a102_students");
        assert_eq!(resolve_active_tab("a201_users", keys), "a102_students");
        assert_eq!(resolve_active_tab("x", &[]), "");
    }
}
