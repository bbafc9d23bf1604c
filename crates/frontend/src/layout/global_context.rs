use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::config::app_config;
use crate::shared::i18n::Language;
use crate::system::auth::storage;

/// Application-wide UI state shared by both dashboards.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub language: RwSignal<Language>,
    /// Key of the selected module tab; empty means the dashboard default.
    pub active_tab: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let language = storage::get_language()
            .unwrap_or_else(|| Language::from_code(&app_config().ui.default_language));
        Self {
            language: RwSignal::new(language),
            active_tab: RwSignal::new(String::new()),
        }
    }

    pub fn set_language(&self, lang: Language) {
        self.language.set(lang);
        storage::save_language(lang);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active_tab.set(key.to_string());
    }

    /// Keep the active tab in `?tab=` so a reload reopens the same module.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab") {
            self.active_tab.set(tab.clone());
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active_tab.get();
            if tab.is_empty() {
                return;
            }
            let query_string =
                serde_qs::to_string(&HashMap::from([("tab".to_string(), tab)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
