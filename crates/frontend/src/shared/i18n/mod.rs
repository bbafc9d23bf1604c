//! Bilingual (FR/EN) text table.
//!
//! Texts live in `translations.json` as `module -> key -> language -> text`
//! and are parsed once on first use.

use std::collections::HashMap;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::layout::global_context::AppGlobalContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Fr,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

type Table = HashMap<String, HashMap<String, HashMap<String, String>>>;

static TRANSLATIONS: Lazy<Table> = Lazy::new(|| {
    serde_json::from_str(include_str!("translations.json")).unwrap_or_else(|e| {
        log::error!("translation table is invalid: {}", e);
        HashMap::new()
    })
});

fn lookup(table: &Table, module: &str, key: &str, lang: Language) -> String {
    let entry = table.get(module).and_then(|m| m.get(key));
    entry
        .and_then(|texts| {
            texts
                .get(lang.code())
                .or_else(|| texts.get(Language::Fr.code()))
        })
        .cloned()
        .unwrap_or_else(|| key.to_string())
}

/// Text for `(module, key)`; falls back to French, then to the key itself.
pub fn tr(module: &str, key: &str, lang: Language) -> String {
    lookup(&TRANSLATIONS, module, key, lang)
}

/// Day name for ISO weekday 1 (Monday) ..= 7 (Sunday).
pub fn day_name(day: u8, lang: Language) -> String {
    let key = match day {
        1 => "monday",
        2 => "tuesday",
        3 => "wednesday",
        4 => "thursday",
        5 => "friday",
        6 => "saturday",
        7 => "sunday",
        _ => return day.to_string(),
    };
    tr("days", key, lang)
}

/// Reactive current language from the global context.
pub fn use_language() -> Signal<Language> {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    ctx.language.into()
}

/// Text lookup bound to one module and the current language.
#[derive(Clone, Copy)]
pub struct Texts {
    module: &'static str,
    lang: Signal<Language>,
}

impl Texts {
    pub fn of(module: &'static str) -> Self {
        Self {
            module,
            lang: use_language(),
        }
    }

    pub fn get(&self, key: &str) -> String {
        tr(self.module, key, self.lang.get())
    }

    /// Text from the shared `common` section.
    pub fn common(&self, key: &str) -> String {
        tr("common", key, self.lang.get())
    }

    /// Reactive text for component props.
    pub fn signal(self, key: &'static str) -> Signal<String> {
        Signal::derive(move || self.get(key))
    }

    pub fn lang(&self) -> Language {
        self.lang.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_table_parses() {
        assert!(!TRANSLATIONS.is_empty());
        assert_ne!(tr("common", "loading", Language::En), "loading");
    }

    #[test]
    fn test_fallback_order() {
        let mut table: Table = HashMap::new();
        table
            .entry("students".into())
            .or_default()
            .insert("title".into(), HashMap::from([("fr".to_string(), "Élèves".to_string())]));

        assert_eq!(lookup(&table, "students", "title", Language::En), "Élèves");
        assert_eq!(lookup(&table, "students", "missing", Language::En), "missing");
        assert_eq!(lookup(&table, "nope", "title", Language::Fr), "title");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("EN"), Language::En);
        assert_eq!(Language::from_code("de"), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(day_name(1, Language::En), "Monday");
        assert_eq!(day_name(9, Language::Fr), "9");
    }
}
