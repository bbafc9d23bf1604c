use web_sys::window;

use crate::shared::i18n::Language;

const LANGUAGE_KEY: &str = "educafric_language";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the language preference to localStorage
pub fn save_language(lang: Language) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, lang.code());
    }
}

/// Get the saved language preference from localStorage
pub fn get_language() -> Option<Language> {
    get_local_storage()?
        .get_item(LANGUAGE_KEY)
        .ok()?
        .map(|code| Language::from_code(&code))
}
