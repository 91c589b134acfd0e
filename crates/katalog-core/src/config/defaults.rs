//! Default value functions used by serde for config deserialization.

use crate::language::LanguageCode;

pub fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_language() -> LanguageCode {
    LanguageCode::known("ru")
}

pub fn default_languages() -> Vec<LanguageCode> {
    ["ru", "en", "uz"]
        .into_iter()
        .map(LanguageCode::known)
        .collect()
}

pub fn default_fallback_languages() -> Vec<LanguageCode> {
    vec![LanguageCode::known("ru")]
}
