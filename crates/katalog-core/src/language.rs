//! Language codes and the request-scoped locale.
//!
//! The "current language" is never ambient: handlers build a [`Locale`] once
//! per request and pass it to whatever renders translated fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::I18nConfig, error::KatalogError};

/// Longest code accepted, e.g. `pt-br` or `zh-hant`.
const MAX_CODE_LEN: usize = 8;

/// A short language identifier such as `ru`, `en` or `uz`.
///
/// Always lowercase ASCII letters, digits, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse and normalise a language code.
    pub fn new(code: &str) -> Result<Self, KatalogError> {
        let code = code.trim().to_ascii_lowercase();
        let valid = !code.is_empty()
            && code.len() <= MAX_CODE_LEN
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KatalogError::Config(format!(
                "invalid language code '{code}'"
            )));
        }
        Ok(Self(code))
    }

    /// Build a code from a literal known to be valid.
    pub(crate) fn known(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = KatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request-scoped holder of the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    language: LanguageCode,
}

impl Locale {
    pub fn new(language: LanguageCode) -> Self {
        Self { language }
    }

    /// Locale for requests that state no preference.
    pub fn from_config(config: &I18nConfig) -> Self {
        Self::new(config.default_language.clone())
    }

    /// Negotiate an `Accept-Language` header against the supported languages.
    ///
    /// Entries are tried by descending `q` weight (ties keep header order).
    /// Each tag matches exactly first, then by its primary subtag, so `en-US`
    /// selects `en`. Falls back to the configured default.
    pub fn from_accept_language(header: &str, config: &I18nConfig) -> Self {
        let mut ranked: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }
                let weight = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                    .unwrap_or(1.0);
                (weight > 0.0).then_some((tag, weight))
            })
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        for (tag, _) in ranked {
            let tag = tag.to_ascii_lowercase();
            let primary = tag.split(['-', '_']).next().unwrap_or(tag.as_str());
            let matched = config
                .find_language(&tag)
                .or_else(|| config.find_language(primary));
            if let Some(language) = matched {
                debug!("accept-language '{header}' negotiated to {language}");
                return Self::new(language.clone());
            }
        }
        Self::from_config(config)
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> I18nConfig {
        I18nConfig::default()
    }

    #[test]
    fn test_language_code_normalised() {
        let code = LanguageCode::new(" EN ").unwrap();
        assert_eq!(code, "en");
        assert_eq!(code.to_string(), "en");
    }

    #[test]
    fn test_language_code_rejects_garbage() {
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("en us").is_err());
        assert!(LanguageCode::new("averyverylongcode").is_err());
    }

    #[test]
    fn test_language_code_serde() {
        let code: LanguageCode = serde_json::from_str("\"UZ\"").unwrap();
        assert_eq!(code.as_str(), "uz");
        assert!(serde_json::from_str::<LanguageCode>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"uz\"");
    }

    #[test]
    fn test_locale_defaults_to_config() {
        let locale = Locale::from_config(&config());
        assert_eq!(locale.language(), "ru");
    }

    #[test]
    fn test_accept_language_primary_subtag() {
        let locale = Locale::from_accept_language("en-US,en;q=0.9", &config());
        assert_eq!(locale.language(), "en");
    }

    #[test]
    fn test_accept_language_respects_weights() {
        let locale = Locale::from_accept_language("en;q=0.3, uz;q=0.8, fr", &config());
        assert_eq!(locale.language(), "uz");
    }

    #[test]
    fn test_accept_language_unsupported_falls_back() {
        let locale = Locale::from_accept_language("fr-FR, de;q=0.5, *;q=0.1", &config());
        assert_eq!(locale.language(), "ru");
        let locale = Locale::from_accept_language("", &config());
        assert_eq!(locale.language(), "ru");
    }

    #[test]
    fn test_accept_language_zero_weight_ignored() {
        let locale = Locale::from_accept_language("en;q=0, uz;q=0.2", &config());
        assert_eq!(locale.language(), "uz");
    }
}
