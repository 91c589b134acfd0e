mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::error::KatalogError;
use crate::language::LanguageCode;
use defaults::*;

/// Top-level katalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub katalog: KatalogConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KatalogConfig {
    /// JSON document holding the catalog records.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for KatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            log_level: default_log_level(),
        }
    }
}

/// Language settings, read once at startup and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// The base language. Base fields hold text in this language.
    #[serde(default = "default_language")]
    pub default_language: LanguageCode,
    /// Supported languages, in display order.
    #[serde(default = "default_languages")]
    pub languages: Vec<LanguageCode>,
    /// Single global chain tried, in order, when the requested
    /// language has no translation.
    #[serde(default = "default_fallback_languages")]
    pub fallback_languages: Vec<LanguageCode>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            languages: default_languages(),
            fallback_languages: default_fallback_languages(),
        }
    }
}

impl I18nConfig {
    /// Check that the language settings are internally consistent.
    pub fn validate(&self) -> Result<(), KatalogError> {
        if self.languages.is_empty() {
            return Err(KatalogError::Config(
                "i18n.languages must list at least one language".into(),
            ));
        }
        let mut seen = HashSet::new();
        for lang in &self.languages {
            if !seen.insert(lang) {
                return Err(KatalogError::Config(format!(
                    "i18n.languages lists '{lang}' more than once"
                )));
            }
        }
        if !self.is_supported(self.default_language.as_str()) {
            return Err(KatalogError::Config(format!(
                "i18n.default_language '{}' is not in i18n.languages",
                self.default_language
            )));
        }
        for lang in &self.fallback_languages {
            if !self.is_supported(lang.as_str()) {
                return Err(KatalogError::Config(format!(
                    "i18n.fallback_languages entry '{lang}' is not in i18n.languages"
                )));
            }
        }
        Ok(())
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.find_language(code).is_some()
    }

    /// Return the supported language matching `code`, ignoring case.
    pub fn find_language(&self, code: &str) -> Option<&LanguageCode> {
        let code = code.trim();
        self.languages
            .iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(code))
    }

    /// Parse `code` and require it to be a supported language.
    pub fn supported_language(&self, code: &str) -> Result<LanguageCode, KatalogError> {
        self.find_language(code).cloned().ok_or_else(|| {
            KatalogError::Config(format!(
                "unsupported language '{code}' (supported: {})",
                self.languages
                    .iter()
                    .map(LanguageCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Parse and validate configuration from TOML text.
pub fn from_toml(content: &str) -> Result<Config, KatalogError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| KatalogError::Config(format!("failed to parse config: {}", e)))?;
    config.i18n.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, KatalogError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| KatalogError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config = from_toml(&content)?;
    info!(
        "Loaded config from {} (languages: {}, default: {})",
        path.display(),
        config.i18n.languages.len(),
        config.i18n.default_language
    );
    Ok(config)
}
