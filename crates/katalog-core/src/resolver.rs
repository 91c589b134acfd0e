//! Translated field lookup with language fallback.
//!
//! Resolution order for `field` in `language`:
//! 1. the `field_<language>` shadow, if non-empty;
//! 2. each language of the fallback chain (skipping `language`), first
//!    non-empty shadow wins;
//! 3. the base field itself, which may be empty.
//!
//! The chain is one flat list applied in the same order whatever language
//! was requested.
//!
//! Only shadows of configured languages take part: an entity may carry a
//! `field_uz` column, but when `uz` is not in `languages` that column reads
//! as absent. Requested codes are lowercased before lookup, the same way
//! [`LanguageCode`] stores them, and then compared exactly.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::{
    config::I18nConfig, error::KatalogError, fields::TranslatedField, language::LanguageCode,
    traits::Translatable,
};

/// Resolves translated fields against the process-wide language settings.
#[derive(Debug, Clone)]
pub struct TranslationResolver {
    default_language: LanguageCode,
    languages: Vec<LanguageCode>,
    fallback_chain: Vec<LanguageCode>,
}

impl TranslationResolver {
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            default_language: config.default_language.clone(),
            languages: config.languages.clone(),
            fallback_chain: config.fallback_languages.clone(),
        }
    }

    /// Language used when a call does not name one.
    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Languages whose shadows are read.
    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn fallback_chain(&self) -> &[LanguageCode] {
        &self.fallback_chain
    }

    /// Best available text for `field` in `language` (default language when
    /// `None`).
    ///
    /// Fails only when `field` is not a translated field of `E`. Missing or
    /// empty shadows are never an error.
    pub fn resolve<'e, E: Translatable>(
        &self,
        entity: &'e E,
        field: &str,
        language: Option<&str>,
    ) -> Result<&'e str, KatalogError> {
        let field = E::field_table().require(field)?;
        let language = self.requested(language);
        Ok(self.pick(field, entity, &language))
    }

    /// [`resolve`](Self::resolve) for each name in `fields`, in order.
    ///
    /// The first unknown name aborts the whole call.
    pub fn resolve_many<'e, E, S>(
        &self,
        entity: &'e E,
        fields: &[S],
        language: Option<&str>,
    ) -> Result<TranslatedContent<'e>, KatalogError>
    where
        E: Translatable,
        S: AsRef<str>,
    {
        let table = E::field_table();
        let language = self.requested(language);
        let mut content = TranslatedContent::default();
        for name in fields {
            let field = table.require(name.as_ref())?;
            content.insert(field.name(), self.pick(field, entity, &language));
        }
        Ok(content)
    }

    /// Whether `field` has its own non-empty translation in `language`.
    ///
    /// Fallbacks do not count. Unknown fields report `false`.
    pub fn has_translation<E: Translatable>(
        &self,
        entity: &E,
        field: &str,
        language: Option<&str>,
    ) -> bool {
        let language = self.requested(language);
        E::field_table()
            .get(field)
            .and_then(|f| self.own_translation(f, entity, &language))
            .is_some()
    }

    /// Translated fields with base text but no `language` shadow.
    pub fn missing_translations<E: Translatable>(
        &self,
        entity: &E,
        language: &str,
    ) -> Vec<&'static str> {
        let language = language.to_ascii_lowercase();
        E::field_table()
            .iter()
            .filter(|f| {
                !f.base_value(entity).is_empty()
                    && self.own_translation(f, entity, &language).is_none()
            })
            .map(|f| f.name())
            .collect()
    }

    fn requested(&self, language: Option<&str>) -> String {
        match language {
            Some(code) => code.to_ascii_lowercase(),
            None => self.default_language.to_string(),
        }
    }

    fn is_supported(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Non-empty shadow for `language`, absent for unconfigured languages.
    fn own_translation<'e, E>(
        &self,
        field: &TranslatedField<E>,
        entity: &'e E,
        language: &str,
    ) -> Option<&'e str> {
        if !self.is_supported(language) {
            return None;
        }
        field.translation(entity, language)
    }

    fn pick<'e, E>(&self, field: &TranslatedField<E>, entity: &'e E, language: &str) -> &'e str {
        if let Some(value) = self.own_translation(field, entity, language) {
            return value;
        }

        for fallback in &self.fallback_chain {
            if fallback == language {
                continue;
            }
            if let Some(value) = self.own_translation(field, entity, fallback.as_str()) {
                debug!(
                    "{}: no '{language}' translation, using '{fallback}'",
                    field.name()
                );
                return value;
            }
        }

        debug!(
            "{}: no '{language}' translation or fallback, using base value",
            field.name()
        );
        field.base_value(entity)
    }
}

/// Field name to resolved text, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatedContent<'e> {
    entries: Vec<(&'static str, &'e str)>,
}

impl<'e> TranslatedContent<'e> {
    /// A repeated field keeps its first position.
    fn insert(&mut self, field: &'static str, value: &'e str) {
        if self.get(field).is_none() {
            self.entries.push((field, value));
        }
    }

    pub fn get(&self, field: &str) -> Option<&'e str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'e str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TranslatedContent<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}
