//! Entry points used by page templates and API serializers.
//!
//! A [`Translator`] binds the process-wide resolver to one request's
//! [`Locale`]; every helper that takes an optional language falls back to
//! the locale's language rather than any global state.

use serde::Serialize;

use crate::{
    error::KatalogError,
    language::Locale,
    resolver::{TranslatedContent, TranslationResolver},
    traits::Translatable,
};

/// Template context produced by [`Translator::show_translated_content`].
#[derive(Debug, Clone, Serialize)]
pub struct ShownContent<'e> {
    pub content: TranslatedContent<'e>,
    pub language: String,
}

/// Request-scoped translation helpers.
#[derive(Debug, Clone)]
pub struct Translator<'r> {
    resolver: &'r TranslationResolver,
    locale: Locale,
}

impl<'r> Translator<'r> {
    pub fn new(resolver: &'r TranslationResolver, locale: Locale) -> Self {
        Self { resolver, locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn resolver(&self) -> &'r TranslationResolver {
        self.resolver
    }

    /// `{% get_translated product "name" "en" %}`
    pub fn get_translated<'e, E: Translatable>(
        &self,
        entity: &'e E,
        field: &str,
        language: Option<&str>,
    ) -> Result<&'e str, KatalogError> {
        self.resolver
            .resolve(entity, field, Some(self.language_or_current(language)))
    }

    /// `{% get_translated_content product "name,description" %}`
    ///
    /// Names are trimmed; empty entries are ignored.
    pub fn get_translated_content<'e, E: Translatable>(
        &self,
        entity: &'e E,
        fields: &str,
        language: Option<&str>,
    ) -> Result<TranslatedContent<'e>, KatalogError> {
        let names = split_fields(fields);
        self.resolver.resolve_many(
            entity,
            names.as_slice(),
            Some(self.language_or_current(language)),
        )
    }

    /// `{{ product|translate_field:"name" }}`, always in the current language.
    pub fn translate_field<'e, E: Translatable>(
        &self,
        entity: &'e E,
        field: &str,
    ) -> Result<&'e str, KatalogError> {
        self.get_translated(entity, field, None)
    }

    /// Context for the translated-content partial.
    pub fn show_translated_content<'e, E: Translatable>(
        &self,
        entity: &'e E,
        fields: &str,
        language: Option<&str>,
    ) -> Result<ShownContent<'e>, KatalogError> {
        let language = self.language_or_current(language);
        Ok(ShownContent {
            content: self.get_translated_content(entity, fields, Some(language))?,
            language: language.to_string(),
        })
    }

    fn language_or_current<'a>(&'a self, language: Option<&'a str>) -> &'a str {
        language.unwrap_or(self.locale.language().as_str())
    }
}

fn split_fields(fields: &str) -> Vec<&str> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::I18nConfig;
    use crate::fields::{FieldTable, TranslatedField};
    use crate::language::LanguageCode;
    use std::sync::OnceLock;

    struct Contact {
        name: String,
        name_en: Option<String>,
        address: String,
        address_en: Option<String>,
    }

    impl Translatable for Contact {
        fn field_table() -> &'static FieldTable<Self> {
            static TABLE: OnceLock<FieldTable<Contact>> = OnceLock::new();
            TABLE.get_or_init(|| {
                FieldTable::new("contact")
                    .field(
                        TranslatedField::new("name", |c: &Contact| c.name.as_str()).shadow(
                            "en",
                            |c: &Contact| &c.name_en,
                            |c: &mut Contact| &mut c.name_en,
                        ),
                    )
                    .field(
                        TranslatedField::new("address", |c: &Contact| c.address.as_str())
                            .shadow(
                                "en",
                                |c: &Contact| &c.address_en,
                                |c: &mut Contact| &mut c.address_en,
                            ),
                    )
            })
        }
    }

    fn office() -> Contact {
        Contact {
            name: "Главный офис".into(),
            name_en: Some("Head office".into()),
            address: "Ташкент".into(),
            address_en: Some("Tashkent".into()),
        }
    }

    fn translator<'r>(lang: &str, resolver: &'r TranslationResolver) -> Translator<'r> {
        Translator::new(resolver, Locale::new(LanguageCode::new(lang).unwrap()))
    }

    #[test]
    fn test_get_translated_uses_locale() {
        let resolver = TranslationResolver::new(&I18nConfig::default());
        let en = translator("en", &resolver);
        let contact = office();
        assert_eq!(en.get_translated(&contact, "name", None).unwrap(), "Head office");
        assert_eq!(
            en.get_translated(&contact, "name", Some("ru")).unwrap(),
            "Главный офис"
        );
        assert_eq!(en.translate_field(&contact, "address").unwrap(), "Tashkent");
    }

    #[test]
    fn test_get_translated_content_splits_and_trims() {
        let resolver = TranslationResolver::new(&I18nConfig::default());
        let en = translator("en", &resolver);
        let contact = office();
        let content = en
            .get_translated_content(&contact, " name , address,", None)
            .unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content.get("address"), Some("Tashkent"));
    }

    #[test]
    fn test_get_translated_content_unknown_field() {
        let resolver = TranslationResolver::new(&I18nConfig::default());
        let uz = translator("uz", &resolver);
        let err = uz
            .get_translated_content(&office(), "name,phone", None)
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown field 'phone' on contact");
    }

    #[test]
    fn test_show_translated_content_reports_language() {
        let resolver = TranslationResolver::new(&I18nConfig::default());
        let uz = translator("uz", &resolver);
        let contact = office();

        let shown = uz.show_translated_content(&contact, "name", None).unwrap();
        assert_eq!(shown.language, "uz");
        assert_eq!(shown.content.get("name"), Some("Главный офис"));

        let shown = uz
            .show_translated_content(&contact, "name", Some("en"))
            .unwrap();
        let json = serde_json::to_value(&shown).unwrap();
        assert_eq!(json["language"], "en");
        assert_eq!(json["content"]["name"], "Head office");
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields("name,description"), vec!["name", "description"]);
        assert!(split_fields(" , ").is_empty());
    }
}
