//! Per-entity-type tables of translated fields.
//!
//! Each translated base field maps to an ordered list of language shadows,
//! each shadow a pair of plain accessor functions. Lookup by name replaces
//! probing attributes at runtime.

use crate::error::KatalogError;

/// Reads a shadow column.
pub type ShadowGetter<E> = fn(&E) -> &Option<String>;
/// Writes a shadow column.
pub type ShadowSetter<E> = fn(&mut E) -> &mut Option<String>;

/// One language variant of a base field, e.g. `name_en`.
pub struct Shadow<E> {
    language: &'static str,
    get: ShadowGetter<E>,
    get_mut: ShadowSetter<E>,
}

impl<E> Shadow<E> {
    /// The shadow value, or `None` when absent or empty.
    pub fn value<'e>(&self, entity: &'e E) -> Option<&'e str> {
        (self.get)(entity).as_deref().filter(|v| !v.is_empty())
    }

    pub fn slot<'e>(&self, entity: &'e mut E) -> &'e mut Option<String> {
        (self.get_mut)(entity)
    }
}

/// A translated base field and its shadows.
pub struct TranslatedField<E> {
    name: &'static str,
    base: fn(&E) -> &str,
    shadows: Vec<Shadow<E>>,
}

impl<E> TranslatedField<E> {
    pub fn new(name: &'static str, base: fn(&E) -> &str) -> Self {
        Self {
            name,
            base,
            shadows: Vec::new(),
        }
    }

    /// Register the `<name>_<language>` shadow.
    pub fn shadow(
        mut self,
        language: &'static str,
        get: ShadowGetter<E>,
        get_mut: ShadowSetter<E>,
    ) -> Self {
        self.shadows.push(Shadow {
            language,
            get,
            get_mut,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn base_value<'e>(&self, entity: &'e E) -> &'e str {
        (self.base)(entity)
    }

    /// Shadow for `language`, if the entity type has one. Codes are compared
    /// exactly; shadows are registered in lowercase.
    pub fn shadow_for(&self, language: &str) -> Option<&Shadow<E>> {
        self.shadows.iter().find(|s| s.language == language)
    }

    /// Non-empty shadow value for `language`.
    pub fn translation<'e>(&self, entity: &'e E, language: &str) -> Option<&'e str> {
        self.shadow_for(language).and_then(|s| s.value(entity))
    }
}

/// All translated fields of one entity type, in registration order.
pub struct FieldTable<E> {
    entity: &'static str,
    fields: Vec<TranslatedField<E>>,
}

impl<E> FieldTable<E> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: TranslatedField<E>) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TranslatedField<E>> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Like [`get`](Self::get), failing with `UnknownField` for names the
    /// entity type does not register.
    pub fn require(&self, name: &str) -> Result<&TranslatedField<E>, KatalogError> {
        self.get(name).ok_or_else(|| KatalogError::UnknownField {
            entity: self.entity,
            field: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslatedField<E>> {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag {
        label: String,
        label_en: Option<String>,
    }

    fn table() -> FieldTable<Tag> {
        FieldTable::new("tag").field(
            TranslatedField::new("label", |t: &Tag| t.label.as_str()).shadow(
                "en",
                |t: &Tag| &t.label_en,
                |t: &mut Tag| &mut t.label_en,
            ),
        )
    }

    #[test]
    fn test_require_unknown_field() {
        let err = table().require("title").err().unwrap();
        assert!(matches!(
            err,
            KatalogError::UnknownField { entity: "tag", ref field } if field == "title"
        ));
    }

    #[test]
    fn test_empty_shadow_reads_as_missing() {
        let tag = Tag {
            label: "Новинка".into(),
            label_en: Some(String::new()),
        };
        let table = table();
        let field = table.require("label").unwrap();
        assert_eq!(field.translation(&tag, "en"), None);
        assert_eq!(field.translation(&tag, "uz"), None);
        assert_eq!(field.base_value(&tag), "Новинка");
    }

    #[test]
    fn test_shadow_slot_writes_through() {
        let mut tag = Tag {
            label: "Новинка".into(),
            label_en: None,
        };
        let table = table();
        let field = table.require("label").unwrap();
        *field.shadow_for("en").unwrap().slot(&mut tag) = Some("New".into());
        assert_eq!(field.translation(&tag, "en"), Some("New"));
        assert!(field.shadow_for("EN").is_none());
    }
}
