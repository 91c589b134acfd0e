use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use katalog_core::{
    fields::{FieldTable, TranslatedField},
    traits::Translatable,
};
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,

    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_uz: Option<String>,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            slug: None,
            description: String::new(),
            is_active: true,
            created_at: None,
            name_ru: None,
            name_en: None,
            name_uz: None,
            description_ru: None,
            description_en: None,
            description_uz: None,
        }
    }
}

impl Translatable for Category {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Category>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::new("category")
                .field(
                    TranslatedField::new("name", |c: &Category| c.name.as_str())
                        .shadow("ru", |c: &Category| &c.name_ru, |c: &mut Category| &mut c.name_ru)
                        .shadow("en", |c: &Category| &c.name_en, |c: &mut Category| &mut c.name_en)
                        .shadow("uz", |c: &Category| &c.name_uz, |c: &mut Category| &mut c.name_uz),
                )
                .field(
                    TranslatedField::new("description", |c: &Category| c.description.as_str())
                        .shadow(
                            "ru",
                            |c: &Category| &c.description_ru,
                            |c: &mut Category| &mut c.description_ru,
                        )
                        .shadow(
                            "en",
                            |c: &Category| &c.description_en,
                            |c: &mut Category| &mut c.description_en,
                        )
                        .shadow(
                            "uz",
                            |c: &Category| &c.description_uz,
                            |c: &mut Category| &mut c.description_uz,
                        ),
                )
        })
    }
}
