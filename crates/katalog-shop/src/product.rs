use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use katalog_core::{
    fields::{FieldTable, TranslatedField},
    traits::Translatable,
};
use serde::{Deserialize, Serialize};

/// Target audience of a product.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Kids,
    #[default]
    Unisex,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub category_id: u64,
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub short_description: String,
    pub material: String,
    pub care_instructions: String,
    pub gender: Gender,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,

    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_uz: Option<String>,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub description_uz: Option<String>,
    pub short_description_ru: Option<String>,
    pub short_description_en: Option<String>,
    pub short_description_uz: Option<String>,
    pub material_ru: Option<String>,
    pub material_en: Option<String>,
    pub material_uz: Option<String>,
    pub care_instructions_ru: Option<String>,
    pub care_instructions_en: Option<String>,
    pub care_instructions_uz: Option<String>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            category_id: 0,
            name: String::new(),
            slug: None,
            description: String::new(),
            short_description: String::new(),
            material: String::new(),
            care_instructions: String::new(),
            gender: Gender::default(),
            is_active: true,
            created_at: None,
            name_ru: None,
            name_en: None,
            name_uz: None,
            description_ru: None,
            description_en: None,
            description_uz: None,
            short_description_ru: None,
            short_description_en: None,
            short_description_uz: None,
            material_ru: None,
            material_en: None,
            material_uz: None,
            care_instructions_ru: None,
            care_instructions_en: None,
            care_instructions_uz: None,
        }
    }
}

impl Translatable for Product {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Product>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::new("product")
                .field(
                    TranslatedField::new("name", |p: &Product| p.name.as_str())
                        .shadow(
                            "ru",
                            |p: &Product| &p.name_ru,
                            |p: &mut Product| &mut p.name_ru,
                        )
                        .shadow(
                            "en",
                            |p: &Product| &p.name_en,
                            |p: &mut Product| &mut p.name_en,
                        )
                        .shadow(
                            "uz",
                            |p: &Product| &p.name_uz,
                            |p: &mut Product| &mut p.name_uz,
                        ),
                )
                .field(
                    TranslatedField::new("description", |p: &Product| p.description.as_str())
                        .shadow(
                            "ru",
                            |p: &Product| &p.description_ru,
                            |p: &mut Product| &mut p.description_ru,
                        )
                        .shadow(
                            "en",
                            |p: &Product| &p.description_en,
                            |p: &mut Product| &mut p.description_en,
                        )
                        .shadow(
                            "uz",
                            |p: &Product| &p.description_uz,
                            |p: &mut Product| &mut p.description_uz,
                        ),
                )
                .field(
                    TranslatedField::new("short_description", |p: &Product| p.short_description.as_str())
                        .shadow(
                            "ru",
                            |p: &Product| &p.short_description_ru,
                            |p: &mut Product| &mut p.short_description_ru,
                        )
                        .shadow(
                            "en",
                            |p: &Product| &p.short_description_en,
                            |p: &mut Product| &mut p.short_description_en,
                        )
                        .shadow(
                            "uz",
                            |p: &Product| &p.short_description_uz,
                            |p: &mut Product| &mut p.short_description_uz,
                        ),
                )
                .field(
                    TranslatedField::new("material", |p: &Product| p.material.as_str())
                        .shadow(
                            "ru",
                            |p: &Product| &p.material_ru,
                            |p: &mut Product| &mut p.material_ru,
                        )
                        .shadow(
                            "en",
                            |p: &Product| &p.material_en,
                            |p: &mut Product| &mut p.material_en,
                        )
                        .shadow(
                            "uz",
                            |p: &Product| &p.material_uz,
                            |p: &mut Product| &mut p.material_uz,
                        ),
                )
                .field(
                    TranslatedField::new("care_instructions", |p: &Product| p.care_instructions.as_str())
                        .shadow(
                            "ru",
                            |p: &Product| &p.care_instructions_ru,
                            |p: &mut Product| &mut p.care_instructions_ru,
                        )
                        .shadow(
                            "en",
                            |p: &Product| &p.care_instructions_en,
                            |p: &mut Product| &mut p.care_instructions_en,
                        )
                        .shadow(
                            "uz",
                            |p: &Product| &p.care_instructions_uz,
                            |p: &mut Product| &mut p.care_instructions_uz,
                        ),
                )
        })
    }
}
