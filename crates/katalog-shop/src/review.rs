use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use katalog_core::{
    fields::{FieldTable, TranslatedField},
    traits::Translatable,
};
use serde::{Deserialize, Serialize};

/// A customer review of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: u64,
    pub product_id: u64,
    pub author: String,
    /// 1 to 5.
    pub rating: u8,
    pub title: String,
    pub text: String,
    pub is_approved: bool,
    pub created_at: Option<DateTime<Utc>>,

    pub title_ru: Option<String>,
    pub title_en: Option<String>,
    pub title_uz: Option<String>,
    pub text_ru: Option<String>,
    pub text_en: Option<String>,
    pub text_uz: Option<String>,
}

impl Default for Review {
    fn default() -> Self {
        Self {
            id: 0,
            product_id: 0,
            author: String::new(),
            rating: 5,
            title: String::new(),
            text: String::new(),
            is_approved: true,
            created_at: None,
            title_ru: None,
            title_en: None,
            title_uz: None,
            text_ru: None,
            text_en: None,
            text_uz: None,
        }
    }
}

impl Translatable for Review {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Review>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::new("review")
                .field(
                    TranslatedField::new("title", |r: &Review| r.title.as_str())
                        .shadow("ru", |r: &Review| &r.title_ru, |r: &mut Review| &mut r.title_ru)
                        .shadow("en", |r: &Review| &r.title_en, |r: &mut Review| &mut r.title_en)
                        .shadow("uz", |r: &Review| &r.title_uz, |r: &mut Review| &mut r.title_uz),
                )
                .field(
                    TranslatedField::new("text", |r: &Review| r.text.as_str())
                        .shadow("ru", |r: &Review| &r.text_ru, |r: &mut Review| &mut r.text_ru)
                        .shadow("en", |r: &Review| &r.text_en, |r: &mut Review| &mut r.text_en)
                        .shadow("uz", |r: &Review| &r.text_uz, |r: &mut Review| &mut r.text_uz),
                )
        })
    }
}
