use std::sync::OnceLock;

use katalog_core::{
    fields::{FieldTable, TranslatedField},
    traits::Translatable,
};
use serde::{Deserialize, Serialize};

/// Shop contact details shown on the contacts page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub working_hours: String,
    pub is_active: bool,

    pub name_ru: Option<String>,
    pub name_en: Option<String>,
    pub name_uz: Option<String>,
    pub address_ru: Option<String>,
    pub address_en: Option<String>,
    pub address_uz: Option<String>,
    pub working_hours_ru: Option<String>,
    pub working_hours_en: Option<String>,
    pub working_hours_uz: Option<String>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            working_hours: String::new(),
            is_active: true,
            name_ru: None,
            name_en: None,
            name_uz: None,
            address_ru: None,
            address_en: None,
            address_uz: None,
            working_hours_ru: None,
            working_hours_en: None,
            working_hours_uz: None,
        }
    }
}

impl Translatable for Contact {
    fn field_table() -> &'static FieldTable<Self> {
        static TABLE: OnceLock<FieldTable<Contact>> = OnceLock::new();
        TABLE.get_or_init(|| {
            FieldTable::new("contact")
                .field(
                    TranslatedField::new("name", |c: &Contact| c.name.as_str())
                        .shadow("ru", |c: &Contact| &c.name_ru, |c: &mut Contact| &mut c.name_ru)
                        .shadow("en", |c: &Contact| &c.name_en, |c: &mut Contact| &mut c.name_en)
                        .shadow("uz", |c: &Contact| &c.name_uz, |c: &mut Contact| &mut c.name_uz),
                )
                .field(
                    TranslatedField::new("address", |c: &Contact| c.address.as_str())
                        .shadow(
                            "ru",
                            |c: &Contact| &c.address_ru,
                            |c: &mut Contact| &mut c.address_ru,
                        )
                        .shadow(
                            "en",
                            |c: &Contact| &c.address_en,
                            |c: &mut Contact| &mut c.address_en,
                        )
                        .shadow(
                            "uz",
                            |c: &Contact| &c.address_uz,
                            |c: &mut Contact| &mut c.address_uz,
                        ),
                )
                .field(
                    TranslatedField::new("working_hours", |c: &Contact| c.working_hours.as_str())
                        .shadow(
                            "ru",
                            |c: &Contact| &c.working_hours_ru,
                            |c: &mut Contact| &mut c.working_hours_ru,
                        )
                        .shadow(
                            "en",
                            |c: &Contact| &c.working_hours_en,
                            |c: &mut Contact| &mut c.working_hours_en,
                        )
                        .shadow(
                            "uz",
                            |c: &Contact| &c.working_hours_uz,
                            |c: &mut Contact| &mut c.working_hours_uz,
                        ),
                )
        })
    }
}
