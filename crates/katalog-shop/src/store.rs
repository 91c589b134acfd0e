//! JSON-backed catalog document.

use std::fmt;
use std::path::Path;

use katalog_core::{error::KatalogError, traits::Translatable};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Category, Contact, Product, Review};

/// The kinds of record a catalog holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Category,
    Product,
    Review,
    Contact,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Category,
        EntityKind::Product,
        EntityKind::Review,
        EntityKind::Contact,
    ];

    /// Parse a model name such as `product`.
    pub fn parse(name: &str) -> Result<Self, KatalogError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "product" => Ok(Self::Product),
            "review" => Ok(Self::Review),
            "contact" => Ok(Self::Contact),
            other => Err(KatalogError::Config(format!(
                "unknown model '{other}' (expected category, product, review or contact)"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Product => "product",
            Self::Review => "review",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A translatable record stored in a [`Catalog`].
pub trait Record: Translatable {
    const KIND: EntityKind;

    fn id(&self) -> u64;
    fn all(catalog: &Catalog) -> &[Self];
    fn all_mut(catalog: &mut Catalog) -> &mut [Self];
}

/// Every record of the shop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

impl Catalog {
    /// Load a catalog from a JSON file. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self, KatalogError> {
        if !path.exists() {
            info!("Catalog not found at {}, starting empty", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        info!(
            "Loaded catalog from {} ({} categories, {} products, {} reviews, {} contacts)",
            path.display(),
            catalog.categories.len(),
            catalog.products.len(),
            catalog.reviews.len(),
            catalog.contacts.len()
        );
        Ok(catalog)
    }

    /// Write the catalog as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), KatalogError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("Saved catalog to {}", path.display());
        Ok(())
    }

    /// Look up a record by id.
    pub fn find<E: Record>(&self, id: u64) -> Result<&E, KatalogError> {
        E::all(self)
            .iter()
            .find(|r| r.id() == id)
            .ok_or(KatalogError::NotFound {
                entity: E::KIND.as_str(),
                id,
            })
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Category => self.categories.len(),
            EntityKind::Product => self.products.len(),
            EntityKind::Review => self.reviews.len(),
            EntityKind::Contact => self.contacts.len(),
        }
    }
}

impl Record for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> u64 {
        self.id
    }

    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.categories
    }

    fn all_mut(catalog: &mut Catalog) -> &mut [Self] {
        &mut catalog.categories
    }
}

impl Record for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> u64 {
        self.id
    }

    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.products
    }

    fn all_mut(catalog: &mut Catalog) -> &mut [Self] {
        &mut catalog.products
    }
}

impl Record for Review {
    const KIND: EntityKind = EntityKind::Review;

    fn id(&self) -> u64 {
        self.id
    }

    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.reviews
    }

    fn all_mut(catalog: &mut Catalog) -> &mut [Self] {
        &mut catalog.reviews
    }
}

impl Record for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn id(&self) -> u64 {
        self.id
    }

    fn all(catalog: &Catalog) -> &[Self] {
        &catalog.contacts
    }

    fn all_mut(catalog: &mut Catalog) -> &mut [Self] {
        &mut catalog.contacts
    }
}
