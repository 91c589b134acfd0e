//! # katalog-shop
//!
//! Catalog entities with their translated-field registrations, the JSON
//! catalog store, and batch translation maintenance.

mod category;
mod contact;
mod fill;
mod product;
mod review;
mod store;

// Re-export public API — consumers use `katalog_shop::*` paths.
pub use category::Category;
pub use contact::Contact;
pub use fill::{fill_catalog, fill_translations, missing_report, FillReport, MissingEntry};
pub use product::{Gender, Product};
pub use review::Review;
pub use store::{Catalog, EntityKind, Record};
