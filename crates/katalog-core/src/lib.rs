//! # katalog-core
//!
//! Configuration, error handling, language codes and per-field translation
//! resolution for the katalog shop.

pub mod config;
pub mod error;
pub mod fields;
pub mod language;
pub mod resolver;
pub mod tags;
pub mod traits;
