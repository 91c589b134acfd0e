//! Batch translation maintenance: fill empty shadows from base values and
//! report records that still lack translations.

use katalog_core::{
    config::I18nConfig, error::KatalogError, language::LanguageCode,
    resolver::TranslationResolver, traits::Translatable,
};
use tracing::{info, warn};

use crate::{Catalog, Category, Contact, EntityKind, Product, Record, Review};

/// Outcome of [`fill_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    pub language: LanguageCode,
    /// Records changed, per entity kind, in processing order.
    pub updated: Vec<(EntityKind, usize)>,
}

impl FillReport {
    pub fn total(&self) -> usize {
        self.updated.iter().map(|(_, n)| n).sum()
    }
}

/// A record with base text in fields that have no translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    pub kind: EntityKind,
    pub id: u64,
    pub fields: Vec<&'static str>,
}

/// Copy each non-empty base value into its empty `language` shadow.
///
/// Returns how many entities changed. Shadows that already hold text are
/// left alone, so running twice changes nothing the second time.
pub fn fill_translations<E: Translatable>(entities: &mut [E], language: &str) -> usize {
    let table = E::field_table();
    let mut updated = 0;

    for entity in entities.iter_mut() {
        let mut changed = false;
        for field in table.iter() {
            let Some(shadow) = field.shadow_for(language) else {
                continue;
            };
            if shadow.value(entity).is_some() {
                continue;
            }
            let base = field.base_value(entity);
            if base.is_empty() {
                continue;
            }
            let base = base.to_string();
            *shadow.slot(entity) = Some(base);
            changed = true;
        }
        if changed {
            updated += 1;
        }
    }

    updated
}

/// Fill `language` shadows across the catalog, or only for `model`.
///
/// The language must be supported and the model known; nothing is touched
/// otherwise.
pub fn fill_catalog(
    catalog: &mut Catalog,
    config: &I18nConfig,
    model: Option<&str>,
    language: &str,
) -> Result<FillReport, KatalogError> {
    let language = config.supported_language(language)?;
    let kinds = match model {
        Some(name) => vec![EntityKind::parse(name)?],
        None => EntityKind::ALL.to_vec(),
    };

    let mut report = FillReport {
        language: language.clone(),
        updated: Vec::with_capacity(kinds.len()),
    };
    for kind in kinds {
        let updated = match kind {
            EntityKind::Category => fill_kind::<Category>(catalog, &language),
            EntityKind::Product => fill_kind::<Product>(catalog, &language),
            EntityKind::Review => fill_kind::<Review>(catalog, &language),
            EntityKind::Contact => fill_kind::<Contact>(catalog, &language),
        };
        info!("Updated {updated} {kind} record(s) for language {language}");
        report.updated.push((kind, updated));
    }
    Ok(report)
}

fn fill_kind<E: Record>(catalog: &mut Catalog, language: &LanguageCode) -> usize {
    if E::field_table()
        .iter()
        .all(|f| f.shadow_for(language.as_str()).is_none())
    {
        warn!("{} has no '{language}' columns, skipping", E::KIND);
        return 0;
    }
    fill_translations(E::all_mut(catalog), language.as_str())
}

/// Every record missing at least one `language` translation.
pub fn missing_report(
    catalog: &Catalog,
    resolver: &TranslationResolver,
    language: &str,
) -> Vec<MissingEntry> {
    let mut out = Vec::new();
    collect_missing::<Category>(catalog, resolver, language, &mut out);
    collect_missing::<Product>(catalog, resolver, language, &mut out);
    collect_missing::<Review>(catalog, resolver, language, &mut out);
    collect_missing::<Contact>(catalog, resolver, language, &mut out);
    out
}

fn collect_missing<E: Record>(
    catalog: &Catalog,
    resolver: &TranslationResolver,
    language: &str,
    out: &mut Vec<MissingEntry>,
) {
    for record in E::all(catalog) {
        let fields = resolver.missing_translations(record, language);
        if !fields.is_empty() {
            out.push(MissingEntry {
                kind: E::KIND,
                id: record.id(),
                fields,
            });
        }
    }
}
