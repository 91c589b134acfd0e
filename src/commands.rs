//! Command handlers. Each returns the text to print.

use katalog_core::{
    config::I18nConfig, error::KatalogError, language::LanguageCode,
    resolver::TranslationResolver, tags::Translator,
};
use katalog_shop::{
    missing_report, Catalog, Category, Contact, EntityKind, Product, Record, Review,
};

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub catalog: &'a Catalog,
    pub i18n: &'a I18nConfig,
    pub translator: &'a Translator<'a>,
}

/// `katalog get <kind> <id> <field>`
pub fn handle_get(
    ctx: &CommandContext<'_>,
    kind: EntityKind,
    id: u64,
    field: &str,
    language: Option<&str>,
) -> Result<String, KatalogError> {
    match kind {
        EntityKind::Category => get::<Category>(ctx, id, field, language),
        EntityKind::Product => get::<Product>(ctx, id, field, language),
        EntityKind::Review => get::<Review>(ctx, id, field, language),
        EntityKind::Contact => get::<Contact>(ctx, id, field, language),
    }
}

fn get<E: Record>(
    ctx: &CommandContext<'_>,
    id: u64,
    field: &str,
    language: Option<&str>,
) -> Result<String, KatalogError> {
    let record: &E = ctx.catalog.find(id)?;
    Ok(ctx
        .translator
        .get_translated(record, field, language)?
        .to_string())
}

/// `katalog content <kind> <id> "name,description"`, as pretty JSON.
pub fn handle_content(
    ctx: &CommandContext<'_>,
    kind: EntityKind,
    id: u64,
    fields: &str,
    language: Option<&str>,
) -> Result<String, KatalogError> {
    match kind {
        EntityKind::Category => content::<Category>(ctx, id, fields, language),
        EntityKind::Product => content::<Product>(ctx, id, fields, language),
        EntityKind::Review => content::<Review>(ctx, id, fields, language),
        EntityKind::Contact => content::<Contact>(ctx, id, fields, language),
    }
}

fn content<E: Record>(
    ctx: &CommandContext<'_>,
    id: u64,
    fields: &str,
    language: Option<&str>,
) -> Result<String, KatalogError> {
    let record: &E = ctx.catalog.find(id)?;
    let shown = ctx
        .translator
        .show_translated_content(record, fields, language)?;
    Ok(serde_json::to_string_pretty(&shown)?)
}

/// `katalog missing`
pub fn handle_missing(ctx: &CommandContext<'_>, language: &str) -> Result<String, KatalogError> {
    let language = ctx.i18n.supported_language(language)?;
    let entries = missing_report(ctx.catalog, ctx.translator.resolver(), language.as_str());
    if entries.is_empty() {
        return Ok(format!("All records are translated to {language}."));
    }
    let mut out = format!("Missing {language} translations:\n");
    for entry in &entries {
        out.push_str(&format!(
            "  {} #{}: {}\n",
            entry.kind,
            entry.id,
            entry.fields.join(", ")
        ));
    }
    let total: usize = EntityKind::ALL
        .iter()
        .map(|kind| ctx.catalog.count(*kind))
        .sum();
    out.push_str(&format!("{} of {total} record(s)", entries.len()));
    Ok(out)
}

/// `katalog languages`
pub fn handle_languages(resolver: &TranslationResolver) -> String {
    let join = |langs: &[LanguageCode]| {
        langs
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let chain = if resolver.fallback_chain().is_empty() {
        "(none)".to_string()
    } else {
        join(resolver.fallback_chain())
    };
    format!(
        "Default: {}\nSupported: {}\nFallback chain: {}",
        resolver.default_language(),
        join(resolver.languages()),
        chain
    )
}
