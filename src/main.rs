mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use katalog_core::{
    config,
    language::{LanguageCode, Locale},
    resolver::TranslationResolver,
    tags::Translator,
};
use katalog_shop::{fill_catalog, Catalog, EntityKind};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "katalog",
    version,
    about = "katalog — multilingual shop catalog"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Catalog JSON file (overrides `katalog.catalog_path`).
    #[arg(long)]
    catalog: Option<String>,

    /// Negotiate the current language from an Accept-Language value.
    #[arg(long)]
    accept_language: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one translated field of a record.
    Get {
        /// category, product, review or contact.
        kind: String,
        id: u64,
        field: String,
        /// Language to resolve in (default: the current language).
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Print several translated fields of a record as JSON.
    Content {
        kind: String,
        id: u64,
        /// Comma-separated field names, e.g. "name,description".
        fields: String,
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Copy base values into empty translations.
    Fill {
        /// Only fill this model (category, product, review, contact).
        #[arg(long)]
        model: Option<String>,
        #[arg(long, default_value = "ru")]
        language: String,
    },
    /// List records that lack translations.
    Missing {
        /// Language to check (default: the current language).
        #[arg(short, long)]
        language: Option<String>,
    },
    /// Show the configured languages and fallback chain.
    Languages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging starts before the config is read so its outcome is visible;
    // the configured level replaces `info` afterwards unless RUST_LOG is set.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (subscriber, filter_handle) = logging(std::io::stderr, env_filter);
    subscriber.init();

    let cfg = config::load(&cli.config)?;
    if !from_env {
        filter_handle.reload(EnvFilter::new(&cfg.katalog.log_level))?;
    }

    let catalog_path = config::shellexpand(
        cli.catalog
            .as_deref()
            .unwrap_or(cfg.katalog.catalog_path.as_str()),
    );
    let catalog_path = Path::new(&catalog_path);

    let resolver = TranslationResolver::new(&cfg.i18n);
    let locale = match cli.accept_language.as_deref() {
        Some(header) => Locale::from_accept_language(header, &cfg.i18n),
        None => Locale::from_config(&cfg.i18n),
    };
    tracing::debug!("current language: {}", locale.language());

    match cli.command {
        Commands::Fill { model, language } => {
            let mut catalog = Catalog::load(catalog_path)?;
            let report = fill_catalog(&mut catalog, &cfg.i18n, model.as_deref(), &language)?;
            if report.total() > 0 {
                catalog.save(catalog_path)?;
            }
            for (kind, updated) in &report.updated {
                println!(
                    "Updated {updated} {kind} record(s) for language {}",
                    report.language
                );
            }
        }
        Commands::Languages => {
            println!("{}", commands::handle_languages(&resolver));
        }
        query => {
            let catalog = Catalog::load(catalog_path)?;
            let translator = Translator::new(&resolver, locale);
            let ctx = CommandContext {
                catalog: &catalog,
                i18n: &cfg.i18n,
                translator: &translator,
            };
            println!("{}", run_query(&ctx, query)?);
        }
    }

    Ok(())
}

/// Subscriber writing to `make_writer`, with a filter that can be swapped
/// once the configured level is known.
fn logging<W>(
    make_writer: W,
    env_filter: Option<EnvFilter>,
) -> (
    impl tracing::Subscriber + Send + Sync + 'static,
    reload::Handle<EnvFilter, Registry>,
)
where
    W: for<'w> fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Read-only commands that resolve against the loaded catalog.
fn run_query(ctx: &CommandContext<'_>, command: Commands) -> anyhow::Result<String> {
    let out = match command {
        Commands::Get {
            kind,
            id,
            field,
            language,
        } => commands::handle_get(
            ctx,
            EntityKind::parse(&kind)?,
            id,
            &field,
            language.as_deref(),
        )?,
        Commands::Content {
            kind,
            id,
            fields,
            language,
        } => commands::handle_content(
            ctx,
            EntityKind::parse(&kind)?,
            id,
            &fields,
            language.as_deref(),
        )?,
        Commands::Missing { language } => {
            let language = match language {
                Some(code) => LanguageCode::new(&code)?,
                None => ctx.translator.locale().language().clone(),
            };
            commands::handle_missing(ctx, language.as_str())?
        }
        Commands::Fill { .. } | Commands::Languages => {
            anyhow::bail!("not a catalog query")
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_load_is_logged_before_level_applies() {
        let captured = Captured(Arc::new(Mutex::new(Vec::new())));
        let writer = captured.clone();
        let (subscriber, handle) = logging(move || writer.clone(), None);

        tracing::subscriber::with_default(subscriber, || {
            let cfg = config::load("/nonexistent/katalog/config.toml").unwrap();
            assert_eq!(cfg.katalog.log_level, "info");
            handle.reload(EnvFilter::new("warn")).unwrap();
            tracing::info!("catalog opened");
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(out.contains("Config file not found"));
        assert!(!out.contains("catalog opened"));
    }
}
