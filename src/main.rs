use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
use config::{AppConfig, CliConfig, FileConfig};

mod corpus_store;
use corpus_store::{CorpusStore, SqliteCorpusStore};

mod reports;
use reports::ReportEngine;

mod server;
use server::{run_server, RequestsLoggingLevel};

mod sqlite_persistence;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite corpus database file produced by the bulk loaders.
    #[clap(value_parser = parse_path)]
    pub corpus_db: Option<PathBuf>,

    /// Path to an optional TOML config file; its values override the CLI.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3400)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9400)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Hours between corpus integrity checks. Set to 0 to disable.
    #[clap(long, default_value_t = 6)]
    pub integrity_check_interval_hours: u64,
}

/// Runs the integrity probes once, logging and recording violations.
fn check_corpus_integrity(store: &dyn CorpusStore) {
    match (
        store.count_speeches_missing_encoding(),
        store.count_speeches_missing_speaker(),
    ) {
        (Ok(missing_encoding), Ok(missing_speaker)) => {
            server::metrics::record_integrity_violations("missing_encoding", missing_encoding);
            server::metrics::record_integrity_violations("missing_speaker", missing_speaker);
            if missing_encoding > 0 || missing_speaker > 0 {
                error!(
                    "Corpus integrity violated: {} speech(es) without encoding, {} without speaker",
                    missing_encoding, missing_speaker
                );
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            error!("Corpus integrity check failed: {}", e);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args
        .config
        .as_ref()
        .map(FileConfig::load)
        .transpose()?;

    let cli_config = CliConfig {
        corpus_db: cli_args.corpus_db,
        port: cli_args.port,
        metrics_port: cli_args.metrics_port,
        logging_level: cli_args.logging_level,
        integrity_check_interval_hours: cli_args.integrity_check_interval_hours,
    };
    let app_config = AppConfig::resolve(&cli_config, file_config)?;

    info!(
        "Opening SQLite corpus database at {:?}...",
        app_config.corpus_db
    );
    let store = Arc::new(SqliteCorpusStore::new(&app_config.corpus_db)?);

    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_corpus_metrics(
        store.count_speeches()?,
        store.count_politicians()?,
        store.count_parties()?,
    );

    // Surface loader mistakes immediately rather than on the first average
    // report.
    check_corpus_integrity(store.as_ref());

    if app_config.integrity_check_interval_hours > 0 {
        let interval_hours = app_config.integrity_check_interval_hours;
        let watch_store = store.clone();

        info!(
            "Corpus integrity watch enabled: checking every {} hours",
            interval_hours
        );

        tokio::spawn(async move {
            let interval = Duration::from_secs(interval_hours * 60 * 60);
            let mut ticker = tokio::time::interval(interval);

            // Skip the first immediate tick, wait for the first interval
            ticker.tick().await;

            loop {
                ticker.tick().await;
                check_corpus_integrity(watch_store.as_ref());
            }
        });
    }

    let engine = Arc::new(ReportEngine::new(store));

    info!("Ready to serve at port {}!", app_config.port);
    run_server(
        engine,
        app_config.logging_level,
        app_config.port,
        app_config.metrics_port,
    )
    .await
}
