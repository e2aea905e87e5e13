mod file_config;

pub use file_config::FileConfig;

use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub corpus_db: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub integrity_check_interval_hours: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub corpus_db: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    /// Hours between periodic corpus integrity checks; 0 disables them.
    pub integrity_check_interval_hours: u64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let corpus_db = file
            .corpus_db
            .map(PathBuf::from)
            .or_else(|| cli.corpus_db.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("corpus_db must be specified via CLI or in config file")
            })?;

        // A missing file is fine (the store creates an empty corpus), but an
        // existing path must be a file.
        if corpus_db.exists() && !corpus_db.is_file() {
            bail!("corpus_db is not a file: {:?}", corpus_db);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let integrity_check_interval_hours = file
            .integrity_check_interval_hours
            .unwrap_or(cli.integrity_check_interval_hours);

        Ok(Self {
            corpus_db,
            port,
            metrics_port,
            logging_level,
            integrity_check_interval_hours,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
