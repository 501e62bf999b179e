//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, store management, and argument parsing.

use crate::error::CliError;
use chrono::{DateTime, NaiveDate, Utc};
use lodge::{Config, ConfigBuilder, SqliteStore, StoreConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    #[allow(dead_code)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[allow(dead_code)]
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic store initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config_error = |e: lodge::Error| CliError::Config(e.to_string());

    // The config file lives in the data directory, which itself can be
    // moved by flag or environment. Resolve the directory first.
    let probe = apply_overrides(ConfigBuilder::new(), global)
        .apply_environment()
        .map_err(config_error)?
        .build()
        .map_err(config_error)?;

    let config_file = probe.data_dir.join("config.yaml");
    let builder = if config_file.exists() {
        ConfigBuilder::from_file(&config_file).map_err(config_error)?
    } else {
        ConfigBuilder::new()
    };

    apply_overrides(builder, global)
        .apply_environment()
        .map_err(config_error)?
        .build()
        .map_err(config_error)
}

/// Apply global flag overrides to a builder.
fn apply_overrides(mut builder: ConfigBuilder, global: &GlobalOptions) -> ConfigBuilder {
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.data_dir(data_dir);
    }
    if let Some(timeout_seconds) = global.busy_timeout {
        builder = builder.maximum_lock_wait_seconds(timeout_seconds.into());
    }
    if global.disable_autoinit {
        builder = builder.disable_autoinit(true);
    }
    builder
}

/// Open the store described by the configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<SqliteStore, CliError> {
    let db_path = config.database_path();

    if !db_path.exists() && config.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut store_config = StoreConfig::new(db_path);

    // Flag beats config file for the timeout.
    if let Some(timeout_seconds) = global.busy_timeout {
        store_config =
            store_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else {
        store_config = store_config.with_busy_timeout(config.busy_timeout());
    }

    SqliteStore::open(store_config).map_err(CliError::from)
}

/// Parse a `YYYY-MM-DD` date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::InvalidArguments(format!("'{value}' is not a date (expected YYYY-MM-DD)"))
    })
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
