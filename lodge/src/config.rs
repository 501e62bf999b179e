//! Application configuration.
//!
//! Configuration is resolved from three layers, later layers winning:
//! built-in defaults, an optional YAML file, and `LODGE_*` environment
//! variables. Callers (the CLI) apply their own flag overrides on top
//! through the builder setters.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Returns the default data directory, `~/.lodge`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".lodge"))
        .ok_or_else(|| Error::Validation {
            field: "data_dir".to_string(),
            message: "cannot determine home directory".to_string(),
        })
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the database and related files.
    pub data_dir: PathBuf,
    /// Currency used when none is given explicitly.
    pub default_currency: String,
    /// How long to wait on a locked database before giving up.
    pub maximum_lock_wait_seconds: u64,
    /// Whether to skip automatic store creation.
    pub disable_autoinit: bool,
}

impl Config {
    /// Path of the SQLite database inside the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("lodge.db")
    }

    /// The lock wait as a [`Duration`].
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.maximum_lock_wait_seconds)
    }
}

/// Builder assembling a [`Config`] from its layered sources.
///
/// # Examples
///
/// ```
/// use lodge::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .data_dir("/tmp/lodge-data")
///     .build()
///     .unwrap();
/// assert_eq!(config.default_currency, "USD");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    default_currency: Option<String>,
    maximum_lock_wait_seconds: Option<u64>,
    disable_autoinit: Option<bool>,
}

impl ConfigBuilder {
    /// Creates an empty builder; [`build`](Self::build) fills defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads builder state from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid
    /// YAML for the known configuration keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Overrides any fields set in `LODGE_*` environment variables.
    ///
    /// Recognized variables: `LODGE_DATA_DIR`, `LODGE_DEFAULT_CURRENCY`,
    /// `LODGE_MAX_LOCK_WAIT` (seconds), and `LODGE_DISABLE_AUTOINIT`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unparseable numeric or boolean
    /// values.
    pub fn apply_environment(mut self) -> Result<Self> {
        if let Ok(value) = env::var("LODGE_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(value));
        }
        if let Ok(value) = env::var("LODGE_DEFAULT_CURRENCY") {
            self.default_currency = Some(value);
        }
        if let Ok(value) = env::var("LODGE_MAX_LOCK_WAIT") {
            let seconds = value.parse::<u64>().map_err(|_| Error::Validation {
                field: "LODGE_MAX_LOCK_WAIT".to_string(),
                message: format!("'{value}' is not a number of seconds"),
            })?;
            self.maximum_lock_wait_seconds = Some(seconds);
        }
        if let Ok(value) = env::var("LODGE_DISABLE_AUTOINIT") {
            self.disable_autoinit = Some(parse_bool("LODGE_DISABLE_AUTOINIT", &value)?);
        }
        Ok(self)
    }

    /// Sets the data directory.
    #[must_use]
    pub fn data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Sets the default currency.
    #[must_use]
    pub fn default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = Some(currency.into());
        self
    }

    /// Sets the maximum lock wait in seconds.
    #[must_use]
    pub const fn maximum_lock_wait_seconds(mut self, seconds: u64) -> Self {
        self.maximum_lock_wait_seconds = Some(seconds);
        self
    }

    /// Sets whether automatic store creation is skipped.
    #[must_use]
    pub const fn disable_autoinit(mut self, disable: bool) -> Self {
        self.disable_autoinit = Some(disable);
        self
    }

    /// Resolves the final configuration, filling defaults.
    ///
    /// Defaults: `~/.lodge` as data directory, `USD` as currency, a
    /// five second lock wait, and autoinit enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is set and the home
    /// directory cannot be determined, or if the currency is empty.
    pub fn build(self) -> Result<Config> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let default_currency = self.default_currency.unwrap_or_else(|| "USD".to_string());
        if default_currency.is_empty() {
            return Err(Error::Validation {
                field: "default_currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Config {
            data_dir,
            default_currency,
            maximum_lock_wait_seconds: self.maximum_lock_wait_seconds.unwrap_or(5),
            disable_autoinit: self.disable_autoinit.unwrap_or(false),
        })
    }
}

fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(Error::Validation {
            field: field.to_string(),
            message: format!("'{value}' is not a boolean"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        env::remove_var("LODGE_DATA_DIR");
        env::remove_var("LODGE_DEFAULT_CURRENCY");
        env::remove_var("LODGE_MAX_LOCK_WAIT");
        env::remove_var("LODGE_DISABLE_AUTOINIT");
    }

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().data_dir("/tmp/lodge").build().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/lodge"));
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.maximum_lock_wait_seconds, 5);
        assert!(!config.disable_autoinit);
        assert_eq!(config.database_path(), PathBuf::from("/tmp/lodge/lodge.db"));
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_builder_setters() {
        let config = ConfigBuilder::new()
            .data_dir("/tmp/lodge")
            .default_currency("EUR")
            .maximum_lock_wait_seconds(30)
            .disable_autoinit(true)
            .build()
            .unwrap();
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.maximum_lock_wait_seconds, 30);
        assert!(config.disable_autoinit);
    }

    #[test]
    fn test_empty_currency_rejected() {
        let result = ConfigBuilder::new()
            .data_dir("/tmp/lodge")
            .default_currency("")
            .build();
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "data_dir: /srv/lodge\ndefault_currency: CZK\nmaximum_lock_wait_seconds: 10\n",
        )
        .unwrap();

        let config = ConfigBuilder::from_file(&path).unwrap().build().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/lodge"));
        assert_eq!(config.default_currency, "CZK");
        assert_eq!(config.maximum_lock_wait_seconds, 10);
    }

    #[test]
    fn test_from_file_unknown_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "currencey: CZK\n").unwrap();

        assert!(ConfigBuilder::from_file(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        clear_env();
        env::set_var("LODGE_DEFAULT_CURRENCY", "GBP");
        env::set_var("LODGE_MAX_LOCK_WAIT", "12");
        env::set_var("LODGE_DISABLE_AUTOINIT", "true");

        let config = ConfigBuilder::new()
            .default_currency("EUR")
            .data_dir("/tmp/lodge")
            .apply_environment()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.default_currency, "GBP");
        assert_eq!(config.maximum_lock_wait_seconds, 12);
        assert!(config.disable_autoinit);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_environment_invalid_number() {
        clear_env();
        env::set_var("LODGE_MAX_LOCK_WAIT", "soon");

        let result = ConfigBuilder::new().apply_environment();
        assert!(result.unwrap_err().is_validation());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_environment_invalid_bool() {
        clear_env();
        env::set_var("LODGE_DISABLE_AUTOINIT", "maybe");

        let result = ConfigBuilder::new().apply_environment();
        assert!(result.unwrap_err().is_validation());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_environment_data_dir() {
        clear_env();
        env::set_var("LODGE_DATA_DIR", "/srv/lodge-env");

        let config = ConfigBuilder::new()
            .apply_environment()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/lodge-env"));

        clear_env();
    }
}
