//! Store opening configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for opening a [`super::SqliteStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
    /// How long to wait on a locked database before giving up.
    pub busy_timeout: Duration,
    /// Whether to create the database file and schema if missing.
    pub auto_create: bool,
    /// Whether to open in read-only mode.
    pub read_only: bool,
}

impl StoreConfig {
    /// Creates a configuration with default settings for the given path.
    ///
    /// Defaults: five second busy timeout, auto-create on, read-write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_secs(5),
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Switches the configuration to read-only mode.
    ///
    /// Read-only stores never create files or apply schema changes.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}
