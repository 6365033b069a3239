use crate::persistence::HISTORY_KEY;
use std::path::PathBuf;

/// Ledger configuration
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `db_path` | `till.redb` | redb file holding the history slot |
/// | `store_key` | `allTransactions` | key of the history slot |
/// | `log_level` | `info` | tracing max level |
/// | `log_dir` | none | daily rolling log files go here when set |
///
/// Configuration is built in code by the host application; nothing is read
/// from the environment.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Path of the redb database file
    pub db_path: PathBuf,
    /// Key under which the history is stored
    pub store_key: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Directory for log files, stdout when `None`
    pub log_dir: Option<PathBuf>,
}

impl LedgerConfig {
    /// Default configuration with a custom database path
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn store_key(mut self, key: impl Into<String>) -> Self {
        self.store_key = key.into();
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("till.redb"),
            store_key: HISTORY_KEY.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}
