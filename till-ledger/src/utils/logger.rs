//! Logging Infrastructure
//!
//! Structured logging setup for the host application.

use crate::core::LedgerConfig;
use std::path::Path;

/// Initialize the logger (stdout, `info`)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger from a [`LedgerConfig`]
pub fn init_from_config(config: &LedgerConfig) {
    init_logger_with_file(
        Some(config.log_level.as_str()),
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional file output
///
/// A second initialization in the same process is ignored.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir
        && dir.exists()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "till");
        let _ = subscriber.with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig::default()
            .log_level("debug")
            .log_dir(dir.path());
        init_from_config(&config);
        init_logger();
        tracing::info!("logger initialized");
    }
}
