//! Log setup.
//!
//! The terminal belongs to the UI, so log lines go to a file.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "SHOPLIST_LOG";

/// Build the filter: `SHOPLIST_LOG` if set, else the configured level.
pub fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber writing to the configured log file.
///
/// Without a resolvable log path nothing is installed and events are
/// dropped.
pub fn init(config: &TuiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
