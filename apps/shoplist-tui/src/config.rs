//! Configuration for the shoplist terminal UI
//!
//! Read from `config.toml` in the platform config directory
//! (`~/.config/shoplist/config.toml` on Linux):
//!
//! ```toml
//! log_level = "debug"
//! log_file = "/tmp/shoplist.log"
//! show_help_on_start = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Filter directive used when `SHOPLIST_LOG` is unset
    pub log_level: String,
    /// Log file; defaults to the platform cache directory
    pub log_file: Option<PathBuf>,
    /// Open the help overlay at startup
    pub show_help_on_start: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            show_help_on_start: false,
        }
    }
}

impl TuiConfig {
    /// Where log output goes, if anywhere.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("shoplist").join("shoplist.log")))
    }
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shoplist").join("config.toml"))
}

/// Load config from a TOML file
pub fn load_config(path: &Path) -> Result<TuiConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Resolve the config for this run.
///
/// An explicit path must load. The default path may be absent, in which
/// case defaults apply silently; any other failure falls back to defaults
/// and is handed back so it can be logged once logging is up.
pub fn resolve_config(
    explicit: Option<&Path>,
) -> Result<(TuiConfig, Option<ConfigError>), ConfigError> {
    if let Some(path) = explicit {
        return load_config(path).map(|config| (config, None));
    }

    let Some(path) = default_config_path() else {
        return Ok((TuiConfig::default(), None));
    };
    if !path.exists() {
        return Ok((TuiConfig::default(), None));
    }

    match load_config(&path) {
        Ok(config) => Ok((config, None)),
        Err(err) => Ok((TuiConfig::default(), Some(err))),
    }
}
