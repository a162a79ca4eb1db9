//! Configuration module for lendlib
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LENDLIB_*)
//! 3. Project config (./lendlib.toml)
//! 4. User config (~/.config/lendlib/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub use loader::{user_config_path, with_env_overrides, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, StorageConfig, Verbosity};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("invalid config file {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
