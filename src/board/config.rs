//! Board behaviour settings.
//!
//! ```
//! use canteiro::board::config::{BackwardDropPolicy, BoardConfig};
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.backward_drops, BackwardDropPolicy::Allow);
//!
//! let strict = BoardConfig::from_json_str(r#"{"backward_drops": "deny"}"#)?;
//! assert_eq!(strict.backward_drops, BackwardDropPolicy::Deny);
//! # Ok::<(), canteiro::board::config::ConfigError>(())
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::domain::UrgencyLevel;

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "CANTEIRO_BOARD_CONFIG";

/// Whether drag-and-drop may move a ticket to an earlier column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackwardDropPolicy {
    /// Any column may be targeted; used to correct mis-filed tickets.
    #[default]
    Allow,
    /// Drops onto an earlier column are ignored.
    Deny,
}

/// Settings for the maintenance board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Backward drag-and-drop policy.
    pub backward_drops: BackwardDropPolicy,
    /// Urgency preselected on the creation form.
    pub default_urgency: UrgencyLevel,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            backward_drops: BackwardDropPolicy::Allow,
            default_urgency: UrgencyLevel::Preventiva,
        }
    }
}

/// Errors raised while loading a [`BoardConfig`].
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read board config at {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The config document is not valid JSON for [`BoardConfig`].
    #[error("invalid board config: {0}")]
    Parse(Arc<serde_json::Error>),
}

impl BoardConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(Arc::new(err)))
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: Arc::new(err),
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads the file named by [`CONFIG_PATH_ENV`], or the defaults when the
    /// variable is unset or empty.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardConfig::from_path`] failures.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => {
                let config = Self::from_path(Path::new(&path))?;
                tracing::debug!(path = ?path, "loaded board config");
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }
}
