//! Configuration for the editing core

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Editing configuration: caps for the per-session histories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum undo frames kept per session (oldest evicted first)
    pub undo_limit: usize,
    /// Paste-register slots; 1 gives the default single-slot register,
    /// larger values give kill-ring semantics
    pub paste_slots: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: 100,
            paste_slots: 1,
        }
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl EditorConfig {
    /// Parse a configuration from a JSON string. Missing fields fall back
    /// to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
