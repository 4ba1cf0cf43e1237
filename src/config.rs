//! Field configuration persistence
//!
//! Stores user preferences in `~/.config/mention-field/config.yaml`. These
//! are engine policies; per-view appearance comes from the host's creation
//! parameters (see [`crate::model::ViewParams`]).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MentionError;
use crate::mention::EmptyResultPolicy;

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// What happens to a query that stops matching any entity
    #[serde(default)]
    pub empty_result_policy: EmptyResultPolicy,

    /// Maximum number of candidates shown in the dropdown (null = unlimited)
    #[serde(default = "default_max_candidates")]
    pub max_candidates: Option<usize>,

    /// Console log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_candidates() -> Option<usize> {
    Some(8)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            empty_result_policy: EmptyResultPolicy::default(),
            max_candidates: default_max_candidates(),
            log_level: default_log_level(),
        }
    }
}

impl FieldConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), MentionError> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| MentionError::Config("No config directory available".to_string()))?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), MentionError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MentionError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| MentionError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            MentionError::Config(format!(
                "Failed to write config to {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
