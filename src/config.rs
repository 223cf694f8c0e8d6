//! Tracker configuration: where expenses are stored and who shares them.

use crate::core::payee::{PayeeName, Roster, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the item store path.
pub const STORE_ENV_VAR: &str = "EXPENSE_SPLITTER_STORE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid payees: {0}")]
    Roster(#[from] RosterError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Path of the JSON item store.
    pub store: PathBuf,
    /// The two payees sharing expenses, in settlement order.
    pub payees: [String; 2],
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from("db.json"),
            payees: ["Rahul".to_string(), "Ramesh".to_string()],
        }
    }
}

impl TrackerConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply a store override, typically from the environment.
    pub fn with_store_override(mut self, store: Option<String>) -> Self {
        if let Some(store) = store.filter(|s| !s.trim().is_empty()) {
            self.store = PathBuf::from(store);
        }
        self
    }

    /// Apply `EXPENSE_SPLITTER_STORE` if set.
    pub fn with_env(self) -> Self {
        self.with_store_override(std::env::var(STORE_ENV_VAR).ok())
    }

    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let [first, second] = &self.payees;
        Ok(Roster::new(
            PayeeName::new(first.trim()),
            PayeeName::new(second.trim()),
        )?)
    }
}
