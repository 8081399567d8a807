//! Watch session configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

fn default_debounce_ms() -> u64 {
    200
}

fn default_archive_dir() -> String {
    "Images".to_string()
}

/// Tunables for one watch session.
///
/// Loadable from a TOML file; every field has a default, so an absent key
/// or an empty table is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Duplicate-suppression window in milliseconds.
    pub debounce_ms: u64,
    /// Directory name the archive tree is created under.
    pub archive_dir: String,
    /// Whether subdirectories of the watch root are watched too.
    pub recursive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            archive_dir: default_archive_dir(),
            recursive: false,
        }
    }
}

impl WatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
