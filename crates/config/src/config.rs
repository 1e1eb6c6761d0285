//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskdeck application.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{
    default_storage_path, find_config_file, read_config_file, write_config_file,
};

/// Upper bound for simulated latencies, in milliseconds.
const MAX_LATENCY_MS: u64 = 10_000;

/// Bounds for the undo window, in seconds.
const UNDO_WINDOW_RANGE: std::ops::RangeInclusive<u64> = 1..=3600;

/// Simulated backend latency settings.
///
/// Defaults mimic a reasonably slow network: 400 ms for the full-list
/// fetch and 300 ms for item mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    /// Delay before the full-list fetch resolves, in milliseconds.
    #[serde(default = "default_fetch_ms")]
    pub fetch_ms: u64,
    /// Delay before item mutations resolve, in milliseconds.
    #[serde(default = "default_write_ms")]
    pub write_ms: u64,
}

fn default_fetch_ms() -> u64 {
    400
}

fn default_write_ms() -> u64 {
    300
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            fetch_ms: default_fetch_ms(),
            write_ms: default_write_ms(),
        }
    }
}

/// Task storage settings.
///
/// When enabled, the backend persists the whole task collection to a
/// single JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Whether tasks survive restarts at all.
    #[serde(default = "default_storage_enabled")]
    pub enabled: bool,
    /// Storage file path; defaults to `~/.local/share/taskdeck/tasks.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_storage_enabled() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_storage_enabled(),
            path: None,
        }
    }
}

/// The main configuration struct for the taskdeck application.
///
/// # Examples
///
/// ```
/// use taskdeck_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.latency.fetch_ms, 400);
/// assert_eq!(config.undo_window_secs, 5);
/// assert!(config.storage.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated backend latency.
    pub latency: LatencyConfig,

    /// Start with the backend's failure mode switched on.
    ///
    /// Useful for demonstrating the failed-fetch and retry flows.
    pub simulate_errors: bool,

    /// Task storage settings.
    pub storage: StorageConfig,

    /// Grace period for undoing a deletion, in seconds.
    pub undo_window_secs: u64,

    /// Seed the collection with sample tasks when no stored data exists.
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration with all defaults.
    ///
    /// This is equivalent to `Config::default()`; a default-constructed
    /// config matches one parsed from an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self {
            latency: LatencyConfig::default(),
            simulate_errors: false,
            storage: StorageConfig::default(),
            undo_window_secs: 5,
            seed_demo_data: true,
        }
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches local and user config directories; if no configuration
    /// file is found, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskdeck_config::Config;
    ///
    /// # fn main() -> taskdeck_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("fetch latency: {}ms", config.latency.fetch_ms);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::new()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves this configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates all settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a latency exceeds 10 seconds or the undo
    /// window is outside `1..=3600` seconds.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("latency.fetch_ms", self.latency.fetch_ms),
            ("latency.write_ms", self.latency.write_ms),
        ] {
            if value > MAX_LATENCY_MS {
                return Err(ConfigError::InvalidLatency {
                    reason: format!("{name} is {value}, maximum is {MAX_LATENCY_MS}"),
                });
            }
        }

        if !UNDO_WINDOW_RANGE.contains(&self.undo_window_secs) {
            return Err(ConfigError::InvalidUndoWindow {
                reason: format!(
                    "undo_window_secs is {}, allowed range is {}..={}",
                    self.undo_window_secs,
                    UNDO_WINDOW_RANGE.start(),
                    UNDO_WINDOW_RANGE.end()
                ),
            });
        }

        Ok(())
    }

    /// Returns the full-list fetch latency as a [`Duration`].
    #[must_use]
    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.latency.fetch_ms)
    }

    /// Returns the item mutation latency as a [`Duration`].
    #[must_use]
    pub fn write_latency(&self) -> Duration {
        Duration::from_millis(self.latency.write_ms)
    }

    /// Returns the undo window as a [`Duration`].
    #[must_use]
    pub fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo_window_secs)
    }

    /// Resolves the task storage path.
    ///
    /// Returns `None` when storage is disabled; otherwise the configured
    /// path, or the platform default under the user's data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if storage is enabled with no explicit path and
    /// the data directory cannot be determined.
    pub fn storage_path(&self) -> Result<Option<PathBuf>> {
        if !self.storage.enabled {
            return Ok(None);
        }
        match &self.storage.path {
            Some(path) => Ok(Some(path.clone())),
            None => default_storage_path().map(Some),
        }
    }
}
