//! Configuration management module
//!
//! Handles loading and validation of presenter settings.

use crate::{DeckError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod deck_file;

/// Presenter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// TOML deck file; the built-in deck is used when unset
    pub deck_path: Option<PathBuf>,
    /// Frame interval in milliseconds
    pub tick_rate_ms: u64,
    /// Whether entrance and count-up animations run
    pub animations: bool,
    /// Minimum horizontal drag for a swipe, in pixels
    pub swipe_threshold_px: f64,
    /// Width of one terminal cell in pixels
    pub cell_width_px: f64,
    /// Height of one terminal cell in pixels
    pub cell_height_px: f64,
    /// Below this many columns the sidebar starts hidden
    pub compact_width: u16,
    /// Interval between session time log lines, in seconds
    pub heartbeat_secs: u64,
    /// Maximum log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Log file; defaults to the data directory
    pub log_file: Option<PathBuf>,
    /// Print the session summary as JSON on exit
    pub print_summary_on_exit: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            tick_rate_ms: 50,
            animations: true,
            swipe_threshold_px: 100.0,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            compact_width: 64,
            heartbeat_secs: 30,
            log_level: "info".to_string(),
            log_file: None,
            print_summary_on_exit: true,
        }
    }
}

impl DeckConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.deck_path {
            if !path.is_file() {
                return Err(DeckError::ConfigError(format!(
                    "Deck file does not exist: {}",
                    path.display()
                )));
            }
        }

        const MIN_TICK_MS: u64 = 10;
        const MAX_TICK_MS: u64 = 1000;
        if self.tick_rate_ms < MIN_TICK_MS || self.tick_rate_ms > MAX_TICK_MS {
            return Err(DeckError::ConfigError(format!(
                "Tick rate must be between {} and {} ms",
                MIN_TICK_MS, MAX_TICK_MS
            )));
        }

        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(DeckError::ConfigError(
                "Swipe threshold must be greater than 0".to_string(),
            ));
        }

        for (name, value) in [
            ("Cell width", self.cell_width_px),
            ("Cell height", self.cell_height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DeckError::ConfigError(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if self.heartbeat_secs == 0 {
            return Err(DeckError::ConfigError(
                "Heartbeat interval must be greater than 0".to_string(),
            ));
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(DeckError::ConfigError(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Set the deck file
    pub fn with_deck_path(mut self, path: PathBuf) -> Self {
        self.deck_path = Some(path);
        self
    }

    /// Enable or disable animations
    pub fn with_animations(mut self, enabled: bool) -> Self {
        self.animations = enabled;
        self
    }

    /// Set the swipe threshold
    pub fn with_swipe_threshold(mut self, pixels: f64) -> Self {
        self.swipe_threshold_px = pixels;
        self
    }

    /// Set the log file
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_secs)
    }

    /// Resolve the log file location
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir().ok_or_else(|| {
            DeckError::ConfigError("Unable to determine data directory".to_string())
        })?;
        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            DeckError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            DeckError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/pitchdeck/pitchdeck.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            DeckError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
