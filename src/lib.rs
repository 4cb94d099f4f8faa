//! PITCHDECK - terminal slide-deck presenter
//!
//! Presents an email campaign strategy deck in the terminal with section
//! navigation, a progress indicator, cosmetic animations and in-memory
//! session analytics.

use std::fmt;

pub mod app;
pub mod config;
pub mod deck;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum DeckError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Deck content is missing or malformed
    ContentError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Log subscriber could not be installed
    LoggingError(String),
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::IoError(err) => write!(f, "I/O error: {}", err),
            DeckError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DeckError::ContentError(msg) => write!(f, "Deck content error: {}", msg),
            DeckError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            DeckError::LoggingError(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        DeckError::IoError(err)
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::ContentError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(err: toml::de::Error) -> Self {
        DeckError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for DeckError {
    fn from(err: toml::ser::Error) -> Self {
        DeckError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for deck operations
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error handling utilities
pub mod error {
    use super::DeckError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &DeckError) -> String {
        match error {
            DeckError::IoError(err) if err.kind() == std::io::ErrorKind::PermissionDenied => {
                "Permission denied. Check the permissions of the config and data directories."
                    .to_string()
            }
            DeckError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            DeckError::ContentError(msg) => {
                format!("Could not load the deck: {}. Check the deck file.", msg)
            }
            DeckError::TuiError(_) => {
                "The terminal could not be initialised. Run pitchdeck in an interactive terminal."
                    .to_string()
            }
            DeckError::LoggingError(_) => {
                "Logging could not be started. Check that the log file location is writable."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "pitchdeck";
pub const CONFIG_FILE: &str = "pitchdeck.toml";
pub const LOG_FILE: &str = "pitchdeck.log";
pub const DECK_FILE_VERSION: u32 = 1;
/// Deck name used when a deck does not set its own title
pub const DEFAULT_DECK_TITLE: &str = "Email Campaign Strategy";
