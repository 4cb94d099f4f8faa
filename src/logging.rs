//! Log subscriber setup
//!
//! The terminal belongs to the TUI while the deck is shown, so log output
//! goes to a file.

use crate::config::DeckConfig;
use crate::{DeckError, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Install the global fmt subscriber writing to the configured log file
///
/// Returns the path that receives log output.
pub fn init(config: &DeckConfig) -> Result<PathBuf> {
    let level: Level = config
        .log_level
        .parse()
        .map_err(|_| DeckError::LoggingError(format!("Unknown log level: {}", config.log_level)))?;

    let path = config.log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| DeckError::LoggingError(e.to_string()))?;

    Ok(path)
}
