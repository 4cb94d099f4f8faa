//! Deck file loading
//!
//! Decks other than the built-in one are described in TOML:
//!
//! ```toml
//! version = 1
//! title = "Q3 Newsletter Review"
//!
//! [[sections]]
//! id = "intro"
//! title = "Introduction"
//!
//! [[sections.blocks]]
//! kind = "metric"
//! label = "Open rate"
//! value = "24%"
//! ```

use crate::deck::store::SectionStore;
use crate::models::Section;
use crate::{DeckError, Result, DECK_FILE_VERSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Deck file structure for TOML persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckFile {
    pub version: u32,
    #[serde(default)]
    pub title: String,
    pub sections: Vec<Section>,
}

impl DeckFile {
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            version: DECK_FILE_VERSION,
            title: title.into(),
            sections,
        }
    }

    /// Read and parse a deck file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DeckError::ContentError(format!(
                "Failed to read deck file {}: {}",
                path.display(),
                e
            ))
        })?;

        let deck: Self = toml::from_str(&content).map_err(|e| {
            DeckError::ContentError(format!(
                "Failed to parse deck file {}: {}",
                path.display(),
                e
            ))
        })?;

        if deck.version != DECK_FILE_VERSION {
            return Err(DeckError::ContentError(format!(
                "Unsupported deck file version {} in {} (expected {})",
                deck.version,
                path.display(),
                DECK_FILE_VERSION
            )));
        }

        Ok(deck)
    }

    /// Validate the sections and build the store
    pub fn into_store(self) -> Result<SectionStore> {
        Ok(SectionStore::new(self.sections)?.with_title(self.title))
    }
}
