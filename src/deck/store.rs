//! Section storage
//!
//! Ordered, immutable list of deck sections with index-bounded lookup and
//! id resolution.

use crate::models::Section;
use crate::{DeckError, Result, DEFAULT_DECK_TITLE};
use std::collections::HashSet;

/// Ordered list of sections, fixed after load
#[derive(Debug, Clone)]
pub struct SectionStore {
    title: String,
    sections: Vec<Section>,
}

impl SectionStore {
    /// Create a store, rejecting empty decks and missing or duplicate ids
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(DeckError::ContentError(
                "Deck must contain at least one section".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for (position, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(DeckError::ContentError(format!(
                    "Section {} has an empty id",
                    position + 1
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(DeckError::ContentError(format!(
                    "Duplicate section id: {}",
                    section.id
                )));
            }
        }

        Ok(Self {
            title: DEFAULT_DECK_TITLE.to_string(),
            sections,
        })
    }

    /// Name the deck; blank titles keep the default
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    /// Deck name shown after the section title in the window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of sections; always at least one
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Resolve a section id to its position
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
