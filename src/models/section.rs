//! Deck content data models
//!
//! A deck is an ordered list of sections; each section is a titled list of
//! content blocks. Sections are immutable once the deck is loaded.

use serde::{Deserialize, Serialize};

/// One content unit of the presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier used by `go_to_id`
    pub id: String,
    /// Heading shown in the sidebar and the window title
    pub title: String,
    /// One-line description shown under the heading
    #[serde(default)]
    pub summary: String,
    /// Body content in display order
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

/// A single block of section content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain paragraph
    Text { body: String },
    /// Titled card
    Card { title: String, body: String },
    /// Headline figure such as an open rate
    Metric {
        label: String,
        value: String,
        #[serde(default)]
        description: String,
    },
    /// Titled bullet list
    Bullets { title: String, items: Vec<String> },
    /// Horizontal bar chart
    Chart { title: String, bars: Vec<ChartBar> },
}

/// One bar of a chart block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
}

/// Animation group a block belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Static,
    Card,
    Metric,
    Chart,
}

impl Section {
    /// Create a section without content
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            blocks: Vec::new(),
        }
    }

    /// Set the one-line description
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Append a content block
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

impl ContentBlock {
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    pub fn card(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Card {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn metric(
        label: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::Metric {
            label: label.into(),
            value: value.into(),
            description: description.into(),
        }
    }

    pub fn bullets(title: impl Into<String>, items: &[&str]) -> Self {
        Self::Bullets {
            title: title.into(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }

    pub fn chart(title: impl Into<String>, bars: &[(&str, u64)]) -> Self {
        Self::Chart {
            title: title.into(),
            bars: bars
                .iter()
                .map(|(label, value)| ChartBar {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    /// Get the animation group of this block
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text { .. } | Self::Bullets { .. } => BlockKind::Static,
            Self::Card { .. } => BlockKind::Card,
            Self::Metric { .. } => BlockKind::Metric,
            Self::Chart { .. } => BlockKind::Chart,
        }
    }
}
