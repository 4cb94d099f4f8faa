//! Data models module
//!
//! Contains the deck content structures and the session summary report.

pub mod section;
pub mod summary;

// Re-export commonly used types
pub use section::{BlockKind, ChartBar, ContentBlock, Section};
pub use summary::{InteractionKind, SessionSummary};
