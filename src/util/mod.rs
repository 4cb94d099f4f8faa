//! Utility functions module
//!
//! Contains helpers for formatting durations and percentages shown in the
//! deck and in the session summary.

pub mod format;

// Re-export commonly used functions
pub use format::{format_duration, format_percentage, parse_simple_percent};
