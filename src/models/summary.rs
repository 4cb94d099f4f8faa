//! Session summary data models
//!
//! The report produced by the session tracker on demand. It is an
//! inspection affordance only and is never written to disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Kind of pointer interaction counted by the session tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Click on a sidebar navigation item
    Navigation,
    /// Click on a card block
    Card,
    /// Click on a metric block
    Metric,
    /// Anything else
    Other,
}

impl InteractionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Card => "card",
            Self::Metric => "metric",
            Self::Other => "other",
        }
    }
}

/// Snapshot of the session record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Wall-clock time the session started
    pub started_at: DateTime<Utc>,
    /// Time since the session started
    #[serde(with = "duration_ms")]
    pub total_elapsed: Duration,
    /// Distinct section indices ever shown, ascending
    pub visited_indices: Vec<usize>,
    /// Share of sections visited, in percent
    pub completion_rate: f64,
    /// Accumulated milliseconds per section index
    pub dwell_ms: BTreeMap<usize, u64>,
    /// Section shown when the snapshot was taken
    pub current_index: usize,
    /// Pointer interaction counts
    #[serde(default)]
    pub interactions: BTreeMap<InteractionKind, u32>,
}

impl SessionSummary {
    /// Accumulated dwell time for a section
    pub fn dwell(&self, index: usize) -> Duration {
        Duration::from_millis(self.dwell_ms.get(&index).copied().unwrap_or(0))
    }

    /// Check whether a section was visited
    pub fn visited(&self, index: usize) -> bool {
        self.visited_indices.binary_search(&index).is_ok()
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_summary() -> SessionSummary {
        let mut dwell_ms = BTreeMap::new();
        dwell_ms.insert(0, 1500);
        dwell_ms.insert(2, 250);
        let mut interactions = BTreeMap::new();
        interactions.insert(InteractionKind::Navigation, 2);
        SessionSummary {
            started_at: Utc::now(),
            total_elapsed: Duration::from_secs(90),
            visited_indices: vec![0, 2, 5],
            completion_rate: 3.0 / 13.0 * 100.0,
            dwell_ms,
            current_index: 5,
            interactions,
        }
    }

    #[test]
    fn test_dwell_lookup() {
        let summary = create_summary();
        assert_eq!(summary.dwell(0), Duration::from_millis(1500));
        assert_eq!(summary.dwell(5), Duration::ZERO);
        assert!(summary.visited(2));
        assert!(!summary.visited(3));
    }

    #[test]
    fn test_json_shape() {
        let summary = create_summary();
        let value = serde_json::to_value(&summary).expect("Failed to serialize");

        assert_eq!(value["total_elapsed"], 90_000);
        assert_eq!(value["dwell_ms"]["0"], 1500);
        assert_eq!(value["interactions"]["navigation"], 2);
        assert_eq!(value["visited_indices"], serde_json::json!([0, 2, 5]));
    }
}
