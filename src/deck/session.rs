//! Session analytics
//!
//! Accumulates per-section dwell time, the visited set and pointer
//! interaction counts for the lifetime of the process. Nothing is persisted.

use crate::deck::clock::Clock;
use crate::deck::navigation::{Transition, TransitionObserver};
use crate::models::{InteractionKind, SessionSummary};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Session record, mutated only through transition notifications
pub struct SessionTracker {
    clock: Rc<dyn Clock>,
    section_count: usize,
    started_at: DateTime<Utc>,
    session_start: Instant,
    last_transition: Instant,
    current_index: usize,
    visited: BTreeSet<usize>,
    dwell: BTreeMap<usize, Duration>,
    interactions: BTreeMap<InteractionKind, u32>,
}

impl SessionTracker {
    /// Start a session with `initial_index` already on screen
    pub fn new(section_count: usize, initial_index: usize, clock: Rc<dyn Clock>) -> Self {
        let now = clock.now();
        let mut visited = BTreeSet::new();
        visited.insert(initial_index);

        Self {
            clock,
            section_count,
            started_at: Utc::now(),
            session_start: now,
            last_transition: now,
            current_index: initial_index,
            visited,
            dwell: BTreeMap::new(),
            interactions: BTreeMap::new(),
        }
    }

    /// Monotonic start of the session
    pub fn session_start(&self) -> Instant {
        self.session_start
    }

    /// Count a pointer interaction on the current section
    pub fn record_interaction(&mut self, kind: InteractionKind) {
        *self.interactions.entry(kind).or_insert(0) += 1;
        debug!(
            kind = kind.label(),
            section = self.current_index,
            "interaction recorded"
        );
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    /// Distinct sections visited as a percentage of the deck
    pub fn completion_rate(&self) -> f64 {
        self.visited.len() as f64 / self.section_count as f64 * 100.0
    }

    /// Snapshot the session record
    pub fn summary(&self) -> SessionSummary {
        let now = self.clock.now();
        SessionSummary {
            started_at: self.started_at,
            total_elapsed: now.saturating_duration_since(self.session_start),
            visited_indices: self.visited.iter().copied().collect(),
            completion_rate: self.completion_rate(),
            dwell_ms: self
                .dwell
                .iter()
                .map(|(&index, dwell)| (index, dwell.as_millis() as u64))
                .collect(),
            current_index: self.current_index,
            interactions: self.interactions.clone(),
        }
    }
}

impl TransitionObserver for SessionTracker {
    fn on_transition(&mut self, transition: &Transition) {
        let elapsed = transition
            .at
            .saturating_duration_since(self.last_transition);
        *self.dwell.entry(transition.previous).or_default() += elapsed;
        self.visited.insert(transition.current);
        self.last_transition = transition.at;
        self.current_index = transition.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::clock::ManualClock;

    fn tracker(count: usize) -> (SessionTracker, ManualClock) {
        let clock = ManualClock::new();
        (SessionTracker::new(count, 0, Rc::new(clock.clone())), clock)
    }

    fn move_to(tracker: &mut SessionTracker, clock: &ManualClock, previous: usize, current: usize) {
        tracker.on_transition(&Transition {
            previous,
            current,
            at: clock.now(),
        });
    }

    #[test]
    fn test_initial_section_counts_as_visited() {
        let (tracker, _) = tracker(13);
        let summary = tracker.summary();
        assert_eq!(summary.visited_indices, vec![0]);
        assert!(summary.dwell_ms.is_empty());
        assert_eq!(summary.total_elapsed, Duration::ZERO);
    }

    #[test]
    fn test_dwell_accumulates_into_previous_section() {
        let (mut tracker, clock) = tracker(13);

        clock.advance(Duration::from_millis(1200));
        move_to(&mut tracker, &clock, 0, 2);
        clock.advance(Duration::from_millis(300));
        move_to(&mut tracker, &clock, 2, 0);
        clock.advance(Duration::from_millis(800));
        move_to(&mut tracker, &clock, 0, 2);

        let summary = tracker.summary();
        assert_eq!(summary.dwell_ms.get(&0), Some(&2000));
        assert_eq!(summary.dwell_ms.get(&2), Some(&300));
        assert_eq!(summary.total_elapsed, Duration::from_millis(2300));
        assert_eq!(summary.current_index, 2);
    }

    #[test]
    fn test_completion_rate() {
        let (mut tracker, clock) = tracker(13);
        move_to(&mut tracker, &clock, 0, 2);
        move_to(&mut tracker, &clock, 2, 5);
        move_to(&mut tracker, &clock, 5, 2);

        let summary = tracker.summary();
        assert_eq!(summary.visited_indices, vec![0, 2, 5]);
        assert!((summary.completion_rate - 23.0769230769).abs() < 1e-6);
    }

    #[test]
    fn test_reentry_only_adds_time_to_same_bucket() {
        let (mut tracker, clock) = tracker(4);
        clock.advance(Duration::from_millis(500));
        move_to(&mut tracker, &clock, 0, 0);
        clock.advance(Duration::from_millis(250));
        move_to(&mut tracker, &clock, 0, 0);

        let summary = tracker.summary();
        assert_eq!(summary.visited_indices, vec![0]);
        assert_eq!(summary.dwell_ms.len(), 1);
        assert_eq!(summary.dwell_ms.get(&0), Some(&750));
    }

    #[test]
    fn test_interaction_counts() {
        let (mut tracker, _) = tracker(4);
        tracker.record_interaction(InteractionKind::Card);
        tracker.record_interaction(InteractionKind::Card);
        tracker.record_interaction(InteractionKind::Navigation);

        let summary = tracker.summary();
        assert_eq!(summary.interactions.get(&InteractionKind::Card), Some(&2));
        assert_eq!(summary.interactions.get(&InteractionKind::Navigation), Some(&1));
        assert_eq!(summary.interactions.get(&InteractionKind::Metric), None);
    }
}
