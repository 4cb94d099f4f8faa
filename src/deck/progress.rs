//! Progress indication
//!
//! The percentage is a pure function of the current index and the section
//! count. `ProgressIndicator` also keeps the value the gauge is easing
//! toward so the bar slides instead of jumping.

use crate::deck::navigation::{Transition, TransitionObserver};
use std::time::{Duration, Instant};

/// Time the gauge takes to slide to a new value
pub const PROGRESS_TRANSITION: Duration = Duration::from_millis(300);

/// Progress gauge state
#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    section_count: usize,
    from: f64,
    target: f64,
    changed_at: Option<Instant>,
    animated: bool,
}

impl ProgressIndicator {
    /// Percentage of the deck reached when `current_index` is shown
    ///
    /// `section_count` is never zero once a deck is loaded.
    pub fn percentage(current_index: usize, section_count: usize) -> f64 {
        (current_index + 1) as f64 / section_count as f64 * 100.0
    }

    /// Create a gauge showing the first section
    pub fn new(section_count: usize, animated: bool) -> Self {
        let initial = Self::percentage(0, section_count);
        Self {
            section_count,
            from: initial,
            target: initial,
            changed_at: None,
            animated,
        }
    }

    /// Percentage of the latest transition
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Percentage to draw at `now`, eased toward the target
    pub fn displayed(&self, now: Instant) -> f64 {
        let Some(changed_at) = self.changed_at else {
            return self.target;
        };
        if !self.animated {
            return self.target;
        }

        let elapsed = now.saturating_duration_since(changed_at);
        if elapsed >= PROGRESS_TRANSITION {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / PROGRESS_TRANSITION.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(2);
        self.from + (self.target - self.from) * eased
    }
}

impl TransitionObserver for ProgressIndicator {
    fn on_transition(&mut self, transition: &Transition) {
        // Start from wherever the bar is drawn right now so a superseded
        // slide continues smoothly.
        self.from = self.displayed(transition.at);
        self.target = Self::percentage(transition.current, self.section_count);
        self.changed_at = Some(transition.at);
    }
}
