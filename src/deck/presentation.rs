//! Application context
//!
//! `Presentation` is built once at startup and owns the section store, the
//! navigation controller and the observers wired into it. Observers are
//! registered in a fixed order: progress, view (if any), session tracking.

use crate::deck::clock::Clock;
use crate::deck::navigation::{NavCommand, NavigationController, SectionInfo, SharedObserver};
use crate::deck::progress::ProgressIndicator;
use crate::deck::session::SessionTracker;
use crate::deck::store::SectionStore;
use crate::models::{InteractionKind, Section, SessionSummary};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::time::Instant;

/// Deck state shared by the input and rendering layers
pub struct Presentation {
    store: Rc<SectionStore>,
    clock: Rc<dyn Clock>,
    navigation: NavigationController,
    progress: Rc<RefCell<ProgressIndicator>>,
    session: Rc<RefCell<SessionTracker>>,
}

impl Presentation {
    /// Build a presentation without a view layer
    pub fn new(store: SectionStore, clock: Rc<dyn Clock>, animated: bool) -> Self {
        Self::build(store, clock, animated, None)
    }

    /// Build a presentation whose view is notified between progress and
    /// session tracking
    pub fn with_view(
        store: SectionStore,
        clock: Rc<dyn Clock>,
        animated: bool,
        view: SharedObserver,
    ) -> Self {
        Self::build(store, clock, animated, Some(view))
    }

    fn build(
        store: SectionStore,
        clock: Rc<dyn Clock>,
        animated: bool,
        view: Option<SharedObserver>,
    ) -> Self {
        let store = Rc::new(store);
        let mut navigation = NavigationController::new(store.clone(), clock.clone());

        let progress = Rc::new(RefCell::new(ProgressIndicator::new(store.len(), animated)));
        let session = Rc::new(RefCell::new(SessionTracker::new(
            store.len(),
            navigation.current_index(),
            clock.clone(),
        )));

        navigation.subscribe(progress.clone());
        if let Some(view) = view {
            navigation.subscribe(view);
        }
        navigation.subscribe(session.clone());

        Self {
            store,
            clock,
            navigation,
            progress,
            session,
        }
    }

    pub fn store(&self) -> &Rc<SectionStore> {
        &self.store
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }

    /// Execute a navigation command
    pub fn apply(&mut self, command: NavCommand) {
        self.navigation.apply(command);
    }

    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.navigation.current_section()
    }

    pub fn current_info(&self) -> SectionInfo {
        self.navigation.current_info()
    }

    /// Exact percentage for the current section
    pub fn percentage(&self) -> f64 {
        self.progress.borrow().target()
    }

    /// Eased percentage the gauge should draw at `now`
    pub fn displayed_percentage(&self, now: Instant) -> f64 {
        self.progress.borrow().displayed(now)
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn session(&self) -> Ref<'_, SessionTracker> {
        self.session.borrow()
    }

    pub fn record_interaction(&self, kind: InteractionKind) {
        self.session.borrow_mut().record_interaction(kind);
    }

    pub fn summary(&self) -> SessionSummary {
        self.session.borrow().summary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::clock::ManualClock;
    use std::time::Duration;

    fn presentation(count: usize) -> (Presentation, ManualClock) {
        let sections = (0..count)
            .map(|i| Section::new(format!("s{}", i), format!("Section {}", i)))
            .collect();
        let clock = ManualClock::new();
        let presentation = Presentation::new(
            SectionStore::new(sections).unwrap(),
            Rc::new(clock.clone()),
            false,
        );
        (presentation, clock)
    }

    #[test]
    fn test_progress_and_session_follow_navigation() {
        let (mut presentation, clock) = presentation(13);

        for _ in 0..3 {
            clock.advance(Duration::from_millis(100));
            presentation.apply(NavCommand::Next);
        }

        assert_eq!(presentation.current_index(), 3);
        assert!((presentation.percentage() - 30.769230769).abs() < 1e-6);

        let summary = presentation.summary();
        assert_eq!(summary.visited_indices, vec![0, 1, 2, 3]);
        assert_eq!(summary.dwell_ms.get(&2), Some(&100));
    }

    #[test]
    fn test_rejected_moves_leave_everything_untouched() {
        let (mut presentation, clock) = presentation(3);
        clock.advance(Duration::from_secs(1));
        presentation.apply(NavCommand::Previous);
        presentation.apply(NavCommand::GoTo(3));

        assert_eq!(presentation.current_index(), 0);
        assert!(presentation.summary().dwell_ms.is_empty());
    }

    #[test]
    fn test_record_interaction() {
        let (presentation, _) = presentation(2);
        presentation.record_interaction(InteractionKind::Metric);
        assert_eq!(
            presentation.summary().interactions.get(&InteractionKind::Metric),
            Some(&1)
        );
    }
}
