//! Section navigation
//!
//! `NavigationController` is the single owner of the current section index.
//! Every accepted move is broadcast as a `Transition` to the subscribed
//! observers in the order they were registered.

use crate::deck::clock::Clock;
use crate::deck::progress::ProgressIndicator;
use crate::deck::store::SectionStore;
use crate::models::Section;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;

/// A validated change of the current section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index shown before the move
    pub previous: usize,
    /// Index shown after the move
    pub current: usize,
    /// When the move happened
    pub at: Instant,
}

/// Receives every accepted transition
pub trait TransitionObserver {
    fn on_transition(&mut self, transition: &Transition);
}

/// Observer handle shared between the controller and its owner
pub type SharedObserver = Rc<RefCell<dyn TransitionObserver>>;

/// Navigation requests produced by input routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    GoTo(usize),
}

/// Position snapshot for inspection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionInfo {
    pub index: usize,
    pub total: usize,
    pub progress: f64,
}

/// Owns the current section index
pub struct NavigationController {
    store: Rc<SectionStore>,
    clock: Rc<dyn Clock>,
    current_index: usize,
    observers: Vec<SharedObserver>,
}

impl NavigationController {
    /// Create a controller positioned on the first section
    pub fn new(store: Rc<SectionStore>, clock: Rc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            current_index: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer; observers are notified in registration order
    pub fn subscribe(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn section_count(&self) -> usize {
        self.store.len()
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.store.get(self.current_index)
    }

    /// Show the section at `index`; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index >= self.store.len() {
            debug!(
                index,
                section_count = self.store.len(),
                "navigation ignored: index out of range"
            );
            return;
        }

        let transition = Transition {
            previous: self.current_index,
            current: index,
            at: self.clock.now(),
        };
        self.current_index = index;

        debug!(
            from = transition.previous,
            to = transition.current,
            "section transition"
        );
        for observer in &self.observers {
            observer.borrow_mut().on_transition(&transition);
        }
    }

    /// Advance one section; no wraparound
    pub fn next(&mut self) {
        self.go_to(self.current_index.saturating_add(1));
    }

    /// Go back one section; no wraparound
    pub fn previous(&mut self) {
        match self.current_index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => debug!("navigation ignored: already at the first section"),
        }
    }

    pub fn first(&mut self) {
        self.go_to(0);
    }

    pub fn last(&mut self) {
        self.go_to(self.store.len() - 1);
    }

    /// Show the section with the given id; unknown ids are ignored
    pub fn go_to_id(&mut self, section_id: &str) {
        match self.store.index_of(section_id) {
            Some(index) => self.go_to(index),
            None => debug!(section_id, "navigation ignored: unknown section id"),
        }
    }

    /// Execute a routed navigation request
    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::First => self.first(),
            NavCommand::Last => self.last(),
            NavCommand::GoTo(index) => self.go_to(index),
        }
    }

    pub fn current_info(&self) -> SectionInfo {
        SectionInfo {
            index: self.current_index,
            total: self.store.len(),
            progress: ProgressIndicator::percentage(self.current_index, self.store.len()),
        }
    }
}
