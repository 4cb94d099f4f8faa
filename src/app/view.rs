//! View-layer transition observer
//!
//! Tracks what the renderer needs to know about the latest transition: the
//! entrance timeline, the content scroll offset, which cards are collapsed
//! and whether the terminal title is stale.

use crate::app::animation::EntranceTimeline;
use crate::deck::{SectionStore, Transition, TransitionObserver};
use crate::models::Section;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Instant;

/// Render state driven by navigation
#[derive(Debug)]
pub struct SlideView {
    store: Rc<SectionStore>,
    animations: bool,
    timeline: EntranceTimeline,
    scroll: usize,
    /// Block indices of cards showing only their title
    collapsed: BTreeSet<usize>,
    title_stale: bool,
}

impl SlideView {
    /// Create the view for the first section, entering at `now`
    pub fn new(store: Rc<SectionStore>, animations: bool, now: Instant) -> Self {
        let placeholder = Section::new("", "");
        let first = store.get(0).unwrap_or(&placeholder);
        let timeline = EntranceTimeline::new(first, now, animations);
        Self {
            store,
            animations,
            timeline,
            scroll: 0,
            collapsed: BTreeSet::new(),
            title_stale: true,
        }
    }

    pub fn timeline(&self) -> &EntranceTimeline {
        &self.timeline
    }

    /// Index of the first content block drawn
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll the content by whole blocks, staying within `block_count`
    pub fn scroll_by(&mut self, delta: isize, block_count: usize) {
        let max = block_count.saturating_sub(1);
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            (self.scroll + delta as usize).min(max)
        };
    }

    /// Collapse or expand the card at `index`
    ///
    /// Returns true when the card is now collapsed.
    pub fn toggle_collapsed(&mut self, index: usize) -> bool {
        if self.collapsed.remove(&index) {
            false
        } else {
            self.collapsed.insert(index)
        }
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed.contains(&index)
    }

    /// Returns true once per transition so the caller can refresh the title
    pub fn take_title_update(&mut self) -> bool {
        std::mem::take(&mut self.title_stale)
    }
}

impl TransitionObserver for SlideView {
    fn on_transition(&mut self, transition: &Transition) {
        if let Some(section) = self.store.get(transition.current) {
            self.timeline = EntranceTimeline::new(section, transition.at, self.animations);
        }
        self.scroll = 0;
        self.collapsed.clear();
        self.title_stale = true;
    }
}
