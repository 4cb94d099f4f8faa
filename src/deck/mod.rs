//! Presentation core
//!
//! Terminal-independent deck logic: section storage, navigation, progress,
//! session tracking and input routing. The TUI in `app` subscribes to
//! transitions and renders them.

pub mod clock;
pub mod content;
pub mod input;
pub mod navigation;
pub mod presentation;
pub mod progress;
pub mod session;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{InputEvent, InputRouter, Point, PointerRelease};
pub use navigation::{
    NavCommand, NavigationController, SectionInfo, SharedObserver, Transition, TransitionObserver,
};
pub use presentation::Presentation;
pub use progress::ProgressIndicator;
pub use session::SessionTracker;
pub use store::SectionStore;

use crate::config::{deck_file::DeckFile, DeckConfig};
use crate::Result;

/// Load the deck named by the configuration, or the built-in deck
pub fn load_store(config: &DeckConfig) -> Result<SectionStore> {
    match &config.deck_path {
        Some(path) => DeckFile::load(path)?.into_store(),
        None => content::builtin_store(),
    }
}
