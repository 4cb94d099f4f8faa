//! Deck input and rendering
//!
//! Everything the event loop does apart from owning the terminal: overlay
//! state, key and pointer dispatch, card toggling and frame rendering. `App`
//! feeds it terminal events and draws through it.

use crate::{
    app::{
        screens::{HelpScreen, PresentationScreen, SummaryScreen},
        state::{AppAction, AppState, StateManager},
        view::SlideView,
    },
    config::DeckConfig,
    deck::{Clock, InputEvent, InputRouter, PointerRelease, Presentation, SectionStore},
    models::{BlockKind, InteractionKind, SessionSummary},
};
use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Input dispatch and render state for one presentation
pub struct DeckController {
    state_manager: StateManager,
    presentation: Presentation,
    /// Render state notified on every transition
    view: Rc<RefCell<SlideView>>,
    router: InputRouter,
    presentation_screen: PresentationScreen,
    summary_screen: SummaryScreen,
    help_screen: HelpScreen,
    /// Narrower terminals hide the sidebar
    compact_width: u16,
    /// Current section, shared with the heartbeat task
    current: Arc<AtomicUsize>,
    redraw: bool,
}

impl DeckController {
    pub fn new(config: &DeckConfig, store: SectionStore, clock: Rc<dyn Clock>) -> Self {
        let view = Rc::new(RefCell::new(SlideView::new(
            Rc::new(store.clone()),
            config.animations,
            clock.now(),
        )));
        let presentation = Presentation::with_view(store, clock, config.animations, view.clone());

        Self {
            state_manager: StateManager::new(),
            router: InputRouter::new(config.swipe_threshold_px)
                .with_cell_size(config.cell_width_px, config.cell_height_px),
            current: Arc::new(AtomicUsize::new(presentation.current_index())),
            presentation,
            view,
            presentation_screen: PresentationScreen::new(true),
            summary_screen: SummaryScreen::new(),
            help_screen: HelpScreen::new(),
            compact_width: config.compact_width,
            redraw: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn state(&self) -> &AppState {
        self.state_manager.current_state()
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn view(&self) -> Ref<'_, SlideView> {
        self.view.borrow()
    }

    /// Current section index, readable from other tasks
    pub fn current_handle(&self) -> Arc<AtomicUsize> {
        self.current.clone()
    }

    pub fn session_start(&self) -> Instant {
        self.presentation.session().session_start()
    }

    pub fn summary(&self) -> SessionSummary {
        self.presentation.summary()
    }

    /// Show the sidebar only when the terminal is wide enough
    pub fn fit_width(&mut self, width: u16) {
        self.presentation_screen
            .set_sidebar_visible(width >= self.compact_width);
    }

    /// Window title for the section entered since the last call
    pub fn take_window_title(&mut self) -> Option<String> {
        if !self.view.borrow_mut().take_title_update() {
            return None;
        }
        self.presentation.current_section().map(|section| {
            format!("{} - {}", section.title, self.presentation.store().title())
        })
    }

    /// Whether the next frame differs from the last one drawn
    ///
    /// Input, running animations and the live summary clock all need frames;
    /// an idle deck does not.
    pub fn needs_redraw(&mut self) -> bool {
        let now = self.presentation.now();
        let animating = !self.view.borrow().timeline().is_settled(now)
            || self.presentation.displayed_percentage(now) != self.presentation.percentage();
        let live_summary = *self.state_manager.current_state() == AppState::Summary;
        std::mem::take(&mut self.redraw) || animating || live_summary
    }

    /// Draw the deck and any overlay
    pub fn render(&mut self, f: &mut Frame) {
        let now = self.presentation.now();
        let view = self.view.borrow();
        self.presentation_screen
            .render(f, &self.presentation, &view, now);

        match self.state_manager.current_state() {
            AppState::Summary => {
                let summary = self.presentation.summary();
                self.summary_screen
                    .render(f, self.presentation.store(), &summary);
            }
            AppState::Help => self.help_screen.render(f),
            AppState::Presenting => {}
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        self.redraw = true;
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, _) => self.fit_width(width),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let presenting = *self.state_manager.current_state() == AppState::Presenting;

        if presenting {
            let before = self.presentation.current_index();
            if self
                .router
                .dispatch(InputEvent::Key(key), self.presentation.navigation_mut())
            {
                self.after_navigation(before);
                return;
            }
        }

        let action = self.state_manager.handle_key_event(key);
        if action == AppAction::ToggleSidebar && presenting {
            self.presentation_screen.toggle_sidebar();
        }
        if *self.state_manager.current_state() != AppState::Presenting {
            // the overlay swallows the matching release
            self.router.cancel_pointer();
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if *self.state_manager.current_state() != AppState::Presenting {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.router.press(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => {
                match self.router.release(mouse.column, mouse.row) {
                    PointerRelease::Swipe(command) => {
                        let before = self.presentation.current_index();
                        self.presentation.apply(command);
                        self.after_navigation(before);
                    }
                    PointerRelease::Click { column, row } => self.handle_click(column, row),
                    PointerRelease::Ignored => {}
                }
            }
            MouseEventKind::ScrollDown => self.scroll(1),
            MouseEventKind::ScrollUp => self.scroll(-1),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if let Some(index) = self.presentation_screen.nav_index_at(column, row) {
            let before = self.presentation.current_index();
            self.presentation
                .record_interaction(InteractionKind::Navigation);
            self.router
                .dispatch(InputEvent::NavClick(index), self.presentation.navigation_mut());
            self.after_navigation(before);
            return;
        }

        let block = self.presentation_screen.block_at(column, row);
        if let Some((index, BlockKind::Card)) = block {
            let collapsed = self.view.borrow_mut().toggle_collapsed(index);
            debug!(block = index, collapsed, "card toggled");
        }
        self.presentation
            .record_interaction(interaction_for(block.map(|(_, kind)| kind)));
    }

    fn scroll(&mut self, delta: isize) {
        let blocks = self
            .presentation
            .current_section()
            .map(|section| section.blocks.len())
            .unwrap_or(0);
        self.view.borrow_mut().scroll_by(delta, blocks);
    }

    fn after_navigation(&mut self, before: usize) {
        let current = self.presentation.current_index();
        self.current.store(current, Ordering::Relaxed);

        if current != before {
            let title = self
                .presentation
                .current_section()
                .map(|section| section.title.as_str())
                .unwrap_or_default();
            info!(from = before + 1, to = current + 1, title, "section changed");
        }
    }
}

/// Interaction recorded for a click on something other than the sidebar
fn interaction_for(block: Option<BlockKind>) -> InteractionKind {
    match block {
        Some(BlockKind::Card) => InteractionKind::Card,
        Some(BlockKind::Metric) => InteractionKind::Metric,
        _ => InteractionKind::Other,
    }
}
