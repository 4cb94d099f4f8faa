//! Main application controller
//!
//! Owns the terminal and runs the render loop. Input handling and drawing
//! live in `DeckController`.

use crate::{
    app::{controller::DeckController, tui::Tui},
    config::DeckConfig,
    deck::{SectionStore, SystemClock},
    models::SessionSummary,
    DeckError, Result,
};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application config
    config: DeckConfig,
    /// Deck state, input dispatch and screens
    controller: DeckController,
}

impl App {
    /// Create a new application instance for a loaded deck
    pub fn new(config: DeckConfig, store: SectionStore) -> Result<Self> {
        let controller = DeckController::new(&config, store, Rc::new(SystemClock));
        let tui = Tui::new(config.tick_rate()).map_err(|e| DeckError::TuiError(e.to_string()))?;

        Ok(Self {
            tui,
            config,
            controller,
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| DeckError::TuiError(e.to_string()))?;

        let size = self.tui.size()?;
        self.controller.fit_width(size.width);

        info!(
            sections = self.controller.presentation().navigation().section_count(),
            deck = self.controller.presentation().store().title(),
            width = size.width,
            height = size.height,
            "presentation started"
        );
        Ok(())
    }

    /// Run the main application loop until the user quits
    ///
    /// Returns the final session summary.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        let heartbeat = spawn_heartbeat(
            self.config.heartbeat_interval(),
            self.controller.session_start(),
            self.controller.current_handle(),
        );
        let outcome = self.event_loop().await;
        heartbeat.abort();
        outcome?;

        let summary = self.controller.summary();
        info!(
            elapsed_ms = summary.total_elapsed.as_millis() as u64,
            visited = summary.visited_indices.len(),
            completion = summary.completion_rate,
            "presentation finished"
        );
        Ok(summary)
    }

    /// Leave the alternate screen
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.controller.should_quit() {
            self.refresh_title();
            if self.controller.needs_redraw() {
                let controller = &mut self.controller;
                self.tui.draw(|f| controller.render(f))?;
            }
            if let Some(event) = self.tui.handle_events()? {
                self.controller.handle_event(event);
            }
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Put the current section in the terminal title after each transition
    fn refresh_title(&mut self) {
        if let Some(title) = self.controller.take_window_title() {
            // some terminals reject title changes; keep presenting
            if let Err(e) = self.tui.set_title(&title) {
                warn!(error = %e, "could not set terminal title");
            }
        }
    }
}

/// Periodically log how long the session has been running
fn spawn_heartbeat(
    interval: Duration,
    started: Instant,
    current: Arc<AtomicUsize>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let elapsed = Duration::from_secs(started.elapsed().as_secs());
            info!(
                elapsed = %humantime::format_duration(elapsed),
                section = current.load(Ordering::Relaxed) + 1,
                "session heartbeat"
            );
        }
    })
}
