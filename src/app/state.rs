//! Application state management
//!
//! Handles overlay transitions and the keys that are not section
//! navigation (quit, summary, help, sidebar).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    /// Deck is shown
    #[default]
    Presenting,
    /// Session summary overlay
    Summary,
    /// Keyboard shortcut overlay
    Help,
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Show or hide the session summary (s)
    ToggleSummary,
    /// Show or hide the shortcut list (?)
    ToggleHelp,
    /// Show or hide the navigation sidebar (Tab)
    ToggleSidebar,
    /// Close the overlay or leave the deck (Esc)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager showing the deck
    pub fn new() -> Self {
        Self {
            current_state: AppState::Presenting,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state.clone());
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise to the deck
    pub fn go_back(&mut self) {
        self.current_state = self.previous_state.take().unwrap_or_default();
    }

    fn toggle(&mut self, overlay: AppState) {
        if self.current_state == overlay {
            self.go_back();
        } else {
            // Overlays never stack
            self.current_state = AppState::Presenting;
            self.transition_to(overlay);
        }
    }

    /// Apply an action to the overlay state
    pub fn handle_action(&mut self, action: &AppAction) {
        match action {
            AppAction::Quit => self.should_quit = true,
            AppAction::Back => match self.current_state {
                AppState::Presenting => self.should_quit = true,
                _ => self.go_back(),
            },
            AppAction::ToggleSummary => self.toggle(AppState::Summary),
            AppAction::ToggleHelp => self.toggle(AppState::Help),
            // Sidebar visibility belongs to the presentation screen
            AppAction::ToggleSidebar | AppAction::None => {}
        }
    }

    /// Convert keyboard event to an application action
    pub fn key_to_action(key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => AppAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppAction::Quit
            }
            KeyCode::Char('s') | KeyCode::Char('S') => AppAction::ToggleSummary,
            KeyCode::Char('?') => AppAction::ToggleHelp,
            KeyCode::Tab => AppAction::ToggleSidebar,
            KeyCode::Esc => AppAction::Back,
            _ => AppAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) -> AppAction {
        let action = Self::key_to_action(key);
        self.handle_action(&action);
        action
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
