//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! entrance animations and application state handling.

pub mod animation;
pub mod app;
pub mod controller;
pub mod screens;
pub mod state;
pub mod tui;
pub mod view;

pub use app::App;
pub use controller::DeckController;
pub use screens::{HelpScreen, PresentationScreen, SummaryScreen};
pub use state::{AppAction, AppState, StateManager};
pub use tui::Tui;
pub use view::SlideView;
