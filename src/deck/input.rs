//! Input routing
//!
//! Translates key presses, navigation clicks and swipe gestures into
//! navigation commands. There is no debouncing: every qualifying event
//! produces exactly one command.
//!
//! Terminal pointers report cells, not pixels. The router scales cells to
//! pixels so the swipe threshold keeps its meaning, and tells a swipe apart
//! from a click on release.

use crate::deck::navigation::{NavCommand, NavigationController};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default minimum horizontal travel for a swipe, in pixels
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;
/// Default terminal cell width in pixels
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;
/// Default terminal cell height in pixels
pub const DEFAULT_CELL_HEIGHT: f64 = 16.0;

/// Pointer position in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Raw input understood by the router
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Click on the navigation item for a section
    NavClick(usize),
    /// Pointer pressed; start of a potential swipe
    TouchStart(Point),
    /// Pointer released; end of a potential swipe
    TouchEnd(Point),
}

/// What releasing the pointer amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    /// The drag was long enough to navigate
    Swipe(NavCommand),
    /// Pressed and released on the same cell without swiping
    Click { column: u16, row: u16 },
    /// Short drag, or a release with no press
    Ignored,
}

/// Maps input events to navigation commands
#[derive(Debug, Clone)]
pub struct InputRouter {
    swipe_threshold: f64,
    cell_width: f64,
    cell_height: f64,
    touch_start: Option<Point>,
    press_cell: Option<(u16, u16)>,
}

impl InputRouter {
    pub fn new(swipe_threshold: f64) -> Self {
        Self {
            swipe_threshold,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            touch_start: None,
            press_cell: None,
        }
    }

    /// Set the pixel size of one terminal cell
    pub fn with_cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Pixel position of the top-left corner of a cell
    pub fn cell_to_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            column as f64 * self.cell_width,
            row as f64 * self.cell_height,
        )
    }

    /// Pointer went down on a cell
    pub fn press(&mut self, column: u16, row: u16) {
        self.press_cell = Some((column, row));
        self.touch_start = Some(self.cell_to_point(column, row));
    }

    /// Pointer came up on a cell; swipes win over clicks
    pub fn release(&mut self, column: u16, row: u16) -> PointerRelease {
        let pressed = self.press_cell.take();
        let end = self.cell_to_point(column, row);
        if let Some(command) = self.route(InputEvent::TouchEnd(end)) {
            return PointerRelease::Swipe(command);
        }
        if pressed == Some((column, row)) {
            PointerRelease::Click { column, row }
        } else {
            PointerRelease::Ignored
        }
    }

    /// Forget a press whose release will never arrive
    pub fn cancel_pointer(&mut self) {
        self.press_cell = None;
        self.touch_start = None;
    }

    /// Translate an event; `None` means the event does not navigate
    pub fn route(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::Key(key) => Self::route_key(&key),
            InputEvent::NavClick(index) => Some(NavCommand::GoTo(index)),
            InputEvent::TouchStart(point) => {
                self.touch_start = Some(point);
                None
            }
            InputEvent::TouchEnd(end) => {
                let start = self.touch_start.take()?;
                self.classify_swipe(end.x - start.x, end.y - start.y)
            }
        }
    }

    /// Route an event and apply the resulting command
    pub fn dispatch(&mut self, event: InputEvent, navigation: &mut NavigationController) -> bool {
        match self.route(event) {
            Some(command) => {
                navigation.apply(command);
                true
            }
            None => false,
        }
    }

    /// Navigation keys; anything held with Control or Alt is left alone
    pub fn route_key(key: &KeyEvent) -> Option<NavCommand> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::PageDown => Some(NavCommand::Next),
            KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Char('j') => Some(NavCommand::Next),
            KeyCode::Left | KeyCode::Up | KeyCode::PageUp | KeyCode::Backspace => {
                Some(NavCommand::Previous)
            }
            KeyCode::Char('h') | KeyCode::Char('k') => Some(NavCommand::Previous),
            KeyCode::Home => Some(NavCommand::First),
            KeyCode::End => Some(NavCommand::Last),
            _ => None,
        }
    }

    /// Horizontal-dominant travel beyond the threshold: right goes back,
    /// left goes forward
    pub fn classify_swipe(&self, dx: f64, dy: f64) -> Option<NavCommand> {
        if dx.abs() > dy.abs() && dx.abs() > self.swipe_threshold {
            if dx > 0.0 {
                Some(NavCommand::Previous)
            } else {
                Some(NavCommand::Next)
            }
        } else {
            None
        }
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(InputRouter::route_key(&key(KeyCode::Right)), Some(NavCommand::Next));
        assert_eq!(InputRouter::route_key(&key(KeyCode::Down)), Some(NavCommand::Next));
        assert_eq!(InputRouter::route_key(&key(KeyCode::Left)), Some(NavCommand::Previous));
        assert_eq!(InputRouter::route_key(&key(KeyCode::Up)), Some(NavCommand::Previous));
    }

    #[test]
    fn test_terminal_convention_keys() {
        for code in [KeyCode::PageDown, KeyCode::Char(' '), KeyCode::Char('l'), KeyCode::Char('j')] {
            assert_eq!(InputRouter::route_key(&key(code)), Some(NavCommand::Next));
        }
        for code in [KeyCode::PageUp, KeyCode::Backspace, KeyCode::Char('h'), KeyCode::Char('k')] {
            assert_eq!(InputRouter::route_key(&key(code)), Some(NavCommand::Previous));
        }
    }

    #[test]
    fn test_home_end_keys() {
        assert_eq!(InputRouter::route_key(&key(KeyCode::Home)), Some(NavCommand::First));
        assert_eq!(InputRouter::route_key(&key(KeyCode::End)), Some(NavCommand::Last));
    }

    #[test]
    fn test_unmapped_and_modified_keys() {
        assert_eq!(InputRouter::route_key(&key(KeyCode::Char('q'))), None);
        assert_eq!(InputRouter::route_key(&key(KeyCode::Enter)), None);
        assert_eq!(
            InputRouter::route_key(&KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_swipe_classification() {
        let router = InputRouter::default();
        assert_eq!(router.classify_swipe(-150.0, 10.0), Some(NavCommand::Next));
        assert_eq!(router.classify_swipe(150.0, -10.0), Some(NavCommand::Previous));
        // vertical dominant and below threshold
        assert_eq!(router.classify_swipe(40.0, 60.0), None);
        // horizontal dominant but below threshold
        assert_eq!(router.classify_swipe(100.0, 5.0), None);
        // beyond threshold but vertical dominant
        assert_eq!(router.classify_swipe(-120.0, 200.0), None);
    }

    #[test]
    fn test_touch_sequence() {
        let mut router = InputRouter::default();
        assert_eq!(router.route(InputEvent::TouchStart(Point::new(300.0, 200.0))), None);
        assert_eq!(
            router.route(InputEvent::TouchEnd(Point::new(150.0, 210.0))),
            Some(NavCommand::Next)
        );
        // a release without a press is ignored
        assert_eq!(router.route(InputEvent::TouchEnd(Point::new(0.0, 0.0))), None);
    }

    #[test]
    fn test_release_on_press_cell_is_click() {
        let mut router = InputRouter::default();
        router.press(40, 10);
        assert_eq!(router.release(40, 10), PointerRelease::Click { column: 40, row: 10 });
        // the press is consumed
        assert_eq!(router.release(40, 10), PointerRelease::Ignored);
    }

    #[test]
    fn test_release_after_long_drag_is_swipe() {
        // 13 columns at 8px is 104px
        let mut router = InputRouter::default();
        router.press(40, 10);
        assert_eq!(router.release(27, 10), PointerRelease::Swipe(NavCommand::Next));

        router.press(27, 10);
        assert_eq!(router.release(40, 11), PointerRelease::Swipe(NavCommand::Previous));

        // 12 columns is 96px: neither swipe nor click
        router.press(40, 10);
        assert_eq!(router.release(28, 10), PointerRelease::Ignored);
    }

    #[test]
    fn test_cell_size_scales_threshold() {
        let mut router = InputRouter::default().with_cell_size(10.0, 20.0);
        assert_eq!(router.cell_to_point(3, 2), Point::new(30.0, 40.0));

        router.press(40, 10);
        assert_eq!(router.release(29, 10), PointerRelease::Swipe(NavCommand::Next));
    }

    #[test]
    fn test_cancel_pointer_forgets_press() {
        let mut router = InputRouter::default();
        router.press(40, 10);
        router.cancel_pointer();
        assert_eq!(router.release(20, 10), PointerRelease::Ignored);
        assert_eq!(router.release(40, 10), PointerRelease::Ignored);
    }

    #[test]
    fn test_nav_click() {
        let mut router = InputRouter::default();
        assert_eq!(router.route(InputEvent::NavClick(7)), Some(NavCommand::GoTo(7)));
    }
}
