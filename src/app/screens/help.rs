//! Keyboard shortcut overlay

use super::centered_rect;
use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

const SHORTCUTS: &[(&str, &str)] = &[
    ("→ / ↓ / PgDn / Space / l / j", "Next section"),
    ("← / ↑ / PgUp / Bksp / h / k", "Previous section"),
    ("Home", "First section"),
    ("End", "Last section"),
    ("Click sidebar item", "Jump to section"),
    ("Drag left / right", "Swipe to next / previous"),
    ("Mouse wheel", "Scroll section content"),
    ("Tab", "Show or hide the sidebar"),
    ("S", "Session summary"),
    ("?", "This help"),
    ("Esc", "Close overlay, or quit"),
    ("Q / Ctrl+C", "Quit"),
];

/// Help overlay component
#[derive(Debug, Default)]
pub struct HelpScreen;

impl HelpScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame) {
        let area = centered_rect(60, 60, f.size());
        f.render_widget(Clear, area);

        let rows = SHORTCUTS.iter().map(|(keys, description)| {
            Row::new(vec![*keys, *description])
        });

        let table = Table::new(rows, [Constraint::Length(30), Constraint::Min(20)])
            .header(
                Row::new(vec!["Key", "Action"]).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            )
            .block(
                Block::default()
                    .title("Keyboard Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(table, area);
    }
}
