//! Session summary overlay
//!
//! Shows the live session record: elapsed time, completion and a per-section
//! table of visits and dwell time.

use super::centered_rect;
use crate::deck::SectionStore;
use crate::models::{InteractionKind, SessionSummary};
use crate::util::format::{format_duration, format_percentage};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table},
    Frame,
};

/// Summary overlay component
#[derive(Debug, Default)]
pub struct SummaryScreen;

impl SummaryScreen {
    pub fn new() -> Self {
        Self
    }

    /// Render the overlay on top of the current frame
    pub fn render(&self, f: &mut Frame, store: &SectionStore, summary: &SessionSummary) {
        let area = centered_rect(80, 80, f.size());
        f.render_widget(Clear, area);

        let outer = Block::default()
            .title("Session Summary")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Totals
                Constraint::Min(3),    // Per-section table
                Constraint::Length(1), // Help text
            ])
            .split(inner);

        self.render_totals(f, chunks[0], summary);
        self.render_sections(f, chunks[1], store, summary);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("S", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("/"),
            Span::styled("Esc", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" Close"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    fn render_totals(&self, f: &mut Frame, area: Rect, summary: &SessionSummary) {
        let interactions = [
            InteractionKind::Navigation,
            InteractionKind::Card,
            InteractionKind::Metric,
            InteractionKind::Other,
        ]
        .iter()
        .map(|kind| {
            let count = summary.interactions.get(kind).copied().unwrap_or(0);
            format!("{} {}", kind.label(), count)
        })
        .collect::<Vec<_>>()
        .join("  ");

        let label = Style::default().fg(Color::Yellow);
        let text = vec![
            Line::from(vec![
                Span::styled("Started:    ", label),
                Span::raw(summary.started_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            ]),
            Line::from(vec![
                Span::styled("Elapsed:    ", label),
                Span::raw(format_duration(summary.total_elapsed)),
            ]),
            Line::from(vec![
                Span::styled("Completion: ", label),
                Span::raw(format!(
                    "{} ({} sections)",
                    format_percentage(summary.completion_rate),
                    summary.visited_indices.len()
                )),
            ]),
            Line::from(vec![
                Span::styled("Clicks:     ", label),
                Span::raw(interactions),
            ]),
        ];

        f.render_widget(Paragraph::new(text), area);
    }

    fn render_sections(
        &self,
        f: &mut Frame,
        area: Rect,
        store: &SectionStore,
        summary: &SessionSummary,
    ) {
        let rows: Vec<Row> = store
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let visited = if summary.visited(index) { "✓" } else { "" };
                let dwell = if summary.dwell_ms.contains_key(&index) {
                    format_duration(summary.dwell(index))
                } else {
                    "-".to_string()
                };
                let style = if index == summary.current_index {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    format!("{}", index + 1),
                    section.title.clone(),
                    visited.to_string(),
                    dwell,
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(20),
                Constraint::Length(8),
                Constraint::Length(10),
            ],
        )
        .header(
            Row::new(vec!["#", "Section", "Visited", "Dwell"]).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(Block::default().borders(Borders::TOP));

        f.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{content, ManualClock, NavCommand, Presentation};
    use ratatui::{backend::TestBackend, Terminal};
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn test_renders_session_totals() {
        let clock = ManualClock::new();
        let mut presentation =
            Presentation::new(content::builtin_store().unwrap(), Rc::new(clock.clone()), false);
        clock.advance(Duration::from_millis(1500));
        presentation.apply(NavCommand::GoTo(2));
        presentation.record_interaction(InteractionKind::Card);

        let summary = presentation.summary();
        let screen = SummaryScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| screen.render(f, presentation.store(), &summary))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Session Summary"));
        assert!(text.contains("15.38%"));
        assert!(text.contains("card 1"));
        assert!(text.contains("Platform Selection"));
    }
}
