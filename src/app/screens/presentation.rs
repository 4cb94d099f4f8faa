//! Presentation screen implementation
//!
//! Sidebar navigation, section header with the progress gauge, animated
//! content blocks and the key help bar. Remembers where items were drawn
//! so pointer clicks can be mapped back to sections and blocks.

use crate::app::animation::{EntranceTimeline, Visibility};
use crate::app::view::SlideView;
use crate::deck::Presentation;
use crate::models::{BlockKind, ContentBlock, Section};
use crate::util::format::format_percentage;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const SIDEBAR_WIDTH: u16 = 32;

/// Main deck screen
#[derive(Debug)]
pub struct PresentationScreen {
    list_state: ListState,
    sidebar_visible: bool,
    sidebar_area: Option<Rect>,
    item_count: usize,
    block_areas: Vec<(Rect, usize, BlockKind)>,
}

impl PresentationScreen {
    /// Create a new presentation screen
    pub fn new(sidebar_visible: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            list_state,
            sidebar_visible,
            sidebar_area: None,
            item_count: 0,
            block_areas: Vec::new(),
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    pub fn set_sidebar_visible(&mut self, visible: bool) {
        self.sidebar_visible = visible;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Section whose sidebar entry was drawn at the given cell
    pub fn nav_index_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.sidebar_area?;
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if !contains(inner, column, row) {
            return None;
        }
        let index = self.list_state.offset() + (row - inner.y) as usize;
        (index < self.item_count).then_some(index)
    }

    /// Index and kind of the content block drawn at the given cell
    pub fn block_at(&self, column: u16, row: u16) -> Option<(usize, BlockKind)> {
        self.block_areas
            .iter()
            .find(|(area, _, _)| contains(*area, column, row))
            .map(|(_, index, kind)| (*index, *kind))
    }

    /// Render the presentation screen
    pub fn render(&mut self, f: &mut Frame, presentation: &Presentation, view: &SlideView, now: Instant) {
        let size = f.size();

        let main_area = if self.sidebar_visible {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .split(size);
            self.render_sidebar(f, columns[0], presentation);
            columns[1]
        } else {
            self.sidebar_area = None;
            size
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title and summary
                Constraint::Length(3), // Progress gauge
                Constraint::Min(5),    // Content
                Constraint::Length(3), // Help text
            ])
            .split(main_area);

        let Some(section) = presentation.current_section() else {
            return;
        };
        let timeline = view.timeline();

        self.render_header(f, chunks[0], section, timeline, now);
        self.render_progress(f, chunks[1], presentation, now);
        self.render_content(f, chunks[2], section, view, now);
        self.render_help(f, chunks[3]);
    }

    /// Render the navigation list
    fn render_sidebar(&mut self, f: &mut Frame, area: Rect, presentation: &Presentation) {
        let session = presentation.session();
        let items: Vec<ListItem> = presentation
            .store()
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let marker = if session.is_visited(index) { " ✓" } else { "" };
                ListItem::new(format!("{:>2}. {}{}", index + 1, section.title, marker))
            })
            .collect();

        self.item_count = items.len();
        self.list_state.select(Some(presentation.current_index()));
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Sections")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol("» ");

        f.render_stateful_widget(list, area, &mut self.list_state);
        self.sidebar_area = Some(area);
    }

    /// Render the section title and its one-line description
    fn render_header(
        &self,
        f: &mut Frame,
        area: Rect,
        section: &Section,
        timeline: &EntranceTimeline,
        now: Instant,
    ) {
        let title_style = entrance_style(timeline.section(now))
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(Span::styled(section.title.clone(), title_style)),
            Line::from(Span::styled(
                section.summary.clone(),
                Style::default().fg(Color::Gray),
            )),
        ];

        let header = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(header, area);
    }

    /// Render the progress gauge
    fn render_progress(&self, f: &mut Frame, area: Rect, presentation: &Presentation, now: Instant) {
        let info = presentation.current_info();
        let displayed = presentation.displayed_percentage(now);
        let label = format!(
            "{}/{} | {}",
            info.index + 1,
            info.total,
            format_percentage(info.progress)
        );

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progress")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio((displayed / 100.0).clamp(0.0, 1.0))
            .label(label);

        f.render_widget(gauge, area);
    }

    /// Render content blocks from the scroll offset down until space runs out
    fn render_content(&mut self, f: &mut Frame, area: Rect, section: &Section, view: &SlideView, now: Instant) {
        self.block_areas.clear();
        let timeline = view.timeline();
        let mut y = area.y;

        for (index, block) in section.blocks.iter().enumerate().skip(view.scroll()) {
            let remaining = area.bottom().saturating_sub(y);
            if remaining < 3 {
                break;
            }
            let collapsed = view.is_collapsed(index);
            let height = block_height(block, area.width, collapsed).min(remaining);
            let block_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height,
            };
            y += height;

            self.block_areas.push((block_area, index, block.kind()));
            let visibility = timeline.block(index, now);
            if visibility == Visibility::Hidden {
                continue;
            }
            let entrance = Entrance {
                timeline,
                visibility,
                now,
            };
            render_block(f, block_area, block, index, collapsed, &entrance);
        }
    }

    /// Render the help text
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = |label: &'static str| {
            Span::styled(
                label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };
        let help_text = vec![Line::from(vec![
            key("←→"),
            Span::raw(" Navigate  "),
            key("Home/End"),
            Span::raw(" First/Last  "),
            key("Tab"),
            Span::raw(" Menu  "),
            key("S"),
            Span::raw(" Summary  "),
            key("?"),
            Span::raw(" Help  "),
            key("Q"),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}

impl Default for PresentationScreen {
    fn default() -> Self {
        Self::new(true)
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Dim elements that are still entering
fn entrance_style(visibility: Visibility) -> Style {
    match visibility {
        Visibility::Hidden => Style::default().fg(Color::Black),
        Visibility::Entering(p) if p < 0.5 => Style::default().fg(Color::DarkGray),
        Visibility::Entering(_) => Style::default().fg(Color::Gray),
        Visibility::Shown => Style::default(),
    }
}

/// Lines `text` occupies when word-wrapped to `width` columns
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 1u16;
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        if line_len == 0 {
            line_len = len;
        } else if line_len + 1 + len <= width {
            line_len += 1 + len;
        } else {
            lines = lines.saturating_add(1);
            line_len = len;
        }
        while line_len > width {
            lines = lines.saturating_add(1);
            line_len -= width;
        }
    }
    lines
}

/// Rows needed to draw a block at the given width
///
/// Oversized content saturates at `u16::MAX` and is clipped by the caller.
fn block_height(block: &ContentBlock, width: u16, collapsed: bool) -> u16 {
    let inner = width.saturating_sub(2);
    match block {
        ContentBlock::Text { body } => wrapped_height(body, width).saturating_add(1),
        // borders and title only
        ContentBlock::Card { .. } if collapsed => 2,
        ContentBlock::Card { body, .. } => wrapped_height(body, inner).saturating_add(2),
        ContentBlock::Metric { description, .. } => {
            let description_lines = if description.is_empty() {
                0
            } else {
                wrapped_height(description, inner)
            };
            description_lines.saturating_add(3)
        }
        ContentBlock::Bullets { items, .. } => items
            .iter()
            .map(|item| wrapped_height(&format!("• {}", item), inner))
            .fold(2u16, u16::saturating_add),
        ContentBlock::Chart { bars, .. } => {
            u16::try_from(bars.len()).unwrap_or(u16::MAX).saturating_add(2)
        }
    }
}

/// Where a block is in its entrance at the frame being drawn
#[derive(Clone, Copy)]
struct Entrance<'a> {
    timeline: &'a EntranceTimeline,
    visibility: Visibility,
    now: Instant,
}

fn render_block(
    f: &mut Frame,
    area: Rect,
    block: &ContentBlock,
    index: usize,
    collapsed: bool,
    entrance: &Entrance,
) {
    let Entrance {
        timeline,
        visibility,
        now,
    } = *entrance;
    let style = entrance_style(visibility);
    let bordered = |title: &str, color: Color| {
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(style.fg(color))
    };

    match block {
        ContentBlock::Text { body } => {
            let paragraph = Paragraph::new(body.as_str())
                .style(style)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        ContentBlock::Card { title, body } => {
            let marker = if collapsed { '+' } else { '−' };
            let block = bordered(&format!("{} {}", marker, title), Color::Cyan);
            let body = if collapsed { "" } else { body.as_str() };
            let paragraph = Paragraph::new(body)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(paragraph, area);
        }
        ContentBlock::Metric {
            label,
            value,
            description,
        } => {
            let mut lines = vec![Line::from(Span::styled(
                timeline.metric_text(index, value, now),
                style.add_modifier(Modifier::BOLD),
            ))];
            if !description.is_empty() {
                lines.push(Line::from(Span::styled(
                    description.clone(),
                    Style::default().fg(Color::Gray),
                )));
            }
            let paragraph = Paragraph::new(lines)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(bordered(label, Color::Green));
            f.render_widget(paragraph, area);
        }
        ContentBlock::Bullets { title, items } => {
            let lines: Vec<Line> = items
                .iter()
                .map(|item| Line::from(format!("• {}", item)))
                .collect();
            let paragraph = Paragraph::new(lines)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(bordered(title, Color::Yellow));
            f.render_widget(paragraph, area);
        }
        ContentBlock::Chart { title, bars } => {
            let label_width = bars
                .iter()
                .map(|bar| bar.label.chars().count())
                .max()
                .unwrap_or(0);
            let max_value = bars.iter().map(|bar| bar.value).max().unwrap_or(0).max(1);
            // label, space, bar, space, value
            let bar_space = (area.width as usize).saturating_sub(label_width + 10);
            // bars grow in as the chart enters
            let scale = visibility.progress();

            let lines: Vec<Line> = bars
                .iter()
                .map(|bar| {
                    let full = bar.value as f64 / max_value as f64 * bar_space as f64;
                    let length = (full * scale).round() as usize;
                    Line::from(vec![
                        Span::raw(format!("{:<width$} ", bar.label, width = label_width)),
                        Span::styled("█".repeat(length), style.fg(Color::Magenta)),
                        Span::raw(format!(" {}", bar.value)),
                    ])
                })
                .collect();
            let paragraph = Paragraph::new(lines)
                .style(style)
                .block(bordered(title, Color::Magenta));
            f.render_widget(paragraph, area);
        }
    }
}
