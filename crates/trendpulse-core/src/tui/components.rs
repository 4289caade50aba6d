//! Reusable TUI components
//!
//! This module contains reusable widget components for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{border_style, ERROR, MUTED};
use crate::dashboard::FetchState;

/// A metric card widget showing a single value with a label
pub struct MetricCard<'a> {
    title: &'a str,
    value: String,
    color: Color,
}

impl<'a> MetricCard<'a> {
    pub fn new(title: &'a str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            color: Color::White,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(border_style());

        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.value,
            Style::default().fg(self.color).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

/// Colored `[label]` badge
pub struct Badge<'a> {
    label: &'a str,
    color: Color,
}

impl<'a> Badge<'a> {
    pub fn new(label: &'a str, color: Color) -> Self {
        Self { label, color }
    }

    pub fn to_span(&self) -> Span<'static> {
        Span::styled(format!("[{}]", self.label), Style::default().fg(self.color))
    }
}

/// Lines shown above a fetching panel's data: a loading notice, an error, or
/// both.
pub fn fetch_status_lines<T>(state: &FetchState<T>, loading_text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if state.loading {
        lines.push(Line::from(Span::styled(
            loading_text.to_string(),
            Style::default().fg(MUTED),
        )));
    }
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(ERROR),
        )));
    }
    lines
}

/// Split `area` into a status strip sized to `lines` and the rest.
/// Renders the strip and returns the remaining area.
pub fn render_fetch_status(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) -> Rect {
    if lines.is_empty() {
        return area;
    }
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height), Constraint::Min(0)])
        .split(area);
    frame.render_widget(Paragraph::new(lines), chunks[0]);
    chunks[1]
}

/// Evenly sized horizontal cells
pub fn even_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let count_u32 = u32::try_from(count).unwrap_or(u32::MAX);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count_u32)))
        .split(area)
        .to_vec()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
