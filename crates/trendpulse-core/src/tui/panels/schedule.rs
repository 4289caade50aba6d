//! Post schedule panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{FetchPanel, PanelState};
use crate::dashboard::format::{capitalize, truncate, CONTENT_PREVIEW_CHARS};
use crate::dashboard::{Command, Payload, Resource, StatusCounts};
use crate::models::{PostStatus, ScheduledPost};
use crate::tui::components::{even_columns, fetch_status_lines, render_fetch_status, MetricCard};
use crate::tui::theme::{border_style, platform_style, post_status_style, selected_style, MUTED};

#[derive(Debug, Default)]
pub struct SchedulePanel {
    pub state: PanelState<Vec<ScheduledPost>>,
}

impl FetchPanel for SchedulePanel {
    type Data = Vec<ScheduledPost>;

    const RESOURCE: Resource = Resource::Posts;

    fn state_mut(&mut self) -> &mut PanelState<Vec<ScheduledPost>> {
        &mut self.state
    }

    fn extract(payload: Payload) -> Option<Vec<ScheduledPost>> {
        match payload {
            Payload::Posts(posts) => Some(posts),
            _ => None,
        }
    }
}

impl SchedulePanel {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(self.state.items())
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.state.items().iter().map(post_row).collect()
    }

    /// Action bound to `key`. Edit, delete and send apply to a highlighted
    /// pending post only.
    pub fn command_for(&self, key: char) -> Option<Command> {
        match key {
            'n' => return Some(Command::SchedulePost),
            'x' => return Some(Command::PostNow),
            _ => {}
        }
        let post = self
            .state
            .selected()
            .filter(|p| p.status == PostStatus::Pending)?;
        let id = post.id.clone();
        match key {
            'e' => Some(Command::EditPost { id }),
            'd' => Some(Command::DeletePost { id }),
            's' => Some(Command::SendPost { id }),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Post Schedule "),
                Span::styled("[n] Schedule New Post  [x] Post Now ", Style::default().fg(MUTED)),
            ]))
            .borders(Borders::ALL)
            .border_style(border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = fetch_status_lines(&self.state.fetch, "Loading scheduled posts...");
        let area = render_fetch_status(frame, inner, lines);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let counts = self.counts();
        for (status, cell) in PostStatus::ALL.into_iter().zip(even_columns(chunks[0], PostStatus::ALL.len())) {
            let (color, glyph) = post_status_style(status);
            let title = format!("{glyph} {}", capitalize(status.as_str()));
            MetricCard::new(&title, counts.get(status).to_string())
                .color(color)
                .render(frame, cell);
        }

        let header = Row::new(vec!["Status", "Topic", "Var", "Platform", "Scheduled", "Buffer ID", "Content"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Min(20),
        ];

        let table = Table::new(self.rows(), widths)
            .header(header)
            .highlight_style(selected_style())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, chunks[1], &mut self.state.selection.clone());
    }
}

fn post_row(post: &ScheduledPost) -> Row<'static> {
    let (color, glyph) = post_status_style(post.status);
    let platform = platform_style(post.platform);
    Row::new(vec![
        Cell::from(format!("{glyph} {}", post.status)).style(Style::default().fg(color)),
        Cell::from(post.topic.clone()),
        Cell::from(post.variant.map(|v| v.to_string()).unwrap_or_default()),
        Cell::from(post.platform.display_name()).style(Style::default().fg(platform.color)),
        Cell::from(post.scheduled_for.clone().unwrap_or_default()).style(Style::default().fg(MUTED)),
        Cell::from(post.buffer_post_id.clone().unwrap_or_default()).style(Style::default().fg(MUTED)),
        Cell::from(truncate(&post.content, CONTENT_PREVIEW_CHARS)),
    ])
}
