//! Trending topics panel

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{FetchPanel, PanelState};
use crate::dashboard::format::format_grouped;
use crate::dashboard::{Payload, Resource};
use crate::models::Trend;
use crate::tui::components::{fetch_status_lines, render_fetch_status};
use crate::tui::theme::{border_style, growth_color, platform_style, selected_style, sentiment_color, MUTED};

#[derive(Debug, Default)]
pub struct TrendsPanel {
    pub state: PanelState<Vec<Trend>>,
}

impl FetchPanel for TrendsPanel {
    type Data = Vec<Trend>;

    const RESOURCE: Resource = Resource::Trends;

    fn state_mut(&mut self) -> &mut PanelState<Vec<Trend>> {
        &mut self.state
    }

    fn extract(payload: Payload) -> Option<Vec<Trend>> {
        match payload {
            Payload::Trends(trends) => Some(trends),
            _ => None,
        }
    }
}

impl TrendsPanel {
    /// One table row per trend, in feed order
    pub fn rows(&self) -> Vec<Row<'static>> {
        self.state.items().iter().map(trend_row).collect()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Trending Topics "),
                Span::styled("[r] Refresh Trends ", Style::default().fg(MUTED)),
            ]))
            .borders(Borders::ALL)
            .border_style(border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = fetch_status_lines(&self.state.fetch, "Loading trends...");
        let area = render_fetch_status(frame, inner, lines);

        let header = Row::new(vec!["", "Topic", "Platform", "Mentions", "Sentiment", "Growth", "Updated"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(3),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(20),
        ];

        let table = Table::new(self.rows(), widths)
            .header(header)
            .highlight_style(selected_style())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state.selection.clone());
    }
}

fn trend_row(trend: &Trend) -> Row<'static> {
    let style = platform_style(trend.platform);
    let sentiment = match trend.sentiment {
        Some(s) => Cell::from(s.to_string()).style(Style::default().fg(sentiment_color(s))),
        None => Cell::from("-").style(Style::default().fg(MUTED)),
    };
    let growth = match &trend.growth {
        Some(g) => Cell::from(g.to_string()).style(Style::default().fg(growth_color(g))),
        None => Cell::from("-").style(Style::default().fg(MUTED)),
    };

    Row::new(vec![
        Cell::from(style.glyph).style(Style::default().fg(style.color)),
        Cell::from(trend.topic.clone()),
        Cell::from(trend.platform.display_name()).style(Style::default().fg(style.color)),
        Cell::from(format_grouped(trend.volume)),
        sentiment,
        growth,
        Cell::from(trend.last_updated.clone().unwrap_or_default()).style(Style::default().fg(MUTED)),
    ])
}
