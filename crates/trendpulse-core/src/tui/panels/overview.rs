//! Platform overview strip

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{FetchPanel, PanelState};
use crate::dashboard::{Payload, PlatformRow, Resource};
use crate::tui::components::{even_columns, fetch_status_lines, render_fetch_status};
use crate::tui::theme::{border_style, platform_style, MUTED, SUCCESS};

#[derive(Debug, Default)]
pub struct OverviewPanel {
    pub state: PanelState<Vec<PlatformRow>>,
}

impl FetchPanel for OverviewPanel {
    type Data = Vec<PlatformRow>;

    const RESOURCE: Resource = Resource::PlatformOverview;

    fn state_mut(&mut self) -> &mut PanelState<Vec<PlatformRow>> {
        &mut self.state
    }

    fn extract(payload: Payload) -> Option<Vec<PlatformRow>> {
        match payload {
            Payload::PlatformOverview(rows) => Some(rows),
            _ => None,
        }
    }
}

impl OverviewPanel {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = fetch_status_lines(&self.state.fetch, "Loading platform status...");
        let area = render_fetch_status(frame, area, lines);

        let rows = self.state.items();
        for (row, cell) in rows.iter().zip(even_columns(area, rows.len())) {
            render_platform_cell(frame, cell, row);
        }
    }
}

fn render_platform_cell(frame: &mut Frame, area: Rect, row: &PlatformRow) {
    let style = platform_style(row.platform);
    let status_color = if row.connected { SUCCESS } else { MUTED };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", style.glyph, row.platform.display_name()),
            Style::default().fg(style.color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(border_style());

    let trends = if row.trend_count == 1 { "trend" } else { "trends" };
    let text = vec![
        Line::from(format!("{} {trends}", row.trend_count)),
        Line::from(Span::styled(row.label(), Style::default().fg(status_color))),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::derive_platform_overview;
    use crate::error::Error;
    use crate::models::{Platform, PlatformStatus, Trend};
    use crate::tui::panels::testing::{contains, render_lines};

    #[test]
    fn renders_every_platform_with_label() {
        let mut status = PlatformStatus::default();
        status.insert(Platform::LinkedIn, true);
        let trends = vec![
            Trend::new("#A", Platform::LinkedIn, 1),
            Trend::new("#B", Platform::LinkedIn, 1),
        ];

        let mut panel = OverviewPanel::default();
        let id = panel.state.mount().id();
        let rows = derive_platform_overview(&status, &trends);
        assert!(panel.apply(id, Ok(Payload::PlatformOverview(rows))));

        let lines = render_lines(150, 4, |f, area| panel.render(f, area));
        for platform in Platform::ALL {
            assert!(contains(&lines, platform.display_name()), "{platform:?}");
        }
        assert!(contains(&lines, "2 trends"));
        assert!(contains(&lines, "Active"));
        assert!(contains(&lines, "Not Connected"));
    }

    #[test]
    fn failure_renders_single_error() {
        let mut panel = OverviewPanel::default();
        let id = panel.state.mount().id();
        let err = Error::Status {
            endpoint: "/api/social/status".into(),
            status: 500,
        };
        assert!(panel.apply(id, Err(err)));

        let lines = render_lines(150, 4, |f, area| panel.render(f, area));
        assert!(contains(&lines, "Failed to fetch platform status"));
        assert!(!contains(&lines, "LinkedIn"));
    }
}
