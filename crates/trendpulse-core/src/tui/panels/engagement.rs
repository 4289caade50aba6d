//! Engagement metrics panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Row, Table},
    Frame,
};

use super::{FetchPanel, PanelState};
use crate::dashboard::engagement::{lift_progress, target_reached, LIFT_TARGET_PERCENT};
use crate::dashboard::format::{format_compact, format_grouped, format_percent};
use crate::dashboard::{Payload, Resource};
use crate::models::{EngagementReport, MetricsSummary, PostMetric};
use crate::tui::components::{even_columns, fetch_status_lines, render_fetch_status, MetricCard};
use crate::tui::theme::{border_style, platform_style, selected_style, MUTED, PRIMARY, SECONDARY, SUCCESS, WARNING};

#[derive(Debug, Default)]
pub struct EngagementPanel {
    pub state: PanelState<EngagementReport>,
}

impl FetchPanel for EngagementPanel {
    type Data = EngagementReport;

    const RESOURCE: Resource = Resource::Metrics;

    fn state_mut(&mut self) -> &mut PanelState<EngagementReport> {
        &mut self.state
    }

    fn extract(payload: Payload) -> Option<EngagementReport> {
        match payload {
            Payload::Metrics(report) => Some(report),
            _ => None,
        }
    }
}

impl EngagementPanel {
    pub fn metrics(&self) -> &[PostMetric] {
        self.state
            .fetch
            .data
            .as_ref()
            .map(|r| r.metrics.as_slice())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> Vec<Row<'static>> {
        self.metrics().iter().map(metric_row).collect()
    }

    pub fn select_next(&mut self) {
        let len = self.metrics().len();
        self.state.select_next(len);
    }

    pub fn select_prev(&mut self) {
        let len = self.metrics().len();
        self.state.select_prev(len);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let summary = self.state.fetch.data.as_ref().map(|r| &r.summary);

        let mut title = vec![Span::raw(" Analytics ")];
        if let Some(summary) = summary {
            if target_reached(summary.engagement_lift) {
                title.push(Span::styled(
                    format!("+{} Lift Achieved! ", format_percent(summary.engagement_lift)),
                    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD),
                ));
            }
        }

        let block = Block::default()
            .title(Line::from(title))
            .borders(Borders::ALL)
            .border_style(border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = fetch_status_lines(&self.state.fetch, "Loading engagement metrics...");
        let area = render_fetch_status(frame, inner, lines);

        let Some(summary) = summary else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        render_kpis(frame, chunks[0], summary);
        render_lift_gauge(frame, chunks[1], summary.engagement_lift);

        let header = Row::new(vec!["Platform", "Likes", "Comments", "Shares", "Reach", "Engagement", "Measured"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Min(20),
        ];

        let table = Table::new(self.rows(), widths)
            .header(header)
            .block(
                Block::default()
                    .title(" Post Performance ")
                    .borders(Borders::TOP)
                    .border_style(border_style()),
            )
            .highlight_style(selected_style());

        frame.render_stateful_widget(table, chunks[2], &mut self.state.selection.clone());
    }
}

fn render_kpis(frame: &mut Frame, area: Rect, summary: &MetricsSummary) {
    let cells = even_columns(area, 4);

    MetricCard::new("Total Posts", format_grouped(summary.total_posts))
        .color(PRIMARY)
        .render(frame, cells[0]);

    MetricCard::new("Avg Engagement", format_percent(summary.avg_engagement))
        .color(SUCCESS)
        .render(frame, cells[1]);

    let reach = summary
        .total_reach
        .map_or_else(|| "-".to_string(), format_compact);
    MetricCard::new("Total Reach", reach)
        .color(SECONDARY)
        .render(frame, cells[2]);

    let baseline = summary
        .baseline_engagement
        .map_or_else(|| "-".to_string(), format_percent);
    MetricCard::new(
        "Baseline → Now",
        format!("{baseline} → {}", format_percent(summary.avg_engagement)),
    )
    .color(WARNING)
    .render(frame, cells[3]);
}

/// Gauge label for a lift, e.g. `32% / 30%`
pub fn lift_label(engagement_lift: f64) -> String {
    format!(
        "{} / {}",
        format_percent(engagement_lift),
        format_percent(LIFT_TARGET_PERCENT)
    )
}

fn render_lift_gauge(frame: &mut Frame, area: Rect, engagement_lift: f64) {
    let color = if target_reached(engagement_lift) {
        SUCCESS
    } else {
        WARNING
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(
                    " KPI Progress: {} Engagement Lift Target ",
                    format_percent(LIFT_TARGET_PERCENT)
                ))
                .borders(Borders::ALL)
                .border_style(border_style()),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(lift_progress(engagement_lift) / 100.0)
        .label(lift_label(engagement_lift));

    frame.render_widget(gauge, area);
}

fn metric_row(metric: &PostMetric) -> Row<'static> {
    let style = platform_style(metric.platform);
    Row::new(vec![
        Cell::from(format!("{} {}", style.glyph, metric.platform.display_name()))
            .style(Style::default().fg(style.color)),
        Cell::from(format_compact(metric.likes)),
        Cell::from(format_compact(metric.comments)),
        Cell::from(format_compact(metric.shares)),
        Cell::from(metric.reach.map_or_else(|| "-".to_string(), format_compact)),
        Cell::from(format_percent(metric.engagement_rate)).style(Style::default().fg(SUCCESS)),
        Cell::from(metric.measured_at.clone().unwrap_or_default()).style(Style::default().fg(MUTED)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Platform, RecordId};
    use crate::tui::panels::testing::{contains, render_lines};
    use rstest::rstest;

    fn metric(id: i64, platform: Platform, likes: u64) -> PostMetric {
        PostMetric {
            id: RecordId::Number(id),
            post_id: None,
            platform,
            likes,
            comments: 12,
            shares: 4,
            reach: Some(45_600),
            clicks: None,
            engagement_rate: 7.4,
            measured_at: None,
        }
    }

    fn loaded(lift: f64, metrics: Vec<PostMetric>) -> EngagementPanel {
        let report = EngagementReport {
            summary: MetricsSummary {
                total_posts: 12,
                avg_engagement: 7.4,
                total_reach: Some(45_600),
                engagement_lift: lift,
                baseline_engagement: Some(5.6),
                ..MetricsSummary::default()
            },
            metrics,
        };
        let mut panel = EngagementPanel::default();
        let id = panel.state.mount().id();
        assert!(panel.apply(id, Ok(Payload::Metrics(report))));
        panel
    }

    #[rstest]
    #[case(32.0, "32% / 30%")]
    #[case(7.5, "7.5% / 30%")]
    #[case(0.0, "0% / 30%")]
    fn gauge_label_shows_raw_lift(#[case] lift: f64, #[case] expected: &str) {
        assert_eq!(lift_label(lift), expected);
    }

    #[test]
    fn one_row_per_post_metric() {
        let panel = loaded(
            12.0,
            vec![
                metric(1, Platform::LinkedIn, 1_200),
                metric(2, Platform::TikTok, 8_400),
            ],
        );
        assert_eq!(panel.rows().len(), 2);
    }

    #[test]
    fn renders_kpis_and_achievement() {
        let panel = loaded(32.0, vec![metric(1, Platform::YouTube, 1_200)]);
        let lines = render_lines(110, 20, |f, area| panel.render(f, area));
        assert!(contains(&lines, "Lift Achieved!"));
        assert!(contains(&lines, "45.6K"));
        assert!(contains(&lines, "5.6% → 7.4%"));
        assert!(contains(&lines, "32% / 30%"));
        assert!(contains(&lines, "1.2K"));
    }

    #[test]
    fn below_target_has_no_achievement_badge() {
        let panel = loaded(12.0, Vec::new());
        let lines = render_lines(110, 20, |f, area| panel.render(f, area));
        assert!(!contains(&lines, "Lift Achieved!"));
        assert!(contains(&lines, "12% / 30%"));
    }

    #[test]
    fn nothing_but_loading_before_first_result() {
        let mut panel = EngagementPanel::default();
        let _ = panel.state.mount();
        let lines = render_lines(110, 12, |f, area| panel.render(f, area));
        assert!(contains(&lines, "Loading engagement metrics..."));
        assert!(!contains(&lines, "Total Posts"));
    }

    #[test]
    fn first_load_error_shows_message_without_kpis() {
        let mut panel = EngagementPanel::default();
        let id = panel.state.mount().id();
        let err = Error::Status {
            endpoint: "/api/metrics".into(),
            status: 500,
        };
        assert!(panel.apply(id, Err(err)));

        assert!(panel.state.fetch.data.is_none());
        assert!(panel.rows().is_empty());
        let lines = render_lines(110, 12, |f, area| panel.render(f, area));
        assert!(contains(&lines, "Failed to fetch engagement metrics: /api/metrics returned HTTP 500"));
        assert!(!contains(&lines, "Loading engagement metrics..."));
        assert!(!contains(&lines, "Total Posts"));
    }
}
