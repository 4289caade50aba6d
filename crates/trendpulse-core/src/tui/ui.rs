//! UI rendering for the TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{ActiveTab, App, SystemStatus};
use super::components::centered_rect;
use super::panels::agents::render_agents;
use super::theme::{border_style, MUTED, PRIMARY, SECONDARY, SUCCESS, WARNING};

/// Draw the entire UI
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Platform overview
            Constraint::Length(8), // Agent cards
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Active panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.size());

    draw_header(frame, app, chunks[0]);
    app.overview.render(frame, chunks[1]);
    render_agents(frame, chunks[2], &app.agents);
    draw_tabs(frame, app, chunks[3]);
    draw_content(frame, app, chunks[4]);
    draw_status_bar(frame, app, chunks[5]);

    // Draw help overlay if active
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(50)])
        .split(inner);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("⚡ TrendPulse AI", Style::default().fg(PRIMARY).bold()),
        Span::styled(
            "  Multi-Agent Social Media Intelligence",
            Style::default().fg(MUTED),
        ),
    ]));
    frame.render_widget(logo, chunks[0]);

    let status_color = match app.system {
        SystemStatus::Active => SUCCESS,
        SystemStatus::Paused => WARNING,
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("● System {}", app.system.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            format!("  [p] {}  ", app.system.action_label()),
            Style::default().fg(MUTED),
        ),
        Span::styled(
            app.now.format("%H:%M:%S").to_string(),
            Style::default().fg(PRIMARY).bold(),
        ),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(status, chunks[1]);
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if *tab == app.active_tab {
                Style::default().fg(PRIMARY).bold()
            } else {
                Style::default().fg(MUTED)
            };
            Line::from(format!(" {} {} ", i + 1, tab.title())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        )
        .select(app.active_tab.index())
        .highlight_style(Style::default().fg(PRIMARY))
        .divider(symbols::line::VERTICAL);

    frame.render_widget(tabs, area);
}

fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.active_tab {
        ActiveTab::Trends => app.trends.render(frame, area),
        ActiveTab::Content => app.drafts.render(frame, area),
        ActiveTab::Schedule => app.schedule.render(frame, area),
        ActiveTab::Analytics => app.engagement.render(frame, area),
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left_text = app
        .get_status()
        .unwrap_or("? Help | Tab Switch | j/k Select | q Quit");
    let left = Paragraph::new(left_text).style(Style::default().fg(MUTED));
    frame.render_widget(left, chunks[0]);

    let hints = match app.active_tab {
        ActiveTab::Trends => "r Refresh | c Create Content",
        ActiveTab::Content => "n Generate | e Edit | v Preview | s Schedule",
        ActiveTab::Schedule => "n New | x Post Now | e Edit | d Delete | s Send",
        ActiveTab::Analytics => "",
    };
    let right = Paragraph::new(hints)
        .style(Style::default().fg(MUTED))
        .alignment(Alignment::Right);
    frame.render_widget(right, chunks[1]);
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.size());

    // Clear the background
    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().fg(PRIMARY).bold()),
        Line::from(""),
        Line::from("Navigation:").style(Style::default().fg(SECONDARY)),
        Line::from("  Tab / Shift+Tab    Switch between tabs"),
        Line::from("  1-4                Jump to specific tab"),
        Line::from("  j/k or ↑/↓         Navigate lists"),
        Line::from(""),
        Line::from("Trending Topics:").style(Style::default().fg(SECONDARY)),
        Line::from("  r                  Refresh trends"),
        Line::from("  c                  Create content for selected trend"),
        Line::from(""),
        Line::from("Content Drafts:").style(Style::default().fg(SECONDARY)),
        Line::from("  n                  Generate new content"),
        Line::from("  e / v / s          Edit, preview or schedule draft"),
        Line::from(""),
        Line::from("Post Schedule:").style(Style::default().fg(SECONDARY)),
        Line::from("  n / x              Schedule new post, post now"),
        Line::from("  e / d / s          Edit, delete or send pending post"),
        Line::from(""),
        Line::from("General:").style(Style::default().fg(SECONDARY)),
        Line::from("  p                  Pause or start the system"),
        Line::from("  ?                  Toggle this help"),
        Line::from("  q / Ctrl+C         Quit"),
        Line::from(""),
        Line::from("Press ? or Esc to close").style(Style::default().fg(MUTED).italic()),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PRIMARY)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help, area);
}
