//! Agent cards

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Agent;
use crate::tui::components::{even_columns, Badge};
use crate::tui::theme::{agent_status_color, border_style, MUTED, PRIMARY};

/// Lay the cards out side by side
pub fn render_agents(frame: &mut Frame, area: Rect, agents: &[Agent]) {
    for (agent, cell) in agents.iter().zip(even_columns(area, agents.len())) {
        render_agent_card(frame, cell, agent);
    }
}

/// One card: name and status, description, last activity, then a metric
/// cell per entry in the agent's own order.
pub fn render_agent_card(frame: &mut Frame, area: Rect, agent: &Agent) {
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", agent.name),
                Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Badge::new(agent.status.as_str(), agent_status_color(agent.status)).to_span(),
        ]))
        .borders(Borders::ALL)
        .border_style(border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(agent.description.as_str())
            .style(Style::default().fg(MUTED))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(format!("Last activity: {}", agent.last_activity))
            .style(Style::default().fg(MUTED)),
        chunks[1],
    );

    let cells = even_columns(chunks[2], agent.metrics.len());
    for ((key, value), cell) in agent.metrics.iter().zip(cells) {
        let text = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(key.to_lowercase(), Style::default().fg(MUTED))),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), cell);
    }
}
