//! Content drafts panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::{FetchPanel, PanelState};
use crate::dashboard::format::{capitalize, truncate};
use crate::dashboard::{Command, Payload, Resource};
use crate::models::Draft;
use crate::tui::components::{fetch_status_lines, render_fetch_status, Badge};
use crate::tui::theme::{
    border_style, draft_status_color, platform_style, selected_style, MUTED, PRIMARY, SECONDARY,
};

const TABLE_PREVIEW_CHARS: usize = 60;

#[derive(Debug, Default)]
pub struct DraftsPanel {
    pub state: PanelState<Vec<Draft>>,
}

impl FetchPanel for DraftsPanel {
    type Data = Vec<Draft>;

    const RESOURCE: Resource = Resource::Drafts;

    fn state_mut(&mut self) -> &mut PanelState<Vec<Draft>> {
        &mut self.state
    }

    fn extract(payload: Payload) -> Option<Vec<Draft>> {
        match payload {
            Payload::Drafts(drafts) => Some(drafts),
            _ => None,
        }
    }
}

impl DraftsPanel {
    pub fn rows(&self) -> Vec<Row<'static>> {
        self.state.items().iter().map(draft_row).collect()
    }

    /// Action bound to `key` for the highlighted draft, if any.
    ///
    /// `n` is always available; the per-draft actions need a selection and
    /// scheduling needs a draft in the `draft` state.
    pub fn command_for(&self, key: char) -> Option<Command> {
        if key == 'n' {
            return Some(Command::GenerateContent);
        }
        let draft = self.state.selected()?;
        let id = draft.id.clone();
        match key {
            'e' => Some(Command::EditDraft { id }),
            'v' => Some(Command::PreviewDraft { id }),
            's' if draft.can_schedule() => Some(Command::ScheduleDraft { id }),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" Content Drafts "),
                Span::styled("[n] Generate New Content ", Style::default().fg(MUTED)),
            ]))
            .borders(Borders::ALL)
            .border_style(border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = fetch_status_lines(&self.state.fetch, "Loading drafts...");
        let area = render_fetch_status(frame, inner, lines);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(7)])
            .split(area);

        let header = Row::new(vec!["Topic", "Platform", "Status", "Var", "Created", "Scheduled", "Content"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let widths = [
            Constraint::Length(20),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(4),
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Min(20),
        ];

        let table = Table::new(self.rows(), widths)
            .header(header)
            .highlight_style(selected_style())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, chunks[0], &mut self.state.selection.clone());

        self.render_detail(frame, chunks[1]);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Draft ")
            .borders(Borders::TOP)
            .border_style(border_style());

        let Some(draft) = self.state.selected() else {
            let hint = Paragraph::new(Span::styled(
                "Select a draft with j/k",
                Style::default().fg(MUTED),
            ))
            .block(block);
            frame.render_widget(hint, area);
            return;
        };

        let mut actions = vec![
            Span::styled("[e] Edit  ", Style::default().fg(PRIMARY)),
            Span::styled("[v] Preview  ", Style::default().fg(PRIMARY)),
        ];
        if draft.can_schedule() {
            actions.push(Span::styled("[s] Schedule", Style::default().fg(SECONDARY)));
        }

        let text = vec![
            Line::from(vec![
                Span::styled(draft.topic.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Badge::new(&capitalize(&draft.status.to_string()), draft_status_color(draft.status)).to_span(),
            ]),
            Line::from(draft.content.clone()),
            Line::from(actions),
        ];

        let detail = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
        frame.render_widget(detail, area);
    }
}

fn draft_row(draft: &Draft) -> Row<'static> {
    let style = platform_style(draft.platform);
    Row::new(vec![
        Cell::from(draft.topic.clone()),
        Cell::from(format!("{} {}", style.glyph, draft.platform.display_name()))
            .style(Style::default().fg(style.color)),
        Cell::from(draft.status.to_string()).style(Style::default().fg(draft_status_color(draft.status))),
        Cell::from(draft.variant.map(|v| v.to_string()).unwrap_or_default()),
        Cell::from(draft.created_at.clone()).style(Style::default().fg(MUTED)),
        Cell::from(draft.scheduled_for.clone().unwrap_or_default()).style(Style::default().fg(MUTED)),
        Cell::from(truncate(&draft.content, TABLE_PREVIEW_CHARS)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{DraftStatus, Platform, RecordId, Variant};
    use crate::tui::panels::testing::{contains, render_lines};

    fn draft(id: i64, topic: &str, status: DraftStatus) -> Draft {
        Draft {
            id: RecordId::Number(id),
            topic: topic.into(),
            platform: Platform::Instagram,
            content: format!("Post about {topic}"),
            status,
            created_at: "5 minutes ago".into(),
            scheduled_for: None,
            variant: Some(Variant::A),
        }
    }

    fn loaded(drafts: Vec<Draft>) -> DraftsPanel {
        let mut panel = DraftsPanel::default();
        let id = panel.state.mount().id();
        assert!(panel.apply(id, Ok(Payload::Drafts(drafts))));
        panel
    }

    #[test]
    fn one_row_per_draft() {
        let panel = loaded(vec![
            draft(1, "#AIInHealthcare", DraftStatus::Draft),
            draft(2, "#SustainableTech", DraftStatus::Approved),
        ]);
        assert_eq!(panel.rows().len(), 2);
    }

    #[test]
    fn schedule_only_offered_for_drafts() {
        let mut panel = loaded(vec![
            draft(1, "#AIInHealthcare", DraftStatus::Draft),
            draft(2, "#SustainableTech", DraftStatus::Approved),
        ]);
        assert_eq!(panel.command_for('s'), None);

        panel.state.select_next(2);
        assert_eq!(
            panel.command_for('s'),
            Some(Command::ScheduleDraft { id: RecordId::Number(1) })
        );

        panel.state.select_next(2);
        assert_eq!(panel.command_for('s'), None);
        assert_eq!(
            panel.command_for('e'),
            Some(Command::EditDraft { id: RecordId::Number(2) })
        );
        assert_eq!(panel.command_for('n'), Some(Command::GenerateContent));
    }

    #[test]
    fn renders_status_and_error_together() {
        let mut panel = loaded(vec![draft(1, "#RemoteWork", DraftStatus::Scheduled)]);
        let id = panel.state.refresh().id();
        assert!(panel.apply(
            id,
            Err(Error::Timeout {
                endpoint: "/api/drafts".into()
            })
        ));

        let lines = render_lines(120, 20, |f, area| panel.render(f, area));
        assert!(contains(&lines, "Failed to fetch content drafts"));
        assert!(contains(&lines, "#RemoteWork"));
        assert!(contains(&lines, "scheduled"));
    }

    #[test]
    fn detail_shows_selected_content() {
        let mut panel = loaded(vec![draft(7, "#RustLang", DraftStatus::Draft)]);
        panel.state.select_next(1);
        let lines = render_lines(120, 20, |f, area| panel.render(f, area));
        assert!(contains(&lines, "[Draft]"));
        assert!(contains(&lines, "[s] Schedule"));
    }
}
