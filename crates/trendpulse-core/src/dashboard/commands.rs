//! User actions that have no backend effect yet.
//!
//! Each [`Command`] documents the request it would send once the backend
//! exposes a write path. [`dispatch`] only records that it was invoked.

use std::fmt;

use tracing::info;

use crate::models::RecordId;

/// An action offered by a panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask ContentCrafter for fresh drafts.
    /// Would send `POST /api/generate-content?topic=<topic>` per trending topic.
    GenerateContent,
    /// Draft content for one trend.
    /// Would send `POST /api/generate-content?topic=<topic>`.
    CreateContent { topic: String },
    /// Open a draft for editing. Would send `PATCH /api/drafts/<id>` with the new content.
    EditDraft { id: RecordId },
    /// Render a draft as it would appear on its platform. Local only.
    PreviewDraft { id: RecordId },
    /// Queue a draft. Would send `POST /api/schedule-post` with `{ "id": <id>, "scheduledFor": <time> }`.
    ScheduleDraft { id: RecordId },
    /// Pick a draft and slot to schedule. Would send `POST /api/schedule-post`.
    SchedulePost,
    /// Publish the next pending post immediately.
    /// Would send `POST /api/schedule-post` with `{ "postNow": true }`.
    PostNow,
    /// Edit a pending post. Would send `PATCH /api/posts/<id>`.
    EditPost { id: RecordId },
    /// Remove a pending post. Would send `DELETE /api/posts/<id>`.
    DeletePost { id: RecordId },
    /// Publish one pending post now. Would send `POST /api/posts/<id>/publish`.
    SendPost { id: RecordId },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerateContent => f.write_str("Generate New Content"),
            Self::CreateContent { topic } => write!(f, "Create Content for {topic}"),
            Self::EditDraft { id } => write!(f, "Edit draft {id}"),
            Self::PreviewDraft { id } => write!(f, "Preview draft {id}"),
            Self::ScheduleDraft { id } => write!(f, "Schedule draft {id}"),
            Self::SchedulePost => f.write_str("Schedule New Post"),
            Self::PostNow => f.write_str("Post Now"),
            Self::EditPost { id } => write!(f, "Edit post {id}"),
            Self::DeletePost { id } => write!(f, "Delete post {id}"),
            Self::SendPost { id } => write!(f, "Send post {id}"),
        }
    }
}

/// Handle a command. Returns the notice to show the user.
pub fn dispatch(command: &Command) -> String {
    info!(command = ?command, "action not wired to backend");
    format!("{command}: not available yet")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_is_a_noop_with_notice() {
        let notice = dispatch(&Command::DeletePost { id: RecordId::Number(9) });
        assert_eq!(notice, "Delete post 9: not available yet");
    }

    #[test]
    fn create_content_names_topic() {
        let cmd = Command::CreateContent {
            topic: "#RustLang".into(),
        };
        assert_eq!(cmd.to_string(), "Create Content for #RustLang");
    }
}
