//! Content draft model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Platform, RecordId, Variant};

/// Approval state of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    Draft,
    Approved,
    Scheduled,
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Draft => "draft",
            Self::Approved => "approved",
            Self::Scheduled => "scheduled",
        })
    }
}

/// An unpublished candidate post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: RecordId,
    pub topic: String,
    pub platform: Platform,
    pub content: String,
    pub status: DraftStatus,
    #[serde(alias = "created_at")]
    pub created_at: String,
    #[serde(default, alias = "scheduled_for")]
    pub scheduled_for: Option<String>,
    #[serde(default)]
    pub variant: Option<Variant>,
}

impl Draft {
    /// Only unapproved drafts offer the schedule action
    pub fn can_schedule(&self) -> bool {
        self.status == DraftStatus::Draft
    }
}
