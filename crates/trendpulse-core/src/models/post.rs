//! Scheduled post model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Platform, RecordId, Variant};

/// Posting lifecycle of a scheduled post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Waiting for its slot. The scheduler reports these as "scheduled".
    #[serde(alias = "scheduled")]
    Pending,
    Posting,
    Posted,
    Failed,
}

impl PostStatus {
    pub const ALL: [PostStatus; 4] = [
        PostStatus::Pending,
        PostStatus::Posting,
        PostStatus::Posted,
        PostStatus::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Posting => "posting",
            Self::Posted => "posted",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A draft committed to a publish time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPost {
    pub id: RecordId,
    pub content: String,
    pub platform: Platform,
    #[serde(default, alias = "scheduled_for")]
    pub scheduled_for: Option<String>,
    pub status: PostStatus,
    pub topic: String,
    #[serde(default)]
    pub variant: Option<Variant>,
    /// Identifier assigned by the Buffer publishing service
    #[serde(default, alias = "buffer_id", alias = "bufferId")]
    pub buffer_post_id: Option<String>,
}

impl ScheduledPost {
    pub fn new(
        id: impl Into<RecordId>,
        topic: impl Into<String>,
        platform: Platform,
        status: PostStatus,
    ) -> Self {
        Self {
            id: id.into(),
            content: String::new(),
            platform,
            scheduled_for: None,
            status,
            topic: topic.into(),
            variant: None,
            buffer_post_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_status_maps_to_pending() {
        let post: ScheduledPost = serde_json::from_value(serde_json::json!({
            "id": 11,
            "topic": "#SustainableTech",
            "platform": "instagram",
            "content": "Sustainable technology isn't just a trend",
            "status": "scheduled",
            "scheduledFor": "2025-01-10T18:00:00",
            "postedAt": null
        }))
        .unwrap();

        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.buffer_post_id, None);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_value::<ScheduledPost>(serde_json::json!({
            "id": 1,
            "topic": "t",
            "platform": "reddit",
            "content": "c",
            "status": "archived"
        }));
        assert!(result.is_err());
    }
}
