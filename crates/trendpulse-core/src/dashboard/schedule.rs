//! Post schedule tallies

use serde::Serialize;

use crate::models::{PostStatus, ScheduledPost};

/// Number of posts in each lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub posting: usize,
    pub posted: usize,
    pub failed: usize,
}

impl StatusCounts {
    pub fn tally(posts: &[ScheduledPost]) -> Self {
        posts.iter().fold(Self::default(), |mut counts, post| {
            match post.status {
                PostStatus::Pending => counts.pending += 1,
                PostStatus::Posting => counts.posting += 1,
                PostStatus::Posted => counts.posted += 1,
                PostStatus::Failed => counts.failed += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: PostStatus) -> usize {
        match status {
            PostStatus::Pending => self.pending,
            PostStatus::Posting => self.posting,
            PostStatus::Posted => self.posted,
            PostStatus::Failed => self.failed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.posting + self.posted + self.failed
    }
}
