//! Backend API access
//!
//! The dashboard only reads from the backend. [`DashboardSource`] is the seam
//! every panel fetches through; [`ApiClient`] is the HTTP implementation.

mod client;

pub use client::ApiClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Draft, EngagementReport, PlatformStatus, ScheduledPost, Trend};

/// Trend feed, shared by the trends tab and the platform overview
pub const TRENDS_PATH: &str = "/api/social/trends";
/// Per-platform connection status
pub const STATUS_PATH: &str = "/api/social/status";
/// Content drafts awaiting approval
pub const DRAFTS_PATH: &str = "/api/drafts";
/// Scheduled and published posts
pub const POSTS_PATH: &str = "/api/posts";
/// Engagement summary and per-post metrics
pub const METRICS_PATH: &str = "/api/metrics";

/// Read-only view of the backend the dashboard renders
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Current trend records
    async fn trends(&self) -> Result<Vec<Trend>>;

    /// Connection status keyed by platform
    async fn social_status(&self) -> Result<PlatformStatus>;

    /// Draft posts
    async fn drafts(&self) -> Result<Vec<Draft>>;

    /// Scheduled posts
    async fn posts(&self) -> Result<Vec<ScheduledPost>>;

    /// Engagement summary plus per-post metrics
    async fn metrics(&self) -> Result<EngagementReport>;
}
