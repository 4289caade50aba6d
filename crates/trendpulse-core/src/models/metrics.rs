//! Engagement metrics models

use serde::{Deserialize, Serialize};

use super::{Platform, RecordId};

/// Measured engagement for one published post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMetric {
    pub id: RecordId,

    /// Post the measurement belongs to
    #[serde(default)]
    pub post_id: Option<RecordId>,

    pub platform: Platform,

    #[serde(default)]
    pub likes: u64,

    #[serde(default)]
    pub comments: u64,

    #[serde(default)]
    pub shares: u64,

    /// Unique accounts reached, when the platform reports it
    #[serde(default)]
    pub reach: Option<u64>,

    /// Link clicks, when the platform reports them
    #[serde(default)]
    pub clicks: Option<u64>,

    /// Engagement rate in percent
    #[serde(default)]
    pub engagement_rate: f64,

    /// When the sample was taken (or the post published)
    #[serde(default, alias = "publishedAt", alias = "measured_at")]
    pub measured_at: Option<String>,
}

/// Aggregate engagement across recent posts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    #[serde(default)]
    pub total_posts: u64,

    /// Average engagement rate in percent
    #[serde(default)]
    pub avg_engagement: f64,

    #[serde(default)]
    pub total_reach: Option<u64>,

    #[serde(default)]
    pub total_likes: Option<u64>,

    #[serde(default)]
    pub total_shares: Option<u64>,

    /// Improvement over the baseline engagement rate, in percent
    #[serde(default)]
    pub engagement_lift: f64,

    /// Engagement rate before the agents took over, in percent
    #[serde(default)]
    pub baseline_engagement: Option<f64>,
}

/// Body of the metrics endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementReport {
    pub summary: MetricsSummary,
    #[serde(default)]
    pub metrics: Vec<PostMetric>,
}
