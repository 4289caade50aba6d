//! The agent roster shown on the dashboard.
//!
//! These descriptors are static; the agents themselves run in the backend.

use crate::models::Agent;

/// The five pipeline agents, in display order
pub fn default_roster() -> Vec<Agent> {
    vec![
        Agent::new(
            "trend-watcher",
            "TrendWatcher",
            "Monitors trending topics across LinkedIn, Instagram & Twitter",
        )
        .with_last_activity("2 minutes ago")
        .with_metric("detected", 12)
        .with_metric("analyzed", 8)
        .with_metric("priority", 3),
        Agent::new(
            "content-crafter",
            "ContentCrafter",
            "Generates platform-optimized posts using AI",
        )
        .with_last_activity("1 minute ago")
        .with_metric("generated", 24)
        .with_metric("variants", 6)
        .with_metric("approved", 18),
        Agent::new(
            "post-scheduler",
            "PostScheduler",
            "Manages posting schedule via Buffer API",
        )
        .with_last_activity("5 minutes ago")
        .with_metric("scheduled", 15)
        .with_metric("posted", 8)
        .with_metric("pending", 7),
        Agent::new(
            "engagement-monitor",
            "EngagementMonitor",
            "Tracks post performance and engagement metrics",
        )
        .with_last_activity("30 seconds ago")
        .with_metric("monitored", 42)
        .with_metric("alerts", 2)
        .with_metric("growth", "+32%"),
        Agent::new(
            "strategy-optimizer",
            "StrategyOptimizer",
            "Adapts strategy based on performance data",
        )
        .with_last_activity("3 minutes ago")
        .with_metric("optimizations", 5)
        .with_metric("improvements", 3)
        .with_metric("lift", "+28%"),
    ]
}
