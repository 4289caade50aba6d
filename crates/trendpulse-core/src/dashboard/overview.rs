//! Platform overview strip derivation

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Platform, PlatformStatus, Trend};

/// Label for a platform with configured credentials
pub const CONNECTED_LABEL: &str = "Active";
/// Label for a platform without configured credentials, or missing from status
pub const DISCONNECTED_LABEL: &str = "Not Connected";

/// One platform's entry in the overview strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformRow {
    pub platform: Platform,
    /// Number of trend records from this platform
    pub trend_count: usize,
    pub connected: bool,
}

impl PlatformRow {
    pub fn label(&self) -> &'static str {
        if self.connected {
            CONNECTED_LABEL
        } else {
            DISCONNECTED_LABEL
        }
    }
}

/// Count trends per platform and merge with connection status, one row per
/// known platform in [`Platform::ALL`] order.
pub fn derive_platform_overview(status: &PlatformStatus, trends: &[Trend]) -> Vec<PlatformRow> {
    let mut counts: HashMap<Platform, usize> = HashMap::new();
    for trend in trends {
        *counts.entry(trend.platform).or_default() += 1;
    }

    Platform::ALL
        .into_iter()
        .map(|platform| PlatformRow {
            platform,
            trend_count: counts.get(&platform).copied().unwrap_or(0),
            connected: status.is_configured(platform),
        })
        .collect()
}
