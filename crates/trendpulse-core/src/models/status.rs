//! Platform connection status model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Platform;

/// Connection details for one platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformConnection {
    /// Whether credentials for the platform are set up
    #[serde(default)]
    pub configured: bool,
}

/// Body of the social status endpoint, keyed by platform key.
///
/// Keys outside the known platform set are kept but never displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformStatus(pub BTreeMap<String, PlatformConnection>);

impl PlatformStatus {
    /// Whether the platform has a configured connection. Absent means no.
    pub fn is_configured(&self, platform: Platform) -> bool {
        self.0
            .get(platform.key())
            .is_some_and(|conn| conn.configured)
    }

    pub fn insert(&mut self, platform: Platform, configured: bool) {
        self.0
            .insert(platform.key().to_string(), PlatformConnection { configured });
    }
}
