//! Social platform data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A social network the dashboard visualizes data for.
///
/// The set is closed: a payload naming any other platform fails to decode
/// rather than rendering without a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    Instagram,
    Twitter,
    TikTok,
    YouTube,
    Reddit,
}

impl Platform {
    /// Every platform, in overview display order
    pub const ALL: [Platform; 6] = [
        Platform::LinkedIn,
        Platform::Instagram,
        Platform::Twitter,
        Platform::TikTok,
        Platform::YouTube,
        Platform::Reddit,
    ];

    /// Wire key used by the backend
    pub fn key(self) -> &'static str {
        match self {
            Self::LinkedIn => "linkedin",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::TikTok => "tiktok",
            Self::YouTube => "youtube",
            Self::Reddit => "reddit",
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::TikTok => "TikTok",
            Self::YouTube => "YouTube",
            Self::Reddit => "Reddit",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown platform: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_backend_keys() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.key()));
            let back: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert!(serde_json::from_str::<Platform>("\"myspace\"").is_err());
        assert!("myspace".parse::<Platform>().is_err());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("LinkedIn".parse::<Platform>().unwrap(), Platform::LinkedIn);
        assert_eq!("youtube".parse::<Platform>().unwrap(), Platform::YouTube);
    }
}
