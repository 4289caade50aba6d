//! Trend data model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Platform, RecordId};

/// Sentiment of the conversation around a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        })
    }
}

/// Growth of a trend, either a raw percentage or a preformatted label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Growth {
    Percent(f64),
    Label(String),
}

impl Growth {
    /// Whether mentions are shrinking
    pub fn is_decline(&self) -> bool {
        match self {
            Self::Percent(p) => *p < 0.0,
            Self::Label(s) => s.trim_start().starts_with('-'),
        }
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) if *p >= 0.0 => write!(f, "+{p:.0}%"),
            Self::Percent(p) => write!(f, "{p:.0}%"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

/// A topic or hashtag with its mention volume on one platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Backend identifier, absent in some feeds
    #[serde(default)]
    pub id: Option<RecordId>,

    /// Topic or hashtag
    pub topic: String,

    /// Platform of origin
    pub platform: Platform,

    /// Mention count
    pub volume: u64,

    #[serde(default)]
    pub sentiment: Option<Sentiment>,

    #[serde(default)]
    pub growth: Option<Growth>,

    /// When the trend was last observed
    #[serde(default, alias = "createdAt", alias = "created_at")]
    pub last_updated: Option<String>,
}

impl Trend {
    pub fn new(topic: impl Into<String>, platform: Platform, volume: u64) -> Self {
        Self {
            id: None,
            topic: topic.into(),
            platform,
            volume,
            sentiment: None,
            growth: None,
            last_updated: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decline_follows_sign() {
        assert!(Growth::Percent(-4.2).is_decline());
        assert!(Growth::Label("-4%".into()).is_decline());
        assert!(!Growth::Percent(0.0).is_decline());
        assert!(!Growth::Label("+45%".into()).is_decline());
    }

    #[test]
    fn decodes_minimal_feed_record() {
        let trend: Trend =
            serde_json::from_str(r##"{"topic":"#RustLang","platform":"reddit","volume":310}"##)
                .unwrap();
        assert_eq!(trend, Trend::new("#RustLang", Platform::Reddit, 310));
    }

    #[test]
    fn decodes_backend_record() {
        let trend: Trend = serde_json::from_value(serde_json::json!({
            "id": 7,
            "topic": "#AIInHealthcare",
            "platform": "linkedin",
            "volume": 12500,
            "sentiment": "positive",
            "growth": 45.0,
            "created_at": "2025-01-10T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(trend.id, Some(RecordId::Number(7)));
        assert_eq!(trend.sentiment, Some(Sentiment::Positive));
        assert_eq!(trend.growth.as_ref().map(ToString::to_string).as_deref(), Some("+45%"));
        assert_eq!(trend.last_updated.as_deref(), Some("2025-01-10T12:00:00Z"));
    }

    #[test]
    fn growth_label_passes_through() {
        assert_eq!(Growth::Label("+32%".into()).to_string(), "+32%");
        assert_eq!(Growth::Percent(-4.0).to_string(), "-4%");
    }
}
