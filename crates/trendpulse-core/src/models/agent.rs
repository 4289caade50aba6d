//! Agent descriptor model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent health as shown on its card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    #[default]
    Active,
    Inactive,
    Error,
}

impl AgentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single agent metric value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for MetricValue {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Static descriptor of one agent in the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Stable identifier (e.g. "trend-watcher")
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description of the agent's job
    pub description: String,

    /// Current status
    pub status: AgentStatus,

    /// Relative time of the last activity ("2 minutes ago")
    pub last_activity: String,

    /// Metrics in display order
    pub metrics: Vec<(String, MetricValue)>,
}

impl Agent {
    /// Start building an active agent with no metrics
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status: AgentStatus::Active,
            last_activity: String::new(),
            metrics: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_last_activity(mut self, last_activity: impl Into<String>) -> Self {
        self.last_activity = last_activity.into();
        self
    }

    /// Append a metric; order of calls is the display order
    pub fn with_metric(mut self, key: impl Into<String>, value: impl Into<MetricValue>) -> Self {
        self.metrics.push((key.into(), value.into()));
        self
    }
}
