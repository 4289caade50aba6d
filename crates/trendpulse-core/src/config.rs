//! Configuration management for TrendPulse
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `TRENDPULSE__SECTION__KEY` environment variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Prefix for layered environment overrides (`TRENDPULSE__API__BASE_URL`)
pub const ENV_PREFIX: &str = "TRENDPULSE";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,

    /// TUI configuration
    pub tui: TuiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/*` paths are resolved against
    pub base_url: String,
    /// Upper bound for a whole request, surfaced as a fetch error when hit
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Upper bound for establishing the connection
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: format!("trendpulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// TUI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Clock tick interval
    #[serde(with = "humantime_serde")]
    pub tick_rate: Duration,
    /// Directory for the dashboard log file; the platform data dir when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_secs(1),
            log_dir: None,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is not set
    pub level: String,
    /// Log format (json or pretty)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `config.toml` in the
    /// platform config directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = config::Config::try_from(&Config::default())?;
        let mut builder = config::Config::builder().add_source(defaults);

        match path {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    debug!(path = %path.display(), "looking for default config file");
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        let config: Config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Override the backend base URL (CLI flag or `TRENDPULSE_API_URL`)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.api.base_url = base_url.into();
        self.validate()?;
        Ok(self)
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| Error::config(format!("invalid api.base_url '{}': {e}", self.api.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "api.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.api.request_timeout.is_zero() {
            return Err(Error::config("api.request_timeout must be greater than zero"));
        }
        if self.tui.tick_rate.is_zero() {
            return Err(Error::config("tui.tick_rate must be greater than zero"));
        }
        Ok(())
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("ai", "TrendPulse", "trendpulse")
}

/// `config.toml` inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Where the dashboard writes its log file by default
pub fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("trendpulse"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout, Duration::from_secs(10));
        assert_eq!(config.tui.tick_rate, Duration::from_secs(1));
        assert_eq!(config.logging.format, LogFormat::Pretty);
        config.validate().expect("defaults validate");
    }

    #[test]
    fn file_overrides_defaults() {
        let file = write_config(
            r#"
[api]
base_url = "https://trends.example.com"
request_timeout = "3s"

[logging]
level = "debug"
format = "json"
"#,
        );

        let config = Config::load(Some(file.path())).expect("config loads");
        assert_eq!(config.api.base_url, "https://trends.example.com");
        assert_eq!(config.api.request_timeout, Duration::from_secs(3));
        // untouched keys keep their defaults
        assert_eq!(config.api.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.tui.tick_rate, Duration::from_secs(1));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = Config::default()
            .with_base_url("ftp://example.com")
            .expect_err("ftp is rejected");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let file = write_config("[api]\nrequest_timeout = \"0s\"\n");
        assert!(Config::load(Some(file.path())).is_err());
    }
}
