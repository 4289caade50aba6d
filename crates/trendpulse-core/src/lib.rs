//! # TrendPulse
//!
//! Terminal dashboard for a multi-agent social media pipeline.
//!
//! TrendPulse reads trend, draft, schedule and engagement data from the
//! TrendPulse backend and renders it as a single-screen dashboard. The
//! agents themselves run in the backend; this crate only displays them.
//!
//! ## Architecture
//!
//! - **Models**: Serde records for the `/api/*` payloads
//! - **API**: [`api::DashboardSource`] seam with a reqwest implementation
//! - **Dashboard**: Fetch lifecycle, mount cancellation and view derivations
//! - **TUI**: ratatui dashboard with one panel per view
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the dashboard against a local backend
//! trendpulse dashboard
//!
//! # Print the trend feed as JSON
//! trendpulse --format json trends
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod tui;

pub use crate::config::Config;
pub use crate::error::{Error, Result};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::api::{ApiClient, DashboardSource};
    pub use crate::config::Config;
    pub use crate::dashboard::{FetchOutcome, FetchState, MountScope, Resource};
    pub use crate::error::{Error, Result};
    pub use crate::models::*;
}
