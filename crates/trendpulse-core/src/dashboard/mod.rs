//! Frontend-agnostic dashboard logic
//!
//! Everything here is shared by the terminal UI and the one-shot CLI
//! commands: request lifecycle, derived views, the static agent roster and
//! the placeholder actions.

pub mod agents;
pub mod commands;
pub mod engagement;
pub mod fetch;
pub mod format;
pub mod overview;
pub mod schedule;

pub use commands::{dispatch, Command};
pub use fetch::{spawn_fetch, FetchOutcome, FetchState, MountId, MountScope, Payload, Phase, Resource};
pub use overview::{derive_platform_overview, PlatformRow};
pub use schedule::StatusCounts;
