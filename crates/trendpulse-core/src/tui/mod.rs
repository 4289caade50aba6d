//! Terminal user interface for TrendPulse
//!
//! A single-screen dashboard: header with clock and system switch, platform
//! overview strip, agent cards, and four tabbed panels that each fetch their
//! own data when mounted.

mod app;
mod components;
mod event;
pub mod panels;
pub mod theme;
mod ui;

pub use app::{ActiveTab, App, SystemStatus};
pub use event::{Event, EventHandler};
