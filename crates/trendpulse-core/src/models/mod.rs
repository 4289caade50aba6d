//! Data models for TrendPulse

mod agent;
mod draft;
mod metrics;
mod platform;
mod post;
mod record;
mod status;
mod trend;

pub use self::agent::*;
pub use self::draft::*;
pub use self::metrics::*;
pub use self::platform::*;
pub use self::post::*;
pub use self::record::*;
pub use self::status::*;
pub use self::trend::*;
