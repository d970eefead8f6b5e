//! Environment wrappers.
mod monitor;
mod time_limit;
pub use monitor::{EpisodeStats, Monitor, MonitorConfig};
pub use time_limit::{TimeLimit, TimeLimitConfig};
