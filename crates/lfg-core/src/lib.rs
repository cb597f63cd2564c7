//! lfg-core — configuration shared by the lfg crates.
//!
//! Loads `lfg.toml`, applies defaults, and resolves human-readable
//! duration strings into [`std::time::Duration`] values.

pub mod config;
pub mod duration;
pub mod error;

pub use config::{FeedConfig, FeedSettings, HealthConfig, HealthSettings, LfgConfig};
pub use duration::parse_duration;
pub use error::{ConfigError, ConfigResult};
