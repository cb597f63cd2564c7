//! lfg.toml configuration parser.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration::parse_duration;
use crate::error::{ConfigError, ConfigResult};

/// Backoff base delay used when `[health].base_delay` is absent.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);
/// Backoff ceiling used when `[health].max_delay` is absent.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(10_000);
/// Reconnect attempts used when `[health].max_attempts` is absent.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Polling interval for `wait_for_connection`.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Per-request timeout of the HTTP probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Age under which a followed post counts as recent.
pub const DEFAULT_RECENT_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LfgConfig {
    pub health: Option<HealthConfig>,
    pub feed: Option<FeedConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthConfig {
    pub url: Option<String>,
    pub base_delay: Option<String>,
    pub max_delay: Option<String>,
    pub max_attempts: Option<u32>,
    pub poll_interval: Option<String>,
    pub timeout: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedConfig {
    pub recent_window: Option<String>,
}

/// Health settings with defaults applied and durations resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthSettings {
    pub url: Option<String>,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub max_attempts: u32,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for HealthSettings {
    fn default() -> Self {
        Self {
            url: None,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// Feed settings with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub recent_window: Duration,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            recent_window: DEFAULT_RECENT_WINDOW,
        }
    }
}

impl LfgConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the `[health]` section, filling in defaults.
    pub fn health_settings(&self) -> ConfigResult<HealthSettings> {
        let defaults = HealthSettings::default();
        let Some(section) = &self.health else {
            return Ok(defaults);
        };

        let settings = HealthSettings {
            url: section.url.clone(),
            base_delay: duration_field("health.base_delay", &section.base_delay, defaults.base_delay)?,
            max_delay: duration_field("health.max_delay", &section.max_delay, defaults.max_delay)?,
            max_attempts: section.max_attempts.unwrap_or(defaults.max_attempts),
            poll_interval: duration_field(
                "health.poll_interval",
                &section.poll_interval,
                defaults.poll_interval,
            )?,
            timeout: duration_field("health.timeout", &section.timeout, defaults.timeout)?,
        };

        if settings.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "health.max_attempts must be at least 1".to_string(),
            ));
        }
        if settings.base_delay > settings.max_delay {
            return Err(ConfigError::Invalid(format!(
                "health.base_delay ({:?}) exceeds health.max_delay ({:?})",
                settings.base_delay, settings.max_delay
            )));
        }
        if settings.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "health.poll_interval must be non-zero".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Resolve the `[feed]` section, filling in defaults.
    pub fn feed_settings(&self) -> ConfigResult<FeedSettings> {
        let defaults = FeedSettings::default();
        let Some(section) = &self.feed else {
            return Ok(defaults);
        };
        Ok(FeedSettings {
            recent_window: duration_field(
                "feed.recent_window",
                &section.recent_window,
                defaults.recent_window,
            )?,
        })
    }
}

fn duration_field(
    field: &'static str,
    value: &Option<String>,
    default: Duration,
) -> ConfigResult<Duration> {
    match value {
        None => Ok(default),
        Some(raw) => parse_duration(raw).ok_or_else(|| ConfigError::InvalidDuration {
            field,
            value: raw.clone(),
        }),
    }
}
