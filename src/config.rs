//! Runtime configuration
//!
//! Defaults match the published page: 4200 ms autoplay, four visible cards,
//! images resolved against `public/`. Each value can be overridden through
//! the environment:
//!
//! | Variable                 | Meaning                          |
//! |--------------------------|----------------------------------|
//! | `BRAND_SITE_INTERVAL_MS` | autoplay period in milliseconds  |
//! | `BRAND_SITE_VISIBLE`     | cards drawn in the stack         |
//! | `BRAND_SITE_ASSETS`      | directory for local images       |

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::carousel::gesture::{SWIPE_MAX_DURATION, SWIPE_MIN_DISTANCE, WHEEL_THROTTLE};
use crate::carousel::projection::StackStyle;

pub const ENV_INTERVAL_MS: &str = "BRAND_SITE_INTERVAL_MS";
pub const ENV_VISIBLE: &str = "BRAND_SITE_VISIBLE";
pub const ENV_ASSETS: &str = "BRAND_SITE_ASSETS";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("visible card count must be at least 1")]
    ZeroVisible,

    #[error("swipe distance must be a finite, non-negative number of pixels")]
    InvalidSwipeDistance,
}

/// Behaviour of one card stack.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub interval: Duration,
    pub visible: usize,
    pub swipe_min_distance: f32,
    pub swipe_max_duration: Duration,
    pub wheel_throttle: Duration,
    pub style: StackStyle,
}

impl CarouselConfig {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4200);
    pub const DEFAULT_VISIBLE: usize = 4;

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_visible(mut self, visible: usize) -> Self {
        self.visible = visible;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.visible == 0 {
            return Err(ConfigError::ZeroVisible);
        }
        if !self.swipe_min_distance.is_finite() || self.swipe_min_distance < 0.0 {
            return Err(ConfigError::InvalidSwipeDistance);
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            visible: Self::DEFAULT_VISIBLE,
            swipe_min_distance: SWIPE_MIN_DISTANCE,
            swipe_max_duration: SWIPE_MAX_DURATION,
            wheel_throttle: WHEEL_THROTTLE,
            style: StackStyle::default(),
        }
    }
}

/// Everything the binary needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub asset_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_INTERVAL_MS) {
            let millis = parse_positive(ENV_INTERVAL_MS, &raw)?;
            config.carousel.interval = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup(ENV_VISIBLE) {
            let visible = parse_positive(ENV_VISIBLE, &raw)?;
            config.carousel.visible =
                usize::try_from(visible).map_err(|_| ConfigError::InvalidNumber {
                    var: ENV_VISIBLE,
                    value: raw.clone(),
                })?;
        }
        if let Some(raw) = lookup(ENV_ASSETS) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                config.asset_dir = PathBuf::from(trimmed);
            }
        }

        config.carousel.validate()?;
        Ok(config)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            asset_dir: PathBuf::from("public"),
        }
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}
