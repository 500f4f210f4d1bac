//! Page spinner timing policy
//!
//! The four knobs that decide when the loading overlay may fade. Values come
//! from the user config file or the environment, so they are normalised
//! rather than validated: anything negative becomes zero.

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// Minimum time the overlay stays fully visible
pub const DEFAULT_MIN_DISPLAY_MS: u64 = 800;

/// Upper bound after which the overlay fades regardless of image progress
pub const DEFAULT_MAX_WAIT_MS: u64 = 3000;

/// Distinct images that must load before the overlay may fade early
pub const DEFAULT_IMAGE_THRESHOLD: usize = 3;

/// Duration of the fade transition
pub const DEFAULT_FADE_MS: u64 = 400;

/// Spinner timing configuration
///
/// Serialized with the option names used by the web frontend
/// (`minMs`, `maxMs`, `imageThreshold`, `fadeMs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinnerConfig {
    /// Minimum fully-visible time in milliseconds
    #[serde(
        rename = "minMs",
        default = "default_min_display_ms",
        deserialize_with = "clamped_u64"
    )]
    pub min_display_ms: u64,

    /// Maximum wait in milliseconds before fading without enough images
    #[serde(
        rename = "maxMs",
        default = "default_max_wait_ms",
        deserialize_with = "clamped_u64"
    )]
    pub max_wait_ms: u64,

    /// Number of loaded images that allows an early fade
    #[serde(
        rename = "imageThreshold",
        default = "default_image_threshold",
        deserialize_with = "clamped_usize"
    )]
    pub image_threshold: usize,

    /// Fade transition length in milliseconds
    #[serde(
        rename = "fadeMs",
        default = "default_fade_ms",
        deserialize_with = "clamped_u64"
    )]
    pub fade_ms: u64,
}

fn default_min_display_ms() -> u64 {
    DEFAULT_MIN_DISPLAY_MS
}

fn default_max_wait_ms() -> u64 {
    DEFAULT_MAX_WAIT_MS
}

fn default_image_threshold() -> usize {
    DEFAULT_IMAGE_THRESHOLD
}

fn default_fade_ms() -> u64 {
    DEFAULT_FADE_MS
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            min_display_ms: DEFAULT_MIN_DISPLAY_MS,
            max_wait_ms: DEFAULT_MAX_WAIT_MS,
            image_threshold: DEFAULT_IMAGE_THRESHOLD,
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

impl SpinnerConfig {
    /// Build a config from possibly negative values, clamping them to zero
    #[cfg(test)]
    pub fn from_signed(min_ms: i64, max_ms: i64, image_threshold: i64, fade_ms: i64) -> Self {
        Self {
            min_display_ms: clamp_i64(min_ms),
            max_wait_ms: clamp_i64(max_ms),
            image_threshold: clamp_i64(image_threshold) as usize,
            fade_ms: clamp_i64(fade_ms),
        }
    }

    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Override the minimum display time (signed, clamped)
    pub fn with_min_ms(mut self, ms: i64) -> Self {
        self.min_display_ms = clamp_i64(ms);
        self
    }

    /// Override the maximum wait (signed, clamped)
    pub fn with_max_ms(mut self, ms: i64) -> Self {
        self.max_wait_ms = clamp_i64(ms);
        self
    }

    /// Override the image threshold (signed, clamped)
    pub fn with_image_threshold(mut self, threshold: i64) -> Self {
        self.image_threshold = clamp_i64(threshold) as usize;
        self
    }

    /// Override the fade duration (signed, clamped)
    pub fn with_fade_ms(mut self, ms: i64) -> Self {
        self.fade_ms = clamp_i64(ms);
        self
    }
}

fn clamp_i64(value: i64) -> u64 {
    value.max(0) as u64
}

/// JSON numbers may arrive negative or fractional; both are normalised.
fn clamped_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() || raw <= 0.0 {
        Ok(0)
    } else {
        // `as` saturates at u64::MAX
        Ok(raw.trunc() as u64)
    }
}

fn clamped_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    clamped_number(deserializer)
}

fn clamped_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    clamped_number(deserializer).map(|n| usize::try_from(n).unwrap_or(usize::MAX))
}
