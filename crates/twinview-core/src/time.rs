//! Time helpers for clip positions.
//!
//! Positions and durations are plain `f64` seconds, the unit media handles
//! report. This module owns the clamping rule every seek goes through and
//! the `m:ss.cc` display format used by the time readouts and mark buttons.

use crate::error::{Result, TwinViewError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Clamp a position into `[0, duration]`.
///
/// NaN positions collapse to zero and a negative or NaN duration is treated
/// as zero, so the result is always a valid position.
#[inline]
pub fn clamp_position(position: f64, duration: f64) -> f64 {
    let upper = duration.max(0.0);
    position.max(0.0).min(upper)
}

/// Format seconds as `m:ss.cc` (minutes are not padded).
///
/// The centisecond count is taken from the whole value (`seconds * 100`),
/// not from the fractional part, so `0.29` renders as `0:00.29` where
/// `(0.29 % 1) * 100` would floor to 28. Digits are truncated, not
/// rounded: `61.999` renders as `1:01.99`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let total_centis = (seconds * 100.0 + 1e-6).floor() as u64;
    let centis = total_centis % 100;
    let total_secs = total_centis / 100;
    format!("{}:{:02}.{:02}", total_secs / 60, total_secs % 60, centis)
}

/// Format the gap between two consecutive marks, e.g. `+1.50`.
pub fn format_gap(delta: f64) -> String {
    format!("+{:.2}", delta)
}

/// Playback speed multiplier shared by every loaded clip.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Normal speed.
    pub const NORMAL: Self = Self(1.0);

    /// Rates offered by the rate selector.
    pub const PRESETS: [f64; 5] = [0.1, 0.5, 1.0, 1.5, 2.0];

    /// Create a rate. Must be finite and strictly positive.
    pub fn new(rate: f64) -> Result<Self> {
        if rate.is_finite() && rate > 0.0 {
            Ok(Self(rate))
        } else {
            Err(TwinViewError::InvalidParameter(format!(
                "playback rate must be a positive number, got {}",
                rate
            )))
        }
    }

    /// The multiplier as `f64`.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = TwinViewError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PlaybackRate> for f64 {
    fn from(rate: PlaybackRate) -> f64 {
        rate.0
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
