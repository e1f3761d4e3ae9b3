//! TwinView Core - Foundation types for clip comparison
//!
//! This crate provides the types shared by every TwinView crate:
//! - Error type and `Result` alias
//! - Position clamping and `m:ss.cc` formatting
//! - The shared playback rate
//! - Application configuration

pub mod config;
pub mod error;
pub mod time;

pub use config::{AppConfig, UnknownDurationPolicy};
pub use error::{Result, TwinViewError};
pub use time::{clamp_position, format_gap, format_time, PlaybackRate};

/// Built-in defaults, overridable through [`AppConfig`].
pub mod defaults {
    /// Number of side-by-side clip slots.
    pub const SLOT_COUNT: usize = 2;

    /// Position / pause-state sampling interval.
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// Marks closer than this (seconds) are considered the same point.
    pub const MARK_TOLERANCE: f64 = 0.01;

    /// Nudge buttons, in seconds.
    pub const NUDGE_STEPS: [f64; 3] = [1.0, 0.1, 0.01];
}
