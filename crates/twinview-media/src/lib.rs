//! TwinView Media - media handles for clip playback
//!
//! This crate handles:
//! - The `MediaHandle` abstraction the transport drives
//! - A wall-clock `ClipPlayer` implementation
//! - Media file probing through ffprobe
//! - Video-only admission of dropped or picked files

pub mod clock;
pub mod handle;
pub mod loader;
pub mod player;
pub mod probe;
pub mod source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use handle::{MediaHandle, ReadyState};
pub use loader::{LoadPoll, MetadataLoader};
pub use player::ClipPlayer;
pub use probe::{MediaProbe, VideoStreamInfo};
pub use source::{MediaSource, VIDEO_EXTENSIONS};

/// Log media backend availability (call once at startup).
pub fn init() {
    if probe::ffprobe_available() {
        tracing::info!("TwinView media initialized");
    } else {
        tracing::warn!("ffprobe not found; clips will fail to load");
    }
}
