//! The media handle abstraction the transport drives.

use twinview_core::{PlaybackRate, Result};

/// Loading state of a handle's underlying resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Metadata (duration) not known yet.
    Loading,
    /// Metadata loaded; the handle can play.
    Ready,
    /// The resource could not be loaded. Transport commands skip it.
    Failed,
}

/// One playable clip: a position, an optional duration and a play state.
///
/// Mirrors the surface of a host media element. Implementations advance
/// their own position while playing; callers only observe it.
pub trait MediaHandle {
    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Total length in seconds, once metadata has loaded.
    fn duration(&self) -> Option<f64>;

    fn is_paused(&self) -> bool;

    fn ready_state(&self) -> ReadyState;

    /// Start playback. May fail, in which case the handle stays paused.
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    /// Move the playhead. Implementations clamp to the valid range they know.
    fn set_position(&mut self, seconds: f64);

    fn playback_rate(&self) -> PlaybackRate;

    fn set_playback_rate(&mut self, rate: PlaybackRate);

    /// Pull in any state that changed asynchronously (metadata, end of clip).
    fn refresh(&mut self) {}

    fn is_failed(&self) -> bool {
        self.ready_state() == ReadyState::Failed
    }
}

impl<H: MediaHandle + ?Sized> MediaHandle for Box<H> {
    fn position(&self) -> f64 {
        (**self).position()
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn ready_state(&self) -> ReadyState {
        (**self).ready_state()
    }

    fn play(&mut self) -> Result<()> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn set_position(&mut self, seconds: f64) {
        (**self).set_position(seconds)
    }

    fn playback_rate(&self) -> PlaybackRate {
        (**self).playback_rate()
    }

    fn set_playback_rate(&mut self, rate: PlaybackRate) {
        (**self).set_playback_rate(rate)
    }

    fn refresh(&mut self) {
        (**self).refresh()
    }
}
