//! One side of the comparison: a media handle and its marks.

use crate::marks::{Mark, MarkId, MarkStore};
use tracing::{trace, warn};
use twinview_core::{clamp_position, UnknownDurationPolicy};
use twinview_media::MediaHandle;

/// A seek requested before the clip's duration was known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingSeek {
    /// Offset from wherever the playhead is once metadata arrives.
    Relative(f64),
    /// Absolute target, clamped once the duration is known.
    Absolute(f64),
}

impl PendingSeek {
    fn nudged(self, delta: f64) -> Self {
        match self {
            Self::Relative(d) => Self::Relative(d + delta),
            Self::Absolute(t) => Self::Absolute(t + delta),
        }
    }
}

/// A loaded clip slot.
#[derive(Debug)]
pub struct Slot<H> {
    handle: H,
    marks: MarkStore,
    policy: UnknownDurationPolicy,
    pending: Option<PendingSeek>,
    /// Last sampled playhead position.
    position: f64,
}

impl<H: MediaHandle> Slot<H> {
    pub fn new(handle: H, mark_tolerance: f64, policy: UnknownDurationPolicy) -> Self {
        let position = handle.position();
        Self {
            handle,
            marks: MarkStore::with_tolerance(mark_tolerance),
            policy,
            pending: None,
            position,
        }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn marks(&self) -> &MarkStore {
        &self.marks
    }

    pub fn marks_mut(&mut self) -> &mut MarkStore {
        &mut self.marks
    }

    /// Playhead position as of the last sample or seek.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration, or zero while unknown.
    pub fn duration_or_zero(&self) -> f64 {
        self.handle.duration().unwrap_or(0.0)
    }

    pub fn pending_seek(&self) -> Option<PendingSeek> {
        self.pending
    }

    pub fn is_paused(&self) -> bool {
        self.handle.is_paused()
    }

    fn skipped(&self) -> bool {
        let failed = self.handle.is_failed();
        if failed {
            trace!("Skipping command for failed clip");
        }
        failed
    }

    /// Re-read the handle: pulls async metadata, applies deferred seeks and
    /// drops a selection the playhead has left. Returns the position.
    pub fn sample(&mut self) -> f64 {
        self.handle.refresh();
        if let (Some(pending), Some(duration)) = (self.pending, self.handle.duration()) {
            let target = match pending {
                PendingSeek::Relative(delta) => self.handle.position() + delta,
                PendingSeek::Absolute(t) => t,
            };
            self.handle.set_position(clamp_position(target, duration));
            self.pending = None;
        }
        self.position = self.handle.position();
        self.marks.observe_position(self.position);
        self.position
    }

    /// Pause and rewind to the start.
    pub fn stop(&mut self) {
        if self.skipped() {
            return;
        }
        self.handle.pause();
        self.handle.set_position(0.0);
        self.pending = None;
        self.sample();
    }

    /// Move the playhead by `delta` seconds, clamped to the clip.
    pub fn add_delta_time(&mut self, delta: f64) {
        if self.skipped() {
            return;
        }
        match (self.handle.duration(), self.policy) {
            (Some(duration), _) => {
                let target = clamp_position(self.handle.position() + delta, duration);
                self.handle.set_position(target);
            }
            (None, UnknownDurationPolicy::ClampToZero) => {
                let target = clamp_position(self.handle.position() + delta, 0.0);
                self.handle.set_position(target);
            }
            (None, UnknownDurationPolicy::Defer) => {
                let pending = self.pending.unwrap_or(PendingSeek::Relative(0.0));
                self.pending = Some(pending.nudged(delta));
            }
        }
        self.sample();
    }

    /// Jump to an absolute position (the scrub bar).
    pub fn seek_to(&mut self, seconds: f64) {
        if self.skipped() {
            return;
        }
        match (self.handle.duration(), self.policy) {
            (Some(duration), _) => self.handle.set_position(clamp_position(seconds, duration)),
            (None, UnknownDurationPolicy::ClampToZero) => self.handle.set_position(0.0),
            (None, UnknownDurationPolicy::Defer) => {
                self.pending = Some(PendingSeek::Absolute(seconds));
            }
        }
        self.sample();
    }

    /// Start playback. A refusal is logged and leaves the clip paused.
    pub fn play(&mut self) {
        if self.skipped() {
            return;
        }
        if let Err(e) = self.handle.play() {
            warn!(error = %e, "Playback did not start");
            self.handle.pause();
        }
    }

    pub fn pause(&mut self) {
        if self.skipped() {
            return;
        }
        self.handle.pause();
    }

    pub fn toggle_play(&mut self) {
        if self.handle.is_paused() {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Record a mark at the live playhead position.
    pub fn mark_current_time(&mut self) -> Option<MarkId> {
        if self.skipped() {
            return None;
        }
        let position = self.sample();
        self.marks.mark_current_time(position)
    }

    /// Park on a mark: seek to it, pause and select it in one step.
    /// Returns `false` for unknown marks or failed clips.
    pub fn jump_to_mark(&mut self, id: MarkId) -> bool {
        if self.skipped() {
            return false;
        }
        let Some(time) = self.marks.get(id).map(|m| m.time) else {
            return false;
        };
        self.pending = None;
        self.handle.pause();
        self.handle.set_position(time);
        self.position = self.handle.position();
        self.marks.select(id);
        true
    }

    pub fn remove_selected_mark(&mut self) -> Option<Mark> {
        self.marks.remove_selected()
    }
}
