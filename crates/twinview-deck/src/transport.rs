//! Group transport over all loaded clips.
//!
//! Every group command walks the slots in index order and applies the same
//! operation to each clip independently within one call. Clips that failed
//! to load are skipped without error. The aggregate "all paused" flag is not
//! tracked incrementally; it is recomputed whenever [`TransportController::poll`]
//! takes a sample.

use crate::marks::MarkId;
use crate::poll::PollTimer;
use crate::slot::Slot;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use twinview_core::defaults::SLOT_COUNT;
use twinview_core::{AppConfig, PlaybackRate, Result, TwinViewError, UnknownDurationPolicy};
use twinview_media::{MediaHandle, ReadyState};

/// Owns the clip slots and applies transport commands to them.
#[derive(Debug)]
pub struct TransportController<H> {
    slots: Vec<Option<Slot<H>>>,
    rate: PlaybackRate,
    all_paused: bool,
    poll: PollTimer,
    mark_tolerance: f64,
    unknown_duration: UnknownDurationPolicy,
}

impl<H: MediaHandle> TransportController<H> {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            slots: (0..SLOT_COUNT).map(|_| None).collect(),
            rate: config.default_rate(),
            all_paused: true,
            poll: PollTimer::new(config.poll_interval()),
            mark_tolerance: config.mark_tolerance,
            unknown_duration: config.unknown_duration,
        }
    }

    // ── Slot lifetime ──────────────────────────────────────────

    /// Put a clip into slot `index`, releasing whatever was there.
    /// The clip picks up the shared playback rate.
    pub fn load(&mut self, index: usize, mut handle: H) -> Result<()> {
        let entry = self.slots.get_mut(index).ok_or_else(|| {
            TwinViewError::InvalidParameter(format!(
                "slot {} out of range (0-{})",
                index,
                SLOT_COUNT - 1
            ))
        })?;
        handle.set_playback_rate(self.rate);
        if entry.is_some() {
            info!(slot = index, "Replacing clip");
        }
        *entry = Some(Slot::new(handle, self.mark_tolerance, self.unknown_duration));
        info!(slot = index, "Clip loaded");
        Ok(())
    }

    /// Empty slot `index`. The handle and its marks are dropped here, which
    /// releases the underlying resource. Returns `false` if it was empty.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index).and_then(Option::take) {
            Some(slot) => {
                drop(slot);
                info!(slot = index, "Clip removed");
                true
            }
            None => false,
        }
    }

    pub fn slot(&self, index: usize) -> Option<&Slot<H>> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot<H>> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Lowest empty slot index.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of loaded clips.
    pub fn handle_count(&self) -> usize {
        self.loaded().count()
    }

    fn loaded(&self) -> impl Iterator<Item = &Slot<H>> {
        self.slots.iter().flatten()
    }

    fn loaded_mut(&mut self) -> impl Iterator<Item = &mut Slot<H>> {
        self.slots.iter_mut().flatten()
    }

    // ── Group transport ────────────────────────────────────────

    /// Pause every clip and rewind it to the start.
    pub fn stop_all(&mut self) {
        debug!("Stop all");
        self.loaded_mut().for_each(Slot::stop);
    }

    /// Nudge every clip by `delta` seconds, each clamped to its own length.
    pub fn add_delta_time_all(&mut self, delta: f64) {
        debug!(delta, "Nudge all");
        for slot in self.loaded_mut() {
            slot.add_delta_time(delta);
        }
    }

    /// Start every clip. Clips that refuse stay paused.
    pub fn play_all(&mut self) {
        debug!("Play all");
        self.loaded_mut().for_each(Slot::play);
    }

    pub fn pause_all(&mut self) {
        debug!("Pause all");
        self.loaded_mut().for_each(Slot::pause);
    }

    /// Change the shared rate for current and future clips.
    pub fn set_playback_rate(&mut self, rate: PlaybackRate) {
        if rate == self.rate {
            return;
        }
        info!(rate = rate.value(), "Playback rate changed");
        self.rate = rate;
        for slot in self.loaded_mut() {
            slot.handle_mut().set_playback_rate(rate);
        }
    }

    pub fn playback_rate(&self) -> PlaybackRate {
        self.rate
    }

    // ── Per-slot shortcuts ─────────────────────────────────────

    /// Jump slot `index` to one of its marks. Returns `false` if nothing moved.
    pub fn jump_to_mark(&mut self, index: usize, id: MarkId) -> bool {
        self.slot_mut(index)
            .map(|slot| slot.jump_to_mark(id))
            .unwrap_or(false)
    }

    // ── Sampling ───────────────────────────────────────────────

    /// Sample all clips if the poll interval has elapsed since the last
    /// sample. Returns `true` if a sample was taken.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.poll.due(now) {
            return false;
        }
        self.sample_all();
        true
    }

    /// Sample every clip immediately: positions, selection drift, deferred
    /// seeks, and the aggregate pause flag.
    pub fn sample_all(&mut self) {
        for slot in self.loaded_mut() {
            slot.sample();
        }
        let all_paused = self
            .loaded()
            .all(|slot| slot.handle().ready_state() != ReadyState::Ready || slot.is_paused());
        self.all_paused = all_paused;
    }

    /// Whether every clip was paused (or not yet playable) at the last sample.
    pub fn all_paused(&self) -> bool {
        self.all_paused
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll.interval()
    }

    /// Time until the next sample is due, for scheduling repaints.
    pub fn time_until_next_poll(&self, now: Instant) -> Duration {
        self.poll.time_until_next(now)
    }
}

impl<H: MediaHandle> Default for TransportController<H> {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
