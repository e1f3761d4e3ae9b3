//! Wall-clock clip player.
//!
//! `ClipPlayer` behaves like a host media element without decoding any
//! frames: the playhead advances with the clock times the playback rate,
//! stops at the end of the clip, and the duration only becomes known once
//! the background probe reports back.

use crate::clock::Clock;
use crate::handle::{MediaHandle, ReadyState};
use crate::loader::{LoadPoll, MetadataLoader};
use crate::probe::MediaProbe;
use crate::source::MediaSource;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use twinview_core::{clamp_position, PlaybackRate, Result, TwinViewError};

enum LoadState {
    Loading(MetadataLoader),
    Ready(MediaProbe),
    Failed(String),
}

/// A playable clip driven by a [`Clock`].
pub struct ClipPlayer {
    source: MediaSource,
    clock: Arc<dyn Clock>,
    load: LoadState,
    /// Position at `anchor_time`.
    anchor_position: f64,
    anchor_time: Duration,
    paused: bool,
    rate: PlaybackRate,
}

impl ClipPlayer {
    /// Open a clip and start probing it in the background.
    pub fn open(source: MediaSource, clock: Arc<dyn Clock>) -> Self {
        let loader = MetadataLoader::spawn(source.path().to_path_buf());
        Self::with_loader(source, clock, loader)
    }

    /// Open a clip whose metadata arrives through `loader`.
    pub fn with_loader(source: MediaSource, clock: Arc<dyn Clock>, loader: MetadataLoader) -> Self {
        info!(clip = source.name(), "Opening clip");
        let anchor_time = clock.now();
        Self {
            source,
            clock,
            load: LoadState::Loading(loader),
            anchor_position: 0.0,
            anchor_time,
            paused: true,
            rate: PlaybackRate::NORMAL,
        }
    }

    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    /// Probe result, once loaded.
    pub fn probe(&self) -> Option<&MediaProbe> {
        match &self.load {
            LoadState::Ready(probe) => Some(probe),
            _ => None,
        }
    }

    /// Why loading failed, if it did.
    pub fn failure(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether the playhead sits at the end of a loaded clip.
    pub fn has_ended(&self) -> bool {
        match self.duration() {
            Some(duration) => self.position() >= duration,
            None => false,
        }
    }

    /// Unclamped playhead: anchor plus elapsed clock time scaled by rate.
    fn raw_position(&self) -> f64 {
        if self.paused || !matches!(self.load, LoadState::Ready(_)) {
            return self.anchor_position;
        }
        let elapsed = self.clock.now().saturating_sub(self.anchor_time);
        self.anchor_position + elapsed.as_secs_f64() * self.rate.value()
    }

    /// Freeze the current playhead as the new anchor.
    fn reanchor(&mut self) {
        self.anchor_position = self.position();
        self.anchor_time = self.clock.now();
    }
}

impl MediaHandle for ClipPlayer {
    fn position(&self) -> f64 {
        let raw = self.raw_position();
        match self.duration() {
            Some(duration) => clamp_position(raw, duration),
            None => raw.max(0.0),
        }
    }

    fn duration(&self) -> Option<f64> {
        self.probe().map(|p| p.duration)
    }

    fn is_paused(&self) -> bool {
        self.paused || self.has_ended()
    }

    fn ready_state(&self) -> ReadyState {
        match self.load {
            LoadState::Loading(_) => ReadyState::Loading,
            LoadState::Ready(_) => ReadyState::Ready,
            LoadState::Failed(_) => ReadyState::Failed,
        }
    }

    fn play(&mut self) -> Result<()> {
        if let LoadState::Failed(reason) = &self.load {
            return Err(TwinViewError::Media(format!(
                "{} cannot play: {}",
                self.source.name(),
                reason
            )));
        }
        if !self.is_paused() {
            return Ok(());
        }
        // Playing a finished clip starts it over.
        if self.has_ended() {
            self.anchor_position = 0.0;
        } else {
            self.anchor_position = self.position();
        }
        self.anchor_time = self.clock.now();
        self.paused = false;
        debug!(clip = self.source.name(), at = self.anchor_position, "Play");
        Ok(())
    }

    fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.reanchor();
        self.paused = true;
        debug!(clip = self.source.name(), at = self.anchor_position, "Pause");
    }

    fn set_position(&mut self, seconds: f64) {
        let target = match self.duration() {
            Some(duration) => clamp_position(seconds, duration),
            None => clamp_position(seconds, f64::MAX),
        };
        self.anchor_position = target;
        self.anchor_time = self.clock.now();
    }

    fn playback_rate(&self) -> PlaybackRate {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.reanchor();
        self.rate = rate;
    }

    fn refresh(&mut self) {
        if let LoadState::Loading(loader) = &self.load {
            match loader.poll() {
                LoadPoll::Pending => {}
                LoadPoll::Done(Ok(probe)) => {
                    info!(
                        clip = self.source.name(),
                        duration = probe.duration,
                        "Metadata loaded"
                    );
                    // Playback requested while loading starts now.
                    self.anchor_position = clamp_position(self.anchor_position, probe.duration);
                    self.anchor_time = self.clock.now();
                    self.load = LoadState::Ready(probe);
                }
                LoadPoll::Done(Err(e)) => {
                    warn!(clip = self.source.name(), error = %e, "Failed to load clip");
                    self.load = LoadState::Failed(e.to_string());
                    self.paused = true;
                }
            }
        }

        if !self.paused && self.has_ended() {
            self.anchor_position = self.duration().unwrap_or(self.anchor_position);
            self.anchor_time = self.clock.now();
            self.paused = true;
            debug!(clip = self.source.name(), "Reached end");
        }
    }
}

impl Drop for ClipPlayer {
    fn drop(&mut self) {
        debug!(clip = self.source.name(), "Released clip");
    }
}
