//! Shared fixtures: a deck of wall-clock players on a manual clock.

use std::sync::Arc;
use twinview_core::AppConfig;
use twinview_deck::TransportController;
use twinview_media::{ClipPlayer, ManualClock, MediaProbe, MediaSource, MetadataLoader};

pub struct Harness {
    pub clock: ManualClock,
    pub deck: TransportController<ClipPlayer>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            clock: ManualClock::new(),
            deck: TransportController::new(config),
        }
    }

    /// A player whose metadata is already waiting in its loader.
    pub fn player(&self, name: &str, duration: f64) -> ClipPlayer {
        let loader = MetadataLoader::ready(MediaProbe::synthetic(name, duration));
        self.player_with(name, loader)
    }

    pub fn player_with(&self, name: &str, loader: MetadataLoader) -> ClipPlayer {
        ClipPlayer::with_loader(
            MediaSource::from_path(name),
            Arc::new(self.clock.clone()),
            loader,
        )
    }

    /// Load two ready clips and pull their metadata in.
    pub fn with_clips(a: f64, b: f64) -> Self {
        let mut h = Self::new();
        let (pa, pb) = (h.player("a.mp4", a), h.player("b.mp4", b));
        h.deck.load(0, pa).unwrap();
        h.deck.load(1, pb).unwrap();
        h.deck.sample_all();
        h
    }

    /// Advance the clock and take a sample.
    pub fn tick(&mut self, secs: f64) {
        self.clock.advance_secs(secs);
        self.deck.sample_all();
    }

    pub fn position(&self, index: usize) -> f64 {
        self.deck.slot(index).unwrap().position()
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
