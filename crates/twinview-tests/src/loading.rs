//! Clips whose metadata arrives late, or never.

use crate::harness::{approx, Harness};
use twinview_core::{AppConfig, TwinViewError, UnknownDurationPolicy};
use twinview_deck::PendingSeek;
use twinview_media::{MediaHandle, MediaProbe, MetadataLoader, ReadyState};

#[test]
fn nudges_before_metadata_apply_on_arrival() {
    let mut h = Harness::new();
    let (tx, loader) = MetadataLoader::channel();
    let player = h.player_with("late.mp4", loader);
    h.deck.load(0, player).unwrap();

    h.deck.add_delta_time_all(1.0);
    h.deck.add_delta_time_all(0.1);
    h.deck.sample_all();
    assert_eq!(h.position(0), 0.0);
    assert!(matches!(
        h.deck.slot(0).unwrap().pending_seek(),
        Some(PendingSeek::Relative(_))
    ));

    tx.send(Ok(MediaProbe::synthetic("late.mp4", 10.0))).unwrap();
    h.deck.sample_all();
    assert!(approx(h.position(0), 1.1));
    assert_eq!(h.deck.slot(0).unwrap().pending_seek(), None);
}

#[test]
fn deferred_seek_is_clamped_to_the_real_length() {
    let mut h = Harness::new();
    let (tx, loader) = MetadataLoader::channel();
    let player = h.player_with("late.mp4", loader);
    h.deck.load(0, player).unwrap();

    h.deck.add_delta_time_all(5.0);
    tx.send(Ok(MediaProbe::synthetic("late.mp4", 2.0))).unwrap();
    h.deck.sample_all();
    assert_eq!(h.position(0), 2.0);
}

#[test]
fn clamp_to_zero_policy_ignores_early_nudges() {
    let config = AppConfig {
        unknown_duration: UnknownDurationPolicy::ClampToZero,
        ..AppConfig::default()
    };
    let mut h = Harness::with_config(&config);
    let (tx, loader) = MetadataLoader::channel();
    let player = h.player_with("late.mp4", loader);
    h.deck.load(0, player).unwrap();

    h.deck.add_delta_time_all(1.0);
    tx.send(Ok(MediaProbe::synthetic("late.mp4", 10.0))).unwrap();
    h.deck.sample_all();
    assert_eq!(h.position(0), 0.0);
}

#[test]
fn loading_clip_counts_as_paused() {
    let mut h = Harness::new();
    let (_tx, loader) = MetadataLoader::channel();
    let player = h.player_with("late.mp4", loader);
    h.deck.load(0, player).unwrap();

    h.deck.play_all();
    h.tick(1.0);
    assert_eq!(h.deck.slot(0).unwrap().handle().ready_state(), ReadyState::Loading);
    assert!(h.deck.all_paused());
}

#[test]
fn play_requested_while_loading_starts_on_arrival() {
    let mut h = Harness::new();
    let (tx, loader) = MetadataLoader::channel();
    let player = h.player_with("late.mp4", loader);
    h.deck.load(0, player).unwrap();
    h.deck.play_all();
    h.tick(5.0);

    tx.send(Ok(MediaProbe::synthetic("late.mp4", 10.0))).unwrap();
    h.deck.sample_all();
    assert_eq!(h.position(0), 0.0);
    h.tick(1.0);
    assert!(approx(h.position(0), 1.0));
    assert!(!h.deck.all_paused());
}

#[test]
fn failed_clip_is_skipped_by_group_commands() {
    let mut h = Harness::new();
    let (tx, loader) = MetadataLoader::channel();
    let broken = h.player_with("broken.mp4", loader);
    let good = h.player("good.mp4", 10.0);
    h.deck.load(0, broken).unwrap();
    h.deck.load(1, good).unwrap();
    tx.send(Err(TwinViewError::Probe("no streams".to_string())))
        .unwrap();
    h.deck.sample_all();

    let slot = h.deck.slot(0).unwrap();
    assert_eq!(slot.handle().ready_state(), ReadyState::Failed);
    assert!(slot.handle().failure().unwrap().contains("no streams"));

    h.deck.play_all();
    h.deck.add_delta_time_all(2.0);
    h.tick(1.0);
    assert_eq!(h.position(0), 0.0);
    assert!(approx(h.position(1), 3.0));
    assert!(!h.deck.all_paused());
}

#[test]
fn worker_that_dies_fails_the_clip() {
    let mut h = Harness::new();
    let (tx, loader) = MetadataLoader::channel();
    let player = h.player_with("gone.mp4", loader);
    h.deck.load(0, player).unwrap();
    drop(tx);
    h.deck.sample_all();
    assert_eq!(
        h.deck.slot(0).unwrap().handle().ready_state(),
        ReadyState::Failed
    );
}
