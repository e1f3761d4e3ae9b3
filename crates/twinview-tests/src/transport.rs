//! Group transport across two real players.

use crate::harness::{approx, Harness};
use std::time::{Duration, Instant};
use twinview_core::PlaybackRate;
use twinview_media::MediaHandle;

#[test]
fn play_all_advances_both_clips() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.play_all();
    h.tick(2.0);
    assert!(approx(h.position(0), 2.0));
    assert!(approx(h.position(1), 2.0));
    assert!(!h.deck.all_paused());
}

#[test]
fn shorter_clip_stops_at_its_end() {
    let mut h = Harness::with_clips(10.0, 3.0);
    h.deck.play_all();
    h.tick(4.0);
    assert!(approx(h.position(1), 3.0));
    assert!(h.deck.slot(1).unwrap().is_paused());
    // The longer clip keeps going, so the group is not paused.
    assert!(!h.deck.all_paused());

    h.tick(10.0);
    assert!(h.deck.all_paused());
}

#[test]
fn stop_all_rewinds_playing_clips() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.play_all();
    h.tick(5.0);
    h.deck.stop_all();
    h.tick(1.0);
    assert_eq!(h.position(0), 0.0);
    assert_eq!(h.position(1), 0.0);
    assert!(h.deck.all_paused());
}

#[test]
fn nudges_clamp_each_clip_independently() {
    let mut h = Harness::with_clips(10.0, 3.0);
    h.deck.add_delta_time_all(1.0);
    h.deck.add_delta_time_all(1.0);
    h.deck.add_delta_time_all(1.0);
    h.deck.add_delta_time_all(1.0);
    assert!(approx(h.position(0), 4.0));
    assert!(approx(h.position(1), 3.0));

    h.deck.add_delta_time_all(-10.0);
    assert_eq!(h.position(0), 0.0);
    assert_eq!(h.position(1), 0.0);
}

#[test]
fn fine_nudges_accumulate() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.add_delta_time_all(0.1);
    h.deck.add_delta_time_all(0.01);
    h.deck.add_delta_time_all(-0.1);
    assert!(approx(h.position(0), 0.01));
}

#[test]
fn nudging_while_playing_keeps_playing() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.play_all();
    h.tick(1.0);
    h.deck.add_delta_time_all(2.0);
    h.tick(1.0);
    assert!(approx(h.position(0), 4.0));
    assert!(!h.deck.all_paused());
}

#[test]
fn rate_scales_playback() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.set_playback_rate(PlaybackRate::new(0.5).unwrap());
    h.deck.play_all();
    h.tick(2.0);
    assert!(approx(h.position(0), 1.0));

    h.deck.set_playback_rate(PlaybackRate::new(2.0).unwrap());
    h.tick(1.0);
    assert!(approx(h.position(0), 3.0));
    assert!(approx(h.position(1), 3.0));
}

#[test]
fn replaced_clip_inherits_rate() {
    let mut h = Harness::with_clips(10.0, 10.0);
    let fast = PlaybackRate::new(1.5).unwrap();
    h.deck.set_playback_rate(fast);
    let replacement = h.player("c.mp4", 4.0);
    h.deck.load(1, replacement).unwrap();
    assert_eq!(h.deck.slot(1).unwrap().handle().playback_rate(), fast);
}

#[test]
fn single_clip_still_drives_group_controls() {
    let mut h = Harness::new();
    let player = h.player("solo.mp4", 5.0);
    h.deck.load(1, player).unwrap();
    h.deck.sample_all();
    h.deck.play_all();
    h.tick(1.0);
    assert!(approx(h.position(1), 1.0));
    assert_eq!(h.deck.first_empty_slot(), Some(0));
}

#[test]
fn poll_only_samples_on_interval() {
    let mut h = Harness::with_clips(10.0, 10.0);
    let start = Instant::now();
    assert!(h.deck.poll(start));
    h.deck.play_all();
    h.clock.advance_secs(0.05);
    assert!(!h.deck.poll(start + Duration::from_millis(50)));
    assert!(h.deck.all_paused());
    assert_eq!(h.position(0), 0.0);

    h.clock.advance_secs(0.05);
    assert!(h.deck.poll(start + Duration::from_millis(100)));
    assert!(!h.deck.all_paused());
    assert!(approx(h.position(0), 0.1));
}
