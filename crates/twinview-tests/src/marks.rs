//! Mark workflows on a playing clip.

use crate::harness::{approx, Harness};
use twinview_deck::Selection;

#[test]
fn marks_follow_the_live_playhead() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.play_all();
    h.tick(1.0);
    // Between samples: the mark still lands on the live position.
    h.clock.advance_secs(0.5);
    let slot = h.deck.slot_mut(0).unwrap();
    let id = slot.mark_current_time().unwrap();
    assert!(approx(slot.marks().get(id).unwrap().time, 1.5));
}

#[test]
fn marks_within_tolerance_are_ignored() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.slot_mut(0).unwrap().seek_to(2.0);
    assert!(h.deck.slot_mut(0).unwrap().mark_current_time().is_some());
    h.deck.slot_mut(0).unwrap().seek_to(2.005);
    assert!(h.deck.slot_mut(0).unwrap().mark_current_time().is_none());
    h.deck.slot_mut(0).unwrap().seek_to(2.02);
    assert!(h.deck.slot_mut(0).unwrap().mark_current_time().is_some());
    assert_eq!(h.deck.slot(0).unwrap().marks().len(), 2);
}

#[test]
fn marks_stay_sorted_with_gaps() {
    let mut h = Harness::with_clips(10.0, 10.0);
    for t in [4.0, 1.0, 2.5] {
        h.deck.slot_mut(0).unwrap().seek_to(t);
        h.deck.slot_mut(0).unwrap().mark_current_time();
    }
    let marks = h.deck.slot(0).unwrap().marks();
    let times: Vec<f64> = marks.iter().map(|m| m.time).collect();
    assert_eq!(times, vec![1.0, 2.5, 4.0]);
    assert_eq!(marks.diff_to_previous(0), None);
    assert!(approx(marks.diff_to_previous(1).unwrap(), 1.5));
    assert_eq!(marks.gap_label(2).as_deref(), Some("+1.50"));
}

#[test]
fn jump_pauses_playback_on_the_mark() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.slot_mut(0).unwrap().seek_to(3.0);
    let id = h.deck.slot_mut(0).unwrap().mark_current_time().unwrap();
    h.deck.play_all();
    h.tick(2.0);

    assert!(h.deck.jump_to_mark(0, id));
    h.tick(1.0);
    let slot = h.deck.slot(0).unwrap();
    assert!(slot.is_paused());
    assert!(approx(slot.position(), 3.0));
    assert_eq!(slot.marks().selection(), Selection::Selected(id));
    // The other clip kept playing.
    assert!(approx(h.position(1), 3.0));
}

#[test]
fn playing_off_a_mark_clears_the_selection() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.slot_mut(0).unwrap().seek_to(3.0);
    let id = h.deck.slot_mut(0).unwrap().mark_current_time().unwrap();
    h.deck.jump_to_mark(0, id);

    h.deck.slot_mut(0).unwrap().play();
    h.tick(0.005);
    assert!(h.deck.slot(0).unwrap().marks().is_selected(id));
    h.tick(0.1);
    assert_eq!(h.deck.slot(0).unwrap().marks().selection(), Selection::None);
}

#[test]
fn delete_selected_after_jump() {
    let mut h = Harness::with_clips(10.0, 10.0);
    let mut ids = Vec::new();
    for t in [1.0, 2.0, 3.0] {
        h.deck.slot_mut(0).unwrap().seek_to(t);
        ids.push(h.deck.slot_mut(0).unwrap().mark_current_time().unwrap());
    }
    h.deck.jump_to_mark(0, ids[1]);
    let removed = h.deck.slot_mut(0).unwrap().remove_selected_mark().unwrap();
    assert!(approx(removed.time, 2.0));

    let marks = h.deck.slot(0).unwrap().marks();
    assert_eq!(marks.len(), 2);
    assert_eq!(marks.selection(), Selection::None);
    assert!(approx(marks.diff_to_previous(1).unwrap(), 2.0));

    // Nothing selected: delete is a no-op.
    assert!(h.deck.slot_mut(0).unwrap().remove_selected_mark().is_none());
}

#[test]
fn replacing_a_clip_discards_its_marks() {
    let mut h = Harness::with_clips(10.0, 10.0);
    h.deck.slot_mut(1).unwrap().seek_to(1.0);
    h.deck.slot_mut(1).unwrap().mark_current_time();
    let replacement = h.player("c.mp4", 8.0);
    h.deck.load(1, replacement).unwrap();
    assert!(h.deck.slot(1).unwrap().marks().is_empty());
}
