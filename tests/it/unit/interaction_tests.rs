//! Unit tests for the drag decision logic.

use cardstack::{DragOutcome, SwipeDirection, SwipePhase, Translation};

use crate::helpers::{animated_deck, deck, settle_ticket, swipe};

#[test]
fn test_threshold_is_strict() {
    let mut state = deck(3);
    assert_eq!(swipe(&mut state, 100.0, 0.0), DragOutcome::SnapBack);
    assert_eq!(swipe(&mut state, -100.0, 0.0), DragOutcome::SnapBack);
    assert_eq!(state.top_index(), 0);

    assert_eq!(swipe(&mut state, 100.1, 0.0), DragOutcome::Advanced);
    assert_eq!(state.top_index(), 1);
}

#[test]
fn test_vertical_distance_never_commits() {
    let mut state = deck(3);
    // A mostly-vertical drag stays below the horizontal threshold no matter
    // how far it travels.
    assert_eq!(swipe(&mut state, 20.0, 900.0), DragOutcome::SnapBack);
    assert_eq!(state.top_index(), 0);
}

#[test]
fn test_fling_preserves_vertical_offset() {
    let mut state = animated_deck(3);
    swipe(&mut state, -140.0, 33.0);
    assert_eq!(state.live_offset(), Translation::new(-1000.0, 33.0));
}

#[test]
fn test_commit_direction_matches_drag_sign() {
    let mut left = animated_deck(2);
    assert!(matches!(
        swipe(&mut left, -101.0, 0.0),
        DragOutcome::Settling {
            direction: SwipeDirection::Left,
            ..
        }
    ));

    let mut right = animated_deck(2);
    assert!(matches!(
        swipe(&mut right, 101.0, 0.0),
        DragOutcome::Settling {
            direction: SwipeDirection::Right,
            ..
        }
    ));
}

#[test]
fn test_snap_back_resets_offset_mid_phase() {
    let mut state = deck(3);
    state.begin_drag();
    state.update_drag(Translation::new(80.0, -20.0));
    assert_eq!(state.phase(), SwipePhase::Dragging);
    assert_eq!(state.live_offset(), Translation::new(80.0, -20.0));

    state.commit_drag(Translation::new(80.0, -20.0));
    assert_eq!(state.phase(), SwipePhase::Idle);
    assert_eq!(state.live_offset(), Translation::ZERO);
}

#[test]
fn test_each_settling_commit_issues_a_fresh_ticket() {
    let mut state = animated_deck(3);
    let first = settle_ticket(swipe(&mut state, 200.0, 0.0));
    state.finish_settle(first);
    let second = settle_ticket(swipe(&mut state, 200.0, 0.0));
    assert_ne!(first, second);
}

#[test]
fn test_stale_ticket_after_fast_forward_changes_nothing() {
    let mut state = animated_deck(3);
    let stale = settle_ticket(swipe(&mut state, 200.0, 0.0));

    // A second drag starts before the timer fires and commits on its own.
    let live = settle_ticket(swipe(&mut state, -200.0, 0.0));
    assert_eq!(state.top_index(), 1);

    assert!(!state.finish_settle(stale));
    assert_eq!(state.top_index(), 1);

    assert!(state.finish_settle(live));
    assert_eq!(state.top_index(), 2);
}

#[test]
fn test_empty_stack_is_exhausted_from_the_start() {
    let state = deck(0);
    assert!(state.is_exhausted());
    assert_eq!(state.top_index(), 0);
}

#[test]
fn test_animation_flag_is_observable() {
    assert!(!deck(1).is_animated());
    assert!(animated_deck(1).is_animated());
}
