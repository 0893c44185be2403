//! End-to-end swipe workflows: full traversal, interrupted settles, and
//! exhaustion.

use cardstack::{DragOutcome, SwipePhase, Translation};

use crate::helpers::{
    animated_deck, assert_resting_at, deck, settle_ticket, swipe, swipe_and_settle,
};

#[test]
fn test_full_deck_traversal_unanimated() {
    let mut state = deck(3);
    for expected_top in 1..=3 {
        assert_eq!(swipe(&mut state, 150.0, 0.0), DragOutcome::Advanced);
        assert_resting_at(&state, expected_top);
    }
    assert!(state.is_exhausted());
}

#[test]
fn test_full_deck_traversal_animated() {
    let mut state = animated_deck(3);
    for expected_top in 1..=3 {
        let ticket = settle_ticket(swipe(&mut state, -150.0, 0.0));
        // Mid-fling: the index has not moved yet.
        assert_eq!(state.top_index(), expected_top - 1);
        assert_eq!(state.live_offset(), Translation::new(-1000.0, 0.0));

        assert!(state.finish_settle(ticket));
        assert_resting_at(&state, expected_top);
    }
    assert!(state.is_exhausted());
}

#[test]
fn test_mixed_snap_backs_do_not_advance() {
    let mut state = deck(2);
    swipe(&mut state, 60.0, 0.0);
    swipe(&mut state, -99.0, 10.0);
    assert_resting_at(&state, 0);

    swipe_and_settle(&mut state, 150.0);
    swipe(&mut state, 100.0, 0.0);
    assert_resting_at(&state, 1);
}

#[test]
fn test_rapid_swipes_outrun_the_settle_timer() {
    // Three commits in quick succession, each starting before the previous
    // settle fires. Fast-forwarding keeps the index consistent and every
    // stale timer callback is a no-op.
    let mut state = animated_deck(3);
    let mut stale = Vec::new();
    for _ in 0..3 {
        stale.push(settle_ticket(swipe(&mut state, 200.0, 0.0)));
    }
    // Each begin_drag applied the previous pending advance.
    assert_eq!(state.top_index(), 2);

    let live = stale.pop().unwrap();
    for ticket in stale {
        assert!(!state.finish_settle(ticket));
    }
    assert_eq!(state.top_index(), 2);

    assert!(state.finish_settle(live));
    assert_resting_at(&state, 3);
    assert!(state.is_exhausted());
}

#[test]
fn test_commits_past_exhaustion_stay_clamped() {
    let mut state = deck(2);
    for _ in 0..4 {
        swipe(&mut state, 300.0, 0.0);
    }
    assert_eq!(state.top_index(), 2);
    assert!(state.is_exhausted());
}

#[test]
fn test_drag_phase_survives_many_updates() {
    let mut state = deck(3);
    state.begin_drag();
    for step in 1..=20 {
        state.update_drag(Translation::new(step as f32 * 6.0, step as f32));
        assert_eq!(state.phase(), SwipePhase::Dragging);
    }
    assert_eq!(state.live_offset(), Translation::new(120.0, 20.0));
    assert_eq!(state.commit_drag(state.live_offset()), DragOutcome::Advanced);
}
