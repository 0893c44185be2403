//! Integration tests for the programmatic swipe-back reversal.

use cardstack::{PendingSettle, SwipePhase, Translation};

use crate::helpers::{animated_deck, assert_resting_at, deck, settle_ticket, swipe, swipe_and_settle};

#[test]
fn test_swipe_forward_then_back_round_trip() {
    let mut state = deck(3);
    swipe_and_settle(&mut state, 200.0);
    assert_resting_at(&state, 1);

    let ticket = state.swipe_back().unwrap();
    assert_eq!(state.top_index(), 0);
    assert_eq!(state.live_offset(), Translation::new(-1000.0, 0.0));
    assert!(matches!(
        state.phase(),
        SwipePhase::Settling {
            pending: PendingSettle::Restore,
            ..
        }
    ));

    assert!(state.finish_settle(ticket));
    assert_resting_at(&state, 0);
}

#[test]
fn test_swipe_back_repeated_to_the_first_card() {
    let mut state = deck(3);
    swipe_and_settle(&mut state, 200.0);
    swipe_and_settle(&mut state, 200.0);
    assert_resting_at(&state, 2);

    for expected_top in [1, 0] {
        let ticket = state.swipe_back().unwrap();
        assert_eq!(state.top_index(), expected_top);
        assert!(state.finish_settle(ticket));
    }

    // At the first card the command is a silent no-op.
    assert_eq!(state.swipe_back(), None);
    assert_resting_at(&state, 0);
}

#[test]
fn test_swipe_back_during_pending_advance_fast_forwards() {
    let mut state = animated_deck(3);
    let advance = settle_ticket(swipe(&mut state, 200.0, 0.0));
    assert_eq!(state.top_index(), 0);

    // The pending advance applies first (index 0 -> 1), then the swipe-back
    // takes it straight back down.
    let back = state.swipe_back().unwrap();
    assert_eq!(state.top_index(), 0);
    assert_eq!(state.live_offset(), Translation::new(-1000.0, 0.0));

    assert!(!state.finish_settle(advance));
    assert!(state.finish_settle(back));
    assert_resting_at(&state, 0);
}

#[test]
fn test_swipe_back_from_first_card_with_pending_restore() {
    let mut state = deck(2);
    swipe_and_settle(&mut state, 200.0);
    let first = state.swipe_back().unwrap();

    // A second swipe-back before the first settles: the fast-forwarded state
    // is already at the first card, so nothing more happens.
    assert_eq!(state.swipe_back(), None);
    assert_resting_at(&state, 0);
    assert!(!state.finish_settle(first));
}

#[test]
fn test_drag_interrupting_a_swipe_back() {
    let mut state = animated_deck(2);
    swipe_and_settle(&mut state, 200.0);
    let back = state.swipe_back().unwrap();

    // The user grabs the returning card before it finishes flying in. The
    // restore applies immediately and the drag proceeds from rest.
    state.begin_drag();
    assert_eq!(state.top_index(), 0);
    assert_eq!(state.live_offset(), Translation::ZERO);
    assert_eq!(state.phase(), SwipePhase::Dragging);
    assert!(!state.finish_settle(back));
}

#[test]
fn test_swipe_back_reopens_an_exhausted_stack() {
    let mut state = deck(1);
    swipe_and_settle(&mut state, 200.0);
    assert!(state.is_exhausted());

    let ticket = state.swipe_back().unwrap();
    assert_eq!(state.top_index(), 0);
    assert!(state.finish_settle(ticket));
    assert!(!state.is_exhausted());
}
