//! Unit tests for the swipe-back command channel.

use cardstack::SwipeBackRequest;

#[test]
fn test_request_starts_clear() {
    let request = SwipeBackRequest::new();
    assert!(!request.is_requested());
    assert!(!request.take());
}

#[test]
fn test_take_consumes_exactly_once() {
    let request = SwipeBackRequest::new();
    request.request();
    assert!(request.is_requested());
    assert!(request.take());
    // Already consumed.
    assert!(!request.is_requested());
    assert!(!request.take());
}

#[test]
fn test_clones_share_the_flag() {
    let embedder_side = SwipeBackRequest::new();
    let stack_side = embedder_side.clone();
    embedder_side.request();
    assert!(stack_side.take());
    assert!(!embedder_side.is_requested());
}

#[test]
fn test_repeated_requests_before_take_collapse_to_one() {
    let request = SwipeBackRequest::new();
    request.request();
    request.request();
    assert!(request.take());
    assert!(!request.take());
}
