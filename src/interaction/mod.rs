//! Swipe interaction core - pure state plus derived-transform computation.
//!
//! This module owns everything the widget knows about the current swipe:
//! which card is on top, the live drag offset, the layout mode, and whether
//! a deferred settle is pending. It has no gpui dependency and performs no
//! rendering; the presentation layer in [`crate::stack`] forwards gesture
//! events in and reads per-card transforms out.
//!
//! ## Modules
//!
//! - `state` - The `InteractionState` machine and its operations

mod state;

pub use state::{DragOutcome, InteractionState, PendingSettle, SettleTicket, SwipePhase};
