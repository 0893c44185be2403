//! Mouse input handling for the card stack.
//!
//! The drag recognizer is deliberately simple: mouse-down on the top card
//! arms a drag, every mouse-move reports the cumulative translation from the
//! press origin, and mouse-up asks the interaction core for the swipe
//! decision. Listeners for move/up live on the stack container so a drag
//! keeps tracking after the pointer leaves the card's bounds.
//!
//! ## Modules
//!
//! - `state` - Pointer state machine (idle vs. dragging-from-origin)
//! - `mouse_down` - Drag start on the top card
//! - `drag` - Mouse move handling (live translation updates)
//! - `mouse_up` - Drag end (swipe decision, settle scheduling)

mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use state::PointerState;
