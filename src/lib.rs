//! Swipeable card-stack widget for gpui.
//!
//! Renders an ordered collection of cards, lets the user drag the topmost
//! one, and advances to the next card once a drag passes a horizontal
//! distance threshold. Supports two layouts (stacked deck, horizontally
//! spread carousel), an optional off-screen fly-out animation for committed
//! swipes, and a programmatic swipe-back channel for bringing the previous
//! card back.
//!
//! The crate splits cleanly in two:
//!
//! - [`interaction`] - a pure, gpui-free state machine owning the top card
//!   index, the live drag offset, and the settle bookkeeping. Every per-card
//!   transform (offset, scale, rotation) is derived from it.
//! - [`stack`], [`input`], [`render`] - the gpui presentation adapter: a
//!   [`CardStack`] view that forwards mouse events into the core and
//!   re-derives card transforms on every state change.
//!
//! ```ignore
//! let swipe_back = SwipeBackRequest::new();
//! let stack = cx.new(|_| {
//!     CardStack::new(vec!["First", "Second", "Third"], |title| text_card(*title))
//!         .animated(true)
//!         .carousel(120.0)
//!         .with_swipe_back(swipe_back.clone())
//! });
//! // Later, from anywhere on the UI thread:
//! swipe_back.request();
//! ```

pub mod constants;
pub mod input;
pub mod interaction;
pub mod perf;
pub mod render;
pub mod stack;
pub mod types;

pub use interaction::{DragOutcome, InteractionState, PendingSettle, SettleTicket, SwipePhase};
pub use render::text_card;
pub use stack::{CardColors, CardStack, StackConfig, SwipeBackRequest};
pub use types::{CardTransform, LayoutMode, ParseLayoutModeError, SwipeDirection, Translation};
