//! The `CardStack` view - gpui presentation adapter over the interaction
//! core.
//!
//! ## Modules
//!
//! - `state` - The `CardStack` struct, its configuration, and the one-shot
//!   swipe-back command channel
//! - `lifecycle` - Construction, builder-style configuration, and settle
//!   timer scheduling

mod lifecycle;
mod state;

pub use state::{CardColors, CardStack, StackConfig, SwipeBackRequest};
