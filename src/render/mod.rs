//! Card stack rendering - the `Render` implementation and the GPU-painted
//! card surface.
//!
//! ## Modules
//!
//! - `stack` - Stack container, per-card slots, and listener wiring
//! - `card` - Painted card surface (rotated quad for the top card) and the
//!   default text card content

mod card;
mod stack;

pub use card::text_card;
