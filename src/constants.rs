//! Crate-wide constants.
//!
//! Centralizes magic numbers and interaction tuning values to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Swipe Interaction
// ============================================================================

/// Minimum horizontal drag distance required to commit a card transition.
///
/// Drags at or below this distance snap back to center on release.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// Horizontal distance a committed card is flung off-screen before the
/// deferred index advance removes it from the interactive stack.
pub const FLING_DISTANCE: f32 = 1000.0;

/// Delay in milliseconds between a fling (or swipe-back) starting and the
/// follow-up state mutation, letting the transition visually complete first.
pub const SETTLE_DELAY_MS: u64 = 300;

// ============================================================================
// Card Transforms
// ============================================================================

/// Scale applied to every card except the top one.
pub const BACK_CARD_SCALE: f32 = 0.95;

/// Divisor converting horizontal drag distance into rotation degrees.
///
/// A 200px drag tilts the top card by 10 degrees.
pub const ROTATION_DIVISOR: f32 = 20.0;

// ============================================================================
// Layout Defaults
// ============================================================================

/// Default horizontal spacing between cards in carousel layout.
pub const DEFAULT_CAROUSEL_SPACING: f32 = 300.0;

/// Default card size in pixels (width, height).
pub const DEFAULT_CARD_SIZE: (f32, f32) = (300.0, 420.0);

/// Corner radius of the painted card surface.
pub const CARD_CORNER_RADIUS: f32 = 10.0;

/// Border width of the painted card surface.
pub const CARD_BORDER_WIDTH: f32 = 1.0;
