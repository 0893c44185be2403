//! Core value types for the card stack.
//!
//! These are the plain-data types shared between the interaction core and the
//! presentation layer: drag translations, layout modes, and the per-card
//! transform triple handed to the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::BACK_CARD_SCALE;

// ============================================================================
// Translation
// ============================================================================

/// A cumulative drag translation (or a resting offset) in the host's
/// coordinate space. Positive `dx` is rightward, positive `dy` is downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f32,
    pub dy: f32,
}

impl Translation {
    /// The zero translation - a card at rest.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Returns true if this translation is exactly zero on both axes.
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

// ============================================================================
// Layout Mode
// ============================================================================

/// How non-top cards are positioned relative to the top card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Cards stack on top of each other; only the top card moves.
    #[default]
    Deck,
    /// Cards spread horizontally by a constant spacing relative to the top
    /// card's position.
    Carousel,
}

impl LayoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deck => "deck",
            Self::Carousel => "carousel",
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown layout mode name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout mode: {0:?} (expected \"deck\" or \"carousel\")")]
pub struct ParseLayoutModeError(pub String);

impl FromStr for LayoutMode {
    type Err = ParseLayoutModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deck" => Ok(Self::Deck),
            "carousel" => Ok(Self::Carousel),
            other => Err(ParseLayoutModeError(other.to_string())),
        }
    }
}

// ============================================================================
// Swipe Direction
// ============================================================================

/// Horizontal direction of a committed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Classify a horizontal drag distance. Zero counts as rightward, which
    /// matches the sign convention of the fling (`dx > 0 ? 1 : -1` flips only
    /// for strictly negative drags).
    pub fn of(dx: f32) -> Self {
        if dx > 0.0 { Self::Right } else { Self::Left }
    }

    /// Unit sign multiplier for this direction.
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

// ============================================================================
// Card Transform
// ============================================================================

/// The declarative transform triple emitted for each rendered card.
///
/// The presentation layer (or an embedding host) applies these as visual
/// transforms; the interaction core only computes them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    /// Positional offset from the card's resting position.
    pub offset: Translation,
    /// Uniform scale factor (1.0 for the top card).
    pub scale: f32,
    /// Rotation in degrees, positive clockwise.
    pub rotation: f32,
}

impl CardTransform {
    /// The transform of a non-top card at rest, also returned for
    /// out-of-range index queries.
    pub const NEUTRAL: Self = Self {
        offset: Translation::ZERO,
        scale: BACK_CARD_SCALE,
        rotation: 0.0,
    };

    /// Returns true if this transform leaves the card at its resting
    /// position with no tilt.
    pub fn is_resting(&self) -> bool {
        self.offset.is_zero() && self.rotation == 0.0
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset={} scale={} rotation={}",
            self.offset, self.scale, self.rotation
        )
    }
}
