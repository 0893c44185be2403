//! Pointer state machine - tracks the press origin of an active drag.
//!
//! The host gesture events deliver absolute pointer positions; the
//! interaction core wants cumulative translations from drag start. This
//! small machine owns that conversion.

use gpui::{Pixels, Point};

use crate::types::Translation;

/// Whether the pointer is currently dragging the top card, and from where.
#[derive(Debug, Clone, Copy, Default)]
pub enum PointerState {
    /// No active drag.
    #[default]
    Idle,
    /// Dragging; `origin` is the pointer position at mouse-down.
    Dragging { origin: Point<Pixels> },
}

impl PointerState {
    /// Returns true if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Arm a drag starting at `origin`.
    pub fn start(&mut self, origin: Point<Pixels>) {
        *self = Self::Dragging { origin };
    }

    /// Reset to idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Cumulative translation from the drag origin to `position`, or `None`
    /// when no drag is active.
    pub fn translation_to(&self, position: Point<Pixels>) -> Option<Translation> {
        match self {
            Self::Idle => None,
            Self::Dragging { origin } => Some(Translation::new(
                f32::from(position.x - origin.x),
                f32::from(position.y - origin.y),
            )),
        }
    }
}
