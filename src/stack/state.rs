//! View state - the `CardStack` struct definition and its sub-structs.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{AnyElement, Hsla, hsla};

use crate::constants::DEFAULT_CARD_SIZE;
use crate::input::PointerState;
use crate::interaction::InteractionState;

/// One-shot swipe-back command channel.
///
/// An embedder keeps one clone and calls [`request`](Self::request); the
/// stack observes the flag on its next render, invokes the swipe-back, and
/// clears it. Fire-once semantics: each `request` triggers at most one
/// swipe-back.
///
/// `Rc<Cell>` rather than anything synchronized: the stack and its embedder
/// live on the UI thread by contract.
#[derive(Clone, Default)]
pub struct SwipeBackRequest {
    flag: Rc<Cell<bool>>,
}

impl SwipeBackRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the bound stack to swipe back on its next render.
    pub fn request(&self) {
        self.flag.set(true);
    }

    /// True if a request is pending and not yet consumed.
    pub fn is_requested(&self) -> bool {
        self.flag.get()
    }

    /// Consume a pending request, clearing the flag. Returns whether one was
    /// pending.
    pub fn take(&self) -> bool {
        self.flag.replace(false)
    }
}

/// Colors for the painted card surface.
///
/// Defaults mirror a plain white card with a soft border and shadow; hosts
/// with a theme can substitute their own values.
#[derive(Clone, Copy, Debug)]
pub struct CardColors {
    /// Card background fill.
    pub surface: Hsla,
    /// Card border.
    pub border: Hsla,
    /// Drop shadow under the card.
    pub shadow: Hsla,
}

impl Default for CardColors {
    fn default() -> Self {
        Self {
            surface: hsla(0.0, 0.0, 1.0, 1.0),
            border: hsla(0.0, 0.0, 0.85, 1.0),
            shadow: hsla(0.0, 0.0, 0.0, 0.18),
        }
    }
}

/// Visual configuration for the stack, separate from the interaction state.
#[derive(Clone, Copy, Debug)]
pub struct StackConfig {
    /// Card size in pixels (width, height) before scaling.
    pub card_size: (f32, f32),
    /// Surface colors for the painted card background.
    pub colors: CardColors,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card_size: DEFAULT_CARD_SIZE,
            colors: CardColors::default(),
        }
    }
}

/// A swipeable stack of cards.
///
/// Generic over the card data `D`; the `card_view` closure turns each card
/// datum into its rendered content, while the stack itself owns positioning,
/// the painted card surface, and the drag interaction.
pub struct CardStack<D> {
    /// Ordered card data; immutable for the widget's lifetime. Identity is
    /// positional.
    pub(crate) cards: Vec<D>,
    /// Swipe interaction core (top index, live offset, layout, settle).
    pub(crate) interaction: InteractionState,
    /// Pointer state machine for the active drag.
    pub(crate) pointer: PointerState,
    /// Optional external swipe-back command channel.
    pub(crate) swipe_back_request: Option<SwipeBackRequest>,
    /// Visual configuration.
    pub(crate) config: StackConfig,
    /// Renders the content of a single card.
    pub(crate) card_view: Rc<dyn Fn(&D) -> AnyElement>,
}
