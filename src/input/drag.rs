//! Drag operations - live translation updates while the top card follows
//! the pointer.
//!
//! ## Performance Notes
//!
//! Mouse move fires very frequently during a drag (60+ times per second).
//! The handler exits early when no drag is active and performs a single
//! state update per move.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use gpui::{Context, MouseMoveEvent, Window};

use crate::profile_scope;
use crate::stack::CardStack;

impl<D: 'static> CardStack<D> {
    /// Forward the cumulative drag translation into the interaction core.
    /// Attached to the stack container so the drag keeps tracking after the
    /// pointer leaves the card's bounds.
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_move");

        let Some(translation) = self.pointer.translation_to(event.position) else {
            return;
        };

        self.interaction.update_drag(translation);
        cx.notify();
    }
}
