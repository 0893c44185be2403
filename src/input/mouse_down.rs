//! Mouse down event handling - drag start on the top card.

use gpui::{Context, MouseDownEvent, Window};

use crate::profile_scope;
use crate::stack::CardStack;

impl<D: 'static> CardStack<D> {
    /// Begin dragging the top card. Attached only to the top card's element,
    /// so an exhausted stack never receives this event.
    pub fn handle_card_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_card_mouse_down");

        if self.interaction.is_exhausted() {
            return;
        }

        self.interaction.begin_drag();
        self.pointer.start(event.position);
        cx.notify();
    }
}
