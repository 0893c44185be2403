//! Mouse up event handling - the swipe decision.

use gpui::{Context, MouseUpEvent, Window};

use crate::interaction::DragOutcome;
use crate::profile_scope;
use crate::stack::CardStack;

impl<D: 'static> CardStack<D> {
    /// Finish the active drag: ask the interaction core for the swipe
    /// decision and schedule the settle timer when the card is flinging.
    pub fn handle_mouse_up(
        &mut self,
        event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_up");

        let Some(translation) = self.pointer.translation_to(event.position) else {
            return;
        };
        self.pointer.reset();

        match self.interaction.commit_drag(translation) {
            DragOutcome::Settling { ticket, .. } => self.schedule_settle(ticket, cx),
            DragOutcome::Advanced | DragOutcome::SnapBack => {}
        }
        cx.notify();
    }
}
