//! Stack rendering - composes the card slots and wires the drag listeners.
//!
//! Cards are rendered back-to-front: indices run from the end of the
//! collection down to the top index, so the top card is pushed last and
//! paints on top. Indices below the top index are skipped entirely - swiped
//! cards leave the tree, and an exhausted stack renders an empty container.

use gpui::*;

use super::card::render_card_surface;
use crate::profile_scope;
use crate::stack::{CardStack, StackConfig};
use crate::types::CardTransform;

impl<D: 'static> Render for CardStack<D> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_card_stack");

        self.consume_swipe_back_request(cx);

        let top = self.interaction.top_index();
        let count = self.interaction.card_count();
        let config = self.config;

        let mut stack = div()
            .relative()
            .size_full()
            .overflow_hidden()
            // Move/up listeners live on the container so a drag keeps
            // tracking once the pointer leaves the card's bounds.
            .on_mouse_move(cx.listener(|this, event, window, cx| {
                this.handle_mouse_move(event, window, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, event, window, cx| {
                    this.handle_mouse_up(event, window, cx);
                }),
            );

        for index in (top..count).rev() {
            let transform = self.interaction.transform_for(index);
            let content = (self.card_view)(&self.cards[index]);
            let mut slot = render_card_slot(transform, &config, content);

            // Drag recognizer on the top card only.
            if index == top {
                slot = slot.on_mouse_down(
                    MouseButton::Left,
                    cx.listener(|this, event, window, cx| {
                        this.handle_card_mouse_down(event, window, cx);
                    }),
                );
            }
            stack = stack.child(slot);
        }

        stack
    }
}

/// Build the positioned wrapper for one card: centered in the container,
/// displaced by the card's offset, sized by its scale. The painted surface
/// carries the rotation; the content layer stays axis-aligned above it.
fn render_card_slot(transform: CardTransform, config: &StackConfig, content: AnyElement) -> Div {
    let (width, height) = config.card_size;
    let scaled_w = width * transform.scale;
    let scaled_h = height * transform.scale;

    div()
        .absolute()
        .left(relative(0.5))
        .top(relative(0.5))
        // Negative margins center the card on the 50% anchor; the drag
        // offset rides on top of them.
        .ml(px(-scaled_w / 2.0 + transform.offset.dx))
        .mt(px(-scaled_h / 2.0 + transform.offset.dy))
        .w(px(scaled_w))
        .h(px(scaled_h))
        .child(render_card_surface(transform.rotation, config.colors))
        .child(
            div()
                .absolute()
                .top_0()
                .left_0()
                .size_full()
                .flex()
                .items_center()
                .justify_center()
                .overflow_hidden()
                .child(content),
        )
}
