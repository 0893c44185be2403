//! Construction, builder-style configuration, and settle scheduling.

use std::rc::Rc;
use std::time::Duration;

use gpui::{AnyElement, Context};

use super::state::{CardStack, StackConfig, SwipeBackRequest};
use crate::constants::SETTLE_DELAY_MS;
use crate::interaction::{InteractionState, SettleTicket};

impl<D: 'static> CardStack<D> {
    /// Create a stack over `cards`, rendering each card's content with
    /// `card_view`.
    ///
    /// Starts in deck layout with animations disabled; use the builder
    /// methods to configure before first render.
    pub fn new(cards: Vec<D>, card_view: impl Fn(&D) -> AnyElement + 'static) -> Self {
        let interaction = InteractionState::new(cards.len(), false);
        Self {
            cards,
            interaction,
            pointer: Default::default(),
            swipe_back_request: None,
            config: StackConfig::default(),
            card_view: Rc::new(card_view),
        }
    }

    /// Enable or disable the off-screen fly-out animation for committed
    /// swipes. Disabled, the index advances synchronously on release.
    pub fn animated(mut self, animated: bool) -> Self {
        self.interaction.set_animated(animated);
        self
    }

    /// Configure deck layout: non-top cards rest centered under the top
    /// card.
    pub fn deck(mut self) -> Self {
        self.interaction.set_deck();
        self
    }

    /// Configure carousel layout: cards spread horizontally by `spacing`
    /// relative to the top card.
    pub fn carousel(mut self, spacing: f32) -> Self {
        self.interaction.set_carousel(spacing);
        self
    }

    /// Bind an external one-shot swipe-back trigger. The stack consumes
    /// pending requests at render time.
    pub fn with_swipe_back(mut self, request: SwipeBackRequest) -> Self {
        self.swipe_back_request = Some(request);
        self
    }

    /// Override the card size in pixels.
    pub fn with_card_size(mut self, width: f32, height: f32) -> Self {
        self.config.card_size = (width, height);
        self
    }

    /// Override the painted surface colors.
    pub fn with_colors(mut self, colors: super::state::CardColors) -> Self {
        self.config.colors = colors;
        self
    }

    /// Read-only access to the interaction core, mainly for embedders that
    /// want to reflect progress (e.g. "card 3 of 10").
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Programmatically bring the previous card back. Silent no-op at the
    /// first card.
    pub fn swipe_back(&mut self, cx: &mut Context<Self>) {
        if let Some(ticket) = self.interaction.swipe_back() {
            self.schedule_settle(ticket, cx);
            cx.notify();
        }
    }

    /// Schedule the deferred settle mutation for `ticket`.
    ///
    /// Fire-and-forget: if the ticket has gone stale by the time the timer
    /// fires (a new drag fast-forwarded the settle), `finish_settle` ignores
    /// it and no re-render is requested.
    pub(crate) fn schedule_settle(&mut self, ticket: SettleTicket, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(SETTLE_DELAY_MS))
                .await;
            this.update(cx, |this, cx| {
                if this.interaction.finish_settle(ticket) {
                    cx.notify();
                }
            })
            .ok();
        })
        .detach();
    }

    /// Consume a pending external swipe-back request, if any. Called at the
    /// top of every render so a request takes effect on the very next frame.
    pub(crate) fn consume_swipe_back_request(&mut self, cx: &mut Context<Self>) {
        let requested = self
            .swipe_back_request
            .as_ref()
            .is_some_and(SwipeBackRequest::take);
        if requested {
            self.swipe_back(cx);
        }
    }
}
