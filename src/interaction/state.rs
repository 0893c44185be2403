//! Interaction state machine - drag tracking, threshold detection, and
//! index advancement for the card stack.
//!
//! This replaces scattered offset/index fields with a single explicit state
//! machine, making impossible states unrepresentable and keeping the settle
//! bookkeeping in one place.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (begin_drag; pointer down on the top card)
//! Dragging -> Dragging   (update_drag; every drag-changed event)
//! Dragging -> Idle       (commit_drag below threshold - snap back)
//! Dragging -> Idle       (commit_drag above threshold, unanimated - advance now)
//! Dragging -> Settling   (commit_drag above threshold, animated - fling)
//! Idle     -> Settling   (swipe_back with top_index > 0)
//! Settling -> Idle       (finish_settle with a matching ticket)
//! Settling -> Dragging   (begin_drag fast-forwards the pending settle)
//! ```
//!
//! `Idle` with `top_index == card_count` is the quiescent exhausted state:
//! the presentation layer stops attaching gestures, so no further
//! transitions occur.

use crate::constants::{
    BACK_CARD_SCALE, DEFAULT_CAROUSEL_SPACING, FLING_DISTANCE, ROTATION_DIVISOR, SWIPE_THRESHOLD,
};
use crate::types::{CardTransform, LayoutMode, SwipeDirection, Translation};

/// Token identifying one scheduled settle. A settle timer hands its ticket
/// back to [`InteractionState::finish_settle`]; stale tickets (the settle was
/// fast-forwarded or superseded) are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket(u64);

/// The state mutation a pending settle will apply when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingSettle {
    /// A committed swipe: advance `top_index` and reset the offset.
    Advance,
    /// A swipe-back: the index was already decremented, only the reverse
    /// fling offset needs resetting.
    Restore,
}

/// Current interaction phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwipePhase {
    /// No active interaction.
    #[default]
    Idle,
    /// The top card is following the pointer.
    Dragging,
    /// A fling is visually completing; a deferred mutation is pending.
    Settling {
        pending: PendingSettle,
        ticket: SettleTicket,
    },
}

/// Outcome of a drag-end decision, telling the presentation layer what
/// transition to play and whether a settle needs scheduling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// Below threshold: the card snaps back to center, index unchanged.
    SnapBack,
    /// Above threshold, animations disabled: the index advanced synchronously.
    Advanced,
    /// Above threshold, animations enabled: the card is flinging off-screen;
    /// the caller must schedule `finish_settle(ticket)` after the settle
    /// delay.
    Settling {
        direction: SwipeDirection,
        ticket: SettleTicket,
    },
}

/// Per-widget swipe interaction state.
///
/// Single-threaded by contract: every operation is invoked from the UI
/// thread, and the only deferred work is the settle timer whose callback
/// re-enters through [`finish_settle`](Self::finish_settle).
#[derive(Clone, Debug)]
pub struct InteractionState {
    /// Number of cards in the collection; fixed for the widget's lifetime.
    card_count: usize,
    /// Index of the top (interactive) card. Invariant:
    /// `top_index <= card_count`; equality means the stack is exhausted.
    top_index: usize,
    /// Live drag offset of the top card; zero whenever not dragging or
    /// flinging.
    live_offset: Translation,
    /// Layout mode for non-top cards.
    layout: LayoutMode,
    /// Horizontal spacing between cards in carousel layout.
    carousel_spacing: f32,
    /// Whether threshold-exceeding swipes play a fling before advancing.
    animated: bool,
    /// Current phase of the interaction state machine.
    phase: SwipePhase,
    /// Monotonic counter backing settle tickets.
    next_ticket: u64,
}

impl InteractionState {
    /// Create the interaction state for a stack of `card_count` cards.
    pub fn new(card_count: usize, animated: bool) -> Self {
        Self {
            card_count,
            top_index: 0,
            live_offset: Translation::ZERO,
            layout: LayoutMode::default(),
            carousel_spacing: DEFAULT_CAROUSEL_SPACING,
            animated,
            phase: SwipePhase::default(),
            next_ticket: 0,
        }
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Enable or disable the fly-out animation for committed swipes.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    /// Switch to deck layout.
    pub fn set_deck(&mut self) {
        self.layout = LayoutMode::Deck;
    }

    /// Switch to carousel layout with the given spacing.
    pub fn set_carousel(&mut self, spacing: f32) {
        self.layout = LayoutMode::Carousel;
        self.carousel_spacing = spacing;
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn carousel_spacing(&self) -> f32 {
        self.carousel_spacing
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Index of the current top card; equals `card_count` once the stack is
    /// exhausted.
    pub fn top_index(&self) -> usize {
        self.top_index
    }

    /// True once every card has been swiped away.
    pub fn is_exhausted(&self) -> bool {
        self.top_index == self.card_count
    }

    pub fn live_offset(&self) -> Translation {
        self.live_offset
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Positional offset for the card at `index`.
    ///
    /// The top card always follows the live drag offset. Other cards rest at
    /// zero in deck layout, or spread horizontally by
    /// `(index - top_index) * spacing` in carousel layout (ahead of the top
    /// spreads rightward, behind spreads leftward). Out-of-range indices get
    /// the neutral zero offset.
    pub fn offset_for(&self, index: usize) -> Translation {
        if index >= self.card_count {
            return Translation::ZERO;
        }
        if index == self.top_index {
            return self.live_offset;
        }
        match self.layout {
            LayoutMode::Deck => Translation::ZERO,
            LayoutMode::Carousel => {
                let steps = index as isize - self.top_index as isize;
                Translation::new(steps as f32 * self.carousel_spacing, 0.0)
            }
        }
    }

    /// Scale for the card at `index`: full size on top, slightly shrunk
    /// behind.
    pub fn scale_for(&self, index: usize) -> f32 {
        if index == self.top_index && index < self.card_count {
            1.0
        } else {
            BACK_CARD_SCALE
        }
    }

    /// Rotation in degrees for the card at `index`. Only the top card tilts,
    /// linearly with horizontal drag distance, unclamped and signed (drag
    /// right tilts clockwise).
    pub fn rotation_for(&self, index: usize) -> f32 {
        if index == self.top_index && index < self.card_count {
            self.live_offset.dx / ROTATION_DIVISOR
        } else {
            0.0
        }
    }

    /// The full transform triple for the card at `index` - the output the
    /// presentation layer consumes every frame.
    pub fn transform_for(&self, index: usize) -> CardTransform {
        CardTransform {
            offset: self.offset_for(index),
            scale: self.scale_for(index),
            rotation: self.rotation_for(index),
        }
    }

    // ========================================================================
    // Drag lifecycle
    // ========================================================================

    /// Enter the dragging phase.
    ///
    /// If a settle is still pending from a previous fling or swipe-back, its
    /// mutation is applied immediately and the outstanding ticket
    /// invalidated, so the new drag starts from a consistent top card rather
    /// than racing the timer.
    pub fn begin_drag(&mut self) {
        if let SwipePhase::Settling { pending, ticket } = self.phase {
            tracing::debug!(?pending, ?ticket, "fast-forwarding pending settle");
            self.apply_settle(pending);
        }
        self.phase = SwipePhase::Dragging;
    }

    /// Record the latest cumulative drag translation for the top card.
    /// No threshold logic here; called on every drag-changed event.
    pub fn update_drag(&mut self, translation: Translation) {
        self.phase = SwipePhase::Dragging;
        self.live_offset = translation;
    }

    /// Evaluate the drag-end decision.
    ///
    /// A drag strictly beyond [`SWIPE_THRESHOLD`] horizontally commits the
    /// card: either synchronously (animations off) or via an off-screen
    /// fling whose index advance is deferred until the settle delay elapses.
    /// Anything else snaps back to center.
    pub fn commit_drag(&mut self, translation: Translation) -> DragOutcome {
        if translation.dx.abs() > SWIPE_THRESHOLD {
            let direction = SwipeDirection::of(translation.dx);
            if self.animated {
                // Fling off-screen in the drag direction; the card stays the
                // interactive top card until the settle fires.
                self.live_offset =
                    Translation::new(direction.sign() * FLING_DISTANCE, translation.dy);
                let ticket = self.issue_ticket();
                self.phase = SwipePhase::Settling {
                    pending: PendingSettle::Advance,
                    ticket,
                };
                tracing::trace!(?direction, ?ticket, "swipe committed, settling");
                DragOutcome::Settling { direction, ticket }
            } else {
                self.advance();
                self.live_offset = Translation::ZERO;
                self.phase = SwipePhase::Idle;
                tracing::trace!(?direction, top_index = self.top_index, "swipe committed");
                DragOutcome::Advanced
            }
        } else {
            self.live_offset = Translation::ZERO;
            self.phase = SwipePhase::Idle;
            tracing::trace!("swipe below threshold, snapping back");
            DragOutcome::SnapBack
        }
    }

    /// Programmatic reversal: bring the previous card back.
    ///
    /// Returns `None` (silent no-op) when already at the first card - a
    /// normal idle state, not an error. Otherwise the index decrements
    /// immediately, the revealed card is given a reverse fling offset, and
    /// the returned ticket must be settled after the settle delay to reset
    /// the offset.
    pub fn swipe_back(&mut self) -> Option<SettleTicket> {
        if self.top_index == 0 {
            tracing::trace!("swipe_back at first card ignored");
            return None;
        }
        if let SwipePhase::Settling { pending, ticket } = self.phase {
            tracing::debug!(?pending, ?ticket, "fast-forwarding pending settle");
            self.apply_settle(pending);
            if self.top_index == 0 {
                return None;
            }
        }
        self.top_index -= 1;
        self.live_offset = Translation::new(-FLING_DISTANCE, 0.0);
        let ticket = self.issue_ticket();
        self.phase = SwipePhase::Settling {
            pending: PendingSettle::Restore,
            ticket,
        };
        tracing::trace!(top_index = self.top_index, ?ticket, "swipe back started");
        Some(ticket)
    }

    /// Apply the deferred mutation of a settle timer.
    ///
    /// Returns `true` if the ticket matched the pending settle and state
    /// changed; `false` for stale tickets, which are a normal consequence of
    /// a new drag starting before the timer fired.
    pub fn finish_settle(&mut self, ticket: SettleTicket) -> bool {
        match self.phase {
            SwipePhase::Settling {
                pending,
                ticket: live,
            } if live == ticket => {
                self.apply_settle(pending);
                true
            }
            _ => {
                tracing::trace!(?ticket, "stale settle ticket ignored");
                false
            }
        }
    }

    // ========================================================================
    // Internal
    // ========================================================================

    fn apply_settle(&mut self, pending: PendingSettle) {
        if let PendingSettle::Advance = pending {
            self.advance();
        }
        self.live_offset = Translation::ZERO;
        self.phase = SwipePhase::Idle;
    }

    /// Advance the top index, clamped so it never exceeds the card count.
    fn advance(&mut self) {
        self.top_index = (self.top_index + 1).min(self.card_count);
    }

    fn issue_ticket(&mut self) -> SettleTicket {
        let ticket = SettleTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}
