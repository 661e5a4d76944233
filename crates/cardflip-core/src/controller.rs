//! Card flip controller.
//!
//! The controller is built once from an explicit card collection. Each card is
//! bound to a [`CardSlot`] (its position in that collection), and every
//! activation is routed through the single [`flip`] handler with the bound
//! card passed as an argument.
//!
//! ## State machine
//!
//! ```text
//!   Unflipped ──activation──▶ Flipped ──activation──▶ Flipped (no-op)
//! ```
//!
//! Execution is single-threaded and run-to-completion: the controller is not
//! `Sync`, and each activation finishes before the next one is dispatched.

use std::cell::Cell;

use tracing::{debug, info, trace};

use crate::card::{CardHandle, FlipState, CARD_SELECTOR};
use crate::config::ControllerConfig;

/// Position of a card in the collection the controller was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardSlot(pub usize);

/// Primary activation (click, tap) delivered to one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationEvent {
    pub target: CardSlot,
}

impl ActivationEvent {
    pub fn on(target: CardSlot) -> Self {
        Self { target }
    }
}

/// Result of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The card moved from unflipped to flipped and the marker was applied.
    Flipped,
    /// The card was already flipped; nothing changed.
    AlreadyFlipped,
    /// The flip limit has been reached; the card stays unflipped.
    BudgetExhausted,
    /// No card is bound to the target slot.
    Detached,
}

impl FlipOutcome {
    /// True only for an effective transition.
    pub fn changed(&self) -> bool {
        matches!(self, FlipOutcome::Flipped)
    }

    /// Whether the host may open the card's detail view after this activation.
    ///
    /// The flip has always been applied by the time this is consulted.
    pub fn may_navigate(&self) -> bool {
        matches!(self, FlipOutcome::Flipped | FlipOutcome::AlreadyFlipped)
    }
}

/// A document that can be queried for card elements.
pub trait CardSource {
    type Card: CardHandle;

    /// All elements matching `selector`, in document order.
    fn query_cards(&self, selector: &str) -> Vec<Self::Card>;
}

/// Find every card currently present in `source`.
///
/// An empty result is valid.
pub fn discover<S: CardSource>(source: &S) -> Vec<S::Card> {
    source.query_cards(CARD_SELECTOR)
}

/// The activation handler.
///
/// Applies the marker to an unflipped card. An already flipped card is left
/// untouched and the marker is not applied again.
pub fn flip<H: CardHandle + ?Sized>(card: &H) -> FlipOutcome {
    if card.is_flipped() {
        return FlipOutcome::AlreadyFlipped;
    }
    card.mark_flipped();
    FlipOutcome::Flipped
}

/// Binds a fixed set of cards to the flip handler.
pub struct CardFlipController<H: CardHandle> {
    bindings: Vec<H>,
    config: ControllerConfig,
    flips: Cell<usize>,
}

impl<H: CardHandle> CardFlipController<H> {
    /// Bind every card in `cards` with an unlimited flip policy.
    pub fn initialize(cards: impl IntoIterator<Item = H>) -> Self {
        Self::with_config(cards, ControllerConfig::default())
    }

    /// Bind every card in `cards` under `config`.
    ///
    /// Each card gets exactly one binding. Cards added to the host afterwards
    /// are not picked up.
    pub fn with_config(cards: impl IntoIterator<Item = H>, config: ControllerConfig) -> Self {
        let bindings: Vec<H> = cards.into_iter().collect();

        info!(
            cards = bindings.len(),
            max_flips = ?config.max_flips,
            "card flip controller ready"
        );

        Self {
            bindings,
            config,
            flips: Cell::new(0),
        }
    }

    /// Discover cards in `source` and bind them.
    pub fn from_source<S>(source: &S, config: ControllerConfig) -> Self
    where
        S: CardSource<Card = H>,
    {
        Self::with_config(discover(source), config)
    }

    /// Route an activation event to its card.
    pub fn dispatch(&self, event: ActivationEvent) -> FlipOutcome {
        let slot = event.target;
        let Some(card) = self.bindings.get(slot.0) else {
            trace!(slot = slot.0, "activation on unbound slot ignored");
            return FlipOutcome::Detached;
        };

        if !card.is_flipped() && self.budget_exhausted() {
            debug!(slot = slot.0, "flip limit reached");
            return FlipOutcome::BudgetExhausted;
        }

        let outcome = flip(card);
        match outcome {
            FlipOutcome::Flipped => {
                self.flips.set(self.flips.get() + 1);
                debug!(slot = slot.0, flips = self.flips.get(), "card flipped");
            }
            _ => trace!(slot = slot.0, "card already flipped"),
        }
        outcome
    }

    /// Shorthand for dispatching an activation on `slot`.
    pub fn activate(&self, slot: CardSlot) -> FlipOutcome {
        self.dispatch(ActivationEvent::on(slot))
    }

    /// Current state of the card bound to `slot`.
    pub fn state(&self, slot: CardSlot) -> Option<FlipState> {
        self.bindings.get(slot.0).map(|card| card.state())
    }

    pub fn card(&self, slot: CardSlot) -> Option<&H> {
        self.bindings.get(slot.0)
    }

    /// Bound cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = (CardSlot, &H)> {
        self.bindings
            .iter()
            .enumerate()
            .map(|(i, card)| (CardSlot(i), card))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of cards currently showing the flipped marker.
    pub fn flipped_count(&self) -> usize {
        self.bindings.iter().filter(|card| card.is_flipped()).count()
    }

    /// Flips left under the configured limit, or `None` when unlimited.
    pub fn remaining_flips(&self) -> Option<usize> {
        self.config
            .max_flips
            .map(|max| max.saturating_sub(self.flips.get()))
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    fn budget_exhausted(&self) -> bool {
        self.remaining_flips() == Some(0)
    }
}
