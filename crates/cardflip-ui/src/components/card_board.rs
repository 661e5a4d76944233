//! Card Board Component
//!
//! Lays out one [`FlipCard`] per deck entry and owns the flip controller.

use std::rc::Rc;

use cardflip_core::{CardFlipController, CardSlot, ControllerConfig, Deck, FlipOutcome};
use dioxus::prelude::*;

use super::{FlipCard, SignalCard};

/// Status line under the board.
pub fn flips_left_label(remaining: Option<usize>) -> Option<String> {
    match remaining {
        None => None,
        Some(0) => Some("no flips left".to_string()),
        Some(1) => Some("1 flip left".to_string()),
        Some(n) => Some(format!("{} flips left", n)),
    }
}

/// Notice to show after an activation; `None` clears any earlier one.
pub fn flip_notice(outcome: FlipOutcome) -> Option<&'static str> {
    match outcome {
        FlipOutcome::BudgetExhausted => Some("every flip for this round is used"),
        _ => None,
    }
}

/// Grid of face-down cards
///
/// The controller is built on first render and bound to exactly the cards
/// in `deck` at that moment. A card is only opened (`on_open`) after its flip
/// has been applied.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CardBoard {
///         deck: Deck::sample(),
///         config: ControllerConfig::with_max_flips(3),
///         on_open: move |slot: CardSlot| open.set(Some(slot)),
///     }
/// }
/// ```
#[component]
pub fn CardBoard(
    /// Questions hidden under the cards, in board order
    deck: Deck,
    /// Flip policy for this board
    #[props(default)]
    config: ControllerConfig,
    /// Called after a card has been turned over and may be opened
    on_open: EventHandler<CardSlot>,
) -> Element {
    let card_count = deck.len();
    let controller = use_hook(move || {
        let cards = (0..card_count).map(|_| SignalCard::new());
        Rc::new(CardFlipController::with_config(cards, config))
    });
    let mut notice = use_signal(|| None::<String>);

    if controller.is_empty() {
        return rsx! {
            div { class: "card-board card-board--empty",
                p { class: "empty-state", "no cards on the board" }
            }
        };
    }

    let remaining = flips_left_label(controller.remaining_flips());

    rsx! {
        div { class: "card-board-section",
            div { class: "card-board",
                for ((slot, card), quiz) in controller.cards().zip(deck.cards().iter().cloned()) {
                    {
                        let controller = controller.clone();
                        rsx! {
                            FlipCard {
                                key: "{slot.0}",
                                number: slot.0 + 1,
                                question: quiz.question,
                                difficulty: quiz.difficulty,
                                flipped: card.flipped(),
                                onactivate: move |_| {
                                    let outcome = controller.activate(slot);
                                    if outcome == FlipOutcome::BudgetExhausted {
                                        tracing::debug!(slot = slot.0, "flip refused, no flips left");
                                    }
                                    let next = flip_notice(outcome).map(str::to_string);
                                    if *notice.peek() != next {
                                        notice.set(next);
                                    }
                                    if outcome.may_navigate() {
                                        tracing::debug!(slot = slot.0, ?outcome, "opening card");
                                        on_open.call(slot);
                                    }
                                },
                            }
                        }
                    }
                }
            }
            if let Some(label) = remaining {
                p { class: "card-board__status", "{label}" }
            }
            if let Some(message) = notice() {
                p { class: "card-board__notice", "{message}" }
            }
        }
    }
}
