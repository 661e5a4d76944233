use cardflip_core::{CardSlot, Deck, Scoreboard};
use cardflip_ui::{CardBoard, GlossaryPanel, QuestionPanel, ResultPanel, ScorePanel};
use dioxus::prelude::*;

use crate::{board_settings, BoardSettings};
use crate::theme::GLOBAL_STYLES;

/// Deck for the next round, reshuffled when the board asks for it.
fn deal(settings: &BoardSettings) -> Deck {
    let mut deck = settings.deck.clone();
    if settings.shuffle {
        deck.shuffle(&mut rand::rng());
    }
    deck
}

/// Root application component.
///
/// Holds the round: its deck, score and the currently opened card. The board
/// owns flip state and is remounted (keyed by round number) to start over
/// with a fresh controller.
#[component]
pub fn App() -> Element {
    let settings = use_hook(board_settings);
    let card_count = settings.deck.len();
    let round_size = settings.controller.round_size(card_count);

    let mut round = use_signal(|| 1usize);
    let mut deck = use_signal(|| deal(&settings));
    let mut scoreboard = use_signal(|| Scoreboard::new(card_count));
    let mut open = use_signal(|| None::<CardSlot>);
    let mut studying = use_signal(|| !settings.glossary.is_empty());

    let settings_for_round = settings.clone();
    let mut new_round = move || {
        let next = round() + 1;
        tracing::info!(round = next, "starting new round");
        deck.set(deal(&settings_for_round));
        scoreboard.set(Scoreboard::new(card_count));
        open.set(None);
        round.set(next);
    };

    let current = deck();
    let opened = open().and_then(|slot| current.get(slot.0).cloned().map(|card| (slot, card)));
    let finished = scoreboard.read().is_complete(round_size);
    let summary = scoreboard.read().summary(round_size);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "Card Flip" }
                ScorePanel {
                    score: summary.score,
                    answered: summary.answered,
                    total: summary.total,
                }
                button {
                    class: "option-btn app-header__study",
                    onclick: move |_| studying.set(true),
                    "study"
                }
            }
            if studying() {
                GlossaryPanel {
                    glossary: settings.glossary.clone(),
                    on_close: move |_| studying.set(false),
                }
            }
            // A new key per round remounts the board with a fresh controller.
            for board_round in [round()] {
                CardBoard {
                    key: "{board_round}",
                    deck: current.clone(),
                    config: settings.controller,
                    on_open: move |slot: CardSlot| open.set(Some(slot)),
                }
            }
            if finished {
                ResultPanel {
                    summary: summary,
                    on_new_round: move |_| new_round(),
                }
            } else if let Some((slot, card)) = opened {
                QuestionPanel {
                    number: slot.0 + 1,
                    card: card,
                    feedback: scoreboard.read().feedback(slot.0).cloned(),
                    on_answer: move |choice: usize| {
                        let result = scoreboard.write().answer(slot.0, choice, &deck.read());
                        if let Err(e) = result {
                            tracing::warn!("Failed to record answer: {}", e);
                        }
                    },
                    on_close: move |_| open.set(None),
                }
            }
        }
    }
}
