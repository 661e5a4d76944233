//! Board-level scenarios for the card flip controller.

use cardflip_core::logging::CaptureLayer;
use cardflip_core::{
    ActivationEvent, CardFlipController, CardHandle, CardSlot, FlipOutcome, FlipState, MemoryCard,
};
use tracing_subscriber::prelude::*;

const A: CardSlot = CardSlot(0);
const B: CardSlot = CardSlot(1);
const C: CardSlot = CardSlot(2);

#[test]
fn three_cards_two_activations_on_a_one_on_b() {
    let cards = vec![MemoryCard::new(), MemoryCard::new(), MemoryCard::new()];
    let controller = CardFlipController::initialize(cards.clone());

    assert_eq!(controller.dispatch(ActivationEvent::on(A)), FlipOutcome::Flipped);
    assert_eq!(controller.dispatch(ActivationEvent::on(A)), FlipOutcome::AlreadyFlipped);
    assert_eq!(controller.dispatch(ActivationEvent::on(B)), FlipOutcome::Flipped);

    assert_eq!(controller.state(A), Some(FlipState::Flipped));
    assert_eq!(controller.state(B), Some(FlipState::Flipped));
    assert_eq!(controller.state(C), Some(FlipState::Unflipped));

    assert_eq!(cards[0].mark_count(), 1);
    assert_eq!(cards[1].mark_count(), 1);
    assert!(!cards[2].is_flipped());
}

#[test]
fn empty_board_emits_startup_trace() {
    let capture = CaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    let controller = tracing::subscriber::with_default(subscriber, || {
        CardFlipController::<MemoryCard>::initialize(Vec::new())
    });

    assert!(controller.is_empty());
    let ready = capture.matching("card flip controller ready");
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].level, "info");
    assert_eq!(ready[0].field("cards"), Some(&serde_json::json!(0)));
    assert!(capture.entries().iter().all(|e| e.level != "error"));
}

#[test]
fn startup_trace_is_emitted_once_per_initialize() {
    let capture = CaptureLayer::new();
    let subscriber = tracing_subscriber::registry().with(capture.clone());

    tracing::subscriber::with_default(subscriber, || {
        let controller = CardFlipController::initialize(vec![MemoryCard::new(), MemoryCard::new()]);
        controller.activate(A);
        controller.activate(A);
    });

    let ready = capture.matching("card flip controller ready");
    assert_eq!(ready.len(), 1);
    assert_eq!(ready[0].field("cards"), Some(&serde_json::json!(2)));
    assert_eq!(capture.matching("card flipped").len(), 1);
}

#[test]
fn every_bound_card_responds() {
    let cards: Vec<MemoryCard> = (0..8).map(|_| MemoryCard::new()).collect();
    let controller = CardFlipController::initialize(cards.clone());

    for (slot, _) in controller.cards() {
        assert_eq!(controller.activate(slot), FlipOutcome::Flipped);
    }
    assert!(cards.iter().all(|c| c.is_flipped() && c.mark_count() == 1));
    assert_eq!(controller.flipped_count(), cards.len());
}

#[test]
fn reinitializing_the_same_cards_adds_no_visible_effect() {
    let cards = vec![MemoryCard::new()];
    let first = CardFlipController::initialize(cards.clone());
    let second = CardFlipController::initialize(cards.clone());

    assert_eq!(first.activate(A), FlipOutcome::Flipped);
    assert_eq!(second.activate(A), FlipOutcome::AlreadyFlipped);
    assert_eq!(cards[0].mark_count(), 1);
}

#[test]
fn new_round_starts_with_fresh_cards_score_and_budget() {
    let deck = cardflip_core::Deck::sample();
    let config = cardflip_core::ControllerConfig::with_max_flips(1);
    let round_size = config.round_size(deck.len());

    let first: Vec<MemoryCard> = (0..deck.len()).map(|_| MemoryCard::new()).collect();
    let controller = CardFlipController::with_config(first.clone(), config);
    let mut scoreboard = cardflip_core::Scoreboard::new(deck.len());
    assert_eq!(controller.activate(A), FlipOutcome::Flipped);
    assert_eq!(controller.activate(B), FlipOutcome::BudgetExhausted);
    scoreboard.answer(0, deck.get(0).unwrap().answer, &deck).unwrap();
    assert!(scoreboard.is_complete(round_size));

    let second: Vec<MemoryCard> = (0..deck.len()).map(|_| MemoryCard::new()).collect();
    let controller = CardFlipController::with_config(second.clone(), config);
    let scoreboard = cardflip_core::Scoreboard::new(deck.len());
    assert_eq!(controller.remaining_flips(), Some(1));
    assert!(second.iter().all(|c| !c.is_flipped()));
    assert_eq!(scoreboard.summary(round_size).score, 0);
    assert_eq!(controller.activate(B), FlipOutcome::Flipped);
    assert!(first[0].is_flipped());
}
