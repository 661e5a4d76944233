//! Property-based tests for the card flip controller
//!
//! Uses proptest to check idempotence, independence and budget accounting
//! over arbitrary boards and activation sequences.

use std::collections::HashSet;

use cardflip_core::{
    CardFlipController, CardHandle, CardSlot, ControllerConfig, FlipOutcome, MemoryCard,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A board size and a sequence of activations, some of which miss the board
fn board_and_clicks() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (0..12usize).prop_flat_map(|n| (Just(n), prop::collection::vec(0..n + 3, 0..64)))
}

fn board(n: usize) -> Vec<MemoryCard> {
    (0..n).map(|_| MemoryCard::new()).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N activations on one card produce exactly one transition
    #[test]
    fn activation_is_idempotent(n in 1..50usize) {
        let cards = board(1);
        let controller = CardFlipController::initialize(cards.clone());

        let outcomes: Vec<_> = (0..n).map(|_| controller.activate(CardSlot(0))).collect();

        prop_assert_eq!(outcomes[0], FlipOutcome::Flipped);
        prop_assert!(outcomes[1..].iter().all(|o| *o == FlipOutcome::AlreadyFlipped));
        prop_assert_eq!(cards[0].mark_count(), 1);
    }

    /// A card is flipped iff it was activated; others are untouched
    #[test]
    fn cards_are_independent((n, clicks) in board_and_clicks()) {
        let cards = board(n);
        let controller = CardFlipController::initialize(cards.clone());

        for &slot in &clicks {
            controller.activate(CardSlot(slot));
        }

        let clicked: HashSet<usize> = clicks.iter().copied().filter(|&s| s < n).collect();
        for (i, card) in cards.iter().enumerate() {
            prop_assert_eq!(card.is_flipped(), clicked.contains(&i));
            prop_assert_eq!(card.mark_count(), usize::from(clicked.contains(&i)));
        }
    }

    /// Flipped is terminal: once set it survives any later activations
    #[test]
    fn flipped_is_monotonic((n, clicks) in board_and_clicks()) {
        let cards = board(n);
        let controller = CardFlipController::initialize(cards.clone());
        let mut seen = HashSet::new();

        for &slot in &clicks {
            controller.activate(CardSlot(slot));
            if slot < n {
                seen.insert(slot);
            }
            for &s in &seen {
                prop_assert!(cards[s].is_flipped());
            }
        }
    }

    /// A flip limit caps effective transitions; repeats never consume it
    #[test]
    fn budget_caps_transitions((n, clicks) in board_and_clicks(), max in 0..6usize) {
        let cards = board(n);
        let controller =
            CardFlipController::with_config(cards.clone(), ControllerConfig::with_max_flips(max));

        let effective = clicks
            .iter()
            .filter(|&&s| controller.activate(CardSlot(s)).changed())
            .count();

        let distinct: HashSet<usize> = clicks.iter().copied().filter(|&s| s < n).collect();
        prop_assert_eq!(effective, distinct.len().min(max));
        prop_assert_eq!(controller.flipped_count(), effective);
        prop_assert_eq!(controller.remaining_flips(), Some(max - effective));
    }
}
