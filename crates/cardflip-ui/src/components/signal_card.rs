//! Card handle backed by a Dioxus signal.

use cardflip_core::CardHandle;
use dioxus::prelude::*;

/// A board tile whose flipped marker is a `Signal<bool>`.
///
/// Writing the marker re-renders every component that read it, which is how
/// the `.flipped` class reaches the tile.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalCard {
    flipped: Signal<bool>,
}

impl SignalCard {
    /// Create a new unflipped tile owned by the current component scope.
    pub fn new() -> Self {
        Self {
            flipped: Signal::new(false),
        }
    }

    /// Read the marker and subscribe the current component to it.
    pub fn flipped(&self) -> bool {
        (self.flipped)()
    }
}

impl Default for SignalCard {
    fn default() -> Self {
        Self::new()
    }
}

impl CardHandle for SignalCard {
    fn is_flipped(&self) -> bool {
        *self.flipped.peek()
    }

    fn mark_flipped(&self) {
        let mut flipped = self.flipped;
        flipped.set(true);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use cardflip_core::{flip, CardFlipController, CardSlot, FlipOutcome, FlipState};
    use dioxus::dioxus_core::VirtualDom;

    use super::*;

    thread_local! {
        static OBSERVED: RefCell<Vec<(FlipState, FlipOutcome)>> = const { RefCell::new(Vec::new()) };
    }

    fn record(card: &SignalCard, outcome: FlipOutcome) {
        OBSERVED.with(|o| o.borrow_mut().push((card.state(), outcome)));
    }

    #[allow(non_snake_case)]
    fn Harness() -> Element {
        use_hook(|| {
            let card = SignalCard::new();
            record(&card, FlipOutcome::Detached);
            record(&card, flip(&card));
            record(&card, flip(&card));
            card.mark_flipped();
            record(&card, FlipOutcome::AlreadyFlipped);

            let controller = CardFlipController::initialize(vec![SignalCard::new(), SignalCard::new()]);
            let outcome = controller.activate(CardSlot(1));
            record(controller.card(CardSlot(1)).unwrap(), outcome);
            let untouched = controller.card(CardSlot(0)).unwrap();
            record(untouched, FlipOutcome::Detached);
        });
        rsx! {}
    }

    #[test]
    fn signal_card_flips_once_and_stays_flipped() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        let observed = OBSERVED.with(|o| o.borrow().clone());
        assert_eq!(
            observed,
            vec![
                (FlipState::Unflipped, FlipOutcome::Detached),
                (FlipState::Flipped, FlipOutcome::Flipped),
                (FlipState::Flipped, FlipOutcome::AlreadyFlipped),
                (FlipState::Flipped, FlipOutcome::AlreadyFlipped),
                (FlipState::Flipped, FlipOutcome::Flipped),
                (FlipState::Unflipped, FlipOutcome::Detached),
            ]
        );
    }
}
