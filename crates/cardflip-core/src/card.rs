//! Cards and their one-way flip state.
//!
//! A card's state lives on the card itself (a CSS class on a DOM node, a
//! signal in a component tree). The controller reaches it only through
//! [`CardHandle`], so the same state machine drives the desktop board, a
//! browser page, or the in-memory cards used by tests.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Structural criterion a host uses to find cards in its document.
pub const CARD_SELECTOR: &str = ".card";

/// Presentation marker applied to a card once it has been flipped.
pub const FLIPPED_CLASS: &str = "flipped";

/// Flip state of a single card.
///
/// `Flipped` is terminal: nothing in this crate moves a card back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipState {
    #[default]
    Unflipped,
    Flipped,
}

impl FlipState {
    pub fn from_marker(flipped: bool) -> Self {
        if flipped {
            FlipState::Flipped
        } else {
            FlipState::Unflipped
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlipState::Flipped)
    }
}

impl fmt::Display for FlipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipState::Unflipped => write!(f, "unflipped"),
            FlipState::Flipped => write!(f, "flipped"),
        }
    }
}

/// Capability a host exposes for each card element.
///
/// Both methods take `&self`: the marker belongs to the element, and the
/// controller never owns it.
pub trait CardHandle {
    /// Whether the flipped marker is currently present.
    fn is_flipped(&self) -> bool;

    /// Apply the flipped marker.
    fn mark_flipped(&self);

    fn state(&self) -> FlipState {
        FlipState::from_marker(self.is_flipped())
    }
}

impl<H: CardHandle + ?Sized> CardHandle for &H {
    fn is_flipped(&self) -> bool {
        (**self).is_flipped()
    }

    fn mark_flipped(&self) {
        (**self).mark_flipped()
    }
}

impl<H: CardHandle + ?Sized> CardHandle for Rc<H> {
    fn is_flipped(&self) -> bool {
        (**self).is_flipped()
    }

    fn mark_flipped(&self) {
        (**self).mark_flipped()
    }
}

#[derive(Debug, Default)]
struct MemoryCardInner {
    flipped: Cell<bool>,
    marks: Cell<usize>,
}

/// In-memory card element.
///
/// Clones refer to the same element, so a test can hand one clone to the
/// controller and inspect another. Equality is element identity.
#[derive(Debug, Clone, Default)]
pub struct MemoryCard {
    inner: Rc<MemoryCardInner>,
}

impl MemoryCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A card whose marker is already present when the board is built.
    pub fn flipped() -> Self {
        let card = Self::new();
        card.inner.flipped.set(true);
        card
    }

    /// Number of times the marker has been applied to this element.
    pub fn mark_count(&self) -> usize {
        self.inner.marks.get()
    }
}

impl PartialEq for MemoryCard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for MemoryCard {}

impl CardHandle for MemoryCard {
    fn is_flipped(&self) -> bool {
        self.inner.flipped.get()
    }

    fn mark_flipped(&self) {
        self.inner.flipped.set(true);
        self.inner.marks.set(self.inner.marks.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_state_default_is_unflipped() {
        assert_eq!(FlipState::default(), FlipState::Unflipped);
        assert!(!FlipState::Unflipped.is_terminal());
        assert!(FlipState::Flipped.is_terminal());
    }

    #[test]
    fn flip_state_serializes_lowercase() {
        let json = serde_json::to_string(&FlipState::Flipped).unwrap();
        assert_eq!(json, "\"flipped\"");
    }

    #[test]
    fn memory_card_clones_share_the_element() {
        let card = MemoryCard::new();
        let alias = card.clone();
        alias.mark_flipped();

        assert!(card.is_flipped());
        assert_eq!(card.state(), FlipState::Flipped);
        assert_eq!(card.mark_count(), 1);
        assert_eq!(card, alias);
        assert_ne!(card, MemoryCard::new());
    }

    #[test]
    fn preflipped_card_has_no_marks() {
        let card = MemoryCard::flipped();
        assert!(card.is_flipped());
        assert_eq!(card.mark_count(), 0);
    }
}
