//! Card Flip Core Library
//!
//! One-way card flips for a quiz board, independent of any document or
//! rendering environment.
//!
//! ## Overview
//!
//! A board shows a row of face-down cards. Activating a card turns it over
//! exactly once; further activations are ignored until the board is rebuilt.
//! The host environment owns the cards (DOM nodes, Dioxus signals, test
//! doubles) and exposes each one through the [`CardHandle`] capability. The
//! [`CardFlipController`] only ever asks a card whether it is flipped and tells
//! it to mark itself flipped.
//!
//! ## Quick Start
//!
//! ```
//! use cardflip_core::{CardFlipController, CardHandle, CardSlot, FlipOutcome, MemoryCard};
//!
//! let cards = vec![MemoryCard::new(), MemoryCard::new(), MemoryCard::new()];
//! let controller = CardFlipController::initialize(cards.clone());
//!
//! assert_eq!(controller.activate(CardSlot(0)), FlipOutcome::Flipped);
//! assert_eq!(controller.activate(CardSlot(0)), FlipOutcome::AlreadyFlipped);
//! assert!(cards[0].is_flipped());
//! assert!(!cards[1].is_flipped());
//! ```

pub mod card;
pub mod config;
pub mod controller;
pub mod deck;
pub mod error;
pub mod glossary;
pub mod logging;
pub mod scoreboard;

// Re-exports
pub use card::{CardHandle, FlipState, MemoryCard, CARD_SELECTOR, FLIPPED_CLASS};
pub use config::ControllerConfig;
pub use controller::{
    discover, flip, ActivationEvent, CardFlipController, CardSlot, CardSource, FlipOutcome,
};
pub use deck::{Deck, Difficulty, QuizCard};
pub use error::{DeckError, DeckResult};
pub use glossary::{Explanation, Glossary, Term};
pub use scoreboard::{AnswerFeedback, RoundSummary, Scoreboard};
