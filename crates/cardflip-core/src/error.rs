//! Error types for Card Flip

use thiserror::Error;

/// Errors raised while building a deck or scoring answers.
///
/// Flipping itself never fails; see [`crate::FlipOutcome`].
#[derive(Error, Debug)]
pub enum DeckError {
    /// The answer index does not point at one of the card's options
    #[error("Answer index {answer} out of range for {options} options: {question}")]
    InvalidAnswer {
        question: String,
        answer: usize,
        options: usize,
    },

    /// A quiz card needs at least two options to be a question
    #[error("Too few options ({0}) for question: {1}")]
    TooFewOptions(usize, String),

    /// No card sits at the requested position on the board
    #[error("Card not found: {0}")]
    UnknownCard(usize),

    /// The chosen option does not exist on the card
    #[error("Choice {choice} out of range for card {card}")]
    InvalidChoice { card: usize, choice: usize },

    /// Deck JSON could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using DeckError
pub type DeckResult<T> = Result<T, DeckError>;
