//! Answer tracking for a round.
//!
//! Like flips, answers are one-way: once a card has been answered its
//! feedback is fixed and the score does not move again for that card.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deck::Deck;
use crate::error::{DeckError, DeckResult};

/// Feedback shown after answering a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
    /// The right option, shown only after a wrong answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: usize,
    pub answered: usize,
    /// Questions the round could reach
    pub total: usize,
}

/// Per-round score.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    answers: Vec<Option<AnswerFeedback>>,
    score: usize,
}

impl Scoreboard {
    pub fn new(card_count: usize) -> Self {
        Self {
            answers: vec![None; card_count],
            score: 0,
        }
    }

    /// Record `choice` for the card at `index`.
    ///
    /// Answering a card again returns its first feedback unchanged.
    pub fn answer(&mut self, index: usize, choice: usize, deck: &Deck) -> DeckResult<AnswerFeedback> {
        let card = deck.get(index).ok_or(DeckError::UnknownCard(index))?;
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(DeckError::UnknownCard(index))?;

        if let Some(previous) = slot.as_ref() {
            return Ok(previous.clone());
        }
        if choice >= card.options.len() {
            return Err(DeckError::InvalidChoice {
                card: index,
                choice,
            });
        }

        let correct = choice == card.answer;
        let feedback = AnswerFeedback {
            correct,
            explanation: card.explanation.clone(),
            correct_answer: if correct {
                None
            } else {
                card.correct_option().map(str::to_string)
            },
        };
        if correct {
            self.score += 1;
        }
        debug!(card = index, correct, score = self.score, "answer recorded");

        *slot = Some(feedback.clone());
        Ok(feedback)
    }

    pub fn feedback(&self, index: usize) -> Option<&AnswerFeedback> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Whether every question reachable this round has been answered.
    ///
    /// `round_size` comes from [`crate::ControllerConfig::round_size`]. An
    /// empty round is never complete.
    pub fn is_complete(&self, round_size: usize) -> bool {
        round_size > 0 && self.answered() >= round_size
    }

    pub fn summary(&self, round_size: usize) -> RoundSummary {
        RoundSummary {
            score: self.score,
            answered: self.answered(),
            total: round_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_answer_scores() {
        let deck = Deck::sample();
        let mut board = Scoreboard::new(deck.len());
        let right = deck.get(0).unwrap().answer;

        let feedback = board.answer(0, right, &deck).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.correct_answer, None);
        assert_eq!(board.score(), 1);
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let deck = Deck::sample();
        let mut board = Scoreboard::new(deck.len());
        let card = deck.get(1).unwrap();
        let wrong = (card.answer + 1) % card.options.len();

        let feedback = board.answer(1, wrong, &deck).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_answer.as_deref(), card.correct_option());
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn second_answer_is_ignored() {
        let deck = Deck::sample();
        let mut board = Scoreboard::new(deck.len());
        let card = deck.get(2).unwrap();
        let wrong = (card.answer + 1) % card.options.len();

        let first = board.answer(2, wrong, &deck).unwrap();
        let second = board.answer(2, card.answer, &deck).unwrap();
        assert_eq!(first, second);
        assert_eq!(board.score(), 0);
        assert_eq!(board.answered(), 1);
        assert_eq!(board.feedback(2), Some(&first));
    }

    #[test]
    fn round_completes_at_flip_limit() {
        let deck = Deck::sample();
        let round_size = crate::ControllerConfig::with_max_flips(2).round_size(deck.len());
        let mut board = Scoreboard::new(deck.len());
        assert!(!board.is_complete(round_size));

        board.answer(0, deck.get(0).unwrap().answer, &deck).unwrap();
        assert!(!board.is_complete(round_size));
        board.answer(3, 0, &deck).unwrap();
        assert!(board.is_complete(round_size));

        let summary = board.summary(round_size);
        assert_eq!(summary.answered, 2);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.score, board.score());
    }

    #[test]
    fn empty_round_is_never_complete() {
        assert!(!Scoreboard::new(0).is_complete(0));
    }

    #[test]
    fn unknown_card_and_choice_are_errors() {
        let deck = Deck::sample();
        let mut board = Scoreboard::new(deck.len());
        assert!(matches!(
            board.answer(99, 0, &deck),
            Err(DeckError::UnknownCard(99))
        ));
        assert!(matches!(
            board.answer(0, 9, &deck),
            Err(DeckError::InvalidChoice { card: 0, choice: 9 })
        ));
        assert_eq!(board.answered(), 0);
    }
}
