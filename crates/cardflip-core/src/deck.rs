//! Quiz decks.
//!
//! Each card on the board hides one multiple-choice question. A deck is
//! validated once when built, so the board and scoreboard can index into it
//! without rechecking.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// How hard a question is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the CSS class for this difficulty
    pub fn class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty-easy",
            Difficulty::Medium => "difficulty-medium",
            Difficulty::Hard => "difficulty-hard",
        }
    }
}

/// A question hidden on the face of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCard {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub answer: usize,
    pub explanation: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl QuizCard {
    /// The correct option, or `None` if `answer` is out of range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.answer).map(String::as_str)
    }

    fn validate(&self) -> DeckResult<()> {
        if self.options.len() < 2 {
            return Err(DeckError::TooFewOptions(
                self.options.len(),
                self.question.clone(),
            ));
        }
        if self.answer >= self.options.len() {
            return Err(DeckError::InvalidAnswer {
                question: self.question.clone(),
                answer: self.answer,
                options: self.options.len(),
            });
        }
        Ok(())
    }
}

/// An ordered, validated set of quiz cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    cards: Vec<QuizCard>,
}

impl Deck {
    pub fn new(cards: Vec<QuizCard>) -> DeckResult<Self> {
        for card in &cards {
            card.validate()?;
        }
        Ok(Self { cards })
    }

    /// Parse a JSON array of quiz cards.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let cards: Vec<QuizCard> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Built-in tax literacy deck.
    pub fn sample() -> Self {
        fn card(
            question: &str,
            options: [&str; 4],
            answer: usize,
            explanation: &str,
            difficulty: Difficulty,
        ) -> QuizCard {
            QuizCard {
                question: question.to_string(),
                options: options.iter().map(|o| o.to_string()).collect(),
                answer,
                explanation: explanation.to_string(),
                difficulty,
            }
        }

        Self {
            cards: vec![
                card(
                    "A friend says a lot is taken out of their part-time paycheck. Why?",
                    [
                        "They earn too much",
                        "Income tax is always that high",
                        "Social insurance premiums are deducted too",
                        "They are dodging taxes",
                    ],
                    2,
                    "Part-time pay can have social insurance premiums (pension, health, \
                     employment, accident) withheld along with income tax.",
                    Difficulty::Easy,
                ),
                card(
                    "You earned 500,000 won designing a website as a freelancer. What about tax?",
                    [
                        "That little can be ignored",
                        "File a comprehensive income tax return next May",
                        "Tax was surely withheld already",
                        "Only businesses pay tax",
                    ],
                    1,
                    "Freelance income is settled through the comprehensive income tax \
                     return filed in May. Some of it may have been withheld at source.",
                    Difficulty::Medium,
                ),
                card(
                    "Are there year-end tax benefits for young people living alone?",
                    [
                        "Yes, such as housing-related deductions",
                        "No, only married people get benefits",
                        "No idea",
                        "Living alone means paying more tax",
                    ],
                    0,
                    "Monthly rent credits and housing loan interest deductions are \
                     available to young people living alone.",
                    Difficulty::Medium,
                ),
                card(
                    "To save on taxes you should keep careful track of what?",
                    ["Today's lunch menu", "Plans with friends", "Receipts", "Tomorrow's to-do list"],
                    2,
                    "Deductions and credits require the matching receipts.",
                    Difficulty::Easy,
                ),
                card(
                    "What happens if you do not pay your taxes?",
                    [
                        "With luck, nothing",
                        "Penalty tax may be added so you pay more later",
                        "You go straight to jail",
                        "Nothing at all",
                    ],
                    1,
                    "Late payment incurs penalty tax and, in serious cases, legal consequences.",
                    Difficulty::Hard,
                ),
            ],
        }
    }

    /// Reorder the cards for a new round.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn get(&self, index: usize) -> Option<&QuizCard> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[QuizCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
