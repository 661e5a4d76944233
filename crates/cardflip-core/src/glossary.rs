//! Pre-round study material.
//!
//! Terms with short definitions, plus longer titled explanations, shown
//! before a player starts turning cards over.

use serde::{Deserialize, Serialize};

use crate::error::DeckResult;

/// A term and its one-line definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub term: String,
    pub definition: String,
}

/// A titled paragraph expanding on one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Glossary {
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default)]
    pub explanations: Vec<Explanation>,
}

impl Glossary {
    /// Parse a `{ "terms": [...], "explanations": [...] }` object.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Built-in glossary matching [`crate::Deck::sample`].
    pub fn sample() -> Self {
        let term = |term: &str, definition: &str| Term {
            term: term.to_string(),
            definition: definition.to_string(),
        };
        let explanation = |title: &str, content: &str| Explanation {
            title: title.to_string(),
            content: content.to_string(),
        };

        Self {
            terms: vec![
                term("Withholding", "Tax taken out in advance when income is paid"),
                term("Comprehensive income tax", "Tax on all income earned over a year"),
                term("Tax credit", "An amount subtracted from the tax owed"),
                term("Income deduction", "An amount subtracted from taxable income"),
                term(
                    "Social insurance",
                    "National pension, health, employment and accident insurance",
                ),
            ],
            explanations: vec![
                explanation(
                    "Withholding",
                    "When wages are paid, the employer deducts tax up front and pays \
                     it to the state on the worker's behalf.",
                ),
                explanation(
                    "Comprehensive income tax",
                    "All of a person's income is added up and taxed together. Above a \
                     certain income a return must be filed.",
                ),
                explanation(
                    "Tax credits and income deductions",
                    "A credit reduces the tax itself; a deduction reduces the income \
                     the tax is calculated on.",
                ),
                explanation(
                    "Social insurance",
                    "Pension, health, employment and accident insurance together form \
                     the social safety net.",
                ),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.explanations.is_empty()
    }
}
