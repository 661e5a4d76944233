//! Controller configuration.

use serde::{Deserialize, Serialize};

/// Flip policy for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Maximum number of cards that may be turned over. `None` is unlimited.
    pub max_flips: Option<usize>,
}

impl ControllerConfig {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_flips(max_flips: usize) -> Self {
        Self {
            max_flips: Some(max_flips),
        }
    }

    /// Number of questions a round can reach on a board of `card_count` cards.
    pub fn round_size(&self, card_count: usize) -> usize {
        match self.max_flips {
            Some(max) => max.min(card_count),
            None => card_count,
        }
    }
}
