//! Board components and the signal-backed card handle.

mod card_board;
mod flip_card;
mod glossary_panel;
mod question_panel;
mod result_panel;
mod score_panel;
mod signal_card;

pub use card_board::*;
pub use flip_card::*;
pub use glossary_panel::*;
pub use question_panel::*;
pub use result_panel::*;
pub use score_panel::*;
pub use signal_card::*;
