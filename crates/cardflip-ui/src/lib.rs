//! Card Flip UI Components
//!
//! Dioxus components for the quiz board. Cards are face-down tiles; clicking
//! one turns it over for good and opens its question.
//!
//! ## Presentation
//!
//! - `.card` marks every tile on the board
//! - `.flipped` is added once a tile has been turned over
//! - `.difficulty-*` tints the face of a turned tile
//!
//! What a flipped card looks like is left to the host stylesheet.

pub mod components;

pub use components::*;
