//! Flip Card Component
//!
//! A single board tile. Face down it shows its number; face up it shows the
//! question's difficulty and a short prompt.

use cardflip_core::{Difficulty, CARD_SELECTOR, FLIPPED_CLASS};
use dioxus::prelude::*;

/// CSS classes for a tile in the given state.
pub fn card_class(flipped: bool, difficulty: Difficulty) -> String {
    let base = CARD_SELECTOR.trim_start_matches('.');
    if flipped {
        format!("{} {} {}", base, FLIPPED_CLASS, difficulty.class())
    } else {
        base.to_string()
    }
}

/// Properties for the FlipCard component
#[derive(Clone, PartialEq, Props)]
pub struct FlipCardProps {
    /// 1-based number printed on the back of the card
    pub number: usize,
    /// Question text revealed on the face
    pub question: String,
    #[props(default)]
    pub difficulty: Difficulty,
    /// Current flipped marker
    pub flipped: bool,
    /// Activation handler
    pub onactivate: EventHandler<()>,
}

/// Board tile with a back and a face
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FlipCard {
///         number: 1,
///         question: "What should you keep to save on taxes?".to_string(),
///         flipped: card.flipped(),
///         onactivate: move |_| { controller.activate(slot); },
///     }
/// }
/// ```
#[component]
pub fn FlipCard(props: FlipCardProps) -> Element {
    let class = card_class(props.flipped, props.difficulty);
    let onactivate = props.onactivate;

    rsx! {
        div {
            class: "{class}",
            role: "button",
            tabindex: "0",
            "aria-pressed": "{props.flipped}",
            onclick: move |_| onactivate.call(()),
            div { class: "card__inner",
                div { class: "card__back",
                    span { class: "card__number", "{props.number}" }
                }
                div { class: "card__face",
                    p { class: "card__question", "{props.question}" }
                }
            }
        }
    }
}
