//! Result Panel Component
//!
//! Shown once every reachable question of a round has been answered.

use cardflip_core::RoundSummary;
use dioxus::prelude::*;

/// Closing line for a finished round.
pub fn verdict(summary: &RoundSummary) -> &'static str {
    if summary.total > 0 && summary.score == summary.total {
        "a perfect round"
    } else if summary.score * 2 >= summary.total {
        "well played"
    } else {
        "keep studying"
    }
}

#[component]
pub fn ResultPanel(summary: RoundSummary, on_new_round: EventHandler<()>) -> Element {
    let line = verdict(&summary);

    rsx! {
        section { class: "result-panel",
            h2 { class: "question-panel__title", "Round complete" }
            p { class: "result-panel__score", "{summary.score} / {summary.total} correct" }
            p { class: "result-panel__verdict", "{line}" }
            button {
                class: "option-btn result-panel__again",
                onclick: move |_| on_new_round.call(()),
                "new round"
            }
        }
    }
}
