//! Score Panel Component

use dioxus::prelude::*;

#[component]
pub fn ScorePanel(score: usize, answered: usize, total: usize) -> Element {
    rsx! {
        div { class: "score-panel",
            span { class: "score-panel__score", "score {score}" }
            span { class: "score-panel__progress", "{answered} / {total} answered" }
        }
    }
}
