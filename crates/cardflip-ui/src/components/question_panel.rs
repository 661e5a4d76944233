//! Question Panel Component
//!
//! The detail view opened once a card has been turned over.

use cardflip_core::{AnswerFeedback, QuizCard};
use dioxus::prelude::*;

#[component]
pub fn QuestionPanel(
    /// 1-based card number
    number: usize,
    card: QuizCard,
    /// Feedback from an earlier answer; options are locked when present
    #[props(default)]
    feedback: Option<AnswerFeedback>,
    /// Receives the index of the chosen option
    on_answer: EventHandler<usize>,
    on_close: EventHandler<()>,
) -> Element {
    let locked = feedback.is_some();
    let panel_class = format!("question-panel {}", card.difficulty.class());

    rsx! {
        div { class: "{panel_class}",
            div { class: "question-panel__header",
                h2 { class: "question-panel__title", "Card {number}" }
                button {
                    class: "close-btn",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
            p { class: "question-panel__question", "{card.question}" }
            ul { class: "question-panel__options",
                for (index, option) in card.options.iter().enumerate() {
                    li { key: "{index}",
                        button {
                            class: "option-btn",
                            disabled: locked,
                            onclick: move |_| on_answer.call(index),
                            "{option}"
                        }
                    }
                }
            }
            if let Some(result) = &feedback {
                div {
                    class: if result.correct { "feedback feedback--correct" } else { "feedback feedback--wrong" },
                    p { class: "feedback__verdict",
                        if result.correct { "Correct" } else { "Not quite" }
                    }
                    if let Some(answer) = &result.correct_answer {
                        p { class: "feedback__answer", "Answer: {answer}" }
                    }
                    p { class: "feedback__explanation", "{result.explanation}" }
                }
            }
        }
    }
}
