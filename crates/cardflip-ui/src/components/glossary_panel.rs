//! Glossary Panel Component
//!
//! Study material shown before a round: a term list followed by longer
//! explanations.

use cardflip_core::Glossary;
use dioxus::prelude::*;

#[component]
pub fn GlossaryPanel(glossary: Glossary, on_close: EventHandler<()>) -> Element {
    if glossary.is_empty() {
        return VNode::empty();
    }

    rsx! {
        section { class: "glossary-panel",
            div { class: "question-panel__header",
                h2 { class: "question-panel__title", "Before you play" }
                button {
                    class: "close-btn",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    "\u{00D7}"
                }
            }
            if !glossary.terms.is_empty() {
                dl { class: "glossary-panel__terms",
                    for entry in glossary.terms.iter() {
                        div { key: "{entry.term}", class: "glossary-term",
                            dt { class: "glossary-term__name", "{entry.term}" }
                            dd { class: "glossary-term__definition", "{entry.definition}" }
                        }
                    }
                }
            }
            for entry in glossary.explanations.iter() {
                article { key: "{entry.title}", class: "glossary-explanation",
                    h3 { class: "glossary-explanation__title", "{entry.title}" }
                    p { class: "glossary-explanation__content", "{entry.content}" }
                }
            }
        }
    }
}
