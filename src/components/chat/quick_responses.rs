//! Quick Responses Component
//!
//! Suggestion chips for the selected guide. Clicking one submits it as if
//! it had been typed.

use dioxus::prelude::*;

#[component]
pub fn QuickResponses(
    suggestions: &'static [&'static str],
    /// Index of the clicked suggestion
    on_pick: EventHandler<usize>,
) -> Element {
    rsx! {
        div { class: "quick-responses",
            for (index, text) in suggestions.iter().enumerate() {
                button {
                    key: "{text}",
                    class: "quick-chip",
                    r#type: "button",
                    onclick: move |_| on_pick.call(index),
                    "{text}"
                }
            }
        }
    }
}
