//! Message Bubble Component
//!
//! User messages sit on the right in teal; the guide's replies sit on the
//! left with the guide avatar.

use dioxus::prelude::*;
use nirvaha_core::{ChatMessage, SpiritualGuide};

/// Individual message bubble component
#[component]
pub fn MessageBubble(message: ChatMessage, guide: SpiritualGuide) -> Element {
    let (row_class, bubble_class) = if message.from_assistant {
        ("message-row message-row-received", "message-bubble message-bubble-received")
    } else {
        ("message-row message-row-sent", "message-bubble message-bubble-sent")
    };

    rsx! {
        div { class: "{row_class}",
            if message.from_assistant {
                span { class: "message-avatar", title: "{guide.display_name()}", "{guide.avatar()}" }
            }
            div { class: "{bubble_class}",
                div { class: "message-bubble-content", "{message.text}" }
                div { class: "message-bubble-time", "{message.time_label()}" }
            }
        }
    }
}
