use dioxus::prelude::*;
use nirvaha_core::SpiritualGuide;

/// Three bouncing dots shown while a reply is pending.
#[component]
pub fn TypingIndicator(guide: SpiritualGuide) -> Element {
    rsx! {
        div { class: "message-row message-row-received",
            span { class: "message-avatar", "{guide.avatar()}" }
            div {
                class: "message-bubble message-bubble-received typing",
                "aria-label": "{guide.display_name()} is typing",
                span { class: "typing-dot" }
                span { class: "typing-dot" }
                span { class: "typing-dot" }
            }
        }
    }
}
