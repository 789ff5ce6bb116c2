//! Divine Chat page.
//!
//! Holds one [`Conversation`] for the lifetime of the page view. Every
//! submission spawns a task that waits out the configured reply delay and
//! hands the reply back; replies requested before a guide switch are
//! discarded by the conversation itself.

use dioxus::prelude::*;
use nirvaha_core::chat::{DivineChat as Conversation, PendingReply};
use nirvaha_core::site::CHAT_TIPS;
use nirvaha_core::SpiritualGuide;

use crate::components::chat::{
    ChatInput, GuideSelector, MessageBubble, QuickResponses, TypingIndicator, VoiceButton,
};
use crate::context::use_app_config;

const SCROLL_TO_LATEST: &str = r#"
    const list = document.getElementById("chat-messages");
    if (list) { list.scrollTop = list.scrollHeight; }
"#;

#[component]
pub fn DivineChat() -> Element {
    let mut chat = use_signal(|| Conversation::new(SpiritualGuide::default()));
    let delay = use_app_config().reply_delay();

    let request_reply = move |pending: Option<PendingReply>| {
        let Some(pending) = pending else {
            return;
        };
        spawn(async move {
            let reply = pending.settle(delay).await;
            if !chat.write().deliver(reply) {
                tracing::debug!("Reply arrived after the conversation was reset");
            }
        });
    };

    let count = chat.read().len();
    let typing = chat.read().is_typing();
    use_effect(use_reactive!(|count, typing| {
        tracing::trace!(count, typing, "Scrolling to latest message");
        let _ = document::eval(SCROLL_TO_LATEST);
    }));

    let guide = chat.read().guide();
    let recording = chat.read().is_recording();

    rsx! {
        div { class: "container chat-page",
            section { class: "guide-picker",
                h2 { class: "section-title", "Choose Your Spiritual Guide" }
                GuideSelector {
                    selected: guide,
                    on_select: move |next: SpiritualGuide| chat.write().select_guide(next),
                }
            }

            div { class: "chat-panel card {guide.style()}",
                header { class: "chat-header",
                    span { class: "guide-avatar", "{guide.avatar()}" }
                    div {
                        h1 { class: "chat-title", "{guide.display_name()}" }
                        div { class: "chat-status",
                            span { class: "status-dot" }
                            span { if recording { "Listening..." } else { "Online" } }
                        }
                    }
                }

                QuickResponses {
                    suggestions: guide.suggestions(),
                    on_pick: move |index: usize| {
                        let pending = chat.write().quick_response(index);
                        request_reply(pending);
                    },
                }

                div { id: "chat-messages", class: "chat-messages",
                    for message in chat.read().messages().iter().cloned() {
                        MessageBubble { key: "{message.id}", message, guide }
                    }
                    if typing {
                        TypingIndicator { guide }
                    }
                }

                ChatInput {
                    placeholder: guide.prompt_placeholder(),
                    on_send: move |text: String| {
                        let pending = chat.write().submit(&text);
                        request_reply(pending);
                    },
                    VoiceButton {
                        on_recording: move |active: bool| chat.write().set_recording(active),
                        on_message: move |text: String| {
                            let pending = chat.write().submit(&text);
                            request_reply(pending);
                        },
                    }
                }
            }

            div { class: "card-grid three",
                for tip in CHAT_TIPS {
                    div { key: "{tip.title}", class: "card tip-card",
                        div { class: "card-icon", "{tip.icon}" }
                        h3 { class: "card-title", "{tip.title}" }
                        p { class: "card-text", "{tip.description}" }
                    }
                }
            }
        }
    }
}
