//! Chat Input Component
//!
//! Single-line composer. Enter or the send button submits; the field is
//! cleared only when something other than whitespace was sent.

use dioxus::prelude::*;

#[component]
pub fn ChatInput(
    /// Handler called with the text exactly as typed
    on_send: EventHandler<String>,
    placeholder: String,
    /// Extra controls rendered before the send button (the mic)
    children: Element,
) -> Element {
    let mut draft = use_signal(String::new);
    let can_send = !draft.read().trim().is_empty();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let content = draft();
        if content.trim().is_empty() {
            return;
        }
        on_send.call(content);
        draft.set(String::new());
    };

    rsx! {
        form { class: "chat-input-bar", onsubmit: handle_submit,
            input {
                class: "chat-input-field",
                r#type: "text",
                placeholder: "{placeholder}",
                "aria-label": "{placeholder}",
                value: "{draft}",
                oninput: move |e| draft.set(e.value()),
            }
            {children}
            button {
                class: if can_send { "chat-send-btn active" } else { "chat-send-btn" },
                r#type: "submit",
                disabled: !can_send,
                title: "Send message (Enter)",
                svg {
                    class: "send-icon",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "22", y1: "2", x2: "11", y2: "13" }
                    polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                }
            }
        }
    }
}
