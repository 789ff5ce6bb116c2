//! Glow Panel Component
//!
//! Rounded dark section with two blurred teal orbs behind its content.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the GlowPanel component
#[derive(Clone, PartialEq, Props)]
pub struct GlowPanelProps {
    pub children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Opacity of the orbs (default: 0.1)
    #[props(default = 0.1)]
    pub glow: f32,
}

/// Renders content on a panel with an ambient glow
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GlowPanel { class: "mission".to_string(),
///         h2 { "Our Mission" }
///         p { "{MISSION}" }
///     }
/// }
/// ```
#[component]
pub fn GlowPanel(props: GlowPanelProps) -> Element {
    let full_class = class_list("glow-panel", props.class.as_deref());

    rsx! {
        section { class: "{full_class}",
            div {
                class: "glow-orbs",
                style: "opacity: {props.glow};",
                "aria-hidden": "true",
                div { class: "glow-orb glow-orb-top" }
                div { class: "glow-orb glow-orb-bottom" }
            }
            div { class: "glow-panel-content", {props.children} }
        }
    }
}
