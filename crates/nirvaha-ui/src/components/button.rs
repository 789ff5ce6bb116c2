//! Button Components
//!
//! Button styles used across the pages:
//! - Primary: solid teal pill, main call to action
//! - Secondary: dark pill next to a primary one
//! - Soft: translucent teal, used inside cards
//! - Ghost: text-only, used for tabs

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid teal background, dark text
    #[default]
    Primary,
    /// Dark background, light text
    Secondary,
    /// Translucent teal, full width inside cards
    Soft,
    /// No background until hovered
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Soft => "btn-soft",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extras.
pub fn class_list(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| navigator.push(Route::Meditation {}),
///         "Start Your Journey"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled as a button, opened in a new tab.
///
/// Used for the hosted internship form and social profiles.
#[derive(Clone, PartialEq, Props)]
pub struct ExternalButtonProps {
    pub href: String,
    pub children: Element,
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn ExternalButton(props: ExternalButtonProps) -> Element {
    let full_class = class_list(props.variant.class(), props.class.as_deref());
    let href = props.href.clone();

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            onclick: move |_| tracing::info!(href = %href, "Opening external link"),
            {props.children}
        }
    }
}

/// Icon button for compact actions (menu, favourite, play)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = class_list("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Soft.class(), "btn-soft");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn class_list_joins_extras() {
        assert_eq!(class_list("btn-primary", None), "btn-primary");
        assert_eq!(class_list("btn-primary", Some("")), "btn-primary");
        assert_eq!(class_list("btn-primary", Some("wide")), "btn-primary wide");
    }
}
