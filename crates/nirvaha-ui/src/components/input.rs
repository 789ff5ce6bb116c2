//! Input Field Components
//!
//! Rounded dark text inputs with a teal focus ring.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Visually hidden label for screen readers
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         input_type: "email".to_string(),
///         label: "Newsletter e-mail".to_string(),
///         placeholder: "Enter your email".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .or_else(|| props.label.as_deref().map(slug))
        .unwrap_or_else(|| "input".to_string());
    let input_class = class_list("input-field", props.class.as_deref());

    rsx! {
        if let Some(label) = &props.label {
            label { class: "sr-only", r#for: "{id}", "{label}" }
        }
        input {
            id: "{id}",
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            required: props.required,
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Lowercase, dash-separated form of a label, used as an element id.
pub fn slug(label: &str) -> String {
    label
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_label() {
        assert_eq!(slug("Newsletter e-mail"), "newsletter-e-mail");
        assert_eq!(slug("  Ask Lord Shiva anything... "), "ask-lord-shiva-anything");
        assert_eq!(slug("!!!"), "");
    }
}
