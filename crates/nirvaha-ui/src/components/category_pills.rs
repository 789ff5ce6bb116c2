//! Category Pills Component
//!
//! Horizontal row of filter pills; the selected pill is filled teal.

use dioxus::prelude::*;

/// A pill's id and the label shown on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PillOption {
    pub id: String,
    pub label: String,
}

impl PillOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Available options in display order
    pub options: Vec<PillOption>,
    /// Id of the selected option
    pub selected: String,
    /// Handler called with the id of the clicked option
    pub on_select: EventHandler<String>,
    /// Accessible name of the group
    #[props(default = "Category selection".to_string())]
    pub aria_label: String,
}

/// Displays a horizontal row of selectable pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| MeditationCategory::All);
///
/// rsx! {
///     CategoryPills {
///         options: MeditationCategory::ALL
///             .iter()
///             .map(|c| PillOption::new(c.id(), c.display_name()))
///             .collect(),
///         selected: selected().id().to_string(),
///         on_select: move |id: String| {
///             if let Ok(c) = id.parse() { selected.set(c) }
///         }
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let id = option.id.clone();
                    let is_selected = selected == option.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option.id}",
                            class: pill_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(id.clone());
                            },
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

fn pill_class(selected: bool) -> &'static str {
    if selected {
        "pill selected"
    } else {
        "pill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_option_new() {
        let option = PillOption::new("krishna", "Krishna Meditation");
        assert_eq!(option.id, "krishna");
        assert_eq!(option.label, "Krishna Meditation");
    }

    #[test]
    fn selected_pill_class() {
        assert_eq!(pill_class(true), "pill selected");
        assert_eq!(pill_class(false), "pill");
    }
}
