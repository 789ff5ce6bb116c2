//! Guide Selector Component
//!
//! One card per spiritual guide; the selected card takes the guide's tint.

use dioxus::prelude::*;
use nirvaha_core::SpiritualGuide;

#[component]
pub fn GuideSelector(
    /// Currently selected guide
    selected: SpiritualGuide,
    /// Called with the clicked guide, including the selected one
    on_select: EventHandler<SpiritualGuide>,
) -> Element {
    rsx! {
        div { class: "guide-grid", role: "radiogroup", "aria-label": "Choose your guide",
            for guide in SpiritualGuide::ALL {
                button {
                    key: "{guide.id()}",
                    class: card_class(guide, selected),
                    r#type: "button",
                    role: "radio",
                    "aria-checked": if guide == selected { "true" } else { "false" },
                    onclick: move |_| on_select.call(guide),
                    span { class: "guide-avatar", "{guide.avatar()}" }
                    h3 { class: "guide-name", "{guide.display_name()}" }
                    p { class: "guide-description", "{guide.description()}" }
                }
            }
        }
    }
}

fn card_class(guide: SpiritualGuide, selected: SpiritualGuide) -> String {
    if guide == selected {
        format!("guide-card selected {}", guide.style())
    } else {
        "guide-card".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_card_is_tinted() {
        let selected = SpiritualGuide::Shiva;
        assert_eq!(card_class(selected, selected), "guide-card selected tint-indigo");
        assert_eq!(card_class(SpiritualGuide::Krishna, selected), "guide-card");
    }
}
