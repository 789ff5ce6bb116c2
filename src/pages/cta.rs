use dioxus::prelude::*;
use nirvaha_ui::GlowPanel;

use crate::app::Route;

/// Closing call-to-action band linking to Divine Chat.
#[component]
pub fn JourneyCta(title: String, body: String) -> Element {
    rsx! {
        GlowPanel { class: "cta".to_string(),
            h2 { class: "section-title", "{title}" }
            p { class: "section-body", "{body}" }
            Link { to: Route::DivineChat {}, class: "btn-primary", "Start Now" }
        }
    }
}
