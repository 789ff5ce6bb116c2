use dioxus::prelude::*;
use nirvaha_core::site::{ABOUT_FEATURES, FOUNDER, MISSION};
use nirvaha_ui::{GlowPanel, PageHero};

use super::cta::JourneyCta;

/// About page: mission, feature highlights and the founder.
#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "container",
            PageHero {
                title: "About Nirvaha",
                subtitle: "Discover the story behind our mission to bring inner peace and spiritual harmony to the world through technology and ancient wisdom.".to_string(),
            }

            GlowPanel { class: "mission".to_string(),
                h2 { class: "section-title", "Our Mission" }
                p { class: "section-body", "{MISSION}" }
            }

            div { class: "card-grid four",
                for feature in ABOUT_FEATURES {
                    div { key: "{feature.title}", class: "card feature-card",
                        div { class: "card-icon", "{feature.icon}" }
                        h3 { class: "card-title", "{feature.title}" }
                        p { class: "card-text", "{feature.description}" }
                    }
                }
            }

            section { class: "founder card",
                img { class: "founder-photo", src: FOUNDER.photo, alt: FOUNDER.name }
                div { class: "founder-text",
                    h2 { class: "section-title", "Meet Our Founder" }
                    h3 { class: "founder-name", "{FOUNDER.name}" }
                    p { class: "section-body", "{FOUNDER.bio}" }
                    blockquote { class: "founder-quote", "{FOUNDER.quote}" }
                }
            }

            JourneyCta {
                title: "Begin Your Journey Today",
                body: "Join thousands of others who have found their path to inner peace and spiritual growth with Nirvaha.",
            }
        }
    }
}
