//! Home page: video hero, services grid and a closing call to action.

use dioxus::prelude::*;
use nirvaha_core::site::{Feature, HOME_BACKGROUND_VIDEO, HOME_SERVICES};
use nirvaha_ui::{Button, ButtonVariant};

use super::cta::JourneyCta;
use crate::app::Route;
use crate::components::icons::ChevronRightIcon;

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "home-hero",
            video {
                class: "hero-video",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                source { src: HOME_BACKGROUND_VIDEO, r#type: "video/mp4" }
            }
            div { class: "hero-overlay" }

            div { class: "hero-content fade-up",
                h1 { class: "gradient-title hero-title", "Welcome to SoulVerse" }
                p { class: "hero-subtitle", "Ancient Wisdom for Modern Life" }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator.push(Route::Meditation {});
                        },
                        "Start Your Journey"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            navigator.push(Route::About {});
                        },
                        "Learn More"
                    }
                }
            }
        }

        section { class: "section",
            div { class: "section-header",
                h2 { class: "gradient-title", "Our Services" }
                p { class: "page-subtitle",
                    "Discover our range of spiritual and wellness offerings designed to help you find inner peace"
                }
            }
            div { class: "card-grid three",
                for service in HOME_SERVICES {
                    ServiceCard { key: "{service.title}", service }
                }
            }
        }

        JourneyCta {
            title: "Begin Your Spiritual Journey Today",
            body: "Join thousands of others who have found their path to enlightenment",
        }
    }
}

#[component]
fn ServiceCard(service: Feature) -> Element {
    let body = rsx! {
        div { class: "card-icon", "{service.icon}" }
        h3 { class: "card-title", "{service.title}" }
        p { class: "card-text", "{service.description}" }
    };

    match service.path {
        Some(path) => rsx! {
            Link { to: path, class: "card service-card",
                {body}
                div { class: "card-more",
                    span { "Learn More" }
                    ChevronRightIcon {}
                }
            }
        },
        None => rsx! {
            div { class: "card service-card", {body} }
        },
    }
}
