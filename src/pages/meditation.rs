//! Meditation page: category pills over the guided session catalog.

use dioxus::prelude::*;
use nirvaha_core::catalog::{filter_sessions, MeditationCategory, MeditationSession};
use nirvaha_ui::{Button, ButtonVariant, CategoryPills, GlowPanel, PageHero, PillOption};

use crate::components::icons::ChevronRightIcon;

#[component]
pub fn Meditation() -> Element {
    let mut category = use_signal(MeditationCategory::default);

    let options: Vec<PillOption> = MeditationCategory::ALL
        .iter()
        .map(|c| PillOption::new(c.id(), c.display_name()))
        .collect();
    let sessions = filter_sessions(category());

    let on_select = move |id: String| match id.parse::<MeditationCategory>() {
        Ok(selected) => {
            tracing::debug!(category = selected.id(), "Meditation filter changed");
            category.set(selected);
        }
        Err(e) => tracing::warn!("{}", e),
    };

    rsx! {
        div { class: "container",
            PageHero {
                title: "Divine Meditation",
                subtitle: "Experience sacred meditation practices guided by divine energy".to_string(),
            }

            CategoryPills {
                options,
                selected: category().id().to_string(),
                on_select,
                aria_label: "Meditation category".to_string(),
            }

            div { class: "card-grid three",
                for session in sessions {
                    SessionCard { key: "{session.id}", session: session.clone() }
                }
            }

            GlowPanel { class: "featured".to_string(),
                h2 { class: "section-title", "Start Your Journey Today" }
                p { class: "section-body",
                    "Join our community of meditators and experience the transformative power of guided meditation. "
                    "Whether you're a beginner or experienced practitioner, we have sessions perfect for your level."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| tracing::info!("Free trial requested"),
                    "Begin Free Trial"
                }
            }
        }
    }
}

#[component]
fn SessionCard(session: MeditationSession) -> Element {
    rsx! {
        article { class: "card session-card",
            div { class: "session-media",
                img { src: session.image, alt: session.title }
                div { class: "session-shade" }
                span { class: "session-duration", "{session.duration}" }
            }
            div { class: "session-body",
                div { class: "session-meta",
                    span { "{session.instructor}" }
                    span { class: "session-level", "{session.level}" }
                }
                h3 { class: "card-title", "{session.title}" }
                p { class: "card-text", "{session.description}" }
                Button {
                    variant: ButtonVariant::Soft,
                    onclick: move |_| tracing::info!(session = session.id, "Begin meditation"),
                    span { "Begin Meditation" }
                    ChevronRightIcon {}
                }
            }
        }
    }
}
