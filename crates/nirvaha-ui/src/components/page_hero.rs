//! Page Hero Component
//!
//! Centered gradient title with a muted subtitle, used at the top of most
//! pages.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct PageHeroProps {
    pub title: String,
    #[props(default)]
    pub subtitle: Option<String>,
}

#[component]
pub fn PageHero(props: PageHeroProps) -> Element {
    rsx! {
        header { class: "page-hero fade-up",
            h1 { class: "gradient-title", "{props.title}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}
