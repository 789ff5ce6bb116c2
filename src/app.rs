use dioxus::prelude::*;

use crate::components::{Footer, Navbar};
use crate::context::get_app_config;
use crate::pages::{About, Contact, DivineChat, Home, Meditation, PageNotFound, Profile, SoundHealing};
use crate::theme::global_styles;

/// Application routes.
///
/// Every page renders inside [`Shell`] (navbar above, footer below).
/// Unknown paths fall through to [`PageNotFound`].
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/meditation")]
        Meditation {},
        #[route("/sound-healing")]
        SoundHealing {},
        #[route("/profile")]
        Profile {},
        #[route("/divine-chat")]
        DivineChat {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, configuration context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_app_config);
    let styles = use_hook(global_styles);

    rsx! {
        style { {styles} }
        Router::<Route> {}
    }
}

/// Shared page frame.
#[component]
fn Shell() -> Element {
    let route: Route = use_route();

    use_effect(use_reactive!(|route| {
        tracing::debug!(path = %route, "Page view");
    }));

    rsx! {
        div { class: "app-shell",
            Navbar {}
            main { class: "page", Outlet::<Route> {} }
            Footer {}
        }
    }
}
