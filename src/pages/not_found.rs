use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for paths no route matches.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(path = %path, "No route for path");

    rsx! {
        div { class: "container not-found",
            h1 { class: "gradient-title", "Page not found" }
            p { class: "page-subtitle", "Nothing lives at {path}." }
            Link { to: Route::Home {}, class: "btn-primary", "Back to Home" }
        }
    }
}
