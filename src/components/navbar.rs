//! Navigation Bar Component
//!
//! Desktop: brand block, horizontal links with an underline on the active
//! page, profile icon.
//! Mobile: hamburger button that drops down the same links.

use dioxus::prelude::*;
use nirvaha_core::nav::{is_active, NavLink, NavMenu, NAV_LINKS, PROFILE_LINK};
use nirvaha_core::site::{BRAND_NAME, BRAND_TAGLINE, LOGO_PATH};

use crate::app::Route;
use crate::components::icons::{MenuIcon, ProfileIcon, XIcon};

/// Reports `window.scrollY` on every scroll event, starting with the
/// current offset.
const SCROLL_BRIDGE: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
    await new Promise(() => {});
"#;

/// Navigation bar component
#[component]
pub fn Navbar() -> Element {
    let mut menu = use_signal(NavMenu::new);
    let route: Route = use_route();
    let current_path = route.to_string();

    // Follow page scroll to switch to the solid style
    use_future(move || async move {
        let mut bridge = document::eval(SCROLL_BRIDGE);
        loop {
            match bridge.recv::<f64>().await {
                Ok(offset) => {
                    if menu.write().on_scroll(offset) {
                        tracing::trace!(offset, "Navbar scroll style changed");
                    }
                }
                Err(e) => {
                    tracing::warn!("Scroll bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    let nav_class = if menu.read().is_scrolled() {
        "navbar scrolled"
    } else {
        "navbar"
    };
    let is_open = menu.read().is_open();

    rsx! {
        nav { class: "{nav_class}",
            div { class: "navbar-inner",
                Link { to: Route::Home {}, class: "brand",
                    div { class: "brand-logo",
                        img { src: LOGO_PATH, alt: "Nirvaha" }
                    }
                    div { class: "brand-text",
                        span { class: "brand-name", "{BRAND_NAME}" }
                        span { class: "brand-tagline", "{BRAND_TAGLINE}" }
                    }
                }

                // Desktop links
                div { class: "nav-links",
                    for link in NAV_LINKS {
                        DesktopLink { key: "{link.path}", link, active: is_active(&current_path, link.path) }
                    }
                    Link { to: PROFILE_LINK.path, class: "nav-profile",
                        ProfileIcon {}
                        span { class: "sr-only", "{PROFILE_LINK.name}" }
                    }
                }

                // Mobile toggle
                button {
                    class: "nav-toggle",
                    r#type: "button",
                    "aria-label": if is_open { "Close menu" } else { "Open menu" },
                    "aria-expanded": if is_open { "true" } else { "false" },
                    onclick: move |_| menu.write().toggle(),
                    if is_open {
                        XIcon {}
                    } else {
                        MenuIcon {}
                    }
                }
            }

            if is_open {
                div { class: "mobile-menu",
                    for link in NAV_LINKS.into_iter().chain([PROFILE_LINK]) {
                        Link {
                            key: "{link.path}",
                            to: link.path,
                            class: mobile_link_class(is_active(&current_path, link.path)),
                            onclick: move |_| menu.write().close(),
                            "{link.name}"
                        }
                    }
                }
            }
        }
    }
}

/// A desktop navbar link with its animated underline.
#[component]
fn DesktopLink(link: NavLink, active: bool) -> Element {
    rsx! {
        Link { to: link.path, class: "nav-link",
            "{link.name}"
            span { class: if active { "nav-underline active" } else { "nav-underline" } }
        }
    }
}

fn mobile_link_class(active: bool) -> &'static str {
    if active {
        "mobile-link active"
    } else {
        "mobile-link"
    }
}
