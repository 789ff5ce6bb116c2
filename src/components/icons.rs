//! Inline SVG icons (Heroicons outline set).

use dioxus::prelude::*;

/// 24x24 outline icon wrapper.
#[component]
fn Outline(children: Element, #[props(default = "icon".to_string())] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        Outline { path { d: "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5" } }
    }
}

#[component]
pub fn XIcon() -> Element {
    rsx! {
        Outline { path { d: "M6 18 18 6M6 6l12 12" } }
    }
}

#[component]
pub fn ProfileIcon() -> Element {
    rsx! {
        Outline { class: "icon icon-lg".to_string(),
            path { d: "M17.982 18.725A7.488 7.488 0 0 0 12 15.75a7.488 7.488 0 0 0-5.982 2.975m11.963 0a9 9 0 1 0-11.963 0m11.963 0A8.966 8.966 0 0 1 12 21a8.966 8.966 0 0 1-5.982-2.275M15 9.75a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z" }
        }
    }
}

#[component]
pub fn ChevronRightIcon() -> Element {
    rsx! {
        Outline { class: "icon icon-sm".to_string(), path { d: "M9 5l7 7-7 7" } }
    }
}

#[component]
pub fn MicIcon() -> Element {
    rsx! {
        Outline {
            path { d: "M19 11a7 7 0 01-7 7m0 0a7 7 0 01-7-7m7 7v4m0 0H8m4 0h4m-4-8a3 3 0 01-3-3V5a3 3 0 116 0v6a3 3 0 01-3 3z" }
        }
    }
}

#[component]
pub fn StopIcon() -> Element {
    rsx! {
        Outline {
            path { d: "M21 12a9 9 0 11-18 0 9 9 0 0118 0z M9 10a1 1 0 011-1h4a1 1 0 011 1v4a1 1 0 01-1 1h-4a1 1 0 01-1-1v-4z" }
        }
    }
}

#[component]
pub fn PlayIcon() -> Element {
    rsx! {
        Outline {
            path { d: "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z" }
            path { d: "M21 12a9 9 0 11-18 0 9 9 0 0118 0z" }
        }
    }
}

#[component]
pub fn PauseIcon() -> Element {
    rsx! {
        Outline { path { d: "M10 9v6m4-6v6m7-3a9 9 0 11-18 0 9 9 0 0118 0z" } }
    }
}

#[component]
pub fn HeartIcon(#[props(default = false)] filled: bool) -> Element {
    rsx! {
        Outline { class: if filled { "icon heart filled".to_string() } else { "icon heart".to_string() },
            path { d: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z" }
        }
    }
}
