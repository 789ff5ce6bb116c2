//! Progress Bar Component

use dioxus::prelude::*;

/// Fill width for a percentage, clamped to 0..=100.
pub fn fill_width(percent: u8) -> String {
    format!("{}%", percent.min(100))
}

/// Thin teal bar with the percentage printed underneath.
#[component]
pub fn ProgressBar(
    /// Percent complete
    percent: u8,
    /// Print "80%" under the bar
    #[props(default = true)]
    show_label: bool,
) -> Element {
    let clamped = percent.min(100);
    let width = fill_width(clamped);

    rsx! {
        div {
            class: "progress-track",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{clamped}",
            div { class: "progress-fill", style: "width: {width};" }
        }
        if show_label {
            p { class: "progress-label", "{width}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_width_clamps() {
        assert_eq!(fill_width(0), "0%");
        assert_eq!(fill_width(60), "60%");
        assert_eq!(fill_width(250), "100%");
    }
}
