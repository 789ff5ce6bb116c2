//! Color constants
//!
//! Deep navy backgrounds, teal accents.

// === NAVY (Backgrounds) ===
pub const NAVY_DEEP: &str = "#0a192f";
pub const NAVY: &str = "#112240";
pub const NAVY_LIGHT: &str = "#1d2d50";

// === TEAL (Primary) ===
pub const TEAL: &str = "#00d5b0";
pub const TEAL_SOFT: &str = "rgba(0, 213, 176, 0.2)";
pub const TEAL_BORDER: &str = "rgba(0, 213, 176, 0.2)";
pub const TEAL_GLOW: &str = "rgba(0, 213, 176, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_MUTED: &str = "#9ca3af";

// === GUIDE / TRACK TINTS ===
pub const TINTS: [(&str, &str); 7] = [
    ("blue", "rgba(59, 130, 246, 0.2)"),
    ("indigo", "rgba(99, 102, 241, 0.2)"),
    ("red", "rgba(239, 68, 68, 0.2)"),
    ("green", "rgba(34, 197, 94, 0.2)"),
    ("pink", "rgba(236, 72, 153, 0.2)"),
    ("purple", "rgba(168, 85, 247, 0.2)"),
    ("yellow", "rgba(234, 179, 8, 0.2)"),
];
