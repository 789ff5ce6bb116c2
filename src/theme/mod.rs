//! Theme: palette constants and the global stylesheet.

mod colors;
mod styles;

pub use styles::global_styles;
