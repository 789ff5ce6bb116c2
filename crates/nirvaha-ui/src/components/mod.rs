//! Reusable UI components
//!
//! All components rely on the class names defined in the app stylesheet.

mod button;
mod category_pills;
mod glow_panel;
mod input;
mod page_hero;
mod progress_bar;

pub use button::*;
pub use category_pills::*;
pub use glow_panel::*;
pub use input::*;
pub use page_hero::*;
pub use progress_bar::*;
