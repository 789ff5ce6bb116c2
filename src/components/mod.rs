//! App-level components: page frame and divine chat widgets.

pub mod chat;
mod footer;
pub mod icons;
mod navbar;

pub use footer::Footer;
pub use navbar::Navbar;
