//! Nirvaha UI Components
//!
//! Dioxus building blocks shared by every page of the app.
//!
//! ## Design Language
//!
//! - **Deep navy (#0a192f)**: page backgrounds
//! - **Teal (#00d5b0)**: primary actions, highlights, active states
//! - **Soft grey**: body copy
//!
//! Sections float on rounded dark panels with two blurred teal glows in
//! opposite corners.

pub mod components;

pub use components::*;
