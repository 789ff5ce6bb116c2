//! Routed pages. Each page owns its own state; nothing is shared between
//! them except links.

mod about;
mod contact;
mod cta;
mod divine_chat;
mod home;
mod meditation;
mod not_found;
mod profile;
mod sound_healing;

pub use about::About;
pub use contact::Contact;
pub use divine_chat::DivineChat;
pub use home::Home;
pub use meditation::Meditation;
pub use not_found::PageNotFound;
pub use profile::Profile;
pub use sound_healing::SoundHealing;
