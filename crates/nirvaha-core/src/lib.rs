//! Nirvaha Core Library
//!
//! Content and view-state for the Nirvaha wellness app.
//!
//! ## Overview
//!
//! Every page of the app renders static catalogs and mutates only its own
//! local state. This crate holds both as plain Rust so they can be tested
//! without a renderer:
//!
//! - **Content**: meditation and sound catalogs, profile literals, contact
//!   and brand copy, navigation links
//! - **View-state**: the Divine Chat conversation, the microphone capture
//!   state machine, the navbar menu, the track player toggle
//! - **Ambient**: configuration, error type, logging setup
//!
//! ## Quick Start
//!
//! ```ignore
//! use nirvaha_core::{DivineChat, SpiritualGuide, REPLY_DELAY};
//!
//! let mut chat = DivineChat::new(SpiritualGuide::Krishna);
//! if let Some(pending) = chat.submit("How to find my dharma?") {
//!     let reply = pending.settle(REPLY_DELAY).await;
//!     chat.deliver(reply);
//! }
//! assert_eq!(chat.len(), 3);
//! ```

pub mod catalog;
pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod guide;
pub mod logging;
pub mod nav;
pub mod profile;
pub mod site;
pub mod voice;

// Re-exports
pub use catalog::{filter_sessions, MeditationCategory, MeditationSession, SoundTrack, TrackPlayer};
pub use chat::{ChatMessage, DivineChat, PendingReply, REPLY_DELAY, REPLY_POOL, VOICE_PLACEHOLDER};
pub use config::{AppConfig, ConfigOverrides};
pub use error::{NirvahaError, NirvahaResult};
pub use guide::SpiritualGuide;
pub use nav::{is_active, NavLink, NavMenu};
pub use profile::ProfileTab;
pub use voice::{CaptureOutcome, RecorderEvent, VoiceCapture, VoiceError};
