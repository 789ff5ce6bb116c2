//! Divine Chat widgets
//!
//! The conversation itself lives in [`nirvaha_core::chat::DivineChat`];
//! these components only render it and forward user intent.

mod chat_input;
mod guide_selector;
mod message_bubble;
mod quick_responses;
mod typing_indicator;
mod voice;

pub use chat_input::ChatInput;
pub use guide_selector::GuideSelector;
pub use message_bubble::MessageBubble;
pub use quick_responses::QuickResponses;
pub use typing_indicator::TypingIndicator;
pub use voice::VoiceButton;
