//! Divine Chat: a simulated conversation with a spiritual guide
//!
//! # Message Flow
//!
//! 1. `submit()` appends the user message and returns a [`PendingReply`]
//! 2. The UI spawns `PendingReply::settle(delay)`, which sleeps and then
//!    draws a reply from [`REPLY_POOL`]
//! 3. `deliver()` appends it, unless the guide was switched in between
//!
//! ```ignore
//! let mut chat = DivineChat::new(SpiritualGuide::Shiva);
//! if let Some(pending) = chat.submit("Teach me meditation") {
//!     let reply = pending.settle(REPLY_DELAY).await;
//!     chat.deliver(reply);
//! }
//! ```

mod conversation;
mod message;

pub use conversation::{
    pick_reply, AssistantReply, DivineChat, PendingReply, REPLY_DELAY, REPLY_POOL,
    VOICE_PLACEHOLDER,
};
pub use message::ChatMessage;
