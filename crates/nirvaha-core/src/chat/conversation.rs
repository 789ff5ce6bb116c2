//! Divine Chat conversation state
//!
//! A [`DivineChat`] holds the ordered messages exchanged with one guide. It
//! is reset whenever the guide changes and is dropped with the page view.
//!
//! Replies are simulated: submitting a message returns a [`PendingReply`]
//! that the caller settles after [`REPLY_DELAY`] and hands back through
//! [`DivineChat::deliver`].

use std::time::Duration;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::message::ChatMessage;
use crate::guide::SpiritualGuide;

/// Fixed latency before a simulated reply appears.
pub const REPLY_DELAY: Duration = Duration::from_secs(2);

/// Every guide answers with one of these, regardless of what was asked.
pub const REPLY_POOL: [&str; 3] = [
    "I sense your spiritual curiosity. Let me guide you with divine wisdom...",
    "Your journey is unique. Here's what the universe wants you to know...",
    "That's an insightful question. Let me share some spiritual guidance...",
];

/// Text recorded in place of a captured voice clip.
pub const VOICE_PLACEHOLDER: &str = "Voice message received";

/// Pick one reply uniformly at random.
pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    REPLY_POOL.choose(rng).copied().unwrap_or(REPLY_POOL[0])
}

/// A reply that has been requested but not yet delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a pending reply does nothing until settled and delivered"]
pub struct PendingReply {
    epoch: u64,
}

impl PendingReply {
    /// Wait out the delay, then choose the reply text.
    pub async fn settle(self, delay: Duration) -> AssistantReply {
        tokio::time::sleep(delay).await;
        let text = pick_reply(&mut rand::rng());
        self.resolve(text)
    }

    /// Resolve immediately with a given text.
    pub fn resolve(self, text: impl Into<String>) -> AssistantReply {
        AssistantReply {
            epoch: self.epoch,
            text: text.into(),
        }
    }
}

/// A settled reply waiting to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    epoch: u64,
    pub text: String,
}

/// Conversation with the currently selected guide.
#[derive(Debug, Clone, PartialEq)]
pub struct DivineChat {
    guide: SpiritualGuide,
    /// Messages in the order they were appended
    messages: Vec<ChatMessage>,
    next_id: u64,
    /// Bumped on every reset; replies from older epochs are discarded
    epoch: u64,
    outstanding: usize,
    is_typing: bool,
    is_recording: bool,
}

impl Default for DivineChat {
    fn default() -> Self {
        Self::new(SpiritualGuide::default())
    }
}

impl DivineChat {
    /// Start a conversation holding only the guide's greeting.
    pub fn new(guide: SpiritualGuide) -> Self {
        let mut chat = Self {
            guide,
            messages: Vec::new(),
            next_id: 1,
            epoch: 0,
            outstanding: 0,
            is_typing: false,
            is_recording: false,
        };
        chat.reset();
        chat
    }

    pub fn guide(&self) -> SpiritualGuide {
        self.guide
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.is_recording = recording;
    }

    /// Switch guide and restart the conversation with its greeting.
    ///
    /// Picking the guide that is already selected changes nothing.
    pub fn select_guide(&mut self, guide: SpiritualGuide) {
        if guide == self.guide {
            return;
        }
        tracing::debug!(guide = guide.id(), "Switching spiritual guide");
        self.guide = guide;
        self.reset();
    }

    fn reset(&mut self) {
        self.epoch += 1;
        self.outstanding = 0;
        self.is_typing = false;
        self.messages.clear();
        self.push(self.guide.greeting().to_string(), true);
    }

    fn push(&mut self, text: String, from_assistant: bool) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, text, from_assistant));
    }

    /// Append a user message and request a reply.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        tracing::debug!(guide = self.guide.id(), len = text.len(), "User message submitted");
        self.push(text.to_string(), false);
        self.outstanding += 1;
        self.is_typing = true;
        Some(PendingReply { epoch: self.epoch })
    }

    /// Submit the suggestion at `index` for the current guide.
    pub fn quick_response(&mut self, index: usize) -> Option<PendingReply> {
        let suggestion = *self.guide.suggestions().get(index)?;
        self.submit(suggestion)
    }

    /// Submit the placeholder that stands in for a finished recording.
    pub fn submit_voice(&mut self) -> Option<PendingReply> {
        self.submit(VOICE_PLACEHOLDER)
    }

    /// Append a settled reply. Returns false if the conversation was reset
    /// after the reply was requested.
    pub fn deliver(&mut self, reply: AssistantReply) -> bool {
        if reply.epoch != self.epoch {
            tracing::debug!(
                reply_epoch = reply.epoch,
                current_epoch = self.epoch,
                "Dropping reply for a previous conversation"
            );
            return false;
        }
        self.push(reply.text, true);
        self.outstanding = self.outstanding.saturating_sub(1);
        self.is_typing = self.outstanding > 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_chat_holds_only_greeting() {
        let chat = DivineChat::new(SpiritualGuide::Ganesha);
        assert_eq!(chat.len(), 1);
        let first = &chat.messages()[0];
        assert!(first.from_assistant);
        assert_eq!(first.text, SpiritualGuide::Ganesha.greeting());
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_select_guide_resets_conversation() {
        let mut chat = DivineChat::default();
        let _ = chat.submit("hello");
        let _ = chat.submit("again");
        assert_eq!(chat.len(), 3);

        chat.select_guide(SpiritualGuide::Shiva);
        assert_eq!(chat.guide(), SpiritualGuide::Shiva);
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].text, SpiritualGuide::Shiva.greeting());
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_reselecting_same_guide_keeps_conversation() {
        let mut chat = DivineChat::new(SpiritualGuide::Krishna);
        let pending = chat.submit("hello").unwrap();
        chat.select_guide(SpiritualGuide::Krishna);
        assert_eq!(chat.len(), 2);
        assert_eq!(chat.messages()[1].text, "hello");
        assert!(chat.is_typing());

        // The outstanding reply still belongs to this conversation
        assert!(chat.deliver(pending.resolve(REPLY_POOL[0])));
        assert_eq!(chat.len(), 3);
    }

    #[test]
    fn test_submit_appends_user_message_immediately() {
        let mut chat = DivineChat::default();
        let pending = chat.submit("  How to find my dharma?  ");
        assert!(pending.is_some());
        assert_eq!(chat.len(), 2);
        let last = chat.messages().last().unwrap();
        assert!(!last.from_assistant);
        assert_eq!(last.text, "  How to find my dharma?  ");
        assert!(chat.is_typing());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut chat = DivineChat::default();
        assert!(chat.submit("").is_none());
        assert!(chat.submit(" \t\n ").is_none());
        assert_eq!(chat.len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_deliver_appends_one_assistant_message() {
        let mut chat = DivineChat::default();
        let pending = chat.submit("hello").unwrap();
        assert!(chat.deliver(pending.resolve(REPLY_POOL[1])));
        assert_eq!(chat.len(), 3);
        let last = chat.messages().last().unwrap();
        assert!(last.from_assistant);
        assert_eq!(last.text, REPLY_POOL[1]);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_typing_stays_on_until_all_replies_arrive() {
        let mut chat = DivineChat::default();
        let first = chat.submit("one").unwrap();
        let second = chat.submit("two").unwrap();

        chat.deliver(first.resolve(REPLY_POOL[0]));
        assert!(chat.is_typing());
        chat.deliver(second.resolve(REPLY_POOL[2]));
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_stale_reply_dropped_after_guide_switch() {
        let mut chat = DivineChat::default();
        let pending = chat.submit("hello").unwrap();
        chat.select_guide(SpiritualGuide::Ganesha);

        assert!(!chat.deliver(pending.resolve(REPLY_POOL[0])));
        assert_eq!(chat.len(), 1);
        assert_eq!(chat.messages()[0].text, SpiritualGuide::Ganesha.greeting());
    }

    #[test]
    fn test_message_ids_unique_across_resets() {
        let mut chat = DivineChat::default();
        let mut seen = vec![chat.messages()[0].id];
        let _ = chat.submit("a");
        seen.push(chat.messages()[1].id);
        chat.select_guide(SpiritualGuide::Shiva);
        seen.push(chat.messages()[0].id);

        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(seen, deduped);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_quick_response_uses_guide_suggestion() {
        let mut chat = DivineChat::new(SpiritualGuide::Shiva);
        assert!(chat.quick_response(0).is_some());
        assert_eq!(chat.messages()[1].text, "Teach me meditation");
        assert!(chat.quick_response(4).is_none());
        assert_eq!(chat.len(), 2);
    }

    #[test]
    fn test_submit_voice_uses_placeholder() {
        let mut chat = DivineChat::default();
        assert!(chat.submit_voice().is_some());
        assert_eq!(chat.messages()[1].text, VOICE_PLACEHOLDER);
    }

    #[test]
    fn test_pick_reply_covers_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = [0usize; 3];
        for _ in 0..300 {
            let reply = pick_reply(&mut rng);
            let idx = REPLY_POOL.iter().position(|r| *r == reply).unwrap();
            hits[idx] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0));
    }
}
