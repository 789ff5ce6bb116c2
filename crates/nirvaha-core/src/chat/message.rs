//! Chat message type for display
//!
//! A [`ChatMessage`] lives only as long as the conversation that holds it.

use chrono::{DateTime, Local};

/// A single line of a Divine Chat conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique within the session that created it
    pub id: u64,
    /// Message text exactly as typed or chosen
    pub text: String,
    /// Whether the guide (rather than the user) said it
    pub from_assistant: bool,
    /// When the message was appended
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    /// Create a message stamped with the current local time.
    pub fn new(id: u64, text: impl Into<String>, from_assistant: bool) -> Self {
        Self::at(id, text, from_assistant, Local::now())
    }

    /// Create a message with an explicit timestamp.
    pub fn at(
        id: u64,
        text: impl Into<String>,
        from_assistant: bool,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            from_assistant,
            created_at,
        }
    }

    /// 12-hour clock label with two-digit hour and minute, e.g. "03:04 PM".
    pub fn time_label(&self) -> String {
        self.created_at.format("%I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_chat_message_creation() {
        let msg = ChatMessage::new(7, "Teach me meditation", false);
        assert_eq!(msg.id, 7);
        assert_eq!(msg.text, "Teach me meditation");
        assert!(!msg.from_assistant);
    }

    #[test]
    fn test_time_label_afternoon() {
        let ts = Local.with_ymd_and_hms(2024, 1, 15, 15, 4, 0).unwrap();
        let msg = ChatMessage::at(1, "Om", true, ts);
        assert_eq!(msg.time_label(), "03:04 PM");
    }

    #[test]
    fn test_time_label_morning() {
        let ts = Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let msg = ChatMessage::at(1, "Om", true, ts);
        assert_eq!(msg.time_label(), "09:30 AM");
    }
}
