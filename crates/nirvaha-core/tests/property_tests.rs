//! Property-based tests for page view-state
//!
//! Uses proptest to check the chat, filter, and menu invariants over
//! arbitrary inputs.

use proptest::prelude::*;
use nirvaha_core::catalog::{filter_sessions, MeditationCategory, MEDITATIONS};
use nirvaha_core::nav::NavMenu;
use nirvaha_core::{DivineChat, SpiritualGuide};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Strings made only of whitespace (including empty)
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{0,20}").expect("valid regex")
}

/// Strings with at least one visible character
fn message_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(" {0,3}[a-zA-Z0-9?!.]{1,60} {0,3}").expect("valid regex")
}

fn guide_strategy() -> impl Strategy<Value = SpiritualGuide> {
    prop::sample::select(SpiritualGuide::ALL.to_vec())
}

fn category_strategy() -> impl Strategy<Value = MeditationCategory> {
    prop::sample::select(MeditationCategory::ALL.to_vec())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Whitespace-only input never changes the conversation
    #[test]
    fn blank_input_appends_nothing(guide in guide_strategy(), text in blank_strategy()) {
        let mut chat = DivineChat::new(guide);
        let before = chat.clone();
        prop_assert!(chat.submit(&text).is_none());
        prop_assert_eq!(chat, before);
    }

    /// Non-blank input is appended verbatim as the last message
    #[test]
    fn message_appended_verbatim(guide in guide_strategy(), text in message_strategy()) {
        let mut chat = DivineChat::new(guide);
        prop_assert!(chat.submit(&text).is_some());
        let last = chat.messages().last().unwrap();
        prop_assert_eq!(&last.text, &text);
        prop_assert!(!last.from_assistant);
    }

    /// Switching to another guide leaves exactly the new greeting
    #[test]
    fn selecting_guide_leaves_single_greeting(
        first in guide_strategy(),
        second in guide_strategy(),
        texts in prop::collection::vec(message_strategy(), 0..10),
    ) {
        prop_assume!(first != second);
        let mut chat = DivineChat::new(first);
        for text in &texts {
            let _ = chat.submit(text);
        }
        chat.select_guide(second);
        prop_assert_eq!(chat.len(), 1);
        prop_assert_eq!(chat.messages()[0].text.as_str(), second.greeting());
        prop_assert!(chat.messages()[0].from_assistant);
    }

    /// Picking the current guide again leaves the conversation untouched
    #[test]
    fn reselecting_guide_keeps_messages(
        guide in guide_strategy(),
        texts in prop::collection::vec(message_strategy(), 0..10),
    ) {
        let mut chat = DivineChat::new(guide);
        for text in &texts {
            let _ = chat.submit(text);
        }
        let before = chat.messages().to_vec();
        chat.select_guide(guide);
        prop_assert_eq!(chat.messages(), before.as_slice());
    }

    /// Filtered sessions are exactly those matching the category
    #[test]
    fn filter_matches_exactly(category in category_strategy()) {
        let shown = filter_sessions(category);
        let expected: Vec<_> = MEDITATIONS
            .iter()
            .filter(|m| category == MeditationCategory::All || m.category == category)
            .collect();
        prop_assert_eq!(shown, expected);
    }

    /// An even number of toggles leaves the menu closed
    #[test]
    fn even_toggles_close_menu(pairs in 0usize..20, scroll in 0.0f64..500.0) {
        let mut menu = NavMenu::new();
        menu.on_scroll(scroll);
        for _ in 0..pairs * 2 {
            menu.toggle();
        }
        prop_assert!(!menu.is_open());
    }
}
