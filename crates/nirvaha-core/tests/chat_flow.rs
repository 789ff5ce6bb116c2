//! End-to-end Divine Chat flows with a paused tokio clock.

use std::time::Duration;

use nirvaha_core::chat::{DivineChat, REPLY_DELAY, REPLY_POOL, VOICE_PLACEHOLDER};
use nirvaha_core::voice::{CaptureOutcome, RecorderEvent, VoiceCapture};
use nirvaha_core::SpiritualGuide;

#[tokio::test(start_paused = true)]
async fn reply_arrives_only_after_delay() {
    let mut chat = DivineChat::new(SpiritualGuide::Krishna);
    let pending = chat.submit("Tell me about karma yoga").expect("non-empty input");

    // User message is visible before any time passes
    assert_eq!(chat.len(), 2);
    assert!(chat.is_typing());

    let settle = tokio::spawn(pending.settle(REPLY_DELAY));

    tokio::time::sleep(REPLY_DELAY - Duration::from_millis(1)).await;
    assert!(!settle.is_finished());

    tokio::time::sleep(Duration::from_millis(2)).await;
    let reply = settle.await.unwrap();

    assert!(chat.deliver(reply));
    assert_eq!(chat.len(), 3);
    let last = chat.messages().last().unwrap();
    assert!(last.from_assistant);
    assert!(REPLY_POOL.contains(&last.text.as_str()));
    assert!(!chat.is_typing());
}

#[tokio::test(start_paused = true)]
async fn each_submission_gets_exactly_one_reply() {
    let mut chat = DivineChat::new(SpiritualGuide::Shiva);
    let pendings: Vec<_> = ["one", "two", "three"]
        .iter()
        .filter_map(|text| chat.submit(text))
        .collect();
    assert_eq!(pendings.len(), 3);

    for pending in pendings {
        let reply = pending.settle(REPLY_DELAY).await;
        assert!(chat.deliver(reply));
    }

    let assistant = chat.messages().iter().filter(|m| m.from_assistant).count();
    let user = chat.messages().iter().filter(|m| !m.from_assistant).count();
    // greeting + three replies
    assert_eq!(assistant, 4);
    assert_eq!(user, 3);
}

#[tokio::test(start_paused = true)]
async fn reply_after_guide_switch_is_discarded() {
    let mut chat = DivineChat::new(SpiritualGuide::Krishna);
    let pending = chat.submit("How to find my dharma?").unwrap();

    chat.select_guide(SpiritualGuide::Ganesha);
    let reply = pending.settle(REPLY_DELAY).await;

    assert!(!chat.deliver(reply));
    assert_eq!(chat.len(), 1);
    assert_eq!(chat.messages()[0].text, SpiritualGuide::Ganesha.greeting());
}

#[tokio::test(start_paused = true)]
async fn voice_recording_becomes_placeholder_message() {
    let mut chat = DivineChat::default();
    let mut capture = VoiceCapture::new();

    capture.begin().unwrap();
    capture.handle(RecorderEvent::Started).unwrap();
    chat.set_recording(capture.is_recording());
    assert!(chat.is_recording());

    capture.handle(RecorderEvent::Chunk { bytes: 4096 }).unwrap();
    let outcome = capture.handle(RecorderEvent::Stopped).unwrap();
    chat.set_recording(capture.is_recording());
    assert!(!chat.is_recording());

    assert_eq!(outcome, Some(CaptureOutcome::Message(VOICE_PLACEHOLDER)));
    let pending = chat.submit_voice().unwrap();
    chat.deliver(pending.settle(REPLY_DELAY).await);

    assert_eq!(chat.messages()[1].text, VOICE_PLACEHOLDER);
    assert_eq!(chat.len(), 3);
}
