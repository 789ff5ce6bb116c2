//! Microphone capture lifecycle.
//!
//! The webview owns the actual `MediaRecorder`; it reports what happens as
//! [`RecorderEvent`] JSON messages. [`VoiceCapture`] folds those events into
//! a small state machine. Captured audio is counted but never kept: a
//! finished recording always becomes [`crate::chat::VOICE_PLACEHOLDER`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::VOICE_PLACEHOLDER;

/// Text of the blocking alert shown when microphone access is refused.
pub const MIC_PERMISSION_ALERT: &str = "Please enable microphone access to use voice input";

/// Voice capture failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    /// A capture session is already requesting or recording
    #[error("a recording is already in progress")]
    AlreadyActive,

    /// Stop or chunk arrived with no recording running
    #[error("no recording in progress")]
    NotRecording,

    /// Browser refused microphone access
    #[error("microphone access denied: {0}")]
    PermissionDenied(String),
}

/// Events sent by the recorder bridge script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecorderEvent {
    /// `getUserMedia` succeeded and the recorder started
    Started,
    /// A data chunk became available
    Chunk { bytes: u64 },
    /// The recorder stopped and released its tracks
    Stopped,
    /// `getUserMedia` rejected
    Denied { reason: String },
}

/// Where the capture session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Requesting,
    Recording { chunks: usize, bytes: u64 },
}

/// Result of a session that has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Recording finished; submit this text as the user's message
    Message(&'static str),
    /// Permission refused; show this alert
    Denied { alert: &'static str, reason: String },
}

/// State machine for one page view's microphone usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCapture {
    state: CaptureState,
}

impl VoiceCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// True only while audio is actually being recorded.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, CaptureState::Recording { .. })
    }

    pub fn is_active(&self) -> bool {
        self.state != CaptureState::Idle
    }

    /// Ask for the microphone. Only valid from idle.
    pub fn begin(&mut self) -> Result<(), VoiceError> {
        if self.is_active() {
            return Err(VoiceError::AlreadyActive);
        }
        self.state = CaptureState::Requesting;
        Ok(())
    }

    /// Whether a stop request should be forwarded to the recorder.
    pub fn request_stop(&self) -> bool {
        self.is_recording()
    }

    /// Feed one recorder event. Returns an outcome when the session ends.
    pub fn handle(&mut self, event: RecorderEvent) -> Result<Option<CaptureOutcome>, VoiceError> {
        match (self.state, event) {
            (CaptureState::Requesting, RecorderEvent::Started) => {
                self.state = CaptureState::Recording { chunks: 0, bytes: 0 };
                Ok(None)
            }
            (CaptureState::Recording { chunks, bytes }, RecorderEvent::Chunk { bytes: size }) => {
                if size > 0 {
                    self.state = CaptureState::Recording {
                        chunks: chunks.saturating_add(1),
                        bytes: bytes.saturating_add(size),
                    };
                }
                Ok(None)
            }
            (CaptureState::Recording { chunks, bytes }, RecorderEvent::Stopped) => {
                tracing::debug!(chunks, bytes, "Recording stopped, discarding audio");
                self.state = CaptureState::Idle;
                Ok(Some(CaptureOutcome::Message(VOICE_PLACEHOLDER)))
            }
            (CaptureState::Requesting, RecorderEvent::Denied { reason }) => {
                self.state = CaptureState::Idle;
                Ok(Some(CaptureOutcome::Denied {
                    alert: MIC_PERMISSION_ALERT,
                    reason,
                }))
            }
            (CaptureState::Idle, _) => Err(VoiceError::NotRecording),
            (_, RecorderEvent::Started) | (_, RecorderEvent::Denied { .. }) => {
                Err(VoiceError::AlreadyActive)
            }
            (CaptureState::Requesting, _) => Err(VoiceError::NotRecording),
        }
    }

    /// Parse a raw bridge message and feed it in.
    pub fn handle_json(
        &mut self,
        value: serde_json::Value,
    ) -> crate::error::NirvahaResult<Option<CaptureOutcome>> {
        let event: RecorderEvent = serde_json::from_value(value)?;
        Ok(self.handle(event)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_recording_yields_placeholder() {
        let mut capture = VoiceCapture::new();
        capture.begin().unwrap();
        assert!(!capture.is_recording());

        assert_eq!(capture.handle(RecorderEvent::Started).unwrap(), None);
        assert!(capture.is_recording());

        capture.handle(RecorderEvent::Chunk { bytes: 512 }).unwrap();
        capture.handle(RecorderEvent::Chunk { bytes: 0 }).unwrap();
        capture.handle(RecorderEvent::Chunk { bytes: 256 }).unwrap();
        assert_eq!(
            capture.state(),
            CaptureState::Recording { chunks: 2, bytes: 768 }
        );

        let outcome = capture.handle(RecorderEvent::Stopped).unwrap();
        assert_eq!(outcome, Some(CaptureOutcome::Message(VOICE_PLACEHOLDER)));
        assert_eq!(capture.state(), CaptureState::Idle);
    }

    #[test]
    fn test_denied_returns_alert() {
        let mut capture = VoiceCapture::new();
        capture.begin().unwrap();
        let outcome = capture
            .handle(RecorderEvent::Denied {
                reason: "NotAllowedError".to_string(),
            })
            .unwrap();
        assert_eq!(
            outcome,
            Some(CaptureOutcome::Denied {
                alert: MIC_PERMISSION_ALERT,
                reason: "NotAllowedError".to_string(),
            })
        );
        assert!(!capture.is_active());
    }

    #[test]
    fn test_begin_twice_fails() {
        let mut capture = VoiceCapture::new();
        capture.begin().unwrap();
        assert_eq!(capture.begin(), Err(VoiceError::AlreadyActive));
    }

    #[test]
    fn test_stop_without_recording_is_noop() {
        let mut capture = VoiceCapture::new();
        assert!(!capture.request_stop());
        capture.begin().unwrap();
        assert!(!capture.request_stop());
        capture.handle(RecorderEvent::Started).unwrap();
        assert!(capture.request_stop());
    }

    #[test]
    fn test_events_while_idle_are_rejected() {
        let mut capture = VoiceCapture::new();
        assert_eq!(
            capture.handle(RecorderEvent::Stopped),
            Err(VoiceError::NotRecording)
        );
    }

    #[test]
    fn test_handle_json_bridge_messages() {
        let mut capture = VoiceCapture::new();
        capture.begin().unwrap();
        capture.handle_json(json!({ "kind": "started" })).unwrap();
        capture
            .handle_json(json!({ "kind": "chunk", "bytes": 128 }))
            .unwrap();
        let outcome = capture.handle_json(json!({ "kind": "stopped" })).unwrap();
        assert_eq!(outcome, Some(CaptureOutcome::Message(VOICE_PLACEHOLDER)));

        assert!(capture.handle_json(json!({ "kind": "exploded" })).is_err());
    }

    #[test]
    fn test_oversized_chunk_saturates() {
        let mut capture = VoiceCapture::new();
        capture.begin().unwrap();
        capture.handle(RecorderEvent::Started).unwrap();
        capture.handle_json(json!({ "kind": "chunk", "bytes": u64::MAX })).unwrap();
        capture.handle_json(json!({ "kind": "chunk", "bytes": 10 })).unwrap();
        assert_eq!(
            capture.state(),
            CaptureState::Recording { chunks: 2, bytes: u64::MAX }
        );
    }
}
