//! Microphone button and the webview recorder bridge.
//!
//! The recorder runs in the webview (`getUserMedia` + `MediaRecorder`) and
//! reports each step as a JSON [`RecorderEvent`](nirvaha_core::RecorderEvent).
//! [`VoiceCapture`] decides what those events mean. The recorded audio is
//! never read; a finished recording submits a fixed placeholder.

use dioxus::prelude::*;
use nirvaha_core::{CaptureOutcome, VoiceCapture};

use crate::components::icons::{MicIcon, StopIcon};

/// Starts a recording and streams recorder events back.
const RECORDER_START: &str = r#"
    try {
        const stream = await navigator.mediaDevices.getUserMedia({ audio: true });
        const recorder = new MediaRecorder(stream);
        window.__nirvahaRecorder = recorder;
        recorder.ondataavailable = (e) => dioxus.send({ kind: "chunk", bytes: e.data.size });
        recorder.onstop = () => {
            stream.getTracks().forEach((track) => track.stop());
            window.__nirvahaRecorder = null;
            dioxus.send({ kind: "stopped" });
        };
        recorder.start();
        dioxus.send({ kind: "started" });
    } catch (err) {
        dioxus.send({ kind: "denied", reason: String(err) });
    }
    await new Promise(() => {});
"#;

const RECORDER_STOP: &str = r#"
    const recorder = window.__nirvahaRecorder;
    if (recorder && recorder.state !== "inactive") {
        recorder.stop();
    }
"#;

fn show_alert(text: &str) {
    match serde_json::to_string(text) {
        Ok(quoted) => {
            let _ = document::eval(&format!("alert({quoted});"));
        }
        Err(e) => tracing::error!("Failed to encode alert text: {}", e),
    }
}

/// Mic toggle shown inside the chat composer.
#[component]
pub fn VoiceButton(
    /// Mirrors whether audio is being recorded
    on_recording: EventHandler<bool>,
    /// Called with the text to submit once a recording finishes
    on_message: EventHandler<String>,
) -> Element {
    let mut capture = use_signal(VoiceCapture::new);

    // Release the microphone when leaving the page mid-recording
    use_drop(|| {
        let _ = document::eval(RECORDER_STOP);
    });

    let mut start = move || {
        if let Err(e) = capture.write().begin() {
            tracing::debug!("Ignoring mic press: {}", e);
            return;
        }
        tracing::debug!("Requesting microphone");

        spawn(async move {
            let mut recorder = document::eval(RECORDER_START);
            let mut was_recording = false;

            loop {
                let raw = match recorder.recv::<serde_json::Value>().await {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!("Recorder bridge closed: {:?}", e);
                        capture.set(VoiceCapture::new());
                        on_recording.call(false);
                        break;
                    }
                };

                let outcome = capture.write().handle_json(raw);
                match outcome {
                    Ok(None) => {
                        let recording = capture.read().is_recording();
                        if recording != was_recording {
                            was_recording = recording;
                            on_recording.call(recording);
                        }
                    }
                    Ok(Some(CaptureOutcome::Message(text))) => {
                        on_recording.call(false);
                        on_message.call(text.to_string());
                        break;
                    }
                    Ok(Some(CaptureOutcome::Denied { alert, reason })) => {
                        tracing::warn!(reason = %reason, "Microphone access denied");
                        on_recording.call(false);
                        show_alert(alert);
                        break;
                    }
                    Err(e) => tracing::warn!("Unexpected recorder event: {}", e),
                }
            }
        });
    };

    let stop = move || {
        if capture.read().request_stop() {
            tracing::debug!("Stopping recording");
            let _ = document::eval(RECORDER_STOP);
        }
    };

    let recording = capture.read().is_recording();
    let busy = capture.read().is_active() && !recording;

    rsx! {
        button {
            class: if recording { "mic-btn recording" } else { "mic-btn" },
            r#type: "button",
            disabled: busy,
            "aria-label": if recording { "Stop recording" } else { "Start voice input" },
            "aria-pressed": if recording { "true" } else { "false" },
            onclick: move |_| {
                if recording {
                    stop();
                } else {
                    start();
                }
            },
            if recording {
                StopIcon {}
            } else {
                MicIcon {}
            }
        }
    }
}
