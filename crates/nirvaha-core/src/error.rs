//! Error types for Nirvaha

use thiserror::Error;

use crate::voice::VoiceError;

/// Main error type for Nirvaha operations
#[derive(Error, Debug)]
pub enum NirvahaError {
    /// No spiritual guide with this id
    #[error("Unknown guide: {0}")]
    UnknownGuide(String),

    /// No meditation category with this id
    #[error("Unknown meditation category: {0}")]
    UnknownCategory(String),

    /// No profile tab with this id
    #[error("Unknown profile tab: {0}")]
    UnknownTab(String),

    /// Microphone capture failed or was used out of order
    #[error("Voice capture error: {0}")]
    Voice(#[from] VoiceError),

    /// Configuration values out of range
    #[error("Config error: {0}")]
    Config(String),

    /// Global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a config file or recorder message
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using NirvahaError
pub type NirvahaResult<T> = Result<T, NirvahaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NirvahaError::UnknownGuide("vishnu".to_string());
        assert_eq!(format!("{}", err), "Unknown guide: vishnu");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NirvahaError = io_err.into();
        assert!(matches!(err, NirvahaError::Io(_)));
    }

    #[test]
    fn test_error_from_voice() {
        let err: NirvahaError = VoiceError::AlreadyActive.into();
        assert!(matches!(err, NirvahaError::Voice(VoiceError::AlreadyActive)));
        assert!(err.to_string().starts_with("Voice capture error"));
    }
}
