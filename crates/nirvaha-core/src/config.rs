//! Application configuration.
//!
//! Values come from three layers, lowest precedence first: built-in
//! defaults, an optional JSON file, and command-line overrides applied by the
//! binary through [`AppConfig::apply`].

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::REPLY_DELAY;
use crate::error::{NirvahaError, NirvahaResult};

/// Upper bound for the simulated reply latency.
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Default tracing filter when neither `RUST_LOG` nor a config value is set.
pub const DEFAULT_LOG_FILTER: &str = "nirvaha=info,nirvaha_core=info";

/// Desktop window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nirvaha - Harmony of Mind".to_string(),
            width: 1280.0,
            height: 900.0,
        }
    }
}

/// Top-level configuration shared with every page through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// Delay before a simulated guide reply appears, in milliseconds
    pub reply_delay_ms: u64,
    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            reply_delay_ms: REPLY_DELAY.as_millis() as u64,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub reply_delay_ms: Option<u64>,
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Read a JSON config file. Missing keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> NirvahaResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides and re-validate.
    pub fn apply(mut self, overrides: ConfigOverrides) -> NirvahaResult<Self> {
        if let Some(width) = overrides.width {
            self.window.width = width;
        }
        if let Some(height) = overrides.height {
            self.window.height = height;
        }
        if let Some(delay) = overrides.reply_delay_ms {
            self.reply_delay_ms = delay;
        }
        if let Some(filter) = overrides.log_filter {
            self.log_filter = filter;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> NirvahaResult<()> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(NirvahaError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            return Err(NirvahaError::Config(format!(
                "reply_delay_ms must be at most {}, got {}",
                MAX_REPLY_DELAY_MS, self.reply_delay_ms
            )));
        }
        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_use_two_second_reply() {
        let config = AppConfig::default();
        assert_eq!(config.reply_delay_ms, 2000);
        assert_eq!(config.reply_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nirvaha.json");
        std::fs::write(&path, r#"{ "reply_delay_ms": 500 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.window, WindowConfig::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = AppConfig::load(temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, NirvahaError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ reply_delay_ms: ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(NirvahaError::Json(_))));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nirvaha.json");
        std::fs::write(&path, r#"{ "reply_delay_ms": 500, "window": { "width": 800.0 } }"#).unwrap();

        let config = AppConfig::load(&path)
            .unwrap()
            .apply(ConfigOverrides {
                reply_delay_ms: Some(100),
                log_filter: Some("debug".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.reply_delay_ms, 100);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let too_slow = AppConfig::default().apply(ConfigOverrides {
            reply_delay_ms: Some(MAX_REPLY_DELAY_MS + 1),
            ..Default::default()
        });
        assert!(matches!(too_slow, Err(NirvahaError::Config(_))));

        let flat = AppConfig::default().apply(ConfigOverrides {
            height: Some(0.0),
            ..Default::default()
        });
        assert!(matches!(flat, Err(NirvahaError::Config(_))));
    }
}
