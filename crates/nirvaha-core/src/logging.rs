//! Console logging setup.
//!
//! ```ignore
//! use nirvaha_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_filter("nirvaha=debug")
//!     .init()?;
//! ```
//!
//! `RUST_LOG`, when set, replaces the configured filter.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;
use crate::error::{NirvahaError, NirvahaResult};

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    env_filter: String,
    ansi: bool,
    with_target: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: true,
            with_target: true,
        }
    }

    /// Set the filter directive (e.g., "nirvaha=info,nirvaha_core=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = filter.into();
        self
    }

    /// Disable ANSI colours (for piping logs to a file).
    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Hide the module target in each line.
    pub fn no_target(mut self) -> Self {
        self.with_target = false;
        self
    }

    /// Resolve the effective filter: `RUST_LOG` first, then the configured one.
    pub fn build_filter(&self) -> NirvahaResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.env_filter)
            .map_err(|e| NirvahaError::Logging(format!("invalid filter '{}': {}", self.env_filter, e)))
    }

    /// Install the subscriber globally. Fails if one is already set.
    pub fn init(self) -> NirvahaResult<()> {
        let filter = self.build_filter()?;
        let fmt_layer = fmt::layer()
            .with_ansi(self.ansi)
            .with_target(self.with_target);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| NirvahaError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let builder = LoggingBuilder::new();
        assert_eq!(builder.env_filter, DEFAULT_LOG_FILTER);
        assert!(EnvFilter::try_new(&builder.env_filter).is_ok());
    }

    #[test]
    fn test_builder_options() {
        let builder = LoggingBuilder::new()
            .with_filter("nirvaha_core=debug")
            .no_ansi()
            .no_target();
        assert_eq!(builder.env_filter, "nirvaha_core=debug");
        assert!(!builder.ansi);
        assert!(!builder.with_target);
    }
}
