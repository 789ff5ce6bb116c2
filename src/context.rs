//! Configuration context for Nirvaha pages.
//!
//! Provides the [`AppConfig`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| get_app_config());
//!
//! // In child components
//! let delay = use_app_config().reply_delay();
//! ```

use dioxus::prelude::*;
use nirvaha_core::AppConfig;

/// Get the configuration set from the command line.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Hook to access the application configuration from context.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
