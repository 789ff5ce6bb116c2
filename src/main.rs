#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use nirvaha_core::logging::LoggingBuilder;
use nirvaha_core::{AppConfig, ConfigOverrides};

/// Global configuration, set once from the command line
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application configuration (defaults if not yet set)
pub fn get_app_config() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

/// Nirvaha - Harmony of Mind
#[derive(Parser, Debug)]
#[command(name = "nirvaha-desktop")]
#[command(about = "Nirvaha - meditation, sound healing and divine chat")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,

    /// Delay before a guide replies, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// tracing filter, e.g. "nirvaha=debug" (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            width: self.width,
            height: self.height,
            reply_delay_ms: self.reply_delay_ms,
            log_filter: self.log_filter.clone(),
        }
    }
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    let base = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    base.apply(args.overrides())
        .context("invalid command-line override")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    LoggingBuilder::new()
        .with_filter(config.log_filter.clone())
        .init()?;

    tracing::info!(
        reply_delay_ms = config.reply_delay_ms,
        "Starting '{}' ({}x{})",
        config.window.title,
        config.window.width,
        config.window.height
    );

    let window = WindowBuilder::new()
        .with_title(&config.window.title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(
            config.window.width,
            config.window.height,
        ))
        .with_resizable(true);

    // Store configuration globally
    let _ = APP_CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
