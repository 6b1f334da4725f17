//! Terminal client entry point.
mod app;
mod config;
mod input;
mod messages;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::CliConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env()?;

    setup_logging(&config)?;

    App::new(&config)?.run().await
}

/// Routes tracing output to a log file so the TUI keeps the terminal to
/// itself.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "pairs.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the non-blocking writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}

/// Platform cache directory for logs, with a /tmp fallback.
fn default_log_directory() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "pairs")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("/tmp/pairs/logs"))
}
