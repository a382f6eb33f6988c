//! Disposition Combat command-line driver.
#![allow(clippy::print_stdout)]

mod args;
mod commands;
mod config;
mod render;
mod script;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use combat_content::ContentBundle;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::args::{Cli, Command};
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let content = match cli.data.as_ref().or(config.data_dir.as_ref()) {
        Some(dir) => ContentBundle::load_dir(dir)
            .with_context(|| format!("failed to load content from {}", dir.display()))?,
        None => ContentBundle::builtin()?,
    };
    let content = Arc::new(content);
    tracing::debug!(
        cards = content.cards.len(),
        enemies = content.enemies.len(),
        fate_cards = content.fate_deck.len(),
        "content loaded"
    );

    match cli.command {
        Command::Play(args) => commands::run_play(content, args, cli.json).await,
        Command::Sweep(args) => commands::run_sweep(content, args, cli.json).await,
        Command::Replay { file, verbose } => {
            commands::run_replay(content, &file, verbose, cli.json)
        }
    }
}

/// Logs go to stderr; with a log directory they are also written to
/// `<dir>/disposition.log`. The returned guard flushes the file writer on drop.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // stdout carries command output, so stderr stays quiet unless RUST_LOG says otherwise
    let stderr_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, "disposition.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/disposition.log", dir.display());
    Ok(Some(guard))
}
