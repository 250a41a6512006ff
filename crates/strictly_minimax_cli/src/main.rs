//! Strictly Minimax - Unified CLI
//!
//! Headless driver for the exact-search tic-tac-toe engine.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_minimax_cli::{Cli, Command, SelfPlayConfig, analyze, best, selfplay};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_filter);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Selfplay {
            config,
            opening,
            json,
        } => run_selfplay(config, opening, json, &mut out),
        Command::Best { board } => best(&board, &mut out),
        Command::Analyze { board } => analyze(&board, &mut out),
    }
}

/// Run an engine-vs-engine game
#[instrument(skip_all, fields(config_path = %config.display()))]
fn run_selfplay(
    config: std::path::PathBuf,
    opening: Option<Vec<strictly_minimax::Action>>,
    json: bool,
    out: &mut impl std::io::Write,
) -> Result<()> {
    let mut config = SelfPlayConfig::load_or_default(&config)?;

    // Override opening if provided
    if let Some(opening) = opening {
        info!(moves = opening.len(), "Overriding opening");
        config = config.with_opening(opening);
    }

    selfplay(&config, json, out)?;
    Ok(())
}

/// Logs go to stderr so stdout carries only game output.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
