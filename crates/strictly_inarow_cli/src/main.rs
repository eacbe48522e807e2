//! InARow - terminal host for the strictly_inarow rules engine.

#![warn(missing_docs)]

mod cli;
mod input;
mod play;
mod render;
mod replay;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use play::Console;
use replay::ReplayReport;
use settings::Settings;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so boards and reports stay clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            side,
            run_length,
            config,
        } => run_play(side, run_length, config),
        Command::Replay {
            side,
            run_length,
            json,
            moves,
        } => run_replay(side, run_length, json, &moves),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(side: Option<usize>, run_length: Option<usize>, config: Option<PathBuf>) -> Result<()> {
    let settings = match config {
        Some(path) => Settings::from_file(&path)
            .with_context(|| format!("Could not load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let settings = settings.with_overrides(side, run_length);

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    let config = console.resolve_config(settings)?;
    info!(%config, "Starting interactive game");
    console.play(config)?;
    Ok(())
}

/// Replay a ledger and print the result
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(side: usize, run_length: usize, json: bool, moves: &[usize]) -> Result<()> {
    let report = ReplayReport::build(side, run_length, moves)?;
    let text = if json {
        report.to_json()?
    } else {
        report.to_text()?
    };
    print!("{}", text);
    if json {
        println!();
    }
    Ok(())
}
