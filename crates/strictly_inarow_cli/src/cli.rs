//! Command-line interface for inarow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// InARow - N-in-a-row on a square grid
#[derive(Parser, Debug)]
#[command(name = "inarow")]
#[command(about = "Play N-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive two-player game
    Play {
        /// Grid side length (3-25). Prompted for if not set here or in the settings file.
        #[arg(short, long)]
        side: Option<usize>,

        /// Pieces in a row needed to win (3-side). Prompted for if not set.
        #[arg(short = 'k', long)]
        run_length: Option<usize>,

        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a list of cell indices and report the outcome
    Replay {
        /// Grid side length (3-25)
        #[arg(short, long)]
        side: usize,

        /// Pieces in a row needed to win (3-side)
        #[arg(short = 'k', long)]
        run_length: usize,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,

        /// Flattened cell indices in play order
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
