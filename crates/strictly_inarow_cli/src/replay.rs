//! Non-interactive replay of a recorded ledger.

use crate::render::render_board;
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_inarow::{GameConfig, GameInProgress, GameResult, MoveLedger, Outcome, WinningRun};
use tracing::instrument;

/// Machine-readable summary of a replayed ledger.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Grid and win settings.
    pub config: GameConfig,
    /// Cells in play order.
    pub moves: Vec<usize>,
    /// Result after the last move.
    pub outcome: Outcome,
    /// The aligned cells, when somebody won.
    pub winning_run: Option<WinningRun>,
}

impl ReplayReport {
    /// Replays `moves` from an empty grid.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn build(side: usize, run_length: usize, moves: &[usize]) -> Result<Self> {
        let config = GameConfig::new(side, run_length).context("Invalid game settings")?;
        let result = GameInProgress::replay(config, moves).context("Ledger could not be replayed")?;

        let outcome = result.outcome();
        let winning_run = match &result {
            GameResult::Finished(finished) => finished.winning_run().cloned(),
            GameResult::InProgress(_) => None,
        };

        Ok(Self {
            config,
            moves: result.ledger().moves().to_vec(),
            outcome,
            winning_run,
        })
    }

    /// Renders the outcome and board for a terminal.
    pub fn to_text(&self) -> Result<String> {
        let ledger = MoveLedger::from_moves(self.config.side(), &self.moves)
            .context("Replayed ledger is inconsistent")?;
        let mut out = format!("{}\n{}{}\n", self.config, render_board(&ledger), self.outcome);
        if let Some(run) = &self.winning_run {
            out.push_str(&format!("Winning {} run: {:?}\n", run.axis, run.cells));
        }
        Ok(out)
    }

    /// Serializes the report as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize replay report")
    }
}
