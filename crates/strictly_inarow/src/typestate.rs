//! Phase-specific typestate structs for an N-in-a-row game session.
//!
//! Each phase is its own type. A `GameFinished` ALWAYS has a verdict,
//! not `Option<Verdict>`, and only `GameInProgress` accepts moves.

use super::action::{Move, MoveError};
use super::config::GameConfig;
use super::contracts::{Contract, MoveContract};
use super::ledger::MoveLedger;
use super::rules::{self, WinningRun};
use super::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase - configured, no moves yet.
///
/// Holds the empty ledger the game will be played on.
#[derive(Debug, Clone)]
pub struct GameSetup {
    config: GameConfig,
    ledger: MoveLedger,
}

impl GameSetup {
    /// Creates a new game in setup phase.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            ledger: MoveLedger::new(config.side()),
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Starts the game (consumes setup, returns in-progress).
    ///
    /// Player one always moves first.
    #[instrument(skip(self), fields(config = %self.config))]
    pub fn start(self) -> GameInProgress {
        info!("Game started");
        GameInProgress {
            ledger: self.ledger,
            config: self.config,
        }
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress - can accept moves.
///
/// The player to move is derived from the ledger length, never stored.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    ledger: MoveLedger,
    config: GameConfig,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always ([`super::contracts::LegalMove`])
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(ply = self.ledger.len()))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.ledger.append(action.cell)?;

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        let outcome = rules::evaluate(&game.ledger, &game.config);
        if !outcome.is_terminal() {
            return Ok(GameResult::InProgress(game));
        }

        let (verdict, winning_run) = match outcome.winner() {
            Some(winner) => {
                info!(%winner, moves = game.ledger.len(), "Game won");
                let run = rules::winning_run(&game.ledger, &game.config);
                (Verdict::Winner(winner), run)
            }
            None => {
                info!(moves = game.ledger.len(), "Game drawn");
                (Verdict::Draw, None)
            }
        };
        Ok(GameResult::Finished(GameFinished {
            ledger: game.ledger,
            config: game.config,
            verdict,
            winning_run,
        }))
    }

    /// Places the current player's piece on `cell`.
    pub fn place(self, cell: usize) -> Result<GameResult, MoveError> {
        let player = self.to_move();
        self.make_move(Move::new(player, cell))
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.ledger.to_move()
    }

    /// Returns the move ledger.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the cells still free, in index order.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.ledger.cell_count())
            .filter(|&index| !self.ledger.contains(index))
            .collect()
    }

    /// Replays a sequence of cell indices from a fresh game.
    ///
    /// Stops at the move that finishes the game; any indices after it are
    /// rejected with [`MoveError::GameOver`].
    #[instrument(skip(cells), fields(count = cells.len()))]
    pub fn replay(config: GameConfig, cells: &[usize]) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(config).start();

        for (ply, &cell) in cells.iter().enumerate() {
            match game.place(cell)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => {
                    if ply + 1 < cells.len() {
                        return Err(MoveError::GameOver);
                    }
                    return Ok(GameResult::Finished(g));
                }
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Verdict {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(*player),
            Verdict::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Winner(player) => Outcome::Win(player),
            Verdict::Draw => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "{} won!", player),
            Verdict::Draw => write!(f, "There was a draw!"),
        }
    }
}

/// Game finished - verdict determined.
#[derive(Debug, Clone)]
pub struct GameFinished {
    ledger: MoveLedger,
    config: GameConfig,
    verdict: Verdict,
    winning_run: Option<WinningRun>,
}

impl GameFinished {
    /// Returns the verdict.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Returns the run that won the game, if it was won.
    pub fn winning_run(&self) -> Option<&WinningRun> {
        self.winning_run.as_ref()
    }

    /// Returns the move ledger.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Restarts the game on the same config, clearing the ledger for reuse.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        let mut ledger = self.ledger;
        ledger.clear();
        info!(config = %self.config, "Game reset");
        GameSetup {
            config: self.config,
            ledger,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the ledger regardless of phase.
    pub fn ledger(&self) -> &MoveLedger {
        match self {
            GameResult::InProgress(game) => game.ledger(),
            GameResult::Finished(game) => game.ledger(),
        }
    }

    /// Returns the outcome after the last move.
    pub fn outcome(&self) -> Outcome {
        match self {
            GameResult::InProgress(_) => Outcome::Ongoing,
            GameResult::Finished(game) => (*game.verdict()).into(),
        }
    }
}
