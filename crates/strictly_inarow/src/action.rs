//! First-class action types for N-in-a-row.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated before they touch the ledger.

use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing a piece on a flattened cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Flattened index of the chosen cell.
    pub cell: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the flattened cell index of this move.
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> #{}", self.player, self.cell)
    }
}

/// A move that cannot be applied (the "invalid move" error kind).
///
/// Recoverable: the caller rejects the selection and asks again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index lies outside `[0, N²)`.
    #[display("Cell #{index} is outside the grid (0..{cell_count})")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of cells on the grid.
        cell_count: usize,
    },

    /// The cell was already played.
    #[display("Cell #{_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(#[error(not(source))] Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}
