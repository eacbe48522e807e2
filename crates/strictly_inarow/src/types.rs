//! Core domain types for N-in-a-row.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player one (moves at even ledger positions, goes first).
    #[strum(to_string = "Player one")]
    One,
    /// Player two (moves at odd ledger positions).
    #[strum(to_string = "Player two")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player who makes the ply at ledger position `ply` (0-indexed).
    ///
    /// Even positions belong to [`Player::One`], odd positions to [`Player::Two`].
    pub fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Player::One } else { Player::Two }
    }
}

/// A grid cell in two-dimensional form.
///
/// Cells flatten column-major: `index = column * side + row`, so the row
/// varies fastest along the ledger's index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {column})")]
pub struct Cell {
    /// Row, `index % side`.
    pub row: usize,
    /// Column, `index / side`.
    pub column: usize,
}

impl Cell {
    /// Creates a cell from row and column.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Decomposes a flattened index on a grid of the given side.
    #[instrument]
    pub fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index % side,
            column: index / side,
        }
    }

    /// Flattens this cell for a grid of the given side.
    ///
    /// Returns `None` if the cell lies outside the grid.
    #[instrument]
    pub fn to_index(self, side: usize) -> Option<usize> {
        if self.row < side && self.column < side {
            Some(self.column * side + self.row)
        } else {
            None
        }
    }
}

/// Classification of the game after the most recent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and free cells remain.
    Ongoing,
    /// The grid is full and nobody aligned a run.
    Draw,
    /// The player who made the last move completed a run.
    Win(Player),
}

impl Outcome {
    /// Returns true once the game can accept no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Game in progress"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win(player) => write!(f, "{} wins", player),
        }
    }
}
