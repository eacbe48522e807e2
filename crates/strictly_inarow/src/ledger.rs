//! Append-only record of the moves played in one game.
//!
//! The ledger is the single mutable state of a game. Ownership of each
//! entry is never stored: it follows from the parity of the entry's
//! position, even for [`Player::One`] and odd for [`Player::Two`].

use crate::action::MoveError;
use crate::config::check_side;
use crate::error::GameError;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Ordered, duplicate-free sequence of flattened cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerSnapshot")]
pub struct MoveLedger {
    /// Grid side `N`.
    side: usize,
    /// Indices in play order.
    moves: Vec<usize>,
    /// Owner of each index, derived from `moves`.
    #[serde(skip)]
    occupancy: Vec<Option<Player>>,
}

impl MoveLedger {
    /// Creates an empty ledger for a grid of the given side.
    ///
    /// `side` is expected to come from a validated
    /// [`GameConfig`](crate::GameConfig); deserialized ledgers are checked
    /// against the same bounds before any storage is allocated.
    #[instrument]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            moves: Vec::new(),
            occupancy: vec![None; side * side],
        }
    }

    /// Appends the next ply.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if `index >= N²` and
    /// [`MoveError::CellOccupied`] if the cell was already played. The
    /// ledger is unchanged on error.
    #[instrument(skip(self), fields(ply = self.moves.len()))]
    pub fn append(&mut self, index: usize) -> Result<(), MoveError> {
        let cell_count = self.cell_count();
        let slot = self
            .occupancy
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds { index, cell_count })?;
        if slot.is_some() {
            warn!(index, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(index));
        }

        let player = Player::for_ply(self.moves.len());
        *slot = Some(player);
        self.moves.push(index);
        debug!(index, %player, "Move appended");
        Ok(())
    }

    /// Returns the given player's moves in play order.
    #[instrument(skip(self))]
    pub fn moves_of(&self, player: Player) -> Vec<usize> {
        let first = match player {
            Player::One => 0,
            Player::Two => 1,
        };
        self.moves.iter().skip(first).step_by(2).copied().collect()
    }

    /// Returns the most recently appended index.
    pub fn last_move(&self) -> Option<usize> {
        self.moves.last().copied()
    }

    /// Returns the player who made the most recent move.
    pub fn last_mover(&self) -> Option<Player> {
        self.moves.len().checked_sub(1).map(Player::for_ply)
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        Player::for_ply(self.moves.len())
    }

    /// Returns who played `index`, if anyone.
    pub fn owner_of(&self, index: usize) -> Option<Player> {
        self.occupancy.get(index).copied().flatten()
    }

    /// Returns true if `index` has been played.
    pub fn contains(&self, index: usize) -> bool {
        self.owner_of(index).is_some()
    }

    /// All moves in play order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Current move count.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true before the first move.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns true once every cell has been played.
    pub fn is_full(&self) -> bool {
        self.moves.len() == self.cell_count()
    }

    /// Grid side `N`.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells on the grid (`N²`).
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Resets the ledger for a new game on the same grid.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.moves.clear();
        self.occupancy.iter_mut().for_each(|slot| *slot = None);
    }

    /// Rebuilds a ledger from a sequence of indices.
    ///
    /// # Errors
    ///
    /// Fails on the first index that [`MoveLedger::append`] rejects.
    #[instrument(skip(moves))]
    pub fn from_moves(side: usize, moves: &[usize]) -> Result<Self, MoveError> {
        let mut ledger = Self::new(side);
        for &index in moves {
            ledger.append(index)?;
        }
        Ok(ledger)
    }

    /// Pushes an index without any checks, for invariant tests.
    #[cfg(test)]
    pub(crate) fn push_unchecked(&mut self, index: usize) {
        if let Some(slot) = self.occupancy.get_mut(index) {
            *slot = Some(Player::for_ply(self.moves.len()));
        }
        self.moves.push(index);
    }
}

#[derive(Deserialize)]
struct LedgerSnapshot {
    side: usize,
    moves: Vec<usize>,
}

impl TryFrom<LedgerSnapshot> for MoveLedger {
    type Error = GameError;

    fn try_from(snapshot: LedgerSnapshot) -> Result<Self, Self::Error> {
        check_side(snapshot.side)?;
        Ok(Self::from_moves(snapshot.side, &snapshot.moves)?)
    }
}
