//! Contract-based validation for N-in-a-row moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use super::action::{Move, MoveError};
use super::invariants::{InARowInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the cell lies on the grid.
pub struct CellInBounds;

impl CellInBounds {
    /// Rejects indices at or past `N²`.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        let cell_count = game.ledger().cell_count();
        if mov.cell >= cell_count {
            Err(MoveError::OutOfBounds {
                index: mov.cell,
                cell_count,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell has not been played.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects cells already in the ledger.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.ledger().contains(mov.cell) {
            Err(MoveError::CellOccupied(mov.cell))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player who just moved.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the cell is on the grid, empty, and it's the
/// player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        CellInBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions:
/// - the ledger grew by exactly one entry
/// - [`InARowInvariants`] hold
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.ledger().len() != before.ledger().len() + 1 {
            warn!(
                before = before.ledger().len(),
                after = after.ledger().len(),
                "Ledger did not grow by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: ledger must grow by exactly one move".to_string(),
            ));
        }
        InARowInvariants::check_all(after.ledger()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violation after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
