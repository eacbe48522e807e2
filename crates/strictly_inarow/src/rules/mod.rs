//! Game rules for N-in-a-row.
//!
//! Pure functions over a [`MoveLedger`]. Rules are kept apart from the
//! ledger so the session layer and its contracts can compose them.
//!
//! Only the last move is examined: any alignment completed by a move must
//! pass through the cell it was played on, so each evaluation costs
//! O(K) per axis rather than a scan of the whole grid.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningRun, run_cells, run_length, winning_run};

use crate::config::GameConfig;
use crate::ledger::MoveLedger;
use crate::types::Outcome;
use tracing::{debug, instrument, warn};

/// Classifies the game after the most recent move.
///
/// A winning run takes precedence over a full grid, so the move that
/// fills the last cell and completes a run is a win, not a draw.
/// Reads the ledger only; calling it repeatedly yields the same outcome.
/// A ledger recorded on a different grid side than `config` is never
/// classified and stays [`Outcome::Ongoing`].
#[instrument(skip(ledger, config), fields(len = ledger.len(), side = config.side(), k = config.run_length()))]
pub fn evaluate(ledger: &MoveLedger, config: &GameConfig) -> Outcome {
    if ledger.side() != config.side() {
        warn!(
            ledger_side = ledger.side(),
            config_side = config.side(),
            "Ledger and config disagree on grid side"
        );
        return Outcome::Ongoing;
    }
    let Some(mover) = ledger.last_mover() else {
        return Outcome::Ongoing;
    };
    if ledger.len() < config.run_length() {
        return Outcome::Ongoing;
    }

    if let Some(run) = winning_run(ledger, config) {
        debug!(%mover, axis = %run.axis, cells = ?run.cells, "Winning run");
        return Outcome::Win(mover);
    }

    if is_full(ledger) {
        debug!("Grid full without a winning run");
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_is_ongoing() {
        let config = GameConfig::new(3, 3).unwrap();
        assert_eq!(evaluate(&MoveLedger::new(3), &config), Outcome::Ongoing);
    }

    #[test]
    fn test_below_threshold_is_ongoing() {
        let config = GameConfig::new(5, 4).unwrap();
        // Three of player one's cells can't make four.
        let ledger = MoveLedger::from_moves(5, &[0, 24, 1]).unwrap();
        assert_eq!(evaluate(&ledger, &config), Outcome::Ongoing);
    }

    #[test]
    fn test_player_two_can_win() {
        let config = GameConfig::new(3, 3).unwrap();
        // Two takes the column-step line 1, 4, 7.
        let ledger = MoveLedger::from_moves(3, &[0, 1, 2, 4, 6, 7]).unwrap();
        // One holds 0, 2, 6: no line.
        assert_eq!(evaluate(&ledger, &config), Outcome::Win(Player::Two));
    }

    #[test]
    fn test_only_last_move_is_examined() {
        let config = GameConfig::new(5, 3).unwrap();
        // One completes 0, 5, 10 at ply 4, then Two moves elsewhere.
        let ledger = MoveLedger::from_moves(5, &[0, 24, 5, 23, 10, 18]).unwrap();
        assert_eq!(evaluate(&ledger, &config), Outcome::Ongoing);
    }

    #[test]
    fn test_mismatched_side_is_never_classified() {
        let config = GameConfig::new(3, 3).unwrap();
        // A 5x5 line that would win if read with the ledger's own side.
        let ledger = MoveLedger::from_moves(5, &[0, 5, 1, 6, 2]).unwrap();
        assert_eq!(evaluate(&ledger, &config), Outcome::Ongoing);

        // Nine moves fill a 3x3 grid but not a 4x4 one.
        let ledger = MoveLedger::from_moves(4, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(evaluate(&ledger, &config), Outcome::Ongoing);
        assert_eq!(
            evaluate(&ledger, &GameConfig::new(4, 4).unwrap()),
            Outcome::Ongoing
        );
    }
}
