//! Run counting through the most recent move.

use crate::axis::{Axis, Sign};
use crate::config::GameConfig;
use crate::ledger::MoveLedger;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A run long enough to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct WinningRun {
    /// Axis the run lies on.
    pub axis: Axis,
    /// Cells of the run, ordered along the axis' forward direction.
    pub cells: Vec<usize>,
}

/// Counts the mover's consecutive cells from `start`, inclusive, walking
/// one way along `axis`.
fn walk(ledger: &MoveLedger, start: usize, axis: Axis, sign: Sign) -> Vec<usize> {
    let Some(owner) = ledger.owner_of(start) else {
        return Vec::new();
    };
    let mut cells = vec![start];
    let mut current = start;
    while let Some(next) = axis.neighbor(current, ledger.side(), sign) {
        if ledger.owner_of(next) != Some(owner) {
            break;
        }
        cells.push(next);
        current = next;
    }
    cells
}

/// Returns the cells of the run through the last move on `axis`.
///
/// Cells are ordered along the forward direction of the axis. Empty if no
/// move has been played.
#[instrument(skip(ledger), fields(last = ?ledger.last_move()))]
pub fn run_cells(ledger: &MoveLedger, axis: Axis) -> Vec<usize> {
    let Some(last) = ledger.last_move() else {
        return Vec::new();
    };
    let mut backward = walk(ledger, last, axis, Sign::Backward);
    let forward = walk(ledger, last, axis, Sign::Forward);
    backward.reverse();
    // Both walks start on `last`; keep it once.
    backward.extend(forward.into_iter().skip(1));
    backward
}

/// Length of the run through the last move on `axis`.
///
/// Forward and backward walks both count the origin, which is then
/// subtracted once.
#[instrument(skip(ledger))]
pub fn run_length(ledger: &MoveLedger, axis: Axis) -> usize {
    let Some(last) = ledger.last_move() else {
        return 0;
    };
    let forward = walk(ledger, last, axis, Sign::Forward).len();
    let backward = walk(ledger, last, axis, Sign::Backward).len();
    forward + backward - 1
}

/// Returns the first axis (in [`Axis::ALL`] order) whose run through the
/// last move reaches the configured length.
#[instrument(skip(ledger, config), fields(k = config.run_length()))]
pub fn winning_run(ledger: &MoveLedger, config: &GameConfig) -> Option<WinningRun> {
    if ledger.len() < config.run_length() {
        return None;
    }
    Axis::ALL.into_iter().find_map(|axis| {
        let length = run_length(ledger, axis);
        debug!(%axis, length, "Run through last move");
        (length >= config.run_length()).then(|| WinningRun::new(axis, run_cells(ledger, axis)))
    })
}
