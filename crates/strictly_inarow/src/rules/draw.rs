//! Draw detection for N-in-a-row.

use crate::ledger::MoveLedger;
use tracing::instrument;

/// Checks if every cell of the grid has been played.
///
/// A full grid with no winning run on the last move is a draw.
#[instrument(skip(ledger), fields(len = ledger.len()))]
pub fn is_full(ledger: &MoveLedger) -> bool {
    ledger.is_full()
}
