//! Length invariant: the ledger never outgrows the grid.

use super::Invariant;
use crate::MoveLedger;

/// Invariant: ledger length is at most `N²`.
pub struct LedgerBoundedInvariant;

impl Invariant<MoveLedger> for LedgerBoundedInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        ledger.len() <= ledger.cell_count()
    }

    fn description() -> &'static str {
        "Ledger holds at most one move per cell"
    }
}
