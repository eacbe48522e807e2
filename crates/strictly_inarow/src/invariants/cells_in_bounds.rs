//! Bounds invariant: every recorded index lies on the grid.

use super::Invariant;
use crate::MoveLedger;

/// Invariant: every index lies in `[0, N²)`.
pub struct CellsInBoundsInvariant;

impl Invariant<MoveLedger> for CellsInBoundsInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        let cell_count = ledger.cell_count();
        ledger.moves().iter().all(|&index| index < cell_count)
    }

    fn description() -> &'static str {
        "Every cell index lies on the grid"
    }
}
