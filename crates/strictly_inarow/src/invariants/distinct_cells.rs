//! Distinct cells invariant: a cell, once played, is never played again.

use super::Invariant;
use crate::MoveLedger;
use std::collections::HashSet;

/// Invariant: no index appears twice in the ledger, and the occupancy
/// table agrees with the parity of every entry.
pub struct DistinctCellsInvariant;

impl Invariant<MoveLedger> for DistinctCellsInvariant {
    fn holds(ledger: &MoveLedger) -> bool {
        let mut seen = HashSet::with_capacity(ledger.len());
        ledger.moves().iter().enumerate().all(|(ply, &index)| {
            seen.insert(index) && ledger.owner_of(index) == Some(crate::Player::for_ply(ply))
        })
    }

    fn description() -> &'static str {
        "Every cell is played at most once"
    }
}
