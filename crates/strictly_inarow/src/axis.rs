//! Axis directions through a cell and boundary-safe stepping.
//!
//! Runs are counted on the flattened index, but every step is checked in
//! two dimensions against the destination: a step is taken only when the
//! destination lies on the grid and is the physical neighbour in the
//! axis' direction. Flattened deltas alone wrap from the last row of one
//! column into the next column, which would let a run leak across the
//! grid edge.

use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the four geometric lines through a cell.
///
/// Each axis is walked in both signs. Steps are given for a grid of side
/// `N` under `index = column * N + row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Axis {
    /// Step `N - 1`: row decreases as column increases.
    #[strum(to_string = "diagonal-down")]
    DiagonalDown,
    /// Step `N + 1`: row and column increase together.
    #[strum(to_string = "diagonal-up")]
    DiagonalUp,
    /// Step `N`: next column, same row.
    #[strum(to_string = "vertical")]
    Vertical,
    /// Step `1`: next row, same column.
    #[strum(to_string = "horizontal")]
    Horizontal,
}

/// Walking sign along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Add the axis step.
    Forward,
    /// Subtract the axis step.
    Backward,
}

impl Axis {
    /// All four axes, in evaluation order.
    pub const ALL: [Axis; 4] = [
        Axis::DiagonalDown,
        Axis::DiagonalUp,
        Axis::Vertical,
        Axis::Horizontal,
    ];

    /// Flattened index delta of one forward step on a grid of the given side.
    pub fn step(self, side: usize) -> isize {
        let side = side as isize;
        match self {
            Axis::DiagonalDown => side - 1,
            Axis::DiagonalUp => side + 1,
            Axis::Vertical => side,
            Axis::Horizontal => 1,
        }
    }

    /// `(row, column)` delta of one forward step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::DiagonalDown => (-1, 1),
            Axis::DiagonalUp => (1, 1),
            Axis::Vertical => (0, 1),
            Axis::Horizontal => (1, 0),
        }
    }

    /// Returns the index one step away from `index`, or `None` if that step
    /// would leave the grid.
    ///
    /// The guard is keyed on the destination cell, so a step never wraps
    /// from one edge of the grid to the opposite one.
    #[instrument(level = "trace")]
    pub fn neighbor(self, index: usize, side: usize, sign: Sign) -> Option<usize> {
        let cell = Cell::from_index(index, side);
        let (drow, dcol) = match sign {
            Sign::Forward => self.delta(),
            Sign::Backward => {
                let (r, c) = self.delta();
                (-r, -c)
            }
        };
        let row = cell.row.checked_add_signed(drow)?;
        let column = cell.column.checked_add_signed(dcol)?;
        let next = Cell::new(row, column).to_index(side)?;

        // Inside the grid a step is exactly the flattened delta.
        let step = match sign {
            Sign::Forward => self.step(side),
            Sign::Backward => -self.step(side),
        };
        debug_assert_eq!(next as isize - index as isize, step);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_matches_flattened_step_inside_grid() {
        let side = 5;
        // Centre cell (2, 2) has all eight neighbours.
        let center = Cell::new(2, 2).to_index(side).unwrap();
        for axis in Axis::ALL {
            let step = axis.step(side);
            assert_eq!(
                axis.neighbor(center, side, Sign::Forward),
                Some((center as isize + step) as usize)
            );
            assert_eq!(
                axis.neighbor(center, side, Sign::Backward),
                Some((center as isize - step) as usize)
            );
        }
    }

    #[test]
    fn test_horizontal_does_not_wrap_between_columns() {
        // Index 4 is (4, 0), index 5 is (0, 1).
        assert_eq!(Axis::Horizontal.neighbor(4, 5, Sign::Forward), None);
        assert_eq!(Axis::Horizontal.neighbor(5, 5, Sign::Backward), None);
    }

    #[test]
    fn test_diagonal_up_does_not_wrap() {
        // (4, 0) + 6 would land on (0, 2).
        assert_eq!(Axis::DiagonalUp.neighbor(4, 5, Sign::Forward), None);
        assert_eq!(Axis::DiagonalUp.neighbor(10, 5, Sign::Backward), None);
    }

    #[test]
    fn test_diagonal_down_does_not_wrap() {
        // (0, 1) + 4 would land on (4, 1).
        assert_eq!(Axis::DiagonalDown.neighbor(5, 5, Sign::Forward), None);
        // (1, 0) + 4 is the real neighbour (0, 1).
        assert_eq!(Axis::DiagonalDown.neighbor(1, 5, Sign::Forward), Some(5));
    }

    #[test]
    fn test_vertical_stops_at_outer_edge() {
        assert_eq!(Axis::Vertical.neighbor(22, 5, Sign::Forward), None);
        assert_eq!(Axis::Vertical.neighbor(2, 5, Sign::Backward), None);
    }
}

#[cfg(kani)]
mod verification {
    use super::*;

    /// Proves a step never leaves the grid and always lands on a
    /// physical neighbour.
    #[kani::proof]
    fn verify_neighbor_stays_adjacent() {
        let side: usize = kani::any();
        kani::assume((3..=25).contains(&side));
        let index: usize = kani::any();
        kani::assume(index < side * side);

        for axis in Axis::ALL {
            for sign in [Sign::Forward, Sign::Backward] {
                if let Some(next) = axis.neighbor(index, side, sign) {
                    assert!(next < side * side);
                    let from = Cell::from_index(index, side);
                    let to = Cell::from_index(next, side);
                    assert!(from.row.abs_diff(to.row) <= 1);
                    assert!(from.column.abs_diff(to.column) <= 1);
                }
            }
        }
    }
}
