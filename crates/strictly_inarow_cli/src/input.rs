//! Parsing and validation of typed answers.

use derive_more::{Display, Error};
use strictly_inarow::{Cell, MAX_SIDE, MIN_RUN_LENGTH, MIN_SIDE, MoveLedger};
use tracing::{debug, instrument};

/// A named range check applied to a numeric answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RangeCheck {
    /// Grid side length.
    #[display("grid side")]
    Side,
    /// Winning run length on a grid of the given side.
    #[display("run length")]
    RunLength {
        /// Side of the grid the run must fit on.
        side: usize,
    },
}

impl RangeCheck {
    /// Inclusive bounds accepted by this check.
    pub fn bounds(self) -> (usize, usize) {
        match self {
            RangeCheck::Side => (MIN_SIDE, MAX_SIDE),
            RangeCheck::RunLength { side } => (MIN_RUN_LENGTH, side),
        }
    }

    /// Parses `answer` and checks it against the bounds.
    #[instrument]
    pub fn parse(self, answer: &str) -> Result<usize, InputError> {
        let value: usize = answer
            .trim()
            .parse()
            .map_err(|_| InputError::NotANumber(answer.trim().to_string()))?;
        self.check(value)
    }

    /// Checks an already-numeric value against the bounds.
    #[instrument]
    pub fn check(self, value: usize) -> Result<usize, InputError> {
        let (min, max) = self.bounds();
        if !(min..=max).contains(&value) {
            return Err(InputError::OutOfRange {
                check: self,
                value,
                min,
                max,
            });
        }
        debug!(value, "Answer accepted");
        Ok(value)
    }
}

/// What the player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    /// A free cell, as a flattened index.
    Cell(usize),
    /// Leave the game.
    Quit,
}

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not a whole number.
    #[display("\"{}\" is not a whole number", _0)]
    NotANumber(#[error(not(source))] String),

    /// A number outside its named range.
    #[display("{} must be between {} and {}, got {}", check, min, max, value)]
    OutOfRange {
        /// Which check failed.
        check: RangeCheck,
        /// Value given.
        value: usize,
        /// Lowest accepted value.
        min: usize,
        /// Highest accepted value.
        max: usize,
    },

    /// Neither `row column`, `#index` nor `q`.
    #[display("\"{}\" is not a move; type \"row column\", \"#index\" or \"q\"", _0)]
    Malformed(#[error(not(source))] String),

    /// A cell past the edge of the grid.
    #[display("{} is off the {}x{} grid", shown, side, side)]
    OffGrid {
        /// The cell as the player typed it.
        shown: String,
        /// Grid side.
        side: usize,
    },

    /// A cell somebody already holds.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Cell),
}

/// Parses a move entry and checks it against the current ledger.
///
/// Accepts `row column` (0-based), `#index` or `q`.
#[instrument(skip(ledger), fields(ply = ledger.len()))]
pub fn parse_move(line: &str, ledger: &MoveLedger) -> Result<Entry, InputError> {
    let line = line.trim();
    let side = ledger.side();

    if line.eq_ignore_ascii_case("q") {
        return Ok(Entry::Quit);
    }

    let malformed = || InputError::Malformed(line.to_string());

    let index = if let Some(raw) = line.strip_prefix('#') {
        let index: usize = raw.trim().parse().map_err(|_| malformed())?;
        if index >= ledger.cell_count() {
            return Err(InputError::OffGrid {
                shown: format!("#{}", index),
                side,
            });
        }
        index
    } else {
        let mut parts = line.split_whitespace();
        let (Some(row), Some(column), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let row: usize = row.parse().map_err(|_| malformed())?;
        let column: usize = column.parse().map_err(|_| malformed())?;
        let cell = Cell::new(row, column);
        cell.to_index(side).ok_or_else(|| InputError::OffGrid {
            shown: cell.to_string(),
            side,
        })?
    };

    if ledger.contains(index) {
        return Err(InputError::Occupied(Cell::from_index(index, side)));
    }
    Ok(Entry::Cell(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_range() {
        assert_eq!(RangeCheck::Side.parse("3"), Ok(3));
        assert_eq!(RangeCheck::Side.parse(" 25 \n"), Ok(25));
        assert!(matches!(
            RangeCheck::Side.parse("26"),
            Err(InputError::OutOfRange { value: 26, min: 3, max: 25, .. })
        ));
        assert!(matches!(
            RangeCheck::Side.parse("2"),
            Err(InputError::OutOfRange { value: 2, .. })
        ));
    }

    #[test]
    fn test_run_length_bounded_by_side() {
        let check = RangeCheck::RunLength { side: 6 };
        assert_eq!(check.parse("6"), Ok(6));
        assert!(check.parse("7").is_err());
        assert!(check.parse("2").is_err());
    }

    #[test]
    fn test_non_numeric_answer() {
        assert_eq!(
            RangeCheck::Side.parse("ten"),
            Err(InputError::NotANumber("ten".to_string()))
        );
        assert!(RangeCheck::Side.parse("-4").is_err());
    }

    #[test]
    fn test_range_error_names_the_check() {
        let err = RangeCheck::RunLength { side: 5 }.parse("9").unwrap_err();
        assert_eq!(err.to_string(), "run length must be between 3 and 5, got 9");
    }

    #[test]
    fn test_parse_row_column() {
        let ledger = MoveLedger::new(5);
        // Row 2, column 1 lives at 1 * 5 + 2.
        assert_eq!(parse_move("2 1", &ledger), Ok(Entry::Cell(7)));
        assert_eq!(parse_move("  0   4 ", &ledger), Ok(Entry::Cell(20)));
    }

    #[test]
    fn test_parse_index_and_quit() {
        let ledger = MoveLedger::new(5);
        assert_eq!(parse_move("#24", &ledger), Ok(Entry::Cell(24)));
        assert_eq!(parse_move("q", &ledger), Ok(Entry::Quit));
        assert_eq!(parse_move("Q\n", &ledger), Ok(Entry::Quit));
    }

    #[test]
    fn test_off_grid_rejected() {
        let ledger = MoveLedger::new(5);
        assert!(matches!(
            parse_move("5 0", &ledger),
            Err(InputError::OffGrid { side: 5, .. })
        ));
        assert!(matches!(
            parse_move("#25", &ledger),
            Err(InputError::OffGrid { side: 5, .. })
        ));
    }

    #[test]
    fn test_occupied_rejected() {
        let ledger = MoveLedger::from_moves(5, &[7]).unwrap();
        assert_eq!(
            parse_move("2 1", &ledger),
            Err(InputError::Occupied(Cell::new(2, 1)))
        );
        assert!(parse_move("#7", &ledger).is_err());
    }

    #[test]
    fn test_malformed_rejected() {
        let ledger = MoveLedger::new(5);
        for line in ["", "1", "1 2 3", "a b", "#x", "quit"] {
            assert!(
                matches!(parse_move(line, &ledger), Err(InputError::Malformed(_))),
                "{line:?}"
            );
        }
    }
}
