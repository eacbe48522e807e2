//! Validated grid and run-length configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Smallest supported grid side.
pub const MIN_SIDE: usize = 3;
/// Largest supported grid side.
pub const MAX_SIDE: usize = 25;
/// Shortest run that can win.
pub const MIN_RUN_LENGTH: usize = 3;

/// Game configuration: grid side `N` and winning run length `K`.
///
/// Only constructible through [`GameConfig::new`] (or deserialization,
/// which runs the same checks), so a value in hand always satisfies
/// `3 <= N <= 25` and `3 <= K <= N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "UncheckedConfig")]
pub struct GameConfig {
    /// Side length of the square grid.
    #[getter(copy)]
    side: usize,
    /// Number of aligned pieces required to win.
    #[getter(copy)]
    run_length: usize,
}

impl GameConfig {
    /// Validates and creates a configuration.
    #[instrument]
    pub fn new(side: usize, run_length: usize) -> Result<Self, ConfigError> {
        check_side(side)?;
        if !(MIN_RUN_LENGTH..=side).contains(&run_length) {
            warn!(side, run_length, "Run length out of range");
            return Err(ConfigError::RunLengthOutOfRange { run_length, side });
        }
        Ok(Self { side, run_length })
    }

    /// Number of cells on the grid (`N²`).
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }
}

impl Default for GameConfig {
    /// Classic tic-tac-toe: 3×3, three in a row.
    fn default() -> Self {
        Self {
            side: MIN_SIDE,
            run_length: MIN_RUN_LENGTH,
        }
    }
}

/// Rejects a grid side outside `[MIN_SIDE, MAX_SIDE]`.
pub(crate) fn check_side(side: usize) -> Result<(), ConfigError> {
    if (MIN_SIDE..=MAX_SIDE).contains(&side) {
        Ok(())
    } else {
        warn!(side, "Grid side out of range");
        Err(ConfigError::SideOutOfRange { side })
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in a row on {}x{}", self.run_length, self.side, self.side)
    }
}

#[derive(Deserialize)]
struct UncheckedConfig {
    side: usize,
    run_length: usize,
}

impl TryFrom<UncheckedConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: UncheckedConfig) -> Result<Self, Self::Error> {
        Self::new(raw.side, raw.run_length)
    }
}

/// Invalid configuration: `N` or `K` outside their bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Grid side outside `[3, 25]`.
    #[display("Grid side {side} is outside {}..={}", MIN_SIDE, MAX_SIDE)]
    SideOutOfRange {
        /// The rejected side.
        side: usize,
    },
    /// Run length outside `[3, side]`.
    #[display("Run length {run_length} is outside {}..={side}", MIN_RUN_LENGTH)]
    RunLengthOutOfRange {
        /// The rejected run length.
        run_length: usize,
        /// The side it was checked against.
        side: usize,
    },
}
