//! Crate-level error type.

use crate::action::MoveError;
use crate::config::ConfigError;
use derive_more::{Display, Error, From};

/// Any error the rules engine can report.
///
/// The evaluator itself is total; only configuration and move
/// application can fail.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// A move was rejected.
    #[display("Invalid move: {_0}")]
    InvalidMove(MoveError),
    /// `N` or `K` violated their bounds.
    #[display("Invalid configuration: {_0}")]
    InvalidConfiguration(ConfigError),
}
