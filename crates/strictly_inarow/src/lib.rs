//! Strictly InARow - type-safe N-in-a-row rules engine
//!
//! Generalized tic-tac-toe on a square grid of side `N` (3–25), won by the
//! first player to align `K` pieces (3–`N`).
//!
//! # Architecture
//!
//! - **Ledger**: append-only record of played cells; ownership follows parity
//! - **Rules**: incremental victory detection from the last move only
//! - **Axis**: boundary-safe stepping on the column-major flattened grid
//! - **Session**: typestate phases with contract-checked moves
//!
//! # Example
//!
//! ```
//! use strictly_inarow::{GameConfig, MoveLedger, Outcome, Player, evaluate};
//!
//! let config = GameConfig::new(5, 3)?;
//! let mut ledger = MoveLedger::new(config.side());
//! for cell in [0, 5, 1, 6, 2] {
//!     ledger.append(cell)?;
//! }
//! assert_eq!(evaluate(&ledger, &config), Outcome::Win(Player::One));
//! # Ok::<(), strictly_inarow::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod axis;
mod config;
mod contracts;
mod error;
mod invariants;
mod ledger;
pub mod rules;
mod typestate;
mod types;

// Crate-level exports - Core types
pub use types::{Cell, Outcome, Player};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_SIDE, MIN_RUN_LENGTH, MIN_SIDE};

// Crate-level exports - Ledger and geometry
pub use axis::{Axis, Sign};
pub use ledger::MoveLedger;

// Crate-level exports - Rules
pub use rules::{WinningRun, evaluate};

// Crate-level exports - Actions and errors
pub use action::{Move, MoveError};
pub use error::GameError;

// Crate-level exports - Contracts and invariants
pub use contracts::{CellInBounds, CellIsEmpty, Contract, LegalMove, MoveContract, PlayersTurn};
pub use invariants::{
    CellsInBoundsInvariant, DistinctCellsInvariant, InARowInvariants, Invariant, InvariantSet,
    InvariantViolation, LedgerBoundedInvariant,
};

// Crate-level exports - Session typestate
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup, Verdict};
