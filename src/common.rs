//! Attack outcomes and the error taxonomy shared across the crate.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttackOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot damaged a ship without sinking it.
    Hit,
    /// Shot took the last intact segment of a ship.
    Sunk,
}

/// Errors returned by placement and attack operations.
///
/// None of these are fatal: the controller converts every one of them into
/// a user-facing prompt, and the operation that produced the error leaves
/// all game state unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The cell already holds a ship segment.
    #[error("cell is already occupied")]
    OccupiedCell,
    /// The cell (or coordinate) was already attacked.
    #[error("cell was already shot at")]
    AlreadyShot,
    /// Ship placement is out of bounds or collides with another ship.
    #[error("ship cannot be placed there")]
    ShipPlacing,
    /// No unplaced ship of the requested length remains in the pool.
    #[error("no ship of length {length} left to place")]
    NotSuchShipToPlace { length: usize },
    /// The coordinate lies outside the board.
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBoard { row: usize, col: usize },
    /// A cell referenced a ship id missing from the arena.
    #[error("cell references an unknown ship")]
    UnknownShip,
}
