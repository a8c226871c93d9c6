//! Ship identity and damage state.

use crate::config::ShipClass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Handle for a ship in its player's arena.
///
/// Ships are never removed from the arena, only from the active fleet, so
/// an id stays valid for the life of its player. Cells store these instead
/// of owning ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipId(usize);

impl ShipId {
    /// Handle for the ship at `index` in its player's arena.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single vessel: class tag, length and damage state. The class carries
/// no behavior; it only groups ships for display and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    length: usize,
    hits: usize,
    positioned: bool,
}

impl Ship {
    pub fn new(class: ShipClass, length: usize) -> Self {
        Self {
            class,
            length,
            hits: 0,
            positioned: false,
        }
    }

    /// Register one segment hit, clamped at `length`.
    /// Returns `true` iff the ship is now sunk.
    pub fn take_damage(&mut self) -> bool {
        if self.hits < self.length {
            self.hits += 1;
        }
        self.is_down()
    }

    /// All segments hit.
    pub fn is_down(&self) -> bool {
        self.hits == self.length
    }

    /// Mark the ship as positioned on a board. Idempotent.
    pub fn place(&mut self) {
        self.positioned = true;
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn is_positioned(&self) -> bool {
        self.positioned
    }
}
