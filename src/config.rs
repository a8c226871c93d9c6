//! Board dimensions and fleet composition.
//!
//! Nothing here is global: every [`crate::Player`] and
//! [`crate::GameController`] takes a [`GameConfig`] value, with
//! [`GameConfig::standard`] as the classic preset.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ship classes, distinguished only by display name and standard length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    PatrolShip,
}

impl ShipClass {
    /// Display name of the class.
    pub fn name(&self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::PatrolShip => "PatrolShip",
        }
    }

    /// Segment length the class has in the standard rules.
    pub const fn standard_length(&self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::PatrolShip => 2,
        }
    }
}

/// One line of a fleet table: how many ships of a class, at what length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShipQuantity {
    pub class: ShipClass,
    pub length: usize,
    pub count: usize,
}

impl ShipQuantity {
    pub const fn new(class: ShipClass, length: usize, count: usize) -> Self {
        Self {
            class,
            length,
            count,
        }
    }
}

/// Board dimensions plus the fleet each player starts with. Table order is
/// preserved: ships enter the to-place pool in the order listed here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub ships: Vec<ShipQuantity>,
}

impl GameConfig {
    pub fn new(height: usize, width: usize, ships: Vec<ShipQuantity>) -> Self {
        Self {
            height,
            width,
            ships,
        }
    }

    /// The classic 10x10 setup: one Carrier, one Battleship, four Cruisers
    /// and three PatrolShips.
    pub fn standard() -> Self {
        Self::new(
            10,
            10,
            vec![
                ShipQuantity::new(ShipClass::Carrier, 5, 1),
                ShipQuantity::new(ShipClass::Battleship, 4, 1),
                ShipQuantity::new(ShipClass::Cruiser, 3, 4),
                ShipQuantity::new(ShipClass::PatrolShip, 2, 3),
            ],
        )
    }

    /// Total number of ships the table places.
    pub fn total_ships(&self) -> usize {
        self.ships.iter().map(|quantity| quantity.count).sum()
    }

    /// Total number of ship segments the table places.
    pub fn total_segments(&self) -> usize {
        self.ships
            .iter()
            .map(|quantity| quantity.length * quantity.count)
            .sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
