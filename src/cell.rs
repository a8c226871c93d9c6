//! One board square: occupancy and shot state.

use crate::common::{AttackOutcome, GameError};
use crate::ship::{Ship, ShipId};

/// A single grid square. Holds at most one ship segment by arena id; the
/// owning player's ship arena resolves the id when damage is dealt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    shot: bool,
    ship: Option<ShipId>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// No ship segment occupies this cell.
    pub fn is_free(&self) -> bool {
        self.ship.is_none()
    }

    pub fn was_shot(&self) -> bool {
        self.shot
    }

    pub fn ship_id(&self) -> Option<ShipId> {
        self.ship
    }

    /// Occupy the cell with one segment of `ship`.
    pub fn place_ship(&mut self, ship: ShipId) -> Result<(), GameError> {
        if self.ship.is_some() {
            return Err(GameError::OccupiedCell);
        }
        self.ship = Some(ship);
        Ok(())
    }

    /// Reset the cell to free and empty. Test and reset paths only; normal
    /// play never removes a segment.
    pub fn remove_ship(&mut self) {
        self.ship = None;
    }

    /// Resolve an attack on this cell, forwarding damage to the occupying
    /// ship in `ships`. A cell takes exactly one shot; the second attempt
    /// fails and changes nothing.
    pub fn handle_attack(&mut self, ships: &mut [Ship]) -> Result<AttackOutcome, GameError> {
        if self.shot {
            return Err(GameError::AlreadyShot);
        }
        match self.ship {
            None => {
                self.shot = true;
                Ok(AttackOutcome::Miss)
            }
            Some(id) => {
                let ship = ships.get_mut(id.index()).ok_or(GameError::UnknownShip)?;
                self.shot = true;
                if ship.take_damage() {
                    Ok(AttackOutcome::Sunk)
                } else {
                    Ok(AttackOutcome::Hit)
                }
            }
        }
    }
}
