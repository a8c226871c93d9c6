//! Board and fleet owner: placement validation, attack resolution, and the
//! potential-target bookkeeping shared by shot validation and the bot.

use log::debug;

use crate::board::{Board, CellView};
use crate::common::{AttackOutcome, GameError};
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship, ShipId};

/// One side of the game: a board, a ship arena, and the three views into
/// it (`fleet`, `ships_to_place`, `potential_targets`).
///
/// Ships live in the arena for the whole game. `fleet` holds the placed,
/// not yet sunk ones; `ships_to_place` holds the unplaced pool in
/// configuration order. Sinking a ship drops it from `fleet` only, so its
/// cells can still resolve the id for display.
#[derive(Debug, Clone)]
pub struct Player {
    board: Board,
    ships: Vec<Ship>,
    fleet: Vec<ShipId>,
    ships_to_place: Vec<ShipId>,
    potential_targets: Vec<(usize, usize)>,
}

impl Player {
    /// Build a player with an empty board, a full to-place pool, and every
    /// coordinate of the board as a potential target.
    pub fn new(config: &GameConfig) -> Self {
        let board = Board::new(config.height, config.width);
        let mut ships = Vec::with_capacity(config.total_ships());
        let mut ships_to_place = Vec::with_capacity(config.total_ships());
        for quantity in &config.ships {
            for _ in 0..quantity.count {
                let id = ShipId::new(ships.len());
                ships.push(Ship::new(quantity.class, quantity.length));
                ships_to_place.push(id);
            }
        }
        let mut potential_targets = Vec::with_capacity(config.height * config.width);
        for row in 0..config.height {
            for col in 0..config.width {
                potential_targets.push((row, col));
            }
        }
        Self {
            board,
            ships,
            fleet: Vec::new(),
            ships_to_place,
            potential_targets,
        }
    }

    /// Validate a placement and reserve a matching ship from the to-place
    /// pool. Checks run in order: bounds for the orientation, collision
    /// along the span, then the pool search. The board is not touched;
    /// [`Player::add_ship`] does the occupying.
    ///
    /// `x` is the column and `y` the row of the leftmost/topmost segment.
    pub fn can_place_ship(
        &mut self,
        length: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<ShipId, GameError> {
        match orientation {
            Orientation::Horizontal => {
                if y >= self.board.height() || x + length > self.board.width() {
                    return Err(GameError::ShipPlacing);
                }
            }
            Orientation::Vertical => {
                if x >= self.board.width() || y + length > self.board.height() {
                    return Err(GameError::ShipPlacing);
                }
            }
        }
        for (row, col) in span(length, orientation, x, y) {
            if !self.board.cell(row, col)?.is_free() {
                return Err(GameError::ShipPlacing);
            }
        }
        let pool_index = self
            .ships_to_place
            .iter()
            .position(|id| self.ships[id.index()].length() == length)
            .ok_or(GameError::NotSuchShipToPlace { length })?;
        Ok(self.ships_to_place.remove(pool_index))
    }

    /// Place a ship of `length` with its leftmost/topmost segment at
    /// column `x`, row `y`. Fails atomically: on any error the board, the
    /// pool, and the fleet are unchanged.
    pub fn add_ship(
        &mut self,
        length: usize,
        orientation: Orientation,
        x: usize,
        y: usize,
    ) -> Result<(), GameError> {
        let id = self.can_place_ship(length, orientation, x, y)?;
        for (row, col) in span(length, orientation, x, y) {
            self.board.cell_mut(row, col)?.place_ship(id)?;
        }
        self.ships[id.index()].place();
        self.fleet.push(id);
        debug!(
            "{} (length {}) placed {:?} at row {}, col {}",
            self.ships[id.index()].class().name(),
            length,
            orientation,
            y,
            x
        );
        Ok(())
    }

    /// Resolve an attack against this player's own board. On a sink the
    /// ship leaves the fleet; the arena keeps it.
    pub fn take_attack(&mut self, x: usize, y: usize) -> Result<AttackOutcome, GameError> {
        let hit_ship = self.board.cell(y, x)?.ship_id();
        let outcome = self.board.cell_mut(y, x)?.handle_attack(&mut self.ships)?;
        if outcome == AttackOutcome::Sunk {
            if let Some(id) = hit_ship {
                self.fleet.retain(|&fleet_id| fleet_id != id);
            }
        }
        Ok(outcome)
    }

    /// Attack column `x`, row `y` on `opponent`'s board. The coordinate
    /// must still be among the opponent's potential targets; on success it
    /// is removed there. This gate runs before the cell's own shot check,
    /// so a repeated coordinate fails here and never reaches the board.
    pub fn perform_attack(
        &self,
        opponent: &mut Player,
        x: usize,
        y: usize,
    ) -> Result<AttackOutcome, GameError> {
        let pos = opponent
            .potential_targets
            .iter()
            .position(|&target| target == (y, x))
            .ok_or(GameError::AlreadyShot)?;
        let outcome = opponent.take_attack(x, y)?;
        opponent.potential_targets.remove(pos);
        Ok(outcome)
    }

    /// All placed ships sunk. Degenerate before placement: an empty fleet
    /// also means "nothing placed yet", so pair this with
    /// [`Player::has_placed_fleet`] when the phase does not already
    /// guarantee placement is complete.
    pub fn is_defeated(&self) -> bool {
        self.fleet.is_empty()
    }

    /// Every configured ship has been placed.
    pub fn has_placed_fleet(&self) -> bool {
        self.ships_to_place.is_empty()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The ship arena. Ids index into this slice.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Placed, not yet sunk ships.
    pub fn fleet(&self) -> &[ShipId] {
        &self.fleet
    }

    /// Unplaced pool, in configuration order.
    pub fn ships_to_place(&self) -> &[ShipId] {
        &self.ships_to_place
    }

    /// `(row, col)` coordinates on this board not yet attacked. Shrinks
    /// monotonically; exposed for shot validation and bot introspection.
    pub fn potential_targets(&self) -> &[(usize, usize)] {
        &self.potential_targets
    }

    /// Segments of fleet ships not yet hit.
    pub fn alive_segments(&self) -> usize {
        self.fleet
            .iter()
            .map(|id| {
                let ship = &self.ships[id.index()];
                ship.length() - ship.hit_count()
            })
            .sum()
    }

    /// Renderer-facing snapshot of the grid.
    pub fn board_view(&self) -> Vec<Vec<CellView>> {
        self.board.view(&self.ships)
    }

    pub(crate) fn remove_potential_target(&mut self, row: usize, col: usize) -> bool {
        if let Some(pos) = self
            .potential_targets
            .iter()
            .position(|&target| target == (row, col))
        {
            self.potential_targets.remove(pos);
            true
        } else {
            false
        }
    }
}

fn span(
    length: usize,
    orientation: Orientation,
    x: usize,
    y: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..length).map(move |i| match orientation {
        Orientation::Horizontal => (y, x + i),
        Orientation::Vertical => (y + i, x),
    })
}
