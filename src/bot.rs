//! Computer opponent: random fleet placement and a hunt-then-target
//! attack heuristic.
//!
//! The bot searches randomly until it hits, probes the four neighbors to
//! find the ship's orientation, then sweeps along the discovered axis
//! until the ship sinks. Nothing persists across ships beyond the current
//! hunting sequence.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::{AttackOutcome, GameError};
use crate::config::GameConfig;
use crate::player::Player;
use crate::ship::Orientation;

/// Random draws per ship before fleet placement gives up.
const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// A [`Player`] plus the targeting state carried between shots.
#[derive(Debug, Clone)]
pub struct BotPlayer {
    player: Player,
    next_targets: Vec<(usize, usize)>,
    first_hit: Option<(usize, usize)>,
}

impl BotPlayer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config),
            next_targets: Vec::new(),
            first_hit: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Coordinates adjacent to an unresolved hit, still worth probing.
    pub fn next_targets(&self) -> &[(usize, usize)] {
        &self.next_targets
    }

    /// Randomly place every ship from the to-place pool. Per ship, up to
    /// [`MAX_PLACEMENT_ATTEMPTS`] draws of an orientation and an in-bounds
    /// origin; runs out with `ShipPlacing` when nothing fits, leaving any
    /// already placed ships on the board.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        while let Some(&id) = self.player.ships_to_place().first() {
            let length = self.player.ships()[id.index()].length();
            self.place_one(rng, length)?;
        }
        Ok(())
    }

    fn place_one<R: Rng>(&mut self, rng: &mut R, length: usize) -> Result<(), GameError> {
        let height = self.player.board().height();
        let width = self.player.board().width();
        let mut attempts = 0;
        while attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (width.checked_sub(length), height.checked_sub(1)),
                Orientation::Vertical => (width.checked_sub(1), height.checked_sub(length)),
            };
            let (Some(max_x), Some(max_y)) = (max_x, max_y) else {
                // this orientation can never fit; the next draw may flip it
                continue;
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            if self.player.add_ship(length, orientation, x, y).is_ok() {
                return Ok(());
            }
        }
        Err(GameError::ShipPlacing)
    }

    /// Take one shot at `opponent`: a promising lead if a hunting sequence
    /// is open, otherwise a uniform draw from the opponent's untried
    /// coordinates. Returns `Ok(None)` when no untried coordinate is left.
    pub fn perform_attack<R: Rng>(
        &mut self,
        rng: &mut R,
        opponent: &mut Player,
    ) -> Result<Option<AttackOutcome>, GameError> {
        let Some((y, x)) = self.find_new_target(rng, opponent) else {
            return Ok(None);
        };
        let outcome = opponent.take_attack(x, y)?;
        debug!("bot fires at row {}, col {}: {:?}", y, x, outcome);
        self.handle_next_targets(outcome, y, x, opponent);
        Ok(Some(outcome))
    }

    fn find_new_target<R: Rng>(&self, rng: &mut R, opponent: &Player) -> Option<(usize, usize)> {
        if let Some(&target) = self.next_targets.choose(rng) {
            Some(target)
        } else {
            opponent.potential_targets().choose(rng).copied()
        }
    }

    /// Update the hunting state after a resolved shot at `(y, x)`.
    fn handle_next_targets(
        &mut self,
        outcome: AttackOutcome,
        y: usize,
        x: usize,
        opponent: &mut Player,
    ) {
        let had_open_lead = !self.next_targets.is_empty();
        self.next_targets.retain(|&target| target != (y, x));
        opponent.remove_potential_target(y, x);
        match outcome {
            AttackOutcome::Sunk => {
                self.next_targets.clear();
                self.first_hit = None;
            }
            AttackOutcome::Hit if !had_open_lead => {
                // first hit of a new ship: probe all four sides
                self.first_hit = Some((y, x));
                self.next_targets = orthogonal_neighbors(y, x, opponent);
            }
            AttackOutcome::Hit => {
                // orientation is known once two hits line up; keep only
                // the in-line extensions of the latest hit
                let along_row = self.first_hit.map(|(fy, _)| fy == y).unwrap_or(false);
                self.next_targets = inline_extensions(y, x, along_row, opponent);
            }
            AttackOutcome::Miss => {}
        }
    }
}

/// The up-to-four orthogonal neighbors of `(y, x)` still untried on the
/// opponent's board. Membership in the potential targets implies the
/// coordinate is in bounds.
fn orthogonal_neighbors(y: usize, x: usize, opponent: &Player) -> Vec<(usize, usize)> {
    let mut candidates = Vec::with_capacity(4);
    if y > 0 {
        candidates.push((y - 1, x));
    }
    candidates.push((y + 1, x));
    if x > 0 {
        candidates.push((y, x - 1));
    }
    candidates.push((y, x + 1));
    candidates
        .into_iter()
        .filter(|&(row, col)| is_potential(opponent, row, col))
        .collect()
}

/// The at-most-two immediate extensions of `(y, x)` along the discovered
/// axis. A neighbor that is off the board or already tried ends the scan
/// in that direction.
fn inline_extensions(
    y: usize,
    x: usize,
    along_row: bool,
    opponent: &Player,
) -> Vec<(usize, usize)> {
    let mut targets = Vec::with_capacity(2);
    if along_row {
        if x > 0 && is_potential(opponent, y, x - 1) {
            targets.push((y, x - 1));
        }
        if is_potential(opponent, y, x + 1) {
            targets.push((y, x + 1));
        }
    } else {
        if y > 0 && is_potential(opponent, y - 1, x) {
            targets.push((y - 1, x));
        }
        if is_potential(opponent, y + 1, x) {
            targets.push((y + 1, x));
        }
    }
    targets
}

fn is_potential(opponent: &Player, row: usize, col: usize) -> bool {
    opponent
        .potential_targets()
        .iter()
        .any(|&target| target == (row, col))
}
