//! The grid of cells owned by one player.

use crate::cell::Cell;
use crate::common::GameError;
use crate::ship::Ship;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Renderer-facing snapshot of one cell: occupancy and shot flags plus the
/// occupying ship's length. Ship identity never leaks past this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellView {
    pub is_free: bool,
    pub was_shot: bool,
    pub ship_length: Option<usize>,
}

/// `height x width` grid of cells, dimensions fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Every cell is a distinct instance.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::new(); height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GameError> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBoard { row, col });
        }
        Ok(&self.cells[row * self.width + col])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell, GameError> {
        if !self.contains(row, col) {
            return Err(GameError::OutOfBoard { row, col });
        }
        Ok(&mut self.cells[row * self.width + col])
    }

    /// Row-major snapshot of the whole grid, ship lengths resolved against
    /// the owning player's arena.
    pub(crate) fn view(&self, ships: &[Ship]) -> Vec<Vec<CellView>> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        let cell = &self.cells[row * self.width + col];
                        CellView {
                            is_free: cell.is_free(),
                            was_shot: cell.was_shot(),
                            ship_length: cell
                                .ship_id()
                                .and_then(|id| ships.get(id.index()))
                                .map(|ship| ship.length()),
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
