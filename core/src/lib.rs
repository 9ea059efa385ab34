#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use session::*;
pub use tile::*;
pub use types::*;
pub use win::*;

mod error;
mod session;
mod tile;
mod types;
mod win;

/// Immutable 3x3 grid of cells, stored row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn validate_index(index: CellIndex) -> Result<CellIndex> {
        if usize::from(index) < CELL_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidCell(index))
        }
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        let index = Self::validate_index(index)?;
        Ok(self[index])
    }

    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.cells
            .get(usize::from(index))
            .is_some_and(|cell| cell.is_empty())
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.marked_count() == CELL_COUNT
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// Overwrites whatever was there; callers decide whether the move is legal.
    pub fn with_mark(&self, index: CellIndex, player: Player) -> Result<Self> {
        let index = Self::validate_index(index)?;
        let mut cells = self.cells;
        cells[usize::from(index)] = Cell::Marked(player);
        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

/// Outcome of trying to place a mark.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game was already won or the cell was taken.
    NoChange,
    Placed,
    Won,
    Drew,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Drew => true,
        }
    }
}
