/// Flat, row-major index of a cell on the board (`row * 3 + col`).
pub type CellIndex = u8;

/// Three cells that make a line: a row, a column or a diagonal.
pub type Line = [CellIndex; 3];

/// Number of cells along one side of the board.
pub const BOARD_SIDE: CellIndex = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

pub const fn row_of(index: CellIndex) -> CellIndex {
    index / BOARD_SIDE
}

pub const fn col_of(index: CellIndex) -> CellIndex {
    index % BOARD_SIDE
}

/// Iterates every valid cell index in row-major order.
pub fn iter_indices() -> impl Iterator<Item = CellIndex> {
    0..(CELL_COUNT as CellIndex)
}
