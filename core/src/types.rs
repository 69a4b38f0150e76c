/// Position of a cell on the board, row-major, always in `0..CELL_COUNT` once validated.
pub type CellIndex = u8;

/// Single coordinate axis, used for rows and columns.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Width and height of the grid.
pub const BOARD_SIDE: Coord = 3;

/// Total number of cells on the grid.
pub const CELL_COUNT: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Row-major index for `(row, col)`, `None` when either axis is off the grid.
pub const fn index_of((row, col): Coord2) -> Option<CellIndex> {
    if row < BOARD_SIDE && col < BOARD_SIDE {
        Some(row * BOARD_SIDE + col)
    } else {
        None
    }
}

/// Inverse of [`index_of`], `None` when the index is off the grid.
pub const fn coords_of(index: CellIndex) -> Option<Coord2> {
    if (index as usize) < CELL_COUNT {
        Some((index / BOARD_SIDE, index % BOARD_SIDE))
    } else {
        None
    }
}

/// Iterates every cell index in ascending order.
pub fn all_indices() -> impl Iterator<Item = CellIndex> + Clone {
    0..CELL_COUNT as CellIndex
}
