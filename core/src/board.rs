use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 3x3 grid, stored row-major.
///
/// The board is `Copy`, so a snapshot is just a value copy and hypothetical moves never touch
/// the live grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        let index = Self::validate_index(index)?;
        Ok(self.cells[usize::from(index)])
    }

    pub fn is_empty_at(&self, index: CellIndex) -> Result<bool> {
        self.cell_at(index).map(Cell::is_empty)
    }

    /// Marks `index` for `player`. Occupied cells are never overwritten.
    pub fn place(&mut self, index: CellIndex, player: Player) -> Result<()> {
        if !self.is_empty_at(index)? {
            return Err(GameError::CellOccupied(index));
        }
        self.cells[usize::from(index)] = player.mark();
        Ok(())
    }

    /// Copy of the board with `player` placed at `index`, the receiver is left untouched.
    pub fn with_move(&self, index: CellIndex, player: Player) -> Result<Self> {
        let mut next = self.snapshot();
        next.place(index, player)?;
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn snapshot(&self) -> Self {
        *self
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + Clone + '_ {
        all_indices().filter(move |&index| self.cells[usize::from(index)].is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIDE.into())
    }

    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

#[cfg(test)]
pub(crate) fn board_from_digits(digits: [u8; CELL_COUNT]) -> Board {
    Board::from_cells(digits.map(|digit| match digit {
        0 => Cell::Empty,
        1 => Cell::Marked(Player::A),
        2 => Cell::Marked(Player::B),
        other => panic!("no cell value for digit {other}"),
    }))
}
