use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the board")]
    InvalidIndex(CellIndex),
    #[error("Cell {0} is already occupied")]
    CellOccupied(CellIndex),
    #[error("Board is full, no move can be suggested")]
    BoardFull,
}

pub type Result<T> = core::result::Result<T, GameError>;
