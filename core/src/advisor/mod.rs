use serde::{Deserialize, Serialize};

use crate::*;
pub use heuristic::*;

mod heuristic;

/// Picks a cell for an automated player.
pub trait MoveAdvisor {
    fn suggest(&mut self, board: &Board, player: Player) -> Result<Suggestion>;
}

/// Which rule produced a suggestion, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReason {
    /// Completes a line for the advised player.
    Win,
    /// Occupies the cell the opponent needs to complete a line.
    Block,
    /// Neither of the above applied.
    Random,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub index: CellIndex,
    pub reason: MoveReason,
}

impl Suggestion {
    pub const fn new(index: CellIndex, reason: MoveReason) -> Self {
        Self { index, reason }
    }
}
