//! Outcome classification. Everything here is a pure function of the board.

use serde::{Deserialize, Serialize};

use crate::*;

/// Rows, columns, then diagonals.
pub const WINNING_LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won(Player),
    Draw,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// First line fully owned by `player`, if any.
pub fn winning_line(board: &Board, player: Player) -> Option<[CellIndex; 3]> {
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&index| board[index].is_marked_by(player)))
}

pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Classifies `board`. `Player::A` is checked before `Player::B`, so a board where both own a
/// line (unreachable through alternating play) reports a win for `A`.
pub fn classify(board: &Board) -> Outcome {
    if has_won(board, Player::A) {
        Outcome::Won(Player::A)
    } else if has_won(board, Player::B) {
        Outcome::Won(Player::B)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
