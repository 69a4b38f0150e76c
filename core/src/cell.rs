use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the two sides. `A` always opens a fresh game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    pub const fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    pub const fn mark(self) -> Cell {
        Cell::Marked(self)
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'X',
            Self::B => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single board position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Player),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Marked(player) => Some(player),
        }
    }

    pub const fn is_marked_by(self, player: Player) -> bool {
        match self {
            Self::Empty => false,
            Self::Marked(owner) => owner as u8 == player as u8,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Marked(player) => player.symbol(),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.mark()
    }
}
