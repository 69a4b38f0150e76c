use serde::{Deserialize, Serialize};

use crate::*;

/// Games won per player over the lifetime of a session. Board resets leave it alone.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinTally {
    a: u32,
    b: u32,
}

impl WinTally {
    pub const fn new() -> Self {
        Self { a: 0, b: 0 }
    }

    pub const fn wins(&self, player: Player) -> u32 {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    pub fn record(&mut self, player: Player) {
        let slot = match player {
            Player::A => &mut self.a,
            Player::B => &mut self.b,
        };
        *slot = slot.saturating_add(1);
    }

    pub const fn total(&self) -> u32 {
        self.a.saturating_add(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_only_the_winner() {
        let mut tally = WinTally::new();

        tally.record(Player::B);
        tally.record(Player::B);
        tally.record(Player::A);

        assert_eq!(tally.wins(Player::A), 1);
        assert_eq!(tally.wins(Player::B), 2);
        assert_eq!(tally.total(), 3);
    }
}
