use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// One-ply advisor: complete a line when possible, otherwise block the opponent's line,
/// otherwise play a random empty cell.
///
/// It only ever looks a single move ahead, so it walks into forks. That is the intended strength
/// of the computer opponent.
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicAdvisor<R> {
    rng: R,
}

impl<R: Rng> HeuristicAdvisor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl HeuristicAdvisor<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveAdvisor for HeuristicAdvisor<R> {
    fn suggest(&mut self, board: &Board, player: Player) -> Result<Suggestion> {
        suggest_move(board, player, &mut self.rng)
    }
}

/// Lowest empty cell that would give `player` a line, checked on a copy of the board.
pub fn completing_move(board: &Board, player: Player) -> Option<CellIndex> {
    board.empty_cells().find(|&index| {
        matches!(board.with_move(index, player), Ok(next) if has_won(&next, player))
    })
}

/// Suggests a cell for `player`. The only randomness is the final fallback, drawn from `rng`.
pub fn suggest_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Result<Suggestion> {
    let mut empty = board.empty_cells();
    let empty_count = empty.clone().count();
    if empty_count == 0 {
        return Err(GameError::BoardFull);
    }

    if let Some(index) = completing_move(board, player) {
        log::trace!("{} can win at {}", player, index);
        return Ok(Suggestion::new(index, MoveReason::Win));
    }

    if let Some(index) = completing_move(board, player.opponent()) {
        log::trace!("{} blocks {} at {}", player, player.opponent(), index);
        return Ok(Suggestion::new(index, MoveReason::Block));
    }

    let pick = rng.random_range(0..empty_count);
    let index = empty.nth(pick).ok_or(GameError::BoardFull)?;
    log::trace!(
        "No forced move for {}, picked {} of {} empty cells",
        player,
        index,
        empty_count
    );
    Ok(Suggestion::new(index, MoveReason::Random))
}
