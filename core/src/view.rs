use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only picture of a session for front ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub board: Board,
    pub active_player: Player,
    pub outcome: Outcome,
    pub state: SessionState,
    pub tally: WinTally,
    pub winning_line: Option<[CellIndex; 3]>,
    pub last_advisor_move: Option<Suggestion>,
}

impl SessionView {
    pub fn from_session<A: MoveAdvisor>(session: &Session<A>) -> Self {
        let board = *session.board();
        let outcome = session.outcome();
        Self {
            board,
            active_player: session.active_player(),
            outcome,
            state: session.state(),
            tally: *session.tally(),
            winning_line: outcome
                .winner()
                .and_then(|winner| winning_line(&board, winner)),
            last_advisor_move: session.last_advisor_move(),
        }
    }
}
