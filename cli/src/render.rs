use std::fmt::{self, Write};

use tictactoe_core::*;

/// Text grid with row/column labels, plus status and tally lines.
pub(crate) fn render(view: &SessionView, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "   0 1 2")?;
    for (row, cells) in view.board.rows().enumerate() {
        write!(out, "{row} ")?;
        for cell in cells {
            write!(out, " {}", cell.symbol())?;
        }
        writeln!(out)?;
    }

    match (view.state, view.outcome) {
        (SessionState::AwaitingMove(player), _) => writeln!(out, "Turn: Player {player}")?,
        (SessionState::GameOver, Outcome::Won(winner)) => writeln!(out, "Winner: {winner}")?,
        (SessionState::GameOver, _) => writeln!(out, "Winner: Draw")?,
    }

    if let Some(reply) = view.last_advisor_move {
        match coords_of(reply.index) {
            Some((row, col)) => writeln!(
                out,
                "Computer played {} at row {row}, col {col} ({:?})",
                reply.index, reply.reason
            )?,
            None => writeln!(out, "Computer played {} ({:?})", reply.index, reply.reason)?,
        }
    }

    writeln!(
        out,
        "Wins: X - {}  O - {}",
        view.tally.wins(Player::A),
        view.tally.wins(Player::B)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_shows_marks_and_tally() {
        let mut session = Session::new(SessionConfig::new(Opponent::Human), 0);
        session.select_cell(0).unwrap();
        session.select_cell(4).unwrap();

        let mut text = String::new();
        render(&SessionView::from_session(&session), &mut text).unwrap();

        assert!(text.contains("0  X . ."));
        assert!(text.contains("1  . O ."));
        assert!(text.contains("Turn: Player X"));
        assert!(text.contains("Wins: X - 0  O - 0"));
    }

    #[test]
    fn render_announces_winner() {
        let mut session = Session::new(SessionConfig::new(Opponent::Human), 0);
        for index in [0, 3, 1, 4, 2] {
            session.select_cell(index).unwrap();
        }

        let mut text = String::new();
        render(&SessionView::from_session(&session), &mut text).unwrap();

        assert!(text.contains("Winner: X"));
        assert!(text.contains("Wins: X - 1  O - 0"));
    }

    #[test]
    fn render_locates_computer_reply() {
        let mut session = Session::new(SessionConfig::default(), 4);
        session.select_cell(4).unwrap();
        let view = SessionView::from_session(&session);
        let reply = view.last_advisor_move.unwrap();
        let (row, col) = coords_of(reply.index).unwrap();
        let mut text = String::new();

        render(&view, &mut text).unwrap();

        assert!(text.contains(&format!("Computer played {} at row {row}, col {col}", reply.index)));
    }
}
