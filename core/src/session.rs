use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Side that opens every game.
pub const FIRST_PLAYER: Player = Player::A;

/// Who drives `Player::B`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// `Player::B` replies automatically within the same `select_cell` call.
    #[default]
    Advisor,
    /// Both sides are driven through `select_cell`, alternating turns.
    Human,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub opponent: Opponent,
}

impl SessionConfig {
    pub const fn new(opponent: Opponent) -> Self {
        Self { opponent }
    }

    pub const fn automated_player(&self) -> Option<Player> {
        match self.opponent {
            Opponent::Advisor => Some(Player::B),
            Opponent::Human => None,
        }
    }
}

/// Valid transitions:
/// - AwaitingMove(A) -> AwaitingMove(B), only with a human opponent
/// - AwaitingMove(_) -> AwaitingMove(_) after a full human + advisor exchange
/// - AwaitingMove(_) -> GameOver
/// - any -> AwaitingMove(A) on reset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    AwaitingMove(Player),
    GameOver,
}

impl SessionState {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Result of a cell selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Occupied cell or finished game, nothing changed.
    NoChange,
    /// Move (and any automated reply) applied, game still running.
    Placed,
    /// Move (and any automated reply) applied and the game ended.
    Finished(Outcome),
}

impl SelectOutcome {
    /// Whether this outcome could have caused an update to the session
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
            Self::Finished(_) => true,
        }
    }
}

/// A sequence of games on one board with a running win tally.
///
/// Each session owns its advisor, so independent sessions never share state.
#[derive(Clone, Debug)]
pub struct Session<A = HeuristicAdvisor<SmallRng>> {
    config: SessionConfig,
    board: Board,
    active_player: Player,
    outcome: Outcome,
    tally: WinTally,
    last_advisor_move: Option<Suggestion>,
    advisor: A,
}

impl Session {
    /// Session using the heuristic advisor seeded with `seed`.
    pub fn new(config: SessionConfig, seed: u64) -> Self {
        Self::with_advisor(config, HeuristicAdvisor::from_seed(seed))
    }
}

impl<R: Rng> Session<HeuristicAdvisor<R>> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        Self::with_advisor(config, HeuristicAdvisor::new(rng))
    }
}

impl<A: MoveAdvisor> Session<A> {
    pub fn with_advisor(config: SessionConfig, advisor: A) -> Self {
        Self {
            config,
            board: Board::new(),
            active_player: FIRST_PLAYER,
            outcome: Outcome::InProgress,
            tally: WinTally::new(),
            last_advisor_move: None,
            advisor,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn tally(&self) -> &WinTally {
        &self.tally
    }

    /// Automated reply made during the latest `select_cell`, if any.
    pub fn last_advisor_move(&self) -> Option<Suggestion> {
        self.last_advisor_move
    }

    pub fn state(&self) -> SessionState {
        if self.outcome.is_finished() {
            SessionState::GameOver
        } else {
            SessionState::AwaitingMove(self.active_player)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_final()
    }

    /// Plays `index` for the active player, then lets the advisor answer if it owns the next
    /// turn. Selecting an occupied cell or playing after the game ended changes nothing.
    pub fn select_cell(&mut self, index: CellIndex) -> Result<SelectOutcome> {
        let index = Board::validate_index(index)
            .inspect_err(|err| log::warn!("Rejected selection: {}", err))?;

        if self.outcome.is_finished() {
            log::debug!("Game already over, ignoring selection at {}", index);
            return Ok(SelectOutcome::NoChange);
        }

        if !self.board.is_empty_at(index)? {
            log::debug!("Cell {} is occupied, ignoring selection", index);
            return Ok(SelectOutcome::NoChange);
        }

        let checkpoint = (
            self.board,
            self.active_player,
            self.outcome,
            self.tally,
            self.last_advisor_move,
        );
        match self.apply_exchange(index) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                log::warn!("Rolling back selection at {}: {}", index, err);
                (
                    self.board,
                    self.active_player,
                    self.outcome,
                    self.tally,
                    self.last_advisor_move,
                ) = checkpoint;
                Err(err)
            }
        }
    }

    /// Human move followed by the automated reply. May leave the session half applied on `Err`.
    fn apply_exchange(&mut self, index: CellIndex) -> Result<SelectOutcome> {
        self.last_advisor_move = None;
        self.play(index)?;

        if !self.outcome.is_finished() && self.config.automated_player() == Some(self.active_player)
        {
            let suggestion = self.advisor.suggest(&self.board, self.active_player)?;
            log::debug!(
                "Advisor picked {} for {} ({:?})",
                suggestion.index,
                self.active_player,
                suggestion.reason
            );
            self.play(suggestion.index)?;
            self.last_advisor_move = Some(suggestion);
        }

        Ok(match self.outcome {
            Outcome::InProgress => SelectOutcome::Placed,
            finished => SelectOutcome::Finished(finished),
        })
    }

    /// Starts a new game. The tally is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.active_player = FIRST_PLAYER;
        self.outcome = Outcome::InProgress;
        self.last_advisor_move = None;
        log::debug!(
            "Board reset, tally X {} - O {}",
            self.tally.wins(Player::A),
            self.tally.wins(Player::B)
        );
    }

    fn play(&mut self, index: CellIndex) -> Result<()> {
        let player = self.active_player;
        self.board.place(index, player)?;
        self.active_player = player.opponent();
        self.outcome = classify(&self.board);
        log::debug!("{} placed at {}, outcome {:?}", player, index, self.outcome);

        if let Some(winner) = self.outcome.winner() {
            self.tally.record(winner);
            log::debug!("{} wins, {} games won", winner, self.tally.wins(winner));
        }
        Ok(())
    }
}
