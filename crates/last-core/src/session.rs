//! Game session: board lifecycle, turn control, and tick orchestration.

use strum::Display;
use thiserror::Error;

use crate::cell::{Board, CellValue};
use crate::consts::{BOARD_AREA, BOARD_HEIGHT, BOARD_WIDTH};
use crate::grid::{Direction, Pos};
use crate::level::{Level, LevelError};
use crate::rng::GameRng;
use crate::{life, path, turn};

/// Runtime errors of a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// BFS found no capture target. By construction there is always at
    /// least the opposing token to go after, so this is an
    /// internal-consistency failure, not a game state.
    #[error("no capture target reachable from ({0:?})")]
    NoTargetReachable(Pos),

    #[error("capture quota {quota} outside allowed range 1-{limit}")]
    QuotaOutOfRange { quota: u32, limit: u32 },

    #[error("a capture is already in progress")]
    CaptureInProgress,

    #[error("the game has ended")]
    GameOver,
}

/// One of the two contestants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Player {
    Human,
    Rival,
}

impl Player {
    pub const fn token(self) -> CellValue {
        match self {
            Player::Human => CellValue::Me,
            Player::Rival => CellValue::Rival,
        }
    }

    pub const fn other(self) -> Player {
        match self {
            Player::Human => Player::Rival,
            Player::Rival => Player::Human,
        }
    }

    const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Rival => 1,
        }
    }
}

/// How a finished game went, from the human's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWon,
    RivalWon,
}

/// What a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    Continue,
    Ended(Outcome),
}

/// A running game of Last.
///
/// Event-driven and single-threaded: all mutation happens inside
/// [`Session::on_tick`], [`Session::begin_capture`] and
/// [`Session::pass_turn`]. The caller drives ticks at a fixed cadence
/// (see [`crate::TICK_MILLIS`]); each tick runs one Life generation and at
/// most one board step of the capture in flight.
#[derive(Debug, Clone)]
pub struct Session {
    level: Level,
    board: Board,
    /// Double buffer for the Life step.
    scratch: Board,
    /// Token positions, indexed by [`Player::index`].
    players: [Pos; 2],
    /// Free cells still on the board. Reaches -1 when the winning capture
    /// takes the opposing token itself.
    free_cells: i32,
    active: Player,
    quota_left: u32,
    capturing: bool,
    /// Moves still to replay, one per tick. Popping from the back yields
    /// the forward path.
    pending_path: Vec<Direction>,
    rng: GameRng,
}

impl Session {
    /// Start a session on the given level. The human moves first; use
    /// [`Session::pass_turn`] to decline the opening move.
    pub fn new(level: Level, rng: GameRng) -> Result<Self, LevelError> {
        level.validate()?;
        let mut session = Self {
            level,
            board: Board::new(BOARD_WIDTH, BOARD_HEIGHT, CellValue::Blank),
            scratch: Board::new(BOARD_WIDTH, BOARD_HEIGHT, CellValue::Blank),
            players: [Pos::default(); 2],
            free_cells: 0,
            active: Player::Human,
            quota_left: 0,
            capturing: false,
            pending_path: Vec::new(),
            rng,
        };
        session.seed_board();
        Ok(session)
    }

    /// Re-deal the same level: same population and token counts, fresh
    /// random layout, human to move first.
    pub fn reset(&mut self) {
        self.seed_board();
    }

    fn seed_board(&mut self) {
        let mut data = vec![CellValue::Blank; BOARD_AREA];
        data[0] = CellValue::Me;
        data[1] = CellValue::Rival;
        for slot in data.iter_mut().take(self.level.total_cells as usize).skip(2) {
            *slot = CellValue::Cell;
        }
        self.rng.shuffle(&mut data);
        self.board = Board::from_vec(BOARD_WIDTH, BOARD_HEIGHT, data);
        for (pos, value) in self.board.cells() {
            match value {
                CellValue::Me => self.players[Player::Human.index()] = pos,
                CellValue::Rival => self.players[Player::Rival.index()] = pos,
                _ => {}
            }
        }
        self.scratch = self.board.clone();
        self.free_cells = self.level.initial_free_cells();
        self.active = Player::Human;
        self.quota_left = 0;
        self.capturing = false;
        self.pending_path.clear();
    }

    /// Advance the simulation by one tick: a Life generation while no
    /// capture is running, then one step of the active capture. Both parts
    /// guard themselves, so ticking is always safe to do unconditionally.
    pub fn on_tick(&mut self) -> Result<TickResult, GameError> {
        self.life_step();
        self.capture_step()
    }

    /// The human commits to capturing `quota` cells this turn.
    pub fn begin_capture(&mut self, quota: u32) -> Result<(), GameError> {
        if self.ended() {
            return Err(GameError::GameOver);
        }
        if self.capturing {
            return Err(GameError::CaptureInProgress);
        }
        let limit = self.level.capture_limit;
        if quota < 1 || quota > limit {
            return Err(GameError::QuotaOutOfRange { quota, limit });
        }
        self.active = Player::Human;
        self.quota_left = quota;
        self.capturing = true;
        Ok(())
    }

    /// Decline the opening move and let the rival go first.
    pub fn pass_turn(&mut self) -> Result<(), GameError> {
        if self.ended() {
            return Err(GameError::GameOver);
        }
        if self.capturing {
            return Err(GameError::CaptureInProgress);
        }
        self.hand_off();
        Ok(())
    }

    fn life_step(&mut self) {
        // Terrain only shifts between captures, and stops once the free
        // pool is exhausted.
        if self.capturing || self.free_cells <= 0 {
            return;
        }
        life::evolve(
            &mut self.board,
            &mut self.scratch,
            self.free_cells,
            &mut self.rng,
        );
    }

    fn capture_step(&mut self) -> Result<TickResult, GameError> {
        if !self.capturing || self.ended() {
            return Ok(TickResult::Continue);
        }

        let from = self.players[self.active.index()];
        if self.pending_path.is_empty() {
            self.pending_path = path::plan_capture(
                &self.board,
                from,
                self.active.other().token(),
                self.free_cells,
            )
            .ok_or(GameError::NoTargetReachable(from))?;
        }
        let Some(dir) = self.pending_path.pop() else {
            // A planned path is never empty: the source holds the mover's
            // own token, which never qualifies as a target.
            return Err(GameError::NoTargetReachable(from));
        };

        // One board step per tick.
        let token = self.board[from];
        self.board[from] = CellValue::Blank;
        let to = from.step(dir);
        self.board[to] = token;
        self.players[self.active.index()] = to;

        if self.pending_path.is_empty() {
            // The final step landed on the target and consumed it.
            self.quota_left -= 1;
            self.free_cells -= 1;
        }

        if let Some(outcome) = self.outcome() {
            self.capturing = false;
            return Ok(TickResult::Ended(outcome));
        }
        if self.quota_left == 0 {
            self.hand_off();
        }
        Ok(TickResult::Continue)
    }

    fn hand_off(&mut self) {
        self.active = self.active.other();
        match self.active {
            Player::Rival => {
                self.quota_left = turn::rival_quota(self.free_cells, &self.level, &mut self.rng);
                self.capturing = true;
            }
            Player::Human => {
                // Wait for a keypress to pick the next quota.
                self.quota_left = 0;
                self.capturing = false;
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn capture_limit(&self) -> u32 {
        self.level.capture_limit
    }

    /// Free cells left in the pool; -1 once the last capture took the
    /// opposing token.
    pub fn free_cells(&self) -> i32 {
        self.free_cells
    }

    /// Pieces still on the board including the two tokens, as shown to the
    /// player.
    pub fn remaining_total(&self) -> i32 {
        self.free_cells + 2
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn player_pos(&self, player: Player) -> Pos {
        self.players[player.index()]
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn capture_quota_left(&self) -> u32 {
        self.quota_left
    }

    /// True when the session is idle waiting for the human to pick a quota.
    pub fn awaiting_quota(&self) -> bool {
        !self.ended() && !self.capturing && self.active == Player::Human
    }

    pub fn ended(&self) -> bool {
        self.free_cells == -1
    }

    /// The result, once the game has ended. Whoever performed the capture
    /// that drained the pool to -1 took the last piece and wins.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.ended() {
            return None;
        }
        Some(match self.active {
            Player::Human => Outcome::HumanWon,
            Player::Rival => Outcome::RivalWon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(board: &Board, value: CellValue) -> i32 {
        board.cells().filter(|(_, v)| **v == value).count() as i32
    }

    fn drive_to_end(session: &mut Session, quota: u32) -> Outcome {
        session.begin_capture(quota).unwrap();
        for _ in 0..10_000 {
            if session.awaiting_quota() {
                session.begin_capture(1).unwrap();
            }
            if let TickResult::Ended(outcome) = session.on_tick().unwrap() {
                return outcome;
            }
        }
        panic!("session did not terminate");
    }

    #[test]
    fn test_seeding_counts() {
        let level = Level::new(30, 2, false);
        let session = Session::new(level, GameRng::new(11)).unwrap();
        assert_eq!(count(session.board(), CellValue::Cell), 28);
        assert_eq!(count(session.board(), CellValue::Me), 1);
        assert_eq!(count(session.board(), CellValue::Rival), 1);
        assert_eq!(session.free_cells(), 28);
        assert_eq!(session.active_player(), Player::Human);
        assert!(session.awaiting_quota());
    }

    #[test]
    fn test_token_positions_tracked() {
        let session = Session::new(Level::new(30, 2, false), GameRng::new(3)).unwrap();
        let me = session.player_pos(Player::Human);
        let rival = session.player_pos(Player::Rival);
        assert_eq!(session.board()[me], CellValue::Me);
        assert_eq!(session.board()[rival], CellValue::Rival);
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(Session::new(Level::new(30, 0, false), GameRng::new(0)).is_err());
        assert!(Session::new(Level::new(200, 2, false), GameRng::new(0)).is_err());
    }

    #[test]
    fn test_begin_capture_validation() {
        let mut session = Session::new(Level::new(30, 2, false), GameRng::new(1)).unwrap();
        assert_eq!(
            session.begin_capture(0),
            Err(GameError::QuotaOutOfRange { quota: 0, limit: 2 })
        );
        assert_eq!(
            session.begin_capture(3),
            Err(GameError::QuotaOutOfRange { quota: 3, limit: 2 })
        );
        session.begin_capture(2).unwrap();
        assert!(session.is_capturing());
        assert_eq!(session.begin_capture(1), Err(GameError::CaptureInProgress));
    }

    #[test]
    fn test_life_runs_between_turns() {
        let mut session = Session::new(Level::new(30, 2, false), GameRng::new(21)).unwrap();
        for _ in 0..10 {
            assert_eq!(session.on_tick().unwrap(), TickResult::Continue);
            assert_eq!(count(session.board(), CellValue::Cell), 28);
            assert_eq!(count(session.board(), CellValue::Me), 1);
            assert_eq!(count(session.board(), CellValue::Rival), 1);
        }
    }

    #[test]
    fn test_rival_takes_everything_when_it_can() {
        // 3 free cells, limit 4. Human takes 1, leaving 2 + the human
        // token, all within the rival's reach: quota must be 3 and the
        // rival must win.
        let mut session = Session::new(Level::new(5, 4, false), GameRng::new(2)).unwrap();
        session.begin_capture(1).unwrap();
        let mut saw_rival_quota = None;
        let outcome = loop {
            match session.on_tick().unwrap() {
                TickResult::Ended(outcome) => break outcome,
                TickResult::Continue => {
                    if session.active_player() == Player::Rival && saw_rival_quota.is_none() {
                        saw_rival_quota = Some(session.capture_quota_left());
                    }
                }
            }
        };
        assert_eq!(saw_rival_quota, Some(3));
        assert_eq!(outcome, Outcome::RivalWon);
        assert_eq!(session.free_cells(), -1);
        assert_eq!(session.outcome(), Some(Outcome::RivalWon));
    }

    #[test]
    fn test_human_wins_by_taking_last() {
        // 2 free cells, limit 4: quota 3 sweeps the pool and the rival.
        let mut session = Session::new(Level::new(4, 4, false), GameRng::new(8)).unwrap();
        let outcome = drive_to_end(&mut session, 3);
        assert_eq!(outcome, Outcome::HumanWon);
        assert_eq!(count(session.board(), CellValue::Me), 1);
        assert_eq!(count(session.board(), CellValue::Rival), 0);
    }

    #[test]
    fn test_capture_decrements_by_one() {
        let mut session = Session::new(Level::new(30, 2, false), GameRng::new(5)).unwrap();
        session.begin_capture(2).unwrap();
        let mut prev = session.free_cells();
        // Run out the human's quota; the handoff flips the active player.
        while session.active_player() == Player::Human {
            session.on_tick().unwrap();
            let free = session.free_cells();
            assert!(free == prev || free == prev - 1);
            prev = free;
        }
        assert_eq!(session.free_cells(), 26);
    }

    #[test]
    fn test_turn_returns_to_human() {
        let mut session = Session::new(Level::new(30, 2, false), GameRng::new(13)).unwrap();
        session.begin_capture(1).unwrap();
        for _ in 0..10_000 {
            session.on_tick().unwrap();
            if session.awaiting_quota() {
                // Full round trip: human capture, rival reply, back to us.
                assert!(session.free_cells() < 28);
                return;
            }
        }
        panic!("turn never returned to the human");
    }

    #[test]
    fn test_pass_turn_gives_rival_the_opening() {
        let mut session = Session::new(Level::new(30, 2, false), GameRng::new(17)).unwrap();
        session.pass_turn().unwrap();
        assert_eq!(session.active_player(), Player::Rival);
        assert!(session.is_capturing());
        assert!(session.capture_quota_left() >= 1);
        assert_eq!(session.pass_turn(), Err(GameError::CaptureInProgress));
    }

    #[test]
    fn test_ticks_after_end_are_inert() {
        let mut session = Session::new(Level::new(4, 4, false), GameRng::new(8)).unwrap();
        drive_to_end(&mut session, 3);
        let board = session.board().clone();
        assert_eq!(session.on_tick().unwrap(), TickResult::Continue);
        assert_eq!(session.board(), &board);
        assert_eq!(session.begin_capture(1), Err(GameError::GameOver));
        assert_eq!(session.pass_turn(), Err(GameError::GameOver));
    }

    #[test]
    fn test_reset_reproduces_population() {
        let mut session = Session::new(Level::new(34, 2, true), GameRng::new(77)).unwrap();
        drive_to_end(&mut session, 2);
        session.reset();
        assert_eq!(count(session.board(), CellValue::Cell), 32);
        assert_eq!(count(session.board(), CellValue::Me), 1);
        assert_eq!(count(session.board(), CellValue::Rival), 1);
        assert_eq!(session.free_cells(), 32);
        assert!(session.awaiting_quota());
        assert_eq!(session.outcome(), None);
    }
}
