//! Application state and main UI controller.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Block;

use last_core::{GameError, GameRng, Level, LevelError, Session, default_levels};

use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{BoardWidget, StatusWidget};

/// UI state around a session: level catalog position, the opening prompt,
/// and transient error notices.
pub struct App {
    session: Session,
    levels: Vec<Level>,
    level_index: usize,
    theme: Theme,
    /// True until the player has answered "you go first?".
    choosing_first: bool,
    notice: Option<String>,
    should_quit: bool,
    /// Seed for the first game; later games derive from it so a seeded run
    /// replays identically, resets included.
    base_seed: u64,
    games_started: u64,
}

impl App {
    /// Create the app on the given catalog level (clamped into range).
    /// Without an explicit seed every run is different.
    pub fn new(level_index: usize, seed: Option<u64>) -> Result<Self, LevelError> {
        let levels = default_levels();
        let level_index = level_index.min(levels.len() - 1);
        let base_seed = seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let mut rng = GameRng::new(base_seed);
        let theme = Theme::shuffled(&mut rng);
        let session = Session::new(levels[level_index], rng)?;
        Ok(Self {
            session,
            levels,
            level_index,
            theme,
            choosing_first: true,
            notice: None,
            should_quit: false,
            base_seed,
            games_started: 0,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a fresh session on `level_index`, reshuffling token colors.
    fn start_game(&mut self, level_index: usize) {
        self.games_started += 1;
        let mut rng = GameRng::new(self.base_seed.wrapping_add(self.games_started));
        self.theme = Theme::shuffled(&mut rng);
        match Session::new(self.levels[level_index], rng) {
            Ok(session) => {
                self.session = session;
                self.level_index = level_index;
                self.choosing_first = true;
                self.notice = None;
            }
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let Some(command) = key_to_command(key) else {
            return;
        };
        self.notice = None;
        match command {
            Command::Quit => self.should_quit = true,
            Command::Reset => self.start_game(self.level_index),
            Command::NextLevel => {
                self.start_game((self.level_index + 1) % self.levels.len());
            }
            Command::PrevLevel => {
                self.start_game((self.level_index + self.levels.len() - 1) % self.levels.len());
            }
            Command::Confirm if self.choosing_first => {
                self.choosing_first = false;
            }
            Command::Decline if self.choosing_first => {
                self.choosing_first = false;
                if let Err(err) = self.session.pass_turn() {
                    self.notice = Some(err.to_string());
                }
            }
            Command::Capture(quota) if !self.choosing_first => {
                if let Err(err) = self.session.begin_capture(quota) {
                    self.notice = Some(err.to_string());
                }
            }
            _ => {}
        }
    }

    /// Advance the simulation. The opening prompt does not freeze the
    /// world; Life keeps churning behind it.
    pub fn on_tick(&mut self) -> Result<(), GameError> {
        self.session.on_tick()?;
        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let board = self.session.board();
        let board_height = board.height() as u16 + 2;
        let [board_area, status_area] =
            Layout::vertical([Constraint::Length(board_height), Constraint::Min(4)]).areas(area);

        let board_rect = Rect {
            width: (BoardWidget::width(board) + 2).min(board_area.width),
            height: board_height.min(board_area.height),
            ..board_area
        };
        let block = Block::bordered().title("Last");
        let inner = block.inner(board_rect);
        frame.render_widget(block, board_rect);
        frame.render_widget(BoardWidget::new(board, &self.theme), inner);

        frame.render_widget(
            StatusWidget {
                session: &self.session,
                theme: &self.theme,
                level_index: self.level_index,
                choosing_first: self.choosing_first,
                notice: self.notice.as_deref(),
            },
            status_area,
        );
    }
}
