//! last-tui: terminal interface for the Last capture game.
//!
//! The game logic lives in `last_core`; this crate maps key presses to
//! session commands and renders the board with ratatui.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
