//! Render widgets for the game screen.

mod board;
mod status;

pub use board::BoardWidget;
pub use status::StatusWidget;
