//! Input handling - convert key events to commands.

use crossterm::event::{KeyCode, KeyEvent};

/// What a keypress asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Commit to capturing this many cells.
    Capture(u32),
    /// Accept the opening move (the "you go first?" prompt).
    Confirm,
    /// Decline the opening move and let the rival start.
    Decline,
    NextLevel,
    PrevLevel,
    Reset,
    Quit,
}

/// Map a key event to a command. Digit range checking against the level's
/// capture limit happens in the app, which knows the current level.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(Command::Capture(c as u32 - '0' as u32)),
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::Decline),
        KeyCode::Right => Some(Command::NextLevel),
        KeyCode::Left => Some(Command::PrevLevel),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
