//! last-core: Core simulation for the Last capture game.
//!
//! Two interleaved games on one 10x10 board: a population-conserving
//! variant of Conway's Life shifts the free cells around between turns,
//! while the players alternately capture cells via shortest-path moves.
//! The pool of free cells plus the loser's token is a subtraction game;
//! whoever takes the last piece wins.
//!
//! This crate contains all game logic with no I/O dependencies. It is
//! deterministic under a fixed seed and designed to be driven by a
//! presentation layer delivering ticks and keypresses.

pub mod cell;
pub mod grid;
pub mod level;
pub mod life;
pub mod path;
pub mod session;

mod consts;
mod rng;
mod turn;

pub use cell::{Board, CellValue};
pub use consts::*;
pub use grid::{Direction, Grid, Pos};
pub use level::{Level, LevelError, default_levels};
pub use rng::GameRng;
pub use session::{GameError, Outcome, Player, Session, TickResult};
