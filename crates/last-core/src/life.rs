//! Budget-constrained Life evolution.
//!
//! One generation of Conway's rules, then the live population is forced
//! back to the current free-cell budget by random insertions or removals.
//! Player tokens are copied through untouched and count as dead neighbors,
//! so the terrain shifts around them without ever moving them.

use crate::cell::{Board, CellValue};
use crate::grid::{Direction, Pos};
use crate::rng::GameRng;

/// Advance the board by one constrained generation.
///
/// The new generation is built in `scratch` to keep neighbor counting free
/// of read/write aliasing, then committed to `board`. After the commit the
/// number of `Cell` positions equals `budget` exactly.
pub fn evolve(board: &mut Board, scratch: &mut Board, budget: i32, rng: &mut GameRng) {
    let mut alive = 0i32;
    for pos in board.positions() {
        let current = board[pos];
        let next = if current.is_token() {
            current
        } else {
            match count_alive_neighbors(board, pos) {
                2 => current,
                3 => CellValue::Cell,
                _ => CellValue::Blank,
            }
        };
        scratch[pos] = next;
        if next == CellValue::Cell {
            alive += 1;
        }
    }

    let diff = budget - alive;
    if diff < 0 {
        retag_random(scratch, rng, CellValue::Cell, CellValue::Blank, -diff);
    } else if diff > 0 {
        retag_random(scratch, rng, CellValue::Blank, CellValue::Cell, diff);
    }

    board.clone_from(scratch);
}

/// Live neighbors among the eight surrounding positions. Out-of-bounds
/// neighbors and player tokens do not count.
fn count_alive_neighbors(board: &Board, pos: Pos) -> u32 {
    Direction::ALL
        .iter()
        .filter(|dir| board.get(pos.step(**dir)) == Some(&CellValue::Cell))
        .count() as u32
}

/// Flip `n` uniformly random positions holding `from` to `to`. Rejection
/// sampling; the caller guarantees at least `n` candidates exist.
fn retag_random(board: &mut Board, rng: &mut GameRng, from: CellValue, to: CellValue, n: i32) {
    for _ in 0..n {
        loop {
            let pos = rng.random_pos(board.width(), board.height());
            if board[pos] == from {
                board[pos] = to;
                break;
            }
        }
    }
}
