//! Capture pathfinding.
//!
//! Breadth-first search from the active player's token to the nearest
//! capture target. Targets are free cells; the opposing token only becomes
//! a target once every free cell is gone, which is the rule that makes the
//! endgame a take-the-last-piece race.

use std::collections::VecDeque;

use crate::cell::{Board, CellValue};
use crate::grid::{Direction, Pos};

/// Find a shortest path from `from` to the nearest capture target.
///
/// Returns the path as a stack of moves: popping from the back yields the
/// forward steps in order. Ties between equally short targets are broken by
/// BFS expansion order, with neighbors tried in `Direction::ORTHOGONAL`
/// order. Returns `None` when no target is reachable, which a live session
/// treats as an internal-consistency error.
pub fn plan_capture(
    board: &Board,
    from: Pos,
    opponent: CellValue,
    free_cells: i32,
) -> Option<Vec<Direction>> {
    let is_target = |value: CellValue| {
        if value == CellValue::Cell {
            return true;
        }
        // The rival is only on the menu once the neutral cells are gone.
        free_cells == 0 && value == opponent
    };
    let can_visit = |value: CellValue| {
        matches!(value, CellValue::Blank | CellValue::Cell)
            || (free_cells == 0 && value == opponent)
    };

    let mut visited = crate::grid::Grid::new(board.width(), board.height(), false);
    let mut reached_by: crate::grid::Grid<Option<Direction>> =
        crate::grid::Grid::new(board.width(), board.height(), None);
    let mut queue = VecDeque::new();

    visited[from] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        if is_target(board[cur]) {
            return backtrack(&reached_by, from, cur);
        }
        for dir in Direction::ORTHOGONAL {
            let next = cur.step(dir);
            if !board.in_bounds(next) || visited[next] || !can_visit(board[next]) {
                continue;
            }
            visited[next] = true;
            reached_by[next] = Some(dir);
            queue.push_back(next);
        }
    }

    None
}

/// Walk the discovery directions backward from `target` to `from`, pushing
/// each step so the last push is the first forward move.
fn backtrack(
    reached_by: &crate::grid::Grid<Option<Direction>>,
    from: Pos,
    target: Pos,
) -> Option<Vec<Direction>> {
    let mut path = Vec::new();
    let mut cur = target;
    while cur != from {
        let dir = reached_by[cur]?;
        path.push(dir);
        cur = cur.step(dir.opposite());
    }
    Some(path)
}
