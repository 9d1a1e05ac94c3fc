//! The rival's capture-quota policy.
//!
//! The pool of free cells plus the human token is a subtraction game: each
//! turn removes 1..=capture_limit pieces and whoever takes the last piece
//! wins. Hard levels play the optimal strategy for that game; easy levels
//! pick at random.

use crate::level::Level;
use crate::rng::GameRng;

/// Decide how many pieces the rival captures this turn.
///
/// `free_cells` is the pool at the start of the rival's turn (always >= 0
/// here; a finished game never reaches the turn controller).
pub(crate) fn rival_quota(free_cells: i32, level: &Level, rng: &mut GameRng) -> u32 {
    let total = free_cells as u32 + 1;

    // Close enough to take everything, human token included.
    if total <= level.capture_limit {
        return total;
    }

    if !level.hard {
        return rng.rnd(level.capture_limit);
    }

    // Optimal subtraction-game move: leave a multiple of (limit + 1).
    let period = level.capture_limit + 1;
    let quota = total % period;
    if quota == 0 {
        // Losing position under optimal play; no safe move exists, so pick
        // at random instead.
        rng.rnd(level.capture_limit)
    } else {
        quota
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outright_win_takes_everything() {
        // 2 free cells + the human token within a limit of 4.
        let level = Level::new(5, 4, false);
        let mut rng = GameRng::new(1);
        assert_eq!(rival_quota(2, &level, &mut rng), 3);
        // Exact fit also wins outright.
        assert_eq!(rival_quota(3, &level, &mut rng), 4);
    }

    #[test]
    fn test_easy_quota_in_range() {
        let level = Level::new(30, 3, false);
        let mut rng = GameRng::new(2);
        for _ in 0..200 {
            let quota = rival_quota(10, &level, &mut rng);
            assert!(quota >= 1 && quota <= 3);
        }
    }

    #[test]
    fn test_hard_quota_is_optimal() {
        let level = Level::new(30, 3, true);
        let mut rng = GameRng::new(3);
        let period = level.capture_limit + 1;
        for free_cells in 4..=28 {
            let total = free_cells as u32 + 1;
            if total % period == 0 {
                continue;
            }
            let quota = rival_quota(free_cells, &level, &mut rng);
            assert_eq!(quota, total % period);
            // The human is left staring at a multiple of the period.
            assert_eq!((total - quota) % period, 0);
        }
    }

    #[test]
    fn test_hard_losing_position_falls_back_to_random() {
        // total = 4, period = 4: remainder 0, so the rival has no winning
        // move and must still take something legal.
        let level = Level::new(30, 3, true);
        let mut rng = GameRng::new(4);
        for _ in 0..200 {
            let quota = rival_quota(3, &level, &mut rng);
            assert!(quota >= 1 && quota <= 3);
        }
    }

    #[test]
    fn test_quota_never_zero() {
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            for limit in 1..=5 {
                for hard in [false, true] {
                    let level = Level::new(56, limit, hard);
                    for free_cells in 0..=54 {
                        assert!(rival_quota(free_cells, &level, &mut rng) >= 1);
                    }
                }
            }
        }
    }
}
