//! Level definitions and the default catalog.

use thiserror::Error;

use crate::consts::BOARD_AREA;

/// Errors from level validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("capture limit must be at least 1")]
    ZeroCaptureLimit,

    #[error("a level needs the two player tokens plus at least one free cell, got {0} total")]
    TooFewCells(u32),

    #[error("total cells {total} exceed board capacity {capacity}")]
    TooManyCells { total: u32, capacity: usize },
}

/// Immutable parameters of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Initial population, including both player tokens.
    pub total_cells: u32,
    /// Most cells a single turn may capture. The minimum is always 1.
    pub capture_limit: u32,
    /// Whether the rival plays the optimal subtraction-game strategy.
    pub hard: bool,
}

impl Level {
    pub const fn new(total_cells: u32, capture_limit: u32, hard: bool) -> Self {
        Self {
            total_cells,
            capture_limit,
            hard,
        }
    }

    /// Check the parameters against the board capacity.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.capture_limit == 0 {
            return Err(LevelError::ZeroCaptureLimit);
        }
        if self.total_cells < 3 {
            return Err(LevelError::TooFewCells(self.total_cells));
        }
        if self.total_cells as usize > BOARD_AREA {
            return Err(LevelError::TooManyCells {
                total: self.total_cells,
                capacity: BOARD_AREA,
            });
        }
        Ok(())
    }

    /// Initial free-cell budget: everything except the two tokens.
    pub const fn initial_free_cells(&self) -> i32 {
        self.total_cells as i32 - 2
    }
}

/// The built-in level list. Easy and hard variants are paired; whether the
/// first or second mover holds the winning position alternates with the
/// totals.
pub fn default_levels() -> Vec<Level> {
    vec![
        // first mover holds the win
        Level::new(30, 2, false),
        Level::new(30, 2, true),
        // second mover holds the win
        Level::new(34, 2, false),
        Level::new(34, 2, true),
        // first mover holds the win
        Level::new(40, 3, false),
        Level::new(40, 3, true),
        // second mover holds the win
        Level::new(56, 4, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels_valid() {
        let levels = default_levels();
        assert_eq!(levels.len(), 7);
        for level in &levels {
            level.validate().unwrap();
            assert!(level.total_cells >= 30 && level.total_cells <= 56);
            assert!(level.capture_limit >= 2 && level.capture_limit <= 4);
        }
    }

    #[test]
    fn test_validate_rejects_bad_levels() {
        assert_eq!(
            Level::new(30, 0, false).validate(),
            Err(LevelError::ZeroCaptureLimit)
        );
        assert_eq!(
            Level::new(2, 2, false).validate(),
            Err(LevelError::TooFewCells(2))
        );
        assert_eq!(
            Level::new(101, 2, false).validate(),
            Err(LevelError::TooManyCells {
                total: 101,
                capacity: 100
            })
        );
    }

    #[test]
    fn test_initial_free_cells() {
        assert_eq!(Level::new(30, 2, false).initial_free_cells(), 28);
        assert_eq!(Level::new(5, 4, false).initial_free_cells(), 3);
    }
}
