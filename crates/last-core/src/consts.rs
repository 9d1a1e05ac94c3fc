//! Board sizing and timing constants.

/// Board width in cells.
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells.
pub const BOARD_HEIGHT: usize = 10;

/// Total number of board positions.
pub const BOARD_AREA: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Milliseconds between simulation ticks. The core itself is event-driven;
/// this is the cadence the presentation layer is expected to drive it at.
pub const TICK_MILLIS: u64 = 1000;
