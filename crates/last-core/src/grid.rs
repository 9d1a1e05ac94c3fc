//! Generic 2-D board storage and directions.

use strum::Display;

/// A board coordinate. Signed so that the neighbors of edge positions can be
/// expressed and rejected by a bounds check instead of underflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position one step in the given direction.
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// A compass direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// The four orthogonal directions, in the fixed order BFS expands them.
    /// This order is the tie-break between equally short capture paths.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// All eight neighbor directions, used for Life neighbor counting.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row, col) offset of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

/// A rectangular grid with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every position set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width * height],
        }
    }

    /// Create a grid from row-major data. `data` must hold exactly
    /// `width * height` values.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height, "grid data length mismatch");
        Self {
            width,
            height,
            data,
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.height
            && pos.col >= 0
            && (pos.col as usize) < self.width
    }

    /// Bounds-checked access.
    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.in_bounds(pos) {
            Some(&self.data[self.index(pos)])
        } else {
            None
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        let height = self.height;
        (0..height).flat_map(move |row| (0..width).map(move |col| Pos::new(row as i32, col as i32)))
    }

    /// All (position, value) pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().zip(self.data.iter())
    }

    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.row as usize * self.width + pos.col as usize
    }
}

impl<T> core::ops::Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        let idx = self.index(pos);
        &self.data[idx]
    }
}

impl<T> core::ops::IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let idx = self.index(pos);
        &mut self.data[idx]
    }
}
