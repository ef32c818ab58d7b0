use std::fmt;

use super::cell::Direction;

/// An opening in the outer boundary of a maze.
///
/// `side` names the boundary edge and `offset` the row (for left/right exits) or
/// column (for top/bottom exits) along it, counted from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exit {
    pub side: Direction,
    pub offset: usize,
}

impl Exit {
    pub fn new(side: Direction, offset: usize) -> Self {
        Exit { side, offset }
    }

    /// Packs the exit into a single integer, `offset * 4 + side`.
    pub fn encode(self) -> usize {
        self.offset * 4 + self.side as usize
    }

    /// Inverse of [`Exit::encode`].
    pub fn decode(value: usize) -> Self {
        Exit {
            side: Direction::from_index((value % 4) as u8),
            offset: value / 4,
        }
    }

    /// Whether the exit lies on the boundary of a `rows` x `cols` maze.
    pub fn fits(self, rows: usize, cols: usize) -> bool {
        match self.side {
            Direction::Up | Direction::Down => self.offset < cols,
            Direction::Left | Direction::Right => self.offset < rows,
        }
    }

    /// The boundary cell this exit opens, as `(row, col)`.
    /// Only meaningful when [`Exit::fits`]; otherwise the position lies outside the maze.
    pub fn cell(self, rows: usize, cols: usize) -> (usize, usize) {
        match self.side {
            Direction::Up => (0, self.offset),
            Direction::Down => (rows.saturating_sub(1), self.offset),
            Direction::Left => (self.offset, 0),
            Direction::Right => (self.offset, cols.saturating_sub(1)),
        }
    }
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.offset + 1)
    }
}
