use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// One of the four cardinal directions.
///
/// The discriminants double as the 2-bit marker value used by the compact storage format,
/// and the declaration order is the solver's rotation order (Up -> Right -> Down -> Left -> Up).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in rotation order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The next direction clockwise.
    pub fn rotate(self) -> Direction {
        Direction::from_index(self as u8 + 1)
    }

    pub fn opposite(self) -> Direction {
        Direction::from_index(self as u8 + 2)
    }

    /// Maps any integer onto a direction, taking it modulo 4.
    pub fn from_index(index: u8) -> Direction {
        Direction::ALL[(index % 4) as usize]
    }

    /// Row and column offsets of a single step in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "top"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "bottom"),
            Direction::Left => write!(f, "left"),
        }
    }
}

/// A single maze cell.
///
/// Only the east and south walls are stored; the north and west walls of a cell
/// are the south wall of the cell above and the east wall of the cell to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub right_wall: bool,
    pub bottom_wall: bool,
    /// Solver scratch field.
    ///
    /// While searching it holds the last direction tried out of this cell, which is
    /// also the way back for a cell that was just entered. Once the goal is found, the
    /// markers along the route starting at the start cell point toward the goal.
    pub marker: Direction,
    /// Set on every cell of the most recently found path.
    pub visited: bool,
}

impl Cell {
    /// A cell with both walls up, marker pointing up and no visit.
    pub const BLOCKED: Cell = Cell {
        right_wall: true,
        bottom_wall: true,
        marker: Direction::Up,
        visited: false,
    };

    /// Clears the solver fields, leaving the walls untouched.
    pub fn unmark(&mut self) {
        self.marker = Direction::Up;
        self.visited = false;
    }

    /// Terminal glyph for the cell interior, highlighted when the cell is on the path.
    pub fn styled_interior(&self) -> StyledContent<&'static str> {
        if self.visited {
            " @ ".with(Color::Yellow).bold()
        } else {
            "   ".with(Color::Reset)
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLOCKED
    }
}
