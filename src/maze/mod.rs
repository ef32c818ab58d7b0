pub mod cell;
pub mod exit;
pub mod grid;

pub use cell::{Cell, Direction};
pub use exit::Exit;
use grid::Grid;

use crate::error::{Error, Result};

/// A rectangular maze of [`Cell`]s with two exits on its outer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Cell>,
    exit_1: Exit,
    exit_2: Exit,
}

impl Maze {
    /// Creates a maze with the given number of rows and columns.
    /// Every cell starts blocked: both walls present, marker up, not visited.
    /// The entrance sits on the left of the top row and the exit on the right of the bottom row.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimensions);
        }
        Ok(Maze {
            grid: Grid::try_new(rows, cols, Cell::BLOCKED)?,
            exit_1: Exit::new(Direction::Left, 0),
            exit_2: Exit::new(Direction::Right, rows - 1),
        })
    }

    /// Returns a reference to the cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.grid.data
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// True only after [`Maze::clear`].
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn exit_1(&self) -> Exit {
        self.exit_1
    }

    pub fn exit_2(&self) -> Exit {
        self.exit_2
    }

    /// Replaces both exits. Each must lie on the maze boundary.
    pub fn set_exits(&mut self, exit_1: Exit, exit_2: Exit) -> Result<()> {
        for exit in [exit_1, exit_2] {
            if !exit.fits(self.rows(), self.cols()) {
                return Err(Error::InvalidExit {
                    side: exit.side,
                    offset: exit.offset,
                    rows: self.rows(),
                    cols: self.cols(),
                });
            }
        }
        self.exit_1 = exit_1;
        self.exit_2 = exit_2;
        Ok(())
    }

    /// The boundary cell opened by `exit`.
    pub fn exit_cell(&self, exit: Exit) -> (usize, usize) {
        exit.cell(self.rows(), self.cols())
    }

    /// Checks if the given `(row, col)` is within the bounds of the maze.
    pub fn is_in_bounds(&self, pos: (usize, usize)) -> bool {
        self.grid.is_in_bounds(pos)
    }

    /// Fails with [`Error::OutOfBounds`] unless `pos` is inside the maze.
    pub fn check_bounds(&self, pos: (usize, usize)) -> Result<()> {
        if self.is_in_bounds(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn cell(&self, pos: (usize, usize)) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Row-major index of `(row, col)`.
    pub fn index_of(&self, pos: (usize, usize)) -> usize {
        self.grid.ravel_index(pos.0, pos.1)
    }

    /// `(row, col)` of a row-major index.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        self.grid.unravel_index(index)
    }

    /// Neighbor of `pos` one step in `dir`, if it is inside the maze.
    pub fn neighbor(&self, pos: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = dir.offset();
        let row = pos.0.checked_add_signed(dr)?;
        let col = pos.1.checked_add_signed(dc)?;
        self.is_in_bounds((row, col)).then_some((row, col))
    }

    /// Whether the wall between `pos` and its neighbor in `dir` is present.
    /// The outer boundary always counts as a wall.
    pub fn has_wall(&self, pos: (usize, usize), dir: Direction) -> bool {
        let Some(next) = self.neighbor(pos, dir) else {
            return true;
        };
        match dir {
            Direction::Up => self[next].bottom_wall,
            Direction::Right => self[pos].right_wall,
            Direction::Down => self[pos].bottom_wall,
            Direction::Left => self[next].right_wall,
        }
    }

    /// True if one can step from `pos` toward `dir` without crossing a wall.
    pub fn can_move(&self, pos: (usize, usize), dir: Direction) -> bool {
        !self.has_wall(pos, dir)
    }

    /// Knocks down the wall between `pos` and its neighbor in `dir`.
    ///
    /// # Returns
    /// The neighbor's position, or `None` (leaving the maze untouched) if `dir` points
    /// across the outer boundary.
    pub fn remove_wall(&mut self, pos: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let next = self.neighbor(pos, dir)?;
        match dir {
            Direction::Up => self[next].bottom_wall = false,
            Direction::Right => self[pos].right_wall = false,
            Direction::Down => self[pos].bottom_wall = false,
            Direction::Left => self[next].right_wall = false,
        }
        Some(next)
    }

    /// Whether the boundary edge on side `dir` of `pos` is opened by one of the exits.
    pub fn is_exit_edge(&self, pos: (usize, usize), dir: Direction) -> bool {
        [self.exit_1, self.exit_2].into_iter().any(|exit| {
            exit.side == dir
                && exit.fits(self.rows(), self.cols())
                && self.exit_cell(exit) == pos
        })
    }

    /// Puts every wall back up and clears the solver fields.
    pub fn reset(&mut self) {
        self.grid.fill(Cell::BLOCKED);
    }

    /// Puts every wall back up, leaving markers and visit flags untouched.
    pub fn raise_walls(&mut self) {
        self.grid.iter_mut().for_each(|cell| {
            cell.right_wall = true;
            cell.bottom_wall = true;
        });
    }

    /// Clears markers and visit flags, leaving walls untouched.
    pub fn unmark(&mut self) {
        self.grid.iter_mut().for_each(Cell::unmark);
    }

    /// Releases the cells. Calling this on an already cleared maze is a no-op.
    pub fn clear(&mut self) {
        self.grid = Grid::empty();
    }

    /// Number of interior walls that have been knocked down.
    pub fn open_wall_count(&self) -> usize {
        (0..self.rows())
            .flat_map(|row| (0..self.cols()).map(move |col| (row, col)))
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&dir| self.neighbor(pos, dir).is_some() && self.can_move(pos, dir))
                    .count()
            })
            .sum()
    }

    /// Whether the open walls form a spanning tree: every cell reachable from
    /// `(0, 0)` and no cycles. Only such mazes are safe to solve.
    pub fn is_perfect(&self) -> bool {
        if self.is_empty() || self.open_wall_count() != self.len() - 1 {
            return false;
        }
        let mut seen = vec![false; self.len()];
        let mut stack = vec![(0, 0)];
        seen[0] = true;
        let mut reached = 0;
        while let Some(pos) = stack.pop() {
            reached += 1;
            for next in get_open_neighbors(pos, self) {
                let idx = self.index_of(next);
                if !seen[idx] {
                    seen[idx] = true;
                    stack.push(next);
                }
            }
        }
        reached == self.len()
    }

    /// Number of cells on the most recently marked path.
    pub fn path_len(&self) -> usize {
        self.grid.iter().filter(|cell| cell.visited).count()
    }
}

impl std::ops::Index<(usize, usize)> for Maze {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Maze {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.grid[index]
    }
}

/// Open neighbors of a cell: adjacent cells reachable without crossing a wall.
pub fn get_open_neighbors(
    pos: (usize, usize),
    maze: &Maze,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&dir| maze.can_move(pos, dir))
        .filter_map(move |dir| maze.neighbor(pos, dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze[(2, 3)].visited = true;
        assert!(maze[(2, 3)].visited);
        assert!(maze.cells()[13].visited);
    }

    #[test]
    fn test_empty_dimensions() {
        assert_eq!(Maze::new(0, 3), Err(Error::EmptyDimensions));
        assert_eq!(Maze::new(3, 0), Err(Error::EmptyDimensions));
    }

    #[test]
    fn test_default_exits() {
        let maze = Maze::new(4, 6).unwrap();
        assert_eq!(maze.exit_1(), Exit::new(Direction::Left, 0));
        assert_eq!(maze.exit_2(), Exit::new(Direction::Right, 3));
        assert_eq!(maze.exit_cell(maze.exit_2()), (3, 5));
    }

    #[test]
    fn test_remove_wall() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert!(!maze.can_move((1, 1), Direction::Left));
        assert_eq!(maze.remove_wall((1, 1), Direction::Left), Some((1, 0)));
        assert!(!maze[(1, 0)].right_wall);
        assert!(maze.can_move((1, 1), Direction::Left));
        assert!(maze.can_move((1, 0), Direction::Right));

        assert_eq!(maze.remove_wall((1, 1), Direction::Up), Some((0, 1)));
        assert!(!maze[(0, 1)].bottom_wall);
        assert!(maze.can_move((0, 1), Direction::Down));
        assert_eq!(maze.open_wall_count(), 2);
    }

    #[test]
    fn test_boundary_is_closed() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze[(0, 1)].right_wall = false;
        maze[(1, 0)].bottom_wall = false;
        assert!(!maze.can_move((0, 1), Direction::Right));
        assert!(!maze.can_move((1, 0), Direction::Down));
        assert!(!maze.can_move((0, 0), Direction::Up));
        assert!(!maze.can_move((0, 0), Direction::Left));
        assert_eq!(maze.remove_wall((0, 0), Direction::Up), None);
        assert_eq!(maze.open_wall_count(), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
        assert!(matches!(
            maze.check_bounds((5, 0)),
            Err(Error::OutOfBounds { pos: (5, 0), .. })
        ));
    }

    #[test]
    fn test_set_exits_rejects_offsets_off_the_edge() {
        let mut maze = Maze::new(3, 4).unwrap();
        let bad = Exit::new(Direction::Left, 3);
        assert!(matches!(
            maze.set_exits(bad, maze.exit_2()),
            Err(Error::InvalidExit { .. })
        ));
        let top = Exit::new(Direction::Up, 3);
        let bottom = Exit::new(Direction::Down, 0);
        maze.set_exits(top, bottom).unwrap();
        assert!(maze.is_exit_edge((0, 3), Direction::Up));
        assert!(maze.is_exit_edge((2, 0), Direction::Down));
        assert!(!maze.is_exit_edge((0, 0), Direction::Left));
    }

    #[test]
    fn test_reset_and_unmark() {
        let mut maze = Maze::new(2, 3).unwrap();
        maze.remove_wall((0, 0), Direction::Right);
        maze[(0, 0)].visited = true;
        maze[(0, 0)].marker = Direction::Right;

        maze.unmark();
        assert!(!maze[(0, 0)].right_wall);
        assert_eq!(maze[(0, 0)].marker, Direction::Up);
        assert_eq!(maze.path_len(), 0);

        maze.reset();
        assert!(maze.cells().iter().all(|&cell| cell == Cell::BLOCKED));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.clear();
        assert!(maze.is_empty());
        maze.clear();
        assert_eq!(maze.rows(), 0);
        assert_eq!(maze.cols(), 0);
    }

    #[test]
    fn test_is_perfect() {
        // (0,0) - (0,1)   (0,2) is cut off
        let mut maze = Maze::new(1, 3).unwrap();
        maze.remove_wall((0, 0), Direction::Right);
        assert!(!maze.is_perfect());
        maze.remove_wall((0, 1), Direction::Right);
        assert!(maze.is_perfect());

        // Closing the 2x2 loop adds a cycle
        let mut square = Maze::new(2, 2).unwrap();
        square.remove_wall((0, 0), Direction::Right);
        square.remove_wall((0, 0), Direction::Down);
        square.remove_wall((1, 1), Direction::Up);
        assert!(square.is_perfect());
        square.remove_wall((1, 1), Direction::Left);
        assert!(!square.is_perfect());

        assert!(Maze::new(1, 1).unwrap().is_perfect());
        let mut cleared = Maze::new(1, 1).unwrap();
        cleared.clear();
        assert!(!cleared.is_perfect());
    }

    #[test]
    fn test_open_neighbors() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.remove_wall((1, 1), Direction::Up);
        maze.remove_wall((1, 1), Direction::Right);
        let neighbors = get_open_neighbors((1, 1), &maze).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (1, 2)]);
    }
}
