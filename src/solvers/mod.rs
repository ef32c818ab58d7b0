mod wall_follower;

pub use wall_follower::follow_wall;

use crate::error::Result;
use crate::maze::Maze;

/// Finds the route from `start` to `goal` and flags every cell on it as visited.
///
/// Markers and visit flags from an earlier solve are cleared first; walls are never
/// touched. Returns the number of cells on the route, both ends included.
///
/// The maze must be connected, as every generated maze is. Otherwise the search may
/// never terminate.
pub fn find_path(maze: &mut Maze, start: (usize, usize), goal: (usize, usize)) -> Result<usize> {
    let path_len = follow_wall(maze, start, goal)?;
    tracing::info!(
        "[solve] marked {} cells from {:?} to {:?}",
        path_len,
        start,
        goal
    );
    Ok(path_len)
}

/// Solves from the cell behind the first exit to the cell behind the second.
pub fn find_exit_path(maze: &mut Maze) -> Result<usize> {
    let start = maze.exit_cell(maze.exit_1());
    let goal = maze.exit_cell(maze.exit_2());
    find_path(maze, start, goal)
}
