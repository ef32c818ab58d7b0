use crate::{
    error::{Error, Result},
    maze::{Direction, Maze},
};

/// Right-hand-rule depth-first search that keeps all of its state in the cell markers.
///
/// Forward phase: from the current cell, the directions after its marker are tried in
/// rotation order and the first open one is taken. The marker records that choice, so
/// a later return to this cell resumes with the next direction. The cell just entered
/// gets its marker pointed back the way we came, which makes a dead end turn straight
/// around. Since a perfect maze is a tree, when the goal is reached the markers from
/// the start onward spell out the unique route to it.
///
/// Backward phase: the marker chain is followed from the start to the goal and every
/// cell on it is flagged as visited.
///
/// The maze must be connected. On a maze where the goal is unreachable from the start
/// the forward phase never ends.
pub fn follow_wall(maze: &mut Maze, start: (usize, usize), goal: (usize, usize)) -> Result<usize> {
    maze.check_bounds(start)?;
    maze.check_bounds(goal)?;
    maze.unmark();

    let mut steps = 0usize;
    let mut current = start;
    while current != goal {
        let mut dir = maze[current].marker;
        let mut open = None;
        for _ in 0..4 {
            dir = dir.rotate();
            if maze.can_move(current, dir) {
                open = Some(dir);
                break;
            }
        }
        let Some(dir) = open else {
            return Err(Error::Unsolvable { pos: current });
        };
        maze[current].marker = dir;

        let Some(next) = maze.neighbor(current, dir) else {
            return Err(Error::Unsolvable { pos: current });
        };
        maze[next].marker = dir.opposite();
        current = next;
        steps += 1;
    }
    tracing::debug!("[solve] reached {:?} after {} steps", goal, steps);

    let mut path_len = 1;
    let mut current = start;
    maze[current].visited = true;
    while current != goal {
        let dir: Direction = maze[current].marker;
        let Some(next) = maze.neighbor(current, dir) else {
            return Err(Error::Unsolvable { pos: current });
        };
        current = next;
        maze[current].visited = true;
        path_len += 1;
    }
    Ok(path_len)
}
