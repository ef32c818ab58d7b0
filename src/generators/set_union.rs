use super::{UniformSource, disjoint_set::DisjointSets, pick_index};
use crate::{
    error::{Error, Result},
    maze::{Direction, Maze},
};

/// Directions out of `pos` that lead to a cell in a different set, one bit per
/// direction (bit `d` for `Direction as u8 == d`).
fn adjacency(maze: &Maze, sets: &mut DisjointSets, pos: (usize, usize)) -> u8 {
    let set = sets.find(maze.index_of(pos));
    Direction::ALL
        .into_iter()
        .filter_map(|dir| maze.neighbor(pos, dir).map(|next| (dir, next)))
        .filter(|&(_, next)| sets.find(maze.index_of(next)) != set)
        .fold(0, |mask, (dir, _)| mask | 1 << dir as u8)
}

/// Picks one of the directions set in `mask`. A single candidate is taken without
/// consuming a random value.
fn choose_direction<S: UniformSource + ?Sized>(mask: u8, random: &mut S) -> Direction {
    let count = mask.count_ones() as usize;
    let skip = if count > 1 {
        pick_index(random, count)
    } else {
        0
    };
    Direction::ALL
        .into_iter()
        .filter(|&dir| mask >> dir as u8 & 1 == 1)
        .nth(skip)
        .unwrap_or(Direction::Up)
}

/// Fisher-Yates pass driven by `random`: element `i` is swapped with element
/// `floor(random() * (i + 1))` for `i` from the last index down to 1.
fn shuffle<S: UniformSource + ?Sized>(queue: &mut [usize], random: &mut S) {
    for i in (1..queue.len()).rev() {
        let j = pick_index(random, i + 1);
        queue.swap(i, j);
    }
}

/// Randomized incremental union.
///
/// Each cell starts in its own set. In every round the queue of unsettled cells is
/// shuffled and scanned once: a cell with a neighbor in another set knocks down the
/// wall toward a random such neighbor and merges the two sets, and a cell whose
/// neighbors all share its set is settled and leaves the queue for good. Sets only
/// ever merge, so a settled cell stays settled, and the maze is a spanning tree
/// once every cell has settled.
pub fn randomized_set_union<S: UniformSource + ?Sized>(
    maze: &mut Maze,
    random: &mut S,
) -> Result<()> {
    let (rows, cols) = (maze.rows(), maze.cols());
    maze.raise_walls();

    let total_cells = maze.len();
    let mut sets =
        DisjointSets::try_new(total_cells).map_err(|_| Error::OutOfMemory { rows, cols })?;
    let mut queue: Vec<usize> = Vec::new();
    queue
        .try_reserve_exact(total_cells)
        .map_err(|_| Error::OutOfMemory { rows, cols })?;
    queue.extend(0..total_cells);

    let mut settled = 0;
    let mut round = 0;
    while settled < total_cells {
        shuffle(&mut queue, random);

        let mut merges = 0;
        let mut kept = 0;
        for i in 0..queue.len() {
            let cur = queue[i];
            let pos = maze.position_of(cur);
            let mask = adjacency(maze, &mut sets, pos);
            if mask == 0 {
                settled += 1;
                continue;
            }
            queue[kept] = cur;
            kept += 1;

            let dir = choose_direction(mask, random);
            if let Some(next) = maze.remove_wall(pos, dir) {
                sets.union(maze.index_of(next), cur);
                merges += 1;
            }
        }
        queue.truncate(kept);

        round += 1;
        tracing::debug!(
            "[generate] round {} merged {} sets, {}/{} cells settled",
            round,
            merges,
            settled,
            total_cells
        );
    }

    tracing::info!(
        "[generate] {}x{} maze carved in {} rounds",
        rows,
        cols,
        round
    );
    Ok(())
}
