use rand::{Rng, SeedableRng, rngs::StdRng};

pub mod disjoint_set;
mod set_union;

pub use set_union::randomized_set_union;

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A source of uniformly distributed values in the half-open interval `[0, 1)`.
///
/// Any `FnMut() -> f64` closure is a source, which makes it easy to replay a fixed
/// sequence in tests. Wrap a [`rand::Rng`] in [`RngSource`] to draw from it.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<F: FnMut() -> f64> UniformSource for F {
    fn next_uniform(&mut self) -> f64 {
        self()
    }
}

/// Adapts a [`rand::Rng`] to [`UniformSource`].
pub struct RngSource<R>(pub R);

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Draws an index in `0..len` as `floor(value * len)`.
/// Values outside `[0, 1)` are clamped so the index never leaves the range.
pub(crate) fn pick_index<S: UniformSource + ?Sized>(random: &mut S, len: usize) -> usize {
    debug_assert!(len > 0);
    let value = random.next_uniform();
    let scaled = (value * len as f64).floor();
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(len - 1)
    }
}

/// Carves a perfect maze into `maze`, replacing whatever walls it had.
///
/// Every wall is raised first, so on failure the maze is left fully walled.
pub fn generate<S: UniformSource + ?Sized>(maze: &mut Maze, random: &mut S) -> Result<()> {
    randomized_set_union(maze, random)
}

/// Carves a perfect maze using a seeded (or OS-seeded) [`StdRng`].
pub fn generate_maze(maze: &mut Maze, seed: Option<u64>) -> Result<()> {
    let mut source = RngSource(get_rng(seed));
    generate(maze, &mut source)
}
