use thiserror::Error;

/// Errors raised while building, generating or solving a maze.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("a maze must have at least one row and one column")]
    EmptyDimensions,
    #[error("a {rows} x {cols} maze has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },
    #[error("insufficient memory for a {rows} x {cols} maze")]
    OutOfMemory { rows: usize, cols: usize },
    #[error("position {}x{} is out of range for a {rows} x {cols} maze", .pos.0, .pos.1)]
    OutOfBounds {
        pos: (usize, usize),
        rows: usize,
        cols: usize,
    },
    #[error("exit on the {side} side at offset {offset} is outside a {rows} x {cols} maze")]
    InvalidExit {
        side: crate::maze::Direction,
        offset: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cell {}x{} is walled in on every side", .pos.0, .pos.1)]
    Unsolvable { pos: (usize, usize) },
}

pub type Result<T> = std::result::Result<T, Error>;
