//! Perfect maze generation by randomized set union, solved by following the right-hand wall.

pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;
pub mod storage;

pub use error::{Error, Result};
