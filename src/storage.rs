//! Compact text pickle of a maze.
//!
//! The first line holds `rows cols exit_1 exit_2`, exits packed as by [`Exit::encode`].
//! Then comes one letter per cell in row-major order, `LINE_WIDTH` letters per line.
//! A cell's letter is `'a' + v`, or `'A' + v` when the cell is visited, where
//! `v = marker << 2 | bottom_wall << 1 | right_wall`.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::{
    error::Error,
    maze::{Cell, Direction, Exit, Maze},
};

/// Letters per line in the stored form.
pub const LINE_WIDTH: usize = 80;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing dimension line")]
    MissingHeader,
    #[error("premature end of input at {row} x {col}")]
    PrematureEnd { row: usize, col: usize },
    #[error("invalid cell {ch:?} at {row} x {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
    #[error("{rows} x {cols} maze is not a spanning tree (disconnected cells or a cycle)")]
    NotPerfect { rows: usize, cols: usize },
    #[error(transparent)]
    Maze(#[from] Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn encode_cell(cell: &Cell) -> char {
    let v = (cell.marker as u8) << 2 | (cell.bottom_wall as u8) << 1 | cell.right_wall as u8;
    let base = if cell.visited { b'A' } else { b'a' };
    char::from(base + v)
}

fn decode_cell(ch: char) -> Option<Cell> {
    let (visited, v) = match ch {
        'a'..='p' => (false, ch as u8 - b'a'),
        'A'..='P' => (true, ch as u8 - b'A'),
        _ => return None,
    };
    Some(Cell {
        right_wall: v & 1 == 1,
        bottom_wall: v >> 1 & 1 == 1,
        marker: Direction::from_index(v >> 2),
        visited,
    })
}

/// Writes the compact form of `maze`.
pub fn store<W: Write>(maze: &Maze, writer: &mut W) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} {} {}",
        maze.rows(),
        maze.cols(),
        maze.exit_1().encode(),
        maze.exit_2().encode()
    )?;

    let mut line = String::with_capacity(LINE_WIDTH + 1);
    for cell in maze.cells() {
        line.push(encode_cell(cell));
        if line.len() == LINE_WIDTH {
            line.push('\n');
            writer.write_all(line.as_bytes())?;
            line.clear();
        }
    }
    if !line.is_empty() {
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

fn parse_header(line: &str) -> Option<[usize; 4]> {
    let mut fields = line.split_whitespace().map(|s| s.parse::<usize>().ok());
    let header = [fields.next()??, fields.next()??, fields.next()??, fields.next()??];
    Some(header)
}

/// Reads a maze written by [`store`].
///
/// Whitespace between cell letters is ignored, so line wrapping does not matter.
pub fn load<R: BufRead>(reader: &mut R) -> Result<Maze, LoadError> {
    let mut header = String::new();
    reader.read_line(&mut header)?;
    let [rows, cols, exit_1, exit_2] = parse_header(&header).ok_or(LoadError::MissingHeader)?;

    let mut maze = Maze::new(rows, cols)?;
    maze.set_exits(Exit::decode(exit_1), Exit::decode(exit_2))?;

    let mut body = String::new();
    reader.read_to_string(&mut body)?;
    let mut letters = body.chars().filter(|c| !c.is_whitespace());

    for row in 0..rows {
        for col in 0..cols {
            let ch = letters
                .next()
                .ok_or(LoadError::PrematureEnd { row, col })?;
            maze[(row, col)] = decode_cell(ch).ok_or(LoadError::InvalidCell { row, col, ch })?;
        }
    }
    tracing::debug!("[load] read {}x{} maze", rows, cols);
    Ok(maze)
}
