mod eps;
mod png;
pub mod text;

use std::{fmt, io::Write};

use thiserror::Error;

use crate::{
    maze::{Direction, Maze},
    storage,
};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("output area requires nonzero dimensions")]
    EmptyArea,
    #[error("output area {horizontal} x {vertical} is too large for an image")]
    AreaTooLarge { horizontal: u32, vertical: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Output formats a maze can be written in.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// ASCII drawing; the output area is ignored.
    #[default]
    Text,
    /// PNG image, the output area in pixels.
    Png,
    /// Encapsulated PostScript, the output area in points.
    Eps,
    /// The compact pickle read back by [`storage::load`].
    Compact,
}

impl Format {
    /// Whether the format draws into the output area.
    pub fn uses_area(self) -> bool {
        matches!(self, Format::Png | Format::Eps)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Text => write!(f, "Text"),
            Format::Png => write!(f, "PNG"),
            Format::Eps => write!(f, "PostScript"),
            Format::Compact => write!(f, "Compact"),
        }
    }
}

/// Horizontal and vertical extent of a graphic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub horizontal: u32,
    pub vertical: u32,
}

impl Default for Area {
    fn default() -> Self {
        Area {
            horizontal: 612,
            vertical: 612,
        }
    }
}

impl Area {
    pub fn is_empty(&self) -> bool {
        self.horizontal == 0 || self.vertical == 0
    }
}

/// Right and bottom walls of `pos` as they should be drawn: walls at a right or
/// bottom exit are left open.
pub(crate) fn drawn_walls(maze: &Maze, pos: (usize, usize)) -> (bool, bool) {
    let cell = &maze[pos];
    (
        cell.right_wall && !maze.is_exit_edge(pos, Direction::Right),
        cell.bottom_wall && !maze.is_exit_edge(pos, Direction::Down),
    )
}

/// Writes `maze` in the given format. The maze itself is never modified.
pub fn render<W: Write>(
    maze: &Maze,
    format: Format,
    area: Area,
    writer: &mut W,
) -> Result<(), RenderError> {
    if format.uses_area() && area.is_empty() {
        return Err(RenderError::EmptyArea);
    }
    if format == Format::Png {
        png::image_size(area)?;
    }
    match format {
        Format::Text => text::write_text(maze, writer)?,
        Format::Png => png::write_png(maze, area, writer)?,
        Format::Eps => eps::write_eps(maze, area, writer)?,
        Format::Compact => storage::store(maze, writer)?,
    }
    tracing::debug!("[render] wrote {}x{} maze as {}", maze.rows(), maze.cols(), format);
    Ok(())
}
