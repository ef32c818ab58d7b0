use std::{fmt, path::PathBuf, str::FromStr};

use thiserror::Error;

use crate::{
    maze::{Direction, Exit},
    render::{Area, Format},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("incorrect format for dimensions {0:?}, use AxB")]
    Dims(String),
    #[error("incorrect format for path endpoints {0:?}, use RRxCC-RRxCC")]
    Endpoints(String),
    #[error("incorrect format for exit position {0:?}, use an edge letter and a position such as l1")]
    Exit(String),
    #[error("output area requires nonzero dimensions")]
    EmptyArea,
    #[error("a maze must have at least one row and one column")]
    EmptyMaze,
}

/// Two numbers written `AxB`, whitespace allowed around either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims(pub usize, pub usize);

impl FromStr for Dims {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SettingsError::Dims(s.to_string());
        let (a, b) = s.split_once(['x', 'X']).ok_or_else(err)?;
        let a = a.trim().parse().map_err(|_| err())?;
        let b = b.trim().parse().map_err(|_| err())?;
        Ok(Dims(a, b))
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.1)
    }
}

impl TryFrom<Dims> for Area {
    type Error = SettingsError;

    fn try_from(dims: Dims) -> Result<Self, Self::Error> {
        let err = |_| SettingsError::Dims(dims.to_string());
        Ok(Area {
            horizontal: u32::try_from(dims.0).map_err(err)?,
            vertical: u32::try_from(dims.1).map_err(err)?,
        })
    }
}

/// Start and goal cells written `RxC-RxC`, counted from one. Stored zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub start: (usize, usize),
    pub goal: (usize, usize),
}

impl FromStr for Endpoints {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SettingsError::Endpoints(s.to_string());
        let (start, goal) = s.split_once('-').ok_or_else(err)?;
        let to_cell = |text: &str| -> Option<(usize, usize)> {
            let Dims(row, col) = text.parse().ok()?;
            Some((row.checked_sub(1)?, col.checked_sub(1)?))
        };
        Ok(Endpoints {
            start: to_cell(start).ok_or_else(err)?,
            goal: to_cell(goal).ok_or_else(err)?,
        })
    }
}

/// Exit position: an edge and a one-based position along it.
///
/// Edges are `t`, `u` or `^` for the top, `b`, `d` or `v` for the bottom, `l` or `<`
/// for the left and `r` or `>` for the right, in either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitSpec(pub Exit);

impl FromStr for ExitSpec {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SettingsError::Exit(s.to_string());
        let mut chars = s.trim().chars();
        let side = match chars.next().ok_or_else(err)? {
            't' | 'T' | 'u' | 'U' | '^' => Direction::Up,
            'l' | 'L' | '<' => Direction::Left,
            'r' | 'R' | '>' => Direction::Right,
            'b' | 'B' | 'd' | 'D' | 'v' => Direction::Down,
            _ => return Err(err()),
        };
        let position: usize = chars.as_str().trim().parse().map_err(|_| err())?;
        let offset = position.checked_sub(1).ok_or_else(err)?;
        Ok(ExitSpec(Exit::new(side, offset)))
    }
}

/// Where a stored maze is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Input::Stdin,
            path => Input::File(PathBuf::from(path)),
        })
    }
}

/// Which route, if any, gets marked before output.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solution {
    #[default]
    None,
    /// From the entrance to the exit.
    Exits,
    Between(Endpoints),
}

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maze size as rows x columns
    pub dims: Dims,
    /// Output area; pixels for PNG, points for EPS, ignored for text
    pub area: Area,
    pub format: Format,
    /// Random seed, drawn from the OS when not given
    pub seed: Option<u64>,
    pub solution: Solution,
    pub entrance: Option<Exit>,
    pub exit: Option<Exit>,
    /// Load a stored maze instead of generating one
    pub input: Option<Input>,
    /// Output file, standard output when not given
    pub output: Option<PathBuf>,
    /// Highlight the path with terminal colors (text format only)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dims: Dims(10, 10),
            area: Area::default(),
            format: Format::Text,
            seed: None,
            solution: Solution::None,
            entrance: None,
            exit: None,
            input: None,
            output: None,
            color: false,
        }
    }
}

impl Settings {
    /// Checks the options that do not depend on the maze itself.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.input.is_none() && (self.dims.0 == 0 || self.dims.1 == 0) {
            return Err(SettingsError::EmptyMaze);
        }
        if self.format.uses_area() && self.area.is_empty() {
            return Err(SettingsError::EmptyArea);
        }
        Ok(())
    }
}
