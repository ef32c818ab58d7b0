pub mod settings;

use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
};

use rand::Rng;
use thiserror::Error;

use crate::{
    error::Error,
    generators::generate_maze,
    maze::{Exit, Maze},
    render::{self, Format, RenderError, text},
    solvers::{find_exit_path, find_path},
    storage::{self, LoadError},
};
use settings::{Input, Settings, SettingsError, Solution};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Maze(#[from] Error),
    #[error("unable to load maze: {0}")]
    Load(#[from] LoadError),
    #[error("unable to write maze: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What a run produced, reported once the maze is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rows: usize,
    pub cols: usize,
    /// Seed the maze was generated from, `None` for a loaded maze
    pub seed: Option<u64>,
    pub entrance: Exit,
    pub exit: Exit,
    /// Cells on the marked path, if one was requested
    pub path_len: Option<usize>,
    pub format: Format,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maze parameters:")?;
        writeln!(f, "  Dimensions:  {} x {}", self.rows, self.cols)?;
        match self.seed {
            Some(seed) => writeln!(f, "  Random seed: {}", seed)?,
            None => writeln!(f, "  Random seed: (loaded)")?,
        }
        writeln!(f, "  Entrance:    {}", self.entrance)?;
        writeln!(f, "  Exit:        {}", self.exit)?;
        if let Some(len) = self.path_len {
            writeln!(f, "  Path length: {}", len)?;
        }
        write!(f, "  Format:      {}", self.format)
    }
}

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self, AppError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads or generates the maze, then marks the requested path.
    pub fn build(&self) -> Result<(Maze, Summary), AppError> {
        let (mut maze, seed) = match &self.settings.input {
            Some(input) => (self.load(input)?, None),
            None => {
                let mut maze = Maze::new(self.settings.dims.0, self.settings.dims.1)?;
                self.apply_exits(&mut maze)?;
                let seed = self.settings.seed.unwrap_or_else(|| rand::rng().random());
                generate_maze(&mut maze, Some(seed))?;
                (maze, Some(seed))
            }
        };

        let path_len = match self.settings.solution {
            Solution::None => None,
            Solution::Exits => Some(find_exit_path(&mut maze)?),
            Solution::Between(endpoints) => {
                Some(find_path(&mut maze, endpoints.start, endpoints.goal)?)
            }
        };

        let summary = Summary {
            rows: maze.rows(),
            cols: maze.cols(),
            seed,
            entrance: maze.exit_1(),
            exit: maze.exit_2(),
            path_len,
            format: self.settings.format,
        };
        Ok((maze, summary))
    }

    fn load(&self, input: &Input) -> Result<Maze, AppError> {
        let mut maze = match input {
            Input::Stdin => storage::load(&mut io::stdin().lock())?,
            Input::File(path) => storage::load(&mut BufReader::new(File::open(path)?))?,
        };
        tracing::debug!(
            "[app] loaded {}x{} maze from {:?}",
            maze.rows(),
            maze.cols(),
            input
        );
        // The solver only terminates on a spanning tree
        if !maze.is_perfect() {
            return Err(LoadError::NotPerfect {
                rows: maze.rows(),
                cols: maze.cols(),
            }
            .into());
        }
        self.apply_exits(&mut maze)?;
        Ok(maze)
    }

    /// Overrides whichever exits were given on the command line.
    fn apply_exits(&self, maze: &mut Maze) -> Result<(), AppError> {
        let entrance = self.settings.entrance.unwrap_or(maze.exit_1());
        let exit = self.settings.exit.unwrap_or(maze.exit_2());
        maze.set_exits(entrance, exit)?;
        Ok(())
    }

    /// Writes the maze in the configured format.
    pub fn write<W: Write>(&self, maze: &Maze, writer: &mut W) -> Result<(), AppError> {
        if self.settings.color && self.settings.format == Format::Text {
            text::write_styled(maze, writer)?;
        } else {
            render::render(maze, self.settings.format, self.settings.area, writer)?;
        }
        Ok(())
    }

    /// Builds the maze and writes it to the output file or standard output.
    pub fn run(&self) -> Result<Summary, AppError> {
        let (maze, summary) = self.build()?;
        match &self.settings.output {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                self.write(&maze, &mut writer)?;
                writer.flush()?;
            }
            None => {
                let mut writer = io::stdout().lock();
                self.write(&maze, &mut writer)?;
                writer.flush()?;
            }
        }
        tracing::info!("[app] {}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use settings::{Dims, Endpoints};

    fn app(settings: Settings) -> App {
        App::new(settings).unwrap()
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = Settings {
            dims: Dims(0, 3),
            ..Settings::default()
        };
        assert!(matches!(
            App::new(settings),
            Err(AppError::Settings(SettingsError::EmptyMaze))
        ));
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let settings = Settings {
            dims: Dims(6, 9),
            seed: Some(42),
            ..Settings::default()
        };
        let (first, summary) = app(settings.clone()).build().unwrap();
        let (second, _) = app(settings).build().unwrap();
        assert_eq!(first.cells(), second.cells());
        assert_eq!(summary.seed, Some(42));
        assert_eq!((summary.rows, summary.cols), (6, 9));
        assert_eq!(summary.path_len, None);
    }

    #[test]
    fn test_unseeded_build_reports_its_seed() {
        let (maze, summary) = app(Settings::default()).build().unwrap();
        let seed = summary.seed.unwrap();
        let mut again = Maze::new(10, 10).unwrap();
        generate_maze(&mut again, Some(seed)).unwrap();
        assert_eq!(maze.cells(), again.cells());
    }

    #[test]
    fn test_exit_path_between_custom_exits() {
        let settings = Settings {
            dims: Dims(5, 5),
            seed: Some(3),
            entrance: Some(Exit::new(Direction::Up, 2)),
            exit: Some(Exit::new(Direction::Down, 4)),
            solution: Solution::Exits,
            ..Settings::default()
        };
        let (maze, summary) = app(settings).build().unwrap();
        assert_eq!(summary.entrance, Exit::new(Direction::Up, 2));
        assert_eq!(summary.exit, Exit::new(Direction::Down, 4));
        assert!(maze[(0, 2)].visited);
        assert!(maze[(4, 4)].visited);
        assert_eq!(summary.path_len, Some(maze.path_len()));
    }

    #[test]
    fn test_exit_outside_maze() {
        let settings = Settings {
            dims: Dims(3, 3),
            entrance: Some(Exit::new(Direction::Left, 3)),
            ..Settings::default()
        };
        assert!(matches!(
            app(settings).build(),
            Err(AppError::Maze(Error::InvalidExit { .. }))
        ));
    }

    #[test]
    fn test_endpoints_outside_maze() {
        let settings = Settings {
            dims: Dims(3, 3),
            seed: Some(1),
            solution: Solution::Between(Endpoints {
                start: (0, 0),
                goal: (3, 0),
            }),
            ..Settings::default()
        };
        assert!(matches!(
            app(settings).build(),
            Err(AppError::Maze(Error::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let settings = Settings {
            input: Some(Input::File("/nonexistent/maze.txt".into())),
            ..Settings::default()
        };
        assert!(matches!(app(settings).build(), Err(AppError::Io(_))));
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("mazegen-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_disconnected_maze_is_not_loaded() {
        let path = write_temp("disconnected.txt", "1 3 3 1\ncdd\n");
        let settings = Settings {
            input: Some(Input::File(path.clone())),
            solution: Solution::Exits,
            ..Settings::default()
        };
        let result = app(settings).build();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(AppError::Load(LoadError::NotPerfect { rows: 1, cols: 3 }))
        ));
    }

    #[test]
    fn test_connected_maze_is_loaded_and_solved() {
        let path = write_temp("corridor.txt", "1 3 3 1\nccd\n");
        let settings = Settings {
            input: Some(Input::File(path.clone())),
            solution: Solution::Exits,
            ..Settings::default()
        };
        let result = app(settings).build();
        std::fs::remove_file(&path).unwrap();
        let (maze, summary) = result.unwrap();
        assert_eq!(summary.path_len, Some(3));
        assert_eq!(maze.path_len(), 3);
    }

    #[test]
    fn test_write_compact_then_load() {
        let settings = Settings {
            dims: Dims(4, 7),
            seed: Some(11),
            format: Format::Compact,
            solution: Solution::Exits,
            ..Settings::default()
        };
        let app = app(settings);
        let (maze, _) = app.build().unwrap();
        let mut out = Vec::new();
        app.write(&maze, &mut out).unwrap();
        let loaded = storage::load(&mut out.as_slice()).unwrap();
        assert_eq!(loaded.cells(), maze.cells());
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            rows: 2,
            cols: 3,
            seed: Some(7),
            entrance: Exit::new(Direction::Left, 0),
            exit: Exit::new(Direction::Right, 1),
            path_len: Some(4),
            format: Format::Eps,
        };
        let text = summary.to_string();
        assert!(text.starts_with("Maze parameters:\n"));
        assert!(text.contains("Dimensions:  2 x 3"));
        assert!(text.contains("Random seed: 7"));
        assert!(text.contains("Entrance:    left 1"));
        assert!(text.contains("Path length: 4"));
        assert!(text.ends_with("Format:      PostScript"));
    }
}
