use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use mazegen::{
    app::{
        App, AppError,
        settings::{Dims, Endpoints, ExitSpec, Input, Settings, Solution},
    },
    render::{Area, Format},
};

/// Generate random perfect mazes and mark paths through them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze size as rows x columns
    #[arg(short, long, value_name = "RxC", default_value = "10x10")]
    dims: Dims,

    /// Output area for PNG (pixels) and PostScript (points), horizontal x vertical
    #[arg(short = 'z', long, value_name = "HxV", default_value = "612x612")]
    area: Dims,

    /// Random seed; drawn from the OS when omitted
    #[arg(short = 'r', long)]
    seed: Option<u64>,

    /// Mark the path between two cells, counted from 1
    #[arg(short = 'm', long, value_name = "RxC-RxC", conflicts_with = "solve")]
    mark: Option<Endpoints>,

    /// Mark the path from the entrance to the exit
    #[arg(short, long, default_value_t = false)]
    solve: bool,

    /// Entrance as an edge letter (t, b, l, r) and a position counted from 1
    #[arg(short, long, value_name = "dPOS")]
    entrance: Option<ExitSpec>,

    /// Exit as an edge letter (t, b, l, r) and a position counted from 1
    #[arg(short = 'x', long, value_name = "dPOS")]
    exit: Option<ExitSpec>,

    /// Load a stored maze instead of generating one, `-` for standard input
    #[arg(short = 'L', long, value_name = "FILE")]
    load: Option<Input>,

    /// Write the compact storage format
    #[arg(short, long, group = "format")]
    compact: bool,

    /// Write a PNG image
    #[arg(short = 'g', long, group = "format")]
    png: bool,

    /// Write Encapsulated PostScript
    #[arg(short = 'p', long, group = "format")]
    eps: bool,

    /// Write an ASCII drawing (the default)
    #[arg(short, long, group = "format")]
    text: bool,

    /// Highlight the path with terminal colors in text output
    #[arg(long, default_value_t = false)]
    color: bool,

    /// More log output; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log to daily rolling files in this directory instead of standard error
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Output file; standard output when omitted
    output: Option<PathBuf>,
}

impl Args {
    fn format(&self) -> Format {
        if self.compact {
            Format::Compact
        } else if self.png {
            Format::Png
        } else if self.eps {
            Format::Eps
        } else {
            Format::Text
        }
    }

    fn level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    fn into_settings(self) -> Result<Settings, AppError> {
        let solution = match (self.mark, self.solve) {
            (Some(endpoints), _) => Solution::Between(endpoints),
            (None, true) => Solution::Exits,
            (None, false) => Solution::None,
        };
        Ok(Settings {
            dims: self.dims,
            area: Area::try_from(self.area)?,
            format: self.format(),
            seed: self.seed,
            solution,
            entrance: self.entrance.map(|ExitSpec(exit)| exit),
            exit: self.exit.map(|ExitSpec(exit)| exit),
            input: self.load,
            output: self.output,
            color: self.color,
        })
    }
}

/// Sets up the global subscriber. The returned guard flushes file logs on drop.
fn init_logging(level: Level, log_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "mazegen.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let app = App::new(args.into_settings()?)?;
    tracing::debug!("[main] {:?}", app.settings());
    app.run()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = init_logging(args.level(), args.log_dir.as_ref());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mazegen: {}", e);
            ExitCode::FAILURE
        }
    }
}
