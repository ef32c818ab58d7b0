use std::time::{Duration, Instant};

use mazegen::{Result, generators::generate_maze, maze::Maze, solvers::find_exit_path};

const ROWS: usize = 1000;
const COLS: usize = 1000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let mut maze = Maze::new(ROWS, COLS)?;
    let (mut generate_total, mut solve_total) = (Duration::ZERO, Duration::ZERO);
    for seed in 0..num_iters as u64 {
        let start = Instant::now();
        generate_maze(&mut maze, Some(seed))?;
        let generated = Instant::now();
        let path_len = find_exit_path(&mut maze)?;
        let solved = Instant::now();

        generate_total += generated - start;
        solve_total += solved - generated;
        println!(
            "seed {}: generate {:?}, solve {:?}, path {} cells",
            seed,
            generated - start,
            solved - generated,
            path_len
        );
    }
    if num_iters > 0 {
        println!(
            "{}x{} over {} runs: generate {:?}/run, solve {:?}/run",
            ROWS,
            COLS,
            num_iters,
            generate_total / num_iters as u32,
            solve_total / num_iters as u32
        );
    }
    Ok(())
}
