use std::env;
use std::time::Instant;
use chrono::Utc;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use slide_puzzle_heuristic::config::SolverConfig;
use slide_puzzle_heuristic::report::{PuzzleReport, RunReport};
use slide_puzzle_heuristic::util::{read_puzzles, write_answers};
use slide_puzzle_heuristic::{solver, Heuristic, ManhattanLinearConflict, PuzzleError};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("slide_puzzle_heuristic=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), PuzzleError> {
    init_tracing();

    let config = match env::args().nth(1) {
        Some(path) => SolverConfig::load(&path)?,
        None => SolverConfig::default(),
    };

    if let Some(threads) = config.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("could not size the thread pool: {}", e);
        }
    }

    let puzzles = read_puzzles(&config.puzzle_file)?;
    info!(count = puzzles.len(), file = %config.puzzle_file.display(), "loaded puzzles");

    let heuristic = ManhattanLinearConflict;
    let started_at = Utc::now();

    let bar = ProgressBar::new(puzzles.len() as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}] eta {eta}") {
        bar.set_style(style);
    }

    let reports: Vec<PuzzleReport> = puzzles
        .par_iter()
        .enumerate()
        .progress_with(bar)
        .map(|(idx, puzzle)| {
            let start = Instant::now();
            let result = solver::solve(puzzle, &heuristic, &config);
            if let Err(e) = &result {
                warn!(puzzle = idx, "{}", e);
            }
            PuzzleReport::new(idx, puzzle, &result, start.elapsed())
        })
        .collect();

    write_answers(&config.answers_file, &reports)?;

    let report = RunReport::new(heuristic.name(), started_at, reports);
    report.save(&config.report_file)?;

    info!(
        solved = report.solved,
        failed = report.failed,
        total_moves = report.total_moves,
        "saved answers to {}",
        config.answers_file.display()
    );

    Ok(())
}
