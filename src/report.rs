use std::fs;
use std::path::Path;
use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::board::{moves_str, Board};
use crate::error::PuzzleError;
use crate::score::Score;
use crate::solver::Solution;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PuzzleReport {
    pub index: usize,
    pub puzzle: String,
    pub moves: Option<String>,
    pub move_count: Option<usize>,
    pub initial_score: Option<Score>,
    pub expanded: usize,
    pub elapsed_ms: u64,
    pub error: Option<String>,
}

impl PuzzleReport {
    pub fn new(index: usize, board: &Board, result: &Result<Solution, PuzzleError>, elapsed: Duration) -> Self {
        let elapsed_ms = elapsed.as_millis() as u64;

        match result {
            Ok(solution) => Self {
                index,
                puzzle: board.serialized(),
                moves: Some(moves_str(&solution.moves)),
                move_count: Some(solution.moves.len()),
                initial_score: Some(solution.initial_score),
                expanded: solution.expanded,
                elapsed_ms,
                error: None,
            },
            Err(e) => Self {
                index,
                puzzle: board.serialized(),
                moves: None,
                move_count: None,
                initial_score: None,
                expanded: 0,
                elapsed_ms,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_solved(&self) -> bool {
        self.moves.is_some()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RunReport {
    pub heuristic: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub solved: usize,
    pub failed: usize,
    pub total_moves: usize,
    pub puzzles: Vec<PuzzleReport>,
}

impl RunReport {
    pub fn new(heuristic: &str, started_at: DateTime<Utc>, puzzles: Vec<PuzzleReport>) -> Self {
        let solved = puzzles.iter().filter(|p| p.is_solved()).count();
        let total_moves = puzzles.iter().filter_map(|p| p.move_count).sum();

        Self {
            heuristic: heuristic.to_string(),
            started_at,
            finished_at: Utc::now(),
            solved,
            failed: puzzles.len() - solved,
            total_moves,
            puzzles,
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PuzzleError> {
        let body = serde_json::to_string_pretty(self)?;
        fs::write(path, body)?;
        Ok(())
    }
}
