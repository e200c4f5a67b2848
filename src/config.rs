use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::PuzzleError;

/// Settings for a batch run. Every field has a default, so a config file
/// only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub puzzle_file: PathBuf,
    pub answers_file: PathBuf,
    pub report_file: PathBuf,
    /// States the A* search may expand for a single puzzle before giving up.
    pub max_expanded: usize,
    /// Worker threads for solving puzzles in parallel, rayon's default when unset.
    pub threads: Option<usize>,
    /// Print every expanded board.
    pub debug: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            puzzle_file: PathBuf::from("slidepuzzle.txt"),
            answers_file: PathBuf::from("slidepuzzle_answers.txt"),
            report_file: PathBuf::from("slidepuzzle_report.json"),
            max_expanded: 2_000_000,
            threads: None,
            debug: false,
        }
    }
}

impl SolverConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(raw)?)
    }
}
