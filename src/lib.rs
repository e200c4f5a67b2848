//! Admissible scoring for N×N sliding puzzles: Manhattan distance, updated
//! incrementally from the parent state, plus a linear-conflict penalty.

pub mod board;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod report;
pub mod score;
pub mod solver;
pub mod state;
pub mod tile;
pub mod traits;
pub mod util;


pub use board::{Board, Direction};
pub use error::PuzzleError;
pub use heuristic::{Heuristic, ManhattanLinearConflict};
pub use score::Score;
pub use state::{PuzzleState, StateArena, StateId, StateView};
