use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};
use crate::board::{Board, Direction};
use crate::config::SolverConfig;
use crate::error::PuzzleError;
use crate::heuristic::Heuristic;
use crate::score::Score;
use crate::state::{StateArena, StateId};
use crate::traits::board::DebugPrintable;

#[derive(Debug, Clone)]
pub struct Solution {
    pub moves: Vec<Direction>,
    pub initial_score: Score,
    pub expanded: usize,
    pub generated: usize,
}

/// A* from `board` to the goal, prioritized on moves so far plus the
/// heuristic total. Ties prefer the smaller heuristic.
pub fn solve<H: Heuristic + ?Sized>(board: &Board, heuristic: &H, config: &SolverConfig) -> Result<Solution, PuzzleError> {
    let mut arena = StateArena::with_capacity(1024);
    let root = arena.new_root(board.clone());
    search(&mut arena, root, heuristic, config)
}

/// Runs the search from `root`. Only states that were queued and scored are
/// added to the arena.
pub(crate) fn search<H: Heuristic + ?Sized>(arena: &mut StateArena, root: StateId, heuristic: &H, config: &SolverConfig) -> Result<Solution, PuzzleError> {
    let board = arena.get(root)?.board().clone();
    if !board.is_solvable() {
        return Err(PuzzleError::UnsolvableBoard(board.serialized()));
    }

    const STEP: u32 = 1;

    let initial_score = arena.score(root, heuristic)?;

    let mut open_list = BinaryHeap::<(Reverse<u32>, Reverse<u32>, StateId)>::new();
    let mut best_cost = FxHashMap::<Board, u32>::default();

    open_list.push((Reverse(initial_score.total()), Reverse(initial_score.total()), root));
    best_cost.insert(board.clone(), 0);

    let mut expanded = 0;

    while let Some((Reverse(_f), Reverse(_h), id)) = open_list.pop() {
        let (g, last_move, legal_moves) = {
            let state = arena.get(id)?;

            // a cheaper route to this board was queued after this entry
            if best_cost.get(state.board()).is_some_and(|&cost| cost < state.depth()) {
                continue;
            }

            if state.board().is_goal() {
                let moves = arena.path(id)?;
                info!(moves = moves.len(), expanded, generated = arena.len(), "solved {}", board.serialized());
                return Ok(Solution {
                    moves,
                    initial_score,
                    expanded,
                    generated: arena.len(),
                });
            }

            if config.debug {
                state.board().debug_print(false);
                debug!(depth = state.depth(), expanded, "expanding");
            }

            (state.depth(), state.last_move(), state.board().legal_moves())
        };

        expanded += 1;
        if expanded > config.max_expanded {
            return Err(PuzzleError::SearchLimit(config.max_expanded));
        }

        for dir in legal_moves {
            // undoing the previous slide can never be on a shortest path
            if last_move == Some(dir.opposite()) {
                continue;
            }

            let child_board = arena.get(id)?.board().moved(dir)?;
            let new_cost = g + STEP;

            if best_cost.get(&child_board).is_some_and(|&cost| cost <= new_cost) {
                continue;
            }
            best_cost.insert(child_board.clone(), new_cost);

            let child = arena.insert_child(id, Some(dir), child_board)?;
            let score = arena.score(child, heuristic)?;
            open_list.push((Reverse(new_cost + score.total()), Reverse(score.total()), child));
        }
    }

    Err(PuzzleError::UnsolvableBoard(board.serialized()))
}

/// Exact distance to the goal by breadth-first search, `None` when it is
/// more than `limit` moves.
pub fn exact_distance(board: &Board, limit: u32) -> Option<u32> {
    let mut visited = FxHashSet::<Board>::default();
    let mut queue = VecDeque::<(Board, u32)>::new();

    visited.insert(board.clone());
    queue.push_back((board.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if current.is_goal() {
            return Some(depth);
        }
        if depth == limit {
            continue;
        }

        for dir in current.legal_moves() {
            let Ok(next) = current.moved(dir) else { continue };
            if visited.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    None
}
