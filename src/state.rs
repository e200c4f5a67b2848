//! Search states kept in an arena and addressed by [`StateId`].
//!
//! Each state records the board, the state it was produced from, and the
//! base heuristic values computed for it. Children look up their parent's
//! value by id, so the parent chain never forms reference cycles.

use rustc_hash::FxHashMap;
use crate::board::{Board, Direction};
use crate::error::PuzzleError;
use crate::heuristic::Heuristic;
use crate::score::Score;
use crate::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

#[derive(Debug, Clone)]
pub struct PuzzleState {
    board: Board,
    parent: Option<StateId>,
    last_move: Option<Direction>,
    depth: u32,
    base_values: FxHashMap<&'static str, u32>,
}

impl PuzzleState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    pub fn last_move(&self) -> Option<Direction> {
        self.last_move
    }

    /// Moves taken from the root to reach this state.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn cached_base_value(&self, heuristic: &str) -> Option<u32> {
        self.base_values.get(heuristic).copied()
    }
}

#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<PuzzleState>,
}

impl StateArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub fn new_root(&mut self, board: Board) -> StateId {
        self.push(PuzzleState {
            board,
            parent: None,
            last_move: None,
            depth: 0,
            base_values: FxHashMap::default(),
        })
    }

    /// Adds the state reached from `parent` by sliding the empty cell `dir`.
    pub fn spawn(&mut self, parent: StateId, dir: Direction) -> Result<StateId, PuzzleError> {
        let board = self.get(parent)?.board.moved(dir)?;
        self.insert_child(parent, Some(dir), board)
    }

    /// Adds an arbitrary board as a child of `parent`, without checking that
    /// it is one slide away.
    pub fn attach(&mut self, parent: StateId, board: Board) -> Result<StateId, PuzzleError> {
        self.insert_child(parent, None, board)
    }

    /// `board` must be what `last_move` makes of the parent's board, when given.
    pub(crate) fn insert_child(&mut self, parent: StateId, last_move: Option<Direction>, board: Board) -> Result<StateId, PuzzleError> {
        let depth = self.get(parent)?.depth + 1;

        Ok(self.push(PuzzleState {
            board,
            parent: Some(parent),
            last_move,
            depth,
            base_values: FxHashMap::default(),
        }))
    }

    fn push(&mut self, state: PuzzleState) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    pub fn get(&self, id: StateId) -> Result<&PuzzleState, PuzzleError> {
        self.states.get(id.0).ok_or(PuzzleError::UnknownState(id.0))
    }

    pub fn view(&self, id: StateId) -> Result<StateView<'_>, PuzzleError> {
        let state = self.get(id)?;
        Ok(StateView { arena: self, state })
    }

    pub fn record_base_value(&mut self, id: StateId, heuristic: &'static str, value: u32) -> Result<(), PuzzleError> {
        let state = self.states.get_mut(id.0).ok_or(PuzzleError::UnknownState(id.0))?;
        state.base_values.insert(heuristic, value);
        Ok(())
    }

    /// Evaluates `id` and memoizes its base value so its children can take
    /// the incremental path. A state that already has a memo only gets its
    /// penalty recomputed.
    pub fn score<H: Heuristic + ?Sized>(&mut self, id: StateId, heuristic: &H) -> Result<Score, PuzzleError> {
        let score = heuristic.evaluate(self.view(id)?)?;
        self.record_base_value(id, heuristic.name(), score.base)?;
        Ok(score)
    }

    /// Directions from the root to `id`, oldest first.
    pub fn path(&self, id: StateId) -> Result<Vec<Direction>, PuzzleError> {
        let mut moves = vec![];
        let mut current = self.get(id)?;

        while let (Some(parent), Some(dir)) = (current.parent, current.last_move) {
            moves.push(dir);
            current = self.get(parent)?;
        }

        moves.reverse();
        Ok(moves)
    }
}

/// Read-only handle on one state, with access to its ancestors.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    arena: &'a StateArena,
    state: &'a PuzzleState,
}

impl<'a> StateView<'a> {
    pub fn board(&self) -> &'a Board {
        &self.state.board
    }

    pub fn dimension(&self) -> usize {
        self.state.board.dimension()
    }

    #[inline]
    pub fn tile_at(&self, col: usize, row: usize) -> Tile {
        self.state.board.tile_at(col, row)
    }

    #[inline]
    pub fn empty_position(&self) -> (usize, usize) {
        self.state.board.empty_position()
    }

    pub fn parent(&self) -> Option<StateView<'a>> {
        let parent = self.state.parent?;
        self.arena.view(parent).ok()
    }

    pub fn has_parent(&self) -> bool {
        self.state.parent.is_some()
    }

    pub fn cached_base_value(&self, heuristic: &str) -> Option<u32> {
        self.state.cached_base_value(heuristic)
    }
}
