use tracing::debug;
use crate::board::Board;
use crate::error::PuzzleError;
use crate::score::Score;
use crate::state::StateView;
use crate::tile::Tile;

/// Lower bound on the moves left to solve a state.
pub trait Heuristic {
    /// Key the base value is memoized under on each state.
    fn name(&self) -> &'static str;

    fn evaluate(&self, state: StateView<'_>) -> Result<Score, PuzzleError>;
}

/// Manhattan distance plus two moves for every pair of tiles that share
/// their goal row or column but sit in reversed order on it.
///
/// Children of an evaluated state reuse the parent's memoized Manhattan
/// value and only account for the one tile that slid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanLinearConflict;

impl ManhattanLinearConflict {
    pub const NAME: &'static str = "manhattan-linear-conflict";

    /// Manhattan base value for `state`, incremental when the parent has one.
    pub fn manhattan(&self, state: StateView<'_>) -> Result<u32, PuzzleError> {
        let parent = match state.parent() {
            Some(parent) => parent,
            None => return Ok(manhattan_sum(state.board())),
        };

        let value = parent
            .cached_base_value(Self::NAME)
            .ok_or(PuzzleError::MissingParentValue { heuristic: Self::NAME })?;

        let dimension = state.dimension();
        let (x, y) = parent.empty_position();
        let (x2, y2) = state.empty_position();

        if x.abs_diff(x2) + y.abs_diff(y2) != 1 {
            debug!(
                parent = ?(x, y),
                child = ?(x2, y2),
                "empty cell did not move by one slide, recomputing manhattan distance"
            );
            return Ok(manhattan_sum(state.board()));
        }

        // the tile that slid now sits at the parent's empty cell (x, y) and came from (x2, y2)
        let (goal_x, goal_y) = match state.tile_at(x, y).goal(dimension) {
            Some(goal) => goal,
            None => return Ok(manhattan_sum(state.board())),
        };

        let moved_away = if x2 > x {
            goal_x > x
        } else if x2 < x {
            goal_x < x
        } else if y2 > y {
            goal_y > y
        } else {
            goal_y < y
        };

        if moved_away {
            Ok(value + 1)
        } else {
            // a tile that got closer contributed at least one before the move
            value
                .checked_sub(1)
                .ok_or(PuzzleError::InconsistentParentValue { heuristic: Self::NAME })
        }
    }
}

impl Heuristic for ManhattanLinearConflict {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn evaluate(&self, state: StateView<'_>) -> Result<Score, PuzzleError> {
        let base = self.manhattan(state)?;
        let penalty = linear_conflicts(state.board());

        Ok(Score::new(base, penalty))
    }
}

/// Distance of `tile` at `(col, row)` from its goal cell; zero for the empty cell.
#[inline]
pub fn tile_distance(tile: Tile, col: usize, row: usize, dimension: usize) -> u32 {
    match tile.goal(dimension) {
        Some((goal_col, goal_row)) => (col.abs_diff(goal_col) + row.abs_diff(goal_row)) as u32,
        None => 0,
    }
}

/// Full Manhattan sum, visiting every cell once.
pub fn manhattan_sum(board: &Board) -> u32 {
    let dimension = board.dimension();

    board
        .tiles()
        .iter()
        .enumerate()
        .map(|(idx, tile)| tile_distance(*tile, idx % dimension, idx / dimension, dimension))
        .sum()
}

/// Linear-conflict penalty: 2 per reversed pair, columns then rows.
pub fn linear_conflicts(board: &Board) -> u32 {
    column_conflicts(board) + row_conflicts(board)
}

pub(crate) fn column_conflicts(board: &Board) -> u32 {
    let dimension = board.dimension();
    let mut linear_conflict = 0;

    for x in 0..dimension {
        for y1 in 0..dimension - 1 {
            let goal1 = match board.tile_at(x, y1).goal(dimension) {
                Some((goal_x, goal_y)) if goal_x == x => goal_y,
                _ => continue,
            };

            for y2 in y1 + 1..dimension {
                let goal2 = match board.tile_at(x, y2).goal(dimension) {
                    Some((goal_x, goal_y)) if goal_x == x => goal_y,
                    _ => continue,
                };

                // y2 comes after y1 but belongs above it
                if goal2 < goal1 {
                    linear_conflict += 2;
                }
            }
        }
    }

    linear_conflict
}

pub(crate) fn row_conflicts(board: &Board) -> u32 {
    let dimension = board.dimension();
    let mut linear_conflict = 0;

    for y in 0..dimension {
        for x1 in 0..dimension - 1 {
            let goal1 = match board.tile_at(x1, y).goal(dimension) {
                Some((goal_x, goal_y)) if goal_y == y => goal_x,
                _ => continue,
            };

            for x2 in x1 + 1..dimension {
                let goal2 = match board.tile_at(x2, y).goal(dimension) {
                    Some((goal_x, goal_y)) if goal_y == y => goal_x,
                    _ => continue,
                };

                if goal2 < goal1 {
                    linear_conflict += 2;
                }
            }
        }
    }

    linear_conflict
}
