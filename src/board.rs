use std::fmt;
use std::str::FromStr;
use crate::error::PuzzleError;
use crate::tile::{serialize_tiles, Tile, EMPTY};

/// Direction the empty cell travels. The tile on the other side slides the
/// opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Ord, PartialOrd)]
#[repr(u8)]
pub enum Direction {
    UP,
    DOWN,
    LEFT,
    RIGHT
}

impl Direction {
    pub fn to_char(&self) -> char {
        match self {
            Direction::UP => 'U',
            Direction::DOWN => 'D',
            Direction::LEFT => 'L',
            Direction::RIGHT => 'R'
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::UP => Direction::DOWN,
            Direction::DOWN => Direction::UP,
            Direction::LEFT => Direction::RIGHT,
            Direction::RIGHT => Direction::LEFT
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Largest side length of a board. Every tile is at most `2 * (D - 1)` away
/// from its goal, so the Manhattan sum of a 32x32 board (at most 63426) still
/// fits the 16-bit base of a packed score.
pub const MAX_DIMENSION: usize = 32;

/// Largest side length the text format can express: one base-36 char per label.
pub const MAX_TEXT_DIMENSION: usize = 6;

pub fn moves_str(moves: &[Direction]) -> String {
    moves.iter().map(|d| d.to_char()).collect()
}

/// Square sliding puzzle with exactly one empty cell, stored row-major.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    pub(crate) dimension: usize,
    pub(crate) tiles: Vec<Tile>,
    space_idx: usize,
}

impl Board {
    /// Builds a board from row-major cells, `None` marking the empty slot.
    pub fn from_labels(dimension: usize, cells: &[Option<u16>]) -> Result<Self, PuzzleError> {
        let tiles = cells
            .iter()
            .map(|cell| match cell {
                Some(label) => Tile::from_label(*label),
                None => EMPTY,
            })
            .collect();

        Self::from_tiles(dimension, tiles)
    }

    pub(crate) fn from_tiles(dimension: usize, tiles: Vec<Tile>) -> Result<Self, PuzzleError> {
        let cell_count = Self::cell_count(dimension)?;
        if tiles.len() != cell_count {
            return Err(PuzzleError::Parse(format!(
                "expected {} cells for a {}x{} board, got {}",
                cell_count, dimension, dimension, tiles.len()
            )));
        }

        let mut seen = vec![false; cell_count - 1];
        let mut space_idx = None;

        for (idx, tile) in tiles.iter().enumerate() {
            match tile.label() {
                None => {
                    if space_idx.replace(idx).is_some() {
                        return Err(PuzzleError::Parse("more than one empty cell".into()));
                    }
                }
                Some(label) => {
                    let slot = seen.get_mut(label as usize).ok_or_else(|| {
                        PuzzleError::Parse(format!("label {} out of range", label))
                    })?;
                    if *slot {
                        return Err(PuzzleError::Parse(format!("duplicate label {}", label)));
                    }
                    *slot = true;
                }
            }
        }

        let space_idx = space_idx.ok_or_else(|| PuzzleError::Parse("no empty cell".into()))?;

        Ok(Self {
            dimension,
            tiles,
            space_idx,
        })
    }

    /// Cells on a `dimension` x `dimension` board, rejecting sizes outside `2..=MAX_DIMENSION`.
    fn cell_count(dimension: usize) -> Result<usize, PuzzleError> {
        if dimension < 2 {
            return Err(PuzzleError::Parse(format!("dimension {} is too small", dimension)));
        }
        if dimension > MAX_DIMENSION {
            return Err(PuzzleError::Parse(format!("dimension {} is too large", dimension)));
        }

        dimension
            .checked_mul(dimension)
            .ok_or_else(|| PuzzleError::Parse(format!("dimension {} is too large", dimension)))
    }

    /// The solved board: labels in order, empty cell last.
    pub fn goal(dimension: usize) -> Result<Self, PuzzleError> {
        let cell_count = Self::cell_count(dimension)?;
        let mut cells: Vec<Option<u16>> = (0..cell_count - 1)
            .map(|label| Some(label as u16))
            .collect();
        cells.push(None);

        Self::from_labels(dimension, &cells)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn tile_at(&self, col: usize, row: usize) -> Tile {
        self.tiles[row * self.dimension + col]
    }

    /// `(col, row)` of the empty cell.
    #[inline]
    pub fn empty_position(&self) -> (usize, usize) {
        (self.space_idx % self.dimension, self.space_idx / self.dimension)
    }

    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, tile)| match tile.label() {
                Some(label) => label as usize == idx,
                None => idx == self.tiles.len() - 1,
            })
    }

    pub fn move_space(&mut self, dir: Direction) -> Result<(), PuzzleError> {
        let space_idx = self.space_idx;
        let width = self.dimension;

        let target_idx = match dir {
            Direction::UP => space_idx.checked_sub(width)
                .ok_or(PuzzleError::IllegalMove("Cannot move up from top edge".into()))?,
            Direction::DOWN => {
                let target_idx = space_idx + width;
                if target_idx >= self.tiles.len() {
                    return Err(PuzzleError::IllegalMove("Cannot move down from bottom edge".into()));
                }
                target_idx
            },
            Direction::LEFT => {
                if space_idx % width == 0 {
                    return Err(PuzzleError::IllegalMove("Cannot move left from left edge".into()));
                }
                space_idx - 1
            },
            Direction::RIGHT => {
                if (space_idx + 1) % width == 0 {
                    return Err(PuzzleError::IllegalMove("Cannot move right from right edge".into()));
                }
                space_idx + 1
            },
        };

        self.tiles.swap(space_idx, target_idx);
        self.space_idx = target_idx;

        Ok(())
    }

    /// Copy of this board with one slide applied.
    pub fn moved(&self, dir: Direction) -> Result<Board, PuzzleError> {
        let mut successor = self.clone();
        successor.move_space(dir)?;
        Ok(successor)
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        let mut legal_moves: Vec<Direction> = Vec::with_capacity(4);

        let (col, row) = self.empty_position();
        let last = self.dimension - 1;

        if row > 0 {
            legal_moves.push(Direction::UP);
        }
        if row < last {
            legal_moves.push(Direction::DOWN);
        }
        if col > 0 {
            legal_moves.push(Direction::LEFT);
        }
        if col < last {
            legal_moves.push(Direction::RIGHT);
        }

        legal_moves
    }

    pub fn is_solvable(&self) -> bool {
        let width = self.dimension;
        let height = self.dimension;

        let labels: Vec<u16> = self
            .tiles
            .iter()
            .filter_map(|tile| tile.label())
            .collect();

        let inversions = Self::count_inversions(&labels);

        if width % 2 == 1 {
            // Odd-width grid: solvable if inversions are even
            inversions % 2 == 0
        } else {
            // Even-width grid: the blank's row, counted from the bottom, breaks the tie
            let space_row_from_bottom = height - (self.space_idx / width);

            (inversions % 2 == 0 && space_row_from_bottom % 2 == 1)
                || (inversions % 2 == 1 && space_row_from_bottom % 2 == 0)
        }
    }

    fn count_inversions(labels: &[u16]) -> u32 {
        let mut inversions = 0;
        for i in 0..labels.len() {
            for j in (i + 1)..labels.len() {
                if labels[i] > labels[j] {
                    inversions += 1;
                }
            }
        }
        inversions
    }

    pub fn serialized(&self) -> String {
        format!("{},{},{}", self.dimension, self.dimension, serialize_tiles(&self.tiles))
    }
}

impl FromStr for Board {
    type Err = PuzzleError;

    /// Parses `D,D,<cells>`, one base-36 char per tile and `_` for the empty cell.
    fn from_str(str: &str) -> Result<Self, Self::Err> {
        let mut parts = str.trim().splitn(3, ',');

        let mut dimension_field = |name: &str| -> Result<usize, PuzzleError> {
            let field = parts
                .next()
                .ok_or_else(|| PuzzleError::Parse(format!("missing {}", name)))?;
            field
                .trim()
                .parse::<usize>()
                .map_err(|_| PuzzleError::Parse(format!("bad {} '{}'", name, field)))
        };

        let width = dimension_field("width")?;
        let height = dimension_field("height")?;
        if width != height {
            return Err(PuzzleError::Parse(format!("board must be square, got {}x{}", width, height)));
        }
        if !(2..=MAX_TEXT_DIMENSION).contains(&width) {
            return Err(PuzzleError::Parse(format!(
                "text boards must be 2x2 to {}x{}, got {}x{}",
                MAX_TEXT_DIMENSION, MAX_TEXT_DIMENSION, width, height
            )));
        }

        let cells = parts
            .next()
            .ok_or_else(|| PuzzleError::Parse("missing cells".into()))?;

        let mut tiles: Vec<Tile> = Vec::with_capacity(width * width);
        for char in cells.chars() {
            let tile = Tile::new(char)
                .ok_or_else(|| PuzzleError::Parse(format!("unexpected cell '{}'", char)))?;
            tiles.push(tile);
        }

        Self::from_tiles(width, tiles)
    }
}
