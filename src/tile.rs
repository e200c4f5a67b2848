#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rune {
    VALUE,
    SPACE,
}

impl Rune {
    pub fn from_char(char: char) -> Self {
        match char {
            EMPTY_CHAR => Rune::SPACE,
            _ => Rune::VALUE
        }
    }
}

pub const EMPTY_CHAR: char = '_';
const RADIX: u32 = 36;

/// A single board cell: a numbered tile or the empty slot.
///
/// Labels are zero based, so label `p` belongs at column `p % D`, row `p / D`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tile {
    pub raw: char,
    pub rune: Rune,
    label: Option<u16>,
}

pub const EMPTY: Tile = Tile {
    raw: EMPTY_CHAR,
    rune: Rune::SPACE,
    label: None,
};

pub fn serialize_tiles(tiles: &[Tile]) -> String {
    tiles.iter().map(|t| t.raw).collect()
}

impl Tile {
    /// Parses one cell of the text format. Returns `None` for characters
    /// that are neither a base-36 digit nor the empty marker.
    pub fn new(char: char) -> Option<Self> {
        match Rune::from_char(char) {
            Rune::SPACE => Some(EMPTY),
            Rune::VALUE => {
                let label = char.to_digit(RADIX)? as u16;
                Some(Self {
                    raw: char.to_ascii_lowercase(),
                    rune: Rune::VALUE,
                    label: Some(label),
                })
            }
        }
    }

    pub fn from_label(label: u16) -> Self {
        // labels past the base-36 alphabet still work in memory, they just
        // can't be written back to the text format
        let raw = char::from_digit(label as u32, RADIX).unwrap_or('?');
        Self {
            raw,
            rune: Rune::VALUE,
            label: Some(label),
        }
    }

    pub fn label(&self) -> Option<u16> {
        self.label
    }

    /// Goal `(col, row)` on a board of side `dimension`, `None` for the empty cell.
    #[inline]
    pub fn goal(&self, dimension: usize) -> Option<(usize, usize)> {
        self.label
            .map(|p| (p as usize % dimension, p as usize / dimension))
    }
}
