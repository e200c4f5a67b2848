use std::cmp::Ordering;
use std::fmt;
use serde::{Deserialize, Serialize};

const BASE_BITS: u32 = 16;
const BASE_MASK: u32 = (1 << BASE_BITS) - 1;

/// Heuristic result: the Manhattan base value and the linear-conflict
/// penalty, kept apart so callers can memoize the base on its own.
///
/// Ordering follows the packed integer, i.e. penalty first and base second.
/// Search priority should use [`Score::total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    pub base: u32,
    pub penalty: u32,
}

impl Score {
    pub fn new(base: u32, penalty: u32) -> Self {
        Self { base, penalty }
    }

    /// Lower bound on remaining moves.
    #[inline]
    pub fn total(&self) -> u32 {
        self.base + self.penalty
    }

    /// `base | (penalty << 16)`. Boards are capped at `MAX_DIMENSION` so
    /// both halves of a heuristic score fit in 16 bits.
    #[inline]
    pub fn pack(&self) -> u32 {
        debug_assert!(self.base <= BASE_MASK, "base value {} overflows 16 bits", self.base);
        debug_assert!(self.penalty <= u32::MAX >> BASE_BITS, "penalty {} overflows 16 bits", self.penalty);
        (self.base & BASE_MASK) | (self.penalty << BASE_BITS)
    }

    #[inline]
    pub fn unpack(packed: u32) -> Self {
        Self {
            base: packed & BASE_MASK,
            penalty: packed >> BASE_BITS,
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.penalty
            .cmp(&other.penalty)
            .then(self.base.cmp(&other.base))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (manhattan {} + conflicts {})", self.total(), self.base, self.penalty)
    }
}
