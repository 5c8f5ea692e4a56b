use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over ordered pairs of tile positions
///
/// Position pairs `(first, second)` map to bit `first * tiles + second`,
/// giving O(1) membership tests for the pair deduplication in the matcher.
#[derive(Clone, Debug)]
pub struct PairBitset {
    bits: BitVec,
    tiles: usize,
}

impl PairBitset {
    /// Create a bitset with no pairs present for `tiles` positions
    pub fn new(tiles: usize) -> Self {
        Self {
            bits: bitvec![0; tiles * tiles],
            tiles,
        }
    }

    /// Number of positions along each axis
    pub const fn tiles(&self) -> usize {
        self.tiles
    }

    const fn bit_index(&self, first: usize, second: usize) -> Option<usize> {
        if first < self.tiles && second < self.tiles {
            Some(first * self.tiles + second)
        } else {
            None
        }
    }

    /// Insert an ordered position pair
    ///
    /// Pairs outside the bitset's range are ignored
    pub fn insert(&mut self, first: usize, second: usize) {
        if let Some(index) = self.bit_index(first, second) {
            self.bits.set(index, true);
        }
    }

    /// Test ordered pair membership
    pub fn contains(&self, first: usize, second: usize) -> bool {
        self.bit_index(first, second)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test if no pairs are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count pairs in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all position pairs in row-major order
    pub fn to_vec(&self) -> Vec<(usize, usize)> {
        if self.tiles == 0 {
            return Vec::new();
        }
        self.bits
            .iter_ones()
            .map(|index| (index / self.tiles, index % self.tiles))
            .collect()
    }
}

impl fmt::Display for PairBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairBitset({} pairs: {:?})", self.count(), self.to_vec())
    }
}
