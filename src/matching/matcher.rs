//! Edge matching over every unordered pair of tiles
//!
//! Tests each unordered pair exactly once, in the order the pair first appears
//! in the outer-then-inner product of the tile ordering, and records whether
//! the pair fits side by side, one above the other, both, or neither.

use serde::Serialize;
use std::fmt;

use crate::io::error::{ComboError, Result};
use crate::matching::bitset::PairBitset;
use crate::matching::edges::{EdgeDescriptor, TileEdges, TileId, ensure_unique};

/// Two tiles that fit together, top-or-left tile first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pair(pub TileId, pub TileId);

impl Pair {
    /// Top or left tile
    pub const fn first(self) -> TileId {
        self.0
    }

    /// Bottom or right tile
    pub const fn second(self) -> TileId {
        self.1
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Accepted pairs for both adjacency directions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Combinations {
    /// Pairs that may sit side by side
    pub horizontal: Vec<Pair>,
    /// Pairs that may sit one above the other
    pub vertical: Vec<Pair>,
}

impl Combinations {
    /// Total number of accepted pairs across both directions
    pub fn total(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Test if no pair was accepted
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }
}

// Compares two edges on each side, not just the facing edges
/// Test whether `b` may sit to the right of `a`
pub fn matches_horizontally(a: &EdgeDescriptor, b: &EdgeDescriptor) -> bool {
    [a.right(), a.left()] == [b.top(), b.bottom()]
}

/// Test whether `b` may sit below `a`
pub fn matches_vertically(a: &EdgeDescriptor, b: &EdgeDescriptor) -> bool {
    [a.bottom(), a.left()] == [b.top(), b.right()]
}

/// Find every horizontally and vertically compatible tile pair
///
/// Self-pairs are evaluated like any other pair. Output lists follow the
/// deduplicated product order without further sorting.
///
/// # Errors
///
/// Returns [`ComboError::DuplicateTile`] if `tile_ids` repeats an id,
/// [`ComboError::EdgeTableMismatch`] if `edges` does not hold exactly one
/// entry per tile, or [`ComboError::MissingEdges`] if a tile has none
pub fn find_combinations(tile_ids: &[TileId], edges: &TileEdges) -> Result<Combinations> {
    ensure_unique(tile_ids)?;
    if edges.len() != tile_ids.len() {
        return Err(ComboError::EdgeTableMismatch {
            expected: tile_ids.len(),
            actual: edges.len(),
        });
    }

    let descriptors = tile_ids
        .iter()
        .map(|&tile| {
            edges
                .get(tile)
                .map(|descriptor| (tile, *descriptor))
                .ok_or(ComboError::MissingEdges { tile })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut considered = PairBitset::new(descriptors.len());
    let mut combinations = Combinations::default();

    for (i, (a, edges_a)) in descriptors.iter().enumerate() {
        for (j, (b, edges_b)) in descriptors.iter().enumerate() {
            if considered.contains(j, i) {
                continue;
            }
            considered.insert(i, j);

            if matches_horizontally(edges_a, edges_b) {
                combinations.horizontal.push(Pair(*a, *b));
            }
            if matches_vertically(edges_a, edges_b) {
                combinations.vertical.push(Pair(*a, *b));
            }
        }
    }

    log::debug!(
        "Evaluated {} tile pairs: {} horizontal, {} vertical",
        considered.count(),
        combinations.horizontal.len(),
        combinations.vertical.len()
    );

    Ok(combinations)
}
