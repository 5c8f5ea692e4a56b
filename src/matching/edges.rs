//! Terrain edge descriptors and their binding to tile identifiers
//!
//! Every tile carries four edge labels (top, right, bottom, left) drawn from a
//! small closed terrain alphabet. Descriptors are authored as a positional
//! table and bound to the working tile ordering before matching.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{ComboError, Result, invalid_descriptor};

/// Identifier of a tile within the sprite sheet
pub type TileId = u32;

/// Number of edges on a tile
pub const EDGE_COUNT: usize = 4;

/// Terrain kind found along one edge of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Sand terrain, written `s`
    Sand,
    /// Grass terrain, written `g`
    Grass,
}

impl EdgeKind {
    /// Decode a single edge symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            's' => Some(Self::Sand),
            'g' => Some(Self::Grass),
            _ => None,
        }
    }

    /// Symbol used for this kind in descriptor strings
    pub const fn symbol(self) -> char {
        match self {
            Self::Sand => 's',
            Self::Grass => 'g',
        }
    }
}

/// Edge labels of one tile in top, right, bottom, left order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor([EdgeKind; EDGE_COUNT]);

impl EdgeDescriptor {
    /// Build a descriptor from edges in top, right, bottom, left order
    pub const fn new(edges: [EdgeKind; EDGE_COUNT]) -> Self {
        Self(edges)
    }

    /// Top edge
    pub const fn top(&self) -> EdgeKind {
        let [top, _, _, _] = self.0;
        top
    }

    /// Right edge
    pub const fn right(&self) -> EdgeKind {
        let [_, right, _, _] = self.0;
        right
    }

    /// Bottom edge
    pub const fn bottom(&self) -> EdgeKind {
        let [_, _, bottom, _] = self.0;
        bottom
    }

    /// Left edge
    pub const fn left(&self) -> EdgeKind {
        let [_, _, _, left] = self.0;
        left
    }
}

impl FromStr for EdgeDescriptor {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != EDGE_COUNT {
            return Err(format!(
                "expected {EDGE_COUNT} edge symbols, found {}",
                symbols.len()
            ));
        }

        let mut edges = [EdgeKind::Sand; EDGE_COUNT];
        for (edge, &symbol) in edges.iter_mut().zip(&symbols) {
            *edge = EdgeKind::from_symbol(symbol)
                .ok_or_else(|| format!("unknown edge symbol '{symbol}'"))?;
        }

        Ok(Self(edges))
    }
}

impl fmt::Display for EdgeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.0 {
            write!(f, "{}", edge.symbol())?;
        }
        Ok(())
    }
}

/// Positional table of edge descriptors, aligned with the working tile order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTable {
    descriptors: Vec<EdgeDescriptor>,
}

impl EdgeTable {
    /// Parse a table from descriptor strings such as `"ssgg"`
    ///
    /// # Errors
    ///
    /// Returns [`ComboError::InvalidEdgeDescriptor`] for the first entry that
    /// is not exactly four known edge symbols
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let descriptors = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let text = entry.as_ref();
                text.parse::<EdgeDescriptor>()
                    .map_err(|reason| invalid_descriptor(index, &text, &reason))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { descriptors })
    }

    /// Build a table from already decoded descriptors
    pub const fn from_descriptors(descriptors: Vec<EdgeDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Number of descriptors in the table
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Test if the table has no descriptors
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Bind descriptors to tiles by position
    ///
    /// # Errors
    ///
    /// Returns [`ComboError::DuplicateTile`] if a tile id repeats, or
    /// [`ComboError::EdgeTableMismatch`] when the table does not hold
    /// exactly one descriptor per tile; nothing is truncated or padded
    pub fn assign(&self, tile_ids: &[TileId]) -> Result<TileEdges> {
        ensure_unique(tile_ids)?;
        if self.descriptors.len() != tile_ids.len() {
            return Err(ComboError::EdgeTableMismatch {
                expected: tile_ids.len(),
                actual: self.descriptors.len(),
            });
        }

        Ok(tile_ids
            .iter()
            .copied()
            .zip(self.descriptors.iter().copied())
            .collect())
    }
}

/// Edge descriptors keyed by tile identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileEdges {
    edges: HashMap<TileId, EdgeDescriptor>,
}

impl TileEdges {
    /// Descriptor for a tile, if one was assigned
    pub fn get(&self, tile: TileId) -> Option<&EdgeDescriptor> {
        self.edges.get(&tile)
    }

    /// Number of tiles with descriptors
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Test if no tile has a descriptor
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl FromIterator<(TileId, EdgeDescriptor)> for TileEdges {
    fn from_iter<I: IntoIterator<Item = (TileId, EdgeDescriptor)>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

/// Reject tile sets that list the same identifier twice
///
/// # Errors
///
/// Returns [`ComboError::DuplicateTile`] naming the first repeated id
pub fn ensure_unique(tile_ids: &[TileId]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tile_ids.len());
    match tile_ids.iter().find(|&&tile| !seen.insert(tile)) {
        Some(&tile) => Err(ComboError::DuplicateTile { tile }),
        None => Ok(()),
    }
}
