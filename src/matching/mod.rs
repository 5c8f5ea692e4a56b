//! Edge compatibility matching between tiles
//!
//! This module contains:
//! - Edge descriptors and their binding to tile identifiers
//! - The pair-deduplication bitset
//! - The horizontal and vertical matcher

/// Bitset over ordered tile position pairs
pub mod bitset;
/// Terrain edge descriptors and edge tables
pub mod edges;
/// Pair matching across the whole tile set
pub mod matcher;

pub use edges::{EdgeDescriptor, EdgeKind, EdgeTable, TileEdges, TileId};
pub use matcher::{Combinations, Pair, find_combinations};
