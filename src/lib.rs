//! Edge-compatible tile pair discovery and combination sheet layout
//!
//! Reads a sprite map describing a region of a terrain sprite sheet, finds
//! every pair of tiles whose edges line up horizontally or vertically, and
//! writes a new map that shows each pair as a small group on a grid.

#![forbid(unsafe_code)]

/// Sprite map input/output, configuration and error handling
pub mod io;
/// Grid placement of matched tile pairs
pub mod layout;
/// Edge descriptors and pair matching
pub mod matching;

pub use io::error::{ComboError, ErrorKind, Result};
