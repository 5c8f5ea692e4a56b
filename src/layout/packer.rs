//! Grid packing of matched pairs into a combination sheet
//!
//! Each pair becomes a two-tile group placed at a moving cursor. Groups are
//! spaced by a fixed stride so every group owns a private 3x3 cell budget,
//! and the cursor wraps to a new band once it passes the width limit. The
//! grid has no height limit, so packing never fails.

use crate::io::configuration::GROUP_STRIDE;
use crate::matching::edges::TileId;
use crate::matching::matcher::{Combinations, Pair};

/// Direction in which the two tiles of a pair are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Second tile to the right of the first
    Horizontal,
    /// Second tile below the first
    Vertical,
}

impl Orientation {
    /// Cell offset of the second tile relative to the first
    pub const fn second_offset(self) -> (u32, u32) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }
}

/// Grid cell where the next group will be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Cell column
    pub x: u32,
    /// Cell row
    pub y: u32,
}

impl Cursor {
    /// Top-left cell of the sheet
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a cursor at the given cell
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Move past one group, wrapping once the column exceeds `width_limit`
    ///
    /// A column that would overflow `u32` wraps as well. Rows saturate at
    /// `u32::MAX`.
    #[must_use]
    pub const fn advance(self, width_limit: u32) -> Self {
        match self.x.checked_add(GROUP_STRIDE) {
            Some(x) if x <= width_limit => Self { x, y: self.y },
            _ => Self {
                x: 0,
                y: self.y.saturating_add(GROUP_STRIDE),
            },
        }
    }
}

/// A tile assigned to a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Tile drawn in the cell
    pub tile: TileId,
    /// Cell column
    pub x: u32,
    /// Cell row
    pub y: u32,
}

/// Place each pair as a two-tile group starting at `start`
///
/// Returns the placements in pair order, first tile then second, together
/// with the cursor where a following pass should continue. Coordinates
/// saturate at `u32::MAX` instead of overflowing.
pub fn pack(
    pairs: &[Pair],
    orientation: Orientation,
    width_limit: u32,
    start: Cursor,
) -> (Vec<Placement>, Cursor) {
    let (dx, dy) = orientation.second_offset();
    let mut placements = Vec::with_capacity(pairs.len() * 2);
    let mut cursor = start;

    for pair in pairs {
        placements.push(Placement {
            tile: pair.first(),
            x: cursor.x,
            y: cursor.y,
        });
        placements.push(Placement {
            tile: pair.second(),
            x: cursor.x.saturating_add(dx),
            y: cursor.y.saturating_add(dy),
        });
        cursor = cursor.advance(width_limit);
    }

    (placements, cursor)
}

/// Lay out horizontal pairs from the origin, then vertical pairs after them
pub fn layout_combinations(combinations: &Combinations, width_limit: u32) -> Vec<Placement> {
    let (mut placements, cursor) = pack(
        &combinations.horizontal,
        Orientation::Horizontal,
        width_limit,
        Cursor::ORIGIN,
    );
    let (vertical, end) = pack(
        &combinations.vertical,
        Orientation::Vertical,
        width_limit,
        cursor,
    );
    placements.extend(vertical);

    log::debug!(
        "Packed {} placements, next group at ({}, {})",
        placements.len(),
        end.x,
        end.y
    );

    placements
}

/// Size in cells of the smallest sheet holding every placement
pub fn extent(placements: &[Placement]) -> (u32, u32) {
    placements.iter().fold((0, 0), |(width, height), placement| {
        (width.max(placement.x + 1), height.max(placement.y + 1))
    })
}
