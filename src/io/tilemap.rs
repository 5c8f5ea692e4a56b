//! Sprite map documents: tile region extraction and rewritten layouts
//!
//! The source map lists the first tile of each row of a rectangular sprite
//! sheet region, plus the region's last tile. Sorting those identifiers gives
//! the row starts and the region width. The rest of the document is kept
//! as-is and written back with the tile layer replaced by the packed layout.

use ndarray::Array2;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::io::configuration::{MAX_REGION_TILES, TILE_LAYER_INDEX};
use crate::io::error::{Result, WithPath, malformed_input};
use crate::layout::packer::Placement;
use crate::matching::edges::TileId;

/// Rendering attributes copied verbatim onto every emitted tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileStyle {
    /// Sprite sheet reference
    pub sprite_sheet_id: Value,
    /// Horizontal scale
    pub scale_x: Value,
}

/// Rectangular block of sprite sheet tiles described by its row starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRegion {
    row_starts: Vec<TileId>,
    width: u32,
}

impl TileRegion {
    /// Derive the region from the identifiers listed in the source map
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComboError::MalformedInput`] if fewer than two
    /// identifiers are given, if rows would overlap, or if the region is
    /// larger than [`MAX_REGION_TILES`]
    pub fn from_extents(mut extents: Vec<TileId>) -> Result<Self> {
        extents.sort_unstable();

        let (&last, row_starts) = extents
            .split_last()
            .ok_or_else(|| malformed_input(&"tile layer has no tiles"))?;
        let &last_row_start = row_starts
            .last()
            .ok_or_else(|| malformed_input(&"tile layer needs row starts and a final tile"))?;

        let width = u64::from(last) - u64::from(last_row_start) + 1;
        let tile_count = width.saturating_mul(row_starts.len() as u64);
        if tile_count > MAX_REGION_TILES as u64 {
            return Err(malformed_input(&format!(
                "region of {tile_count} tiles exceeds the limit of {MAX_REGION_TILES}"
            )));
        }
        let width = width as u32;

        for rows in row_starts.windows(2) {
            if let [above, below] = rows {
                if below - above < width {
                    return Err(malformed_input(&format!(
                        "rows starting at {above} and {below} overlap for width {width}"
                    )));
                }
            }
        }

        Ok(Self {
            row_starts: row_starts.to_vec(),
            width,
        })
    }

    /// Tiles per row
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.row_starts.len()
    }

    /// Tile identifiers laid out as (row, column)
    pub fn grid(&self) -> Array2<TileId> {
        Array2::from_shape_fn((self.height(), self.width as usize), |(row, column)| {
            self.row_starts.get(row).copied().unwrap_or_default() + column as TileId
        })
    }

    /// Tile identifiers in row-major order
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.grid().iter().copied().collect()
    }
}

/// A tile entry in the written layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    /// Tile identifier, written as a string
    pub id: String,
    /// Pixel column
    pub x: u64,
    /// Pixel row
    pub y: u64,
    /// Sprite sheet reference from the source map
    pub sprite_sheet_id: Value,
    /// Horizontal scale from the source map
    pub scale_x: Value,
}

impl TileRecord {
    /// Convert a cell placement into a pixel-positioned tile entry
    pub fn from_placement(placement: &Placement, tile_size: u32, style: &TileStyle) -> Self {
        Self {
            id: placement.tile.to_string(),
            x: u64::from(placement.x) * u64::from(tile_size),
            y: u64::from(placement.y) * u64::from(tile_size),
            sprite_sheet_id: style.sprite_sheet_id.clone(),
            scale_x: style.scale_x.clone(),
        }
    }
}

/// Parsed sprite map with everything the matcher and packer need
#[derive(Debug, Clone)]
pub struct TileMap {
    document: Value,
    tile_size: u32,
    region: TileRegion,
    style: TileStyle,
}

impl TileMap {
    /// Load and interpret a sprite map from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid JSON
    /// - The document lacks the tile layer, tile size or tile styling
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_path(path, "read")?;
        let document: Value = serde_json::from_str(&text).as_input(path)?;
        Self::from_value(document)
    }

    /// Interpret an already parsed sprite map document
    ///
    /// # Errors
    ///
    /// Returns [`crate::ComboError::MalformedInput`] if the tile layer, tile
    /// size or styling of the first tile is missing, or if any tile id is not
    /// numeric
    pub fn from_value(document: Value) -> Result<Self> {
        let tile_size = document
            .get("tileSize")
            .ok_or_else(|| malformed_input(&"missing tileSize"))
            .and_then(|value| parse_integer("tileSize", value))?;
        if tile_size == 0 {
            return Err(malformed_input(&"tileSize must be positive"));
        }

        let tiles = tile_layer(&document)?;
        let first = tiles
            .first()
            .ok_or_else(|| malformed_input(&"tile layer has no tiles"))?;
        let style = TileStyle {
            sprite_sheet_id: first
                .get("spriteSheetId")
                .cloned()
                .ok_or_else(|| malformed_input(&"first tile has no spriteSheetId"))?,
            scale_x: first
                .get("scaleX")
                .cloned()
                .ok_or_else(|| malformed_input(&"first tile has no scaleX"))?,
        };

        let extents = tiles
            .iter()
            .map(|tile| {
                tile.get("id")
                    .ok_or_else(|| malformed_input(&"tile without id"))
                    .and_then(|id| parse_integer("tile id", id))
            })
            .collect::<Result<Vec<_>>>()?;
        let region = TileRegion::from_extents(extents)?;

        log::debug!(
            "Region of {} rows x {} tiles, tile size {tile_size}px",
            region.height(),
            region.width()
        );

        Ok(Self {
            document,
            tile_size,
            region,
            style,
        })
    }

    /// Pixel size of one tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Source region of the sprite sheet
    pub const fn region(&self) -> &TileRegion {
        &self.region
    }

    /// Styling copied onto emitted tiles
    pub const fn style(&self) -> &TileStyle {
        &self.style
    }

    /// Working tile identifiers in region order
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.region.tile_ids()
    }

    /// Convert placements into tile entries for this map
    pub fn tile_records(&self, placements: &[Placement]) -> Vec<TileRecord> {
        placements
            .iter()
            .map(|placement| TileRecord::from_placement(placement, self.tile_size, &self.style))
            .collect()
    }

    /// Copy of the source document with its tile layer replaced by `placements`
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the tile entries cannot be converted
    pub fn layout_document(&self, placements: &[Placement]) -> serde_json::Result<Value> {
        let tiles = serde_json::to_value(self.tile_records(placements))?;
        let mut document = self.document.clone();
        if let Some(layer_tiles) =
            document.pointer_mut(&format!("/layers/{TILE_LAYER_INDEX}/tiles"))
        {
            *layer_tiles = tiles;
        }
        Ok(document)
    }
}

fn tile_layer(document: &Value) -> Result<&Vec<Value>> {
    document
        .get("layers")
        .and_then(Value::as_array)
        .and_then(|layers| layers.get(TILE_LAYER_INDEX))
        .and_then(|layer| layer.get("tiles"))
        .and_then(Value::as_array)
        .ok_or_else(|| malformed_input(&format!("missing layers[{TILE_LAYER_INDEX}].tiles")))
}

// Sprite map exports write numbers either bare or as strings
fn parse_integer(field: &str, value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| malformed_input(&format!("{field} {value} is not a whole number")))
}
