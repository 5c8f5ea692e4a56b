//! Layout constants and the bundled edge-descriptor table

/// Largest cell column a group may start at before the layout wraps to a new band
pub const MAX_CELL_X: u32 = 256;

// Two cells for the pair plus one blank cell of padding
/// Distance the cursor advances between pair groups, in cells
pub const GROUP_STRIDE: u32 = 3;

/// Index of the layer whose tiles are read and rewritten
pub const TILE_LAYER_INDEX: usize = 0;

// Output settings
/// Suffix added to the output stem for the combinations artifact
pub const COMBOS_SUFFIX: &str = "_combos";
/// Extension of the combinations artifact
pub const COMBOS_EXTENSION: &str = "json";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Edge descriptors for the bundled terrain sheet, one per tile in region order
///
/// Each entry lists the top, right, bottom and left edge of a tile, using
/// `s` for sand and `g` for grass. The region is 10 rows of 7 tiles.
pub const DEFAULT_EDGE_TABLE: &[&str] = &[
    "ssgg", "ggss", "gggs", "ggsg", "gsgs", "sgsg", "gggg", //
    "ssgg", "ggss", "gsgg", "sggg", "gsgs", "sgsg", "gggg", //
    "ssgg", "ggss", "gggs", "ggsg", "gsgs", "sgsg", "gggg", //
    "ssgg", "ggss", "gsgg", "sggg", "gsgs", "sgsg", "gggg", //
    "ssgg", "ggss", "gggs", "ggsg", "gsgs", "sgsg", "gggg", //
    "ssgg", "ggss", "gsgg", "sggg", "gsgs", "sgsg", "gggg", //
    "sssg", "ssgs", "sssg", "ssgs", "sssg", "ssgs", "gggg", //
    "sgss", "gsss", "sgss", "gsss", "sgss", "gsss", "gggg", //
    "sggs", "gssg", "sggs", "gssg", "sggs", "gssg", "gggg", //
    "gssg", "sggs", "gssg", "sggs", "gssg", "sggs", "gggg", //
];

// Guards against regions that would allocate absurd working sets
/// Maximum number of tiles a source region may span
pub const MAX_REGION_TILES: usize = 10_000;
