/// Grid packing of matched pairs
pub mod packer;

pub use packer::{Cursor, Orientation, Placement, layout_combinations, pack};
