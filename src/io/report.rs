//! Combination artifact and console echo of the accepted pairs

use std::path::{Path, PathBuf};

use crate::io::configuration::{COMBOS_EXTENSION, COMBOS_SUFFIX};
use crate::matching::matcher::{Combinations, Pair};

/// Render pairs as `[(a, b), (c, d)]`
pub fn render_pairs(pairs: &[Pair]) -> String {
    let rendered: Vec<String> = pairs.iter().map(ToString::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

/// Print both pair lists for human inspection
// Allow print for the pair listing, which is the tool's console output
#[allow(clippy::print_stdout)]
pub fn echo(combinations: &Combinations) {
    println!("horizontal: {}", render_pairs(&combinations.horizontal));
    println!("vertical: {}", render_pairs(&combinations.vertical));
}

/// Serialize the pair lists as a `{"horizontal": .., "vertical": ..}` document
///
/// # Errors
///
/// Returns the serializer error if the document cannot be produced
pub fn combinations_json(combinations: &Combinations) -> serde_json::Result<String> {
    serde_json::to_string_pretty(combinations)
}

/// Location of the combinations artifact written alongside `output_path`
pub fn combinations_path(output_path: &Path) -> PathBuf {
    let stem = output_path.file_stem().unwrap_or_default();
    let combos_name = format!(
        "{}{COMBOS_SUFFIX}.{COMBOS_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = output_path.parent() {
        parent.join(combos_name)
    } else {
        PathBuf::from(combos_name)
    }
}
