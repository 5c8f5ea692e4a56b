//! Command-line interface for generating tile combination sheets

use crate::io::configuration::{DEFAULT_EDGE_TABLE, MAX_CELL_X};
use crate::io::error::{ComboError, Result, WithPath};
use crate::io::report::{combinations_json, combinations_path, echo};
use crate::io::tilemap::TileMap;
use crate::layout::packer::{extent, layout_combinations};
use crate::matching::edges::EdgeTable;
use crate::matching::matcher::{Combinations, find_combinations};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
#[command(name = "tilecombo")]
#[command(
    author,
    version,
    about = "Find edge-compatible tile pairs and lay them out as a combination sheet"
)]
/// Command-line arguments for the combination generator
pub struct Cli {
    /// Sprite map JSON describing the source tile region
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Sprite map JSON to write the combination layout to
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Runs one matching and layout pass from input file to output files
pub struct ComboProcessor {
    cli: Cli,
    edge_table: Vec<String>,
}

impl ComboProcessor {
    /// Create a processor using the bundled edge table
    pub fn new(cli: Cli) -> Self {
        Self::with_edge_table(cli, DEFAULT_EDGE_TABLE)
    }

    /// Create a processor with a custom edge table, one descriptor per tile
    pub fn with_edge_table<S: AsRef<str>>(cli: Cli, edge_table: &[S]) -> Self {
        Self {
            cli,
            edge_table: edge_table
                .iter()
                .map(|entry| entry.as_ref().to_owned())
                .collect(),
        }
    }

    /// Location the layout document is written to
    pub const fn output_path(&self) -> &PathBuf {
        &self.cli.output
    }

    /// Location the combinations document is written to
    pub fn combinations_path(&self) -> PathBuf {
        combinations_path(&self.cli.output)
    }

    /// Read the input, match and pack, then write both output documents
    ///
    /// Both documents are staged in temporary files beside their targets and
    /// moved into place only once both are fully written, so a failed run
    /// leaves neither output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or interpreted, if the
    /// edge table does not fit the tile region, or if an output cannot be
    /// written
    pub fn process(&self) -> Result<Combinations> {
        let input_path = &self.cli.input;
        log::info!("Reading tile map {}", input_path.display());
        let tile_map = TileMap::from_json_file(input_path)?;

        let tile_ids = tile_map.tile_ids();
        let edges = EdgeTable::parse(self.edge_table.as_slice())?.assign(&tile_ids)?;

        let combinations = find_combinations(&tile_ids, &edges)?;
        log::info!(
            "Found {} horizontal and {} vertical pairs among {} tiles",
            combinations.horizontal.len(),
            combinations.vertical.len(),
            tile_ids.len()
        );

        let placements = layout_combinations(&combinations, MAX_CELL_X);
        let (columns, rows) = extent(&placements);
        log::info!(
            "Laid out {} tiles over {columns}x{rows} cells",
            placements.len()
        );

        echo(&combinations);

        let output_path = &self.cli.output;
        let combos_path = self.combinations_path();

        let layout = tile_map
            .layout_document(&placements)
            .and_then(|document| serde_json::to_string_pretty(&document))
            .with_path(output_path, "serialize")?;
        let combos = combinations_json(&combinations).with_path(&combos_path, "serialize")?;

        let staged_layout = stage(output_path, &layout)?;
        let staged_combos = stage(&combos_path, &combos)?;

        staged_layout
            .persist(output_path)
            .map_err(|persist_error| persist_error.error)
            .with_path(output_path, "write")?;
        if let Err(persist_error) = staged_combos.persist(&combos_path) {
            if let Err(cleanup_error) = fs::remove_file(output_path) {
                log::warn!(
                    "Could not remove {} after failed write: {cleanup_error}",
                    output_path.display()
                );
            }
            return Err(ComboError::FileSystem {
                path: combos_path,
                operation: "write",
                source: persist_error.error,
            });
        }

        log::info!("Wrote layout to {}", output_path.display());
        log::info!("Wrote combinations to {}", combos_path.display());

        Ok(combinations)
    }
}

// Temporary file beside `path`, removed on drop unless persisted
fn stage(path: &Path, contents: &str) -> Result<NamedTempFile> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(directory).with_path(path, "create")?;
    file.write_all(contents.as_bytes()).with_path(path, "write")?;
    Ok(file)
}
