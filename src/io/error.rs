//! Error types and context management for tile combination runs

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tile combination operations
#[derive(Debug)]
pub enum ComboError {
    /// Edge table does not have one descriptor per tile
    EdgeTableMismatch {
        /// Number of tiles in the working set
        expected: usize,
        /// Number of descriptors supplied
        actual: usize,
    },

    /// Edge descriptor string could not be parsed
    InvalidEdgeDescriptor {
        /// Position of the descriptor in the edge table
        index: usize,
        /// The offending descriptor text
        descriptor: String,
        /// Explanation of why the descriptor is invalid
        reason: String,
    },

    /// The same tile identifier appears more than once in the working set
    DuplicateTile {
        /// Repeated tile identifier
        tile: u32,
    },

    /// A tile in the working set has no edge descriptor
    MissingEdges {
        /// Tile identifier without a descriptor
        tile: u32,
    },

    /// Tile map document is missing fields or holds unexpected values
    MalformedInput {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// Input file is not valid JSON
    InvalidJson {
        /// Path to the input file
        path: PathBuf,
        /// Underlying parser error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output document could not be serialized
    Serialization {
        /// Path the document was destined for
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

/// Coarse classification of [`ComboError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The edge table does not fit the tile set
    Configuration,
    /// The input document cannot be interpreted
    MalformedInput,
    /// Reading or writing files failed
    Io,
}

impl ComboError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EdgeTableMismatch { .. }
            | Self::InvalidEdgeDescriptor { .. }
            | Self::DuplicateTile { .. }
            | Self::MissingEdges { .. } => ErrorKind::Configuration,
            Self::MalformedInput { .. } | Self::InvalidJson { .. } => ErrorKind::MalformedInput,
            Self::FileSystem { .. } | Self::Serialization { .. } => ErrorKind::Io,
        }
    }
}

impl fmt::Display for ComboError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeTableMismatch { expected, actual } => {
                write!(
                    f,
                    "Edge table size mismatch: {actual} descriptors for {expected} tiles"
                )
            }
            Self::InvalidEdgeDescriptor {
                index,
                descriptor,
                reason,
            } => {
                write!(
                    f,
                    "Invalid edge descriptor '{descriptor}' at index {index}: {reason}"
                )
            }
            Self::DuplicateTile { tile } => {
                write!(f, "Tile {tile} appears more than once in the tile set")
            }
            Self::MissingEdges { tile } => {
                write!(f, "No edge descriptor for tile {tile}")
            }
            Self::MalformedInput { reason } => {
                write!(f, "Malformed tile map: {reason}")
            }
            Self::InvalidJson { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize output for '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ComboError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson { source, .. } | Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile combination results
pub type Result<T> = std::result::Result<T, ComboError>;

/// Attaches the file and operation to errors raised by path-based operations
pub trait WithPath<T> {
    /// Wrap the error together with the path it concerns
    ///
    /// # Errors
    ///
    /// Propagates the underlying error converted into a [`ComboError`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;

    /// Wrap a decoding failure as invalid input at `path`
    ///
    /// # Errors
    ///
    /// Propagates the underlying error converted into a [`ComboError`]
    fn as_input(self, path: &Path) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ComboError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }

    fn as_input(self, path: &Path) -> Result<T> {
        self.with_path(path, "read")
    }
}

impl<T> WithPath<T> for std::result::Result<T, serde_json::Error> {
    fn with_path(self, path: &Path, _operation: &'static str) -> Result<T> {
        self.map_err(|source| ComboError::Serialization {
            path: path.to_path_buf(),
            source,
        })
    }

    fn as_input(self, path: &Path) -> Result<T> {
        self.map_err(|source| ComboError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Create a malformed input error
pub fn malformed_input(reason: &impl ToString) -> ComboError {
    ComboError::MalformedInput {
        reason: reason.to_string(),
    }
}

/// Create an invalid edge descriptor error
pub fn invalid_descriptor(
    index: usize,
    descriptor: &impl ToString,
    reason: &impl ToString,
) -> ComboError {
    ComboError::InvalidEdgeDescriptor {
        index,
        descriptor: descriptor.to_string(),
        reason: reason.to_string(),
    }
}
