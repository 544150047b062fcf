//! Error types for board operations.

use crate::config::ConfigError;
use quadrille_storage::StorageError;

/// Errors arising from board ingestion, transforms and region queries.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// Ingestion or a transform was attempted without a byte decoder.
    #[error("board conversion function not configured")]
    ConversionFunctionMissing,
    /// An operation needing value equality ran without a comparator.
    #[error("board comparison function not configured")]
    ComparisonFunctionMissing,
    /// Ingested rows do not all share the first row's width.
    #[error("row {row} has length {found}, expected {expected}")]
    NonUniformRowLength {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A row or column index does not fit the board's coordinate type.
    #[error("index {index} does not fit the board coordinate type")]
    CoordinateOverflow {
        /// The index that could not be represented.
        index: usize,
    },
    /// The storage backend rejected the operation.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The board configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Reading line input failed.
    #[error("failed to read board input: {0}")]
    Io(#[from] std::io::Error),
}
