//! Storage-specific error types.

/// Errors that can occur during storage operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend has no fixed extent to allocate (overlays delegate
    /// their extent to the underlying backend).
    #[error("{backend} storage does not support allocation")]
    AllocationUnsupported {
        /// Name of the backend that rejected the call.
        backend: &'static str,
    },
    /// A write addressed a cell outside the allocated extent.
    #[error("coordinate {coord} outside allocated extent {width}x{height}")]
    OutOfRangeAccess {
        /// The offending coordinate, rendered.
        coord: String,
        /// Allocated width.
        width: usize,
        /// Allocated height.
        height: usize,
    },
    /// An allocation was requested with a negative or unaddressable extent.
    #[error("invalid extent {width} x {height}")]
    InvalidExtent {
        /// Requested width, rendered.
        width: String,
        /// Requested height, rendered.
        height: String,
    },
}
