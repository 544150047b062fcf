//! Backend selection for freshly constructed boards.

use crate::dense::DenseStorage;
use crate::sparse::SparseStorage;
use crate::storage::BoardStorage;
use quadrille_core::Scalar;

/// Which standalone backend to construct.
///
/// Overlays are not listed: they always wrap an existing backend and are
/// built with [`OverlayStorage::new`](crate::OverlayStorage::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// Preallocated row-major array ([`DenseStorage`]).
    Dense,
    /// Hash-indexed map ([`SparseStorage`]).
    #[default]
    Sparse,
}

impl StorageKind {
    /// Construct an empty, unallocated backend of this kind.
    pub fn build<T: Scalar, V: Clone + 'static>(self) -> Box<dyn BoardStorage<T, V>> {
        match self {
            Self::Dense => Box::new(DenseStorage::new()),
            Self::Sparse => Box::new(SparseStorage::new()),
        }
    }
}
