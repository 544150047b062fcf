//! Storage backends for Quadrille boards.
//!
//! Every board reads and writes its cells through the [`BoardStorage`]
//! capability trait. Three backends implement it with different trade-offs:
//!
//! ```text
//! BoardStorage (trait object, Box<dyn BoardStorage<T, V>>)
//! ├── DenseStorage    fixed width x height Vec, row-major, origin-anchored
//! ├── SparseStorage   IndexMap<Point, V>, unbounded, absent key = unset
//! └── OverlayStorage  sparse patch layer over any boxed BoardStorage
//!     └── underlying: Box<dyn BoardStorage>   (may itself be an overlay)
//! ```
//!
//! # Delete semantics
//!
//! - **Dense:** the cell is overwritten with the allocation's empty value.
//! - **Sparse:** the key is removed; the cell no longer iterates.
//! - **Overlay:** the empty value is written into the overlay as a
//!   tombstone; the cell keeps iterating (with the empty value).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod error;
pub mod hash;
pub mod kind;
pub mod overlay;
pub mod sparse;
pub mod storage;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseStorage;
pub use error::StorageError;
pub use hash::content_hash;
pub use kind::StorageKind;
pub use overlay::OverlayStorage;
pub use sparse::SparseStorage;
pub use storage::BoardStorage;
