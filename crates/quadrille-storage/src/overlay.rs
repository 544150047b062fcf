//! Copy-on-write overlay storage.
//!
//! [`OverlayStorage`] shadows an underlying backend with a sparse patch
//! layer. Reads consult the overlay first and fall through to the
//! underlying backend on a miss; writes only ever touch the overlay, so the
//! underlying backend is never mutated through this type.
//!
//! Overlays compose: the underlying backend may itself be an overlay.

use std::collections::BTreeMap;

use indexmap::IndexSet;

use crate::error::StorageError;
use crate::sparse::SparseStorage;
use crate::storage::BoardStorage;
use quadrille_core::{Point, Scalar};

/// Sparse patch layer over any other [`BoardStorage`].
///
/// # Delete is a tombstone
///
/// [`delete`](BoardStorage::delete) writes the empty value into the
/// overlay rather than removing anything. A deleted cell therefore keeps
/// iterating, carrying the empty value, and `get` on it returns
/// `Some(empty)` rather than falling through to the underlying value.
/// This differs from both [`SparseStorage`] (key removed) and
/// [`DenseStorage`](crate::DenseStorage) (cell reset in place).
///
/// # Allocation
///
/// An overlay has no extent of its own; [`allocate`](BoardStorage::allocate)
/// always fails with [`StorageError::AllocationUnsupported`].
pub struct OverlayStorage<T: Scalar, V: Clone + 'static> {
    underlying: Box<dyn BoardStorage<T, V>>,
    overlay: SparseStorage<T, V>,
    empty: V,
}

impl<T: Scalar, V: Clone + 'static> OverlayStorage<T, V> {
    /// Wrap `underlying`, using `empty` as the tombstone value for deletes.
    pub fn new(underlying: Box<dyn BoardStorage<T, V>>, empty: V) -> Self {
        tracing::trace!(
            underlying = underlying.backend_name(),
            "created overlay storage"
        );
        Self {
            underlying,
            overlay: SparseStorage::new(),
            empty,
        }
    }

    /// The wrapped backend, as it was before any overlay writes.
    pub fn underlying(&self) -> &dyn BoardStorage<T, V> {
        self.underlying.as_ref()
    }

    /// Number of coordinates patched by the overlay (tombstones included).
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    /// Split into the underlying backend and the overlay patch.
    pub fn into_parts(self) -> (Box<dyn BoardStorage<T, V>>, SparseStorage<T, V>) {
        (self.underlying, self.overlay)
    }
}

impl<T: Scalar, V: Clone + 'static> Clone for OverlayStorage<T, V> {
    fn clone(&self) -> Self {
        Self {
            underlying: self.underlying.copy_to_storage(),
            overlay: self.overlay.clone(),
            empty: self.empty.clone(),
        }
    }
}

impl<T: Scalar, V: Clone + 'static> BoardStorage<T, V> for OverlayStorage<T, V> {
    fn backend_name(&self) -> &'static str {
        "overlay"
    }

    fn allocate(&mut self, _width: T, _height: T, _empty: V) -> Result<(), StorageError> {
        Err(StorageError::AllocationUnsupported {
            backend: self.backend_name(),
        })
    }

    fn set(&mut self, p: Point<T>, v: V) {
        self.overlay.set(p, v);
    }

    fn get(&self, p: Point<T>) -> Option<&V> {
        self.overlay.get(p).or_else(|| self.underlying.get(p))
    }

    fn delete(&mut self, p: Point<T>) {
        self.overlay.set(p, self.empty.clone());
    }

    fn iterate<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        let overlay = &self.overlay;
        let mut consumed: IndexSet<Point<T>> = IndexSet::with_capacity(overlay.len());

        // Underlying population first, shadowed by overlay values.
        let finished = self.underlying.iterate(&mut |p, v| match overlay.get(p) {
            Some(patched) => {
                consumed.insert(p);
                visit(p, patched)
            }
            None => visit(p, v),
        });
        if !finished {
            return false;
        }

        // Then overlay-only coordinates.
        for (p, v) in overlay.iter() {
            if consumed.contains(&p) {
                continue;
            }
            if !visit(p, v) {
                return false;
            }
        }
        true
    }

    fn iterate_ordered<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        // Merged snapshot, overlay entries replacing underlying ones.
        let mut merged: BTreeMap<Point<T>, &'s V> = BTreeMap::new();
        self.underlying.iterate(&mut |p, v| {
            merged.insert(p, v);
            true
        });
        for (p, v) in self.overlay.iter() {
            merged.insert(p, v);
        }
        for (p, v) in merged {
            if !visit(p, v) {
                return false;
            }
        }
        true
    }

    fn copy_to_storage(&self) -> Box<dyn BoardStorage<T, V>> {
        Box::new(self.clone())
    }
}
