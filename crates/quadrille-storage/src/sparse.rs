//! Hash-indexed sparse storage.
//!
//! [`SparseStorage`] maps coordinates to values with an [`IndexMap`]. The
//! extent is unbounded and an absent key is the unset state, so only cells
//! that were explicitly written take up space or appear in iteration.

use indexmap::IndexMap;

use crate::error::StorageError;
use crate::storage::BoardStorage;
use quadrille_core::{Point, Scalar};

/// Unbounded map-backed storage.
///
/// `allocate` only clears the map; the requested extent is advisory and no
/// space is reserved. `delete` removes the key entirely.
#[derive(Clone, Debug)]
pub struct SparseStorage<T, V> {
    cells: IndexMap<Point<T>, V>,
}

impl<T: Scalar, V: Clone + 'static> SparseStorage<T, V> {
    /// Create an empty sparse backend.
    pub fn new() -> Self {
        Self {
            cells: IndexMap::new(),
        }
    }

    /// Whether a value is recorded at `p`.
    pub fn contains(&self, p: Point<T>) -> bool {
        self.cells.contains_key(&p)
    }

    /// Iterate over recorded `(point, value)` pairs in map order.
    pub fn iter(&self) -> impl Iterator<Item = (Point<T>, &V)> {
        self.cells.iter().map(|(p, v)| (*p, v))
    }
}

impl<T: Scalar, V: Clone + 'static> Default for SparseStorage<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, V: Clone + 'static> FromIterator<(Point<T>, V)> for SparseStorage<T, V> {
    fn from_iter<I: IntoIterator<Item = (Point<T>, V)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar, V: Clone + 'static> BoardStorage<T, V> for SparseStorage<T, V> {
    fn backend_name(&self) -> &'static str {
        "sparse"
    }

    fn allocate(&mut self, _width: T, _height: T, _empty: V) -> Result<(), StorageError> {
        self.cells.clear();
        Ok(())
    }

    fn set(&mut self, p: Point<T>, v: V) {
        self.cells.insert(p, v);
    }

    fn get(&self, p: Point<T>) -> Option<&V> {
        self.cells.get(&p)
    }

    fn delete(&mut self, p: Point<T>) {
        self.cells.swap_remove(&p);
    }

    fn iterate<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        for (p, v) in &self.cells {
            if !visit(*p, v) {
                return false;
            }
        }
        true
    }

    fn iterate_ordered<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        // Materialize and sort; `Point` orders row-major.
        let mut entries: Vec<(Point<T>, &'s V)> = self.cells.iter().map(|(p, v)| (*p, v)).collect();
        entries.sort_unstable_by_key(|&(p, _)| p);
        for (p, v) in entries {
            if !visit(p, v) {
                return false;
            }
        }
        true
    }

    fn copy_to_storage(&self) -> Box<dyn BoardStorage<T, V>> {
        Box::new(self.clone())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
