//! Preallocated row-major storage.
//!
//! [`DenseStorage`] holds a fixed `width x height` block of cells anchored at
//! the origin, stored contiguously in a single `Vec<V>` and addressed by
//! `y * width + x`. Every cell always holds a value, so every cell iterates.

use std::marker::PhantomData;

use crate::error::StorageError;
use crate::storage::BoardStorage;
use quadrille_core::{Point, Scalar};

/// Fixed-extent array storage.
///
/// Reads outside the allocated extent report "not found". Writes outside it
/// are a caller contract violation: [`BoardStorage::try_set`] reports
/// [`StorageError::OutOfRangeAccess`] and the trait-level `set` panics with
/// that message.
#[derive(Clone, Debug)]
pub struct DenseStorage<T, V> {
    width: usize,
    height: usize,
    cells: Vec<V>,
    /// Fill value from the last `allocate`; `None` until allocated.
    empty: Option<V>,
    _coord: PhantomData<T>,
}

impl<T: Scalar, V: Clone + 'static> DenseStorage<T, V> {
    /// Create an unallocated backend. Nothing is stored until `allocate`.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            empty: None,
            _coord: PhantomData,
        }
    }

    /// Create a backend already allocated to `width x height`.
    pub fn with_extent(width: T, height: T, empty: V) -> Result<Self, StorageError> {
        let mut storage = Self::new();
        storage.allocate(width, height, empty)?;
        Ok(storage)
    }

    /// Allocated `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, p: Point<T>) -> Option<usize> {
        let x = p.x.to_index()?;
        let y = p.y.to_index()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    fn point_at(&self, idx: usize) -> Option<Point<T>> {
        Some(Point::new(
            T::from_index(idx % self.width)?,
            T::from_index(idx / self.width)?,
        ))
    }
}

impl<T: Scalar, V: Clone + 'static> Default for DenseStorage<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, V: Clone + 'static> BoardStorage<T, V> for DenseStorage<T, V> {
    fn backend_name(&self) -> &'static str {
        "dense"
    }

    fn allocate(&mut self, width: T, height: T, empty: V) -> Result<(), StorageError> {
        let invalid = || StorageError::InvalidExtent {
            width: width.to_string(),
            height: height.to_string(),
        };
        let w = width.to_index().ok_or_else(invalid)?;
        let h = height.to_index().ok_or_else(invalid)?;
        let total = w.checked_mul(h).ok_or_else(invalid)?;

        self.cells = vec![empty.clone(); total];
        self.width = w;
        self.height = h;
        self.empty = Some(empty);
        tracing::debug!(width = w, height = h, cells = total, "allocated dense storage");
        Ok(())
    }

    fn set(&mut self, p: Point<T>, v: V) {
        if let Err(e) = self.try_set(p, v) {
            panic!("{e}");
        }
    }

    fn try_set(&mut self, p: Point<T>, v: V) -> Result<(), StorageError> {
        let idx = self.index(p).ok_or_else(|| StorageError::OutOfRangeAccess {
            coord: p.to_string(),
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = v;
        Ok(())
    }

    fn get(&self, p: Point<T>) -> Option<&V> {
        self.index(p).map(|idx| &self.cells[idx])
    }

    fn delete(&mut self, p: Point<T>) {
        if let (Some(idx), Some(empty)) = (self.index(p), self.empty.as_ref()) {
            self.cells[idx] = empty.clone();
        }
    }

    fn iterate<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        for (idx, v) in self.cells.iter().enumerate() {
            let Some(p) = self.point_at(idx) else {
                continue;
            };
            if !visit(p, v) {
                return false;
            }
        }
        true
    }

    fn iterate_ordered<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool {
        // Storage order is already row-major.
        self.iterate(visit)
    }

    fn copy_to_storage(&self) -> Box<dyn BoardStorage<T, V>> {
        Box::new(self.clone())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
