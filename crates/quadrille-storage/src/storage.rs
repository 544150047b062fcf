//! The `BoardStorage` capability trait.

use crate::error::StorageError;
use quadrille_core::{Point, Scalar};

/// Pluggable physical storage behind a board.
///
/// Higher layers depend only on this trait, never on a concrete backend,
/// so any implementation (including an overlay over another overlay) can
/// be substituted without changing board behaviour.
///
/// # Found vs. empty
///
/// [`get`](Self::get) returning `None` means "no value recorded here". It
/// is distinct from `Some(empty)`, a recorded empty value.
///
/// # Visitors
///
/// Both iteration methods call `visit` once per populated coordinate. A
/// visitor returning `false` stops the walk. The methods return `true` when
/// the walk ran to completion and `false` when it was stopped.
///
/// # Object Safety
///
/// Designed for use as `Box<dyn BoardStorage<T, V>>`.
pub trait BoardStorage<T: Scalar, V: Clone + 'static> {
    /// Short backend name, used in errors and log events.
    fn backend_name(&self) -> &'static str;

    /// (Re)initialize the backend for a `width` x `height` area.
    ///
    /// Fixed-size backends reserve space filled with `empty`; unbounded
    /// backends treat the extent as advisory and simply reset. Overlays
    /// reject the call with [`StorageError::AllocationUnsupported`].
    fn allocate(&mut self, width: T, height: T, empty: V) -> Result<(), StorageError>;

    /// Unconditionally write `v` at `p`, overwriting any previous value.
    ///
    /// Fixed-extent backends panic when `p` lies outside the allocated
    /// area; use [`try_set`](Self::try_set) where that can happen.
    fn set(&mut self, p: Point<T>, v: V);

    /// Write `v` at `p`, or report [`StorageError::OutOfRangeAccess`] when
    /// the backend cannot hold a value there.
    ///
    /// Default implementation forwards to [`set`](Self::set), for backends
    /// that accept any coordinate.
    fn try_set(&mut self, p: Point<T>, v: V) -> Result<(), StorageError> {
        self.set(p, v);
        Ok(())
    }

    /// The value recorded at `p`, if any.
    fn get(&self, p: Point<T>) -> Option<&V>;

    /// Remove the value at `p`. See the crate docs for per-backend semantics.
    fn delete(&mut self, p: Point<T>);

    /// [`get`](Self::get) with `default` substituted when nothing is recorded.
    fn get_or_default(&self, p: Point<T>, default: V) -> V {
        self.get(p).cloned().unwrap_or(default)
    }

    /// Visit every populated coordinate in backend-native order.
    fn iterate<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool;

    /// Visit the same population as [`iterate`](Self::iterate), in
    /// row-major order (ascending row, then ascending column).
    ///
    /// Two calls on an unchanged backend yield identical sequences.
    fn iterate_ordered<'s>(&'s self, visit: &mut dyn FnMut(Point<T>, &'s V) -> bool) -> bool;

    /// Deep copy, fully independent of `self`.
    fn copy_to_storage(&self) -> Box<dyn BoardStorage<T, V>>;

    /// Number of populated coordinates.
    ///
    /// Default implementation counts by iteration.
    fn len(&self) -> usize {
        let mut count = 0;
        self.iterate(&mut |_, _| {
            count += 1;
            true
        });
        count
    }

    /// Whether no coordinate is populated.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
