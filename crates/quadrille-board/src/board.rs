//! The [`Board`] facade: a storage backend plus bounds and value semantics.

use std::fmt;
use std::hash::Hash;

use quadrille_core::{Point, Rectangle, Scalar};
use quadrille_storage::{content_hash, BoardStorage, OverlayStorage, StorageError, StorageKind};

use crate::bounds::Bounds;
use crate::config::{BoardConfig, Comparator, ConfigError, Decoder};
use crate::error::BoardError;

/// A 2D board of `V` values addressed by `Point<T>`.
///
/// The board owns one boxed [`BoardStorage`] backend, an optional bounding
/// rectangle, the empty value reported for unset cells, and the decoder and
/// comparator used by ingestion, transforms and region discovery.
///
/// Cloning a board deep-copies its storage (including every overlay layer).
pub struct Board<T: Scalar, V: Clone + 'static> {
    pub(crate) storage: Box<dyn BoardStorage<T, V>>,
    pub(crate) bounds: Bounds<T>,
    pub(crate) empty: V,
    pub(crate) decoder: Option<Decoder<V>>,
    pub(crate) comparator: Option<Comparator<V>>,
}

impl<T: Scalar, V: Clone + 'static> Board<T, V> {
    /// Build a board from a validated configuration.
    ///
    /// Dense storage with configured bounds is pre-allocated to cover
    /// everything from the origin through the bounds' high corner.
    pub fn new(config: BoardConfig<T, V>) -> Result<Self, ConfigError> {
        config.validate()?;
        let BoardConfig {
            empty,
            storage,
            storage_kind,
            bounds,
            decoder,
            comparator,
        } = config;

        let storage = match storage {
            Some(storage) => storage,
            None => {
                let mut storage = storage_kind.build();
                if let (StorageKind::Dense, Some(rect)) = (storage_kind, bounds) {
                    let high = rect.high();
                    let (Some(width), Some(height)) = (high.x.step(1), high.y.step(1)) else {
                        return Err(ConfigError::Storage(StorageError::InvalidExtent {
                            width: high.x.to_string(),
                            height: high.y.to_string(),
                        }));
                    };
                    storage.allocate(width, height, empty.clone())?;
                }
                storage
            }
        };

        let board = Self::from_parts(
            storage,
            bounds.map_or(Bounds::Unset, Bounds::Set),
            empty,
            decoder,
            comparator,
        );
        tracing::debug!(
            backend = board.storage.backend_name(),
            bounds = ?board.bounds.rect(),
            "constructed board"
        );
        Ok(board)
    }

    /// Assemble a board without validation.
    pub(crate) fn from_parts(
        storage: Box<dyn BoardStorage<T, V>>,
        bounds: Bounds<T>,
        empty: V,
        decoder: Option<Decoder<V>>,
        comparator: Option<Comparator<V>>,
    ) -> Self {
        Self {
            storage,
            bounds,
            empty,
            decoder,
            comparator,
        }
    }

    // ── Cell access ───────────────────────────────────────────────

    /// The value reported for unset cells.
    pub fn empty_value(&self) -> &V {
        &self.empty
    }

    /// Read-only access to the backend.
    pub fn storage(&self) -> &dyn BoardStorage<T, V> {
        self.storage.as_ref()
    }

    /// The cell value, or the empty value when unset.
    pub fn get(&self, p: Point<T>) -> V {
        self.storage.get_or_default(p, self.empty.clone())
    }

    /// The stored value, or `None` when unset.
    pub fn get_raw(&self, p: Point<T>) -> Option<&V> {
        self.storage.get(p)
    }

    /// Write a cell. Bounds are left unchanged.
    ///
    /// Fails with [`StorageError::OutOfRangeAccess`] when the backend has
    /// no room at `p`, as for a dense board outside its allocated area.
    pub fn set(&mut self, p: Point<T>, v: V) -> Result<(), BoardError> {
        self.storage.try_set(p, v)?;
        Ok(())
    }

    /// Delete a cell using the backend's delete semantics.
    pub fn clear(&mut self, p: Point<T>) {
        self.storage.delete(p);
    }

    /// Write a cell and grow the bounds to include it.
    ///
    /// The bounds are untouched when the write is rejected.
    pub fn set_and_expand_bounds(&mut self, p: Point<T>, v: V) -> Result<(), BoardError> {
        self.storage.try_set(p, v)?;
        self.bounds.expand(p);
        Ok(())
    }

    /// Number of populated cells as reported by the backend.
    pub fn population(&self) -> usize {
        self.storage.len()
    }

    // ── Bounds ────────────────────────────────────────────────────

    /// Replace the bounds. Corners may be given in any order.
    pub fn set_bounds(&mut self, rect: Rectangle<T>) {
        self.bounds = Bounds::Set(rect);
    }

    /// Remove the bounds.
    pub fn clear_bounds(&mut self) {
        self.bounds = Bounds::Unset;
    }

    /// The canonical bounds, or `None` when unset.
    pub fn bounds(&self) -> Option<Rectangle<T>> {
        self.bounds.rect()
    }

    /// Grow the bounds to include `p`.
    pub fn expand_bounds(&mut self, p: Point<T>) {
        self.bounds.expand(p);
    }

    /// Whether `p` lies inside the bounds. Always true when unset.
    pub fn contains(&self, p: Point<T>) -> bool {
        self.bounds.contains(p)
    }

    /// Row-major index of `p` within the bounds, relative to their low
    /// corner. `None` when bounds are unset, `p` is outside them, or the
    /// index does not fit in `T`.
    pub fn serial(&self, p: Point<T>) -> Option<T> {
        let rect = self.bounds.rect()?;
        if !p.within(&rect) {
            return None;
        }
        let low = rect.low();
        let (dx, dy) = (p.x.checked_sub(&low.x)?, p.y.checked_sub(&low.y)?);
        dy.checked_mul(&rect.width()?)?.checked_add(&dx)
    }

    // ── Iteration ─────────────────────────────────────────────────

    /// Visit populated cells in backend order. Returns `false` when the
    /// visitor stopped early.
    pub fn iterate<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Point<T>, &V) -> bool,
    {
        self.storage.iterate(&mut visit)
    }

    /// Visit populated cells in row-major order.
    pub fn iterate_ordered<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Point<T>, &V) -> bool,
    {
        self.storage.iterate_ordered(&mut visit)
    }

    /// Visit every point inside the bounds in row-major order, populated
    /// or not. Visits nothing when bounds are unset.
    pub fn iterate_bounds<F>(&self, visit: F) -> bool
    where
        F: FnMut(Point<T>) -> bool,
    {
        match self.bounds.points() {
            Some(mut points) => points.all(visit),
            None => true,
        }
    }

    // ── Transform ─────────────────────────────────────────────────

    /// Apply `f` to every populated cell as one batch.
    ///
    /// All replacement values are computed against the pre-transform state
    /// before any is written, and only values the comparator reports as
    /// changed are written back. Returns the number of cells written.
    pub fn transform<F>(&mut self, mut f: F) -> Result<usize, BoardError>
    where
        F: FnMut(Point<T>, &V) -> V,
    {
        if self.decoder.is_none() {
            return Err(BoardError::ConversionFunctionMissing);
        }
        let cmp = self.comparator()?.clone();

        let mut visited = 0usize;
        let mut changes: Vec<(Point<T>, V)> = Vec::new();
        self.storage.iterate(&mut |p, v| {
            visited += 1;
            let next = f(p, v);
            if !cmp(v, &next) {
                changes.push((p, next));
            }
            true
        });

        let changed = changes.len();
        for (p, v) in changes {
            self.storage.try_set(p, v)?;
        }
        tracing::debug!(visited, changed, "applied board transform");
        Ok(changed)
    }

    // ── Copies ────────────────────────────────────────────────────

    /// Wrap the current storage in a copy-on-write overlay. Later writes go
    /// to the overlay and leave the previous storage untouched.
    pub fn into_overlay(self) -> Self {
        let Board {
            storage,
            bounds,
            empty,
            decoder,
            comparator,
        } = self;
        tracing::debug!(underlying = storage.backend_name(), "layered overlay onto board");
        let overlay = OverlayStorage::new(storage, empty.clone());
        Self::from_parts(Box::new(overlay), bounds, empty, decoder, comparator)
    }

    pub(crate) fn comparator(&self) -> Result<&Comparator<V>, BoardError> {
        self.comparator
            .as_ref()
            .ok_or(BoardError::ComparisonFunctionMissing)
    }
}

impl<T: Scalar, V: Clone + Hash + 'static> Board<T, V> {
    /// FNV-1a digest of the populated cells, taken in row-major order so
    /// write order and backend do not affect it.
    pub fn content_hash(&self) -> u64 {
        content_hash(self.storage.as_ref())
    }
}

impl<T: Scalar, V: Clone + 'static> Clone for Board<T, V> {
    fn clone(&self) -> Self {
        Self::from_parts(
            self.storage.copy_to_storage(),
            self.bounds,
            self.empty.clone(),
            self.decoder.clone(),
            self.comparator.clone(),
        )
    }
}

impl<T: Scalar, V: Clone + fmt::Debug + 'static> fmt::Debug for Board<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("backend", &self.storage.backend_name())
            .field("bounds", &self.bounds.rect())
            .field("empty", &self.empty)
            .field("population", &self.storage.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrille_storage::{DenseStorage, SparseStorage};
    use quadrille_test_utils::{RecordingStorage, StorageOp};

    fn p(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    fn char_board() -> Board<i32, char> {
        Board::new(
            BoardConfig::new('.')
                .with_decoder(|b| b as char)
                .with_comparator(|a, b| a == b),
        )
        .unwrap()
    }

    #[test]
    fn unset_cells_read_as_empty() {
        let board = char_board();
        assert_eq!(board.get(p(3, 3)), '.');
        assert_eq!(board.get_raw(p(3, 3)), None);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn set_leaves_bounds_alone() {
        let mut board = char_board();
        board.set(p(5, 5), 'x').unwrap();
        assert_eq!(board.get(p(5, 5)), 'x');
        assert!(board.bounds().is_none());
    }

    #[test]
    fn set_and_expand_grows_bounds() {
        let mut board = char_board();
        board.set_and_expand_bounds(p(2, 1), 'a').unwrap();
        board.set_and_expand_bounds(p(-1, 4), 'b').unwrap();
        assert_eq!(board.bounds(), Some(Rectangle::new(p(-1, 1), p(2, 4))));
        assert!(board.contains(p(0, 2)));
        assert!(!board.contains(p(3, 2)));
    }

    #[test]
    fn unset_bounds_contain_everything() {
        let board = char_board();
        assert!(board.contains(p(i32::MAX, i32::MIN)));
        let mut visited = 0;
        assert!(board.iterate_bounds(|_| {
            visited += 1;
            true
        }));
        assert_eq!(visited, 0);
    }

    #[test]
    fn bounds_are_canonical_when_read() {
        let mut board = char_board();
        board.set_bounds(Rectangle::new(p(3, 3), p(0, 0)));
        let rect = board.bounds().unwrap();
        assert_eq!(rect.p1, p(0, 0));
        assert_eq!(rect.p2, p(3, 3));
        board.clear_bounds();
        assert!(board.bounds().is_none());
    }

    #[test]
    fn serial_is_relative_to_low_corner() {
        let mut board = char_board();
        assert_eq!(board.serial(p(0, 0)), None);
        board.set_bounds(Rectangle::new(p(10, 20), p(12, 22)));
        assert_eq!(board.serial(p(10, 20)), Some(0));
        assert_eq!(board.serial(p(12, 20)), Some(2));
        assert_eq!(board.serial(p(11, 21)), Some(4));
        assert_eq!(board.serial(p(12, 22)), Some(8));
        assert_eq!(board.serial(p(13, 22)), None);
    }

    #[test]
    fn serial_with_unrepresentable_span_is_none() {
        let mut board: Board<i8, char> = Board::new(BoardConfig::new('.')).unwrap();
        board.set_bounds(Rectangle::new(Point::new(-100, 0), Point::new(100, 1)));
        assert_eq!(board.serial(Point::new(0, 0)), None);
        assert_eq!(board.serial(Point::new(100, 1)), None);

        board.set_bounds(Rectangle::new(Point::new(-5, 0), Point::new(5, 1)));
        assert_eq!(board.serial(Point::new(-5, 0)), Some(0));
        assert_eq!(board.serial(Point::new(5, 1)), Some(21));
    }

    #[test]
    fn unallocated_dense_board_rejects_writes() {
        let mut board: Board<i32, char> =
            Board::new(BoardConfig::new('.').with_storage_kind(StorageKind::Dense)).unwrap();
        let err = board.set(p(0, 0), 'x').unwrap_err();
        assert!(
            matches!(
                err,
                BoardError::Storage(StorageError::OutOfRangeAccess {
                    width: 0,
                    height: 0,
                    ..
                })
            ),
            "{err}"
        );
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn dense_expand_past_allocation_keeps_bounds() {
        let mut board = Board::new(
            BoardConfig::new('.')
                .with_storage_kind(StorageKind::Dense)
                .with_decoder(|b| b as char)
                .with_comparator(|a, b| a == b),
        )
        .unwrap();
        board.load_lines(&["ab", "cd"]).unwrap();
        let before = board.bounds();

        let err = board.set_and_expand_bounds(p(2, 0), 'e').unwrap_err();
        assert!(matches!(
            err,
            BoardError::Storage(StorageError::OutOfRangeAccess { .. })
        ));
        assert_eq!(board.bounds(), before);
        assert_eq!(board.get(p(2, 0)), '.');

        board.set_and_expand_bounds(p(1, 1), 'z').unwrap();
        assert_eq!(board.get(p(1, 1)), 'z');
        assert_eq!(board.bounds(), before);
    }

    #[test]
    fn iterate_bounds_walks_row_major_and_stops() {
        let mut board = char_board();
        board.set_bounds(Rectangle::new(p(0, 0), p(1, 1)));
        let mut seen = Vec::new();
        assert!(board.iterate_bounds(|q| {
            seen.push(q);
            true
        }));
        assert_eq!(seen, vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1)]);

        let mut count = 0;
        assert!(!board.iterate_bounds(|_| {
            count += 1;
            count < 2
        }));
        assert_eq!(count, 2);
    }

    #[test]
    fn transform_reads_pre_transform_state() {
        // Swap every pair of horizontally adjacent cells; if writes leaked
        // into reads, the second cell would see the first cell's new value.
        let mut board = char_board();
        board.set(p(0, 0), 'a').unwrap();
        board.set(p(1, 0), 'b').unwrap();
        let snapshot = board.clone();
        let changed = board
            .transform(|q, _| {
                let partner = if q.x == 0 { p(1, 0) } else { p(0, 0) };
                snapshot.get(partner)
            })
            .unwrap();
        assert_eq!(changed, 2);
        assert_eq!(board.get(p(0, 0)), 'b');
        assert_eq!(board.get(p(1, 0)), 'a');
    }

    #[test]
    fn transform_writes_only_after_iteration_finishes() {
        let storage = RecordingStorage::new(SparseStorage::new());
        let log = storage.log();
        let mut board = Board::new(
            BoardConfig::new('.')
                .with_storage(storage)
                .with_decoder(|b| b as char)
                .with_comparator(|a, b| a == b),
        )
        .unwrap();
        for x in 0..4 {
            board.set(p(x, 0), 'a').unwrap();
        }
        log.take();

        let changed = board.transform(|_, v| v.to_ascii_uppercase()).unwrap();
        assert_eq!(changed, 4);
        assert_eq!(board.get(p(3, 0)), 'A');

        let ops = log.take();
        assert_eq!(ops.first(), Some(&StorageOp::IterateBegin));
        let end = ops
            .iter()
            .position(|op| *op == StorageOp::IterateEnd)
            .unwrap();
        assert!(ops[..end].iter().all(|op| !matches!(op, StorageOp::Set(_))));
        let writes = ops[end + 1..]
            .iter()
            .filter(|op| matches!(op, StorageOp::Set(_)))
            .count();
        assert_eq!(writes, 4);
    }

    #[test]
    fn transform_counts_only_changed_cells() {
        let mut board = char_board();
        board.set(p(0, 0), 'a').unwrap();
        board.set(p(1, 0), 'B').unwrap();
        let changed = board.transform(|_, v| v.to_ascii_uppercase()).unwrap();
        assert_eq!(changed, 1);
    }

    #[test]
    fn transform_requires_decoder_and_comparator() {
        let mut bare: Board<i32, char> = Board::new(BoardConfig::new('.')).unwrap();
        assert!(matches!(
            bare.transform(|_, v| *v),
            Err(BoardError::ConversionFunctionMissing)
        ));
        let mut no_cmp: Board<i32, char> =
            Board::new(BoardConfig::new('.').with_decoder(|b| b as char)).unwrap();
        assert!(matches!(
            no_cmp.transform(|_, v| *v),
            Err(BoardError::ComparisonFunctionMissing)
        ));
    }

    #[test]
    fn clone_is_deep() {
        let mut board = char_board();
        board.set_and_expand_bounds(p(0, 0), 'a').unwrap();
        let mut copy = board.clone();
        copy.set(p(0, 0), 'z').unwrap();
        copy.set_and_expand_bounds(p(4, 4), 'q').unwrap();
        assert_eq!(board.get(p(0, 0)), 'a');
        assert_eq!(board.bounds(), Some(Rectangle::at(p(0, 0))));
        assert_ne!(board.content_hash(), copy.content_hash());
    }

    #[test]
    fn overlay_preserves_base_snapshot() {
        let mut board = char_board();
        board.set(p(0, 0), 'a').unwrap();
        board.set(p(1, 0), 'b').unwrap();
        let base_hash = board.content_hash();
        let snapshot = board.clone();

        let mut layered = board.into_overlay();
        assert_eq!(layered.storage().backend_name(), "overlay");
        assert_eq!(layered.content_hash(), base_hash);
        layered.set(p(0, 0), 'z').unwrap();
        layered.clear(p(1, 0));

        assert_eq!(layered.get(p(0, 0)), 'z');
        assert_eq!(layered.get(p(1, 0)), '.');
        assert_eq!(snapshot.get(p(0, 0)), 'a');
        assert_eq!(snapshot.content_hash(), base_hash);
    }

    #[test]
    fn dense_config_allocates_for_bounds() {
        let board: Board<i32, char> = Board::new(
            BoardConfig::new('.')
                .with_storage_kind(StorageKind::Dense)
                .with_bounds(Rectangle::new(p(1, 1), p(3, 2))),
        )
        .unwrap();
        // Covers origin through (3, 2): 4 x 3 cells.
        assert_eq!(board.population(), 12);
        assert_eq!(board.get(p(0, 0)), '.');
        assert_eq!(board.bounds(), Some(Rectangle::new(p(1, 1), p(3, 2))));
    }

    #[test]
    fn new_rejects_invalid_config() {
        let err = Board::<i32, char>::new(BoardConfig::new('.').with_comparator(|_, _| false))
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyValueNotSelfEqual);
    }

    #[test]
    fn explicit_backend_is_used() {
        let board: Board<u8, u8> = Board::new(
            BoardConfig::new(0).with_storage(DenseStorage::with_extent(2, 2, 0).unwrap()),
        )
        .unwrap();
        assert_eq!(board.storage().backend_name(), "dense");
        assert_eq!(board.population(), 4);
    }

    #[test]
    fn debug_summarizes() {
        let mut board = char_board();
        board.set_and_expand_bounds(p(1, 1), 'x').unwrap();
        let text = format!("{board:?}");
        assert!(text.contains("sparse"), "{text}");
        assert!(text.contains("population: 1"), "{text}");
    }
}
