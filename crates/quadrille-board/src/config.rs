//! Board configuration, validation, and error types.
//!
//! [`BoardConfig`] is the builder-input for constructing a
//! [`Board`](crate::Board). [`validate()`](BoardConfig::validate) checks
//! structural invariants; [`Board::new`](crate::Board::new) calls it before
//! touching storage.

use std::fmt;
use std::sync::Arc;

use quadrille_core::{Rectangle, Scalar};
use quadrille_storage::{BoardStorage, StorageError, StorageKind};

/// Maps one byte of text input to a cell value.
pub type Decoder<V> = Arc<dyn Fn(u8) -> V + Send + Sync>;

/// Value equality used by ingestion, transforms and region discovery.
pub type Comparator<V> = Arc<dyn Fn(&V, &V) -> bool + Send + Sync>;

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while validating a [`BoardConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The comparator does not consider the empty value equal to itself,
    /// so ingestion would write every empty cell.
    #[error("comparator does not treat the empty value as equal to itself")]
    EmptyValueNotSelfEqual,
    /// Dense storage is origin-anchored and cannot cover negative bounds.
    #[error("dense storage cannot cover bounds with low corner {low}")]
    NegativeDenseBounds {
        /// Low corner of the offending bounds.
        low: String,
    },
    /// Pre-allocating dense storage for the configured bounds failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// ── BoardConfig ───────────────────────────────────────────────────

/// Construction options for a board.
///
/// Only the empty value is mandatory. Storage defaults to
/// [`StorageKind::Sparse`]; an explicit backend set with
/// [`with_storage`](Self::with_storage) wins over `storage_kind`.
pub struct BoardConfig<T: Scalar, V: Clone + 'static> {
    /// Value reported for unset cells.
    pub empty: V,
    /// Explicit backend. Takes precedence over `storage_kind`.
    pub storage: Option<Box<dyn BoardStorage<T, V>>>,
    /// Backend to build when `storage` is `None`.
    pub storage_kind: StorageKind,
    /// Initial bounds. Dense storage is pre-allocated to cover them.
    pub bounds: Option<Rectangle<T>>,
    /// Byte decoder for text ingestion.
    pub decoder: Option<Decoder<V>>,
    /// Value comparator.
    pub comparator: Option<Comparator<V>>,
}

impl<T: Scalar, V: Clone + 'static> BoardConfig<T, V> {
    /// A sparse, unbounded configuration with no decoder or comparator.
    pub fn new(empty: V) -> Self {
        Self {
            empty,
            storage: None,
            storage_kind: StorageKind::default(),
            bounds: None,
            decoder: None,
            comparator: None,
        }
    }

    /// Use the given backend instead of building one.
    pub fn with_storage(mut self, storage: impl BoardStorage<T, V> + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Use an already-boxed backend.
    pub fn with_boxed_storage(mut self, storage: Box<dyn BoardStorage<T, V>>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build a backend of the given kind.
    pub fn with_storage_kind(mut self, kind: StorageKind) -> Self {
        self.storage_kind = kind;
        self
    }

    /// Start with bounds set.
    pub fn with_bounds(mut self, bounds: Rectangle<T>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Decode ingested bytes with `decoder`.
    pub fn with_decoder(mut self, decoder: impl Fn(u8) -> V + Send + Sync + 'static) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Compare values with `comparator`.
    pub fn with_comparator(
        mut self,
        comparator: impl Fn(&V, &V) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(cmp) = &self.comparator {
            if !cmp(&self.empty, &self.empty) {
                return Err(ConfigError::EmptyValueNotSelfEqual);
            }
        }
        if self.storage.is_none() && self.storage_kind == StorageKind::Dense {
            if let Some(bounds) = self.bounds {
                let low = bounds.low();
                if low.x < T::zero() || low.y < T::zero() {
                    return Err(ConfigError::NegativeDenseBounds {
                        low: low.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<T: Scalar, V: Clone + fmt::Debug + 'static> fmt::Debug for BoardConfig<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardConfig")
            .field("empty", &self.empty)
            .field(
                "storage",
                &self.storage.as_ref().map(|s| s.backend_name()),
            )
            .field("storage_kind", &self.storage_kind)
            .field("bounds", &self.bounds)
            .field("decoder", &self.decoder.is_some())
            .field("comparator", &self.comparator.is_some())
            .finish()
    }
}
