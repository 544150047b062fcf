//! Quadrille: generic 2D boards over pluggable storage.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Quadrille sub-crates. For most users, adding `quadrille` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadrille::prelude::*;
//!
//! let board = StdBoard::from_lines(&["AAB", "ABB"]).unwrap();
//! assert_eq!(board.bounds(), Some(Rectangle::new(Point::new(0, 0), Point::new(2, 1))));
//!
//! let regions = board.find_regions(false).unwrap();
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[0].seed(), Point::new(0, 0));
//!
//! // Copy-on-write: edits land in an overlay, the original is untouched.
//! let mut draft = board.clone().into_overlay();
//! draft.set(Point::new(2, 0), 'A').unwrap();
//! assert_eq!(draft.format(), vec!["AAA", "ABB"]);
//! assert_eq!(board.format(), vec!["AAB", "ABB"]);
//! ```
//!
//! # Generic boards
//!
//! ```rust
//! use quadrille::prelude::*;
//!
//! let config = BoardConfig::<u16, u8>::new(0)
//!     .with_storage_kind(StorageKind::Dense)
//!     .with_decoder(|b| b - b'0')
//!     .with_comparator(|a, b| a == b);
//! let mut board = Board::new(config).unwrap();
//! board.load_lines(&["102", "030"]).unwrap();
//!
//! let changed = board.transform(|_, v| v * 2).unwrap();
//! assert_eq!(changed, 3);
//! assert_eq!(board.get(Point::new(1, 1)), 6);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geom`] | `quadrille-core` | `Scalar`, `Point`, `Rectangle` |
//! | [`storage`] | `quadrille-storage` | `BoardStorage` and the dense, sparse and overlay backends |
//! | [`board`] | `quadrille-board` | `Board`, configuration, ingestion, searches, rune boards |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate scalars, points and rectangles (`quadrille-core`).
pub use quadrille_core as geom;

/// Storage capability trait and backends (`quadrille-storage`).
///
/// [`storage::BoardStorage`] is the seam every backend implements;
/// [`storage::OverlayStorage`] layers copy-on-write edits over any of them.
pub use quadrille_storage as storage;

/// Board facade and spatial queries (`quadrille-board`).
pub use quadrille_board as board;

/// Common imports for typical Quadrille usage.
///
/// ```rust
/// use quadrille::prelude::*;
/// ```
pub mod prelude {
    // Geometry
    pub use quadrille_core::{Point, Rectangle, Scalar};

    // Storage
    pub use quadrille_storage::{
        BoardStorage, DenseStorage, OverlayStorage, SparseStorage, StorageError, StorageKind,
    };

    // Boards
    pub use quadrille_board::{
        Board, BoardConfig, BoardError, ConfigError, Region, RuneBoard, RunePlus, RunePlusBoard,
        StdBoard,
    };
}
