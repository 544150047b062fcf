//! Board facade for Quadrille.
//!
//! A [`Board`] couples a boxed [`BoardStorage`](quadrille_storage::BoardStorage)
//! backend with an optional bounding rectangle and the value semantics the
//! higher-level operations need:
//!
//! ```text
//! Board<T, V>
//! ├── storage     Box<dyn BoardStorage<T, V>>   dense | sparse | overlay
//! ├── bounds      Bounds::Unset | Bounds::Set(Rectangle)   (canonical on read)
//! ├── empty       V reported for unset cells
//! ├── decoder     Fn(u8) -> V          text ingestion, transform precondition
//! └── comparator  Fn(&V, &V) -> bool   emptiness, change detection, regions
//! ```
//!
//! Operations are grouped by module: ingestion in [`ingest`], rendering in
//! [`format`], 4/8-connected neighbours in [`neighbours`], flood fill and
//! region partitioning in [`search`]. [`RuneBoard`] and [`RunePlusBoard`]
//! preconfigure all of it for character grids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod bounds;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod neighbours;
pub mod rune;
pub mod search;

pub use board::Board;
pub use bounds::Bounds;
pub use config::{BoardConfig, Comparator, ConfigError, Decoder};
pub use error::BoardError;
pub use neighbours::{Neighbours, CARDINAL_OFFSETS, DIAGONAL_OFFSETS};
pub use rune::{RuneBoard, RunePlus, RunePlusBoard, StdBoard, EMPTY_RUNE};
pub use search::{flood_fill, Region};
