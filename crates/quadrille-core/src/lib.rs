//! Core coordinate types for Quadrille boards.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! discrete coordinate geometry every other Quadrille crate builds on:
//!
//! - [`Scalar`]: the integer type a board is addressed by
//! - [`Point`]: a two-axis coordinate, ordered row-major
//! - [`Rectangle`]: an axis-aligned box given by two (possibly unordered) corners

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod point;
pub mod rect;
pub mod scalar;

pub use point::Point;
pub use rect::{Rectangle, RowMajorPoints};
pub use scalar::Scalar;
