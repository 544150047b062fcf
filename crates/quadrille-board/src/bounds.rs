//! Board bounding rectangle bookkeeping.

use quadrille_core::{Point, Rectangle, RowMajorPoints, Scalar};

/// The board's declared area of interest.
///
/// The stored rectangle keeps its corners exactly as supplied; readers
/// canonicalize on access, so writes stay O(1) and never reorder anything.
#[derive(Clone, Copy, Debug, Default)]
pub enum Bounds<T> {
    /// No bounds: every point is considered contained.
    #[default]
    Unset,
    /// A (possibly unordered) rectangle.
    Set(Rectangle<T>),
}

impl<T: Scalar> Bounds<T> {
    /// The canonical rectangle, if bounds are set.
    pub fn rect(&self) -> Option<Rectangle<T>> {
        match self {
            Self::Unset => None,
            Self::Set(r) => Some(r.canonical()),
        }
    }

    /// Whether bounds are set.
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Whether `p` is inside the bounds. Vacuously true when unset.
    pub fn contains(&self, p: Point<T>) -> bool {
        match self {
            Self::Unset => true,
            Self::Set(r) => p.within(r),
        }
    }

    /// Grow to include `p`. Unset bounds become the single point `p`.
    pub fn expand(&mut self, p: Point<T>) {
        *self = match *self {
            Self::Unset => Self::Set(Rectangle::at(p)),
            Self::Set(r) => Self::Set(r.expanded_to(p)),
        };
    }

    /// Row-major walk over every bounded point; `None` when unset.
    pub fn points(&self) -> Option<RowMajorPoints<T>> {
        self.rect().map(|r| r.points())
    }
}
