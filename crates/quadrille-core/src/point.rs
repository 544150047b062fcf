//! Two-axis discrete coordinates.

use crate::rect::Rectangle;
use crate::scalar::Scalar;
use num_traits::Signed;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

/// A coordinate on a board: column `x`, row `y`.
///
/// Points are plain values. Equality is component-wise; ordering is
/// row-major (`y` first, then `x`), which is the order every deterministic
/// board walk uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point<T> {
    /// Column.
    pub x: T,
    /// Row.
    pub y: T,
}

impl<T: Scalar> Point<T> {
    /// Create a point from a column and a row.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Component-wise difference `self - other`.
    pub fn delta(self, other: Self) -> Self {
        self - other
    }

    /// The point shifted by a small step on each axis.
    ///
    /// Returns `None` if either coordinate leaves the scalar's range.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self::new(self.x.step(dx)?, self.y.step(dy)?))
    }

    /// Whether this point lies inside `rect` (inclusive on both corners).
    ///
    /// The rectangle's corners may be given in either order.
    pub fn within(self, rect: &Rectangle<T>) -> bool {
        let lo = rect.low();
        let hi = rect.high();
        lo.x <= self.x && self.x <= hi.x && lo.y <= self.y && self.y <= hi.y
    }
}

impl<T: Scalar + Signed> Point<T> {
    /// The point mirrored through the origin.
    pub fn negate(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Ord for Point<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl<T: Scalar> PartialOrd for Point<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
