//! Axis-aligned rectangles over discrete coordinates.
//!
//! A [`Rectangle`] keeps its two corners exactly as the caller supplied
//! them. Every operation that interprets the geometry canonicalizes first,
//! so `Rectangle::new((3, 3), (0, 0))` and `Rectangle::new((0, 0), (3, 3))`
//! describe (and compare equal as) the same box.
//!
//! Spans are inclusive: a rectangle from `(0, 0)` to `(2, 1)` is 3 wide and
//! 2 high. A rectangle whose corners coincide is *empty*; it is the value
//! returned by [`Rectangle::intersection`] for disjoint inputs.

use crate::point::Point;
use crate::scalar::Scalar;
use std::hash::{Hash, Hasher};

/// An axis-aligned box defined by two corner points.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rectangle<T> {
    /// First corner, as supplied.
    pub p1: Point<T>,
    /// Second corner, as supplied.
    pub p2: Point<T>,
}

impl<T: Scalar> Rectangle<T> {
    /// Create a rectangle from two corners in any order.
    pub const fn new(p1: Point<T>, p2: Point<T>) -> Self {
        Self { p1, p2 }
    }

    /// A `width` x `height` rectangle anchored at the origin.
    ///
    /// Returns `None` if either extent is below one.
    pub fn from_extent(width: T, height: T) -> Option<Self> {
        if width < T::one() || height < T::one() {
            return None;
        }
        Some(Self::new(
            Point::origin(),
            Point::new(width - T::one(), height - T::one()),
        ))
    }

    /// A degenerate rectangle covering the single point `p`.
    pub fn at(p: Point<T>) -> Self {
        Self::new(p, p)
    }

    /// The same rectangle with `p1 <= p2` on both axes.
    pub fn canonical(&self) -> Self {
        Self::new(self.low(), self.high())
    }

    /// Component-wise minimum corner.
    pub fn low(&self) -> Point<T> {
        Point::new(self.p1.x.min(self.p2.x), self.p1.y.min(self.p2.y))
    }

    /// Component-wise maximum corner.
    pub fn high(&self) -> Point<T> {
        Point::new(self.p1.x.max(self.p2.x), self.p1.y.max(self.p2.y))
    }

    /// Inclusive span on the x axis, or `None` if it does not fit in `T`.
    pub fn width(&self) -> Option<T> {
        span(self.low().x, self.high().x)
    }

    /// Inclusive span on the y axis, or `None` if it does not fit in `T`.
    pub fn height(&self) -> Option<T> {
        span(self.low().y, self.high().y)
    }

    /// `width * height`, or `None` on overflow.
    pub fn area(&self) -> Option<T> {
        self.width()?.checked_mul(&self.height()?)
    }

    /// True when both corners coincide.
    pub fn is_empty(&self) -> bool {
        self.p1 == self.p2
    }

    /// Whether `p` lies inside this rectangle.
    pub fn contains_point(&self, p: Point<T>) -> bool {
        p.within(self)
    }

    /// Whether `other` lies entirely inside this rectangle.
    ///
    /// An empty rectangle is contained by everything and contains nothing
    /// but other empty rectangles.
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let (a_lo, a_hi) = (self.low(), self.high());
        let (b_lo, b_hi) = (other.low(), other.high());
        a_lo.x <= b_lo.x && b_hi.x <= a_hi.x && a_lo.y <= b_lo.y && b_hi.y <= a_hi.y
    }

    /// Whether the two rectangles share at least one cell.
    ///
    /// Always false when either side is empty.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_lo, a_hi) = (self.low(), self.high());
        let (b_lo, b_hi) = (other.low(), other.high());
        a_lo.x <= b_hi.x && b_lo.x <= a_hi.x && a_lo.y <= b_hi.y && b_lo.y <= a_hi.y
    }

    /// The smallest rectangle containing both. Empty operands are ignored.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let (a_lo, a_hi) = (self.low(), self.high());
        let (b_lo, b_hi) = (other.low(), other.high());
        Self::new(
            Point::new(a_lo.x.min(b_lo.x), a_lo.y.min(b_lo.y)),
            Point::new(a_hi.x.max(b_hi.x), a_hi.y.max(b_hi.y)),
        )
    }

    /// The largest rectangle contained by both.
    ///
    /// Disjoint inputs yield the zero rectangle, which is empty.
    pub fn intersection(&self, other: &Self) -> Self {
        let (a_lo, a_hi) = (self.low(), self.high());
        let (b_lo, b_hi) = (other.low(), other.high());
        let lo = Point::new(a_lo.x.max(b_lo.x), a_lo.y.max(b_lo.y));
        let hi = Point::new(a_hi.x.min(b_hi.x), a_hi.y.min(b_hi.y));
        if lo.x > hi.x || lo.y > hi.y {
            return Self::at(Point::origin());
        }
        Self::new(lo, hi)
    }

    /// Grow to include `p`, returning the canonical result.
    pub fn expanded_to(&self, p: Point<T>) -> Self {
        let (lo, hi) = (self.low(), self.high());
        Self::new(
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }

    /// Every point in the rectangle, row by row.
    pub fn points(&self) -> RowMajorPoints<T> {
        RowMajorPoints::new(self)
    }
}

/// `hi - lo + 1` for `lo <= hi`, checked.
fn span<T: Scalar>(lo: T, hi: T) -> Option<T> {
    hi.checked_sub(&lo)?.checked_add(&T::one())
}

impl<T: Scalar> PartialEq for Rectangle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.low() == other.low() && self.high() == other.high()
    }
}

impl<T: Scalar> Eq for Rectangle<T> {}

impl<T: Scalar> Hash for Rectangle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.low().hash(state);
        self.high().hash(state);
    }
}

/// Row-major iterator over the points of a [`Rectangle`].
///
/// Created by [`Rectangle::points`].
#[derive(Clone, Debug)]
pub struct RowMajorPoints<T> {
    next: Option<Point<T>>,
    low: Point<T>,
    high: Point<T>,
}

impl<T: Scalar> RowMajorPoints<T> {
    fn new(rect: &Rectangle<T>) -> Self {
        let low = rect.low();
        Self {
            next: Some(low),
            low,
            high: rect.high(),
        }
    }
}

impl<T: Scalar> Iterator for RowMajorPoints<T> {
    type Item = Point<T>;

    fn next(&mut self) -> Option<Point<T>> {
        let cur = self.next?;
        self.next = if cur.x < self.high.x {
            Some(Point::new(cur.x + T::one(), cur.y))
        } else if cur.y < self.high.y {
            Some(Point::new(self.low.x, cur.y + T::one()))
        } else {
            None
        };
        Some(cur)
    }
}
