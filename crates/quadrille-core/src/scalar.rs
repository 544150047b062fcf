//! The coordinate scalar trait.

use num_traits::{NumCast, PrimInt, ToPrimitive};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A discrete, ordered coordinate type.
///
/// Blanket-implemented for every primitive integer. Signed and unsigned
/// types are both valid; operations that step off the representable range
/// (a neighbour left of `0u32`, say) report `None` instead of wrapping.
pub trait Scalar: PrimInt + Hash + Debug + Display + Send + Sync + 'static {
    /// Convert to a `usize` index, or `None` if negative or too large.
    fn to_index(self) -> Option<usize> {
        ToPrimitive::to_usize(&self)
    }

    /// Convert a `usize` index into this scalar, or `None` if it does not fit.
    fn from_index(index: usize) -> Option<Self> {
        <Self as NumCast>::from(index)
    }

    /// Add a small signed step with overflow checking.
    fn step(self, delta: i8) -> Option<Self> {
        let magnitude = <Self as NumCast>::from(delta.unsigned_abs())?;
        if delta >= 0 {
            self.checked_add(&magnitude)
        } else {
            self.checked_sub(&magnitude)
        }
    }
}

impl<T> Scalar for T where T: PrimInt + Hash + Debug + Display + Send + Sync + 'static {}
