//! Board content digests.
//!
//! [`content_hash`] feeds each populated `(point, value)` pair to FNV-1a in
//! row-major order. The result depends on which cells hold which values,
//! never on the backend or the order the cells were written, so a board
//! and its overlay or dense copy can be compared by a single `u64`.

use std::hash::{Hash, Hasher};

use crate::storage::BoardStorage;
use quadrille_core::Scalar;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// A [`Hasher`] implementing 64-bit FNV-1a.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher(u64);

impl Default for FnvHasher {
    fn default() -> Self {
        Self(FNV_OFFSET)
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    }
}

/// Hash every populated `(point, value)` pair in row-major order.
///
/// An empty backend hashes to `FNV_OFFSET`.
pub fn content_hash<T, V, S>(storage: &S) -> u64
where
    T: Scalar,
    V: Clone + Hash + 'static,
    S: BoardStorage<T, V> + ?Sized,
{
    let mut hasher = FnvHasher::default();
    storage.iterate_ordered(&mut |p, v| {
        p.hash(&mut hasher);
        v.hash(&mut hasher);
        true
    });
    hasher.finish()
}
