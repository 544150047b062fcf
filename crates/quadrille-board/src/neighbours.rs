//! 4- and 8-connected neighbour enumeration.

use quadrille_core::{Point, Scalar};
use smallvec::SmallVec;

use crate::board::Board;

/// Neighbour list; never spills for 8-connectivity.
pub type Neighbours<T> = SmallVec<[Point<T>; 8]>;

/// West, east, north, south.
pub const CARDINAL_OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight surrounding cells, row-major.
pub const DIAGONAL_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl<T: Scalar, V: Clone + 'static> Board<T, V> {
    /// The 4-connected neighbours of `p` in west, east, north, south order.
    ///
    /// With `include_off_board` false, neighbours outside the bounds are
    /// dropped. Neighbours that would overflow `T` are always dropped.
    pub fn cardinals(&self, p: Point<T>, include_off_board: bool) -> Neighbours<T> {
        self.neighbours_at(p, &CARDINAL_OFFSETS, include_off_board)
    }

    /// The 8-connected neighbours of `p` in row-major order around it.
    pub fn diagonals(&self, p: Point<T>, include_off_board: bool) -> Neighbours<T> {
        self.neighbours_at(p, &DIAGONAL_OFFSETS, include_off_board)
    }

    fn neighbours_at(
        &self,
        p: Point<T>,
        offsets: &[(i8, i8)],
        include_off_board: bool,
    ) -> Neighbours<T> {
        offsets
            .iter()
            .filter_map(|&(dx, dy)| p.offset(dx, dy))
            .filter(|&n| include_off_board || self.contains(n))
            .collect()
    }
}
