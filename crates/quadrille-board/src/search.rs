//! Flood fill and connected-region discovery.

use std::collections::VecDeque;

use indexmap::IndexSet;
use quadrille_core::{Point, Scalar};

use crate::board::Board;
use crate::error::BoardError;
use crate::neighbours::Neighbours;

/// Breadth-first flood fill from `start`.
///
/// `neighbours` decides adjacency; it may return points anywhere. The
/// result is in discovery order and always contains `start`.
pub fn flood_fill<T, I, F>(start: Point<T>, mut neighbours: F) -> IndexSet<Point<T>>
where
    T: Scalar,
    I: IntoIterator<Item = Point<T>>,
    F: FnMut(Point<T>) -> I,
{
    let mut visited = IndexSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        for n in neighbours(p) {
            if visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
    tracing::trace!(start = %start, reached = visited.len(), "flood fill complete");
    visited
}

/// A maximal set of connected, mutually-equal cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region<T: Scalar> {
    seed: Point<T>,
    points: IndexSet<Point<T>>,
}

impl<T: Scalar> Region<T> {
    /// The row-major first point of the region, where the fill started.
    pub fn seed(&self) -> Point<T> {
        self.seed
    }

    /// Member points in discovery order.
    pub fn points(&self) -> &IndexSet<Point<T>> {
        &self.points
    }

    /// Number of member points. Never zero.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `p` belongs to the region.
    pub fn contains(&self, p: Point<T>) -> bool {
        self.points.contains(&p)
    }

    /// Iterate member points in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Point<T>> + '_ {
        self.points.iter().copied()
    }

    /// Consume the region, keeping its points.
    pub fn into_points(self) -> IndexSet<Point<T>> {
        self.points
    }
}

impl<T: Scalar, V: Clone + 'static> Board<T, V> {
    /// Flood fill from `start` using a caller-supplied adjacency.
    pub fn search<I, F>(&self, start: Point<T>, neighbours: F) -> IndexSet<Point<T>>
    where
        I: IntoIterator<Item = Point<T>>,
        F: FnMut(Point<T>) -> I,
    {
        flood_fill(start, neighbours)
    }

    /// Partition the bounded area into 4-connected regions of equal values.
    ///
    /// Seeds are taken in row-major order, so regions come out ordered by
    /// their first cell. Cells equal to the empty value are skipped unless
    /// `include_empty` is set. Unset bounds yield no regions.
    pub fn find_regions(&self, include_empty: bool) -> Result<Vec<Region<T>>, BoardError> {
        let cmp = self.comparator()?;
        let mut regions = Vec::new();
        let Some(rect) = self.bounds() else {
            return Ok(regions);
        };

        let mut assigned: IndexSet<Point<T>> = IndexSet::new();
        for seed in rect.points() {
            if assigned.contains(&seed) {
                continue;
            }
            if !include_empty && cmp(&self.get(seed), &self.empty) {
                continue;
            }
            let points = self.search(seed, |p| {
                let here = self.get(p);
                self.cardinals(p, false)
                    .into_iter()
                    .filter(|&n| cmp(&here, &self.get(n)))
                    .collect::<Neighbours<T>>()
            });
            assigned.extend(points.iter().copied());
            regions.push(Region { seed, points });
        }

        tracing::debug!(
            regions = regions.len(),
            cells = assigned.len(),
            include_empty,
            "partitioned board into regions"
        );
        Ok(regions)
    }
}
