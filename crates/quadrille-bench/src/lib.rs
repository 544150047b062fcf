//! Benchmark workloads for Quadrille.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`reference_rows`]: 100x100 grid (10K cells), roughly half populated
//! - [`stress_rows`]: 316x316 grid (~100K cells), same density
//! - [`scatter_points`]: seed-driven point cloud inside a square extent
//! - [`loaded_board`]: a rune board on a chosen backend, ready to query

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadrille_board::RuneBoard;
use quadrille_core::Point;
use quadrille_storage::StorageKind;

/// Symbols used by generated grids. `.` is the empty cell.
pub const ALPHABET: &[u8] = b"..ab";

fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Deterministic `side` x `side` grid over [`ALPHABET`].
pub fn grid_rows(seed: u64, side: usize) -> Vec<String> {
    let mut state = seed;
    (0..side)
        .map(|_| {
            (0..side)
                .map(|_| char::from(ALPHABET[(lcg(&mut state) as usize) % ALPHABET.len()]))
                .collect()
        })
        .collect()
}

/// 100x100 reference grid.
pub fn reference_rows(seed: u64) -> Vec<String> {
    grid_rows(seed, 100)
}

/// 316x316 stress grid.
pub fn stress_rows(seed: u64) -> Vec<String> {
    grid_rows(seed, 316)
}

/// `count` points in `[0, extent)^2`, reproducible from `seed`.
pub fn scatter_points(seed: u64, count: usize, extent: i32) -> Vec<Point<i32>> {
    let mut state = seed;
    let extent = extent.max(1) as u64;
    (0..count)
        .map(|_| {
            let x = (lcg(&mut state) % extent) as i32;
            let y = (lcg(&mut state) % extent) as i32;
            Point::new(x, y)
        })
        .collect()
}

/// A rune board on `kind` loaded with `rows`.
pub fn loaded_board(kind: StorageKind, rows: &[String]) -> RuneBoard<i32> {
    let mut board = RuneBoard::with_storage_kind(kind);
    if let Err(e) = board.load_lines(rows) {
        panic!("benchmark input failed to load: {e}");
    }
    board
}
