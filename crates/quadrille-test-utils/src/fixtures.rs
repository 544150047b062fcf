//! Reusable text grids for board tests.
//!
//! - [`TWO_REGIONS`]: the minimal two-letter partition case.
//! - [`MAZE`]: a walled maze with one open corridor system.
//! - [`ISLANDS`]: several same-letter islands separated by empty cells.
//! - [`checkerboard`] / [`scrambled`]: generated grids of any size.

use quadrille_core::Point;
use quadrille_storage::{BoardStorage, SparseStorage};

/// Two 4-connected regions: `A` at the top-left, `B` at the bottom-right.
pub const TWO_REGIONS: [&str; 2] = ["AAB", "ABB"];

/// `#` walls around a connected set of `.` corridors.
pub const MAZE: [&str; 7] = [
    "#########",
    "#...#...#",
    "#.#.#.#.#",
    "#.#...#.#",
    "#.#####.#",
    "#.......#",
    "#########",
];

/// Number of `.` cells in [`MAZE`].
pub const MAZE_OPEN_CELLS: usize = 24;

/// Three `X` islands and two `O` islands on an empty sea.
pub const ISLANDS: [&str; 5] = ["XX..O", "X...O", "..X..", "O...X", "O..XX"];

/// Alternating `#`/`.` cells; every `#` is its own 4-connected region.
pub fn checkerboard(width: usize, height: usize) -> Vec<String> {
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if (x + y) % 2 == 0 { '#' } else { '.' })
                .collect()
        })
        .collect()
}

/// Deterministic pseudo-random grid over `alphabet`.
///
/// Uses a fixed 64-bit LCG so the same seed gives the same grid on every
/// platform.
pub fn scrambled(seed: u64, width: usize, height: usize, alphabet: &[u8]) -> Vec<String> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    let mut state = seed;
    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    char::from(alphabet[((state >> 33) as usize) % alphabet.len()])
                })
                .collect()
        })
        .collect()
}

/// Sparse storage holding every non-`empty` character of `rows`.
pub fn sparse_from_rows(rows: &[&str], empty: char) -> SparseStorage<i32, char> {
    let mut storage = SparseStorage::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c != empty {
                storage.set(Point::new(x as i32, y as i32), c);
            }
        }
    }
    storage
}
