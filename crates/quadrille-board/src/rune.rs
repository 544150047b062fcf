//! Character boards: the common case of one `char` per cell.
//!
//! [`RuneBoard`] stores plain characters. [`RunePlusBoard`] pairs each
//! character with an auxiliary payload that never affects emptiness,
//! equality, or region grouping. Both dereference to the underlying
//! [`Board`], so every board operation is available on them directly.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use quadrille_core::{Point, Scalar};
use quadrille_storage::StorageKind;

use crate::board::Board;
use crate::bounds::Bounds;
use crate::config::{BoardConfig, ConfigError};
use crate::error::BoardError;

/// Empty cell character used when none is configured.
pub const EMPTY_RUNE: char = '.';

fn decode_rune(byte: u8) -> char {
    char::from(byte)
}

fn write_rows(f: &mut fmt::Formatter<'_>, rows: &[String]) -> fmt::Result {
    for row in rows {
        writeln!(f, "{row}")?;
    }
    Ok(())
}

// ── RuneBoard ─────────────────────────────────────────────────────

/// A board of characters with `.` as the empty cell, byte-to-char decoding
/// and plain equality.
#[derive(Clone, Debug)]
pub struct RuneBoard<T: Scalar> {
    board: Board<T, char>,
}

/// A rune board addressed by `i32` coordinates.
pub type StdBoard = RuneBoard<i32>;

impl<T: Scalar> RuneBoard<T> {
    /// An empty sparse rune board.
    pub fn new() -> Self {
        Self::with_storage_kind(StorageKind::default())
    }

    /// An empty rune board on the given backend kind.
    pub fn with_storage_kind(kind: StorageKind) -> Self {
        Self {
            board: Board::from_parts(
                kind.build(),
                Bounds::Unset,
                EMPTY_RUNE,
                Some(Arc::new(decode_rune)),
                Some(Arc::new(|a: &char, b: &char| a == b)),
            ),
        }
    }

    /// Build from a configuration, filling in the rune decoder and
    /// comparator when they are absent.
    pub fn from_config(mut config: BoardConfig<T, char>) -> Result<Self, ConfigError> {
        if config.decoder.is_none() {
            config = config.with_decoder(decode_rune);
        }
        if config.comparator.is_none() {
            config = config.with_comparator(|a, b| a == b);
        }
        Ok(Self {
            board: Board::new(config)?,
        })
    }

    /// A sparse rune board loaded from text lines.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.load_lines(lines)?;
        Ok(board)
    }

    /// Render the bounded area, one string per row.
    pub fn format(&self) -> Vec<String> {
        self.board.format_with(|c| *c)
    }

    /// Wrap the backend in a copy-on-write overlay.
    pub fn into_overlay(self) -> Self {
        Self {
            board: self.board.into_overlay(),
        }
    }

    /// Unwrap into the generic board.
    pub fn into_board(self) -> Board<T, char> {
        self.board
    }
}

impl<T: Scalar> Default for RuneBoard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Deref for RuneBoard<T> {
    type Target = Board<T, char>;

    fn deref(&self) -> &Board<T, char> {
        &self.board
    }
}

impl<T: Scalar> DerefMut for RuneBoard<T> {
    fn deref_mut(&mut self) -> &mut Board<T, char> {
        &mut self.board
    }
}

impl<T: Scalar> fmt::Display for RuneBoard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.format())
    }
}

// ── RunePlusBoard ─────────────────────────────────────────────────

/// A character plus an auxiliary payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunePlus<E> {
    /// The cell's character; the only part that takes part in equality
    /// on a [`RunePlusBoard`].
    pub rune: char,
    /// Board-local metadata.
    pub extra: E,
}

impl<E: Default> RunePlus<E> {
    /// A cell with the given character and a default payload.
    pub fn rune(rune: char) -> Self {
        Self {
            rune,
            extra: E::default(),
        }
    }
}

/// A board of [`RunePlus`] cells. Emptiness and region grouping look at
/// the character only.
#[derive(Clone, Debug)]
pub struct RunePlusBoard<T: Scalar, E: Clone + Default + 'static> {
    board: Board<T, RunePlus<E>>,
}

impl<T: Scalar, E: Clone + Default + 'static> RunePlusBoard<T, E> {
    /// An empty sparse board.
    pub fn new() -> Self {
        Self::with_storage_kind(StorageKind::default())
    }

    /// An empty board on the given backend kind.
    pub fn with_storage_kind(kind: StorageKind) -> Self {
        Self {
            board: Board::from_parts(
                kind.build(),
                Bounds::Unset,
                RunePlus::rune(EMPTY_RUNE),
                Some(Arc::new(|b: u8| RunePlus::rune(decode_rune(b)))),
                Some(Arc::new(|a: &RunePlus<E>, b: &RunePlus<E>| a.rune == b.rune)),
            ),
        }
    }

    /// A sparse board loaded from text lines; every payload starts at its
    /// default.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.load_lines(lines)?;
        Ok(board)
    }

    /// The character at `p`, or the empty character.
    pub fn get_rune(&self, p: Point<T>) -> char {
        self.board.get_raw(p).map_or(self.board.empty.rune, |c| c.rune)
    }

    /// The payload at `p`, or the empty value's payload.
    pub fn get_extra(&self, p: Point<T>) -> E {
        self.board.get(p).extra
    }

    /// Write a character and reset the payload to its default.
    pub fn set_rune_only(&mut self, p: Point<T>, rune: char) -> Result<(), BoardError> {
        self.board.set(p, RunePlus::rune(rune))
    }

    /// Write a character, keeping any stored payload.
    pub fn set_rune(&mut self, p: Point<T>, rune: char) -> Result<(), BoardError> {
        let extra = self
            .board
            .get_raw(p)
            .map(|c| c.extra.clone())
            .unwrap_or_default();
        self.board.set(p, RunePlus { rune, extra })
    }

    /// Write a payload, keeping the stored character (or the empty
    /// character when the cell is unset).
    pub fn set_extra(&mut self, p: Point<T>, extra: E) -> Result<(), BoardError> {
        let rune = self.get_rune(p);
        self.board.set(p, RunePlus { rune, extra })
    }

    /// Visit populated cells' characters in backend order.
    pub fn iterate_runes<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(Point<T>, char) -> bool,
    {
        self.board.iterate(|p, v| visit(p, v.rune))
    }

    /// Render the bounded area's characters; payloads are not shown.
    pub fn format(&self) -> Vec<String> {
        self.board.format_with(|c| c.rune)
    }

    /// Wrap the backend in a copy-on-write overlay.
    pub fn into_overlay(self) -> Self {
        Self {
            board: self.board.into_overlay(),
        }
    }

    /// Unwrap into the generic board.
    pub fn into_board(self) -> Board<T, RunePlus<E>> {
        self.board
    }
}

impl<T: Scalar, E: Clone + Default + 'static> Default for RunePlusBoard<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, E: Clone + Default + 'static> Deref for RunePlusBoard<T, E> {
    type Target = Board<T, RunePlus<E>>;

    fn deref(&self) -> &Board<T, RunePlus<E>> {
        &self.board
    }
}

impl<T: Scalar, E: Clone + Default + 'static> DerefMut for RunePlusBoard<T, E> {
    fn deref_mut(&mut self) -> &mut Board<T, RunePlus<E>> {
        &mut self.board
    }
}

impl<T: Scalar, E: Clone + Default + 'static> fmt::Display for RunePlusBoard<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, &self.format())
    }
}

#[cfg(test)]
mod tests {
    use quadrille_core::Rectangle;

    use super::*;

    fn p(x: i32, y: i32) -> Point<i32> {
        Point::new(x, y)
    }

    #[test]
    fn rune_board_defaults() {
        let b = StdBoard::new();
        assert_eq!(*b.empty_value(), '.');
        assert_eq!(b.get(p(4, 4)), '.');
        assert_eq!(b.storage().backend_name(), "sparse");
    }

    #[test]
    fn rune_board_round_trip_and_display() {
        let rows = ["#.#", ".#."];
        let b = StdBoard::from_lines(&rows).unwrap();
        assert_eq!(b.format(), rows);
        assert_eq!(b.to_string(), "#.#\n.#.\n");
        assert_eq!(b.population(), 3);
    }

    #[test]
    fn rune_board_regions() {
        let b = StdBoard::from_lines(&["AAB", "ABB"]).unwrap();
        let regions = b.find_regions(false).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions.iter().map(|r| r.len()).sum::<usize>(), 6);
    }

    #[test]
    fn rune_board_from_config_fills_functions() {
        let mut b: RuneBoard<i64> = RuneBoard::from_config(
            BoardConfig::new(' ').with_storage_kind(StorageKind::Dense),
        )
        .unwrap();
        b.load_lines(&["a b"]).unwrap();
        assert_eq!(b.get(Point::new(1, 0)), ' ');
        assert_eq!(b.format(), vec!["a b"]);
    }

    #[test]
    fn rune_board_overlay_keeps_wrapper() {
        let base = StdBoard::from_lines(&["ab"]).unwrap();
        let mut layered = base.clone().into_overlay();
        layered.set(p(0, 0), 'z').unwrap();
        assert_eq!(layered.format(), vec!["zb"]);
        assert_eq!(base.format(), vec!["ab"]);
    }

    #[test]
    fn rune_plus_emptiness_ignores_extra() {
        let b: RunePlusBoard<i32, u32> = RunePlusBoard::from_lines(&["a.", ".a"]).unwrap();
        assert_eq!(b.population(), 2);
        assert_eq!(b.get_rune(p(1, 0)), '.');
        assert_eq!(b.get_extra(p(0, 0)), 0);
    }

    #[test]
    fn rune_plus_setters() {
        let mut b: RunePlusBoard<i32, u32> = RunePlusBoard::new();

        b.set_extra(p(0, 0), 7).unwrap();
        assert_eq!(b.get_rune(p(0, 0)), '.');
        assert_eq!(b.get_extra(p(0, 0)), 7);

        b.set_rune(p(0, 0), 'x').unwrap();
        assert_eq!(b.get_rune(p(0, 0)), 'x');
        assert_eq!(b.get_extra(p(0, 0)), 7);

        b.set_rune_only(p(0, 0), 'y').unwrap();
        assert_eq!(b.get_rune(p(0, 0)), 'y');
        assert_eq!(b.get_extra(p(0, 0)), 0);

        b.set_rune(p(5, 5), 'q').unwrap();
        assert_eq!(b.get_extra(p(5, 5)), 0);
    }

    #[test]
    fn rune_plus_regions_group_by_rune_only() {
        let mut b: RunePlusBoard<i32, u32> = RunePlusBoard::from_lines(&["AA"]).unwrap();
        b.set_extra(p(0, 0), 1).unwrap();
        b.set_extra(p(1, 0), 2).unwrap();
        let regions = b.find_regions(false).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 2);
    }

    #[test]
    fn rune_plus_iterate_runes_and_display() {
        let mut b: RunePlusBoard<i32, &'static str> = RunePlusBoard::new();
        b.set_bounds(Rectangle::new(p(0, 0), p(2, 0)));
        b.set_rune(p(2, 0), 'k').unwrap();
        b.set_extra(p(2, 0), "key").unwrap();
        let mut seen = Vec::new();
        assert!(b.iterate_runes(|q, r| {
            seen.push((q, r));
            true
        }));
        assert_eq!(seen, vec![(p(2, 0), 'k')]);
        assert_eq!(b.to_string(), "..k\n");
    }

    #[test]
    fn rune_board_into_board_keeps_functions() {
        let mut board = StdBoard::from_lines(&["ab", "ba"]).unwrap().into_board();
        let changed = board.transform(|_, c| c.to_ascii_uppercase()).unwrap();
        assert_eq!(changed, 4);
        assert_eq!(board.get(p(1, 0)), 'B');
        assert_eq!(board.find_regions(false).unwrap().len(), 4);
    }

    #[test]
    fn rune_plus_on_dense_rejects_writes_past_the_grid() {
        let mut b: RunePlusBoard<i32, u8> = RunePlusBoard::with_storage_kind(StorageKind::Dense);
        b.load_lines(&["a.", ".b"]).unwrap();
        assert!(matches!(
            b.set_rune(p(2, 0), 'c'),
            Err(BoardError::Storage(_))
        ));
        b.set_extra(p(1, 1), 3).unwrap();

        let board = b.into_board();
        assert_eq!(board.storage().backend_name(), "dense");
        assert_eq!(board.get(p(1, 1)), RunePlus { rune: 'b', extra: 3 });
        assert_eq!(board.get(p(2, 0)).rune, EMPTY_RUNE);
    }
}
