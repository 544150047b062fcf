//! Text ingestion: rows of bytes become board cells.
//!
//! Row `y`, column `x` of the input becomes the cell at `(x, y)`. Rows must
//! share one width. Storage is allocated for the full grid before any cell
//! is written; cells whose decoded value matches the empty value are left
//! unset. On success the bounds are exactly `(0, 0)..=(width-1, height-1)`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quadrille_core::{Point, Rectangle, Scalar};

use crate::board::Board;
use crate::bounds::Bounds;
use crate::error::BoardError;

impl<T: Scalar, V: Clone + 'static> Board<T, V> {
    /// Load a grid from byte rows, replacing the current contents.
    ///
    /// Empty input (no rows, or rows of width zero) succeeds without
    /// touching the board.
    pub fn load_rows<R: AsRef<[u8]>>(&mut self, rows: &[R]) -> Result<(), BoardError> {
        let decoder = self
            .decoder
            .clone()
            .ok_or(BoardError::ConversionFunctionMissing)?;
        let cmp = self.comparator()?.clone();

        let Some(first) = rows.first() else {
            tracing::debug!("ingested empty input");
            return Ok(());
        };
        let width = first.as_ref().len();
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().len();
            if found != width {
                return Err(BoardError::NonUniformRowLength {
                    row,
                    expected: width,
                    found,
                });
            }
        }
        if width == 0 {
            tracing::debug!(rows = rows.len(), "ingested rows without columns");
            return Ok(());
        }
        let height = rows.len();

        let w = coord::<T>(width)?;
        let h = coord::<T>(height)?;
        self.storage.allocate(w, h, self.empty.clone())?;

        let mut populated = 0usize;
        for (y, line) in rows.iter().enumerate() {
            let cy = coord::<T>(y)?;
            for (x, &byte) in line.as_ref().iter().enumerate() {
                let v = decoder(byte);
                if cmp(&v, &self.empty) {
                    continue;
                }
                self.storage.try_set(Point::new(coord::<T>(x)?, cy), v)?;
                populated += 1;
            }
        }

        let high = Point::new(coord::<T>(width - 1)?, coord::<T>(height - 1)?);
        self.bounds = Bounds::Set(Rectangle::new(Point::origin(), high));
        tracing::debug!(
            rows = height,
            cols = width,
            populated,
            backend = self.storage.backend_name(),
            "ingested board rows"
        );
        Ok(())
    }

    /// Load a grid from text lines. Each line contributes its UTF-8 bytes.
    pub fn load_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), BoardError> {
        let rows: Vec<&[u8]> = lines.iter().map(|l| l.as_ref().as_bytes()).collect();
        self.load_rows(&rows)
    }

    /// Load a grid from a line-oriented reader.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<(), BoardError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        self.load_lines(&lines)
    }

    /// Load a grid from a text file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), BoardError> {
        let file = File::open(path.as_ref())?;
        self.load_reader(BufReader::new(file))
    }
}

fn coord<T: Scalar>(index: usize) -> Result<T, BoardError> {
    T::from_index(index).ok_or(BoardError::CoordinateOverflow { index })
}
