//! Rendering the bounded area as text rows.

use quadrille_core::Scalar;

use crate::board::Board;

impl<T: Scalar, V: Clone + 'static> Board<T, V> {
    /// Render every bounded cell, one string per row, top to bottom.
    ///
    /// Unset cells render as the empty value. Returns no rows when bounds
    /// are unset.
    pub fn format_with<F>(&self, mut render: F) -> Vec<String>
    where
        F: FnMut(&V) -> char,
    {
        let Some(rect) = self.bounds() else {
            return Vec::new();
        };
        let low = rect.low();
        let mut rows = Vec::new();
        let mut line = String::new();
        for p in rect.points() {
            if p.x == low.x && p != low {
                rows.push(std::mem::take(&mut line));
            }
            line.push(render(&self.get(p)));
        }
        rows.push(line);
        rows
    }
}

#[cfg(test)]
mod tests {
    use quadrille_core::{Point, Rectangle};

    use crate::board::Board;
    use crate::config::BoardConfig;

    fn board() -> Board<i32, char> {
        Board::new(
            BoardConfig::new('.')
                .with_decoder(|b| b as char)
                .with_comparator(|a, b| a == b),
        )
        .unwrap()
    }

    #[test]
    fn round_trips_ingested_rows() {
        let rows = ["#..#", ".##.", "...."];
        let mut b = board();
        b.load_lines(&rows).unwrap();
        assert_eq!(b.format_with(|c| *c), rows);
    }

    #[test]
    fn unset_bounds_render_nothing() {
        let mut b = board();
        b.set(Point::new(0, 0), 'x').unwrap();
        assert!(b.format_with(|c| *c).is_empty());
    }

    #[test]
    fn renders_offset_bounds_with_empty_fill() {
        let mut b = board();
        b.set_and_expand_bounds(Point::new(-1, -1), 'a').unwrap();
        b.set_and_expand_bounds(Point::new(1, 0), 'b').unwrap();
        assert_eq!(b.format_with(|c| *c), vec!["a..", "..b"]);
    }

    #[test]
    fn single_cell_bounds() {
        let mut b = board();
        b.set_bounds(Rectangle::at(Point::new(3, 3)));
        assert_eq!(b.format_with(|c| c.to_ascii_uppercase()), vec!["."]);
    }
}
