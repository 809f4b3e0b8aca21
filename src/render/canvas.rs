//! Character grid a single render call draws into.
//!
//! Cells are stored row-major in one flat buffer. A cell is either blank,
//! one glyph, or a whole y-axis label: labels are not spread over several
//! columns, they occupy exactly one cell and widen their row when joined.

use crate::core::error::{ChartError, ChartResult};

/// Largest number of cells a single canvas may hold.
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Clone, Debug, Default, PartialEq)]
enum Cell {
    #[default]
    Blank,
    Glyph(char),
    Label(String),
}

#[derive(Debug)]
pub struct Canvas {
    width: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Blank `rows` x `width` grid.
    ///
    /// # Errors
    /// [`ChartError::CanvasTooLarge`] when the grid would exceed
    /// [`MAX_CELLS`].
    pub fn new(rows: usize, width: usize) -> ChartResult<Self> {
        let len = rows
            .checked_mul(width)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or(ChartError::CanvasTooLarge {
                rows,
                columns: width,
                limit: MAX_CELLS,
            })?;
        Ok(Self {
            width,
            cells: vec![Cell::Blank; len],
        })
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len().checked_div(self.width).unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Overwrites whatever the cell held; the last write wins.
    #[inline]
    pub fn put(&mut self, row: usize, col: usize, glyph: char) {
        self.cells[row * self.width + col] = Cell::Glyph(glyph);
    }

    #[inline]
    pub fn put_label(&mut self, row: usize, col: usize, text: String) {
        self.cells[row * self.width + col] = Cell::Label(text);
    }

    /// Glyph at `(row, col)`, `None` for blanks and labels.
    #[must_use]
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        match self.cells.get(row * self.width + col) {
            Some(Cell::Glyph(c)) => Some(*c),
            _ => None,
        }
    }

    /// Rows joined top to bottom with `\n`, each stripped of trailing
    /// whitespace. No trailing newline.
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.width == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.cells.len() * 3);
        let mut line = String::with_capacity(self.width * 3);
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            line.clear();
            for cell in row {
                match cell {
                    Cell::Blank => line.push(' '),
                    Cell::Glyph(c) => line.push(*c),
                    Cell::Label(s) => line.push_str(s),
                }
            }
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line.trim_end());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_take_one_cell_and_rows_are_trimmed() {
        let mut c = Canvas::new(2, 4).unwrap();
        c.put_label(0, 0, "ab ".into());
        c.put(0, 2, '┤');
        c.put(1, 1, 'x');
        assert_eq!(c.to_text(), "ab  ┤\n x");
        assert_eq!(c.rows(), 2);
    }

    #[test]
    fn later_writes_replace_earlier_ones() {
        let mut c = Canvas::new(1, 1).unwrap();
        c.put_label(0, 0, "label".into());
        c.put(0, 0, '┤');
        c.put(0, 0, '┼');
        assert_eq!(c.glyph(0, 0), Some('┼'));
        assert_eq!(c.to_text(), "┼");
    }

    #[test]
    fn oversized_grids_are_refused() {
        assert!(matches!(
            Canvas::new(usize::MAX, 2),
            Err(ChartError::CanvasTooLarge { .. })
        ));
        assert!(Canvas::new(MAX_CELLS + 1, 1).is_err());
        assert_eq!(Canvas::new(3, 5).map(|c| c.rows()).ok(), Some(3));
    }
}
