//! A single row of the grid.

use crate::cell::Cell;
use crate::color::Color;

/// An ordered, column-indexed sequence of cells, plus the line-overflow flag
/// `spec.md` §3 defines: "the next row is a continuation of this logical
/// line". Grounded on the teacher's `terminal/grid.rs::Row`, renamed `dirty`
/// -> `dirty` kept as-is (renderer diffing still needs it) and `wrapped`
/// folded into the spec's `line_overflow` name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub cells: Vec<Cell>,
    /// True iff this row is exactly `columnCount` wide and the row below it
    /// continues the same logical line (`spec.md` §3 invariant).
    pub line_overflow: bool,
    /// Renderer-diffing hint: set whenever this row's cell contents change.
    pub dirty: bool,
}

impl Row {
    pub fn new(cols: u16) -> Self {
        Self {
            cells: vec![Cell::default(); cols as usize],
            line_overflow: false,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
        self.line_overflow = false;
        self.dirty = true;
    }

    /// Erase every cell to blank using `bg`, per ECMA-48.
    pub fn erase_with_bg(&mut self, bg: Color) {
        for cell in &mut self.cells {
            cell.erase(bg);
        }
        self.dirty = true;
    }

    /// Grow or shrink to `cols`, padding with default blanks or truncating
    /// from the right. Only marks dirty when the width actually changes.
    pub fn resize(&mut self, cols: u16) {
        let new_len = cols as usize;
        if self.cells.len() != new_len {
            self.cells.resize(new_len, Cell::default());
            self.dirty = true;
        }
    }

    /// Width conservation invariant check (`spec.md` §8): true iff this row
    /// is exactly `cols` cells wide.
    pub fn width_conserved(&self, cols: u16) -> bool {
        self.cells.len() == cols as usize
    }

    /// The plain text of the row (base scalar + combining tail per cell,
    /// spacer cells skipped), with no trailing-space trimming.
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter(|c| !c.is_wide_spacer())
            .map(|c| c.display_text())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_is_blank_and_correct_width() {
        let r = Row::new(10);
        assert_eq!(r.len(), 10);
        assert!(r.width_conserved(10));
        assert!(!r.line_overflow);
    }

    #[test]
    fn resize_pads_and_truncates() {
        let mut r = Row::new(5);
        r.cells[0].text = 'x';
        r.resize(8);
        assert_eq!(r.len(), 8);
        assert_eq!(r.cells[0].text, 'x');
        r.resize(3);
        assert_eq!(r.len(), 3);
        assert_eq!(r.cells[0].text, 'x');
    }

    #[test]
    fn text_skips_wide_spacers() {
        let mut r = Row::new(3);
        r.cells[0].text = '中';
        r.cells[0].flags.insert(crate::attrs::CellFlags::WIDE);
        r.cells[1] = Cell::wide_spacer(Default::default());
        r.cells[2].text = 'x';
        assert_eq!(r.text(), "中x");
    }
}
