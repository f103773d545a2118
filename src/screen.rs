//! The grid of text cells for one screen (primary or alternate), per
//! `spec.md` §3/§4.3.
//!
//! Grounded on the teacher's `terminal/grid.rs::Grid`, generalized to the
//! full operation set `spec.md` §4.3 names (`insertString`/`overwriteString`
//! with their exact delete-then-insert/pad contracts, `maybeClipCurrentRow`,
//! `expandSelection`) and to carry its own tab-stop table and DECSC/DECRC
//! slot, matching `spec.md` §3's "Screen owns ... tab stops ... and a saved
//! cursor/attributes/charset state" (the teacher keeps tab stops and no
//! saved-cursor slot on `TerminalState` instead, one copy shared by both
//! screens — `DESIGN.md` records this as a deliberate per-screen split).

use std::collections::BTreeSet;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::attrs::{split_widechar_string, CellFlags, TextAttributes};
use crate::cell::Cell;
use crate::color::Color;
use crate::cursor::{Cursor, RowCol, Size};
use crate::options::SavedCursor;
use crate::row::Row;

/// The default tab stop spacing (`spec.md` §3: "default every 8").
const DEFAULT_TAB_WIDTH: u16 = 8;

#[derive(Debug, Clone)]
pub struct Screen {
    rows: Vec<Row>,
    size: Size,
    pub cursor: Cursor,
    /// The current "pen": attributes new text is stamped with.
    pub pen: TextAttributes,
    tab_stops: BTreeSet<u16>,
    saved: Option<SavedCursor>,
    ambiguous_wide: bool,
}

impl Screen {
    pub fn new(size: Size, ambiguous_wide: bool) -> Self {
        let mut screen = Self {
            rows: (0..size.rows).map(|_| Row::new(size.cols)).collect(),
            size,
            cursor: Cursor::default(),
            pen: TextAttributes::default(),
            tab_stops: BTreeSet::new(),
            saved: None,
            ambiguous_wide,
        };
        screen.reset_tab_stops();
        screen
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: u16) -> Option<&Row> {
        self.rows.get(index as usize)
    }

    pub fn row_mut(&mut self, index: u16) -> Option<&mut Row> {
        self.rows.get_mut(index as usize)
    }

    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        self.rows.get(row as usize)?.cells.get(col as usize)
    }

    // ---- tab stops -----------------------------------------------------

    pub fn reset_tab_stops(&mut self) {
        self.tab_stops.clear();
        let mut col = DEFAULT_TAB_WIDTH;
        while col < self.size.cols {
            self.tab_stops.insert(col);
            col += DEFAULT_TAB_WIDTH;
        }
    }

    pub fn set_tab_stop(&mut self, col: u16) {
        self.tab_stops.insert(col);
    }

    pub fn clear_tab_stop(&mut self, col: u16) {
        self.tab_stops.remove(&col);
    }

    pub fn clear_all_tab_stops(&mut self) {
        self.tab_stops.clear();
    }

    /// Next tab stop strictly after `from`, clamped to `limit` (the right
    /// margin). `spec.md` §4.4: "HT advances to the next tab >= cursor+1,
    /// clamped to right margin".
    pub fn next_tab_stop(&self, from: u16, limit: u16) -> u16 {
        self.tab_stops
            .range((from + 1)..)
            .next()
            .copied()
            .unwrap_or(limit)
            .min(limit)
    }

    /// Previous tab stop strictly before `from`, clamped to `floor` (CBT).
    pub fn prev_tab_stop(&self, from: u16, floor: u16) -> u16 {
        self.tab_stops
            .range(..from)
            .next_back()
            .copied()
            .unwrap_or(floor)
            .max(floor)
    }

    // ---- cursor ----------------------------------------------------------

    /// Position the cursor at `(row, col)`, clamped to the grid.
    /// `spec.md` §4.3: clamps out-of-range, clears overflow. Storage is
    /// per-cell (see `DESIGN.md`), so there is no attribute-run boundary to
    /// split: arriving at a column never requires rewriting neighbor cells.
    pub fn set_cursor_position(&mut self, row: u16, col: u16) {
        self.cursor.set_position(row, col, self.size);
        // An explicit reposition breaks any wrap continuity the target row
        // carried (`spec.md` §3: the flag is cleared "when ... the cursor is
        // repositioned").
        if let Some(target) = self.rows.get_mut(self.cursor.row() as usize) {
            target.line_overflow = false;
        }
    }

    /// Append `ch` (a zero-width combining mark) to the cell immediately
    /// left of the cursor, per `spec.md` §3's "base + combining sequence".
    /// Returns `false` if there is no cell to attach to (row is empty or
    /// cursor sits at column 0 with nothing printed yet).
    pub fn append_combining_before_cursor(&mut self, ch: char) -> bool {
        let row_idx = self.cursor.row();
        let col = self.cursor.col();
        if col == 0 {
            return false;
        }
        let Some(row) = self.rows.get_mut(row_idx as usize) else {
            return false;
        };
        let mut idx = col as usize - 1;
        if row.cells.get(idx).map(|c| c.is_wide_spacer()).unwrap_or(false) && idx > 0 {
            idx -= 1;
        }
        let Some(cell) = row.cells.get_mut(idx) else {
            return false;
        };
        cell.combining.push(ch);
        cell.flags.insert(CellFlags::COMBINING);
        row.dirty = true;
        true
    }

    // ---- printing ----------------------------------------------------------

    /// Write `s` at the cursor using `self.pen`. Pads the row with blanks if
    /// the cursor sits past the current row length, then appends. Advances
    /// the cursor by the total display width. Per `spec.md` §4.3, this does
    /// **not** clip to `columnCount` — call [`Screen::maybe_clip_current_row`]
    /// afterward.
    pub fn insert_string(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let row_idx = self.cursor.row();
        let pen = self.pen;
        let ambiguous_wide = self.ambiguous_wide;
        let row = &mut self.rows[row_idx as usize];

        let col = self.cursor.col() as usize;
        if row.cells.len() < col {
            let blank = blank_cell(pen.bg);
            row.cells.resize(col, blank);
        }

        let chunks = split_widechar_string(s, ambiguous_wide);
        let mut insert_at = col;
        let mut width_total: u16 = 0;
        for chunk in chunks {
            if chunk.is_wide {
                let ch = chunk.text.chars().next().unwrap();
                let cell = Cell {
                    text: ch,
                    combining: String::new(),
                    attrs: pen,
                    flags: CellFlags::WIDE,
                };
                let spacer = Cell::wide_spacer(pen);
                splice_cells(row, insert_at, vec![cell, spacer]);
                insert_at += 2;
                width_total += 2;
            } else {
                // Split on extended grapheme cluster boundaries, not raw
                // `char`s, so a base scalar plus any combining marks that
                // arrived together in one `insert_string` call (as opposed
                // to one at a time through `handle_print`) land in a single
                // `Cell` instead of the combining mark getting its own
                // column (`spec.md` §3: "base + combining sequence").
                let cells: Vec<Cell> = chunk
                    .text
                    .graphemes(true)
                    .map(|g| {
                        let mut chars = g.chars();
                        let base = chars.next().unwrap_or(' ');
                        Cell {
                            text: base,
                            combining: chars.collect(),
                            attrs: pen,
                            flags: CellFlags::empty(),
                        }
                    })
                    .collect();
                let n = cells.len();
                splice_cells(row, insert_at, cells);
                insert_at += n;
                width_total += n as u16;
            }
        }
        row.dirty = true;
        self.cursor.pos.col = (col as u16 + width_total).min(u16::MAX);
    }

    /// Delete `min(width(s), remaining columns)` columns at the cursor, then
    /// [`Screen::insert_string`]. Short-circuits (advances the cursor only,
    /// no mutation) when the existing cells already match `s` under the
    /// current pen.
    pub fn overwrite_string(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let row_idx = self.cursor.row();
        let col = self.cursor.col();
        let cols = self.size.cols;
        let remaining = cols.saturating_sub(col) as usize;
        let chunks = split_widechar_string(s, self.ambiguous_wide);
        let width: usize = chunks
            .iter()
            .map(|c| if c.is_wide { 2 } else { c.text.chars().count() })
            .sum();
        let to_delete = width.min(remaining);

        if self.current_text_matches(row_idx, col, s) {
            self.cursor.pos.col = (col as usize + to_delete).min(cols as usize) as u16;
            return;
        }

        if to_delete > 0 {
            self.delete_chars(to_delete as u16);
            self.cursor.pos.col = col;
        }
        self.insert_string(s);
    }

    fn current_text_matches(&self, row_idx: u16, col: u16, s: &str) -> bool {
        let Some(row) = self.rows.get(row_idx as usize) else {
            return false;
        };
        let mut idx = col as usize;
        for ch in s.chars() {
            let Some(cell) = row.cells.get(idx) else {
                return false;
            };
            if cell.text != ch || !cell.attrs.matches_container(&self.pen) {
                return false;
            }
            idx += 1;
        }
        true
    }

    /// Remove up to `n` column-widths starting at the cursor, shifting
    /// trailing content left and padding the vacated right edge with blanks
    /// in the current pen. Returns the column-width actually removed. If a
    /// wide character's leading column is removed while its spacer remains,
    /// the orphan spacer is replaced with a blank.
    pub fn delete_chars(&mut self, n: u16) -> u16 {
        let row_idx = self.cursor.row();
        let col = self.cursor.col() as usize;
        let bg = self.pen.bg;
        let row = &mut self.rows[row_idx as usize];
        let len = row.cells.len();
        if col >= len {
            return 0;
        }
        let remove = (n as usize).min(len - col);
        if remove == 0 {
            return 0;
        }
        row.cells.drain(col..col + remove);
        row.cells.resize(len, blank_cell(bg));
        fix_orphan_spacer(row, col, bg);
        if col > 0 {
            fix_orphan_spacer(row, col.saturating_sub(1), bg);
        }
        row.dirty = true;
        remove as u16
    }

    /// After an unbounded [`Screen::insert_string`], truncate the cursor row
    /// back to `columnCount` if it grew past it. Latches cursor overflow if
    /// the cursor itself was pushed past the last column.
    pub fn maybe_clip_current_row(&mut self) {
        let row_idx = self.cursor.row();
        let cols = self.size.cols as usize;
        let row = &mut self.rows[row_idx as usize];
        if row.cells.len() > cols {
            row.cells.truncate(cols);
            row.dirty = true;
        }
        if self.cursor.pos.col as usize >= cols {
            self.cursor.pos.col = self.size.cols.saturating_sub(1);
            self.cursor.overflow = true;
        }
    }

    // ---- row-vector primitives used by scrolling -------------------------

    /// Remove and return the row at `index`, shifting nothing else.
    pub fn pop_row(&mut self, index: u16) -> Row {
        self.rows.remove(index as usize)
    }

    pub fn insert_row_at(&mut self, index: u16, row: Row) {
        let index = (index as usize).min(self.rows.len());
        self.rows.insert(index, row);
    }

    fn blank_row(&self) -> Row {
        let mut row = Row::new(self.size.cols);
        row.erase_with_bg(self.pen.bg);
        row
    }

    /// Scroll the rectangle `[top,bottom] x [left,right]` up by `n` rows,
    /// returning any rows evicted by a *full-width* scroll (`left == 0 &&
    /// right == columnCount - 1`); margin-constrained scrolls never evict
    /// whole rows (there is nothing scrollback-shaped to return) and shift
    /// only the cell range in place.
    pub fn scroll_up_region(&mut self, top: u16, bottom: u16, left: u16, right: u16, n: u16) -> Vec<Row> {
        if top > bottom || bottom as usize >= self.rows.len() {
            return Vec::new();
        }
        let full_width = left == 0 && right + 1 == self.size.cols;
        let mut evicted = Vec::new();
        let reps = n.min(bottom - top + 1);
        for _ in 0..reps {
            if full_width {
                evicted.push(self.rows.remove(top as usize));
                self.rows.insert(bottom as usize, self.blank_row());
            } else {
                let (l, r) = (left as usize, right as usize);
                for row_idx in top..bottom {
                    let src: Vec<Cell> = self.rows[row_idx as usize + 1].cells[l..=r].to_vec();
                    self.rows[row_idx as usize].cells[l..=r].clone_from_slice(&src);
                    self.rows[row_idx as usize].dirty = true;
                }
                let bg = self.pen.bg;
                for cell in &mut self.rows[bottom as usize].cells[l..=r] {
                    cell.erase(bg);
                }
                self.rows[bottom as usize].dirty = true;
            }
        }
        evicted
    }

    /// Scroll `[top,bottom] x [left,right]` down by `n` rows. Never evicts
    /// (blank rows enter at `top`, rows leave at `bottom` and are discarded).
    pub fn scroll_down_region(&mut self, top: u16, bottom: u16, left: u16, right: u16, n: u16) {
        if top > bottom || bottom as usize >= self.rows.len() {
            return;
        }
        let full_width = left == 0 && right + 1 == self.size.cols;
        let reps = n.min(bottom - top + 1);
        for _ in 0..reps {
            if full_width {
                self.rows.remove(bottom as usize);
                self.rows.insert(top as usize, self.blank_row());
            } else {
                let (l, r) = (left as usize, right as usize);
                for row_idx in (top + 1..=bottom).rev() {
                    let src: Vec<Cell> = self.rows[row_idx as usize - 1].cells[l..=r].to_vec();
                    self.rows[row_idx as usize].cells[l..=r].clone_from_slice(&src);
                    self.rows[row_idx as usize].dirty = true;
                }
                let bg = self.pen.bg;
                for cell in &mut self.rows[top as usize].cells[l..=r] {
                    cell.erase(bg);
                }
                self.rows[top as usize].dirty = true;
            }
        }
    }

    // ---- erasure -----------------------------------------------------------

    /// EL: erase-in-line. `mode`: 0 = cursor..end, 1 = start..=cursor, 2 = whole line.
    pub fn erase_in_line(&mut self, mode: u16) {
        let row_idx = self.cursor.row();
        let col = self.cursor.col();
        let cols = self.size.cols;
        let bg = self.pen.bg;
        let row = &mut self.rows[row_idx as usize];
        match mode {
            0 => erase_range(row, col, cols, bg),
            1 => erase_range(row, 0, col + 1, bg),
            2 => row.erase_with_bg(bg),
            _ => {}
        }
    }

    /// ED: erase-in-display. `mode`: 0/1/2 per `spec.md`; mode 3 (clear
    /// scrollback) is handled by `Terminal`, which owns the scrollback.
    pub fn erase_in_display(&mut self, mode: u16) {
        let row_idx = self.cursor.row();
        let col = self.cursor.col();
        let rows = self.size.rows;
        let cols = self.size.cols;
        let bg = self.pen.bg;
        match mode {
            0 => {
                erase_range(&mut self.rows[row_idx as usize], col, cols, bg);
                for r in (row_idx + 1)..rows {
                    self.rows[r as usize].erase_with_bg(bg);
                }
            }
            1 => {
                for r in 0..row_idx {
                    self.rows[r as usize].erase_with_bg(bg);
                }
                erase_range(&mut self.rows[row_idx as usize], 0, col + 1, bg);
            }
            2 => {
                for r in 0..rows {
                    self.rows[r as usize].erase_with_bg(bg);
                }
            }
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        let bg = self.pen.bg;
        for row in &mut self.rows {
            row.erase_with_bg(bg);
            row.line_overflow = false;
        }
        self.cursor = Cursor::default();
    }

    // ---- resize -----------------------------------------------------------

    pub fn resize(&mut self, new_size: Size) {
        if new_size.cols != self.size.cols {
            for row in &mut self.rows {
                row.resize(new_size.cols);
            }
        }
        let old_rows = self.rows.len() as u16;
        if new_size.rows > old_rows {
            for _ in old_rows..new_size.rows {
                self.rows.push(Row::new(new_size.cols));
            }
        } else if new_size.rows < old_rows {
            self.rows.truncate(new_size.rows as usize);
        }
        self.size = new_size;
        self.cursor.pos.row = self.cursor.pos.row.min(new_size.rows.saturating_sub(1));
        self.cursor.pos.col = self.cursor.pos.col.min(new_size.cols.saturating_sub(1));
        self.tab_stops.retain(|&c| c < new_size.cols);
    }

    // ---- save/restore (DECSC/DECRC) ----------------------------------------

    pub fn save_cursor(&mut self, gl: u8, gr: u8, origin: bool, wraparound: bool) {
        self.saved = Some(SavedCursor {
            row: self.cursor.row(),
            col: self.cursor.col(),
            overflow: self.cursor.overflow,
            attrs: self.pen,
            gl,
            gr,
            origin,
            wraparound,
        });
    }

    /// Restore the saved slot, if any (`spec.md` §3: "Saved cursor is
    /// per-screen: switching screens never exposes the other screen's saved
    /// state" — enforced simply by each `Screen` owning its own `saved`).
    pub fn restore_cursor(&mut self) -> Option<SavedCursor> {
        let saved = self.saved?;
        self.cursor.pos = RowCol::new(saved.row, saved.col);
        self.cursor.overflow = saved.overflow;
        self.pen = saved.attrs;
        Some(saved)
    }

    // ---- selection ----------------------------------------------------------

    /// Grow `[start, end)` (cell indices into the logical, overflow-joined
    /// text of the row containing `start`) to the nearest word boundaries,
    /// per caller-supplied boundary regexes (`spec.md` §4.3). Overflowed
    /// rows are treated as one logical line, matching the definition in
    /// `spec.md` §3.
    pub fn expand_selection(
        &self,
        row: u16,
        start: usize,
        end: usize,
        left_re: &Regex,
        right_re: &Regex,
    ) -> (usize, usize) {
        let (first_row, text) = self.logical_line_text(row);
        let offset = self.offset_in_logical_line(row, first_row);
        let start = start + offset;
        let end = end + offset;

        let new_start = left_re
            .find_iter(&text[..start.min(text.len())])
            .last()
            .map(|m| m.start())
            .unwrap_or(0);
        let new_end = right_re
            .find(&text[end.min(text.len())..])
            .map(|m| end + m.end())
            .unwrap_or(text.len());

        (new_start.saturating_sub(offset), new_end.saturating_sub(offset))
    }

    /// The first row of the logical line containing `row`, and the
    /// concatenated text of every row in that logical line.
    fn logical_line_text(&self, row: u16) -> (u16, String) {
        let mut first = row;
        while first > 0 && self.rows[first as usize - 1].line_overflow {
            first -= 1;
        }
        let mut text = String::new();
        let mut r = first;
        loop {
            text.push_str(&self.rows[r as usize].text());
            let overflow = self.rows[r as usize].line_overflow;
            if !overflow || r as usize + 1 >= self.rows.len() {
                break;
            }
            r += 1;
        }
        (first, text)
    }

    fn offset_in_logical_line(&self, row: u16, first_row: u16) -> usize {
        let mut offset = 0;
        for r in first_row..row {
            offset += self.rows[r as usize].text().chars().count();
        }
        offset
    }
}

fn blank_cell(bg: Color) -> Cell {
    let mut c = Cell::default();
    c.attrs.bg = bg;
    c
}

fn erase_range(row: &mut Row, from: u16, to: u16, bg: Color) {
    let from = from as usize;
    let to = (to as usize).min(row.cells.len());
    for cell in &mut row.cells[from.min(to)..to] {
        cell.erase(bg);
    }
    row.dirty = true;
}

/// Insert `cells` at `at`, growing the row (caller clips afterward).
fn splice_cells(row: &mut Row, at: usize, cells: Vec<Cell>) {
    let at = at.min(row.cells.len());
    let tail = row.cells.split_off(at);
    row.cells.extend(cells);
    row.cells.extend(tail);
}

/// If `col` holds a wide-character spacer whose leading cell was just
/// removed (or vice versa), replace the orphan with a blank in `bg`.
fn fix_orphan_spacer(row: &mut Row, col: usize, bg: Color) {
    let Some(cell) = row.cells.get(col) else {
        return;
    };
    let is_spacer = cell.is_wide_spacer();
    let prev_is_wide = col > 0 && row.cells[col - 1].is_wide();
    if is_spacer && !prev_is_wide {
        row.cells[col].erase(bg);
    }
    if !is_spacer {
        let is_wide_lead = row.cells[col].is_wide();
        let next_is_spacer = row
            .cells
            .get(col + 1)
            .map(|c| c.is_wide_spacer())
            .unwrap_or(false);
        if !is_wide_lead && next_is_spacer {
            row.cells[col + 1].erase(bg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(cols: u16, rows: u16) -> Screen {
        Screen::new(Size::new(rows, cols), false)
    }

    #[test]
    fn insert_string_advances_cursor_by_width() {
        let mut s = screen(10, 3);
        s.insert_string("Hello");
        assert_eq!(s.cursor.col(), 5);
        assert_eq!(s.rows()[0].text().trim_end(), "Hello");
    }

    #[test]
    fn insert_string_does_not_clip_caller_must() {
        let mut s = screen(5, 1);
        s.insert_string("Hello World");
        assert!(s.rows()[0].len() > 5);
        s.maybe_clip_current_row();
        assert_eq!(s.rows()[0].len(), 5);
        assert!(s.cursor.overflow);
    }

    #[test]
    fn overwrite_short_circuits_on_match() {
        let mut s = screen(10, 1);
        s.insert_string("abc");
        s.set_cursor_position(0, 0);
        s.overwrite_string("abc");
        assert_eq!(s.cursor.col(), 3);
        assert_eq!(s.rows()[0].text().trim_end(), "abc");
    }

    #[test]
    fn overwrite_replaces_in_place_without_shifting() {
        let mut s = screen(10, 1);
        s.insert_string("abcdef");
        s.set_cursor_position(0, 1);
        s.overwrite_string("XY");
        assert_eq!(s.rows()[0].text().trim_end(), "aXYdef");
    }

    #[test]
    fn delete_chars_shifts_left_and_pads_right() {
        let mut s = screen(5, 1);
        s.insert_string("abcde");
        s.set_cursor_position(0, 1);
        let removed = s.delete_chars(2);
        assert_eq!(removed, 2);
        assert_eq!(s.rows()[0].text(), "ade  ");
    }

    #[test]
    fn delete_chars_clears_orphan_wide_spacer() {
        let mut s = screen(5, 1);
        s.insert_string("a");
        s.insert_string("\u{4E2D}"); // 中, wide
        s.insert_string("b");
        s.set_cursor_position(0, 1);
        s.delete_chars(1); // removes only the wide char's lead column
        // The orphaned spacer at the old column 2 must now be blank, not a
        // dangling second-half.
        assert!(!s.rows()[0].cells[1].is_wide_spacer());
    }

    #[test]
    fn scroll_up_full_width_evicts_top_row() {
        let mut s = screen(4, 3);
        s.rows[0].cells[0].text = 'A';
        s.rows[1].cells[0].text = 'B';
        let evicted = s.scroll_up_region(0, 2, 0, 3, 1);
        assert_eq!(evicted.len(), 1);
        assert_eq!(evicted[0].cells[0].text, 'A');
        assert_eq!(s.rows()[0].cells[0].text, 'B');
    }

    #[test]
    fn scroll_up_margin_constrained_never_evicts() {
        let mut s = screen(10, 3);
        s.rows[0].cells[2].text = 'A';
        let evicted = s.scroll_up_region(0, 2, 2, 6, 1);
        assert!(evicted.is_empty());
    }

    #[test]
    fn tab_stops_default_every_eight() {
        let s = screen(40, 1);
        assert_eq!(s.next_tab_stop(0, 39), 8);
        assert_eq!(s.next_tab_stop(8, 39), 16);
    }

    #[test]
    fn resize_clamps_cursor_and_pads_rows() {
        let mut s = screen(10, 5);
        s.set_cursor_position(4, 9);
        s.resize(Size::new(3, 6));
        assert_eq!(s.cursor.row(), 2);
        assert_eq!(s.cursor.col(), 5);
        assert_eq!(s.rows()[0].len(), 6);
    }

    #[test]
    fn save_restore_round_trips_position_and_pen() {
        let mut s = screen(10, 3);
        s.set_cursor_position(1, 2);
        s.pen.fg = Color::Indexed(3);
        s.save_cursor(0, 2, false, true);
        s.set_cursor_position(0, 0);
        s.pen.fg = Color::Default;
        s.restore_cursor();
        assert_eq!(s.cursor.pos, RowCol::new(1, 2));
        assert_eq!(s.pen.fg, Color::Indexed(3));
    }
}
