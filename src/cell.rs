//! The terminal grid's unit of storage.

use crate::attrs::{CellFlags, TextAttributes};

/// A single screen cell: one user-perceived character (a base scalar plus
/// any combining marks) and the attributes it was printed with.
///
/// Grounded on the teacher's `terminal/grid.rs::Cell`, extended with a
/// `combining` tail so base+combining-mark sequences (`spec.md` §3's "base +
/// combining sequence") occupy a single cell instead of silently dropping
/// the mark.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// The base Unicode scalar. ' ' (space) for blank cells.
    pub text: char,
    /// Trailing combining marks stacked onto `text`, in input order. Empty
    /// for the overwhelming majority of cells (`String::new()` does not
    /// allocate).
    pub combining: String,
    pub attrs: TextAttributes,
    pub flags: CellFlags,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            text: ' ',
            combining: String::new(),
            attrs: TextAttributes::default(),
            flags: CellFlags::empty(),
        }
    }
}

impl Cell {
    /// The synthetic trailing half of a wide character: holds no text and
    /// can never be written through directly (`spec.md` §3's invariant on
    /// wide-character padding cells).
    pub fn wide_spacer(attrs: TextAttributes) -> Self {
        Self {
            text: ' ',
            combining: String::new(),
            attrs,
            flags: CellFlags::WIDE_SPACER,
        }
    }

    pub fn is_wide_spacer(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_SPACER)
    }

    pub fn is_wide(&self) -> bool {
        self.flags.contains(CellFlags::WIDE)
    }

    /// Reset to blank, default-attributed.
    pub fn clear(&mut self) {
        *self = Cell::default();
    }

    /// Erase to blank using `bg` as the new background, per ECMA-48 (erased
    /// cells carry the *current* background, not the terminal default).
    pub fn erase(&mut self, bg: crate::color::Color) {
        self.text = ' ';
        self.combining.clear();
        self.attrs = TextAttributes {
            bg,
            ..TextAttributes::default()
        };
        self.flags = CellFlags::empty();
    }

    /// The full displayed text of this cell (base + combining marks), for
    /// the renderer and for `get_text_range`-style extraction.
    pub fn display_text(&self) -> String {
        if self.combining.is_empty() {
            self.text.to_string()
        } else {
            let mut s = String::with_capacity(self.text.len_utf8() + self.combining.len());
            s.push(self.text);
            s.push_str(&self.combining);
            s
        }
    }
}
