//! Current SGR ("pen") state and the pure width-splitting helper.
//!
//! Grounded on the teacher's `terminal/cursor.rs` `CellAttrs` bitflags and
//! `terminal/state.rs::handle_sgr`, generalized to cover underline styles
//! (single/double/curly), colon-separated 38/48 sub-params (ISO 8613-6), and
//! the `matches_container` equality contract `spec.md` §4.2 names.

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

use crate::color::Color;

bitflags! {
    /// Boolean text attributes (the non-color half of SGR state).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u16 {
        const BOLD          = 1 << 0;
        const FAINT         = 1 << 1;
        const ITALIC        = 1 << 2;
        const BLINK         = 1 << 3;
        const INVERSE       = 1 << 4;
        const INVISIBLE     = 1 << 5;
        const STRIKETHROUGH = 1 << 6;
        /// This cell holds the first column of a 2-column-wide character.
        const WIDE          = 1 << 7;
        /// This cell holds a combining-mark tail (see `Cell::combining`).
        const COMBINING     = 1 << 8;
        /// Trailing padding column of a wide character; never holds text.
        const WIDE_SPACER   = 1 << 9;
        /// DEC line-drawing tile (rendered from the G0 special-graphics map).
        const TILE          = 1 << 10;
    }
}

/// Underline rendering style, selected via SGR 4 (plain) or the ISO 8613-6
/// colon sub-param form `4:0`..`4:5` (off/single/double/curly/dotted/dashed;
/// xterm only distinguishes none/single/double/curly and treats the rest as
/// curly, which this crate follows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Curly,
}

/// The terminal's current graphic-rendition state: the "pen" that new text
/// is stamped with. One lives on each `Screen` (`spec.md` §3: "Screen ...
/// current TextAttributes").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextAttributes {
    pub fg: Color,
    pub bg: Color,
    pub flags: CellFlags,
    pub underline: Underline,
}

impl TextAttributes {
    pub fn reset(&mut self) {
        *self = TextAttributes::default();
    }

    /// True iff `other` carries the identical attribute set as `self`. This
    /// is the `TextAttributes::matches_container` contract from `spec.md`
    /// §4.2: since cells are stored individually (see `DESIGN.md`), "does
    /// this cell belong to the same run as the current pen" reduces to plain
    /// equality.
    pub fn matches_container(&self, other: &TextAttributes) -> bool {
        self == other
    }

    pub fn is_default(&self) -> bool {
        *self == TextAttributes::default()
    }
}

/// One chunk of a string as returned by [`split_widechar_string`]: either a
/// run of narrow (1-column) scalars or a single wide (2-column) scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidthChunk {
    pub text: String,
    pub is_wide: bool,
}

/// Split `s` into consecutive runs of narrow characters and individual wide
/// (East Asian Wide/Full, or otherwise double-width) characters.
///
/// Pure, static function matching `spec.md` §4.2's
/// `splitWidecharString(s) -> [(chunk, is_wide), ...]`. When `ambiguous_wide`
/// is true, East-Asian-Ambiguous-width characters are treated as wide;
/// `spec.md` §9 documents the default as narrow.
pub fn split_widechar_string(s: &str, ambiguous_wide: bool) -> Vec<WidthChunk> {
    let mut chunks = Vec::new();
    let mut narrow_run = String::new();

    for c in s.chars() {
        let width = char_display_width(c, ambiguous_wide);
        if width >= 2 {
            if !narrow_run.is_empty() {
                chunks.push(WidthChunk {
                    text: std::mem::take(&mut narrow_run),
                    is_wide: false,
                });
            }
            chunks.push(WidthChunk {
                text: c.to_string(),
                is_wide: true,
            });
        } else {
            narrow_run.push(c);
        }
    }

    if !narrow_run.is_empty() {
        chunks.push(WidthChunk {
            text: narrow_run,
            is_wide: false,
        });
    }

    chunks
}

/// Display width of a single scalar under the crate's ambiguous-width policy.
pub fn char_display_width(c: char, ambiguous_wide: bool) -> usize {
    match UnicodeWidthChar::width(c) {
        Some(w) => w,
        // Control characters report None; treat as zero-width for layout
        // purposes (the parser never prints them through this path anyway).
        None => 0,
    }
    .max(if ambiguous_wide && is_east_asian_ambiguous(c) {
        2
    } else {
        0
    })
}

/// A tiny, well-known subset of East-Asian-Ambiguous-width codepoints
/// (box-drawing and a few common symbols). Not exhaustive — exhaustive
/// ambiguous-width tables are a data problem better served by a dedicated
/// crate, which is out of scope for this rewrite (see `DESIGN.md`).
fn is_east_asian_ambiguous(c: char) -> bool {
    matches!(c,
        '\u{00A1}' | '\u{00A4}' | '\u{00A7}' | '\u{00A8}' | '\u{00AA}' |
        '\u{00B0}'..='\u{00B4}' | '\u{00B6}'..='\u{00BA}' | '\u{00BC}'..='\u{00BF}' |
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{2500}'..='\u{257F}' |
        '\u{2580}'..='\u{25FF}' | '\u{2605}'..='\u{2606}' | '\u{2630}'..='\u{2637}'
    )
}
