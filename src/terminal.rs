//! The terminal controller: the glue binding parsed commands to actions on
//! the primary/alternate screens (`spec.md` §1/§4.4).
//!
//! Grounded on the teacher's `terminal/state.rs::TerminalState`, which plays
//! the same role but owns a single `Grid` + optional `alt_grid` instead of
//! two always-present [`Screen`]s, has no left/right margins, no DEC
//! national character sets, and folds `vte::Perform` dispatch into the same
//! type (kept here too, implemented in `parser.rs`, per `spec.md` §9's
//! tagged-enum-dispatch redesign note — `vte`'s char/byte matches already
//! are that tagged dispatch).

use tracing::{debug, trace};
use unicode_width::UnicodeWidthChar;

use crate::attrs::{CellFlags, TextAttributes, Underline};
use crate::charset::{CharacterMap, CharacterMaps};
use crate::color::Color;
use crate::cursor::{RowCol, Size};
use crate::error::{Result, TerminalError};
use crate::event::{NullObserver, TerminalObserver};
use crate::keyboard::{self, KeyEvent};
use crate::modes::Modes;
use crate::options::Options;
use crate::scrollback::Scrollback;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Primary,
    Alternate,
}

/// G0..G3 designations, the active GL/GR slots, and the SS2/SS3 one-shot
/// latch (`spec.md` §3: "character-set state").
#[derive(Debug, Clone, Copy)]
struct CharsetState {
    names: [char; 4],
    gl: usize,
    gr: usize,
    single_shift: Option<usize>,
}

impl Default for CharsetState {
    fn default() -> Self {
        Self {
            names: ['B', 'B', 'B', 'B'],
            gl: 0,
            gr: 1,
            single_shift: None,
        }
    }
}

/// The terminal core: two screens, the margins/modes/charset state that
/// govern them, and the byte-level parser driving it all. `O` is the
/// renderer callback sink (`spec.md` §6); defaults to [`NullObserver`] so a
/// consumer that doesn't need notifications pays nothing for them.
pub struct Terminal<O: TerminalObserver = NullObserver> {
    primary: Screen,
    alternate: Screen,
    active: ScreenKind,
    scrollback: Scrollback,
    size: Size,
    top_margin: u16,
    bottom_margin: u16,
    left_margin: u16,
    right_margin: u16,
    registry: CharacterMaps,
    g_maps: [CharacterMap; 4],
    charset: CharsetState,
    pub modes: Modes,
    pub options: Options,
    title: String,
    last_printed_char: char,
    active_hyperlink: Option<String>,
    pending_output: Vec<u8>,
    active_flag: bool,
    /// DECCKM: cursor keys send application (`SS3 <letter>`) instead of
    /// normal (`CSI <letter>`) sequences. Not part of the DECSC-saved subset.
    modes_cursor_keys_application: bool,
    parser: Option<vte::Parser>,
    dcs_action: Option<char>,
    dcs_intermediates: Vec<u8>,
    dcs_buffer: Vec<u8>,
    pub(crate) observer: O,
}

impl Terminal<NullObserver> {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_options(cols, rows, Options::default())
    }

    pub fn with_options(cols: u16, rows: u16, options: Options) -> Self {
        Self::with_observer(cols, rows, options, NullObserver)
    }
}

impl<O: TerminalObserver> Terminal<O> {
    pub fn with_observer(cols: u16, rows: u16, options: Options, observer: O) -> Self {
        let size = Size::new(rows, cols);
        let registry = CharacterMaps::defaults();
        let g_maps = [
            registry.get('B'),
            registry.get('B'),
            registry.get('B'),
            registry.get('B'),
        ];
        Self {
            primary: Screen::new(size, options.ambiguous_wide),
            alternate: Screen::new(size, options.ambiguous_wide),
            active: ScreenKind::Primary,
            scrollback: Scrollback::new(options.scrollback_limit),
            size,
            top_margin: 0,
            bottom_margin: rows.saturating_sub(1),
            left_margin: 0,
            right_margin: cols.saturating_sub(1),
            registry,
            g_maps,
            charset: CharsetState::default(),
            modes: Modes::default(),
            options,
            title: String::new(),
            last_printed_char: ' ',
            active_hyperlink: None,
            pending_output: Vec::new(),
            active_flag: true,
            modes_cursor_keys_application: false,
            parser: Some(vte::Parser::new()),
            dcs_action: None,
            dcs_intermediates: Vec::new(),
            dcs_buffer: Vec::new(),
            observer,
        }
    }

    // ---- accessors ----------------------------------------------------

    pub fn active_kind(&self) -> ScreenKind {
        self.active
    }

    pub fn screen(&self) -> &Screen {
        match self.active {
            ScreenKind::Primary => &self.primary,
            ScreenKind::Alternate => &self.alternate,
        }
    }

    fn screen_mut(&mut self) -> &mut Screen {
        match self.active {
            ScreenKind::Primary => &mut self.primary,
            ScreenKind::Alternate => &mut self.alternate,
        }
    }

    pub fn cursor(&self) -> RowCol {
        self.screen().cursor.pos
    }

    pub fn cursor_overflow(&self) -> bool {
        self.screen().cursor.overflow
    }

    pub fn attrs(&self) -> TextAttributes {
        self.screen().pen
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn margins(&self) -> (u16, u16, u16, u16) {
        (self.top_margin, self.bottom_margin, self.left_margin, self.right_margin)
    }

    /// Detach this terminal from further I/O. Any subsequent `interpret` or
    /// `on_key` call returns `Err(TerminalError::InactiveIo)` instead of
    /// acting (`spec.md` §7's one caller-visible error case).
    pub fn detach(&mut self) {
        self.active_flag = false;
    }

    /// Drain response bytes queued by DSR/DA/DECRQSS/OSC-52-query/mouse and
    /// focus reports, for the consumer to write back to the host.
    pub fn take_pending_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.pending_output)
    }

    fn queue_output(&mut self, bytes: Vec<u8>) {
        self.pending_output.extend(bytes);
    }

    // ---- byte-level entry point -----------------------------------------

    /// Feed host bytes. Processes every fully-formed command in `bytes`
    /// before returning; any trailing partial sequence is buffered in the
    /// parser's own state for the next call (`spec.md` §5).
    pub fn interpret(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.active_flag {
            return Err(TerminalError::InactiveIo);
        }
        let mut parser = self.parser.take().expect("parser always present while attached");
        match self.options.receive_encoding {
            crate::options::Encoding::Utf8 => {
                for &b in bytes {
                    parser.advance(self, b);
                }
            }
            crate::options::Encoding::Raw => {
                let mut buf = [0u8; 2];
                for &b in bytes {
                    if b < 0x80 {
                        parser.advance(self, b);
                    } else {
                        let ch = char::from_u32(b as u32).unwrap();
                        for &enc in ch.encode_utf8(&mut buf).as_bytes() {
                            parser.advance(self, enc);
                        }
                    }
                }
            }
        }
        self.parser = Some(parser);
        Ok(())
    }

    pub fn on_key(&mut self, event: KeyEvent) -> Result<Vec<u8>> {
        if !self.active_flag {
            return Err(TerminalError::InactiveIo);
        }
        Ok(keyboard::encode(&event, self))
    }

    pub fn cursor_keys_application(&self) -> bool {
        self.modes_cursor_keys_application
    }

    // ---- resize -----------------------------------------------------------

    pub fn resize(&mut self, cols: u16, rows: u16) {
        let size = Size::new(rows, cols);
        self.primary.resize(size);
        self.alternate.resize(size);
        self.size = size;
        self.top_margin = 0;
        self.bottom_margin = rows.saturating_sub(1);
        self.left_margin = 0;
        self.right_margin = cols.saturating_sub(1);
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.options.cursor_visible = visible;
    }

    pub fn set_cursor_blink(&mut self, blink: bool) {
        self.options.cursor_blink = blink;
    }

    // ---- printing ----------------------------------------------------------

    pub(crate) fn handle_print(&mut self, ch: char) {
        let ch = self.apply_charset(ch);
        let width = UnicodeWidthChar::width(ch).unwrap_or(1);

        if width == 0 {
            if self.screen_mut().append_combining_before_cursor(ch) {
                self.observer.row_changed(self.cursor().row);
                return;
            }
            // Nothing to attach to (e.g. combining mark at column 0): treat
            // as a zero-width printable rather than dropping it silently.
        }
        let width = width.max(1) as u16;
        self.last_printed_char = ch;

        self.wrap_if_needed(width);

        let s = ch.to_string();
        if self.options.insert {
            self.screen_mut().insert_string(&s);
        } else {
            self.screen_mut().overwrite_string(&s);
        }
        self.screen_mut().maybe_clip_current_row();
        self.observer.row_changed(self.cursor().row);
    }

    /// If the cursor's overflow latch is set, or the next character would
    /// not fit before the right margin, perform the deferred CR+LF first
    /// (`spec.md` §4.4).
    fn wrap_if_needed(&mut self, width: u16) {
        let cursor = self.screen().cursor;
        let would_overflow = cursor.col() as u32 + width as u32 > self.right_margin as u32 + 1;
        if cursor.overflow || (would_overflow && self.options.wraparound) {
            if self.options.wraparound {
                let row = cursor.row();
                if let Some(r) = self.screen_mut().row_mut(row) {
                    r.line_overflow = true;
                }
                self.carriage_return();
                self.newline();
            } else {
                let col = self.right_margin;
                self.screen_mut().set_cursor_position(cursor.row(), col);
            }
        }
    }

    /// REP (CSI b): repeat the last printed graphic character `n` times.
    pub(crate) fn repeat_last_char(&mut self, n: u16) {
        let ch = self.last_printed_char;
        for _ in 0..n.min(65535) {
            self.handle_print(ch);
        }
    }

    // ---- charset -----------------------------------------------------------

    pub(crate) fn designate_charset(&mut self, g_index: usize, name: char) {
        if let Some(slot) = self.g_maps.get_mut(g_index) {
            *slot = self.registry.get(name);
        }
        if let Some(n) = self.charset.names.get_mut(g_index) {
            *n = name;
        }
    }

    pub(crate) fn invoke_gl(&mut self, g_index: usize) {
        self.charset.gl = g_index.min(3);
    }

    pub(crate) fn invoke_gr(&mut self, g_index: usize) {
        self.charset.gr = g_index.min(3);
    }

    pub(crate) fn single_shift(&mut self, g_index: usize) {
        self.charset.single_shift = Some(g_index.min(3));
    }

    /// Select G1 into GL (SO/Shift-Out) or G0 into GL (SI/Shift-In).
    pub(crate) fn shift_out(&mut self) {
        self.charset.gl = 1;
    }

    pub(crate) fn shift_in(&mut self) {
        self.charset.gl = 0;
    }

    fn apply_charset(&mut self, ch: char) -> char {
        let idx = if let Some(ss) = self.charset.single_shift.take() {
            ss
        } else {
            let code = ch as u32;
            if (0xA0..=0xFF).contains(&code) {
                self.charset.gr
            } else {
                self.charset.gl
            }
        };
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
            self.g_maps[idx].gl(code as u8)
        } else {
            ch
        }
    }

    // ---- cursor movement ----------------------------------------------------

    fn in_scroll_region(&self, row: u16) -> bool {
        row >= self.top_margin && row <= self.bottom_margin
    }

    pub(crate) fn cursor_up(&mut self, n: u16) {
        let s = self.screen();
        let floor = if self.in_scroll_region(s.cursor.row()) {
            self.top_margin
        } else {
            0
        };
        let row = s.cursor.row().saturating_sub(n).max(floor);
        let col = s.cursor.col();
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_down(&mut self, n: u16) {
        let s = self.screen();
        let ceil = if self.in_scroll_region(s.cursor.row()) {
            self.bottom_margin
        } else {
            self.size.rows.saturating_sub(1)
        };
        let row = s.cursor.row().saturating_add(n).min(ceil);
        let col = s.cursor.col();
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_forward(&mut self, n: u16) {
        let s = self.screen();
        let ceil = if self.options.origin && self.in_scroll_region(s.cursor.row()) {
            self.right_margin
        } else {
            self.size.cols.saturating_sub(1)
        };
        let row = s.cursor.row();
        let col = s.cursor.col().saturating_add(n).min(ceil);
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_backward(&mut self, n: u16) {
        let s = self.screen();
        let floor = if self.options.origin && self.in_scroll_region(s.cursor.row()) {
            self.left_margin
        } else {
            0
        };
        let row = s.cursor.row();
        let col = s.cursor.col().saturating_sub(n).max(floor);
        self.screen_mut().set_cursor_position(row, col);
    }

    /// CUP/HVP. `row`/`col` are already 0-based. Honors DECOM (`spec.md`
    /// §4.1: "obey origin mode").
    pub(crate) fn cursor_to(&mut self, row: u16, col: u16) {
        let (row, col) = if self.options.origin {
            (
                self.top_margin.saturating_add(row).min(self.bottom_margin),
                self.left_margin.saturating_add(col).min(self.right_margin),
            )
        } else {
            (row.min(self.size.rows.saturating_sub(1)), col.min(self.size.cols.saturating_sub(1)))
        };
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_to_col(&mut self, col: u16) {
        let row = self.screen().cursor.row();
        let col = if self.options.origin && self.in_scroll_region(row) {
            self.left_margin.saturating_add(col).min(self.right_margin)
        } else {
            col.min(self.size.cols.saturating_sub(1))
        };
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_to_row(&mut self, row: u16) {
        let col = self.screen().cursor.col();
        let row = if self.options.origin {
            self.top_margin.saturating_add(row).min(self.bottom_margin)
        } else {
            row.min(self.size.rows.saturating_sub(1))
        };
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_next_line(&mut self, n: u16) {
        self.cursor_down(n);
        let row = self.screen().cursor.row();
        let col = self.left_margin;
        self.screen_mut().set_cursor_position(row, col);
    }

    pub(crate) fn cursor_prev_line(&mut self, n: u16) {
        self.cursor_up(n);
        let row = self.screen().cursor.row();
        let col = self.left_margin;
        self.screen_mut().set_cursor_position(row, col);
    }

    // ---- C0 controls --------------------------------------------------------

    pub(crate) fn bell(&mut self) {
        self.observer.bell();
    }

    pub(crate) fn carriage_return(&mut self) {
        let row = self.screen().cursor.row();
        let col = if self.in_scroll_region(row) {
            self.left_margin
        } else {
            0
        };
        self.screen_mut().set_cursor_position(row, col);
    }

    /// LF/VT/FF: advance a line, scrolling at the bottom margin.
    pub(crate) fn newline(&mut self) {
        let row = self.screen().cursor.row();
        if row == self.bottom_margin {
            self.scroll_up(1);
        } else if row + 1 < self.size.rows {
            let col = self.screen().cursor.col();
            self.screen_mut().set_cursor_position(row + 1, col);
        }
        if self.options.autolf {
            self.carriage_return();
        }
    }

    /// RI: reverse index, scrolling down at the top margin.
    pub(crate) fn reverse_index(&mut self) {
        let row = self.screen().cursor.row();
        if row == self.top_margin {
            self.scroll_down(1);
        } else if row > 0 {
            let col = self.screen().cursor.col();
            self.screen_mut().set_cursor_position(row - 1, col);
        }
    }

    pub(crate) fn backspace(&mut self) {
        let cursor = self.screen().cursor;
        if cursor.col() > self.left_margin {
            self.screen_mut().set_cursor_position(cursor.row(), cursor.col() - 1);
        } else if self.modes.reverse_wrap && cursor.row() > 0 {
            // Only unwind an actual soft-wrapped line, never jump across an
            // unrelated row boundary.
            let prev_wrapped = self
                .screen()
                .row(cursor.row() - 1)
                .map(|r| r.line_overflow)
                .unwrap_or(false);
            if prev_wrapped {
                self.screen_mut()
                    .set_cursor_position(cursor.row() - 1, self.right_margin);
            }
        }
    }

    pub(crate) fn tab(&mut self) {
        let cursor = self.screen().cursor;
        let next = self.screen().next_tab_stop(cursor.col(), self.right_margin);
        self.screen_mut().set_cursor_position(cursor.row(), next);
    }

    pub(crate) fn back_tab(&mut self, n: u16) {
        for _ in 0..n {
            let cursor = self.screen().cursor;
            let prev = self.screen().prev_tab_stop(cursor.col(), self.left_margin);
            self.screen_mut().set_cursor_position(cursor.row(), prev);
        }
    }

    pub(crate) fn set_tab_stop_here(&mut self) {
        let col = self.screen().cursor.col();
        self.screen_mut().set_tab_stop(col);
    }

    pub(crate) fn clear_tab_stop(&mut self, mode: u16) {
        match mode {
            0 => {
                let col = self.screen().cursor.col();
                self.screen_mut().clear_tab_stop(col);
            }
            3 => self.screen_mut().clear_all_tab_stops(),
            _ => {}
        }
    }

    // ---- scrolling & erasure -------------------------------------------------

    pub(crate) fn scroll_up(&mut self, n: u16) {
        let (top, bottom, left, right) = (self.top_margin, self.bottom_margin, self.left_margin, self.right_margin);
        let is_primary = matches!(self.active, ScreenKind::Primary);
        let evicted = self.screen_mut().scroll_up_region(top, bottom, left, right, n);
        // Only a genuine top-of-screen, full-width scroll on the primary
        // screen contributes to scrollback (`spec.md` §3; IL/DL within a
        // restricted region do not, see DESIGN.md).
        if is_primary && top == 0 {
            for row in evicted {
                self.scrollback.push(row);
            }
        }
        self.observer.row_changed(bottom);
    }

    pub(crate) fn scroll_down(&mut self, n: u16) {
        let (top, bottom, left, right) = (self.top_margin, self.bottom_margin, self.left_margin, self.right_margin);
        self.screen_mut().scroll_down_region(top, bottom, left, right, n);
        self.observer.row_changed(top);
    }

    pub(crate) fn insert_lines(&mut self, n: u16) {
        let row = self.screen().cursor.row();
        if !self.in_scroll_region(row) {
            return;
        }
        let (_, bottom, left, right) = self.margins();
        self.screen_mut().scroll_down_region(row, bottom, left, right, n);
        self.screen_mut().set_cursor_position(row, self.left_margin);
    }

    pub(crate) fn delete_lines(&mut self, n: u16) {
        let row = self.screen().cursor.row();
        if !self.in_scroll_region(row) {
            return;
        }
        let (_, bottom, left, right) = self.margins();
        let _ = self.screen_mut().scroll_up_region(row, bottom, left, right, n);
        self.screen_mut().set_cursor_position(row, self.left_margin);
    }

    pub(crate) fn erase_in_line(&mut self, mode: u16) {
        self.screen_mut().erase_in_line(mode);
        self.observer.row_changed(self.cursor().row);
    }

    pub(crate) fn erase_in_display(&mut self, mode: u16) {
        if mode == 3 {
            self.scrollback.clear();
            return;
        }
        self.screen_mut().erase_in_display(mode);
    }

    pub(crate) fn insert_chars(&mut self, n: u16) {
        let blanks = " ".repeat(n as usize);
        self.screen_mut().insert_string(&blanks);
        self.screen_mut().maybe_clip_current_row();
    }

    pub(crate) fn delete_chars(&mut self, n: u16) {
        self.screen_mut().delete_chars(n);
    }

    /// ECH: erase exactly `n` cells from the cursor without shifting
    /// (unlike DCH). Implemented directly rather than via `erase_in_line`,
    /// which always erases to end-of-line regardless of `n`.
    pub(crate) fn erase_chars(&mut self, n: u16) {
        let row = self.cursor().row;
        let col = self.cursor().col;
        let cols = self.size.cols;
        let bg = self.attrs().bg;
        if let Some(r) = self.screen_mut().row_mut(row) {
            let end = col.saturating_add(n).min(cols) as usize;
            for cell in &mut r.cells[col as usize..end] {
                cell.erase(bg);
            }
            r.dirty = true;
        }
    }

    // ---- save/restore cursor (DECSC/DECRC) ------------------------------

    pub(crate) fn save_cursor(&mut self) {
        let (gl, gr, origin, wrap) = (self.charset.gl as u8, self.charset.gr as u8, self.options.origin, self.options.wraparound);
        self.screen_mut().save_cursor(gl, gr, origin, wrap);
    }

    pub(crate) fn restore_cursor(&mut self) {
        if let Some(saved) = self.screen_mut().restore_cursor() {
            self.charset.gl = saved.gl as usize;
            self.charset.gr = saved.gr as usize;
            self.options.origin = saved.origin;
            self.options.wraparound = saved.wraparound;
        }
    }

    // ---- screen switching ------------------------------------------------

    pub(crate) fn switch_to_alternate(&mut self, clear: bool) {
        if self.active == ScreenKind::Alternate {
            return;
        }
        self.active = ScreenKind::Alternate;
        self.modes.alt_screen_active = true;
        if clear {
            self.alternate.clear();
        }
    }

    pub(crate) fn switch_to_primary(&mut self) {
        if self.active == ScreenKind::Primary {
            return;
        }
        self.active = ScreenKind::Primary;
        self.modes.alt_screen_active = false;
    }

    // ---- margins & column switch -------------------------------------------

    pub(crate) fn set_scroll_margins(&mut self, top: u16, bottom: u16) {
        let top = top.min(self.size.rows.saturating_sub(1));
        let bottom = bottom.min(self.size.rows.saturating_sub(1));
        if top < bottom {
            self.top_margin = top;
            self.bottom_margin = bottom;
        } else {
            self.top_margin = 0;
            self.bottom_margin = self.size.rows.saturating_sub(1);
        }
        let row = if self.options.origin { self.top_margin } else { 0 };
        self.screen_mut().set_cursor_position(row, 0);
    }

    pub(crate) fn set_lr_margins(&mut self, left: u16, right: u16) {
        if !self.modes.left_right_margin_mode {
            return;
        }
        let left = left.min(self.size.cols.saturating_sub(1));
        let right = right.min(self.size.cols.saturating_sub(1));
        if left < right {
            self.left_margin = left;
            self.right_margin = right;
        } else {
            self.left_margin = 0;
            self.right_margin = self.size.cols.saturating_sub(1);
        }
        self.screen_mut().set_cursor_position(0, 0);
    }

    /// DECCOLM (mode 3): switch the 80/132-column layout. Clears the screen
    /// and resets margins (`spec.md` §4.1's DEC-private mode table).
    pub(crate) fn set_column_mode(&mut self, wide: bool) {
        self.modes.column_132 = wide;
        let cols = if wide { 132 } else { 80 };
        self.resize(cols, self.size.rows);
        self.primary.clear();
        self.alternate.clear();
    }

    // ---- SGR ----------------------------------------------------------------

    pub(crate) fn handle_sgr(&mut self, raw: &[Vec<u16>]) {
        let empty_group = [0u16];
        let default_groups = [empty_group.to_vec()];
        let groups: &[Vec<u16>] = if raw.is_empty() { &default_groups } else { raw };
        let mut i = 0;
        while i < groups.len() {
            let group = &groups[i];
            let code = group.first().copied().unwrap_or(0);
            let mut pen = self.screen().pen;
            match code {
                0 => pen = TextAttributes::default(),
                1 => pen.flags.insert(CellFlags::BOLD),
                2 => pen.flags.insert(CellFlags::FAINT),
                3 => pen.flags.insert(CellFlags::ITALIC),
                4 => {
                    // Bare `CSI 4 m` (no colon sub-param) means "underline
                    // on" (single), matching legacy terminals. The ISO
                    // 8613-6 colon form `4:0`..`4:5` names an explicit
                    // style instead.
                    pen.underline = match group.get(1).copied() {
                        None => Underline::Single,
                        Some(0) => Underline::None,
                        Some(1) => Underline::Single,
                        Some(2) => Underline::Double,
                        Some(3..=5) => Underline::Curly,
                        Some(_) => Underline::Single,
                    };
                }
                5 | 6 => pen.flags.insert(CellFlags::BLINK),
                7 => pen.flags.insert(CellFlags::INVERSE),
                8 => pen.flags.insert(CellFlags::INVISIBLE),
                9 => pen.flags.insert(CellFlags::STRIKETHROUGH),
                21 => pen.underline = Underline::Double,
                22 => {
                    pen.flags.remove(CellFlags::BOLD);
                    pen.flags.remove(CellFlags::FAINT);
                }
                23 => pen.flags.remove(CellFlags::ITALIC),
                24 => pen.underline = Underline::None,
                25 => pen.flags.remove(CellFlags::BLINK),
                27 => pen.flags.remove(CellFlags::INVERSE),
                28 => pen.flags.remove(CellFlags::INVISIBLE),
                29 => pen.flags.remove(CellFlags::STRIKETHROUGH),
                30..=37 => pen.fg = Color::Indexed(code as u8 - 30),
                38 => {
                    let (color, consumed) = parse_extended_color_grouped(groups, i);
                    if let Some(c) = color {
                        pen.fg = c;
                    }
                    i += consumed;
                    self.screen_mut().pen = pen;
                    continue;
                }
                39 => pen.fg = Color::Default,
                40..=47 => pen.bg = Color::Indexed(code as u8 - 40),
                48 => {
                    let (color, consumed) = parse_extended_color_grouped(groups, i);
                    if let Some(c) = color {
                        pen.bg = c;
                    }
                    i += consumed;
                    self.screen_mut().pen = pen;
                    continue;
                }
                49 => pen.bg = Color::Default,
                58 => {
                    // Underline color: parsed but not separately stored
                    // (the crate renders underline in the foreground color,
                    // matching the teacher's un-colored-underline baseline).
                    let (_, consumed) = parse_extended_color_grouped(groups, i);
                    i += consumed;
                    self.screen_mut().pen = pen;
                    continue;
                }
                59 => {}
                90..=97 => pen.fg = Color::Indexed(code as u8 - 90 + 8),
                100..=107 => pen.bg = Color::Indexed(code as u8 - 100 + 8),
                other => {
                    trace!(param = other, "unsupported SGR parameter ignored");
                }
            }
            self.screen_mut().pen = pen;
            i += 1;
        }
    }

    // ---- status reports -------------------------------------------------

    pub(crate) fn report_cursor_position(&mut self) {
        let c = self.cursor();
        let response = format!("\x1b[{};{}R", c.row + 1, c.col + 1);
        self.queue_output(response.into_bytes());
    }

    pub(crate) fn report_ok(&mut self) {
        self.queue_output(b"\x1b[0n".to_vec());
    }

    pub(crate) fn report_primary_device_attributes(&mut self) {
        self.queue_output(b"\x1b[?62;22c".to_vec());
    }

    pub(crate) fn report_secondary_device_attributes(&mut self) {
        self.queue_output(b"\x1b[>0;10;0c".to_vec());
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
        self.observer.title_changed(&self.title);
    }

    pub(crate) fn set_hyperlink(&mut self, uri: Option<String>) {
        self.active_hyperlink = uri;
    }

    pub(crate) fn clipboard_write(&mut self, text: &str) {
        self.observer.clipboard_write(text);
    }

    pub(crate) fn clipboard_read_response(&mut self, target: &str) {
        let text = self.observer.clipboard_read().unwrap_or_default();
        let encoded = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, text.as_bytes());
        let response = format!("\x1b]52;{};{}\x1b\\", target, encoded);
        self.queue_output(response.into_bytes());
    }

    /// OSC 4: forward a palette-entry assignment to the observer.
    pub(crate) fn set_palette_entry(&mut self, index: u8, spec: &str) {
        self.observer.palette_set(index, spec);
    }

    /// OSC 104: forward a palette reset (one entry, or all if `index` is
    /// `None`) to the observer.
    pub(crate) fn reset_palette_entry(&mut self, index: Option<u8>) {
        self.observer.palette_reset(index);
    }

    pub(crate) fn max_string_sequence(&self) -> usize {
        self.options.max_string_sequence
    }

    // ---- mode set/reset -------------------------------------------------

    pub(crate) fn set_ansi_mode(&mut self, param: u16, enable: bool) {
        match param {
            4 => self.options.insert = enable,
            20 => self.options.autolf = enable,
            _ => debug!(mode = param, "unsupported ANSI mode ignored"),
        }
    }

    pub(crate) fn set_dec_mode(&mut self, param: u16, enable: bool) {
        match param {
            1 => { /* DECCKM tracked via modes_cursor_keys_application */ self.modes_cursor_keys_application = enable; }
            3 => self.set_column_mode(enable),
            5 => self.modes.reverse_video = enable,
            6 => {
                self.options.origin = enable;
                let row = if enable { self.top_margin } else { 0 };
                self.screen_mut().set_cursor_position(row, self.left_margin);
            }
            7 => self.options.wraparound = enable,
            12 => self.options.cursor_blink = enable,
            25 => self.options.cursor_visible = enable,
            45 => self.modes.reverse_wrap = enable,
            47 => {
                if enable {
                    self.switch_to_alternate(false);
                } else {
                    self.switch_to_primary();
                }
            }
            69 => self.modes.left_right_margin_mode = enable,
            1000 => self.modes.mouse_x10 = enable,
            1002 => self.modes.mouse_button_motion = enable,
            1003 => self.modes.mouse_any_motion = enable,
            1004 => self.modes.focus_events = enable,
            1005 => self.modes.mouse_utf8 = enable,
            1006 => self.modes.mouse_sgr = enable,
            1007 => self.modes.alternate_scroll = enable,
            1047 => {
                if enable {
                    self.switch_to_alternate(true);
                } else {
                    self.switch_to_primary();
                }
            }
            1048 => {
                if enable {
                    self.save_cursor();
                } else {
                    self.restore_cursor();
                }
            }
            1049 => {
                if enable {
                    self.save_cursor();
                    self.switch_to_alternate(true);
                } else {
                    self.switch_to_primary();
                    self.restore_cursor();
                }
            }
            2004 => self.modes.bracketed_paste = enable,
            2026 => self.modes.synchronized_output = enable,
            other => debug!(mode = other, "unsupported DEC private mode ignored"),
        }
    }

    pub(crate) fn dec_mode_state(&self, mode: u16) -> Option<bool> {
        Some(match mode {
            1 => self.modes_cursor_keys_application,
            3 => self.modes.column_132,
            5 => self.modes.reverse_video,
            6 => self.options.origin,
            7 => self.options.wraparound,
            12 => self.options.cursor_blink,
            25 => self.options.cursor_visible,
            45 => self.modes.reverse_wrap,
            47 | 1047 | 1049 => self.modes.alt_screen_active,
            69 => self.modes.left_right_margin_mode,
            1000 => self.modes.mouse_x10,
            1002 => self.modes.mouse_button_motion,
            1003 => self.modes.mouse_any_motion,
            1004 => self.modes.focus_events,
            1005 => self.modes.mouse_utf8,
            1006 => self.modes.mouse_sgr,
            1007 => self.modes.alternate_scroll,
            2004 => self.modes.bracketed_paste,
            2026 => self.modes.synchronized_output,
            _ => return None,
        })
    }

    pub(crate) fn ansi_mode_state(&self, mode: u16) -> Option<bool> {
        Some(match mode {
            4 => self.options.insert,
            20 => self.options.autolf,
            _ => return None,
        })
    }

    pub(crate) fn report_mode(&mut self, mode: u16, dec_private: bool) {
        let state = if dec_private {
            self.dec_mode_state(mode)
        } else {
            self.ansi_mode_state(mode)
        };
        let pm = match state {
            Some(true) => 1,
            Some(false) => 2,
            None => 0,
        };
        let prefix = if dec_private { "?" } else { "" };
        let response = format!("\x1b[{}{};{}$y", prefix, mode, pm);
        self.queue_output(response.into_bytes());
    }

    pub(crate) fn set_cursor_style(&mut self, style: u16) {
        self.options.cursor_style = crate::options::CursorStyle::from_decscusr(style);
    }

    /// Soft reset (`CSI ! p` / DECSTR): resets a subset of state, short of
    /// RIS (`spec.md` §4.1).
    pub(crate) fn soft_reset(&mut self) {
        self.options.origin = false;
        self.options.wraparound = true;
        self.options.insert = false;
        self.modes.reverse_wrap = false;
        self.top_margin = 0;
        self.bottom_margin = self.size.rows.saturating_sub(1);
        self.left_margin = 0;
        self.right_margin = self.size.cols.saturating_sub(1);
        self.screen_mut().pen = TextAttributes::default();
    }

    /// RIS: full reset, equivalent to reconstructing a fresh terminal at the
    /// current size, but without disturbing the caller's observer
    /// (`spec.md` §4.1/§8's "idempotent reset" property).
    pub(crate) fn full_reset(&mut self) {
        let size = self.size;
        self.options = Options::default();
        self.primary = Screen::new(size, self.options.ambiguous_wide);
        self.alternate = Screen::new(size, self.options.ambiguous_wide);
        self.active = ScreenKind::Primary;
        self.scrollback = Scrollback::new(self.options.scrollback_limit);
        self.top_margin = 0;
        self.bottom_margin = size.rows.saturating_sub(1);
        self.left_margin = 0;
        self.right_margin = size.cols.saturating_sub(1);
        self.registry = CharacterMaps::defaults();
        let ascii = self.registry.get('B');
        self.g_maps = [ascii.clone(), ascii.clone(), ascii.clone(), ascii];
        self.charset = CharsetState::default();
        self.modes = Modes::default();
        self.title.clear();
        self.last_printed_char = ' ';
        self.active_hyperlink = None;
        self.pending_output.clear();
        self.modes_cursor_keys_application = false;
        self.parser = Some(vte::Parser::new());
        self.dcs_action = None;
        self.dcs_intermediates.clear();
        self.dcs_buffer.clear();
    }

    // ---- DCS (device control string) handling --------------------------

    pub(crate) fn begin_dcs(&mut self, intermediates: &[u8], action: char) {
        self.dcs_action = Some(action);
        self.dcs_intermediates.clear();
        self.dcs_intermediates.extend_from_slice(intermediates);
        self.dcs_buffer.clear();
    }

    pub(crate) fn put_dcs_byte(&mut self, byte: u8) {
        if self.dcs_buffer.len() < self.max_string_sequence() {
            self.dcs_buffer.push(byte);
        }
    }

    pub(crate) fn end_dcs(&mut self) {
        let action = self.dcs_action.take();
        let intermediates = std::mem::take(&mut self.dcs_intermediates);
        let data = std::mem::take(&mut self.dcs_buffer);
        match (action, intermediates.as_slice()) {
            (Some('q'), [b'$']) => self.report_decrqss(&data),
            (Some('q'), [b'+']) => self.report_xtgettcap(&data),
            _ => {}
        }
    }

    /// DECRQSS (`DCS $ q Pt ST`): report the current value of the status
    /// string named by `Pt`, or `0$r` if `Pt` names nothing this terminal
    /// tracks.
    fn report_decrqss(&mut self, query: &[u8]) {
        let query = String::from_utf8_lossy(query);
        let status = match query.as_ref() {
            "m" => Some(sgr_status_string(self.attrs())),
            " q" => Some("0 q".to_string()),
            "r" => Some(format!("{};{}r", self.top_margin + 1, self.bottom_margin + 1)),
            "s" => Some(format!("{};{}s", self.left_margin + 1, self.right_margin + 1)),
            _ => None,
        };
        let response = match status {
            Some(pt) => format!("\x1bP1$r{}\x1b\\", pt),
            None => "\x1bP0$r\x1b\\".to_string(),
        };
        self.queue_output(response.into_bytes());
    }

    /// XTGETTCAP (`DCS + q Pt ST`): `Pt` is a `;`-separated list of hex-ASCII
    /// encoded terminfo capability names; reply with the hex-encoded
    /// `name=value` pairs this terminal recognizes.
    fn report_xtgettcap(&mut self, data: &[u8]) {
        let raw = String::from_utf8_lossy(data);
        let mut pairs = Vec::new();
        for item in raw.split(';').filter(|s| !s.is_empty()) {
            let Some(name) = decode_hex_ascii(item) else {
                self.queue_output(b"\x1bP0+r\x1b\\".to_vec());
                return;
            };
            let Some(value) = tcap_capability_value(&name) else {
                self.queue_output(b"\x1bP0+r\x1b\\".to_vec());
                return;
            };
            pairs.push(format!("{}={}", encode_hex_ascii(&name), encode_hex_ascii(value)));
        }
        let response = if pairs.is_empty() {
            "\x1bP0+r\x1b\\".to_string()
        } else {
            format!("\x1bP1+r{}\x1b\\", pairs.join(";"))
        };
        self.queue_output(response.into_bytes());
    }
}

fn sgr_status_string(attrs: TextAttributes) -> String {
    let mut parts = vec!["0".to_string()];
    if attrs.flags.contains(CellFlags::BOLD) {
        parts.push("1".to_string());
    }
    if attrs.flags.contains(CellFlags::FAINT) {
        parts.push("2".to_string());
    }
    if attrs.flags.contains(CellFlags::ITALIC) {
        parts.push("3".to_string());
    }
    match attrs.underline {
        Underline::Single => parts.push("4".to_string()),
        Underline::Double => parts.push("21".to_string()),
        Underline::Curly => parts.push("4:3".to_string()),
        Underline::None => {}
    }
    if attrs.flags.contains(CellFlags::INVERSE) {
        parts.push("7".to_string());
    }
    match attrs.fg {
        Color::Indexed(n) if n < 8 => parts.push((30 + n).to_string()),
        Color::Indexed(n) => parts.push((90 + n - 8).to_string()),
        Color::Rgb(r, g, b) => parts.push(format!("38:2:{}:{}:{}", r, g, b)),
        Color::Default => {}
    }
    match attrs.bg {
        Color::Indexed(n) if n < 8 => parts.push((40 + n).to_string()),
        Color::Indexed(n) => parts.push((100 + n - 8).to_string()),
        Color::Rgb(r, g, b) => parts.push(format!("48:2:{}:{}:{}", r, g, b)),
        Color::Default => {}
    }
    format!("{}m", parts.join(";"))
}

fn decode_hex_ascii(s: &str) -> Option<String> {
    if s.len() % 2 != 0 {
        return None;
    }
    let mut out = Vec::with_capacity(s.len() / 2);
    let bytes = s.as_bytes();
    for chunk in bytes.chunks(2) {
        let hi = (chunk[0] as char).to_digit(16)?;
        let lo = (chunk[1] as char).to_digit(16)?;
        out.push((hi * 16 + lo) as u8);
    }
    String::from_utf8(out).ok()
}

fn encode_hex_ascii(s: &str) -> String {
    s.bytes().map(|b| format!("{:02x}", b)).collect()
}

/// A handful of terminfo capabilities xterm itself answers for XTGETTCAP;
/// enough for clients that probe before deciding whether to use a feature.
fn tcap_capability_value(name: &str) -> Option<&'static str> {
    match name {
        "TN" | "name" => Some("xterm-256color"),
        "Co" | "colors" => Some("256"),
        "RGB" => Some("8"),
        "Tc" => Some(""),
        "Ms" => Some("\x1b]52;%p1%s;%p2%s\x07"),
        _ => None,
    }
}

/// Parse the ISO 8613-6-or-legacy extended color sub-params for SGR 38/48,
/// starting at `params[0]` (the `38`/`48` itself). Returns the color (if
/// well-formed) and how many additional params were consumed.
/// Parses the extended-color argument of SGR 38/48/58 starting at group
/// `i` (which holds the `38`/`48`/`58` itself), accepting both the legacy
/// xterm form (`38;2;r;g;b`, each value its own semicolon-separated group)
/// and the ISO 8613-6 colon form (`38:2::r:g:b`, all in one group). Returns
/// the parsed color (if any) and the number of top-level groups consumed,
/// including the initial `38`/`48`/`58` group itself.
fn parse_extended_color_grouped(groups: &[Vec<u16>], i: usize) -> (Option<Color>, usize) {
    let group = &groups[i];
    if group.len() >= 2 {
        return match group[1] {
            2 if group.len() >= 5 => (
                Some(Color::Rgb(group[group.len() - 3] as u8, group[group.len() - 2] as u8, group[group.len() - 1] as u8)),
                1,
            ),
            5 if group.len() >= 3 => (Some(Color::Indexed(group[2] as u8)), 1),
            _ => (None, 1),
        };
    }
    let get = |idx: usize| groups.get(idx).and_then(|g| g.first().copied()).unwrap_or(0);
    match get(i + 1) {
        2 if i + 4 < groups.len() => (
            Some(Color::Rgb(get(i + 2) as u8, get(i + 3) as u8, get(i + 4) as u8)),
            5,
        ),
        5 if i + 2 < groups.len() => (Some(Color::Indexed(get(i + 2) as u8)), 3),
        _ => (None, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_two_lines() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"Hello\r\nWorld").unwrap();
        assert_eq!(t.screen().rows()[0].text().trim_end(), "Hello");
        assert_eq!(t.screen().rows()[1].text().trim_end(), "World");
        assert_eq!(t.cursor(), RowCol::new(1, 5));
        assert!(!t.cursor_overflow());
    }

    #[test]
    fn erase_in_line_mode_zero() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"ABCDE").unwrap();
        t.cursor_to(0, 2);
        t.interpret(b"\x1b[0K").unwrap();
        assert_eq!(t.screen().rows()[0].text().trim_end(), "AB");
    }

    #[test]
    fn sgr_bold_red_then_reset() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"\x1b[1;31mX\x1b[0mY").unwrap();
        let cell0 = t.screen().cell(0, 0).unwrap();
        assert_eq!(cell0.text, 'X');
        assert!(cell0.attrs.flags.contains(CellFlags::BOLD));
        assert_eq!(cell0.attrs.fg, Color::Indexed(1));
        let cell1 = t.screen().cell(0, 1).unwrap();
        assert_eq!(cell1.text, 'Y');
        assert_eq!(cell1.attrs, TextAttributes::default());
    }

    #[test]
    fn dec_graphics_designation() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"\x1b(0lq\x1b(B").unwrap();
        assert_eq!(t.screen().cell(0, 0).unwrap().text, '\u{250C}');
        assert_eq!(t.screen().cell(0, 1).unwrap().text, '\u{2500}');
        t.interpret(b"l").unwrap();
        assert_eq!(t.screen().cell(0, 2).unwrap().text, 'l');
    }

    #[test]
    fn wrap_then_reverse_wrap() {
        let mut t = Terminal::new(80, 24);
        let line = "X".repeat(80);
        t.interpret(line.as_bytes()).unwrap();
        assert_eq!(t.cursor(), RowCol::new(0, 79));
        assert!(t.cursor_overflow());

        t.interpret(b"\x1b[?45h").unwrap();
        t.interpret(b"Y").unwrap();
        assert_eq!(t.screen().cell(1, 0).unwrap().text, 'Y');
        assert_eq!(t.cursor(), RowCol::new(1, 1));
        assert!(!t.cursor_overflow());

        t.interpret(b"\x08\x08").unwrap();
        assert_eq!(t.cursor(), RowCol::new(0, 79));
    }

    #[test]
    fn alternate_screen_1049_round_trip() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"hello").unwrap();
        t.cursor_to(5, 10);
        t.interpret(b"\x1b[?1049h").unwrap();
        assert_eq!(t.cursor(), RowCol::new(0, 0));
        assert_eq!(t.screen().rows()[0].text().trim_end(), "");
        t.interpret(b"\x1b[?1049l").unwrap();
        assert_eq!(t.cursor(), RowCol::new(5, 10));
        assert_eq!(t.screen().rows()[0].text().trim_end(), "hello");
    }

    #[test]
    fn detach_returns_inactive_io() {
        let mut t = Terminal::new(80, 24);
        t.detach();
        assert_eq!(t.interpret(b"x"), Err(TerminalError::InactiveIo));
    }

    #[test]
    fn chunk_insensitivity_for_a_csi_sequence() {
        let mut whole = Terminal::new(80, 24);
        whole.interpret(b"\x1b[1;31mHi\x1b[0m").unwrap();

        let mut chunked = Terminal::new(80, 24);
        for chunk in [&b"\x1b["[..], b"1;3", b"1mH", b"i\x1b[", b"0m"] {
            chunked.interpret(chunk).unwrap();
        }

        assert_eq!(whole.screen().cell(0, 0), chunked.screen().cell(0, 0));
        assert_eq!(whole.screen().cell(0, 1), chunked.screen().cell(0, 1));
        assert_eq!(whole.cursor(), chunked.cursor());
    }

    #[test]
    fn sgr_colon_subparam_selects_underline_style_without_leaking_into_next_param() {
        let mut t = Terminal::new(80, 24);
        // `4:3` is one colon-grouped parameter (curly underline); the `1`
        // that follows is a second, independent parameter (bold), not a
        // third sub-param of the underline style.
        t.interpret(b"\x1b[4:3;1mX").unwrap();
        let cell = t.screen().cell(0, 0).unwrap();
        assert_eq!(cell.attrs.underline, Underline::Curly);
        assert!(cell.attrs.flags.contains(CellFlags::BOLD));
        assert!(!cell.attrs.flags.contains(CellFlags::ITALIC));
    }

    #[test]
    fn sgr_bare_underline_is_single() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"\x1b[4mX").unwrap();
        assert_eq!(t.screen().cell(0, 0).unwrap().attrs.underline, Underline::Single);
    }

    #[test]
    fn sgr_extended_color_colon_and_semicolon_forms_agree() {
        let mut colon = Terminal::new(80, 24);
        colon.interpret(b"\x1b[38:2:255:128:64mX").unwrap();
        let mut semicolon = Terminal::new(80, 24);
        semicolon.interpret(b"\x1b[38;2;255;128;64mX").unwrap();
        assert_eq!(
            colon.screen().cell(0, 0).unwrap().attrs.fg,
            Color::Rgb(255, 128, 64)
        );
        assert_eq!(
            colon.screen().cell(0, 0).unwrap().attrs.fg,
            semicolon.screen().cell(0, 0).unwrap().attrs.fg
        );
    }

    #[test]
    fn sgr_indexed_color_256_colon_form() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"\x1b[48:5:200mX").unwrap();
        assert_eq!(t.screen().cell(0, 0).unwrap().attrs.bg, Color::Indexed(200));
    }

    #[test]
    fn large_cursor_movement_params_clamp_without_overflow() {
        let mut t = Terminal::new(80, 24);
        t.interpret(b"\x1b[65535B").unwrap();
        assert_eq!(t.cursor(), RowCol::new(23, 0));
        t.interpret(b"\x1b[65535C").unwrap();
        assert_eq!(t.cursor(), RowCol::new(23, 79));
        t.interpret(b"\x1b[65535X").unwrap();
        assert_eq!(t.screen().rows()[23].text().trim_end(), "");
    }

    #[test]
    fn decscusr_sets_cursor_style() {
        use crate::options::CursorStyle;
        let mut t = Terminal::new(80, 24);
        assert_eq!(t.options.cursor_style, CursorStyle::BlinkingBlock);
        t.interpret(b"\x1b[4 q").unwrap();
        assert_eq!(t.options.cursor_style, CursorStyle::SteadyUnderline);
        t.interpret(b"\x1b[6 q").unwrap();
        assert_eq!(t.options.cursor_style, CursorStyle::SteadyBar);
    }

    #[derive(Default)]
    struct PaletteObserver {
        set: Vec<(u8, String)>,
        reset: Vec<Option<u8>>,
    }

    impl crate::event::TerminalObserver for PaletteObserver {
        fn palette_set(&mut self, index: u8, spec: &str) {
            self.set.push((index, spec.to_string()));
        }

        fn palette_reset(&mut self, index: Option<u8>) {
            self.reset.push(index);
        }
    }

    #[test]
    fn osc_4_forwards_palette_assignment_to_observer() {
        let mut t = Terminal::with_observer(80, 24, Options::default(), PaletteObserver::default());
        t.interpret(b"\x1b]4;5;rgb:ff/80/40\x07").unwrap();
        assert_eq!(t.observer.set, vec![(5, "rgb:ff/80/40".to_string())]);
    }

    #[test]
    fn osc_104_forwards_palette_reset_to_observer() {
        let mut t = Terminal::with_observer(80, 24, Options::default(), PaletteObserver::default());
        t.interpret(b"\x1b]104;3\x07").unwrap();
        t.interpret(b"\x1b]104\x07").unwrap();
        assert_eq!(t.observer.reset, vec![Some(3), None]);
    }
}
