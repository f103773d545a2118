//! The renderer callback protocol (`spec.md` §6).
//!
//! `spec.md` describes this only as prose ("notifications on row-changed,
//! row-inserted, row-removed, cursor-moved, title-changed, bell,
//! clipboard-write"); this module gives it a concrete Rust shape as a trait,
//! generalizing the teacher's `render/frame.rs::TerminalEvent` enum (which
//! hard-codes Tauri-IPC-shaped payloads — image protocols, tmux passthrough
//! — that are Rain product features dropped in the final trim; see
//! `DESIGN.md`).

use crate::cursor::RowCol;

/// A sink a front-end implements to learn about terminal-state changes
/// without polling. Every method has a default no-op body so a consumer can
/// implement only the notifications it cares about.
pub trait TerminalObserver {
    /// Row `row` of the active screen changed contents.
    fn row_changed(&mut self, _row: u16) {}

    /// A row was inserted at `row` (e.g. by IL or a scroll-down).
    fn row_inserted(&mut self, _row: u16) {}

    /// A row was removed from `row` (e.g. by DL, or evicted to scrollback).
    fn row_removed(&mut self, _row: u16) {}

    fn cursor_moved(&mut self, _pos: RowCol) {}

    fn title_changed(&mut self, _title: &str) {}

    fn bell(&mut self) {}

    /// The terminal wants `text` written to the host clipboard (OSC 52 set).
    fn clipboard_write(&mut self, _text: &str) {}

    /// The terminal needs the current clipboard contents to answer an OSC 52
    /// query (`?` payload). Returning `None` answers with an empty string,
    /// matching xterm's behavior when clipboard access is unavailable.
    fn clipboard_read(&mut self) -> Option<String> {
        None
    }

    /// OSC 4: set palette entry `index` to the xterm color-spec string
    /// `spec` (e.g. `"rgb:ff/80/40"`). The core keeps no palette state of
    /// its own; a renderer owns the palette and applies the change.
    fn palette_set(&mut self, _index: u8, _spec: &str) {}

    /// OSC 104: reset palette entries to their defaults. `None` means "all
    /// entries" (no index list given); `Some(index)` resets one entry.
    fn palette_reset(&mut self, _index: Option<u8>) {}
}

/// An observer that drops every notification; the default when a `Terminal`
/// is constructed without an explicit one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl TerminalObserver for NullObserver {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        rows_changed: u32,
        bells: u32,
    }

    impl TerminalObserver for Counter {
        fn row_changed(&mut self, _row: u16) {
            self.rows_changed += 1;
        }

        fn bell(&mut self) {
            self.bells += 1;
        }
    }

    #[test]
    fn default_methods_are_inert() {
        let mut n = NullObserver;
        n.row_changed(0);
        n.bell();
        assert!(n.clipboard_read().is_none());
    }

    #[test]
    fn custom_observer_counts_calls() {
        let mut c = Counter {
            rows_changed: 0,
            bells: 0,
        };
        c.row_changed(1);
        c.row_changed(2);
        c.bell();
        assert_eq!(c.rows_changed, 2);
        assert_eq!(c.bells, 1);
    }
}
