//! `vtcore`: a VT100/xterm-compatible terminal emulator core.
//!
//! This crate is the byte-stream interpreter, screen model and terminal
//! controller a front-end renderer (DOM, GPU, framebuffer, headless test)
//! drives to reproduce an xterm-compatible display. It owns no I/O, no
//! rendering policy and no windowing: it consumes host bytes via
//! [`Terminal::interpret`] and exposes read-only state (grid, cursor,
//! attributes, title, scrollback) for a consumer to render however it likes.
//!
//! ```
//! use vtcore::Terminal;
//!
//! let mut term = Terminal::new(80, 24);
//! term.interpret(b"Hello\r\nWorld").unwrap();
//! assert_eq!(term.screen().rows()[0].text().trim_end(), "Hello");
//! ```

pub mod attrs;
pub mod cell;
pub mod charset;
pub mod color;
pub mod cursor;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod modes;
pub mod options;
mod parser;
pub mod row;
pub mod screen;
pub mod scrollback;
pub mod terminal;

pub use attrs::{split_widechar_string, CellFlags, TextAttributes, Underline, WidthChunk};
pub use cell::Cell;
pub use charset::{CharacterMap, CharacterMaps};
pub use color::Color;
pub use cursor::{Cursor, RowCol, Size};
pub use error::{Result, TerminalError};
pub use event::{NullObserver, TerminalObserver};
pub use keyboard::{KeyCode, KeyEvent, Modifiers};
pub use modes::Modes;
pub use options::{CursorStyle, Encoding, Options, SavedCursor};
pub use row::Row;
pub use screen::Screen;
pub use scrollback::Scrollback;
pub use terminal::{ScreenKind, Terminal};
