//! Error taxonomy for the terminal core.
//!
//! Per the propagation policy: almost nothing here is ever returned from a
//! public API. Parser and screen conditions are logged and soft-recovered in
//! place (see `spec.md` §7); `TerminalError` exists so those recoveries have
//! a typed name for `tracing` fields and tests, and so the one genuinely
//! fatal case — writing through a detached I/O handle — has somewhere to go.

use thiserror::Error;

/// Error kinds the terminal core can produce or internally observe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TerminalError {
    /// Malformed UTF-8 in the host byte stream, or an oversize buffered
    /// string sequence (OSC/DCS payload past `Options::max_string_sequence`).
    #[error("input encoding error: {0}")]
    InputEncoding(String),

    /// A recognized introducer (CSI/ESC/OSC) with an unsupported or unknown
    /// final byte.
    #[error("unsupported sequence: {0}")]
    UnsupportedSequence(String),

    /// A numeric CSI parameter exceeded the documented clamp and was
    /// truncated to it.
    #[error("parameter out of range: {0}")]
    ParameterOutOfRange(String),

    /// The cursor briefly left the grid bounds and was clamped back.
    #[error("cursor out of bounds: row={row} col={col}")]
    CursorOutOfBounds { row: u32, col: u32 },

    /// A column index was out of bounds for the current grid width.
    #[error("column out of bounds: {col} (width {width})")]
    ColumnOutOfBounds { col: u32, width: u32 },

    /// A write was attempted against an I/O handle that has already been
    /// detached/closed. This is the one variant a caller can actually see.
    #[error("inactive I/O handle")]
    InactiveIo,
}

pub type Result<T> = std::result::Result<T, TerminalError>;
