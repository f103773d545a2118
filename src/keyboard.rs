//! Host-key to wire-bytes encoding, per `spec.md` §4.6.
//!
//! Entirely new relative to the teacher, which has no Rust-side key encoder
//! (Rain hands raw `KeyboardEvent`s to xterm.js in the frontend and lets it
//! pick the escape sequence). Grounded instead on `geldata-vtio`'s
//! `event/keyboard/encoding.rs`, trimmed to the legacy (non-kitty) encoding
//! `spec.md` §4.6 asks for: plain bytes, Ctrl control codes, Alt-as-ESC-
//! prefix, CSI/SS3 navigation keys switched by DECCKM, and bracketed-paste
//! wrapping.

use crate::event::TerminalObserver;
use crate::terminal::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Insert,
    Delete,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    fn any(&self) -> bool {
        self.shift || self.alt || self.ctrl || self.meta
    }

    /// The xterm modifier parameter: `1 + (shift?1:0) + (alt?2:0) +
    /// (ctrl?4:0) + (meta?8:0)`, per the CSI modifier encoding every
    /// terminal shares for cursor/function keys.
    fn xterm_param(&self) -> u8 {
        1 + self.shift as u8 + (self.alt as u8) * 2 + (self.ctrl as u8) * 4 + (self.meta as u8) * 8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

/// Map Ctrl+<char> to its C0 control code, per the fixed ASCII rule every
/// terminal uses (`spec.md` §4.6).
fn control_code_for(c: char) -> Option<u8> {
    match c.to_ascii_uppercase() {
        '@' | ' ' => Some(0x00),
        'A'..='Z' => Some(c.to_ascii_uppercase() as u8 - b'A' + 1),
        '[' => Some(0x1b),
        '\\' => Some(0x1c),
        ']' => Some(0x1d),
        '^' => Some(0x1e),
        '_' => Some(0x1f),
        '?' => Some(0x7f),
        _ => None,
    }
}

fn csi_final_byte(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Up => Some(b'A'),
        KeyCode::Down => Some(b'B'),
        KeyCode::Right => Some(b'C'),
        KeyCode::Left => Some(b'D'),
        KeyCode::End => Some(b'F'),
        KeyCode::Home => Some(b'H'),
        KeyCode::F(1) => Some(b'P'),
        KeyCode::F(2) => Some(b'Q'),
        KeyCode::F(3) => Some(b'R'),
        KeyCode::F(4) => Some(b'S'),
        _ => None,
    }
}

fn csi_tilde_code(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Home => Some(1),
        KeyCode::Insert => Some(2),
        KeyCode::Delete => Some(3),
        KeyCode::End => Some(4),
        KeyCode::PageUp => Some(5),
        KeyCode::PageDown => Some(6),
        KeyCode::F(5) => Some(15),
        KeyCode::F(6) => Some(17),
        KeyCode::F(7) => Some(18),
        KeyCode::F(8) => Some(19),
        KeyCode::F(9) => Some(20),
        KeyCode::F(10) => Some(21),
        KeyCode::F(11) => Some(23),
        KeyCode::F(12) => Some(24),
        _ => None,
    }
}

/// Encode `event` as the bytes to write to the host, honoring DECCKM
/// (application cursor keys) from `term`'s current mode state.
pub fn encode<O: TerminalObserver>(event: &KeyEvent, term: &Terminal<O>) -> Vec<u8> {
    let application_cursor_keys = term.cursor_keys_application();

    if let KeyCode::Char(c) = event.code {
        return encode_char(c, event.modifiers);
    }

    match event.code {
        KeyCode::Enter => return b"\r".to_vec(),
        KeyCode::Backspace => return vec![0x7f],
        KeyCode::Escape => return vec![0x1b],
        KeyCode::Tab => {
            return if event.modifiers.shift {
                b"\x1b[Z".to_vec()
            } else {
                b"\t".to_vec()
            };
        }
        KeyCode::BackTab => return b"\x1b[Z".to_vec(),
        _ => {}
    }

    if let Some(final_byte) = csi_final_byte(event.code) {
        let is_cursor_key = matches!(
            event.code,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
        );
        let is_f1_f4 = matches!(event.code, KeyCode::F(1..=4));
        if !event.modifiers.any() && (is_f1_f4 || (is_cursor_key && application_cursor_keys)) {
            return vec![0x1b, b'O', final_byte];
        }
        if event.modifiers.any() {
            let mut out = format!("\x1b[1;{}", event.modifiers.xterm_param()).into_bytes();
            out.push(final_byte);
            return out;
        }
        return vec![0x1b, b'[', final_byte];
    }

    if let Some(code) = csi_tilde_code(event.code) {
        return if event.modifiers.any() {
            format!("\x1b[{};{}~", code, event.modifiers.xterm_param()).into_bytes()
        } else {
            format!("\x1b[{}~", code).into_bytes()
        };
    }

    Vec::new()
}

fn encode_char(c: char, mods: Modifiers) -> Vec<u8> {
    if mods.ctrl {
        if let Some(code) = control_code_for(c) {
            let mut out = Vec::new();
            if mods.alt {
                out.push(0x1b);
            }
            out.push(code);
            return out;
        }
    }

    let ch = if mods.shift && c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    };

    let mut out = Vec::new();
    if mods.alt {
        out.push(0x1b);
    }
    let mut buf = [0u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    out
}

/// Wrap `text` in the bracketed-paste markers (`CSI 200 ~` / `CSI 201 ~`),
/// for a consumer relaying a host paste while mode 2004 is enabled.
pub fn bracket_paste(text: &str) -> Vec<u8> {
    let mut out = b"\x1b[200~".to_vec();
    out.extend_from_slice(text.as_bytes());
    out.extend_from_slice(b"\x1b[201~");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NullObserver;

    #[test]
    fn plain_letter_passes_through() {
        let t = Terminal::<NullObserver>::new(80, 24);
        let bytes = encode(&KeyEvent::plain(KeyCode::Char('a')), &t);
        assert_eq!(bytes, b"a");
    }

    #[test]
    fn ctrl_c_sends_etx() {
        let t = Terminal::<NullObserver>::new(80, 24);
        let event = KeyEvent::new(
            KeyCode::Char('c'),
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(encode(&event, &t), vec![0x03]);
    }

    #[test]
    fn arrow_keys_switch_with_decckm() {
        let mut t = Terminal::<NullObserver>::new(80, 24);
        assert_eq!(encode(&KeyEvent::plain(KeyCode::Up), &t), b"\x1b[A");
        t.interpret(b"\x1b[?1h").unwrap();
        assert_eq!(encode(&KeyEvent::plain(KeyCode::Up), &t), b"\x1bOA");
    }

    #[test]
    fn modified_arrow_uses_csi_modifier_form() {
        let t = Terminal::<NullObserver>::new(80, 24);
        let event = KeyEvent::new(
            KeyCode::Right,
            Modifiers {
                shift: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(encode(&event, &t), b"\x1b[1;2C");
    }

    #[test]
    fn page_up_uses_tilde_form() {
        let t = Terminal::<NullObserver>::new(80, 24);
        assert_eq!(encode(&KeyEvent::plain(KeyCode::PageUp), &t), b"\x1b[5~");
    }

    #[test]
    fn bracketed_paste_wraps_payload() {
        assert_eq!(bracket_paste("hi"), b"\x1b[200~hi\x1b[201~");
    }
}
