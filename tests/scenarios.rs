//! End-to-end scenarios with literal inputs and expected outputs, covering
//! the six worked examples this crate's behavior is specified against.
//! Fresh 80x24 terminal, cursor home, for every scenario.

use vtcore::{CellFlags, Color, RowCol, Terminal};

fn fresh() -> Terminal {
    Terminal::new(80, 24)
}

#[test]
fn plain_text_two_lines() {
    let mut t = fresh();
    t.interpret(b"Hello\r\nWorld").unwrap();
    assert_eq!(t.screen().rows()[0].text().trim_end(), "Hello");
    assert_eq!(t.screen().rows()[1].text().trim_end(), "World");
    assert_eq!(t.cursor(), RowCol::new(1, 5));
    assert!(!t.cursor_overflow());
}

#[test]
fn csi_k_erase_in_line() {
    let mut t = fresh();
    t.interpret(b"ABCDE").unwrap();
    t.interpret(b"\x1b[3D").unwrap(); // cursor back to column 2
    t.interpret(b"\x1b[0K").unwrap();
    assert_eq!(t.screen().rows()[0].text().trim_end(), "AB");
    assert_eq!(t.cursor(), RowCol::new(0, 2));
}

#[test]
fn sgr_then_reset() {
    let mut t = fresh();
    t.interpret(b"\x1b[1;31mX\x1b[0mY").unwrap();
    let cell0 = t.screen().cell(0, 0).unwrap();
    assert_eq!(cell0.text, 'X');
    assert!(cell0.attrs.flags.contains(CellFlags::BOLD));
    assert_eq!(cell0.attrs.fg, Color::Indexed(1));
    let cell1 = t.screen().cell(0, 1).unwrap();
    assert_eq!(cell1.text, 'Y');
    assert!(cell1.attrs.flags.is_empty());
    assert_eq!(cell1.attrs.fg, Color::Default);
}

#[test]
fn dec_graphics_designation() {
    let mut t = fresh();
    t.interpret(b"\x1b(0lq\x1b(B").unwrap();
    assert_eq!(t.screen().cell(0, 0).unwrap().text, '\u{250C}'); // top-left corner
    assert_eq!(t.screen().cell(0, 1).unwrap().text, '\u{2500}'); // horizontal line
    t.interpret(b"l").unwrap();
    assert_eq!(t.screen().cell(0, 2).unwrap().text, 'l');
}

#[test]
fn wrap_then_reverse_wrap() {
    let mut t = fresh();
    let line = "X".repeat(80);
    t.interpret(line.as_bytes()).unwrap();
    t.interpret(b"X").unwrap();
    assert_eq!(t.screen().cell(1, 0).unwrap().text, 'X');
    assert_eq!(t.cursor(), RowCol::new(1, 1));
    assert!(!t.cursor_overflow());

    t.interpret(b"\x1b[?45h\x08\x08").unwrap();
    assert_eq!(t.cursor(), RowCol::new(0, 79));
}

#[test]
fn alternate_screen_1049_round_trip() {
    let mut t = fresh();
    t.interpret(b"\x1b[6;11Hhello".as_ref()).unwrap(); // park at row 5, col 10 (0-based)
    assert_eq!(t.cursor(), RowCol::new(5, 15));
    t.interpret(b"\x1b[?1049h").unwrap();
    assert_eq!(t.cursor(), RowCol::new(0, 0));
    assert_eq!(t.screen().rows()[5].text().trim_end(), "");
    t.interpret(b"\x1b[?1049l").unwrap();
    assert_eq!(t.cursor(), RowCol::new(5, 15));
    assert_eq!(t.screen().rows()[5].text().trim_end(), "hello");
}

#[test]
fn wide_character_occupies_two_columns() {
    let mut t = fresh();
    t.interpret("中".as_bytes()).unwrap();
    assert_eq!(t.cursor(), RowCol::new(0, 2));
    let lead = t.screen().cell(0, 0).unwrap();
    assert!(lead.flags.contains(CellFlags::WIDE));
    assert!(t.screen().cell(0, 1).unwrap().is_wide_spacer());
}

#[test]
fn scrollback_receives_evicted_rows_on_primary_only() {
    let mut t = Terminal::new(4, 2);
    t.interpret(b"one\r\ntwo\r\nthree").unwrap();
    assert!(t.scrollback().len() >= 1);
    assert_eq!(t.scrollback().get(0).unwrap().text().trim_end(), "one");
}

#[test]
fn device_status_report_queues_cursor_position() {
    let mut t = fresh();
    t.interpret(b"\x1b[6n").unwrap();
    let out = t.take_pending_output();
    assert_eq!(out, b"\x1b[1;1R");
}

#[test]
fn osc_title_changes_title() {
    let mut t = fresh();
    t.interpret(b"\x1b]2;my title\x07").unwrap();
    assert_eq!(t.title(), "my title");
}
