//! Cross-cutting invariants `spec.md` §8 requires to hold for every legal
//! input, exercised over a representative sample of inputs rather than an
//! exhaustive generator (no `proptest` in the teacher's or pack's
//! dependency stack for this kind of state-machine fuzzing).

use vtcore::{CharacterMaps, Terminal};

fn rows_and_cursor(t: &Terminal) -> (Vec<String>, (u16, u16), bool) {
    let s = t.screen();
    let rows = s.rows().iter().map(|r| r.text()).collect();
    (rows, (s.cursor.row(), s.cursor.col()), s.cursor.overflow)
}

/// Chunk insensitivity: for every partition of a byte sequence, feeding it
/// in chunks produces the same final screen/cursor as feeding it whole.
#[test]
fn chunk_insensitivity() {
    let corpus: &[&[u8]] = &[
        b"Hello, world!\r\n",
        b"\x1b[1;31mRed\x1b[0m text\r\n",
        b"\x1b[2J\x1b[H",
        b"\x1b(0lqk\x1b(B",
        b"\x1b[?1049h\x1b[?1049l",
        b"\x1b[10;20H\x1b[5A\x1b[3C",
        "日本語テスト\r\n".as_bytes(),
        b"\x1b]0;title here\x07",
    ];

    for &input in corpus {
        let mut whole = Terminal::new(80, 24);
        whole.interpret(input).unwrap();

        // Partition into every other byte, then into 3-byte chunks, and
        // compare both against the single-call baseline.
        let mut alternating = Terminal::new(80, 24);
        for chunk in input.chunks(1) {
            alternating.interpret(chunk).unwrap();
        }
        let mut triples = Terminal::new(80, 24);
        for chunk in input.chunks(3) {
            triples.interpret(chunk).unwrap();
        }

        let baseline = rows_and_cursor(&whole);
        assert_eq!(rows_and_cursor(&alternating), baseline, "byte-at-a-time mismatch for {:?}", input);
        assert_eq!(rows_and_cursor(&triples), baseline, "3-byte-chunk mismatch for {:?}", input);
    }
}

/// Idempotent reset: RIS followed by a sequence restores a byte-identical
/// screen compared to running the same sequence from a freshly created
/// terminal.
#[test]
fn idempotent_reset() {
    let sequence: &[u8] = b"\x1b[1;32mHello\x1b[0m\r\n\x1b[?25l";

    let mut fresh = Terminal::new(80, 24);
    fresh.interpret(sequence).unwrap();

    let mut reset_then_same = Terminal::new(80, 24);
    reset_then_same.interpret(b"garbage state\x1b[31m\x1b[5;5H").unwrap();
    reset_then_same.interpret(b"\x1bc").unwrap(); // RIS
    reset_then_same.interpret(sequence).unwrap();

    assert_eq!(rows_and_cursor(&fresh), rows_and_cursor(&reset_then_same));
}

/// Margin clamp: cursor row/col after movement sequences always stay within
/// the active scroll region (when DECOM is set) or the full grid otherwise.
#[test]
fn margin_clamp_with_origin_mode() {
    let mut t = Terminal::new(80, 24);
    t.interpret(b"\x1b[5;20r").unwrap(); // top=4, bottom=19 (0-based)
    t.interpret(b"\x1b[?6h").unwrap(); // DECOM on; cursor homes to (top,0)
    let (row, _) = (t.cursor().row, t.cursor().col);
    assert_eq!(row, 4);

    t.interpret(b"\x1b[100B").unwrap(); // cursor down, clamps to bottom margin
    assert_eq!(t.cursor().row, 19);

    t.interpret(b"\x1b[100A").unwrap(); // cursor up, clamps to top margin
    assert_eq!(t.cursor().row, 4);
}

#[test]
fn margin_clamp_without_origin_mode() {
    let mut t = Terminal::new(80, 24);
    t.interpret(b"\x1b[5;20r").unwrap();
    t.interpret(b"\x1b[100;100H").unwrap(); // CUP clamps to full grid, not margins
    assert_eq!(t.cursor().row, 23);
    assert_eq!(t.cursor().col, 79);
}

/// Width conservation: every row is exactly `columnCount` wide after every
/// top-level `interpret` call.
#[test]
fn width_conservation() {
    let mut t = Terminal::new(20, 5);
    let inputs: &[&[u8]] = &[
        b"a very long line that would overflow twenty columns for sure\r\n",
        "中文字符测试超过二十列宽度一定溢出\r\n".as_bytes(),
        b"\x1b[3;5H\x1b[10@inserted",
        b"\x1b[2K\x1b[P",
    ];
    for chunk in inputs {
        t.interpret(chunk).unwrap();
        for row in t.screen().rows() {
            assert_eq!(row.len(), 20, "row width drifted after {:?}", chunk);
        }
    }
}

/// Wide-character integrity: no orphan spacer half survives a delete.
#[test]
fn no_orphan_wide_spacer_after_delete() {
    let mut t = Terminal::new(10, 1);
    t.interpret("a中b".as_bytes()).unwrap();
    t.interpret(b"\x1b[2;2H").unwrap(); // cursor to column 2 (the wide lead)
    t.interpret(b"\x1b[P").unwrap(); // DCH: delete the wide character's lead column

    let row = &t.screen().rows()[0];
    for (i, cell) in row.cells.iter().enumerate() {
        if cell.is_wide_spacer() {
            assert!(
                i > 0 && row.cells[i - 1].is_wide(),
                "orphan wide spacer at column {i}"
            );
        }
    }
}

/// Scrollback bound: never exceeds the configured maximum regardless of how
/// much output scrolls through.
#[test]
fn scrollback_never_exceeds_configured_max() {
    let mut opts = vtcore::Options::default();
    opts.set_scrollback_limit(5);
    let mut t = Terminal::with_options(10, 3, opts);
    for i in 0..50 {
        t.interpret(format!("line {i}\r\n").as_bytes()).unwrap();
    }
    assert!(t.scrollback().len() <= 5);
}

/// Round-trip character sets: with no overlay installed, `gl` reproduces
/// the base table exactly for every built-in map, and is independent of the
/// particular `CharacterMaps` instance it came from (the shared default
/// table is process-wide and never mutated per-instance).
#[test]
fn charset_round_trip_every_builtin() {
    let a = CharacterMaps::defaults();
    let b = CharacterMaps::defaults();
    for &name in &['0', 'A', 'B', '4', 'C', '5', 'R', 'Q', 'K', 'Y', 'E', '6', 'Z', '7', 'H', '='] {
        let ma = a.get(name);
        let mb = b.get(name);
        for byte in 0x20u8..=0x7E {
            assert_eq!(ma.gl(byte), mb.gl(byte), "map {name} disagrees on byte {byte:#x}");
        }
    }
}

/// Overlays on one `CharacterMap` instance never leak into another lookup
/// of the same named table (`spec.md` §4.5: overrides never mutate the
/// shared default).
#[test]
fn charset_overlay_does_not_leak_across_instances() {
    let registry = CharacterMaps::defaults();
    let mut overridden = registry.get('B');
    overridden.set_override(b'A', '\u{0391}');

    let untouched = registry.get('B');
    assert_eq!(untouched.gl(b'A'), 'A');
    assert_eq!(overridden.gl(b'A'), '\u{0391}');
}
