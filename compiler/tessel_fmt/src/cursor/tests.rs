use pretty_assertions::assert_eq;

use super::*;

#[test]
fn starts_at_line_one_column_zero() {
    let cursor = Cursor::with_capacity(0);
    assert_eq!((cursor.line(), cursor.column()), (1, 0));
}

#[test]
fn verbatim_text_tracks_embedded_newlines() {
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("ab");
    assert_eq!((cursor.line(), cursor.column()), (1, 2));
    cursor.emit_verbatim("/* x\n   yz */");
    assert_eq!((cursor.line(), cursor.column()), (2, 8));
    cursor.emit_verbatim("\n\n");
    assert_eq!((cursor.line(), cursor.column()), (4, 0));
}

#[test]
fn columns_count_chars_not_bytes() {
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("// héllo");
    assert_eq!(cursor.column(), 8);
}

#[test]
fn newlines_then_spaces() {
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("x;");
    cursor.newlines(2);
    cursor.spaces(4);
    let span = cursor.emit_token("y");
    assert_eq!((cursor.line(), cursor.column()), (3, 5));
    assert_eq!(span, Span::new(8, 9));
    assert_eq!(cursor.output(), "x;\n\n    y");
}

#[test]
fn zero_newlines_keep_column() {
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("abc");
    cursor.newlines(0);
    assert_eq!(cursor.column(), 3);
}

#[test]
fn restart_keeps_output_and_byte_spans() {
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("// head\n");
    cursor.restart();
    assert_eq!((cursor.line(), cursor.column()), (1, 0));
    let span = cursor.emit_token("x");
    assert_eq!((cursor.line(), cursor.column()), (1, 1));
    assert_eq!(span, Span::new(8, 9));
    assert_eq!(cursor.output(), "// head\nx");
}
