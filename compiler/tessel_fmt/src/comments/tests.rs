use pretty_assertions::assert_eq;
use tessel_ir::{Span, TokenIdx, TokenKind};

use super::*;

fn hidden(trivia: Trivia, text: &str) -> Token {
    Token::hidden(TokenIdx::from_raw(0), TokenKind(1), trivia, text, Span::DUMMY)
}

#[test]
fn comment_run_drops_trailing_whitespace() {
    let run = [
        hidden(Trivia::Whitespace, " "),
        hidden(Trivia::LineComment, "// note"),
        hidden(Trivia::Newline, "\n"),
    ];
    let mut cursor = Cursor::with_capacity(0);
    cursor.emit_verbatim("x = 1;");
    assert!(reemit_comments(&run, &mut cursor));
    assert_eq!((cursor.line(), cursor.column()), (1, 6 + 8));
    assert_eq!(cursor.output(), "x = 1; // note");
}

#[test]
fn whitespace_only_run_is_dropped() {
    let run = [
        hidden(Trivia::Newline, "\n\n"),
        hidden(Trivia::Whitespace, "    "),
    ];
    let mut cursor = Cursor::with_capacity(0);
    assert!(!reemit_comments(&run, &mut cursor));
    assert_eq!(cursor.output(), "");
}

#[test]
fn newlines_between_comments_are_kept() {
    let run = [
        hidden(Trivia::LineComment, "// a"),
        hidden(Trivia::Newline, "\n"),
        hidden(Trivia::Whitespace, "  "),
        hidden(Trivia::Comment, "/* b\n c */"),
        hidden(Trivia::Whitespace, " "),
    ];
    let mut cursor = Cursor::with_capacity(0);
    assert!(!reemit_comments(&run, &mut cursor));
    assert_eq!((cursor.line(), cursor.column()), (3, 5));
    assert_eq!(cursor.output(), "// a\n  /* b\n c */");
}

#[test]
fn empty_run() {
    let mut cursor = Cursor::with_capacity(0);
    assert!(!reemit_comments(&[], &mut cursor));
    assert_eq!(cursor.output(), "");
}
