//! Tessel reference lexer.
//!
//! Tokenizes brace-delimited C-family sources (Java-like) into a lossless
//! [`TokenStream`]: real tokens on the default channel, whitespace, newlines
//! and comments on the hidden channel. Every token is stamped with its
//! original 1-based line and 0-based char column.

mod raw_token;

use logos::Logos;
use tessel_ir::{Position, Span, Token, TokenIdx, TokenKind, TokenStream, Trivia};

pub use raw_token::RawToken;

/// Error produced when the source contains text no token matches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unrecognized input {text:?} at line {line}, column {column}")]
    Unrecognized {
        text: String,
        span: Span,
        line: u32,
        column: u32,
    },
}

impl RawToken {
    /// Token kind for this raw token. Kinds start at 1; 0 is `TokenKind::NONE`.
    #[inline]
    pub fn kind(self) -> TokenKind {
        TokenKind(self as u16 + 1)
    }

    /// Inverse of [`RawToken::kind`].
    pub fn from_kind(kind: TokenKind) -> Option<RawToken> {
        let index = usize::from(kind.0).checked_sub(1)?;
        RawToken::ALL.get(index).copied()
    }

    /// Hidden-channel classification, `None` for real tokens.
    pub fn trivia(self) -> Option<Trivia> {
        match self {
            RawToken::Whitespace => Some(Trivia::Whitespace),
            RawToken::Newline => Some(Trivia::Newline),
            RawToken::LineComment => Some(Trivia::LineComment),
            RawToken::BlockComment => Some(Trivia::Comment),
            _ => None,
        }
    }
}

/// Display name of a token kind produced by this lexer.
pub fn token_name(kind: TokenKind) -> Option<&'static str> {
    RawToken::from_kind(kind).map(RawToken::name)
}

/// Lex `source` into a lossless token stream.
pub fn lex(source: &str) -> Result<TokenStream, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut line = 1;
    let mut column = 0;

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let span = Span::from_range(lexer.span());
        let Ok(raw) = result else {
            return Err(LexError::Unrecognized {
                text: slice.to_string(),
                span,
                line,
                column,
            });
        };

        let index = TokenIdx::from_usize(tokens.len());
        let token = match raw.trivia() {
            Some(trivia) => Token::hidden(index, raw.kind(), trivia, slice, span),
            None => Token::real(index, raw.kind(), slice, span),
        };
        tokens.push(token.with_position(Position::new(line, column)));

        let newlines = slice.matches('\n').count();
        if newlines > 0 {
            line += u32::try_from(newlines).unwrap_or(u32::MAX);
            column = char_count(slice.rsplit('\n').next().unwrap_or_default());
        } else {
            column += char_count(slice);
        }
    }

    Ok(TokenStream::new(tokens))
}

/// Would `prev` written directly before `cur` lex as anything other than
/// exactly those two tokens?
///
/// Covers operator fusion (`+` `+`), comment openers (`/` `/`) and word
/// fusion (`int` `x`).
pub fn would_merge(prev: &str, cur: &str) -> bool {
    let joined = format!("{prev}{cur}");
    let mut lexer = RawToken::lexer(&joined);

    if !matches!(lexer.next(), Some(Ok(_))) || lexer.span() != (0..prev.len()) {
        return true;
    }
    if !matches!(lexer.next(), Some(Ok(_))) || lexer.span() != (prev.len()..joined.len()) {
        return true;
    }
    lexer.next().is_some()
}

fn char_count(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}
