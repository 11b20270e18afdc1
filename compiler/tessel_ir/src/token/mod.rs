//! Tokens with channels and re-stampable positions.
//!
//! A token carries its literal text, so a stream can always be re-joined into
//! source text. Line/column metadata is optional: the formatter wipes it and
//! recomputes it from its own predictions.

use std::fmt;

use super::Span;

/// Typed index into a `TokenStream`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TokenIdx(u32);

impl TokenIdx {
    /// Create a `TokenIdx` from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TokenIdx(raw)
    }

    /// Create a `TokenIdx` from a stream offset.
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        TokenIdx(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as a stream offset.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TokenIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Grammar-defined token type.
///
/// Opaque to the formatter: it is only compared for equality and stored in
/// feature vectors. `TokenKind::NONE` (0) marks "no token" in a feature slot.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct TokenKind(pub u16);

impl TokenKind {
    /// Absent token (before the first / after the last real token).
    pub const NONE: TokenKind = TokenKind(0);

    /// Feature-vector encoding of this kind.
    #[inline]
    pub fn feature(self) -> i32 {
        i32::from(self.0)
    }
}

/// Kind of hidden text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Trivia {
    /// Horizontal whitespace.
    Whitespace,
    /// One or more line breaks.
    Newline,
    /// Comment that is closed by its own delimiter (`/* */`).
    Comment,
    /// Comment that runs to the end of the line (`//`).
    ///
    /// The terminating newline is not part of the token, so whatever follows
    /// it must start on a new line.
    LineComment,
}

/// Token channel: real grammar tokens vs. hidden text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Channel {
    /// Token the parser sees.
    Default,
    /// Whitespace or comment skipped by the parser.
    Hidden(Trivia),
}

impl Channel {
    #[inline]
    pub fn is_hidden(self) -> bool {
        matches!(self, Channel::Hidden(_))
    }
}

/// Line (1-based) and column (0-based, in chars) of a token's first char.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// A lexical token.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub index: TokenIdx,
    pub kind: TokenKind,
    pub channel: Channel,
    pub text: String,
    pub span: Span,
    /// `None` once wiped; re-stamped by whoever lays the token out again.
    pub position: Option<Position>,
}

impl Token {
    /// Create a real (default-channel) token.
    pub fn real(index: TokenIdx, kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            index,
            kind,
            channel: Channel::Default,
            text: text.into(),
            span,
            position: None,
        }
    }

    /// Create a hidden token.
    pub fn hidden(
        index: TokenIdx,
        kind: TokenKind,
        trivia: Trivia,
        text: impl Into<String>,
        span: Span,
    ) -> Self {
        Token {
            index,
            kind,
            channel: Channel::Hidden(trivia),
            text: text.into(),
            span,
            position: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.channel == Channel::Default
    }

    /// Trivia kind, if this is a hidden token.
    #[inline]
    pub fn trivia(&self) -> Option<Trivia> {
        match self.channel {
            Channel::Hidden(trivia) => Some(trivia),
            Channel::Default => None,
        }
    }

    /// Text consisting solely of whitespace chars (and non-empty).
    pub fn is_blank(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    /// Width of the text in chars.
    #[inline]
    pub fn char_len(&self) -> u32 {
        u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX)
    }

    /// Column just past the last char, when the token is single-line.
    pub fn end_column(&self) -> Option<u32> {
        self.position.map(|pos| pos.column + self.char_len())
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().next_back()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {:?}", self.index, self.text, self.channel)?;
        if let Some(pos) = self.position {
            write!(f, " @ {}:{}", pos.line, pos.column)?;
        }
        Ok(())
    }
}
