//! Seekable token stream.
//!
//! Holds every token the lexer produced, real and hidden, in source order.
//! The stream is re-joinable: concatenating all token texts reproduces the
//! source exactly.

use crate::{Position, Token, TokenIdx};

/// Ordered sequence of tokens with real-token bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Indices of default-channel tokens, ascending.
    real: Vec<TokenIdx>,
}

impl TokenStream {
    /// Build a stream, renumbering tokens by their position in `tokens`.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let mut real = Vec::new();
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = TokenIdx::from_usize(i);
            if token.is_real() {
                real.push(token.index);
            }
        }
        TokenStream { tokens, real }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: TokenIdx) -> Option<&Token> {
        self.tokens.get(idx.index())
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Indices of the real tokens, in stream order.
    #[inline]
    pub fn real_tokens(&self) -> &[TokenIdx] {
        &self.real
    }

    /// Closest real token strictly before `idx`.
    pub fn prev_real(&self, idx: TokenIdx) -> Option<TokenIdx> {
        let pos = self.real.partition_point(|&r| r < idx);
        pos.checked_sub(1).map(|p| self.real[p])
    }

    /// Closest real token strictly after `idx`.
    pub fn next_real(&self, idx: TokenIdx) -> Option<TokenIdx> {
        let pos = self.real.partition_point(|&r| r <= idx);
        self.real.get(pos).copied()
    }

    /// The maximal run of hidden tokens immediately before `idx`.
    pub fn hidden_to_left(&self, idx: TokenIdx) -> &[Token] {
        let end = idx.index().min(self.tokens.len());
        let mut start = end;
        while start > 0 && !self.tokens[start - 1].is_real() {
            start -= 1;
        }
        &self.tokens[start..end]
    }

    /// Hidden tokens after the last real token (the whole stream if none).
    pub fn hidden_after_last_real(&self) -> &[Token] {
        match self.real.last() {
            Some(last) => &self.tokens[last.index() + 1..],
            None => &self.tokens,
        }
    }

    /// Source text of every token up to and including `idx`.
    pub fn text_through(&self, idx: TokenIdx) -> String {
        let end = (idx.index() + 1).min(self.tokens.len());
        self.tokens[..end].iter().map(|t| t.text.as_str()).collect()
    }

    /// Full source text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Texts of the real tokens, in order.
    pub fn real_texts(&self) -> Vec<&str> {
        self.real
            .iter()
            .map(|&idx| self.tokens[idx.index()].text.as_str())
            .collect()
    }

    /// Drop all line/column metadata.
    pub fn wipe_positions(&mut self) {
        for token in &mut self.tokens {
            token.position = None;
        }
    }

    pub fn set_position(&mut self, idx: TokenIdx, position: Position) {
        if let Some(token) = self.tokens.get_mut(idx.index()) {
            token.position = Some(position);
        }
    }

    /// First real token of the nearest line before `line` that has a positioned
    /// real token, looking only at tokens before `idx`.
    pub fn first_token_on_previous_content_line(
        &self,
        idx: TokenIdx,
        line: u32,
    ) -> Option<&Token> {
        let before = self.real.partition_point(|&r| r < idx);
        let mut target_line = None;
        let mut first = None;
        for &r in self.real[..before].iter().rev() {
            let token = &self.tokens[r.index()];
            let Some(pos) = token.position else {
                continue;
            };
            match target_line {
                None if pos.line < line => {
                    target_line = Some(pos.line);
                    first = Some(token);
                }
                None => {}
                Some(l) if pos.line == l => first = Some(token),
                Some(_) => break,
            }
        }
        first
    }
}
