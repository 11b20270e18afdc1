//! Recursive-descent walk over the real tokens.

use tessel_ir::{Position, RuleKind, SyntaxTree, TokenIdx, TokenStream, TreeBuilder};
use tessel_lexer::RawToken;
use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::{rules, ParseError};

pub(crate) struct Parser<'a> {
    stream: &'a TokenStream,
    real: &'a [TokenIdx],
    pos: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(stream: &'a TokenStream) -> Self {
        Parser {
            stream,
            real: stream.real_tokens(),
            pos: 0,
            builder: TreeBuilder::new(rules::UNIT),
        }
    }

    fn current(&self) -> Option<TokenIdx> {
        self.real.get(self.pos).copied()
    }

    fn peek(&self) -> Option<RawToken> {
        let idx = self.current()?;
        self.stream
            .get(idx)
            .and_then(|token| RawToken::from_kind(token.kind))
    }

    fn bump(&mut self) {
        if let Some(idx) = self.current() {
            self.builder.leaf(idx);
            self.pos += 1;
        }
    }

    fn located(&self, idx: TokenIdx) -> (String, tessel_ir::Span, Position) {
        match self.stream.get(idx) {
            Some(token) => (
                token.text.clone(),
                token.span,
                token.position.unwrap_or(Position::new(0, 0)),
            ),
            None => (String::new(), tessel_ir::Span::DUMMY, Position::new(0, 0)),
        }
    }

    fn unexpected(&self) -> ParseError {
        let idx = self.current().unwrap_or(TokenIdx::from_usize(self.stream.len()));
        let (found, span, at) = self.located(idx);
        ParseError::Unexpected { found, span, at }
    }

    fn unclosed(&self, open: TokenIdx) -> ParseError {
        let (open, span, at) = self.located(open);
        ParseError::Unclosed { open, span, at }
    }

    pub(crate) fn parse_unit(mut self) -> Result<SyntaxTree, ParseError> {
        while let Some(raw) = self.peek() {
            if is_closer(raw) {
                return Err(self.unexpected());
            }
            self.statement()?;
        }
        Ok(self.builder.finish())
    }

    fn statement(&mut self) -> Result<(), ParseError> {
        trace!(pos = self.pos, "statement");
        self.builder.start_rule(rules::STATEMENT);
        if self.peek() == Some(RawToken::LBrace) {
            self.block()?;
            self.builder.finish_rule();
            return Ok(());
        }
        while let Some(raw) = self.peek() {
            match raw {
                RawToken::Semi => {
                    self.bump();
                    break;
                }
                RawToken::LBrace => {
                    self.block()?;
                    break;
                }
                RawToken::RBrace => break,
                RawToken::RParen | RawToken::RBracket => return Err(self.unexpected()),
                _ => self.element()?,
            }
        }
        self.builder.finish_rule();
        Ok(())
    }

    fn block(&mut self) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| self.block_inner())
    }

    fn block_inner(&mut self) -> Result<(), ParseError> {
        trace!(pos = self.pos, "block");
        self.builder.start_rule(rules::BLOCK);
        let open = self.current();
        self.bump();
        loop {
            match self.peek() {
                Some(RawToken::RBrace) => {
                    self.bump();
                    break;
                }
                Some(_) => self.statement()?,
                None => return Err(self.unclosed(open.unwrap_or(TokenIdx::from_raw(0)))),
            }
        }
        self.builder.finish_rule();
        Ok(())
    }

    /// Every nesting cycle (group, block) passes through here or `block`.
    fn element(&mut self) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| self.element_inner())
    }

    fn element_inner(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(RawToken::LParen) => self.group(rules::PARENS, RawToken::RParen),
            Some(RawToken::LBracket) => self.group(rules::BRACKETS, RawToken::RBracket),
            Some(RawToken::LBrace) => self.block(),
            _ => {
                self.bump();
                Ok(())
            }
        }
    }

    fn group(&mut self, kind: RuleKind, close: RawToken) -> Result<(), ParseError> {
        trace!(pos = self.pos, ?close, "group");
        self.builder.start_rule(kind);
        let open = self.current().unwrap_or(TokenIdx::from_raw(0));
        self.bump();

        self.builder.start_rule(rules::LIST);
        if self.peek().is_some_and(|raw| raw != close) {
            self.expr(close)?;
            while self.peek() == Some(RawToken::Comma) {
                self.bump();
                self.expr(close)?;
            }
        }
        self.builder.finish_rule();

        match self.peek() {
            Some(raw) if raw == close => self.bump(),
            Some(_) => return Err(self.unexpected()),
            None => return Err(self.unclosed(open)),
        }
        self.builder.finish_rule();
        Ok(())
    }

    fn expr(&mut self, close: RawToken) -> Result<(), ParseError> {
        self.builder.start_rule(rules::EXPR);
        while let Some(raw) = self.peek() {
            if raw == close || raw == RawToken::Comma {
                break;
            }
            if is_closer(raw) {
                return Err(self.unexpected());
            }
            self.element()?;
        }
        self.builder.finish_rule();
        Ok(())
    }
}

fn is_closer(raw: RawToken) -> bool {
    matches!(raw, RawToken::RParen | RawToken::RBracket | RawToken::RBrace)
}
