//! Vocabulary for the reference grammar.

use std::borrow::Cow;

use tessel_ir::{RuleKind, TokenKind, Vocabulary};

/// Names and merge hazards for tokens from `tessel_lexer` and rules from
/// this parser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BraceVocabulary;

impl Vocabulary for BraceVocabulary {
    fn token_name(&self, kind: TokenKind) -> Cow<'_, str> {
        match tessel_lexer::token_name(kind) {
            Some(name) => Cow::Borrowed(name),
            None if kind == TokenKind::NONE => Cow::Borrowed("none"),
            None => Cow::Owned(format!("token#{}", kind.0)),
        }
    }

    fn rule_name(&self, kind: RuleKind) -> Cow<'_, str> {
        match crate::rule_name(kind) {
            Some(name) => Cow::Borrowed(name),
            None if kind == RuleKind::default() => Cow::Borrowed("none"),
            None => Cow::Owned(format!("rule#{}", kind.0)),
        }
    }

    fn would_merge(&self, prev: &str, cur: &str) -> bool {
        tessel_lexer::would_merge(prev, cur)
    }
}
