//! Grammar vocabulary: display names and lexical merge hazards.

use std::borrow::Cow;

use crate::{RuleKind, TokenKind};

/// Names for a grammar's token and rule kinds.
///
/// Used to render feature vectors and analysis reports, and to let a grammar
/// flag token pairs that would lex differently when written back to back.
pub trait Vocabulary {
    /// Display name of a token kind (`'return'`, `Identifier`, ...).
    fn token_name(&self, kind: TokenKind) -> Cow<'_, str>;

    /// Display name of a rule kind.
    fn rule_name(&self, kind: RuleKind) -> Cow<'_, str>;

    /// Would writing `prev` immediately followed by `cur` lex as something other
    /// than those two tokens?
    fn would_merge(&self, prev: &str, cur: &str) -> bool {
        let _ = (prev, cur);
        false
    }
}
