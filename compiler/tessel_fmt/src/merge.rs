//! Anti-merge failsafe.

use tessel_ir::Vocabulary;

/// Would writing `cur` directly after `prev` fuse them into other tokens?
///
/// Word characters (alphanumerics and `_`) on both sides of the seam always
/// count; the grammar may flag more pairs through
/// [`Vocabulary::would_merge`].
pub(crate) fn needs_separator<V: Vocabulary + ?Sized>(prev: &str, cur: &str, vocab: &V) -> bool {
    let word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    (word(prev.chars().next_back()) && word(cur.chars().next())) || vocab.would_merge(prev, cur)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tessel_ir::{RuleKind, TokenKind};

    use super::*;

    struct Plain;

    impl Vocabulary for Plain {
        fn token_name(&self, _: TokenKind) -> Cow<'_, str> {
            Cow::Borrowed("")
        }

        fn rule_name(&self, _: RuleKind) -> Cow<'_, str> {
            Cow::Borrowed("")
        }
    }

    struct Fusing;

    impl Vocabulary for Fusing {
        fn token_name(&self, _: TokenKind) -> Cow<'_, str> {
            Cow::Borrowed("")
        }

        fn rule_name(&self, _: RuleKind) -> Cow<'_, str> {
            Cow::Borrowed("")
        }

        fn would_merge(&self, prev: &str, cur: &str) -> bool {
            prev == "+" && cur == "+"
        }
    }

    #[test]
    fn word_seams_need_a_separator() {
        assert!(needs_separator("return", "x", &Plain));
        assert!(needs_separator("1", "_x", &Plain));
        assert!(needs_separator("é", "b", &Plain));
    }

    #[test]
    fn punctuation_seams_do_not() {
        assert!(!needs_separator("x", ";", &Plain));
        assert!(!needs_separator(")", "y", &Plain));
        assert!(!needs_separator("+", "+", &Plain));
    }

    #[test]
    fn grammar_hazards_are_added() {
        assert!(needs_separator("+", "+", &Fusing));
        assert!(!needs_separator("+", "-", &Fusing));
    }
}
