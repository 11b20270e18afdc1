//! Hidden-text re-emission.
//!
//! A hidden run holding at least one non-whitespace token (a comment) is
//! written back verbatim, minus its trailing whitespace: the layout after the
//! comment is the classifier's call. A run of pure whitespace is dropped
//! entirely.

use tessel_ir::{Token, Trivia};

use crate::cursor::Cursor;
use crate::emitter::Emitter;

/// Returns `true` when the last emitted token is a line comment, in which
/// case the next real token must start a new line.
pub(crate) fn reemit_comments<E: Emitter>(run: &[Token], cursor: &mut Cursor<E>) -> bool {
    let Some(last) = run.iter().rposition(|t| !t.is_blank()) else {
        return false;
    };
    for token in &run[..=last] {
        cursor.emit_verbatim(&token.text);
    }
    run[last].trivia() == Some(Trivia::LineComment)
}

#[cfg(test)]
mod tests;
