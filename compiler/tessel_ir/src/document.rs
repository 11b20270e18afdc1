//! Input documents.

use crate::{SyntaxTree, TokenStream};

/// A lexed and parsed document.
///
/// The formatter never mutates a document; it clones the token stream for
/// each run and re-stamps the copy.
#[derive(Clone, Debug)]
pub struct InputDocument {
    pub name: String,
    pub source: String,
    pub tokens: TokenStream,
    pub tree: SyntaxTree,
}

impl InputDocument {
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        tokens: TokenStream,
        tree: SyntaxTree,
    ) -> Self {
        InputDocument {
            name: name.into(),
            source: source.into(),
            tokens,
            tree,
        }
    }
}
