//! Tessel reference parser.
//!
//! A structural parser for brace-delimited C-family sources. It does not
//! understand expressions or declarations; it recovers the nesting the
//! formatter's alignment model needs: statements, blocks, bracketed groups,
//! comma-separated lists.
//!
//! ```text
//! unit      := statement*
//! statement := block | element+ (';' | block)?
//! block     := '{' statement* '}'
//! element   := group | block | token
//! group     := '(' list ')' | '[' list ']'
//! list      := (expr (',' expr)*)?
//! expr      := element+
//! ```

mod grammar;
mod stack;
mod vocab;

use tessel_ir::{InputDocument, Position, RuleKind, Span, SyntaxTree, TokenStream};
use tessel_lexer::LexError;

pub use stack::ensure_sufficient_stack;
pub use vocab::BraceVocabulary;

/// Rule kinds produced by [`parse`].
pub mod rules {
    use tessel_ir::RuleKind;

    pub const UNIT: RuleKind = RuleKind(1);
    pub const STATEMENT: RuleKind = RuleKind(2);
    pub const BLOCK: RuleKind = RuleKind(3);
    pub const PARENS: RuleKind = RuleKind(4);
    pub const BRACKETS: RuleKind = RuleKind(5);
    pub const LIST: RuleKind = RuleKind(6);
    pub const EXPR: RuleKind = RuleKind(7);
}

/// Display name of a rule kind produced by this parser.
pub fn rule_name(kind: RuleKind) -> Option<&'static str> {
    Some(match kind {
        rules::UNIT => "unit",
        rules::STATEMENT => "statement",
        rules::BLOCK => "block",
        rules::PARENS => "parens",
        rules::BRACKETS => "brackets",
        rules::LIST => "list",
        rules::EXPR => "expr",
        _ => return None,
    })
}

/// Structural parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected {found:?} at line {}, column {}", .at.line, .at.column)]
    Unexpected {
        found: String,
        span: Span,
        at: Position,
    },
    #[error("unclosed {open:?} opened at line {}, column {}", .at.line, .at.column)]
    Unclosed {
        open: String,
        span: Span,
        at: Position,
    },
}

/// Failure to turn source text into an [`InputDocument`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    #[error("{name}: {source}")]
    Lex {
        name: String,
        #[source]
        source: LexError,
    },
    #[error("{name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: ParseError,
    },
}

/// Parse a lexed stream into a syntax tree.
pub fn parse(tokens: &TokenStream) -> Result<SyntaxTree, ParseError> {
    grammar::Parser::new(tokens).parse_unit()
}

/// Lex and parse `source` into a document.
pub fn parse_document(
    name: impl Into<String>,
    source: impl Into<String>,
) -> Result<InputDocument, DocumentError> {
    let name = name.into();
    let source = source.into();
    let tokens = match tessel_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(source) => return Err(DocumentError::Lex { name, source }),
    };
    let tree = match parse(&tokens) {
        Ok(tree) => tree,
        Err(source) => return Err(DocumentError::Parse { name, source }),
    };
    Ok(InputDocument::new(name, source, tokens, tree))
}
