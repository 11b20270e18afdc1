//! Tessel IR - shared data structures
//!
//! This crate holds the data the formatter consumes from a grammar frontend:
//! - Spans for source locations
//! - Tokens with channels (real vs. hidden) and re-stampable positions
//! - A seekable `TokenStream` with hidden-token lookups
//! - A read-only syntax tree stored as an arena of nodes
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: tree nodes are addressed by `NodeId(u32)`, parents
//!   are plain indices, navigation is a pure lookup.
//! - **Grammar Agnostic**: token and rule kinds are opaque numbers; names come
//!   from a [`Vocabulary`] supplied by the frontend.

mod document;
mod span;
mod stream;
mod token;
mod tree;
mod vocab;

pub use document::InputDocument;
pub use span::Span;
pub use stream::TokenStream;
pub use token::{Channel, Position, Token, TokenIdx, TokenKind, Trivia};
pub use tree::{Node, NodeId, NodeKind, RuleKind, SyntaxTree, TreeBuilder};
pub use vocab::Vocabulary;
