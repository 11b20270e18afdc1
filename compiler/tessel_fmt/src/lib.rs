//! Tessel Formatter
//!
//! Reformats a document to match the layout of a reference corpus. There are
//! no style rules: for every real token the formatter asks two nearest-
//! neighbour classifiers what the corpus did in the same structural context.
//!
//! # Architecture
//!
//! The reconstruction loop, per real token from the third on:
//!
//! 1. **Comments**: re-emit the hidden run to the left if it holds a comment
//! 2. **Extract**: full feature vector for the token
//! 3. **Patch A**: previous-end-column from the cursor
//! 4. **Classify 1**: newline count or space count
//! 5. **Patch B**: first-on-line from the newline decision
//! 6. **Classify 2**: alignment
//! 7. **Failsafe**: force a space where the two tokens would fuse
//! 8. **Apply**: newlines plus alignment, or spaces; stamp; emit
//!
//! Output is always lexically equivalent to the input: the same real tokens
//! in the same order.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`config`]: k, threshold, indent width, tab size
//! - [`model`]: the shared corpus and both classifiers
//! - [`formatter`]: the reconstruction engine

mod align;
mod analysis;
mod comments;
pub mod config;
mod cursor;
pub mod emitter;
pub mod formatter;
mod merge;
pub mod model;

pub use analysis::TokenPositionAnalysis;
pub use config::{FormatConfig, INDENT_WIDTH, MAX_CONTEXT_DISTANCE, NEIGHBORS, TAB_SIZE};
pub use emitter::{Emitter, StringEmitter};
pub use formatter::{FormatError, FormattedDocument, Formatter};
pub use model::{Model, ModelError};
