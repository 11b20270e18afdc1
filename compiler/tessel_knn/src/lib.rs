//! Tessel k-nearest-neighbour layer.
//!
//! Everything the formatter needs to turn a feature vector into a layout
//! decision:
//! - [`context_distance`]: fraction of categorical columns that differ
//! - [`LabelCode`] / [`Decision`]: the packed label stored with each exemplar
//!   and the closed set of decisions it decodes to
//! - [`Schema`]: which columns of the full vector a classifier looks at, and
//!   which of those are categorical
//! - [`Corpus`]: labelled exemplars, immutable once built
//! - [`engine`]: threshold-gated majority vote
//! - [`ContextClassifier`]: a schema bound to a shared corpus
//!
//! # Design Philosophy
//!
//! - **Context over geometry**: only categorical columns are compared.
//!   Continuous columns (column numbers, widths) ride along for display.
//! - **Read-only at query time**: a classifier never mutates; one instance
//!   can serve any number of concurrent formatter runs.

mod classifier;
mod corpus;
mod distance;
pub mod engine;
mod label;
mod schema;

use smallvec::SmallVec;

pub use classifier::{ClassifyError, ContextClassifier, NeighborDetail, PredictionAnalysis};
pub use corpus::{Corpus, CorpusError, Exemplar, LabelField, Origin};
pub use distance::context_distance;
pub use engine::{Neighbor, Vote};
pub use label::{tags, Decision, LabelCode};
pub use schema::{Column, ColumnKind, Schema, SchemaError};

/// Inline capacity of a [`FeatureVector`]; wide enough for the full layout.
pub const INLINE_FEATURES: usize = 11;

/// Ordered integers describing one token's structural context.
pub type FeatureVector = SmallVec<[i32; INLINE_FEATURES]>;
