//! Tessel feature layer.
//!
//! Turns a token plus its place in the syntax tree into a fixed-width
//! [`FeatureVector`], and turns already-formatted documents into a labelled
//! [`Corpus`](tessel_knn::Corpus).
//!
//! # Vector layout
//!
//! | Slot | Name | Kind |
//! |------|------|------|
//! | 0 | `PREV2_TYPE` | token |
//! | 1 | `PREV_TYPE` | token |
//! | 2 | `PREV_END_COLUMN` | metric, patched by the caller |
//! | 3 | `CUR_TYPE` | token |
//! | 4 | `EARLIEST_ANCESTOR_RULE` | rule |
//! | 5 | `EARLIEST_ANCESTOR_WIDTH` | metric |
//! | 6 | `NEXT_TYPE` | token |
//! | 7 | `FIRST_ON_LINE` | flag, patched by the caller |
//! | 8 | `PARENT_RULE` | rule |
//! | 9 | `CHILD_INDEX` | index |
//! | 10 | `GRANDPARENT_RULE` | rule |
//!
//! The "earliest ancestor" of a token is the outermost node, starting from the
//! token's parent, that begins with the token; when the parent does not begin
//! with it, the parent itself. Slots 8 to 10 describe the earliest ancestor's
//! own position: its parent's rule, its index among that parent's children,
//! and its grandparent's rule.

mod collect;
mod extract;

use tessel_knn::{Column, ColumnKind, Schema, SchemaError};

pub use collect::{collect_document, observed_alignment, observed_whitespace, CorpusBuilder};
pub use extract::{ExtractError, FeatureExtractor, StructuralExtractor};
pub use tessel_knn::FeatureVector;

pub const PREV2_TYPE: usize = 0;
pub const PREV_TYPE: usize = 1;
pub const PREV_END_COLUMN: usize = 2;
pub const CUR_TYPE: usize = 3;
pub const EARLIEST_ANCESTOR_RULE: usize = 4;
pub const EARLIEST_ANCESTOR_WIDTH: usize = 5;
pub const NEXT_TYPE: usize = 6;
pub const FIRST_ON_LINE: usize = 7;
pub const PARENT_RULE: usize = 8;
pub const CHILD_INDEX: usize = 9;
pub const GRANDPARENT_RULE: usize = 10;

/// Width of a full feature vector.
pub const NUM_FEATURES: usize = 11;

/// Columns the newline/whitespace classifier compares: the first seven slots.
pub fn whitespace_schema() -> Result<Schema, SchemaError> {
    Schema::new(
        "newline/whitespace",
        NUM_FEATURES,
        vec![
            Column::new(PREV2_TYPE, ColumnKind::Token, "prev2 type"),
            Column::new(PREV_TYPE, ColumnKind::Token, "prev type"),
            Column::new(PREV_END_COLUMN, ColumnKind::Metric, "prev end column"),
            Column::new(CUR_TYPE, ColumnKind::Token, "type"),
            Column::new(EARLIEST_ANCESTOR_RULE, ColumnKind::Rule, "earliest ancestor"),
            Column::new(EARLIEST_ANCESTOR_WIDTH, ColumnKind::Metric, "ancestor width"),
            Column::new(NEXT_TYPE, ColumnKind::Token, "next type"),
        ],
    )
}

/// Columns the alignment classifier compares.
pub fn alignment_schema() -> Result<Schema, SchemaError> {
    Schema::new(
        "alignment",
        NUM_FEATURES,
        vec![
            Column::new(PREV_TYPE, ColumnKind::Token, "prev type"),
            Column::new(CUR_TYPE, ColumnKind::Token, "type"),
            Column::new(FIRST_ON_LINE, ColumnKind::Flag, "first on line"),
            Column::new(EARLIEST_ANCESTOR_RULE, ColumnKind::Rule, "earliest ancestor"),
            Column::new(EARLIEST_ANCESTOR_WIDTH, ColumnKind::Metric, "ancestor width"),
            Column::new(PARENT_RULE, ColumnKind::Rule, "parent"),
            Column::new(CHILD_INDEX, ColumnKind::Index, "child index"),
            Column::new(GRANDPARENT_RULE, ColumnKind::Rule, "grandparent"),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
