//! Feature schemas.
//!
//! The feature extractor produces one full-width vector per token. Each
//! classifier looks at a projection of it: a list of columns, each naming a
//! source slot and how the slot is compared and rendered.

use std::fmt::Write as _;

use tessel_ir::{RuleKind, TokenKind, Vocabulary};

use crate::FeatureVector;

/// How a column is compared and displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Categorical token kind.
    Token,
    /// Categorical rule kind.
    Rule,
    /// Categorical 0/1.
    Flag,
    /// Categorical small integer (child index).
    Index,
    /// Continuous value; carried for display, never compared.
    Metric,
}

impl ColumnKind {
    #[inline]
    pub fn is_categorical(self) -> bool {
        !matches!(self, ColumnKind::Metric)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Slot in the full feature vector.
    pub source: usize,
    pub kind: ColumnKind,
    pub name: &'static str,
}

impl Column {
    pub const fn new(source: usize, kind: ColumnKind, name: &'static str) -> Self {
        Column { source, kind, name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("schema `{schema}` has no categorical column")]
    NoCategoricalColumns { schema: &'static str },
    #[error("schema `{schema}` column `{column}` reads slot {source_slot} of a {width}-wide vector")]
    ColumnOutOfRange {
        schema: &'static str,
        column: &'static str,
        source_slot: usize,
        width: usize,
    },
}

/// A validated projection of the full feature vector.
///
/// The category mask is derived from the column kinds, so it always has the
/// projected width and never changes after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    source_width: usize,
    columns: Vec<Column>,
    mask: Vec<bool>,
    categorical: usize,
}

impl Schema {
    pub fn new(
        name: &'static str,
        source_width: usize,
        columns: Vec<Column>,
    ) -> Result<Self, SchemaError> {
        if let Some(column) = columns.iter().find(|c| c.source >= source_width) {
            return Err(SchemaError::ColumnOutOfRange {
                schema: name,
                column: column.name,
                source_slot: column.source,
                width: source_width,
            });
        }
        let mask: Vec<bool> = columns.iter().map(|c| c.kind.is_categorical()).collect();
        let categorical = mask.iter().filter(|&&m| m).count();
        if categorical == 0 {
            return Err(SchemaError::NoCategoricalColumns { schema: name });
        }
        Ok(Schema {
            name,
            source_width,
            columns,
            mask,
            categorical,
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Width of the full vectors this schema projects.
    #[inline]
    pub fn source_width(&self) -> usize {
        self.source_width
    }

    /// Projected width.
    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Category mask over the projected columns.
    #[inline]
    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    #[inline]
    pub fn categorical_count(&self) -> usize {
        self.categorical
    }

    /// Project a full vector. The caller checks `full.len() == source_width()`.
    pub fn project(&self, full: &[i32]) -> FeatureVector {
        self.columns
            .iter()
            .map(|c| full.get(c.source).copied().unwrap_or_default())
            .collect()
    }

    /// Render a projected vector, e.g. `')' '{' 23 'return', statement 49`.
    ///
    /// Token columns come first in every schema; a comma separates them from
    /// the structural columns that follow.
    pub fn render(&self, projected: &[i32], vocab: &dyn Vocabulary) -> String {
        let mut out = String::new();
        let mut structural = false;
        for (i, (column, &value)) in self.columns.iter().zip(projected).enumerate() {
            if i > 0 {
                if column.kind == ColumnKind::Rule && !structural {
                    out.push(',');
                }
                out.push(' ');
            }
            structural |= column.kind == ColumnKind::Rule;
            match column.kind {
                ColumnKind::Token => {
                    out.push_str(&vocab.token_name(TokenKind(clamp_u16(value))));
                }
                ColumnKind::Rule => {
                    out.push_str(&vocab.rule_name(RuleKind(clamp_u16(value))));
                }
                ColumnKind::Flag | ColumnKind::Index | ColumnKind::Metric => {
                    let _ = write!(out, "{value}");
                }
            }
        }
        out
    }
}

fn clamp_u16(value: i32) -> u16 {
    u16::try_from(value).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
