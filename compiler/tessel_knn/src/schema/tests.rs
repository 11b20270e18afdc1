use std::borrow::Cow;

use pretty_assertions::assert_eq;
use tessel_ir::{RuleKind, TokenKind, Vocabulary};

use super::*;

struct Names;

impl Vocabulary for Names {
    fn token_name(&self, kind: TokenKind) -> Cow<'_, str> {
        Cow::Owned(format!("t{}", kind.0))
    }

    fn rule_name(&self, kind: RuleKind) -> Cow<'_, str> {
        Cow::Owned(format!("r{}", kind.0))
    }
}

fn sample() -> Schema {
    Schema::new(
        "sample",
        4,
        vec![
            Column::new(3, ColumnKind::Token, "cur"),
            Column::new(1, ColumnKind::Metric, "col"),
            Column::new(0, ColumnKind::Rule, "parent"),
        ],
    )
    .unwrap()
}

#[test]
fn mask_follows_column_kinds() {
    let schema = sample();
    assert_eq!(schema.mask(), &[true, false, true]);
    assert_eq!(schema.categorical_count(), 2);
    assert_eq!(schema.width(), 3);
    assert_eq!(schema.source_width(), 4);
}

#[test]
fn project_picks_source_slots() {
    let projected = sample().project(&[7, 8, 9, 10]);
    assert_eq!(projected.as_slice(), &[10, 8, 7]);
}

#[test]
fn render_separates_structure_with_comma() {
    let schema = sample();
    assert_eq!(schema.render(&[10, 8, 7], &Names), "t10 8, r7");
}

#[test]
fn rejects_schema_without_categorical_columns() {
    let err = Schema::new("metrics", 2, vec![Column::new(0, ColumnKind::Metric, "w")]);
    assert_eq!(
        err,
        Err(SchemaError::NoCategoricalColumns { schema: "metrics" })
    );
}

#[test]
fn rejects_column_outside_source() {
    let err = Schema::new("wide", 2, vec![Column::new(2, ColumnKind::Token, "next")]);
    assert!(matches!(
        err,
        Err(SchemaError::ColumnOutOfRange { source_slot: 2, width: 2, .. })
    ));
}
