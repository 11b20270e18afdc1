use std::borrow::Cow;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use smallvec::smallvec;
use tessel_ir::{RuleKind, TokenIdx, TokenKind};

use super::*;
use crate::{Column, ColumnKind, Decision, Exemplar};

struct Names;

impl Vocabulary for Names {
    fn token_name(&self, kind: TokenKind) -> Cow<'_, str> {
        Cow::Owned(format!("'t{}'", kind.0))
    }

    fn rule_name(&self, kind: RuleKind) -> Cow<'_, str> {
        Cow::Owned(format!("r{}", kind.0))
    }
}

fn schema() -> Schema {
    Schema::new(
        "ws",
        3,
        vec![
            Column::new(0, ColumnKind::Token, "cur"),
            Column::new(1, ColumnKind::Metric, "col"),
            Column::new(2, ColumnKind::Rule, "parent"),
        ],
    )
    .unwrap()
}

fn exemplar(features: [i32; 3], ws: Decision) -> Exemplar {
    Exemplar::new(
        smallvec![features[0], features[1], features[2]],
        ws.encode(),
        Decision::Indent.encode(),
    )
}

fn classifier(exemplars: Vec<Exemplar>) -> ContextClassifier {
    let corpus = Corpus::from_exemplars(3, exemplars).unwrap();
    ContextClassifier::new(Arc::new(corpus), schema()).unwrap()
}

fn seventy_thirty() -> ContextClassifier {
    let mut exemplars = Vec::new();
    for i in 0..7 {
        exemplars.push(exemplar([5, i, 2], Decision::InjectNewline(1)));
    }
    for i in 0..3 {
        exemplars.push(exemplar([5, 40 + i, 2], Decision::InjectWhitespace(1)));
    }
    exemplars.push(exemplar([6, 0, 3], Decision::InjectWhitespace(1)));
    classifier(exemplars)
}

#[test]
fn continuous_columns_do_not_count() {
    let c = classifier(vec![]);
    assert_eq!(c.distance(&[1, 100, 2], &[1, 0, 2]), 0.0);
    assert_eq!(c.distance(&[1, 100, 2], &[1, 0, 3]), 0.5);
}

#[test]
fn classify_majority_within_threshold() {
    let c = seventy_thirty();
    let label = c.classify(11, &[5, 99, 2], LabelField::Whitespace, 0.0).unwrap();
    assert_eq!(label.decode(), Decision::InjectNewline(1));
}

#[test]
fn classify_reads_requested_field() {
    let c = seventy_thirty();
    let label = c.classify(11, &[5, 99, 2], LabelField::Alignment, 0.0).unwrap();
    assert_eq!(label.decode(), Decision::Indent);
}

#[test]
fn nothing_in_range_is_none() {
    let c = seventy_thirty();
    let label = c.classify(11, &[9, 0, 9], LabelField::Whitespace, 0.4).unwrap();
    assert_eq!(label, LabelCode::NONE);
}

#[test]
fn query_width_mismatch_is_fatal() {
    let c = seventy_thirty();
    let err = c.classify(11, &[5, 2], LabelField::Whitespace, 1.0).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::WidthMismatch {
            schema: "ws",
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn corpus_width_must_match_schema() {
    let corpus = Arc::new(Corpus::new(4));
    assert!(matches!(
        ContextClassifier::new(corpus, schema()),
        Err(ClassifyError::CorpusMismatch { corpus: 4, .. })
    ));
}

#[test]
fn explain_reports_vote_share() {
    let c = seventy_thirty();
    let analysis = c.explain(11, &[5, 99, 2], LabelField::Whitespace, 0.0).unwrap();
    assert_eq!(analysis.neighbors.len(), 10);
    assert_eq!(analysis.decision(), Decision::InjectNewline(1));
    assert_eq!(analysis.rationale(), "70% for newline(1) (7/10 neighbors)");
}

#[test]
fn explain_report_renders_names_and_origin() {
    let corpus = Corpus::from_exemplars(
        3,
        vec![exemplar([5, 12, 2], Decision::InjectWhitespace(1))
            .with_origin(Arc::from("A.java"), TokenIdx::from_raw(4))],
    )
    .unwrap();
    let c = ContextClassifier::new(Arc::new(corpus), schema()).unwrap();
    let analysis = c.explain(11, &[5, 3, 2], LabelField::Whitespace, 0.4).unwrap();
    let report = analysis.display(&Names).to_string();
    assert!(report.starts_with("ws [Whitespace]: 't5' 3, r2\n"), "{report}");
    assert!(report.contains("100% for whitespace(1) (1/1 neighbors)"));
    assert!(report.contains("0.000 whitespace(1) <- 't5' 12, r2 @ A.java#4"));
}

#[test]
fn explain_with_no_neighbors() {
    let c = classifier(vec![]);
    let analysis = c.explain(11, &[1, 2, 3], LabelField::Whitespace, 1.0).unwrap();
    assert_eq!(analysis.winner, LabelCode::NONE);
    assert_eq!(analysis.rationale(), "no neighbors within threshold");
}

#[test]
fn describe_projects_then_renders() {
    let c = classifier(vec![]);
    assert_eq!(c.describe(&[7, 23, 1], &Names), "'t7' 23, r1");
}
