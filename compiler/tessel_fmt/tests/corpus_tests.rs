#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Train on the sample corpus under `tests/corpus/` and reformat against it.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tessel_fmt::{FormatConfig, Formatter, Model};
use tessel_ir::InputDocument;
use tessel_parse::{parse_document, BraceVocabulary};

fn corpus_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("corpus")
}

fn corpus_documents() -> Vec<InputDocument> {
    let mut paths: Vec<PathBuf> = fs::read_dir(corpus_dir())
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|e| e == "java"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|path| {
            let source = fs::read_to_string(path).unwrap();
            parse_document(path.display().to_string(), source).unwrap()
        })
        .collect()
}

fn model() -> Model {
    Model::train(&corpus_documents(), &FormatConfig::default()).unwrap()
}

fn format(model: &Model, source: &str) -> String {
    let doc = parse_document("input.java", source).unwrap();
    Formatter::new(model, BraceVocabulary, FormatConfig::default())
        .format(&doc)
        .unwrap()
        .text
}

#[test]
fn corpus_parses_and_trains() {
    let docs = corpus_documents();
    assert_eq!(docs.len(), 3);
    let model = model();
    let expected: usize = docs.iter().map(|d| d.tokens.real_tokens().len() - 2).sum();
    assert_eq!(model.corpus().len(), expected);
}

#[test]
fn squashed_method_body_is_broken_into_lines() {
    let model = model();
    let out = format(&model, "class Box{int w;int get(){return w;}}");

    let relexed = tessel_lexer::lex(&out).unwrap();
    assert_eq!(
        relexed.real_texts(),
        tessel_lexer::lex("class Box{int w;int get(){return w;}}")
            .unwrap()
            .real_texts()
    );
    assert!(out.lines().count() > 1, "no newlines predicted:\n{out}");
    assert!(
        out.lines().any(|line| line.trim_start().starts_with("return")),
        "return not at the start of a line:\n{out}"
    );
}

#[test]
fn formatting_is_deterministic() {
    let model = model();
    let source = "class Box{int w;void set(int v){if(v>0){w=v;}}}";
    assert_eq!(format(&model, source), format(&model, source));
}

#[test]
fn comments_survive_reformatting() {
    let model = model();
    let out = format(
        &model,
        "class A{/* header */int f(){return 1; // one\n}}",
    );
    assert!(out.contains("/* header */"));
    assert!(out.contains("// one\n"));
}

#[test]
fn analysis_covers_every_decided_token() {
    let model = model();
    let doc = parse_document("input.java", "class Box{int w;}").unwrap();
    let out = Formatter::new(&model, BraceVocabulary, FormatConfig::default())
        .format(&doc)
        .unwrap();
    let decided: Vec<&str> = out.analyses().map(|a| a.text.as_str()).collect();
    assert_eq!(decided, vec!["{", "int", "w", ";", "}"]);
    for analysis in out.analyses() {
        assert!(!analysis.whitespace_analysis.is_empty());
        assert!(!analysis.alignment_analysis.is_empty());
    }
}

#[test]
fn shared_model_formats_in_parallel() {
    let model = model();
    let sources = ["class A{int a;}", "class B{int b(){return 2;}}"];
    let sequential: Vec<String> = sources.iter().map(|s| format(&model, s)).collect();
    let parallel: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| scope.spawn(|| format(&model, s)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}
