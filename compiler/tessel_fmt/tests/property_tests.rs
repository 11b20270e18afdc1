#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based checks of the reconstruction engine.
//!
//! Programs are generated as token lists and glued with random hidden text
//! (nothing, spaces, newlines, comments). Whatever the model predicts, the
//! output must keep the same real tokens and never fuse two of them.

use std::sync::OnceLock;

use proptest::prelude::*;
use tessel_fmt::{FormatConfig, Formatter, Model};
use tessel_lexer::would_merge;
use tessel_parse::{parse_document, BraceVocabulary};

const CORPUS: [(&str, &str); 3] = [
    ("Point.java", include_str!("corpus/Point.java")),
    ("Counter.java", include_str!("corpus/Counter.java")),
    ("Search.java", include_str!("corpus/Search.java")),
];

fn model() -> &'static Model {
    static MODEL: OnceLock<Model> = OnceLock::new();
    MODEL.get_or_init(|| {
        let docs: Vec<_> = CORPUS
            .iter()
            .map(|(name, source)| parse_document(*name, *source).unwrap())
            .collect();
        Model::train(&docs, &FormatConfig::default()).unwrap()
    })
}

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["a", "b", "count", "x1", "_tmp", "this"])
}

fn number() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["0", "1", "42", "7L"])
}

fn operand() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        word().prop_map(|w| vec![w.to_string()]),
        number().prop_map(|n| vec![n.to_string()]),
        (word(), number()).prop_map(|(w, n)| ["f", "(", n, ",", w, ")"]
            .into_iter()
            .map(String::from)
            .collect()),
    ]
}

fn expr() -> impl Strategy<Value = Vec<String>> {
    let op = prop::sample::select(vec!["+", "-", "*", "/", "<", "<=", "==", "&&", "++"]);
    (operand(), prop::collection::vec((op, operand()), 0..4)).prop_map(|(head, tail)| {
        let mut tokens = head;
        for (op, rhs) in tail {
            tokens.push(op.to_string());
            tokens.extend(rhs);
        }
        tokens
    })
}

fn statement() -> impl Strategy<Value = Vec<String>> {
    let leaf = prop_oneof![
        expr().prop_map(|e| {
            let mut tokens = vec!["x".to_string(), "=".to_string()];
            tokens.extend(e);
            tokens.push(";".to_string());
            tokens
        }),
        expr().prop_map(|e| {
            let mut tokens = vec!["int".to_string(), "v".to_string(), "=".to_string()];
            tokens.extend(e);
            tokens.push(";".to_string());
            tokens
        }),
        expr().prop_map(|e| {
            let mut tokens = vec!["return".to_string()];
            tokens.extend(e);
            tokens.push(";".to_string());
            tokens
        }),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        (expr(), prop::collection::vec(inner, 0..4)).prop_map(|(cond, body)| {
            let mut tokens = vec!["if".to_string(), "(".to_string()];
            tokens.extend(cond);
            tokens.push(")".to_string());
            tokens.push("{".to_string());
            tokens.extend(body.into_iter().flatten());
            tokens.push("}".to_string());
            tokens
        })
    })
}

fn program() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(statement(), 1..5).prop_map(|stmts| {
        let mut tokens: Vec<String> = ["class", "T", "{", "void", "run", "(", ")", "{"]
            .into_iter()
            .map(String::from)
            .collect();
        tokens.extend(stmts.into_iter().flatten());
        tokens.push("}".to_string());
        tokens.push("}".to_string());
        tokens
    })
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "", "", "", " ", "  ", "\n", "\n    ", "\t", " // note\n", "/* c */", " /* two\n lines */ ",
    ])
}

/// Glue tokens with hidden text so the source lexes back to exactly `tokens`.
fn render(tokens: &[String], separators: &[&str]) -> String {
    let mut source = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            let mut sep = separators[i % separators.len()];
            if sep.is_empty() && would_merge(&tokens[i - 1], token) {
                sep = " ";
            }
            if sep.starts_with('/') && source.ends_with('/') {
                source.push(' ');
            }
            source.push_str(sep);
        }
        source.push_str(token);
    }
    source
}

fn source() -> impl Strategy<Value = (Vec<String>, String)> {
    (program(), prop::collection::vec(separator(), 1..16)).prop_map(|(tokens, seps)| {
        let text = render(&tokens, &seps);
        (tokens, text)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn output_is_lexically_equivalent((tokens, text) in source()) {
        let doc = parse_document("gen.java", text).unwrap();
        let out = Formatter::new(model(), BraceVocabulary, FormatConfig::default())
            .format(&doc)
            .unwrap();
        let relexed = tessel_lexer::lex(&out.text).unwrap();
        prop_assert_eq!(relexed.real_texts(), tokens.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn adjacent_tokens_never_fuse(
        (_tokens, text) in source(),
        k in 1usize..16,
        threshold in 0.0f64..=1.0,
    ) {
        let doc = parse_document("gen.java", text).unwrap();
        let config = FormatConfig::default().with_k(k).with_max_context_distance(threshold);
        let out = Formatter::new(model(), BraceVocabulary, config).format(&doc).unwrap();
        let relexed = tessel_lexer::lex(&out.text).unwrap();
        for pair in relexed.real_tokens().windows(2) {
            let (a, b) = (relexed.get(pair[0]).unwrap(), relexed.get(pair[1]).unwrap());
            if a.span.end == b.span.start {
                prop_assert!(!would_merge(&a.text, &b.text), "{:?} {:?} fused", a.text, b.text);
            }
        }
    }

    #[test]
    fn formatting_is_deterministic((_tokens, text) in source()) {
        let doc = parse_document("gen.java", text).unwrap();
        let formatter = Formatter::new(model(), BraceVocabulary, FormatConfig::default());
        let first = formatter.format(&doc).unwrap();
        let second = formatter.format(&doc).unwrap();
        prop_assert_eq!(first.text, second.text);
    }

    /// The first two tokens keep their pinned coordinates; every later one
    /// is stamped where it landed.
    #[test]
    fn output_positions_match_output_text((_tokens, text) in source()) {
        let doc = parse_document("gen.java", text).unwrap();
        let out = Formatter::new(model(), BraceVocabulary, FormatConfig::default())
            .format(&doc)
            .unwrap();
        let relexed = tessel_lexer::lex(&out.text).unwrap();
        let stamped: Vec<_> = out
            .tokens
            .real_tokens()
            .iter()
            .skip(2)
            .map(|&idx| out.tokens.get(idx).unwrap().position)
            .collect();
        let actual: Vec<_> = relexed
            .real_tokens()
            .iter()
            .skip(2)
            .map(|&idx| relexed.get(idx).unwrap().position)
            .collect();
        prop_assert_eq!(stamped, actual);
    }
}
