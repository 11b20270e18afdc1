use pretty_assertions::assert_eq;
use tessel_parse::parse_document;

use super::*;

fn token_named(doc: &InputDocument, text: &str) -> TokenIdx {
    doc.tokens.iter().find(|t| t.text == text).unwrap().index
}

const BLOCK: &str = "if (x) {\n    return y;\n}";

#[test]
fn whitespace_labels_follow_layout() {
    let doc = parse_document("t", BLOCK).unwrap();
    let label = |text| observed_whitespace(&doc.tokens, token_named(&doc, text), 4);
    assert_eq!(label("x"), Decision::None);
    assert_eq!(label("{"), Decision::InjectWhitespace(1));
    assert_eq!(label("return"), Decision::InjectNewline(1));
    assert_eq!(label("}"), Decision::InjectNewline(1));
}

#[test]
fn whitespace_label_reads_only_the_trailing_run() {
    let doc = parse_document("t", "a /* c */\n\n  b;").unwrap();
    let b = token_named(&doc, "b");
    assert_eq!(observed_whitespace(&doc.tokens, b, 4), Decision::InjectNewline(2));

    let doc = parse_document("t", "a /* c */  b;").unwrap();
    let b = token_named(&doc, "b");
    assert_eq!(observed_whitespace(&doc.tokens, b, 4), Decision::InjectWhitespace(2));
}

#[test]
fn indent_is_relative_to_previous_content_line() {
    let doc = parse_document("t", BLOCK).unwrap();
    let ret = token_named(&doc, "return");
    assert_eq!(observed_alignment(&doc, ret, 4), Decision::Indent);
}

#[test]
fn closing_brace_aligns_with_statement_start() {
    let doc = parse_document("t", BLOCK).unwrap();
    let close = token_named(&doc, "}");
    assert_eq!(
        observed_alignment(&doc, close, 4),
        Decision::AlignWithAncestorChild { delta: 1, child: 0 }
    );
}

#[test]
fn continuation_aligns_with_first_argument() {
    let doc = parse_document("t", "f(a,\n  b);").unwrap();
    let b = token_named(&doc, "b");
    assert_eq!(
        observed_alignment(&doc, b, 4),
        Decision::AlignWithAncestorChild { delta: 1, child: 0 }
    );
}

#[test]
fn indent_from_ancestor_first_token() {
    let doc = parse_document("t", "a;  bb = c(\n        d);").unwrap();
    let d = token_named(&doc, "d");
    assert_eq!(
        observed_alignment(&doc, d, 4),
        Decision::IndentFromAncestorFirstToken { delta: 2 }
    );
}

#[test]
fn tokens_inside_a_line_are_unaligned() {
    let doc = parse_document("t", BLOCK).unwrap();
    let y = token_named(&doc, "y");
    assert_eq!(observed_alignment(&doc, y, 4), Decision::None);
}

#[test]
fn exemplars_carry_patched_slots_and_origin() {
    let doc = parse_document("Block.java", BLOCK).unwrap();
    let exemplars = collect_document(&StructuralExtractor, &doc, 4, 4).unwrap();
    assert_eq!(exemplars.len(), doc.tokens.real_tokens().len() - 2);

    let ret = token_named(&doc, "return");
    let exemplar = exemplars
        .iter()
        .find(|e| e.origin.as_ref().is_some_and(|o| o.token == ret))
        .unwrap();
    assert_eq!(exemplar.features[FIRST_ON_LINE], 1);
    assert_eq!(exemplar.features[PREV_END_COLUMN], 8);
    assert_eq!(exemplar.whitespace.decode(), Decision::InjectNewline(1));
    assert_eq!(exemplar.alignment.decode(), Decision::Indent);
    assert_eq!(&*exemplar.origin.as_ref().unwrap().document, "Block.java");
}

#[test]
fn builder_accumulates_documents() {
    let mut builder = CorpusBuilder::new(4, 4);
    let first = parse_document("a", BLOCK).unwrap();
    let second = parse_document("b", "f(a,\n  b);").unwrap();
    let added = builder.add_document(&first).unwrap() + builder.add_document(&second).unwrap();
    assert_eq!(builder.documents(), 2);
    let corpus = builder.finish().unwrap();
    assert_eq!(corpus.len(), added);
    assert_eq!(corpus.width(), NUM_FEATURES);
}

struct Narrow;

impl FeatureExtractor for Narrow {
    fn extract(
        &self,
        _doc: &InputDocument,
        _token: TokenIdx,
        _current_line: u32,
        _tab_size: u32,
    ) -> Result<crate::FeatureVector, ExtractError> {
        Ok(crate::FeatureVector::from_slice(&[0; 5]))
    }
}

#[test]
fn narrow_extractor_is_an_error_not_a_panic() {
    let doc = parse_document("t", "a = b;").unwrap();
    let mut builder = CorpusBuilder::with_extractor(Narrow, 4, 4);
    let err = builder.add_document(&doc).unwrap_err();
    assert_eq!(
        err,
        ExtractError::Width {
            token: token_named(&doc, "b"),
            expected: NUM_FEATURES,
            found: 5,
        }
    );
    assert_eq!(builder.documents(), 0);
}
