//! Corpus collection from already-formatted documents.
//!
//! Every real token from the third on becomes one exemplar. Its features are
//! extracted exactly as the formatter will extract them, then the two
//! position-dependent slots are filled from the document's own layout, and
//! both labels are read off the layout as well.

use std::sync::Arc;

use tessel_ir::{InputDocument, Position, Token, TokenIdx, TokenStream};
use tessel_knn::{Corpus, CorpusError, Decision, Exemplar};
use tracing::debug;

use crate::extract::earliest_ancestor;
use crate::{
    ExtractError, FeatureExtractor, StructuralExtractor, FIRST_ON_LINE, NUM_FEATURES,
    PREV_END_COLUMN,
};

/// Accumulates exemplars from many documents.
pub struct CorpusBuilder<E = StructuralExtractor> {
    extractor: E,
    indent_width: u32,
    tab_size: u32,
    exemplars: Vec<Exemplar>,
    documents: usize,
}

impl CorpusBuilder<StructuralExtractor> {
    pub fn new(indent_width: u32, tab_size: u32) -> Self {
        CorpusBuilder::with_extractor(StructuralExtractor, indent_width, tab_size)
    }
}

impl<E: FeatureExtractor> CorpusBuilder<E> {
    pub fn with_extractor(extractor: E, indent_width: u32, tab_size: u32) -> Self {
        CorpusBuilder {
            extractor,
            indent_width,
            tab_size,
            exemplars: Vec::new(),
            documents: 0,
        }
    }

    /// Collect one document; returns the number of exemplars it added.
    pub fn add_document(&mut self, doc: &InputDocument) -> Result<usize, ExtractError> {
        let exemplars = collect_document(&self.extractor, doc, self.indent_width, self.tab_size)?;
        let added = exemplars.len();
        self.exemplars.extend(exemplars);
        self.documents += 1;
        Ok(added)
    }

    /// Documents collected so far.
    #[inline]
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn finish(self) -> Result<Corpus, CorpusError> {
        Corpus::from_exemplars(NUM_FEATURES, self.exemplars)
    }
}

/// Exemplars for every real token of `doc` from the third on.
pub fn collect_document<E: FeatureExtractor + ?Sized>(
    extractor: &E,
    doc: &InputDocument,
    indent_width: u32,
    tab_size: u32,
) -> Result<Vec<Exemplar>, ExtractError> {
    let name: Arc<str> = Arc::from(doc.name.as_str());
    let mut exemplars = Vec::new();
    for &idx in doc.tokens.real_tokens().iter().skip(2) {
        let Some(position) = doc.tokens.get(idx).and_then(|t| t.position) else {
            continue;
        };
        let mut features = extractor.extract(doc, idx, position.line, tab_size)?;
        if features.len() != NUM_FEATURES {
            return Err(ExtractError::Width {
                token: idx,
                expected: NUM_FEATURES,
                found: features.len(),
            });
        }
        let prev_end = doc
            .tokens
            .prev_real(idx)
            .and_then(|p| doc.tokens.get(p))
            .and_then(Token::end_column)
            .unwrap_or(0);
        features[PREV_END_COLUMN] = i32::try_from(prev_end).unwrap_or(i32::MAX);
        features[FIRST_ON_LINE] = i32::from(is_first_on_line(&doc.tokens, idx));

        let whitespace = observed_whitespace(&doc.tokens, idx, tab_size);
        let alignment = observed_alignment(doc, idx, indent_width);
        exemplars.push(
            Exemplar::new(features, whitespace.encode(), alignment.encode())
                .with_origin(Arc::clone(&name), idx),
        );
    }
    debug!(document = %doc.name, exemplars = exemplars.len(), "collected");
    Ok(exemplars)
}

/// Layout before `idx` as a newline/whitespace decision.
///
/// Only the whitespace run directly before the token counts: `n` newlines in
/// it give `InjectNewline(n)`, otherwise its width gives
/// `InjectWhitespace(width)`. No whitespace at all is `Decision::None`.
pub fn observed_whitespace(tokens: &TokenStream, idx: TokenIdx, tab_size: u32) -> Decision {
    let hidden = tokens.hidden_to_left(idx);
    let trailing = hidden.iter().rev().take_while(|t| t.is_blank());
    let mut newlines = 0u32;
    let mut width = 0u32;
    for token in trailing {
        newlines += u32::try_from(token.text.matches('\n').count()).unwrap_or(u32::MAX);
        if newlines == 0 {
            width += token
                .text
                .chars()
                .map(|c| if c == '\t' { tab_size } else { 1 })
                .sum::<u32>();
        }
    }
    if newlines > 0 {
        Decision::InjectNewline(clamp(newlines))
    } else if width > 0 {
        Decision::InjectWhitespace(clamp(width))
    } else {
        Decision::None
    }
}

/// Alignment of `idx` relative to the lines above it.
///
/// Tried in order: `Indent`, then `AlignWithAncestorChild` with the smallest
/// delta and child index, then `IndentFromAncestorFirstToken` with the
/// smallest delta. Tokens that do not start a line are `Decision::None`.
pub fn observed_alignment(doc: &InputDocument, idx: TokenIdx, indent_width: u32) -> Decision {
    let tokens = &doc.tokens;
    let tree = &doc.tree;
    let Some(cur) = tokens.get(idx).and_then(|t| t.position) else {
        return Decision::None;
    };
    if !is_first_on_line(tokens, idx) {
        return Decision::None;
    }

    if let Some(first) = tokens
        .first_token_on_previous_content_line(idx, cur.line)
        .and_then(|t| t.position)
    {
        if first.column + indent_width == cur.column {
            return Decision::Indent;
        }
    }

    let Some(parent) = tree.leaf_for(idx).and_then(|leaf| tree.parent(leaf)) else {
        return Decision::None;
    };
    let earliest = earliest_ancestor(tree, parent, idx);
    let start_of = |node| {
        tree.start_token(node)
            .and_then(|t| tokens.get(t))
            .and_then(|t| t.position)
    };
    let above = |pos: Position| pos.line < cur.line;

    let mut delta = 0u8;
    while let Some(ancestor) = tree.ancestor(earliest, usize::from(delta)) {
        for (child, &node) in tree.children(ancestor).iter().enumerate() {
            let Ok(child) = u16::try_from(child) else {
                break;
            };
            if start_of(node).is_some_and(|pos| above(pos) && pos.column == cur.column) {
                return Decision::AlignWithAncestorChild { delta, child };
            }
        }
        let Some(next) = delta.checked_add(1) else {
            break;
        };
        delta = next;
    }

    let mut delta = 0u8;
    while let Some(ancestor) = tree.ancestor(earliest, usize::from(delta)) {
        if start_of(ancestor)
            .is_some_and(|pos| above(pos) && pos.column + indent_width == cur.column)
        {
            return Decision::IndentFromAncestorFirstToken { delta };
        }
        let Some(next) = delta.checked_add(1) else {
            break;
        };
        delta = next;
    }
    Decision::None
}

/// Does `idx` start its line in the original layout?
fn is_first_on_line(tokens: &TokenStream, idx: TokenIdx) -> bool {
    let line_of = |i: TokenIdx| tokens.get(i).and_then(|t| t.position).map(|p| p.line);
    match (tokens.prev_real(idx).and_then(line_of), line_of(idx)) {
        (Some(prev), Some(cur)) => prev < cur,
        (None, _) => true,
        (Some(_), None) => false,
    }
}

fn clamp(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
