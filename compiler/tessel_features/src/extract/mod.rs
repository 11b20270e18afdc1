//! Feature extraction.

use smallvec::smallvec;
use tessel_ir::{InputDocument, NodeId, SyntaxTree, TokenIdx, TokenKind, TokenStream};

use crate::{
    FeatureVector, CHILD_INDEX, CUR_TYPE, EARLIEST_ANCESTOR_RULE, EARLIEST_ANCESTOR_WIDTH,
    GRANDPARENT_RULE, NEXT_TYPE, NUM_FEATURES, PARENT_RULE, PREV2_TYPE, PREV_TYPE,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("token {token} has no leaf in the syntax tree")]
    NoLeaf { token: TokenIdx },
    #[error("leaf for token {token} has no parent rule")]
    NoParent { token: TokenIdx },
    #[error("feature vector for token {token} has {found} slots, expected {expected}")]
    Width {
        token: TokenIdx,
        expected: usize,
        found: usize,
    },
}

/// Produces the full-width feature vector for a real token.
///
/// `PREV_END_COLUMN` and `FIRST_ON_LINE` are left at 0; only the caller knows
/// the cursor column and whether a newline went in before the token.
pub trait FeatureExtractor {
    fn extract(
        &self,
        doc: &InputDocument,
        token: TokenIdx,
        current_line: u32,
        tab_size: u32,
    ) -> Result<FeatureVector, ExtractError>;
}

/// Extractor over the token kinds and tree shape only.
///
/// Reads nothing position-dependent, so it gives the same answer on a
/// document whose positions have been wiped. `current_line` is not consulted.
#[derive(Copy, Clone, Debug, Default)]
pub struct StructuralExtractor;

impl FeatureExtractor for StructuralExtractor {
    fn extract(
        &self,
        doc: &InputDocument,
        token: TokenIdx,
        _current_line: u32,
        tab_size: u32,
    ) -> Result<FeatureVector, ExtractError> {
        let tree = &doc.tree;
        let tokens = &doc.tokens;
        let leaf = tree.leaf_for(token).ok_or(ExtractError::NoLeaf { token })?;
        let parent = tree.parent(leaf).ok_or(ExtractError::NoParent { token })?;
        let earliest = earliest_ancestor(tree, parent, token);

        let prev = tokens.prev_real(token);
        let prev2 = prev.and_then(|p| tokens.prev_real(p));
        let next = tokens.next_real(token);

        let above = tree.parent(earliest);
        let mut features: FeatureVector = smallvec![0; NUM_FEATURES];
        features[PREV2_TYPE] = kind_feature(tokens, prev2);
        features[PREV_TYPE] = kind_feature(tokens, prev);
        features[CUR_TYPE] = kind_feature(tokens, Some(token));
        features[EARLIEST_ANCESTOR_RULE] = rule_feature(tree, Some(earliest));
        features[EARLIEST_ANCESTOR_WIDTH] = node_width(tree, tokens, earliest, tab_size);
        features[NEXT_TYPE] = kind_feature(tokens, next);
        features[PARENT_RULE] = rule_feature(tree, above);
        features[CHILD_INDEX] = tree
            .child_index(earliest)
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1);
        features[GRANDPARENT_RULE] = rule_feature(tree, above.and_then(|a| tree.parent(a)));
        Ok(features)
    }
}

/// Outermost node from `parent` upward that starts with `token`, else
/// `parent`.
pub(crate) fn earliest_ancestor(tree: &SyntaxTree, parent: NodeId, token: TokenIdx) -> NodeId {
    tree.earliest_ancestor_starting_with(parent, token)
        .unwrap_or(parent)
}

fn kind_feature(tokens: &TokenStream, idx: Option<TokenIdx>) -> i32 {
    idx.and_then(|i| tokens.get(i))
        .map_or(TokenKind::NONE, |t| t.kind)
        .feature()
}

fn rule_feature(tree: &SyntaxTree, node: Option<NodeId>) -> i32 {
    node.and_then(|n| tree.rule_kind(n))
        .map_or(0, tessel_ir::RuleKind::feature)
}

/// Chars spanned by a node's tokens, hidden ones included, tabs expanded.
fn node_width(tree: &SyntaxTree, tokens: &TokenStream, node: NodeId, tab_size: u32) -> i32 {
    let (Some(start), Some(stop)) = (tree.start_token(node), tree.stop_token(node)) else {
        return 0;
    };
    let width: u32 = tokens
        .tokens()
        .get(start.index()..=stop.index())
        .unwrap_or_default()
        .iter()
        .flat_map(|t| t.text.chars())
        .map(|c| if c == '\t' { tab_size } else { 1 })
        .sum();
    i32::try_from(width).unwrap_or(i32::MAX)
}
