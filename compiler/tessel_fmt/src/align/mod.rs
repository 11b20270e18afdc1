//! Alignment resolution after an injected newline.
//!
//! Every lookup goes through the read-only tree and the positions already
//! stamped on the output stream. A lookup that finds nothing leaves the
//! token at column 0 and logs a warning; it never fails the run.

use tessel_ir::{NodeId, SyntaxTree, TokenIdx, TokenStream};
use tessel_knn::Decision;
use tracing::warn;

pub(crate) struct Aligner<'a> {
    pub tree: &'a SyntaxTree,
    /// Output stream; tokens before the current one carry new positions.
    pub tokens: &'a TokenStream,
    pub indent_width: u32,
}

impl Aligner<'_> {
    /// Column to pad to, or `None` for no indentation.
    pub(crate) fn target_column(&self, decision: Decision, token: TokenIdx, line: u32) -> Option<u32> {
        match decision {
            Decision::Indent => self
                .tokens
                .first_token_on_previous_content_line(token, line)
                .and_then(|t| t.position)
                .map(|pos| pos.column + self.indent_width),
            Decision::AlignWithAncestorChild { delta, child } => {
                let ancestor = self.ancestor(token, delta)?;
                let Some(node) = self.tree.child(ancestor, usize::from(child)) else {
                    warn!(%token, delta, child, "alignment child out of range");
                    return None;
                };
                self.start_column(node, token)
            }
            Decision::IndentFromAncestorFirstToken { delta } => {
                let ancestor = self.ancestor(token, delta)?;
                self.start_column(ancestor, token)
                    .map(|column| column + self.indent_width)
            }
            Decision::None | Decision::InjectNewline(_) | Decision::InjectWhitespace(_) => None,
        }
    }

    /// Walk `delta` ancestors up from the token's earliest ancestor (the
    /// outermost node from its parent up that starts with it, else the
    /// parent).
    fn ancestor(&self, token: TokenIdx, delta: u8) -> Option<NodeId> {
        let Some(parent) = self
            .tree
            .leaf_for(token)
            .and_then(|leaf| self.tree.parent(leaf))
        else {
            warn!(%token, "token has no parent rule to align against");
            return None;
        };
        let earliest = self
            .tree
            .earliest_ancestor_starting_with(parent, token)
            .unwrap_or(parent);
        let ancestor = self.tree.ancestor(earliest, usize::from(delta));
        if ancestor.is_none() {
            warn!(%token, delta, "alignment ancestor above the root");
        }
        ancestor
    }

    fn start_column(&self, node: NodeId, token: TokenIdx) -> Option<u32> {
        let Some(start) = self.tree.start_token(node) else {
            warn!(%token, ?node, "alignment target has no tokens");
            return None;
        };
        let position = self.tokens.get(start).and_then(|t| t.position);
        if position.is_none() {
            warn!(%token, target = %start, "alignment target not laid out yet");
        }
        position.map(|pos| pos.column)
    }
}
