//! Syntax tree arena.
//!
//! Nodes live in a flat `Vec` and refer to each other by `NodeId`. A node's
//! parent is a plain index, so ancestor walks are cheap lookups and the tree
//! can be shared read-only between any number of formatter runs.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::TokenIdx;

/// Index into a `SyntaxTree`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Grammar-defined rule kind.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct RuleKind(pub u16);

impl RuleKind {
    /// Feature-vector encoding of this kind.
    #[inline]
    pub fn feature(self) -> i32 {
        i32::from(self.0)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// Interior node produced by a grammar rule.
    Rule(RuleKind),
    /// Terminal wrapping one real token.
    Leaf(TokenIdx),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// First token covered; `None` for a rule that matched nothing.
    pub first_token: Option<TokenIdx>,
    pub last_token: Option<TokenIdx>,
}

/// Read-only syntax tree.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
    leaves: FxHashMap<TokenIdx, NodeId>,
}

impl SyntaxTree {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[inline]
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.node(id).children.get(index).copied()
    }

    /// Rule kind of an interior node, `None` for leaves.
    pub fn rule_kind(&self, id: NodeId) -> Option<RuleKind> {
        match self.node(id).kind {
            NodeKind::Rule(kind) => Some(kind),
            NodeKind::Leaf(_) => None,
        }
    }

    #[inline]
    pub fn start_token(&self, id: NodeId) -> Option<TokenIdx> {
        self.node(id).first_token
    }

    #[inline]
    pub fn stop_token(&self, id: NodeId) -> Option<TokenIdx> {
        self.node(id).last_token
    }

    /// Leaf node wrapping `token`.
    #[inline]
    pub fn leaf_for(&self, token: TokenIdx) -> Option<NodeId> {
        self.leaves.get(&token).copied()
    }

    /// Position of `id` among its parent's children.
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Walk `delta` parents up from `id`.
    pub fn ancestor(&self, id: NodeId, delta: usize) -> Option<NodeId> {
        let mut current = id;
        for _ in 0..delta {
            current = self.parent(current)?;
        }
        Some(current)
    }

    /// Outermost node on the chain `id, parent(id), ...` that starts with
    /// `token`, stopping at the first node that does not.
    ///
    /// Returns `None` when `id` itself does not start with `token`.
    pub fn earliest_ancestor_starting_with(&self, id: NodeId, token: TokenIdx) -> Option<NodeId> {
        let mut current = Some(id);
        let mut found = None;
        while let Some(node) = current {
            if self.start_token(node) != Some(token) {
                break;
            }
            found = Some(node);
            current = self.parent(node);
        }
        found
    }
}

/// Builds a `SyntaxTree` top-down while a parser walks the tokens.
pub struct TreeBuilder {
    nodes: Vec<Node>,
    stack: Vec<NodeId>,
    leaves: FxHashMap<TokenIdx, NodeId>,
}

impl TreeBuilder {
    /// Start a tree whose root is a `root` rule.
    pub fn new(root: RuleKind) -> Self {
        let mut builder = TreeBuilder {
            nodes: Vec::new(),
            stack: Vec::new(),
            leaves: FxHashMap::default(),
        };
        builder.start_rule(root);
        builder
    }

    fn push(&mut self, kind: NodeKind, token: Option<TokenIdx>) -> NodeId {
        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        let parent = self.stack.last().copied();
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
            first_token: token,
            last_token: token,
        });
        if let Some(parent) = parent {
            self.nodes[parent.index()].children.push(id);
        }
        id
    }

    /// Open a rule node under the current rule.
    pub fn start_rule(&mut self, kind: RuleKind) -> NodeId {
        let id = self.push(NodeKind::Rule(kind), None);
        self.stack.push(id);
        id
    }

    /// Attach a leaf for `token` to the current rule.
    pub fn leaf(&mut self, token: TokenIdx) -> NodeId {
        let id = self.push(NodeKind::Leaf(token), Some(token));
        self.leaves.insert(token, id);
        id
    }

    /// Close the current rule, computing its token range from its children.
    pub fn finish_rule(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id.index()];
        let first = node
            .children
            .iter()
            .find_map(|c| self.nodes[c.index()].first_token);
        let last = node
            .children
            .iter()
            .rev()
            .find_map(|c| self.nodes[c.index()].last_token);
        let node = &mut self.nodes[id.index()];
        node.first_token = first;
        node.last_token = last;
        Some(id)
    }

    /// Close every open rule and return the tree.
    pub fn finish(mut self) -> SyntaxTree {
        while self.finish_rule().is_some() {}
        SyntaxTree {
            nodes: self.nodes,
            root: NodeId::new(0),
            leaves: self.leaves,
        }
    }
}
