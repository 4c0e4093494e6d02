//! Syntax tree for the Pascal subset.
//!
//! The tree is a homogeneous, arena-backed structure: every node carries a
//! [`NodeKind`], a parent id, an ordered child list, and a source range. Leaf
//! children are token indices into the token list captured at parse time.
//!
//! ## Notes
//! - Nodes live in an append-only arena and are addressed by [`NodeId`];
//!   parent links are plain ids, so the tree stays cycle-free and can be
//!   shared freely across threads once built.
//! - A tree is immutable after construction. Re-parsing produces a new tree;
//!   there is no incremental patching.
//! - Trivia (whitespace, newlines, comments) is kept in the tree as leaf
//!   tokens, so concatenating all leaf texts in order reproduces the source
//!   text exactly, for well-formed and malformed inputs alike.

use crate::lexer::{Token, TokenKind};

/// Source location span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return `true` if `offset` falls inside this span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Kind of syntax node.
///
/// This is a closed set: one variant per grammar production plus the leaf
/// wrappers (`Identifier`, `Label`, ...) and the `Error` wrapper produced
/// during recovery. Consumers dispatch with exhaustive `match`es so an
/// unhandled kind is a compile-time gap, not a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    ProgramHeader,
    ProgramParameters,
    UsesClause,
    Clause,
    Identifier,
    Block,
    DeclarationPart,
    LabelDeclarationPart,
    VariableDeclarationPart,
    VariableDeclaration,
    StatementPart,
    CompoundStatement,
    Statement,
    SimpleStatement,
    Assignment,
    ProcedureStatement,
    ForStatement,
    WhileStatement,
    RepeatStatement,
    ConditionStatement,
    FunctionDeclaration,
    ProcedureDeclaration,
    Label,
    ParameterList,
    Expression,
    SimpleExpression,
    SimpleExpressionOperator,
    Term,
    TermOperator,
    Factor,
    FactorOperator,
    UnsignedConstant,
    /// Wrapper for tokens consumed during error recovery.
    Error,
}

/// Stable id of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable id of a token in the tree's token list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A child of a node: either a nested node or a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Node(NodeId),
    Token(TokenId),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<Element>,
    span: Span,
}

/// An immutable syntax tree plus the source text and tokens it was built from.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    tokens: Vec<Token>,
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl SyntaxTree {
    /// The root `File` node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The full source text this tree was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Kind of `node`.
    pub fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes[node.index()].kind
    }

    /// Source range of `node`.
    pub fn span(&self, node: NodeId) -> Span {
        self.nodes[node.index()].span
    }

    /// Parent of `node` (`None` for the root).
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Ordered children of `node`.
    pub fn children(&self, node: NodeId) -> &[Element] {
        &self.nodes[node.index()].children
    }

    /// Ordered node (non-leaf) children of `node`.
    pub fn child_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node).iter().filter_map(|el| match el {
            Element::Node(id) => Some(*id),
            Element::Token(_) => None,
        })
    }

    /// First direct child of `node` with the given kind.
    pub fn child_of_kind(&self, node: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.child_nodes(node).find(|&child| self.kind(child) == kind)
    }

    /// Ancestors of `node`, innermost first (the node itself is not included).
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), |&n| self.parent(n))
    }

    /// All nodes in the tree, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// The token behind a leaf id.
    pub fn token(&self, id: TokenId) -> &Token {
        &self.tokens[id.index()]
    }

    /// Source text of a leaf token.
    pub fn token_text(&self, id: TokenId) -> &str {
        self.token(id).text(&self.source)
    }

    /// Source text covered by `node`.
    pub fn node_text(&self, node: NodeId) -> &str {
        let span = self.span(node);
        &self.source[span.start..span.end]
    }

    /// The `IDENTIFIER` token wrapped by an `Identifier` node, if present.
    pub fn identifier_token(&self, node: NodeId) -> Option<TokenId> {
        if self.kind(node) != NodeKind::Identifier {
            return None;
        }
        self.children(node).iter().find_map(|el| match el {
            Element::Token(id) if matches!(self.token(*id).kind, TokenKind::Identifier) => Some(*id),
            _ => None,
        })
    }

    /// Text of the `IDENTIFIER` token wrapped by an `Identifier` node.
    pub fn identifier_text(&self, node: NodeId) -> Option<&str> {
        self.identifier_token(node).map(|id| self.token_text(id))
    }

    /// All leaf tokens of the tree in source order.
    pub fn leaf_tokens(&self) -> Vec<TokenId> {
        let mut out = Vec::new();
        self.collect_leaves(self.root, &mut out);
        out
    }

    fn collect_leaves(&self, node: NodeId, out: &mut Vec<TokenId>) {
        for el in self.children(node) {
            match el {
                Element::Token(id) => out.push(*id),
                Element::Node(id) => self.collect_leaves(*id, out),
            }
        }
    }

    /// Render the tree structure for debugging and snapshot tests.
    ///
    /// Trivia leaves are omitted; tokens print as their quoted source text.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, node: NodeId, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&format!("{:?}\n", self.kind(node)));
        for el in self.children(node) {
            match el {
                Element::Node(id) => self.dump_node(*id, depth + 1, out),
                Element::Token(id) => {
                    if self.token(*id).kind.is_trivia() {
                        continue;
                    }
                    for _ in 0..=depth {
                        out.push_str("  ");
                    }
                    out.push_str(&format!("{:?}\n", self.token_text(*id)));
                }
            }
        }
    }
}

// ============================================================================
// TREE BUILDER
// ============================================================================

/// Bottom-up tree construction used by the parser.
///
/// The builder keeps a stack of open nodes; tokens and finished nodes attach
/// to the innermost open node. Node spans accumulate from their children; a
/// node finished without children gets the empty span at the current
/// consumed-input offset so sibling ranges stay ordered.
pub(crate) struct TreeBuilder {
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
    root: Option<NodeId>,
    last_offset: usize,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            stack: Vec::new(),
            root: None,
            last_offset: 0,
        }
    }

    pub(crate) fn has_open_node(&self) -> bool {
        !self.stack.is_empty()
    }

    pub(crate) fn start_node(&mut self, kind: NodeKind) {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            span: Span::default(),
        });
        self.stack.push(id);
    }

    pub(crate) fn token(&mut self, id: TokenId, span: Span) {
        let top = *self.stack.last().expect("token attached with no open node");
        self.extend(top, span);
        self.nodes[top.index()].children.push(Element::Token(id));
        self.last_offset = span.end;
    }

    pub(crate) fn finish_node(&mut self) {
        let id = self.stack.pop().expect("finish_node with no open node");
        if self.nodes[id.index()].children.is_empty() {
            self.nodes[id.index()].span = Span::new(self.last_offset, self.last_offset);
        }
        match self.stack.last().copied() {
            Some(parent) => {
                let span = self.nodes[id.index()].span;
                self.extend(parent, span);
                self.nodes[parent.index()].children.push(Element::Node(id));
                self.nodes[id.index()].parent = Some(parent);
            }
            None => self.root = Some(id),
        }
    }

    fn extend(&mut self, node: NodeId, span: Span) {
        let data = &mut self.nodes[node.index()];
        if data.children.is_empty() {
            data.span = span;
        } else {
            data.span.end = span.end;
        }
    }

    pub(crate) fn finish(self, source: String, tokens: Vec<Token>) -> SyntaxTree {
        debug_assert!(self.stack.is_empty(), "unbalanced start_node/finish_node");
        SyntaxTree {
            source,
            tokens,
            nodes: self.nodes,
            root: self.root.expect("tree built without a root node"),
        }
    }
}
