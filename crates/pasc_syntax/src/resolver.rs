//! Reference resolver: bind an identifier use to the declaration that
//! introduces it.
//!
//! Resolution is a lazy, per-identifier query over the immutable tree — it is
//! never precomputed as a whole-tree pass, and the result is never stored on
//! the node.
//!
//! ## Scope rule
//!
//! From the use site, parent links are walked outward to the *innermost*
//! enclosing `Block`; only that block's `DeclarationPart` is searched, in
//! source order. The whole declaration part is visible to every statement in
//! the block (declare-before-use holds at the block level, not per
//! statement), and the first textual match wins. A block that is the body of
//! a `FUNCTION`/`PROCEDURE` additionally sees the declaration's own name, so
//! a function body can reference itself.
//!
//! An unresolved identifier is a normal outcome (`None`), not an error:
//! deciding whether an unresolved name is worth flagging belongs to a higher
//! layer.

use crate::tree::{NodeId, NodeKind, SyntaxTree};

/// The (lazily computed) result of resolving one identifier use.
///
/// This is a derived lookup result, not part of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub use_site: NodeId,
    pub declaration: Option<NodeId>,
}

/// Resolve an identifier use to the `Identifier` node that declares it.
///
/// ## Parameters
/// - `use_site`: An `Identifier` node; any other kind resolves to `None`.
///
/// ## Returns
/// - `Some(declaration)` with the declaring `Identifier` node, or `None` when
///   no declaration in scope matches.
pub fn resolve(tree: &SyntaxTree, use_site: NodeId) -> Option<NodeId> {
    let name = tree.identifier_text(use_site)?;

    let block = tree
        .ancestors(use_site)
        .find(|&n| tree.kind(n) == NodeKind::Block)?;

    if let Some(declarations) = tree.child_of_kind(block, NodeKind::DeclarationPart) {
        if let Some(found) = search_declaration_part(tree, declarations, name) {
            return Some(found);
        }
    }

    // The body of a FUNCTION/PROCEDURE sees the declaration's own name.
    if let Some(parent) = tree.parent(block) {
        if matches!(
            tree.kind(parent),
            NodeKind::FunctionDeclaration | NodeKind::ProcedureDeclaration
        ) {
            let own_name = tree.child_of_kind(parent, NodeKind::Identifier)?;
            if tree.identifier_text(own_name) == Some(name) {
                return Some(own_name);
            }
        }
    }

    None
}

/// Resolve and package the result as a [`Binding`].
pub fn binding(tree: &SyntaxTree, use_site: NodeId) -> Binding {
    Binding {
        use_site,
        declaration: resolve(tree, use_site),
    }
}

/// Scan a `DeclarationPart`'s direct children in source order for `name`.
fn search_declaration_part(tree: &SyntaxTree, declarations: NodeId, name: &str) -> Option<NodeId> {
    for entry in tree.child_nodes(declarations) {
        match tree.kind(entry) {
            NodeKind::VariableDeclarationPart => {
                for decl in tree.child_nodes(entry) {
                    if tree.kind(decl) != NodeKind::VariableDeclaration {
                        continue;
                    }
                    if let Some(found) = declared_name(tree, decl, name) {
                        return Some(found);
                    }
                }
            }
            NodeKind::FunctionDeclaration | NodeKind::ProcedureDeclaration => {
                if let Some(found) = declared_name(tree, entry, name) {
                    return Some(found);
                }
            }
            // Label declarations do not introduce value names.
            _ => {}
        }
    }
    None
}

/// The declaring `Identifier` child of `node`, if its text equals `name`.
fn declared_name(tree: &SyntaxTree, node: NodeId, name: &str) -> Option<NodeId> {
    let ident = tree.child_of_kind(node, NodeKind::Identifier)?;
    if tree.identifier_text(ident) == Some(name) {
        Some(ident)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    /// All Identifier nodes whose wrapped token spells `name`, in source order.
    fn identifiers_named(tree: &SyntaxTree, name: &str) -> Vec<NodeId> {
        let mut found: Vec<NodeId> = tree
            .nodes()
            .filter(|&n| tree.identifier_text(n) == Some(name))
            .collect();
        found.sort_by_key(|&n| tree.span(n).start);
        found
    }

    #[test]
    fn test_variable_use_resolves_to_var_declaration() {
        let parse = parser::parse("PROGRAM P;\nVAR x: INTEGER;\nBEGIN\n  x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let xs = identifiers_named(tree, "x");
        assert_eq!(xs.len(), 2);
        let (decl, use_site) = (xs[0], xs[1]);

        assert_eq!(resolve(tree, use_site), Some(decl));
        // The declaration site trivially resolves to itself.
        assert_eq!(resolve(tree, decl), Some(decl));
    }

    #[test]
    fn test_undeclared_variable_is_unresolved() {
        let parse = parser::parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
        let tree = &parse.tree;

        let xs = identifiers_named(tree, "x");
        assert_eq!(xs.len(), 1);
        assert_eq!(resolve(tree, xs[0]), None);
        assert_eq!(
            binding(tree, xs[0]),
            Binding {
                use_site: xs[0],
                declaration: None
            }
        );
    }

    #[test]
    fn test_call_resolves_to_function_declaration() {
        let parse = parser::parse("PROGRAM P;\nFUNCTION f;\nBEGIN\n  x := 1\nEND;\nBEGIN\n  f()\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let fs = identifiers_named(tree, "f");
        assert_eq!(fs.len(), 2);
        let (decl, use_site) = (fs[0], fs[1]);

        assert_eq!(resolve(tree, use_site), Some(decl));
    }

    #[test]
    fn test_function_body_sees_its_own_name() {
        let parse = parser::parse("PROGRAM P;\nFUNCTION f;\nBEGIN\n  f := 1\nEND;\nBEGIN\n  f()\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let fs = identifiers_named(tree, "f");
        assert_eq!(fs.len(), 3);
        let (decl, body_use) = (fs[0], fs[1]);

        assert_eq!(resolve(tree, body_use), Some(decl));
    }

    #[test]
    fn test_innermost_block_wins() {
        let source = "PROGRAM P;\n\
                      VAR x: INTEGER;\n\
                      FUNCTION f;\n\
                      VAR x: INTEGER;\n\
                      BEGIN\n\
                      \u{20} x := 1\n\
                      END;\n\
                      BEGIN\n\
                      \u{20} x := 2\n\
                      END.\n";
        let parse = parser::parse(source);
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let xs = identifiers_named(tree, "x");
        assert_eq!(xs.len(), 4);
        let (outer_decl, inner_decl, inner_use, outer_use) = (xs[0], xs[1], xs[2], xs[3]);

        assert_eq!(resolve(tree, inner_use), Some(inner_decl));
        assert_eq!(resolve(tree, outer_use), Some(outer_decl));
    }

    #[test]
    fn test_function_locals_are_invisible_outside() {
        let parse =
            parser::parse("PROGRAM P;\nFUNCTION f;\nVAR y: INTEGER;\nBEGIN\n  y := 1\nEND;\nBEGIN\n  y := 2\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let ys = identifiers_named(tree, "y");
        assert_eq!(ys.len(), 3);
        let (decl, inner_use, outer_use) = (ys[0], ys[1], ys[2]);

        assert_eq!(resolve(tree, inner_use), Some(decl));
        // The use in the main block has no declaration in its own scope.
        assert_eq!(resolve(tree, outer_use), None);
    }

    #[test]
    fn test_first_match_wins_in_source_order() {
        // Two declarations of the same name in one declaration part: the
        // first one in source order is the binding.
        let parse = parser::parse("PROGRAM P;\nVAR x: INTEGER;\nVAR x: REAL;\nBEGIN\n  x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let tree = &parse.tree;

        let xs = identifiers_named(tree, "x");
        assert_eq!(xs.len(), 3);
        assert_eq!(resolve(tree, xs[2]), Some(xs[0]));
    }

    #[test]
    fn test_header_identifiers_have_no_enclosing_block() {
        let parse = parser::parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
        let tree = &parse.tree;

        let ps = identifiers_named(tree, "P");
        assert_eq!(ps.len(), 1);
        assert_eq!(resolve(tree, ps[0]), None);
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        let parse = parser::parse("PROGRAM P;\nVAR x: INTEGER;\nBEGIN\n  X := 1\nEND.\n");
        let tree = &parse.tree;

        let upper = identifiers_named(tree, "X");
        assert_eq!(upper.len(), 1);
        assert_eq!(resolve(tree, upper[0]), None);
    }

    #[test]
    fn test_non_identifier_node_does_not_resolve() {
        let parse = parser::parse("PROGRAM P;\nVAR x: INTEGER;\nBEGIN\n  x := 1\nEND.\n");
        let tree = &parse.tree;
        assert_eq!(resolve(tree, tree.root()), None);
    }
}
