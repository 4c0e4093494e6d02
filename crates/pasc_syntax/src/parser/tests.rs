#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms and on the
/// parser's error recovery behavior (totality, bounded recovery, exact
/// round-tripping of the source text).
mod tests {
    use super::*;
    use crate::tree::NodeId;

    fn find_nodes(tree: &SyntaxTree, kind: NodeKind) -> Vec<NodeId> {
        tree.nodes().filter(|&n| tree.kind(n) == kind).collect()
    }

    fn find_node(tree: &SyntaxTree, kind: NodeKind) -> NodeId {
        *find_nodes(tree, kind)
            .first()
            .unwrap_or_else(|| panic!("no {:?} node in tree", kind))
    }

    fn reconstruct(tree: &SyntaxTree) -> String {
        tree.leaf_tokens()
            .into_iter()
            .map(|t| tree.token_text(t))
            .collect()
    }

    #[test]
    fn test_minimal_program_parses_clean() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        assert_eq!(parse.tree.kind(parse.tree.root()), NodeKind::File);
    }

    #[test]
    fn test_tree_shape_of_minimal_program() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
        insta::assert_snapshot!(parse.tree.dump(), @r#"
File
  ProgramHeader
    "PROGRAM"
    Identifier
      "P"
  ";"
  Block
    StatementPart
      CompoundStatement
        "BEGIN"
        Statement
          SimpleStatement
            Assignment
              Identifier
                "x"
              ":="
              Expression
                SimpleExpression
                  Term
                    Factor
                      UnsignedConstant
                        "1"
        "END"
  "."
"#);
    }

    #[test]
    fn test_empty_input_still_produces_file() {
        let parse = parse("");
        assert_eq!(parse.tree.kind(parse.tree.root()), NodeKind::File);
        assert!(!parse.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_dot_is_a_single_diagnostic() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x := 1\nEND");
        assert_eq!(parse.diagnostics.len(), 1, "{:?}", parse.diagnostics);
        assert!(parse.diagnostics[0].message.contains("'.'"));
        // The block subtree is still fully formed.
        let block = find_node(&parse.tree, NodeKind::Block);
        assert!(parse.tree.child_of_kind(block, NodeKind::StatementPart).is_some());
        assert!(!find_nodes(&parse.tree, NodeKind::CompoundStatement).is_empty());
    }

    #[test]
    fn test_addition_chain_groups_to_the_right() {
        let parse = parse("PROGRAM P;\nBEGIN\n  a := b + c + d\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);

        // One SimpleExpression per chain link: `b + (c + (d))`.
        let simple_expressions = find_nodes(&parse.tree, NodeKind::SimpleExpression);
        assert_eq!(simple_expressions.len(), 3);

        // The outer SimpleExpression is Term, TermOperator, SimpleExpression;
        // the right operand contains the rest of the chain.
        let outer = simple_expressions[0];
        let kinds: Vec<NodeKind> = parse
            .tree
            .child_nodes(outer)
            .map(|n| parse.tree.kind(n))
            .collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Term, NodeKind::TermOperator, NodeKind::SimpleExpression]
        );

        let inner = simple_expressions[1];
        assert_eq!(parse.tree.node_text(inner), "c + d");
        assert_eq!(parse.tree.parent(inner), Some(outer));
    }

    #[test]
    fn test_statement_label_needs_two_token_lookahead() {
        let parse = parse("PROGRAM P;\nBEGIN\n  stop: x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);

        let statement = find_node(&parse.tree, NodeKind::Statement);
        let label = parse
            .tree
            .child_of_kind(statement, NodeKind::Label)
            .expect("labeled statement");
        assert_eq!(parse.tree.node_text(label), "stop");
        assert!(!find_nodes(&parse.tree, NodeKind::Assignment).is_empty());
    }

    #[test]
    fn test_assignment_vs_procedure_call() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x := 1;\n  f(x);\n  g\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);

        assert_eq!(find_nodes(&parse.tree, NodeKind::Assignment).len(), 1);
        let calls = find_nodes(&parse.tree, NodeKind::ProcedureStatement);
        assert_eq!(calls.len(), 2);
        assert!(parse.tree.child_of_kind(calls[0], NodeKind::ParameterList).is_some());
        assert!(parse.tree.child_of_kind(calls[1], NodeKind::ParameterList).is_none());
    }

    #[test]
    fn test_compound_assignment_operators() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x += 1;\n  x -= 2;\n  x *= 3;\n  x /= 4\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        assert_eq!(find_nodes(&parse.tree, NodeKind::Assignment).len(), 4);
    }

    #[test]
    fn test_uses_clause_with_in_path() {
        let parse = parse("PROGRAM P;\nUSES Crt, Printer IN 'printer.pas';\nBEGIN\n  x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let uses = find_node(&parse.tree, NodeKind::UsesClause);
        assert_eq!(
            parse.tree.child_nodes(uses).filter(|&n| parse.tree.kind(n) == NodeKind::Clause).count(),
            2
        );
    }

    #[test]
    fn test_program_parameters() {
        let parse = parse("PROGRAM P(Input, Output);\nBEGIN\n  x := 1\nEND.\n");
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);
        let params = find_node(&parse.tree, NodeKind::ProgramParameters);
        assert_eq!(
            parse.tree.child_nodes(params).filter(|&n| parse.tree.kind(n) == NodeKind::Identifier).count(),
            2
        );
    }

    #[test]
    fn test_stray_declaration_token_is_wrapped_and_recovered() {
        let parse = parse("PROGRAM P;\nFOO\nBEGIN\n  x := 1\nEND.\n");
        assert_eq!(parse.diagnostics.len(), 1, "{:?}", parse.diagnostics);
        assert!(parse.diagnostics[0].message.contains("'LABEL'"));

        let decls = find_node(&parse.tree, NodeKind::DeclarationPart);
        let error = parse
            .tree
            .child_of_kind(decls, NodeKind::Error)
            .expect("stray token wrapped in error node");
        assert_eq!(parse.tree.node_text(error), "FOO");
    }

    #[test]
    fn test_unterminated_string_is_flagged_once() {
        let parse = parse("PROGRAM P;\nBEGIN\n  x := 'oops\nEND.\n");
        assert_eq!(parse.diagnostics.len(), 1, "{:?}", parse.diagnostics);
        assert!(parse.diagnostics[0].message.contains("Unterminated"));
    }

    #[test]
    fn test_bad_characters_get_one_diagnostic_each() {
        let parse = parse("PROGRAM P@@;\nBEGIN\n  x := 1\nEND.\n");
        assert_eq!(parse.diagnostics.len(), 2, "{:?}", parse.diagnostics);
        for d in &parse.diagnostics {
            assert!(d.message.contains("Unexpected character"));
        }
    }

    #[test]
    fn test_garbage_after_terminating_dot() {
        let source = "PROGRAM P;\nBEGIN\n  x := 1\nEND. trailing junk";
        let parse = parse(source);
        assert_eq!(parse.diagnostics.len(), 1, "{:?}", parse.diagnostics);
        assert!(parse.diagnostics[0].message.contains("end of file"));
        assert_eq!(reconstruct(&parse.tree), source);
    }

    #[test]
    fn test_round_trip_is_exact() {
        let sources = [
            "PROGRAM P;\nBEGIN\n  x := 1\nEND.\n",
            "PROGRAM P; { comment } BEGIN x := $FF END.",
            "PROGRAM ?!;\nBEGIN x := 'broken\nEND",
            "",
            "BEGIN END",
        ];
        for source in sources {
            let parse = parse(source);
            assert_eq!(reconstruct(&parse.tree), source, "round-trip of {:?}", source);
        }
    }

    #[test]
    fn test_missing_begin_terminates_on_end_of_input() {
        // The declaration loop treats end of input as an implicit BEGIN.
        let parse = parse("PROGRAM P;\nVAR x: INTEGER;");
        assert_eq!(parse.tree.kind(parse.tree.root()), NodeKind::File);
        assert!(!parse.diagnostics.is_empty());
        assert!(!find_nodes(&parse.tree, NodeKind::VariableDeclaration).is_empty());
    }

    #[test]
    fn test_nested_function_declarations() {
        let source = "PROGRAM P;\nFUNCTION f;\nVAR y: INTEGER;\nBEGIN\n  y := 1\nEND;\nBEGIN\n  f()\nEND.\n";
        let parse = parse(source);
        assert!(parse.diagnostics.is_empty(), "{:?}", parse.diagnostics);

        let func = find_node(&parse.tree, NodeKind::FunctionDeclaration);
        let body = parse.tree.child_of_kind(func, NodeKind::Block).expect("function body");
        assert!(parse.tree.child_of_kind(body, NodeKind::DeclarationPart).is_some());
    }

    #[test]
    fn test_deeply_nested_parens_hit_the_depth_limit_without_crashing() {
        let mut source = String::from("PROGRAM P;\nBEGIN\n  x := ");
        for _ in 0..2000 {
            source.push('(');
        }
        source.push('1');
        for _ in 0..2000 {
            source.push(')');
        }
        source.push_str("\nEND.\n");

        let parse = parse(&source);
        assert!(parse.diagnostics.iter().any(|d| d.message.contains("Nesting")));
        assert_eq!(parse.tree.kind(parse.tree.root()), NodeKind::File);
    }
}
