/// Parse source text into a syntax tree plus diagnostics.
///
/// This is the main public entrypoint for parsing. It tokenizes internally;
/// use [`Parser::new`] with [`crate::lexer::tokenize`] to drive the phases
/// separately.
///
/// Total: every input — empty, truncated, or garbage — produces a tree rooted
/// at a `File` node.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Parse {
    let tokens = lexer::tokenize(source);
    Parser::new(source, tokens).parse()
}
