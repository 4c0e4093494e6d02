/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the [`Parse`] result, and the
/// top-level `File` production.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Recursion limit for nested statements, blocks and factors.
///
/// Hostile inputs (thousands of nested parens or `BEGIN`s) would otherwise
/// exhaust the stack; totality includes not crashing on them.
const MAX_NESTING_DEPTH: u32 = 512;

/// Result of a parse: the syntax tree plus diagnostics in source order.
///
/// A tree is always produced, no matter how malformed the input; the
/// diagnostics describe what had to be recovered.
#[derive(Debug, Clone)]
pub struct Parse {
    pub tree: SyntaxTree,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors locally: `expect`
///   records a diagnostic without consuming, while the explicitly-advancing
///   recovery paths wrap exactly one token in an `Error` node.
/// - Trivia and error-sentinel tokens are transparent to lookahead; they are
///   attached to the tree when the next significant token is consumed.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
    depth: u32,
    builder: TreeBuilder,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `source`: The text `tokens` was produced from.
    /// - `tokens`: Token stream produced by `crate::lexer`; must end with `Eof`.
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        debug_assert!(
            matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)),
            "token stream must end with Eof"
        );
        Self {
            source,
            tokens,
            cursor: 0,
            depth: 0,
            builder: TreeBuilder::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`Parse`].
    ///
    /// Total: always returns a tree rooted at a `File` node, with diagnostics
    /// sorted by source position.
    pub fn parse(mut self) -> Parse {
        self.parse_file();
        debug_assert!(
            matches!(self.tokens[self.cursor].kind, TokenKind::Eof),
            "parser must consume every token"
        );

        let Parser {
            source,
            tokens,
            builder,
            mut diagnostics,
            ..
        } = self;
        diagnostics.sort_by_key(|d| (d.span.start, d.span.end));
        Parse {
            tree: builder.finish(source.to_string(), tokens),
            diagnostics,
        }
    }

    fn parse_file(&mut self) {
        self.start(NodeKind::File);

        self.parse_program_header();
        self.expect_punct(PunctuationId::Semicolon, "';'");

        if self.at_keyword(KeywordId::Uses) {
            self.parse_uses_clause();
        }

        self.parse_block();
        self.expect_punct(PunctuationId::Dot, "'.'");

        // Anything after the terminating '.' is foreign, but it stays in the
        // tree so the file node covers the whole input.
        if !self.at_end() {
            self.error_expected("end of file after '.'");
            self.start(NodeKind::Error);
            while !self.at_end() {
                self.bump_any();
            }
            self.finish();
        }

        self.flush_to_significant();
        self.finish();
    }
}
