/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking at significant tokens (`peek`, `nth`) across trivia
/// - Consuming tokens into the tree (`bump_any`) with trivia attachment
/// - Matching / expecting keywords, operators, and punctuation
/// - Error recovery (`error_advance`, `recover_one_token`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily
/// to aid maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Lookahead
    // ========================================================================

    /// Index of the next significant (non-trivia, non-sentinel) token.
    fn peek_index(&self) -> usize {
        let mut i = self.cursor;
        while self.tokens[i].kind.is_trivia() || matches!(self.tokens[i].kind, TokenKind::Error) {
            i += 1;
        }
        i
    }

    /// Return the next significant token without consuming it.
    fn peek(&self) -> Token {
        self.tokens[self.peek_index()]
    }

    /// Return the `n`-th significant token after the current one.
    ///
    /// `nth(0)` is `peek()`. This is the only lookahead the grammar needs
    /// beyond one token, and only ever with `n == 1`.
    fn nth(&self, n: usize) -> Token {
        let mut i = self.peek_index();
        for _ in 0..n {
            if matches!(self.tokens[i].kind, TokenKind::Eof) {
                break;
            }
            i += 1;
            while self.tokens[i].kind.is_trivia() || matches!(self.tokens[i].kind, TokenKind::Error) {
                i += 1;
            }
        }
        self.tokens[i]
    }

    /// Return `true` if the next significant token is `Eof`.
    fn at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn at_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn at_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn at_operator(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn at_identifier(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Identifier)
    }

    /// Return `true` if the next significant token is an infix expression
    /// operator of the given precedence tier.
    fn at_tier(&self, tier: Tier) -> bool {
        self.peek()
            .kind
            .expression_operator_id()
            .and_then(operators::tier_of)
            == Some(tier)
    }

    // ========================================================================
    // Consuming
    // ========================================================================

    /// Attach trivia between the cursor and the next significant token to the
    /// node under construction. Error-sentinel characters become their own
    /// `Error` nodes, one diagnostic per character.
    fn flush_to_significant(&mut self) {
        loop {
            let tok = self.tokens[self.cursor];
            match tok.kind {
                TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment => {
                    self.builder.token(TokenId::new(self.cursor), tok.span);
                    self.cursor += 1;
                }
                TokenKind::Error => {
                    self.diagnostics.push(Diagnostic::error(
                        format!("Unexpected character {:?}", tok.text(self.source)),
                        tok.span,
                    ));
                    self.builder.start_node(NodeKind::Error);
                    self.builder.token(TokenId::new(self.cursor), tok.span);
                    self.builder.finish_node();
                    self.cursor += 1;
                }
                _ => break,
            }
        }
    }

    /// Consume the next significant token into the node under construction.
    ///
    /// Does nothing at end of input; the `Eof` token is never attached.
    fn bump_any(&mut self) {
        self.flush_to_significant();
        let tok = self.tokens[self.cursor];
        if matches!(tok.kind, TokenKind::Eof) {
            return;
        }
        if let TokenKind::Str { terminated: false } = tok.kind {
            self.diagnostics
                .push(Diagnostic::error("Unterminated string literal", tok.span));
        }
        self.builder.token(TokenId::new(self.cursor), tok.span);
        self.cursor += 1;
    }

    // ========================================================================
    // Node construction
    // ========================================================================

    /// Open a node. Pending trivia is flushed to the enclosing node first so
    /// that leading whitespace belongs to the parent, not the new child.
    fn start(&mut self, kind: NodeKind) {
        if self.builder.has_open_node() {
            self.flush_to_significant();
        }
        self.builder.start_node(kind);
    }

    /// Close the innermost open node.
    fn finish(&mut self) {
        self.builder.finish_node();
    }

    // ========================================================================
    // Expecting and recovery
    // ========================================================================

    /// Record an expected-token diagnostic at the current position without
    /// consuming input.
    fn error_expected(&mut self, expected: &str) {
        let tok = self.peek();
        self.diagnostics.push(Diagnostic::error(
            format!("Expected {}, found {:?}", expected, tok.kind),
            tok.span,
        ));
    }

    /// Wrap exactly one token in an `Error` node so recovery always advances.
    /// At end of input this is a no-op.
    fn recover_one_token(&mut self) {
        if self.at_end() {
            return;
        }
        self.start(NodeKind::Error);
        self.bump_any();
        self.finish();
    }

    /// Record a diagnostic, consume one token as an error, and continue.
    fn error_advance(&mut self, expected: &str) {
        self.error_expected(expected);
        self.recover_one_token();
    }

    /// Check the nesting limit; on overflow, record a diagnostic and consume
    /// one token so enclosing loops still make progress.
    fn nesting_limit_reached(&mut self) -> bool {
        if self.depth < MAX_NESTING_DEPTH {
            return false;
        }
        let span = self.peek().span;
        self.diagnostics.push(Diagnostic::error("Nesting too deep", span));
        self.recover_one_token();
        true
    }

    fn expect_keyword(&mut self, id: KeywordId, label: &str) -> bool {
        if self.at_keyword(id) {
            self.bump_any();
            true
        } else {
            self.error_expected(label);
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, label: &str) -> bool {
        if self.at_punct(id) {
            self.bump_any();
            true
        } else {
            self.error_expected(label);
            false
        }
    }

    fn expect_operator(&mut self, id: OperatorId, label: &str) -> bool {
        if self.at_operator(id) {
            self.bump_any();
            true
        } else {
            self.error_expected(label);
            false
        }
    }
}
