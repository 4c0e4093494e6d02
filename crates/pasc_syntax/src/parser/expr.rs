/// Expression parsing methods.
///
/// The expression grammar is a three-tier chain: `Expression` (relational),
/// `SimpleExpression` (additive), `Term` (multiplicative), with `Factor` at
/// the bottom.
///
/// ## Notes
/// - `SimpleExpression` and `Term` recurse on their own tier, so a chain like
///   `a + b + c` groups as `a + (b + c)`. This right-associative grouping is
///   the documented contract of the grammar, not an accident; do not "fix" it
///   to left-associative.
/// - The relational tier does not chain at all: `a = b = c` parses `a = b`
///   and leaves the rest to the caller's recovery.
impl<'a> Parser<'a> {
    fn parse_expression(&mut self) {
        self.start(NodeKind::Expression);

        self.parse_simple_expression();
        if self.at_tier(Tier::Relational) {
            self.parse_simple_expression_operator();
            self.parse_simple_expression();
        }

        self.finish();
    }

    fn parse_simple_expression_operator(&mut self) {
        self.start(NodeKind::SimpleExpressionOperator);
        self.bump_any();
        self.finish();
    }

    fn parse_simple_expression(&mut self) {
        self.start(NodeKind::SimpleExpression);

        if self.nesting_limit_reached() {
            self.finish();
            return;
        }
        self.depth += 1;
        self.parse_term();
        if self.at_tier(Tier::Additive) {
            self.parse_term_operator();
            self.parse_simple_expression();
        }
        self.depth -= 1;

        self.finish();
    }

    fn parse_term_operator(&mut self) {
        self.start(NodeKind::TermOperator);
        self.bump_any();
        self.finish();
    }

    fn parse_term(&mut self) {
        self.start(NodeKind::Term);

        self.parse_factor();
        if self.at_tier(Tier::Multiplicative) {
            self.parse_factor_operator();
            self.parse_term();
        }

        self.finish();
    }

    fn parse_factor_operator(&mut self) {
        self.start(NodeKind::FactorOperator);
        self.bump_any();
        self.finish();
    }

    fn parse_factor(&mut self) {
        self.start(NodeKind::Factor);

        if self.nesting_limit_reached() {
            self.finish();
            return;
        }
        self.depth += 1;
        match self.peek().kind {
            TokenKind::Identifier => {
                self.parse_identifier();
                if self.at_punct(PunctuationId::LParen) {
                    self.parse_parameter_list();
                }
            }
            TokenKind::Keyword(KeywordId::Not) => {
                self.bump_any();
                self.parse_factor();
            }
            TokenKind::Operator(OperatorId::Plus) | TokenKind::Operator(OperatorId::Minus) => {
                // Sign prefix.
                self.bump_any();
                self.parse_factor();
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.bump_any();
                self.parse_expression();
                self.expect_punct(PunctuationId::RParen, "')'");
            }
            _ => self.parse_unsigned_constant(),
        }
        self.depth -= 1;

        self.finish();
    }

    fn parse_unsigned_constant(&mut self) {
        self.start(NodeKind::UnsignedConstant);
        match self.peek().kind {
            TokenKind::UnsignedInteger | TokenKind::Str { .. } => self.bump_any(),
            _ => self.error_advance("an unsigned constant"),
        }
        self.finish();
    }

    fn parse_parameter_list(&mut self) {
        self.start(NodeKind::ParameterList);

        self.bump_any(); // '('
        while !self.at_punct(PunctuationId::RParen) && !self.at_end() {
            self.parse_expression();
            if self.at_punct(PunctuationId::Comma) {
                self.bump_any();
            }
        }
        self.expect_punct(PunctuationId::RParen, "')'");

        self.finish();
    }
}
