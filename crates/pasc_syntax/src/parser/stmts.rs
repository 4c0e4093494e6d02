/// Statement parsing methods.
///
/// This chunk parses the statement part of a block: compound statements,
/// structured statements (`IF`, `FOR`, `WHILE`, `REPEAT`), and the simple
/// statements (assignment, procedure call), including optional label
/// prefixes.
impl<'a> Parser<'a> {
    fn parse_statement_part(&mut self) {
        self.start(NodeKind::StatementPart);
        self.parse_compound_statement();
        self.finish();
    }

    fn parse_compound_statement(&mut self) {
        self.start(NodeKind::CompoundStatement);

        self.expect_keyword(KeywordId::Begin, "'BEGIN'");
        self.parse_statement();
        while self.at_punct(PunctuationId::Semicolon) {
            self.bump_any();
            self.parse_statement();
        }
        self.expect_keyword(KeywordId::End, "'END'");

        self.finish();
    }

    fn parse_statement(&mut self) {
        self.start(NodeKind::Statement);

        if self.nesting_limit_reached() {
            self.finish();
            return;
        }
        self.depth += 1;

        // Label detection is the one place the grammar needs a second token
        // of lookahead: `lbl : ...` vs. `lbl := ...`.
        if self.nth(1).kind.is_punctuation(PunctuationId::Colon) {
            self.parse_label();
            self.expect_punct(PunctuationId::Colon, "':'");
        }

        if !self.try_parse_structured_statement() {
            self.parse_simple_statement();
        }

        self.depth -= 1;
        self.finish();
    }

    /// A statement label: an identifier or an unsigned integer.
    fn parse_label(&mut self) {
        self.start(NodeKind::Label);
        match self.peek().kind {
            TokenKind::Identifier | TokenKind::UnsignedInteger => self.bump_any(),
            _ => self.error_expected("an identifier or unsigned integer"),
        }
        self.finish();
    }

    fn try_parse_structured_statement(&mut self) -> bool {
        match self.peek().kind {
            TokenKind::Keyword(KeywordId::Begin) => self.parse_compound_statement(),
            TokenKind::Keyword(KeywordId::If) => self.parse_condition_statement(),
            TokenKind::Keyword(KeywordId::For) => self.parse_for_statement(),
            TokenKind::Keyword(KeywordId::While) => self.parse_while_statement(),
            TokenKind::Keyword(KeywordId::Repeat) => self.parse_repeat_statement(),
            _ => return false,
        }
        true
    }

    fn parse_simple_statement(&mut self) {
        self.start(NodeKind::SimpleStatement);

        // Second lookahead point: an assignment operator after the name means
        // assignment, anything else is a procedure call.
        if self.nth(1).kind.operator_id().is_some_and(operators::is_assignment) {
            self.parse_assignment();
        } else {
            self.parse_procedure_statement();
        }

        self.finish();
    }

    fn parse_assignment(&mut self) {
        self.start(NodeKind::Assignment);

        self.parse_identifier();
        match self.peek().kind.operator_id() {
            Some(id) if operators::is_assignment(id) => self.bump_any(),
            _ => self.error_expected("an assignment operator"),
        }
        self.parse_expression();

        self.finish();
    }

    fn parse_procedure_statement(&mut self) {
        self.start(NodeKind::ProcedureStatement);

        self.parse_identifier();
        if self.at_punct(PunctuationId::LParen) {
            self.parse_parameter_list();
        }

        self.finish();
    }

    fn parse_condition_statement(&mut self) {
        self.start(NodeKind::ConditionStatement);

        self.bump_any(); // 'IF'
        self.parse_expression();
        self.expect_keyword(KeywordId::Then, "'THEN'");
        self.parse_statement();
        if self.at_keyword(KeywordId::Else) {
            self.bump_any();
            self.parse_statement();
        }

        self.finish();
    }

    fn parse_for_statement(&mut self) {
        self.start(NodeKind::ForStatement);

        self.bump_any(); // 'FOR'
        self.parse_identifier();
        self.expect_operator(OperatorId::Assign, "':='");
        self.parse_expression();
        match self.peek().kind {
            TokenKind::Keyword(KeywordId::To) | TokenKind::Keyword(KeywordId::Downto) => self.bump_any(),
            _ => self.error_advance("'TO' or 'DOWNTO'"),
        }
        self.parse_expression();
        self.expect_keyword(KeywordId::Do, "'DO'");
        self.parse_statement();

        self.finish();
    }

    fn parse_while_statement(&mut self) {
        self.start(NodeKind::WhileStatement);

        self.bump_any(); // 'WHILE'
        self.parse_expression();
        self.expect_keyword(KeywordId::Do, "'DO'");
        self.parse_statement();

        self.finish();
    }

    fn parse_repeat_statement(&mut self) {
        self.start(NodeKind::RepeatStatement);

        self.bump_any(); // 'REPEAT'
        self.parse_statement();
        while self.at_punct(PunctuationId::Semicolon) {
            self.bump_any();
            self.parse_statement();
        }
        self.expect_keyword(KeywordId::Until, "'UNTIL'");
        self.parse_expression();

        self.finish();
    }
}
