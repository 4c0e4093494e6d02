/// Declaration parsing methods.
///
/// This chunk parses the program header, the `USES` clause, blocks, and the
/// four declaration forms (`LABEL`, `VAR`, `FUNCTION`, `PROCEDURE`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Program header
    // ========================================================================

    fn parse_program_header(&mut self) {
        self.start(NodeKind::ProgramHeader);

        self.expect_keyword(KeywordId::Program, "'PROGRAM'");
        self.parse_identifier();
        if self.at_punct(PunctuationId::LParen) {
            self.parse_program_parameters();
        }

        self.finish();
    }

    fn parse_program_parameters(&mut self) {
        self.start(NodeKind::ProgramParameters);

        self.bump_any(); // '('
        if self.at_identifier() {
            self.parse_identifier();
            while self.at_punct(PunctuationId::Comma) {
                self.bump_any();
                self.parse_identifier();
            }
        }
        self.expect_punct(PunctuationId::RParen, "')'");

        self.finish();
    }

    /// Wrap the current `IDENTIFIER` token in an `Identifier` node.
    ///
    /// Every name position in the grammar goes through here, so each
    /// `Identifier` node wraps exactly one `IDENTIFIER` token and the
    /// resolver has a uniform shape to work with.
    fn parse_identifier(&mut self) {
        self.start(NodeKind::Identifier);
        if self.at_identifier() {
            self.bump_any();
        } else {
            self.error_expected("an identifier");
        }
        self.finish();
    }

    // ========================================================================
    // USES clause
    // ========================================================================

    fn parse_uses_clause(&mut self) {
        self.start(NodeKind::UsesClause);

        self.bump_any(); // 'USES'
        self.parse_clause();
        while self.at_punct(PunctuationId::Comma) {
            self.bump_any();
            self.parse_clause();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");

        self.finish();
    }

    fn parse_clause(&mut self) {
        self.start(NodeKind::Clause);

        self.parse_identifier();
        if self.at_keyword(KeywordId::In) {
            self.bump_any();
            if matches!(self.peek().kind, TokenKind::Str { .. }) {
                self.bump_any();
            } else {
                self.error_expected("a string literal");
            }
        }

        self.finish();
    }

    // ========================================================================
    // Blocks and declarations
    // ========================================================================

    fn parse_block(&mut self) {
        self.start(NodeKind::Block);

        if self.nesting_limit_reached() {
            self.finish();
            return;
        }
        self.depth += 1;
        self.parse_declaration_part();
        self.parse_statement_part();
        self.depth -= 1;

        self.finish();
    }

    /// Parse the declaration part of a block, if any.
    ///
    /// A `DeclarationPart` node materializes only when something precedes
    /// `BEGIN`. End of input counts as an implicit `BEGIN`, which bounds
    /// recovery when `BEGIN` is missing entirely.
    fn parse_declaration_part(&mut self) {
        if self.at_keyword(KeywordId::Begin) || self.at_end() {
            return;
        }
        self.start(NodeKind::DeclarationPart);

        while !self.at_keyword(KeywordId::Begin) && !self.at_end() {
            match self.peek().kind {
                TokenKind::Keyword(KeywordId::Label) => self.parse_label_declaration_part(),
                TokenKind::Keyword(KeywordId::Var) => self.parse_variable_declaration_part(),
                TokenKind::Keyword(KeywordId::Function) => self.parse_function_declaration(),
                TokenKind::Keyword(KeywordId::Procedure) => self.parse_procedure_declaration(),
                _ => self.error_advance("'LABEL', 'VAR', 'FUNCTION' or 'PROCEDURE'"),
            }
        }

        self.finish();
    }

    fn parse_function_declaration(&mut self) {
        self.start(NodeKind::FunctionDeclaration);

        self.bump_any(); // 'FUNCTION'
        self.parse_identifier();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.parse_block();
        self.expect_punct(PunctuationId::Semicolon, "';'");

        self.finish();
    }

    fn parse_procedure_declaration(&mut self) {
        self.start(NodeKind::ProcedureDeclaration);

        self.bump_any(); // 'PROCEDURE'
        self.parse_identifier();
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.parse_block();
        self.expect_punct(PunctuationId::Semicolon, "';'");

        self.finish();
    }

    fn parse_label_declaration_part(&mut self) {
        self.start(NodeKind::LabelDeclarationPart);

        self.bump_any(); // 'LABEL'
        self.parse_label();
        while self.at_punct(PunctuationId::Comma) {
            self.bump_any();
            self.parse_label();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");

        self.finish();
    }

    fn parse_variable_declaration_part(&mut self) {
        self.start(NodeKind::VariableDeclarationPart);

        self.bump_any(); // 'VAR'
        self.parse_variable_declaration();
        while self.at_identifier() {
            self.parse_variable_declaration();
        }

        self.finish();
    }

    fn parse_variable_declaration(&mut self) {
        self.start(NodeKind::VariableDeclaration);

        self.parse_identifier();
        self.expect_punct(PunctuationId::Colon, "':'");
        match self.peek().kind {
            TokenKind::Keyword(id) if keywords::is_type_name(id) => self.bump_any(),
            _ => self.error_advance("'INTEGER', 'REAL', 'BOOLEAN' or 'CHAR'"),
        }
        if self.at_operator(OperatorId::Eq) {
            self.bump_any();
            self.parse_expression();
        }
        self.expect_punct(PunctuationId::Semicolon, "';'");

        self.finish();
    }
}
