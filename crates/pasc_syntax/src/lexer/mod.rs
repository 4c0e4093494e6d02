//! Lexer for the Pascal subset.
//!
//! Handles tokenization including:
//! - Keywords (case-sensitive uppercase reserved words) and identifiers
//! - Unsigned integer literals (decimal and `$`-prefixed hexadecimal)
//! - String literals with doubled-quote escapes
//! - Operators and punctuation with maximal munch (`:=` over `:` `=`)
//! - Comments (`{ ... }`, `(* ... *)`, `// ...`)
//!
//! ## Notes
//! - Tokenization is **total**: unrecognized characters become [`TokenKind::Error`]
//!   sentinel tokens (one per character) instead of failing, and an
//!   unterminated string is emitted up to the end of the line with its
//!   `terminated` flag cleared.
//! - Whitespace, newlines and comments are kept as trivia tokens; every byte
//!   of the input is covered by exactly one token.
//! - The stream always ends with a zero-width [`TokenKind::Eof`] token.

pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::tree::Span;
use pasc_core::lang::operators::OperatorId;
use pasc_core::lang::punctuation::PunctuationId;

/// Lexer for Pascal source code.
///
/// Converts source text into a stream of tokens. The quote character for
/// string literals is configurable and defaults to the Pascal apostrophe.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    quote: char,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self::with_quote(source, '\'')
    }

    /// Create a lexer that uses `quote` as the string delimiter.
    pub fn with_quote(source: &'a str, quote: char) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            quote,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Total: always returns a token vector covering the whole input, ending
    /// with an `Eof` token. Lexical problems surface as `Error` sentinel
    /// tokens and flagged string tokens, never as failures.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize) {
        self.add_token(TokenKind::Operator(id), start);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '\n' => self.add_token(TokenKind::Newline, start),

            ' ' | '\t' | '\r' => {
                while matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
                    self.advance();
                }
                self.add_token(TokenKind::Whitespace, start);
            }

            // Comments: { ... }
            '{' => {
                while let Some(c) = self.advance() {
                    if c == '}' {
                        break;
                    }
                }
                self.add_token(TokenKind::Comment, start);
            }

            // `(*` opens a comment; a lone `(` is punctuation (maximal munch).
            '(' => {
                if self.match_char('*') {
                    self.scan_block_comment(start);
                } else {
                    self.add_punct(PunctuationId::LParen, start);
                }
            }
            ')' => self.add_punct(PunctuationId::RParen, start),
            '.' => self.add_punct(PunctuationId::Dot, start),
            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            ':' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::Assign, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }

            // Operators
            '+' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::PlusAssign, start);
                } else {
                    self.add_op(OperatorId::Plus, start);
                }
            }
            '-' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::MinusAssign, start);
                } else {
                    self.add_op(OperatorId::Minus, start);
                }
            }
            '*' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::StarAssign, start);
                } else {
                    self.add_op(OperatorId::Star, start);
                }
            }
            '/' => {
                if self.match_char('/') {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                    self.add_token(TokenKind::Comment, start);
                } else if self.match_char('=') {
                    self.add_op(OperatorId::SlashAssign, start);
                } else {
                    self.add_op(OperatorId::Slash, start);
                }
            }
            '=' => self.add_op(OperatorId::Eq, start),
            '<' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::LtEq, start);
                } else if self.match_char('>') {
                    self.add_op(OperatorId::NotEq, start);
                } else {
                    self.add_op(OperatorId::Lt, start);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::GtEq, start);
                } else {
                    self.add_op(OperatorId::Gt, start);
                }
            }

            // Numbers: decimal, or `$`-prefixed hexadecimal
            '0'..='9' => {
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.advance();
                }
                self.add_token(TokenKind::UnsignedInteger, start);
            }
            '$' => {
                if matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
                    while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
                        self.advance();
                    }
                    self.add_token(TokenKind::UnsignedInteger, start);
                } else {
                    self.add_token(TokenKind::Error, start);
                }
            }

            c if c == self.quote => self.scan_string(start),

            c if is_ident_start(c) => self.scan_identifier(start),

            _ => self.add_token(TokenKind::Error, start),
        }
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a string literal after the opening quote.
    ///
    /// A doubled quote is an escaped quote. A newline or end of input before
    /// the closing quote ends the token early with `terminated: false`; the
    /// newline itself is not consumed.
    fn scan_string(&mut self, start: usize) {
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.add_token(TokenKind::Str { terminated: false }, start);
                    return;
                }
                Some(c) if c == self.quote => {
                    self.advance();
                    if self.peek() == Some(self.quote) {
                        self.advance();
                    } else {
                        self.add_token(TokenKind::Str { terminated: true }, start);
                        return;
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Scan a `(* ... *)` comment after the opening marker.
    ///
    /// Extends to end of input when the closing marker is missing.
    fn scan_block_comment(&mut self, start: usize) {
        while let Some(c) = self.advance() {
            if c == '*' && self.peek() == Some(')') {
                self.advance();
                break;
            }
        }
        self.add_token(TokenKind::Comment, start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while matches!(self.peek(), Some(c) if is_ident_continue(c)) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];

        // Look up the spelling in the reserved-word registry (case-sensitive).
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Identifier, start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to tokenize a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
