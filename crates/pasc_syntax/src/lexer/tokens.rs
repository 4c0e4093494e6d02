//! Token types for the Pascal lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including word operators like `DIV`)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser and resolver.
//! - Tokens carry only a kind and a span; the text is a slice of the source.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::tree::Span;
use pasc_core::lang::keywords::{self, KeywordId};
use pasc_core::lang::operators::OperatorId;
use pasc_core::lang::punctuation::PunctuationId;

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - Keyword/operator/punctuation tokens carry stable IDs from `pasc_core::lang`.
/// - `Error` is the sentinel for an unrecognized character; the lexer never
///   fails, it classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Identifier,
    UnsignedInteger,
    /// A string literal. `terminated` is `false` when the closing quote was
    /// missing before the end of the line; the token still covers the scanned
    /// text so parsing can proceed.
    Str { terminated: bool },

    // ========== Trivia ==========
    Comment,
    Whitespace,
    Newline,

    // ========== Special ==========
    /// Sentinel for a single unrecognized character.
    Error,
    /// Virtual end-of-input token; always last, always zero-width.
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The source text this token covers.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
