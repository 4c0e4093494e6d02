//! Parser for the Pascal subset.
//!
//! Converts source text into a [`crate::tree::SyntaxTree`] by recursive
//! descent with single-token lookahead (plus a second token of lookahead at
//! exactly two points: statement-label detection and assignment vs. procedure
//! call).
//!
//! ## Notes
//! - Parsing never fails: grammar violations are recorded as diagnostics and
//!   recovered locally, so every input produces exactly one `File` tree.
//! - Every recovery path either consumes at least one token or is at end of
//!   input, so the parser cannot loop.
//!
//! ## Examples
//!
//! ```rust
//! use pasc_syntax::parser;
//!
//! let parse = parser::parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
//! assert!(parse.diagnostics.is_empty());
//! ```

use crate::diagnostics::Diagnostic;
use crate::lexer::{self, Token, TokenKind};
use crate::tree::{NodeKind, SyntaxTree, TokenId, TreeBuilder};
use pasc_core::lang::keywords::{self, KeywordId};
use pasc_core::lang::operators::{self, OperatorId, Tier};
use pasc_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
