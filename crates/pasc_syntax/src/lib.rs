//! Shared syntax frontend for the pasc Pascal tooling: lexer, syntax tree,
//! parser, reference resolver, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across the CLI and
//! future interactive tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no type checking, no code
//!   generation, no IO. The reference resolver lives here because it is a
//!   pure query over the finished tree.
//! - Every entry point is total: malformed input yields sentinel tokens,
//!   diagnostics and `Error` nodes, never a failure.
//! - Vocabulary identity (keywords/operators/punctuation) comes from
//!   `pasc_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use pasc_syntax::parser;
//!
//! let parse = parser::parse("PROGRAM P;\nBEGIN\n  x := 1\nEND.\n");
//! assert!(parse.diagnostics.is_empty());
//! ```
//!
//! ## See also
//! - `pasc_core::lang` for registry-backed language vocabulary.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod token_helpers;
pub mod tree;
