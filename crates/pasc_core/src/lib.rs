//! Provide the canonical language vocabulary for the pasc Pascal frontend.
//!
//! This crate is intentionally small and dependency-light. It contains the
//! registry-backed vocabulary (keywords, operators, punctuation) shared by the
//! lexer, parser, and tooling.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no
//!   syntax-tree types.
//! - The lexer/parser enforce syntax; registries only provide spellings and
//!   metadata.

pub mod lang;
