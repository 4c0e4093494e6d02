//! Pascal language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved
//! keywords, operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the
//! frontend. Instead, callers work with **stable IDs** (e.g. [`keywords::KeywordId`],
//! [`operators::OperatorId`]) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no tree types, no IO, no side effects.
//! - Keyword lookup is **case-sensitive**: the recognized spellings are the
//!   uppercase reserved words (`BEGIN`, not `begin`).
//!
//! ## Examples
//! ```rust
//! use pasc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("BEGIN"), Some(KeywordId::Begin));
//! assert_eq!(keywords::as_str(KeywordId::Begin), "BEGIN");
//! assert_eq!(keywords::from_str("begin"), None);
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
