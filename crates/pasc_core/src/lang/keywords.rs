//! Define the reserved keyword vocabulary for the Pascal subset.
//!
//! This module is the single source of truth for reserved words: a stable
//! identifier ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that
//! records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; only the uppercase
//!   spellings are reserved. `begin` is an ordinary identifier.
//! - Some reserved words are also "word operators" (e.g. `DIV`, `OR`). If you
//!   need operator metadata such as the precedence tier, use
//!   [`crate::lang::operators`].
//!
//! ## Examples
//! ```rust
//! use pasc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("PROGRAM"), Some(KeywordId::Program));
//! assert_eq!(keywords::as_str(KeywordId::Downto), "DOWNTO");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Program structure
    Program,
    Uses,
    Label,
    Var,
    Function,
    Procedure,
    Begin,
    End,

    // Statements
    If,
    Then,
    Else,
    For,
    To,
    Downto,
    Do,
    While,
    Repeat,
    Until,

    // Word operators
    In,
    Or,
    Xor,
    Div,
    Mod,
    And,
    Not,

    // Type names
    Integer,
    Real,
    Boolean,
    Char,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Program/declaration structure (`PROGRAM`, `VAR`, `BEGIN`, ...).
    Structure,
    /// Statement keywords (`IF`, `WHILE`, `REPEAT`, ...).
    Statement,
    /// Reserved words that act as operators (`DIV`, `OR`, `NOT`, ...).
    Operator,
    /// Builtin type names (`INTEGER`, `REAL`, `BOOLEAN`, `CHAR`).
    TypeName,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Program structure
    kw(KeywordId::Program, "PROGRAM", KeywordCategory::Structure),
    kw(KeywordId::Uses, "USES", KeywordCategory::Structure),
    kw(KeywordId::Label, "LABEL", KeywordCategory::Structure),
    kw(KeywordId::Var, "VAR", KeywordCategory::Structure),
    kw(KeywordId::Function, "FUNCTION", KeywordCategory::Structure),
    kw(KeywordId::Procedure, "PROCEDURE", KeywordCategory::Structure),
    kw(KeywordId::Begin, "BEGIN", KeywordCategory::Structure),
    kw(KeywordId::End, "END", KeywordCategory::Structure),
    // Statements
    kw(KeywordId::If, "IF", KeywordCategory::Statement),
    kw(KeywordId::Then, "THEN", KeywordCategory::Statement),
    kw(KeywordId::Else, "ELSE", KeywordCategory::Statement),
    kw(KeywordId::For, "FOR", KeywordCategory::Statement),
    kw(KeywordId::To, "TO", KeywordCategory::Statement),
    kw(KeywordId::Downto, "DOWNTO", KeywordCategory::Statement),
    kw(KeywordId::Do, "DO", KeywordCategory::Statement),
    kw(KeywordId::While, "WHILE", KeywordCategory::Statement),
    kw(KeywordId::Repeat, "REPEAT", KeywordCategory::Statement),
    kw(KeywordId::Until, "UNTIL", KeywordCategory::Statement),
    // Word operators
    kw(KeywordId::In, "IN", KeywordCategory::Operator),
    kw(KeywordId::Or, "OR", KeywordCategory::Operator),
    kw(KeywordId::Xor, "XOR", KeywordCategory::Operator),
    kw(KeywordId::Div, "DIV", KeywordCategory::Operator),
    kw(KeywordId::Mod, "MOD", KeywordCategory::Operator),
    kw(KeywordId::And, "AND", KeywordCategory::Operator),
    kw(KeywordId::Not, "NOT", KeywordCategory::Operator),
    // Type names
    kw(KeywordId::Integer, "INTEGER", KeywordCategory::TypeName),
    kw(KeywordId::Real, "REAL", KeywordCategory::TypeName),
    kw(KeywordId::Boolean, "BOOLEAN", KeywordCategory::TypeName),
    kw(KeywordId::Char, "CHAR", KeywordCategory::TypeName),
];

/// Canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category for `id`.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` names a builtin type (`INTEGER`, `REAL`, `BOOLEAN`, `CHAR`).
pub fn is_type_name(id: KeywordId) -> bool {
    category(id) == KeywordCategory::TypeName
}

/// Full metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Notes
/// - Matching is **case-sensitive**: only the canonical uppercase spellings
///   are reserved.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn kw(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("BEGIN"), Some(KeywordId::Begin));
        assert_eq!(from_str("begin"), None);
        assert_eq!(from_str("Begin"), None);
    }

    #[test]
    fn test_roundtrip() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id), "spelling {:?}", k.canonical);
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_type_names() {
        assert!(is_type_name(KeywordId::Integer));
        assert!(is_type_name(KeywordId::Char));
        assert!(!is_type_name(KeywordId::Begin));
    }
}
