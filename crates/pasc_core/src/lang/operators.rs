//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+`
//! and word operators like `DIV`) along with precedence-tier metadata used by
//! the expression grammar.
//!
//! ## Notes
//! - Infix expression operators are partitioned into three precedence tiers:
//!   relational (`= <> < <= > >=` and `IN`), additive (`+ - OR XOR`), and
//!   multiplicative (`* / DIV MOD AND`).
//! - All three infix tiers are **right-associative**: a chain like `a + b + c`
//!   groups as `a + (b + c)`. This grouping is a deliberate, documented
//!   contract of the grammar, and the registry records it as such.
//! - Word operators (`IN`, `OR`, `XOR`, `DIV`, `MOD`, `AND`, `NOT`) are
//!   lexed as keyword tokens; entries for them here carry
//!   [`OperatorInfo::is_keyword_spelling`] so tooling can map between the two
//!   registries via [`from_keyword`].
//!
//! ## Examples
//! ```rust
//! use pasc_core::lang::operators::{self, OperatorId, Tier};
//!
//! assert_eq!(operators::from_str(":="), Some(OperatorId::Assign));
//! assert_eq!(operators::tier_of(OperatorId::Plus), Some(Tier::Additive));
//! ```

use super::keywords::KeywordId;

/// Precedence tier for infix expression operators.
///
/// Higher tiers bind tighter; assignment operators and the prefix `NOT` are
/// not part of the tier partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Relational,
    Additive,
    Multiplicative,
}

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Right,
    None,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Relational
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    In,

    // Additive
    Plus,
    Minus,
    Or,
    Xor,

    // Multiplicative
    Star,
    Slash,
    Div,
    Mod,
    And,

    // Prefix
    Not,

    // Assignment
    Assign,
    PlusAssign,
    MinusAssign,
    StarAssign,
    SlashAssign,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and diagnostics.
/// - `tier` is `Some` only for infix expression operators; assignment
///   operators and prefix `NOT` sit outside the tier partition.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub tier: Option<Tier>,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Relational
    op(OperatorId::Eq, "=", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::NotEq, "<>", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::Lt, "<", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::LtEq, "<=", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::Gt, ">", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::GtEq, ">=", Some(Tier::Relational), Associativity::None, Fixity::Infix, false),
    op(OperatorId::In, "IN", Some(Tier::Relational), Associativity::None, Fixity::Infix, true),
    // Additive
    op(OperatorId::Plus, "+", Some(Tier::Additive), Associativity::Right, Fixity::Infix, false),
    op(OperatorId::Minus, "-", Some(Tier::Additive), Associativity::Right, Fixity::Infix, false),
    op(OperatorId::Or, "OR", Some(Tier::Additive), Associativity::Right, Fixity::Infix, true),
    op(OperatorId::Xor, "XOR", Some(Tier::Additive), Associativity::Right, Fixity::Infix, true),
    // Multiplicative
    op(OperatorId::Star, "*", Some(Tier::Multiplicative), Associativity::Right, Fixity::Infix, false),
    op(OperatorId::Slash, "/", Some(Tier::Multiplicative), Associativity::Right, Fixity::Infix, false),
    op(OperatorId::Div, "DIV", Some(Tier::Multiplicative), Associativity::Right, Fixity::Infix, true),
    op(OperatorId::Mod, "MOD", Some(Tier::Multiplicative), Associativity::Right, Fixity::Infix, true),
    op(OperatorId::And, "AND", Some(Tier::Multiplicative), Associativity::Right, Fixity::Infix, true),
    // Prefix
    op(OperatorId::Not, "NOT", None, Associativity::None, Fixity::Prefix, true),
    // Assignment
    op(OperatorId::Assign, ":=", None, Associativity::None, Fixity::Infix, false),
    op(OperatorId::PlusAssign, "+=", None, Associativity::None, Fixity::Infix, false),
    op(OperatorId::MinusAssign, "-=", None, Associativity::None, Fixity::Infix, false),
    op(OperatorId::StarAssign, "*=", None, Associativity::None, Fixity::Infix, false),
    op(OperatorId::SlashAssign, "/=", None, Associativity::None, Fixity::Infix, false),
];

/// Canonical spelling for `id`.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Precedence tier for `id`, if it is an infix expression operator.
pub fn tier_of(id: OperatorId) -> Option<Tier> {
    info_for(id).tier
}

/// Return `true` if `id` is one of the five assignment operators.
pub fn is_assignment(id: OperatorId) -> bool {
    matches!(
        id,
        OperatorId::Assign
            | OperatorId::PlusAssign
            | OperatorId::MinusAssign
            | OperatorId::StarAssign
            | OperatorId::SlashAssign
    )
}

/// Full metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a
///   programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by spelling (case-sensitive).
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

/// Map a word-operator keyword to its operator id.
///
/// Word operators are lexed as keyword tokens; this is the bridge the parser
/// uses to consult operator metadata for them.
pub fn from_keyword(id: KeywordId) -> Option<OperatorId> {
    match id {
        KeywordId::In => Some(OperatorId::In),
        KeywordId::Or => Some(OperatorId::Or),
        KeywordId::Xor => Some(OperatorId::Xor),
        KeywordId::Div => Some(OperatorId::Div),
        KeywordId::Mod => Some(OperatorId::Mod),
        KeywordId::And => Some(OperatorId::And),
        KeywordId::Not => Some(OperatorId::Not),
        _ => None,
    }
}

const fn op(
    id: OperatorId,
    canonical: &'static str,
    tier: Option<Tier>,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        tier,
        associativity,
        fixity,
        is_keyword_spelling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximal_munch_pairs_are_distinct() {
        // The compound spellings must be registered so the lexer can prefer
        // them over their prefixes.
        assert_eq!(from_str(":="), Some(OperatorId::Assign));
        assert_eq!(from_str("<="), Some(OperatorId::LtEq));
        assert_eq!(from_str("<>"), Some(OperatorId::NotEq));
        assert_eq!(from_str("<"), Some(OperatorId::Lt));
        assert_eq!(from_str("="), Some(OperatorId::Eq));
    }

    #[test]
    fn test_tier_partition() {
        let relational = OPERATORS.iter().filter(|o| o.tier == Some(Tier::Relational)).count();
        let additive = OPERATORS.iter().filter(|o| o.tier == Some(Tier::Additive)).count();
        let multiplicative = OPERATORS
            .iter()
            .filter(|o| o.tier == Some(Tier::Multiplicative))
            .count();
        assert_eq!(relational, 7); // = <> < <= > >= IN
        assert_eq!(additive, 4); // + - OR XOR
        assert_eq!(multiplicative, 5); // * / DIV MOD AND
    }

    #[test]
    fn test_word_operators_map_back_to_keywords() {
        for o in OPERATORS.iter().filter(|o| o.is_keyword_spelling) {
            let kw = pasc_core_keyword_for(o.id);
            assert_eq!(from_keyword(kw), Some(o.id));
        }
    }

    fn pasc_core_keyword_for(id: OperatorId) -> KeywordId {
        match id {
            OperatorId::In => KeywordId::In,
            OperatorId::Or => KeywordId::Or,
            OperatorId::Xor => KeywordId::Xor,
            OperatorId::Div => KeywordId::Div,
            OperatorId::Mod => KeywordId::Mod,
            OperatorId::And => KeywordId::And,
            OperatorId::Not => KeywordId::Not,
            _ => panic!("not a word operator: {:?}", id),
        }
    }
}
