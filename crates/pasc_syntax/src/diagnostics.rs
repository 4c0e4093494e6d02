//! Diagnostics for the Pascal frontend.
//!
//! A parse produces an ordered sequence of [`Diagnostic`]s alongside the
//! tree. Diagnostics are plain data (`{message, span, severity}`) so callers
//! can route them anywhere; [`Diagnostic::to_report`] adapts one into a
//! `miette`-renderable report with a labeled source snippet.
//!
//! ## Notes
//! - Lexical errors, syntax errors and recovery artifacts all surface here;
//!   nothing in the frontend panics or aborts on malformed input.
//! - Resolution misses are *not* diagnostics: an unresolved identifier is a
//!   normal `None` outcome left to higher layers to judge.

use crate::tree::Span;
use miette::{NamedSource, SourceSpan};
use thiserror::Error;

/// How severe a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single diagnostic: a message anchored to a source range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            severity: Severity::Error,
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            severity: Severity::Warning,
        }
    }

    /// Pair this diagnostic with its source text for rendering.
    pub fn to_report(&self, file_name: &str, source: &str) -> Report {
        Report {
            message: self.message.clone(),
            at: SourceSpan::new(self.span.start.into(), self.span.len()),
            src: NamedSource::new(file_name, source.to_string()),
        }
    }
}

/// A renderable diagnostic: message, labeled span, and named source.
#[derive(Debug, Error, miette::Diagnostic)]
#[error("{message}")]
pub struct Report {
    message: String,
    #[label("here")]
    at: SourceSpan,
    #[source_code]
    src: NamedSource<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let d = Diagnostic::error("Expected ';'", Span::new(3, 4));
        assert_eq!(d.to_string(), "Expected ';'");
        assert_eq!(d.severity, Severity::Error);
    }

    #[test]
    fn test_report_carries_span() {
        let d = Diagnostic::error("Expected ';'", Span::new(3, 5));
        let report = d.to_report("main.pas", "abcdefgh");
        // Rendering goes through miette; here we only check construction.
        assert_eq!(format!("{report}"), "Expected ';'");
    }
}
