//! Parse error type.
//!
//! Productions return `Result<T, ParseError>`. The list-level loops (module
//! bodies, blocks, alternatives) catch the error, turn it into a
//! [`Diagnostic`] and resynchronize, so one bad statement does not hide the
//! next one.

use ttcn_diagnostic::{Diagnostic, ErrorCode};
use ttcn_ir::{Span, TokenKind};

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// Label text for the primary span.
    pub context: Option<String>,
    /// Opening delimiter when the error is a missing closing one.
    pub opened: Option<Span>,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            opened: None,
        }
    }

    /// "expected X, found Y"
    #[cold]
    pub fn unexpected(span: Span, expected: &str, found: TokenKind) -> Self {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {expected}, found {}", found.display_name()),
            span,
        )
        .with_context(format!("expected {expected}"))
    }

    /// A delimiter opened at `open` was never closed.
    #[cold]
    pub fn unclosed(open: Span, span: Span, delimiter: TokenKind, found: TokenKind) -> Self {
        let mut err = ParseError::new(
            ErrorCode::E1003,
            format!(
                "unclosed delimiter, expected `{}`, found {}",
                delimiter.display_name(),
                found.display_name()
            ),
            span,
        )
        .with_context(format!("expected `{}` here", delimiter.display_name()));
        err.opened = Some(open);
        err
    }

    /// Syntax that is recognized but deliberately not supported.
    #[cold]
    pub fn unsupported(span: Span, what: &str) -> Self {
        ParseError::new(ErrorCode::E1010, format!("{what} are not supported"), span)
            .with_context("unsupported")
    }

    /// Add label text for the primary span.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, self.context.as_deref().unwrap_or("here"));
        match self.opened {
            Some(open) => diag.with_secondary_label(open, "unclosed delimiter opened here"),
            None => diag,
        }
    }
}
