//! Lexer errors.

use ttcn_diagnostic::{Diagnostic, ErrorCode};
use ttcn_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `"`.
    UnterminatedString,
    /// Missing closing `*/`.
    UnterminatedComment,
    /// `'0101'` without a `B`, `H` or `O` suffix.
    MalformedBitstring,
    /// A character that starts no token.
    InvalidCharacter(char),
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// Classify an unrecognized slice by its first characters.
    pub(crate) fn classify(slice: &str, span: Span) -> Self {
        let kind = if slice.starts_with('"') {
            LexErrorKind::UnterminatedString
        } else if slice.starts_with("/*") {
            LexErrorKind::UnterminatedComment
        } else if slice.starts_with('\'') {
            LexErrorKind::MalformedBitstring
        } else {
            LexErrorKind::InvalidCharacter(slice.chars().next().unwrap_or('\0'))
        };
        LexError::new(kind, span)
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedComment => ErrorCode::E0003,
            LexErrorKind::MalformedBitstring => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, label) = match self.kind {
            LexErrorKind::UnterminatedString => {
                ("unterminated string literal".to_string(), "missing closing `\"`")
            }
            LexErrorKind::UnterminatedComment => {
                ("unterminated block comment".to_string(), "missing closing `*/`")
            }
            LexErrorKind::MalformedBitstring => (
                "string literal in single quotes needs a `B`, `H` or `O` suffix".to_string(),
                "malformed literal",
            ),
            LexErrorKind::InvalidCharacter(c) => {
                (format!("invalid character `{}`", c.escape_default()), "not valid here")
            }
        };
        Diagnostic::error(self.code())
            .with_message(message)
            .with_label(self.span, label)
    }
}
