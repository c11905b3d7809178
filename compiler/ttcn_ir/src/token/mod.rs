//! Token types produced by the lexer and consumed by the parser.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use crate::Span;

/// A token with its span and source text.
///
/// Immutable once produced. The text is the exact source slice, so string
/// literals keep their quotes and bitstrings keep their suffix.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: Box<str>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, text: impl Into<Box<str>>) -> Self {
        Token {
            kind,
            span,
            text: text.into(),
        }
    }

    /// End-of-file sentinel located at `pos`.
    pub fn eof(pos: u32) -> Self {
        Token::new(TokenKind::Eof, Span::point(pos), "")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}
