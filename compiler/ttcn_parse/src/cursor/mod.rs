//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::Ident;
use ttcn_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Cursor over a lexed token stream.
///
/// The stream always ends with an [`Eof`](TokenKind::Eof) token, and the
/// cursor never moves past it, so `current()` is always valid.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.as_slice().last().map(|t| t.kind) == Some(TokenKind::Eof),
            "token stream must end with EOF"
        );
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    /// Current position in the token stream.
    ///
    /// Compare positions before and after a production to tell whether it
    /// consumed anything.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly. Used to restore snapshots.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position {pos} out of bounds");
        self.pos = pos.min(self.last_index());
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    /// Kind of the last consumed token, `Eof` at the start of the stream.
    #[inline]
    pub fn previous_kind(&self) -> TokenKind {
        if self.pos > 0 {
            self.tokens[self.pos - 1].kind
        } else {
            TokenKind::Eof
        }
    }

    /// Token kind `n` tokens ahead; `peek_kind_at(0)` is the current token.
    ///
    /// Returns `Eof` past the end of the stream.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.peek_kind_at(1)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Check for a modifier token with the given spelling, e.g. `@index`.
    #[inline]
    pub fn check_modifier(&self, text: &str) -> bool {
        let token = self.current();
        token.kind == TokenKind::Modifier && &*token.text == text
    }

    /// Advance to the next token and return the consumed one.
    ///
    /// At EOF the cursor stays put and keeps returning the EOF token.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let token = &self.tokens[self.pos];
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if self.pos < self.last_index() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return
    /// it.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::unexpected(
            self.current_span(),
            &format!("`{}`", kind.display_name()),
            self.current_kind(),
        )
    }

    /// Expect and consume an identifier.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Ident, ParseError> {
        if self.check(TokenKind::Ident) {
            let token = self.advance();
            Ok(Ident::new(&*token.text, token.span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    /// Expect and consume a field name after `.`.
    ///
    /// Any keyword is accepted here, since the `.` makes the position
    /// unambiguous: `c.running`, `t.timeout`, `x.stop`.
    pub fn expect_member_name(&mut self) -> Result<Ident, ParseError> {
        let kind = self.current_kind();
        if kind == TokenKind::Ident || kind.is_keyword() {
            let token = self.advance();
            Ok(Ident::new(&*token.text, token.span))
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!(
                "expected identifier, found {}",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
        .with_context("expected identifier")
    }
}
