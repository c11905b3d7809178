//! Grammar modules.
//!
//! Each module extends `Parser` with methods for specific grammar
//! productions:
//!
//! - [`module`]: modules, module definitions, groups and the control part
//! - [`import`]: import declarations
//! - [`attr`]: `with { ... }` attribute statements
//! - [`decl`]: value declarations and qualifiers
//! - [`params`]: formal parameter lists
//! - [`func`]: functions, testcases, altsteps and signatures
//! - [`ty`]: type definitions and type references
//! - [`stmt`]: statements and blocks
//! - [`alt`]: alt, interleave and select bodies
//! - [`expr`]: expressions, templates and communication operations
//!
//! Productions return `Result<T, ParseError>`. Productions that parse a
//! list of independent items (module bodies, blocks, alternatives) report
//! failed items themselves and resynchronize.

mod alt;
mod attr;
mod decl;
mod expr;
mod func;
mod import;
mod module;
mod params;
mod stmt;
mod ty;

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `open item, item, ... close`, allowing an empty list.
    ///
    /// Returns the items and the span from `open` to `close`.
    pub(crate) fn delimited<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, Span), ParseError> {
        let open_span = self.expect(open)?.span;
        let mut items = Vec::new();
        while !self.check(close) && !self.is_at_end() {
            items.push(item(self)?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        let close_span = self.expect_closing(close, open_span)?;
        Ok((items, open_span.merge(close_span)))
    }

    /// Parse an optional `allowed` modifier such as `@local`.
    ///
    /// Any other modifier is an error naming `place`.
    pub(crate) fn parse_opt_modifier(
        &mut self,
        allowed: &str,
        place: &str,
    ) -> Result<Option<String>, ParseError> {
        if !self.check(TokenKind::Modifier) {
            return Ok(None);
        }
        if self.cursor.check_modifier(allowed) {
            return Ok(Some(self.advance().text.to_string()));
        }
        Err(ParseError::new(
            ErrorCode::E1011,
            format!("modifier `{}` is not allowed on {place}", self.current().text),
            self.current_span(),
        )
        .with_context(format!("expected `{allowed}`")))
    }

    /// Parse a string literal and return its contents.
    pub(crate) fn parse_string(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::String) {
            Ok(ttcn_lexer::string_value(&self.advance().text))
        } else {
            Err(self.unexpected("string"))
        }
    }

    /// `language "s1", "s2"`, or nothing.
    pub(crate) fn parse_language_spec(&mut self) -> Result<Vec<String>, ParseError> {
        let mut language = Vec::new();
        if self.eat(TokenKind::Language) {
            language.push(self.parse_string()?);
            while self.eat(TokenKind::Comma) {
                language.push(self.parse_string()?);
            }
        }
        Ok(language)
    }

    /// Accept an optional `;` or require a statement end.
    ///
    /// A `;` may be left out after a construct ending in `}` and before a
    /// closing `}` or the end of input.
    pub(crate) fn expect_terminator(&mut self) -> Result<(), ParseError> {
        if self.eat(TokenKind::Semicolon)
            || self.cursor.previous_kind() == TokenKind::RBrace
            || self.check(TokenKind::RBrace)
            || self.is_at_end()
        {
            Ok(())
        } else {
            Err(ParseError::new(
                ttcn_diagnostic::ErrorCode::E1014,
                format!("expected `;`, found {}", self.current_kind()),
                self.current_span(),
            )
            .with_context("expected `;`"))
        }
    }
}
