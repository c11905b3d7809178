//! `with { ... }` attribute statements.

use ttcn_ir::ast::{AttrKind, AttrValue, ScopeItem, WithSpec, WithStmt};
use ttcn_ir::TokenKind;

use super::import::def_selector;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `with { stmt; ... }` if the cursor is at `with`.
    pub(crate) fn parse_opt_with(&mut self) -> Result<Option<WithSpec>, ParseError> {
        if !self.check(TokenKind::With) {
            return Ok(None);
        }
        let start = self.advance().span;
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            stmts.push(self.parse_with_stmt()?);
        }
        let close = self.expect_closing(TokenKind::RBrace, open)?;
        Ok(Some(WithSpec {
            stmts,
            span: start.merge(close),
        }))
    }

    /// `kind [override] [@local] [(scope)] "value", ...`
    pub(crate) fn parse_with_stmt(&mut self) -> Result<WithStmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Encode => AttrKind::Encode,
            TokenKind::Variant => AttrKind::Variant,
            TokenKind::Display => AttrKind::Display,
            TokenKind::Extension => AttrKind::Extension,
            TokenKind::Optional => AttrKind::Optional,
            TokenKind::Stepsize => AttrKind::Stepsize,
            _ => return Err(self.unexpected("attribute keyword")),
        };
        self.advance();

        let overriding = self.eat(TokenKind::Override);
        let modifier = self.parse_opt_modifier("@local", "a with statement")?;
        let scope = if self.check(TokenKind::LParen) {
            let (items, _) =
                self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_scope_item())?;
            Some(items)
        } else {
            None
        };

        let mut values = vec![self.parse_attr_value()?];
        while self.eat(TokenKind::Comma) {
            values.push(self.parse_attr_value()?);
        }

        Ok(WithStmt {
            kind,
            overriding,
            modifier,
            scope,
            values,
            span: start.merge(self.previous_span()),
        })
    }

    /// `[dims]`, `kind all [except ...]`, `kind refs` or a reference.
    fn parse_scope_item(&mut self) -> Result<ScopeItem, ParseError> {
        if self.check(TokenKind::LBracket) {
            return Ok(ScopeItem::Elements(self.parse_dims()?));
        }
        if let Some(kind) = def_selector(self.current_kind()) {
            self.advance();
            let selection = self.parse_selection()?;
            return Ok(ScopeItem::Kind { kind, selection });
        }
        Ok(ScopeItem::Ref(self.parse_type_ref()?))
    }

    /// `"text"` or `"text"."rule"`.
    fn parse_attr_value(&mut self) -> Result<AttrValue, ParseError> {
        let start = self.current_span();
        let text = self.parse_string()?;
        let rule = if self.eat(TokenKind::Dot) {
            Some(self.parse_string()?)
        } else {
            None
        };
        Ok(AttrValue {
            rule,
            text,
            span: start.merge(self.previous_span()),
        })
    }
}
