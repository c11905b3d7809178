//! Guarded alternatives and select bodies.

use ttcn_ir::ast::{AltArm, Guard, SelectCase, StmtKind};
use ttcn_ir::{Span, TokenKind};

use crate::recovery::{ALT_BOUNDARY, CASE_BOUNDARY};
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `{ [guard] action [{...}] ... }` of alt, interleave and call
    /// responses.
    pub(crate) fn parse_alt_body(&mut self) -> Result<(Vec<AltArm>, Span), ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut arms = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() && !self.should_stop() {
            let start = self.cursor.position();
            match self.parse_alt_arm() {
                Ok(arm) => {
                    arms.push(arm);
                    self.eat(TokenKind::Semicolon);
                }
                Err(err) => self.recover(&err, start, ALT_BOUNDARY),
            }
        }
        let close = self.expect_closing(TokenKind::RBrace, open)?;
        Ok((arms, open.merge(close)))
    }

    /// `[]`, `[expr]` or `[else]`, then the action and an optional block.
    ///
    /// `[else]` has no action and its block is required.
    pub(crate) fn parse_alt_arm(&mut self) -> Result<AltArm, ParseError> {
        let open = self.expect(TokenKind::LBracket)?.span;
        let guard = if self.check(TokenKind::RBracket) {
            Guard::Always
        } else if self.eat(TokenKind::Else) {
            Guard::Else
        } else {
            Guard::When(self.parse_expr()?)
        };
        self.expect_closing(TokenKind::RBracket, open)?;

        let (action, body) = if matches!(guard, Guard::Else) {
            (None, Some(self.parse_block()?))
        } else {
            let action = self.parse_expr()?;
            let body = if self.check(TokenKind::LBrace) {
                Some(self.parse_block()?)
            } else {
                None
            };
            (Some(action), body)
        };

        Ok(AltArm {
            guard,
            action,
            body,
            span: open.merge(self.previous_span()),
        })
    }

    /// `select [union] (e) { case (v, ...) {...} case else {...} }`
    pub(crate) fn parse_select(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::Select)?;
        let union = self.eat(TokenKind::Union);
        let paren = self.expect(TokenKind::LParen)?.span;
        let discriminant = self.parse_expr()?;
        self.expect_closing(TokenKind::RParen, paren)?;

        let open = self.expect(TokenKind::LBrace)?.span;
        let mut cases = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() && !self.should_stop() {
            let start = self.cursor.position();
            match self.parse_select_case() {
                Ok(case) => cases.push(case),
                Err(err) => self.recover(&err, start, CASE_BOUNDARY),
            }
        }
        self.expect_closing(TokenKind::RBrace, open)?;

        Ok(StmtKind::Select {
            union,
            discriminant,
            cases,
        })
    }

    fn parse_select_case(&mut self) -> Result<SelectCase, ParseError> {
        let start = self.expect(TokenKind::Case)?.span;
        let values = if self.eat(TokenKind::Else) {
            None
        } else {
            let (values, _) =
                self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
            Some(values)
        };
        let body = self.parse_block()?;
        Ok(SelectCase {
            values,
            span: start.merge(body.span),
            body,
        })
    }
}
