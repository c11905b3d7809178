//! Expression parsing.
//!
//! Precedence climbing over the table in [`operators`]:
//!
//! ```text
//! expr      = template [ ":=" expr ]
//! template  = binary(0) { "length" "(" expr ")" | "ifpresent" }
//! binary(p) = unary { op(bp >= p) binary(bp.right) }
//! unary     = ( "-" | "+" | "not" | "not4b" ) unary | operand
//! operand   = postfix [ ":" unary ]
//! ```
//!
//! Bare `-` is the "not used" symbol when it stands alone in a list,
//! argument or dimension.

mod comm;
mod operators;
mod postfix;
mod primary;

use ttcn_ir::ast::{Expr, ExprKind, UnaryOp};
use ttcn_ir::TokenKind;

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

use operators::binary_op;

impl Parser<'_> {
    /// Parse an expression, including assignment.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assign())
    }

    /// Parse `expr, expr, ...` up to the end of input or a closing token.
    pub(crate) fn parse_expr_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(TokenKind::Comma) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    fn parse_assign(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_template()?;
        if !self.eat(TokenKind::Assign) {
            return Ok(target);
        }
        let value = self.parse_expr()?;
        let span = target.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Binary expression followed by `length(...)` and `ifpresent`.
    fn parse_template(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_binary(0)?;
        loop {
            match self.current_kind() {
                TokenKind::Length => {
                    let length = self.parse_length()?;
                    let span = expr.span.merge(self.previous_span());
                    expr = Expr::new(
                        ExprKind::Length {
                            template: Box::new(expr),
                            length: Box::new(length),
                        },
                        span,
                    );
                }
                TokenKind::Ifpresent => {
                    let span = expr.span.merge(self.advance().span);
                    expr = Expr::new(ExprKind::IfPresent(Box::new(expr)), span);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// `length ( expr )`; returns the inner expression.
    pub(crate) fn parse_length(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::Length)?;
        let open = self.expect(TokenKind::LParen)?.span;
        let length = self.parse_expr()?;
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(length)
    }

    fn parse_binary(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some((op, bp)) = binary_op(self.current_kind()) {
            if bp.left < min_bp {
                break;
            }
            self.advance();
            let right = self.parse_binary(bp.right)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    pub(crate) fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.current_kind() {
            TokenKind::Minus if self.dont_care_follows() => {
                let span = self.advance().span;
                return Ok(Expr::new(ExprKind::DontCare, span));
            }
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Pos,
            TokenKind::Not => UnaryOp::Not,
            TokenKind::Not4b => UnaryOp::Not4b,
            _ => return self.parse_operand(),
        };
        let start = self.advance().span;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    /// Whether the `-` at the cursor stands alone.
    fn dont_care_follows(&self) -> bool {
        matches!(
            self.peek_next_kind(),
            TokenKind::Comma
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Semicolon
                | TokenKind::Eof
        )
    }

    /// Postfix expression, optionally qualified: `system:p`, `T:{...}`.
    fn parse_operand(&mut self) -> Result<Expr, ParseError> {
        let qualifier = self.parse_postfix()?;
        if !self.eat(TokenKind::Colon) {
            return Ok(qualifier);
        }
        let value = self.parse_unary()?;
        let span = qualifier.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Qualified {
                qualifier: Box::new(qualifier),
                value: Box::new(value),
            },
            span,
        ))
    }
}
