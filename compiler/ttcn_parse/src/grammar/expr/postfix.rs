//! Postfix operations: calls, indexing, selectors, `create` and port
//! operations applied to a reference.

use ttcn_ir::ast::{Expr, ExprKind};
use ttcn_ir::TokenKind;

use crate::{ParseError, Parser};

use super::comm::port_operation;

impl Parser<'_> {
    pub(crate) fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary()?;
        self.parse_postfix_ops(base, true)
    }

    /// Apply postfix operations to `base`.
    ///
    /// With `allow_comm` unset the chain stops in front of `.receive` and
    /// the other port operations.
    pub(crate) fn parse_postfix_ops(
        &mut self,
        mut expr: Expr,
        allow_comm: bool,
    ) -> Result<Expr, ParseError> {
        loop {
            match self.current_kind() {
                TokenKind::LParen => {
                    let (args, span) =
                        self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
                    let span = expr.span.merge(span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            modifier: None,
                            args,
                        },
                        span,
                    );
                }
                // `regexp @nocase(...)`
                TokenKind::Modifier if self.peek_next_kind() == TokenKind::LParen => {
                    let modifier = self.advance().text.to_string();
                    let (args, span) =
                        self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
                    let span = expr.span.merge(span);
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            modifier: Some(modifier),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    let open = self.advance().span;
                    let index = self.parse_expr()?;
                    let close = self.expect_closing(TokenKind::RBracket, open)?;
                    let span = expr.span.merge(close);
                    expr = Expr::new(
                        ExprKind::Index {
                            base: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    );
                }
                TokenKind::Dot => match self.peek_next_kind() {
                    TokenKind::Create => expr = self.parse_create(expr)?,
                    kind if port_operation(kind).is_some() => {
                        if !allow_comm {
                            return Ok(expr);
                        }
                        self.advance();
                        return self.parse_comm(Some(expr));
                    }
                    _ => {
                        self.advance();
                        let field = self.cursor.expect_member_name()?;
                        let span = expr.span.merge(field.span);
                        expr = Expr::new(
                            ExprKind::Selector {
                                base: Box::new(expr),
                                field,
                            },
                            span,
                        );
                    }
                },
                _ => return Ok(expr),
            }
        }
    }

    /// Whether the cursor is at `.receive` or another port operation.
    pub(crate) fn at_port_operation(&self) -> bool {
        self.check(TokenKind::Dot) && port_operation(self.peek_next_kind()).is_some()
    }

    /// `.create [(name [, location])] [alive]`
    fn parse_create(&mut self, component: Expr) -> Result<Expr, ParseError> {
        self.expect(TokenKind::Dot)?;
        let mut end = self.expect(TokenKind::Create)?.span;
        let args = if self.check(TokenKind::LParen) {
            let (args, span) =
                self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
            end = span;
            args
        } else {
            Vec::new()
        };
        let alive = self.eat(TokenKind::Alive);
        if alive {
            end = self.previous_span();
        }
        let span = component.span.merge(end);
        Ok(Expr::new(
            ExprKind::Create {
                component: Box::new(component),
                args,
                alive,
            },
            span,
        ))
    }
}
