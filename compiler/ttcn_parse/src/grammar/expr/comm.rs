//! Communication and configuration operations.
//!
//! Every operation has its own operand shape:
//!
//! ```text
//! send(t) [to a]                      raise(s, t) [to a]
//! call(s [, timeout]) [to a] [{ arms }]
//! reply(t) [to a]
//! receive(t) [from a] [-> value v sender s timestamp t @index i]
//! trigger(t), catch(s, t)             same redirects as receive
//! getcall(t) [from a] [-> param (...) sender s timestamp t @index i]
//! getreply(t [value m]) [from a] [-> any redirect]
//! check [( receive-op | from a [-> sender s] | -> sender s )]
//! map | unmap (c:p, c:p) [param (...)]
//! connect | disconnect (c:p, c:p)
//! ```
//!
//! Redirects are checked against the operation while parsing, so a
//! misplaced clause points at its own keyword.

use bitflags::bitflags;
use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{CommArgs, CommKind, CommOp, Expr, ExprKind, Redirect, RedirectItem};
use ttcn_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

bitflags! {
    /// Redirect clauses an operation accepts.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub(crate) struct RedirectKinds: u8 {
        const VALUE = 1 << 0;
        const PARAM = 1 << 1;
        const SENDER = 1 << 2;
        const TIMESTAMP = 1 << 3;
        const INDEX = 1 << 4;
    }
}

impl RedirectKinds {
    /// Redirects accepted after `kind`.
    pub(crate) fn for_operation(kind: CommKind) -> Self {
        match kind {
            CommKind::Receive | CommKind::Trigger | CommKind::Catch => {
                Self::VALUE | Self::SENDER | Self::TIMESTAMP | Self::INDEX
            }
            CommKind::Getcall => Self::PARAM | Self::SENDER | Self::TIMESTAMP | Self::INDEX,
            CommKind::Getreply => Self::all(),
            CommKind::Check => Self::SENDER,
            _ => Self::empty(),
        }
    }
}

/// Port operations, which may follow `port.`.
pub(crate) fn port_operation(kind: TokenKind) -> Option<CommKind> {
    Some(match kind {
        TokenKind::Send => CommKind::Send,
        TokenKind::Receive => CommKind::Receive,
        TokenKind::Trigger => CommKind::Trigger,
        TokenKind::Call => CommKind::Call,
        TokenKind::Getcall => CommKind::Getcall,
        TokenKind::Reply => CommKind::Reply,
        TokenKind::Getreply => CommKind::Getreply,
        TokenKind::Raise => CommKind::Raise,
        TokenKind::Catch => CommKind::Catch,
        TokenKind::Check => CommKind::Check,
        _ => return None,
    })
}

fn config_operation(kind: TokenKind) -> Option<CommKind> {
    Some(match kind {
        TokenKind::Map => CommKind::Map,
        TokenKind::Unmap => CommKind::Unmap,
        TokenKind::Connect => CommKind::Connect,
        TokenKind::Disconnect => CommKind::Disconnect,
        _ => return None,
    })
}

const fn is_outgoing(kind: CommKind) -> bool {
    matches!(
        kind,
        CommKind::Send | CommKind::Call | CommKind::Reply | CommKind::Raise
    )
}

const fn is_receiving(kind: CommKind) -> bool {
    matches!(
        kind,
        CommKind::Receive
            | CommKind::Trigger
            | CommKind::Getcall
            | CommKind::Getreply
            | CommKind::Catch
    )
}

impl Parser<'_> {
    /// Parse the operation keyword at the cursor and its operands.
    ///
    /// `port` is the reference in front of `.`, if any.
    pub(crate) fn parse_comm(&mut self, port: Option<Expr>) -> Result<Expr, ParseError> {
        let start = port.as_ref().map_or(self.current_span(), |p| p.span);
        let token = self.advance();
        let op = if let Some(kind) = port_operation(token.kind) {
            if kind == CommKind::Check {
                self.parse_check(port)?
            } else {
                self.parse_port_op(kind, port)?
            }
        } else if let Some(kind) = config_operation(token.kind) {
            self.parse_config_op(kind, token.span)?
        } else {
            return Err(ParseError::unexpected(
                token.span,
                "communication operation",
                token.kind,
            ));
        };
        let span = start.merge(self.previous_span());
        Ok(Expr::new(ExprKind::Comm(Box::new(op)), span))
    }

    fn parse_port_op(&mut self, kind: CommKind, port: Option<Expr>) -> Result<CommOp, ParseError> {
        let mut operands = CommArgs::default();
        if self.check(TokenKind::LParen) {
            self.parse_comm_args(kind, &mut operands)?;
        }

        if is_outgoing(kind) {
            if self.eat(TokenKind::To) {
                operands.to = Some(Box::new(self.parse_expr()?));
            }
        } else if self.eat(TokenKind::From) {
            operands.from = Some(Box::new(self.parse_expr()?));
        }

        if self.check(TokenKind::Arrow) {
            let mut allowed = RedirectKinds::for_operation(kind);
            // The sender of a matched reply is implied by the value match.
            if operands.value_match.is_some() {
                allowed.remove(RedirectKinds::SENDER);
            }
            operands.redirect = Some(self.parse_redirect(allowed, kind.as_str())?);
        }

        let response = if kind == CommKind::Call && self.check(TokenKind::LBrace) {
            Some(self.parse_alt_body()?.0)
        } else {
            None
        };

        Ok(CommOp {
            port: port.map(Box::new),
            kind,
            operands,
            nested: None,
            response,
        })
    }

    /// `( expr, ... [value expr] )`; only `getreply` takes a value match.
    fn parse_comm_args(&mut self, kind: CommKind, operands: &mut CommArgs) -> Result<(), ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        if !self.check(TokenKind::RParen) {
            operands.args.push(self.parse_expr()?);
            while self.eat(TokenKind::Comma) {
                operands.args.push(self.parse_expr()?);
            }
            if self.check(TokenKind::Value) {
                let keyword = self.advance().span;
                if kind != CommKind::Getreply {
                    return Err(ParseError::new(
                        ErrorCode::E1008,
                        format!("`{}` does not take a value match", kind.as_str()),
                        keyword,
                    )
                    .with_context("only `getreply` matches a return value"));
                }
                operands.value_match = Some(Box::new(self.parse_expr()?));
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(())
    }

    /// `check`, `check(receive-op)`, `check(from a [-> sender s])` or
    /// `check(-> sender s)`.
    fn parse_check(&mut self, port: Option<Expr>) -> Result<CommOp, ParseError> {
        let mut op = CommOp {
            port: port.map(Box::new),
            kind: CommKind::Check,
            operands: CommArgs::default(),
            nested: None,
            response: None,
        };
        if !self.check(TokenKind::LParen) {
            return Ok(op);
        }

        let open = self.advance().span;
        match port_operation(self.current_kind()) {
            Some(kind) if is_receiving(kind) => {
                self.advance();
                op.nested = Some(Box::new(self.parse_port_op(kind, None)?));
            }
            _ => {
                if self.eat(TokenKind::From) {
                    op.operands.from = Some(Box::new(self.parse_expr()?));
                }
                if self.check(TokenKind::Arrow) {
                    op.operands.redirect = Some(
                        self.parse_redirect(RedirectKinds::for_operation(CommKind::Check), "check")?,
                    );
                }
                if op.operands.from.is_none() && op.operands.redirect.is_none() {
                    return Err(self.unexpected("receiving operation, `from` or `->`"));
                }
            }
        }
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(op)
    }

    /// `map (c:p, c:p) [param (...)]` and friends.
    fn parse_config_op(&mut self, kind: CommKind, keyword: Span) -> Result<CommOp, ParseError> {
        if !self.check(TokenKind::LParen) {
            return Err(ParseError::new(
                ErrorCode::E1008,
                format!("`{}` needs two endpoints", kind.as_str()),
                keyword,
            )
            .with_context("expected `(component:port, component:port)`"));
        }
        let (args, span) =
            self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
        let endpoints_ok = args.len() == 2
            && args
                .iter()
                .all(|e| matches!(e.kind, ExprKind::Qualified { .. }));
        if !endpoints_ok {
            return Err(ParseError::new(
                ErrorCode::E1008,
                format!(
                    "`{}` takes exactly two endpoints of the form `component:port`",
                    kind.as_str()
                ),
                span,
            )
            .with_context("malformed endpoints"));
        }

        let mut operands = CommArgs {
            args,
            ..CommArgs::default()
        };
        if matches!(kind, CommKind::Map | CommKind::Unmap) && self.check(TokenKind::Param) {
            self.advance();
            let (params, _) =
                self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
            operands.params = Some(params);
        }

        Ok(CommOp {
            port: None,
            kind,
            operands,
            nested: None,
            response: None,
        })
    }

    /// `-> @index [value] i` after `any from`.
    pub(crate) fn parse_index_redirect(&mut self) -> Result<Redirect, ParseError> {
        self.parse_redirect(RedirectKinds::INDEX, "any from")
    }

    /// `-> clause clause ...`, each clause at most once and only if
    /// `allowed` has it.
    fn parse_redirect(&mut self, allowed: RedirectKinds, op: &str) -> Result<Redirect, ParseError> {
        let start = self.expect(TokenKind::Arrow)?.span;
        let mut seen = RedirectKinds::empty();
        let mut items = Vec::new();
        loop {
            let flag = match self.current_kind() {
                TokenKind::Value => RedirectKinds::VALUE,
                TokenKind::Param => RedirectKinds::PARAM,
                TokenKind::Sender => RedirectKinds::SENDER,
                TokenKind::Timestamp => RedirectKinds::TIMESTAMP,
                TokenKind::Modifier if self.cursor.check_modifier("@index") => RedirectKinds::INDEX,
                _ => break,
            };
            let token = self.advance();
            let (keyword, name) = (token.span, &token.text);
            if !allowed.contains(flag) {
                return Err(ParseError::new(
                    ErrorCode::E1006,
                    format!("`{name}` redirect is not allowed for `{op}`"),
                    keyword,
                )
                .with_context("redirect not allowed here"));
            }
            if seen.contains(flag) {
                return Err(ParseError::new(
                    ErrorCode::E1006,
                    format!("duplicate `{name}` redirect"),
                    keyword,
                )
                .with_context("already redirected"));
            }
            seen |= flag;

            let item = if flag == RedirectKinds::VALUE {
                RedirectItem::Value(self.parse_value_redirect()?)
            } else if flag == RedirectKinds::PARAM {
                RedirectItem::Param(self.parse_param_redirect()?)
            } else if flag == RedirectKinds::SENDER {
                RedirectItem::Sender(self.parse_redirect_target()?)
            } else if flag == RedirectKinds::TIMESTAMP {
                RedirectItem::Timestamp(self.parse_redirect_target()?)
            } else {
                self.eat(TokenKind::Value);
                RedirectItem::Index(self.parse_redirect_target()?)
            };
            items.push(item);
        }

        if items.is_empty() {
            return Err(self.unexpected("`value`, `param`, `sender`, `timestamp` or `@index`"));
        }
        Ok(Redirect {
            items,
            span: start.merge(self.previous_span()),
        })
    }

    /// `v` or `(a := f, b := @decoded g, ...)`.
    fn parse_value_redirect(&mut self) -> Result<Vec<Expr>, ParseError> {
        if !self.check(TokenKind::LParen) {
            return Ok(vec![self.parse_redirect_target()?]);
        }
        let (items, _) =
            self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_field_redirect())?;
        Ok(items)
    }

    /// `target := [@decoded [(encoding)]] field`
    fn parse_field_redirect(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_redirect_target()?;
        self.expect(TokenKind::Assign)?;
        let value = if self.cursor.check_modifier("@decoded") {
            let start = self.advance().span;
            let encoding = if self.check(TokenKind::LParen) {
                let open = self.advance().span;
                let encoding = self.parse_expr()?;
                self.expect_closing(TokenKind::RParen, open)?;
                Some(Box::new(encoding))
            } else {
                None
            };
            let field = self.parse_postfix()?;
            let span = start.merge(field.span);
            Expr::new(
                ExprKind::Decoded {
                    encoding,
                    field: Box::new(field),
                },
                span,
            )
        } else {
            self.parse_postfix()?
        };
        let span = target.span.merge(value.span);
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        ))
    }

    /// `(a, -, b := f)`
    fn parse_param_redirect(&mut self) -> Result<Vec<Expr>, ParseError> {
        let (items, _) = self.delimited(TokenKind::LParen, TokenKind::RParen, |p| {
            let item = p.parse_expr()?;
            let ok = match &item.kind {
                ExprKind::DontCare => true,
                ExprKind::Assign { target, .. } => target.is_reference(),
                _ => item.is_reference(),
            };
            if ok {
                Ok(item)
            } else {
                Err(not_a_reference(item.span))
            }
        })?;
        Ok(items)
    }

    fn parse_redirect_target(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_postfix()?;
        if target.is_reference() {
            Ok(target)
        } else {
            Err(not_a_reference(target.span))
        }
    }
}

#[cold]
fn not_a_reference(span: Span) -> ParseError {
    ParseError::new(
        ErrorCode::E1007,
        "redirect target must be a variable reference",
        span,
    )
    .with_context("not a reference")
}
