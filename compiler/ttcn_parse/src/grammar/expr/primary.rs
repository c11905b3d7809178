//! Primary expressions: names, literals, matching symbols, bracketed
//! lists and the template keywords.

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{
    AnyAllKind, Expr, ExprKind, ListMatchKind, Literal, Quantifier, SpecialRef,
};
use ttcn_ir::{Span, TokenKind};

use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Ident => ExprKind::Ident(self.advance().text.to_string()),
            TokenKind::Int => ExprKind::Literal(Literal::Int(self.advance().text.to_string())),
            TokenKind::Float => {
                ExprKind::Literal(Literal::Float(self.advance().text.to_string()))
            }
            TokenKind::String => {
                ExprKind::Literal(Literal::String(ttcn_lexer::string_value(&self.advance().text)))
            }
            TokenKind::Bitstring => {
                ExprKind::Literal(Literal::Bitstring(self.advance().text.to_string()))
            }
            TokenKind::True | TokenKind::False => {
                ExprKind::Bool(self.advance().kind == TokenKind::True)
            }
            TokenKind::Omit => {
                self.advance();
                ExprKind::Omit
            }
            TokenKind::Null => {
                self.advance();
                ExprKind::Null
            }
            TokenKind::Question => {
                self.advance();
                ExprKind::AnyValue
            }
            TokenKind::Star => {
                self.advance();
                ExprKind::AnyOrOmit
            }
            TokenKind::SelfKw => self.special(SpecialRef::SelfRef),
            TokenKind::Mtc => self.special(SpecialRef::Mtc),
            TokenKind::System => self.special(SpecialRef::System),
            TokenKind::Testcase => self.special(SpecialRef::Testcase),
            TokenKind::Universal => return self.parse_universal_charstring(),
            TokenKind::Any | TokenKind::All => return self.parse_quantified(),
            TokenKind::LParen => return self.parse_paren(),
            TokenKind::LBrace => {
                let (items, span) =
                    self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| p.parse_expr())?;
                return Ok(Expr::new(ExprKind::Composite(items), span));
            }
            TokenKind::Complement => return self.parse_list_match(ListMatchKind::Complement),
            TokenKind::Superset => return self.parse_list_match(ListMatchKind::Superset),
            TokenKind::Subset => return self.parse_list_match(ListMatchKind::Subset),
            TokenKind::Permutation => return self.parse_list_match(ListMatchKind::Permutation),
            TokenKind::Pattern => return self.parse_pattern(),
            TokenKind::Decmatch => return self.parse_decmatch(),
            TokenKind::Send
            | TokenKind::Receive
            | TokenKind::Trigger
            | TokenKind::Call
            | TokenKind::Getcall
            | TokenKind::Reply
            | TokenKind::Getreply
            | TokenKind::Raise
            | TokenKind::Catch
            | TokenKind::Check
            | TokenKind::Map
            | TokenKind::Unmap
            | TokenKind::Connect
            | TokenKind::Disconnect => return self.parse_comm(None),
            TokenKind::Modifier => return Err(self.misplaced_modifier()),
            TokenKind::Modifies => {
                return Err(ParseError::new(
                    ErrorCode::E1011,
                    "`modifies` is only allowed in template declarations",
                    span,
                )
                .with_context("not an expression"));
            }
            _ => {
                return Err(ParseError::new(
                    ErrorCode::E1002,
                    format!("expected expression, found {}", self.current_kind()),
                    span,
                )
                .with_context("expected expression"));
            }
        };
        Ok(Expr::new(kind, span))
    }

    fn special(&mut self, special: SpecialRef) -> ExprKind {
        self.advance();
        ExprKind::Special(special)
    }

    #[cold]
    fn misplaced_modifier(&self) -> ParseError {
        let text = &self.current().text;
        let message = if text.as_ref() == "@decoded" {
            "`@decoded` is only allowed in value redirects".to_string()
        } else {
            format!("modifier `{text}` is not allowed here")
        };
        ParseError::new(ErrorCode::E1011, message, self.current_span())
            .with_context("modifier not allowed here")
    }

    /// `universal charstring` is the only type name made of two words.
    pub(crate) fn parse_universal_charstring(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::Universal)?.span;
        let word = self.expect(TokenKind::Ident)?;
        if word.text.as_ref() != "charstring" {
            return Err(ParseError::unexpected(
                word.span,
                "`charstring`",
                TokenKind::Ident,
            ));
        }
        Ok(Expr::new(
            ExprKind::Ident("universal charstring".to_string()),
            start.merge(word.span),
        ))
    }

    /// `any port`, `all timer`, `any from c [-> @index [value] i]`.
    fn parse_quantified(&mut self) -> Result<Expr, ParseError> {
        let start = self.current_span();
        let quantifier = match self.advance().kind {
            TokenKind::All => Quantifier::All,
            _ => Quantifier::Any,
        };
        let kind = match self.current_kind() {
            TokenKind::Port => AnyAllKind::Port,
            TokenKind::Timer => AnyAllKind::Timer,
            TokenKind::Component => AnyAllKind::Component,
            TokenKind::From => return self.parse_from(quantifier, start),
            _ => return Err(self.unexpected("`port`, `timer`, `component` or `from`")),
        };
        let span = start.merge(self.advance().span);
        Ok(Expr::new(ExprKind::AnyAll { quantifier, kind }, span))
    }

    fn parse_from(&mut self, quantifier: Quantifier, start: Span) -> Result<Expr, ParseError> {
        let from = self.expect(TokenKind::From)?.span;
        if quantifier == Quantifier::All && self.context.has(ParseContext::IN_COMPLEMENT) {
            return Err(ParseError::new(
                ErrorCode::E1012,
                "`all from` is not allowed inside `complement`",
                start.merge(from),
            )
            .with_context("use `any from` or list the values"));
        }

        // The collection stops in front of a port operation, which then
        // applies to the whole `any from` expression.
        let base = self.parse_primary()?;
        let collection = self.parse_postfix_ops(base, false)?;
        if self.at_port_operation() {
            let span = start.merge(collection.span);
            let expr = Expr::new(
                ExprKind::From {
                    quantifier,
                    collection: Box::new(collection),
                    redirect: None,
                },
                span,
            );
            return self.parse_postfix_ops(expr, true);
        }

        let redirect = if self.check(TokenKind::Arrow)
            && self.cursor.peek_kind_at(1) == TokenKind::Modifier
        {
            Some(self.parse_index_redirect()?)
        } else {
            None
        };
        let end = redirect.as_ref().map_or(collection.span, |r| r.span);
        Ok(Expr::new(
            ExprKind::From {
                quantifier,
                collection: Box::new(collection),
                redirect,
            },
            start.merge(end),
        ))
    }

    /// `( e )` or a value list `( a, b, ... )`.
    fn parse_paren(&mut self) -> Result<Expr, ParseError> {
        let (mut items, span) =
            self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
        match items.len() {
            0 => Err(ParseError::new(
                ErrorCode::E1002,
                "expected expression, found )",
                self.previous_span(),
            )
            .with_context("empty parentheses")),
            1 => {
                let inner = items.remove(0);
                Ok(Expr::new(ExprKind::Paren(Box::new(inner)), span))
            }
            _ => Ok(Expr::new(ExprKind::ValueList(items), span)),
        }
    }

    fn parse_list_match(&mut self, kind: ListMatchKind) -> Result<Expr, ParseError> {
        let start = self.advance().span;
        let (items, span) = if kind == ListMatchKind::Complement {
            self.with_context(ParseContext::IN_COMPLEMENT, |p| {
                p.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())
            })?
        } else {
            // Nested lists of other kinds may use `all from` again.
            self.without_context(ParseContext::IN_COMPLEMENT, |p| {
                p.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())
            })?
        };
        Ok(Expr::new(ExprKind::ListMatch { kind, items }, start.merge(span)))
    }

    /// `pattern [@nocase] "..."`
    fn parse_pattern(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::Pattern)?.span;
        let nocase = if self.cursor.check_modifier("@nocase") {
            self.advance();
            true
        } else if self.check(TokenKind::Modifier) {
            return Err(self.misplaced_modifier());
        } else {
            false
        };
        let pattern = self.parse_string()?;
        Ok(Expr::new(
            ExprKind::Pattern { nocase, pattern },
            start.merge(self.previous_span()),
        ))
    }

    /// `decmatch [(encoding)] matcher`
    ///
    /// A parenthesized expression right after `decmatch` is the encoding
    /// only when another operand follows it.
    fn parse_decmatch(&mut self) -> Result<Expr, ParseError> {
        let start = self.expect(TokenKind::Decmatch)?.span;
        let encoding = if self.check(TokenKind::LParen) {
            self.try_parse(|p| {
                let open = p.advance().span;
                let encoding = p.parse_expr()?;
                p.expect_closing(TokenKind::RParen, open)?;
                if starts_operand(p.current_kind()) {
                    Ok(Box::new(encoding))
                } else {
                    Err(p.unexpected("template"))
                }
            })
        } else {
            None
        };
        let matcher = self.parse_unary()?;
        let span = start.merge(matcher.span);
        Ok(Expr::new(
            ExprKind::DecMatch {
                encoding,
                matcher: Box::new(matcher),
            },
            span,
        ))
    }
}

/// Token kinds that can begin the matcher of a `decmatch`.
fn starts_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String
            | TokenKind::Bitstring
            | TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::Question
            | TokenKind::Star
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Omit
            | TokenKind::Not
            | TokenKind::Not4b
            | TokenKind::Universal
            | TokenKind::Complement
            | TokenKind::Superset
            | TokenKind::Subset
            | TokenKind::Permutation
            | TokenKind::Pattern
            | TokenKind::Any
            | TokenKind::All
    )
}
