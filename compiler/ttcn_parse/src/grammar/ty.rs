//! Type definitions and type references.
//!
//! ```text
//! typedef  = "type" ( list-def | struct-def | enum-def | port-def
//!                   | component-def | behaviour-def | subtype-def )
//! typespec = list-type | struct-type | enum-type | typeref [ "(" constraints ")" ]
//! typeref  = head { "." member | "[" expr "]" }
//! ```

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{
    Direction, EnumType, Expr, ExprKind, Field, FuncKind, ListType, PortAttrib, PortKind,
    SpecialRef, StructKind, StructType, TypeDef, TypeDefKind, TypeSpec,
};
use ttcn_ir::{Span, TokenKind};

use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a `type` definition.
    pub(crate) fn parse_type_def(&mut self) -> Result<TypeDef, ParseError> {
        let start = self.expect(TokenKind::Type)?.span;
        let kind = self.current_kind();
        let def = match kind {
            TokenKind::Record | TokenKind::Set if self.at_list_type() => {
                let list = self.parse_list_type()?;
                let name = self.expect_ident()?;
                let dims = self.parse_dims()?;
                let constraints = self.parse_opt_constraints()?;
                let length = self.parse_opt_length()?;
                TypeDef {
                    name,
                    dims,
                    kind: TypeDefKind::List {
                        list,
                        constraints,
                        length,
                    },
                    span: Span::DUMMY,
                }
            }
            TokenKind::Record | TokenKind::Set | TokenKind::Union => {
                let struct_start = self.current_span();
                let struct_kind = struct_kind(self.advance().kind);
                let name = self.expect_ident()?;
                let (fields, span) = self.parse_fields()?;
                TypeDef {
                    name,
                    dims: Default::default(),
                    kind: TypeDefKind::Struct(StructType {
                        kind: struct_kind,
                        fields,
                        span: struct_start.merge(span),
                    }),
                    span: Span::DUMMY,
                }
            }
            TokenKind::Enumerated => {
                let enum_start = self.advance().span;
                let name = self.expect_ident()?;
                let dims = self.parse_dims()?;
                let (items, span) =
                    self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| p.parse_expr())?;
                TypeDef {
                    name,
                    dims,
                    kind: TypeDefKind::Enumerated(EnumType {
                        items,
                        span: enum_start.merge(span),
                    }),
                    span: Span::DUMMY,
                }
            }
            TokenKind::Port => self.parse_port_type()?,
            TokenKind::Component => self.parse_component_type()?,
            TokenKind::Function | TokenKind::Altstep | TokenKind::Testcase => {
                let kind = match self.advance().kind {
                    TokenKind::Function => FuncKind::Function,
                    TokenKind::Altstep => FuncKind::Altstep,
                    _ => FuncKind::Testcase,
                };
                let name = self.expect_ident()?;
                let params = self.parse_formal_pars()?;
                let clauses = self.parse_behaviour_clauses()?;
                TypeDef {
                    name,
                    dims: Default::default(),
                    kind: TypeDefKind::Behaviour {
                        kind,
                        params,
                        clauses,
                    },
                    span: Span::DUMMY,
                }
            }
            _ => {
                let base = TypeSpec::Ref(self.parse_type_ref()?);
                let name = self.expect_ident()?;
                let dims = self.parse_dims()?;
                let constraints = self.parse_opt_constraints()?;
                let length = self.parse_opt_length()?;
                TypeDef {
                    name,
                    dims,
                    kind: TypeDefKind::Subtype {
                        base,
                        constraints,
                        length,
                    },
                    span: Span::DUMMY,
                }
            }
        };
        Ok(TypeDef {
            span: start.merge(self.previous_span()),
            ..def
        })
    }

    /// `type port P message|procedure|mixed { attribs }`
    fn parse_port_type(&mut self) -> Result<TypeDef, ParseError> {
        self.expect(TokenKind::Port)?;
        let name = self.expect_ident()?;
        let kind = match self.current_kind() {
            TokenKind::Message => PortKind::Message,
            TokenKind::Procedure => PortKind::Procedure,
            TokenKind::Mixed => PortKind::Mixed,
            _ => return Err(self.unexpected("`message`, `procedure` or `mixed`")),
        };
        self.advance();

        let open = self.expect(TokenKind::LBrace)?.span;
        let mut attribs = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let attrib = match self.current_kind() {
                TokenKind::Address => {
                    self.advance();
                    PortAttrib::Address(self.parse_type_spec()?)
                }
                TokenKind::In | TokenKind::Out | TokenKind::Inout => {
                    let direction = match self.advance().kind {
                        TokenKind::In => Direction::In,
                        TokenKind::Out => Direction::Out,
                        _ => Direction::InOut,
                    };
                    let mut types = vec![self.parse_type_spec()?];
                    while self.eat(TokenKind::Comma) {
                        types.push(self.parse_type_spec()?);
                    }
                    PortAttrib::Messages { direction, types }
                }
                TokenKind::Map | TokenKind::Unmap => {
                    let is_map = self.advance().kind == TokenKind::Map;
                    self.expect(TokenKind::Param)?;
                    let pars = self.parse_formal_pars()?;
                    if is_map {
                        PortAttrib::Map(pars)
                    } else {
                        PortAttrib::Unmap(pars)
                    }
                }
                _ => return Err(self.unexpected("port attribute")),
            };
            attribs.push(attrib);
        }
        self.expect_closing(TokenKind::RBrace, open)?;

        Ok(TypeDef {
            name,
            dims: Default::default(),
            kind: TypeDefKind::Port { kind, attribs },
            span: Span::DUMMY,
        })
    }

    /// `type component C [extends A, B] { defs }`
    fn parse_component_type(&mut self) -> Result<TypeDef, ParseError> {
        self.expect(TokenKind::Component)?;
        let name = self.expect_ident()?;
        let mut extends = Vec::new();
        if self.eat(TokenKind::Extends) {
            extends.push(self.parse_type_spec()?);
            while self.eat(TokenKind::Comma) {
                extends.push(self.parse_type_spec()?);
            }
        }
        let (defs, _) = self.parse_def_body()?;
        Ok(TypeDef {
            name,
            dims: Default::default(),
            kind: TypeDefKind::Component { extends, defs },
            span: Span::DUMMY,
        })
    }

    /// Parse a type where one is expected, including anonymous nested
    /// types and constrained references.
    pub(crate) fn parse_type_spec(&mut self) -> Result<TypeSpec, ParseError> {
        ensure_sufficient_stack(|| self.parse_type_spec_kind())
    }

    fn parse_type_spec_kind(&mut self) -> Result<TypeSpec, ParseError> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Record | TokenKind::Set if self.at_list_type() => {
                Ok(TypeSpec::List(Box::new(self.parse_list_type()?)))
            }
            TokenKind::Record | TokenKind::Set | TokenKind::Union => {
                let kind = struct_kind(self.advance().kind);
                let (fields, span) = self.parse_fields()?;
                Ok(TypeSpec::Struct(Box::new(StructType {
                    kind,
                    fields,
                    span: start.merge(span),
                })))
            }
            TokenKind::Enumerated => {
                self.advance();
                let (items, span) =
                    self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| p.parse_expr())?;
                Ok(TypeSpec::Enumerated(EnumType {
                    items,
                    span: start.merge(span),
                }))
            }
            _ => {
                let base = TypeSpec::Ref(self.parse_type_ref()?);
                if !self.check(TokenKind::LParen) {
                    return Ok(base);
                }
                let (constraints, span) =
                    self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
                Ok(TypeSpec::Constrained {
                    base: Box::new(base),
                    constraints,
                    span: start.merge(span),
                })
            }
        }
    }

    /// `record|set` followed by `of` or `length`.
    fn at_list_type(&self) -> bool {
        matches!(self.peek_next_kind(), TokenKind::Of | TokenKind::Length)
    }

    /// `record|set [length(n)] of T`
    fn parse_list_type(&mut self) -> Result<ListType, ParseError> {
        let start = self.current_span();
        let kind = struct_kind(self.advance().kind);
        let length = self.parse_opt_length()?;
        self.expect(TokenKind::Of)?;
        let element = self.parse_type_spec()?;
        Ok(ListType {
            kind,
            length,
            element,
            span: start.merge(self.previous_span()),
        })
    }

    /// `{ field, ... }`
    fn parse_fields(&mut self) -> Result<(Vec<Field>, Span), ParseError> {
        self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| p.parse_field())
    }

    /// `[@default] T name[dims] [(constraints)] [length(n)] [optional]`
    fn parse_field(&mut self) -> Result<Field, ParseError> {
        let start = self.current_span();
        let default = if self.cursor.check_modifier("@default") {
            self.advance();
            true
        } else {
            false
        };
        let ty = self.parse_type_spec()?;
        let name = self.expect_ident()?;
        let dims = self.parse_dims()?;
        let constraints = self.parse_opt_constraints()?;
        let length = self.parse_opt_length()?;
        let optional = self.eat(TokenKind::Optional);
        Ok(Field {
            default,
            ty,
            name,
            dims,
            constraints,
            length,
            optional,
            span: start.merge(self.previous_span()),
        })
    }

    fn parse_opt_constraints(&mut self) -> Result<Option<Vec<Expr>>, ParseError> {
        if !self.check(TokenKind::LParen) {
            return Ok(None);
        }
        let (constraints, _) =
            self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_expr())?;
        Ok(Some(constraints))
    }

    fn parse_opt_length(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check(TokenKind::Length) {
            Ok(Some(self.parse_length()?))
        } else {
            Ok(None)
        }
    }

    /// A named type: `integer`, `M.T`, `A[-]`, `universal charstring`.
    ///
    /// `self`, `address`, `default` and `timer` are keywords but name types
    /// in this position.
    pub(crate) fn parse_type_ref(&mut self) -> Result<Expr, ParseError> {
        let span = self.current_span();
        let mut expr = match self.current_kind() {
            TokenKind::Ident => Expr::new(ExprKind::Ident(self.advance().text.to_string()), span),
            TokenKind::Universal => self.parse_universal_charstring()?,
            TokenKind::SelfKw => {
                self.advance();
                Expr::new(ExprKind::Special(SpecialRef::SelfRef), span)
            }
            TokenKind::Address | TokenKind::Default | TokenKind::Timer => {
                let name = self.advance().kind.display_name();
                Expr::new(ExprKind::Ident(name.to_string()), span)
            }
            found => {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!("expected type, found {found}"),
                    span,
                )
                .with_context("expected type"));
            }
        };

        loop {
            match self.current_kind() {
                TokenKind::Dot => {
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
                _ => return Ok(expr),
            }
        }
    }
}

fn struct_kind(kind: TokenKind) -> StructKind {
    match kind {
        TokenKind::Set => StructKind::Set,
        TokenKind::Union => StructKind::Union,
        _ => StructKind::Record,
    }
}
