//! Value declarations, qualifiers and array dimensions.

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{
    Declarator, Dim, Dims, EvalModifier, ExprKind, Qualifiers, Restriction, TemplateRestriction,
    ValueDecl, ValueKind,
};
use ttcn_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `var|const|template|timer|port|modulepar [quals] Type a [:= v], ...`
    pub(crate) fn parse_value_decl(&mut self) -> Result<ValueDecl, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Var => ValueKind::Var,
            TokenKind::Const => ValueKind::Const,
            TokenKind::Template => ValueKind::Template,
            TokenKind::Timer => ValueKind::Timer,
            TokenKind::Port => ValueKind::Port,
            TokenKind::Modulepar => ValueKind::ModulePar,
            _ => return Err(self.unexpected("declaration")),
        };
        self.advance();

        let mut quals = Qualifiers::default();
        if kind == ValueKind::Template {
            let restriction = if self.check(TokenKind::LParen) {
                Some(self.parse_template_restriction()?)
            } else {
                None
            };
            quals.restriction = restriction.map(|r| Restriction::Template(Some(r)));
        }
        self.parse_qualifiers(&mut quals)?;
        self.parse_value_decl_rest(kind, quals, start)
    }

    /// Type and declarators of a declaration whose keyword and qualifiers
    /// were already consumed.
    pub(crate) fn parse_value_decl_rest(
        &mut self,
        kind: ValueKind,
        quals: Qualifiers,
        start: Span,
    ) -> Result<ValueDecl, ParseError> {
        let ty = if kind == ValueKind::Timer {
            None
        } else {
            Some(self.parse_type_spec()?)
        };

        let mut params = None;
        let mut modifies = None;
        let mut declarators = Vec::new();
        loop {
            let name = self.expect_ident()?;
            let dims = self.parse_dims()?;
            if kind == ValueKind::Template && declarators.is_empty() {
                if self.check(TokenKind::LParen) {
                    params = Some(self.parse_formal_pars()?);
                }
                if self.eat(TokenKind::Modifies) {
                    modifies = Some(self.parse_postfix()?);
                }
            }
            let value = if self.eat(TokenKind::Assign) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            let span = name.span.merge(self.previous_span());
            declarators.push(Declarator {
                name,
                dims,
                value,
                span,
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }

        Ok(ValueDecl {
            kind,
            quals,
            ty,
            params,
            modifies,
            declarators,
            span: start.merge(self.previous_span()),
        })
    }

    /// `[template [(r)] | omit | value | present] [@lazy | @fuzzy]`
    ///
    /// The restriction comes first. A restriction after the modifier, or a
    /// second one of either family, is a conflict.
    pub(crate) fn parse_qualifiers(&mut self, quals: &mut Qualifiers) -> Result<(), ParseError> {
        if let Some(restriction) = self.parse_opt_restriction()? {
            set_restriction(quals, restriction, self.previous_span())?;
        }
        if self.check(TokenKind::Modifier) {
            quals.modifier = Some(self.parse_eval_modifier()?);
        }

        let span = self.current_span();
        match self.current_kind() {
            TokenKind::Template | TokenKind::Omit | TokenKind::Value | TokenKind::Present => {
                if quals.modifier.is_some() && quals.restriction.is_none() {
                    return Err(ParseError::new(
                        ErrorCode::E1009,
                        "template restriction must come before `@lazy` or `@fuzzy`",
                        span,
                    )
                    .with_context("conflicting qualifier"));
                }
                Err(conflicting(span, "template restriction"))
            }
            TokenKind::Modifier => Err(conflicting(span, "evaluation modifier")),
            _ => Ok(()),
        }
    }

    /// `template [(r)]` or bare `omit`/`value`/`present`.
    pub(crate) fn parse_opt_restriction(&mut self) -> Result<Option<Restriction>, ParseError> {
        match self.current_kind() {
            TokenKind::Template => {
                self.advance();
                let restriction = if self.check(TokenKind::LParen) {
                    Some(self.parse_template_restriction()?)
                } else {
                    None
                };
                Ok(Some(Restriction::Template(restriction)))
            }
            TokenKind::Omit | TokenKind::Value | TokenKind::Present => {
                let restriction = restriction_keyword(self.advance().kind);
                Ok(Some(Restriction::Bare(restriction)))
            }
            _ => Ok(None),
        }
    }

    /// `@lazy` or `@fuzzy`.
    fn parse_eval_modifier(&mut self) -> Result<EvalModifier, ParseError> {
        let span = self.current_span();
        let modifier = match self.current().text.as_ref() {
            "@lazy" => EvalModifier::Lazy,
            "@fuzzy" => EvalModifier::Fuzzy,
            other => {
                return Err(ParseError::new(
                    ErrorCode::E1011,
                    format!("modifier `{other}` is not allowed on a declaration"),
                    span,
                )
                .with_context("expected `@lazy` or `@fuzzy`"));
            }
        };
        self.advance();
        Ok(modifier)
    }

    /// `(omit|value|present)`
    pub(crate) fn parse_template_restriction(&mut self) -> Result<TemplateRestriction, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let restriction = match self.current_kind() {
            TokenKind::Omit | TokenKind::Value | TokenKind::Present => {
                restriction_keyword(self.advance().kind)
            }
            _ => return Err(self.unexpected("`omit`, `value` or `present`")),
        };
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(restriction)
    }

    /// Zero or more `[size]`; `[-]` leaves the size open.
    pub(crate) fn parse_dims(&mut self) -> Result<Dims, ParseError> {
        let mut dims = Dims::new();
        while self.check(TokenKind::LBracket) {
            let open = self.advance().span;
            let size = self.parse_expr()?;
            let close = self.expect_closing(TokenKind::RBracket, open)?;
            let size = match size.kind {
                ExprKind::DontCare => None,
                _ => Some(size),
            };
            dims.push(Dim {
                size,
                span: open.merge(close),
            });
        }
        Ok(dims)
    }
}

fn restriction_keyword(kind: TokenKind) -> TemplateRestriction {
    match kind {
        TokenKind::Omit => TemplateRestriction::Omit,
        TokenKind::Present => TemplateRestriction::Present,
        _ => TemplateRestriction::Value,
    }
}

fn set_restriction(
    quals: &mut Qualifiers,
    restriction: Restriction,
    span: Span,
) -> Result<(), ParseError> {
    if quals.restriction.is_some() {
        return Err(conflicting(span, "template restriction"));
    }
    quals.restriction = Some(restriction);
    Ok(())
}

#[cold]
fn conflicting(span: Span, what: &str) -> ParseError {
    ParseError::new(ErrorCode::E1009, format!("more than one {what}"), span)
        .with_context("conflicting qualifier")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_restriction_conflicts() {
        let mut quals = Qualifiers::default();
        let span = Span::new(0, 4);
        assert!(set_restriction(&mut quals, Restriction::Template(None), span).is_ok());
        let err = set_restriction(
            &mut quals,
            Restriction::Bare(TemplateRestriction::Omit),
            span,
        );
        assert_eq!(err.map_err(|e| e.code), Err(ErrorCode::E1009));
    }

    #[test]
    fn restriction_keywords() {
        assert_eq!(restriction_keyword(TokenKind::Omit), TemplateRestriction::Omit);
        assert_eq!(restriction_keyword(TokenKind::Value), TemplateRestriction::Value);
        assert_eq!(
            restriction_keyword(TokenKind::Present),
            TemplateRestriction::Present
        );
    }
}
