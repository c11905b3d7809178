//! Formal parameter lists.

use ttcn_ir::ast::{Direction, FormalPar, Qualifiers};
use ttcn_ir::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `( par, par, ... )`, possibly empty.
    pub(crate) fn parse_formal_pars(&mut self) -> Result<Vec<FormalPar>, ParseError> {
        let (pars, _) =
            self.delimited(TokenKind::LParen, TokenKind::RParen, |p| p.parse_formal_par())?;
        Ok(pars)
    }

    /// `[in|out|inout] [quals] Type name[dims] [:= default]`
    fn parse_formal_par(&mut self) -> Result<FormalPar, ParseError> {
        let start = self.current_span();
        let direction = match self.current_kind() {
            TokenKind::In => Some(Direction::In),
            TokenKind::Out => Some(Direction::Out),
            TokenKind::Inout => Some(Direction::InOut),
            _ => None,
        };
        if direction.is_some() {
            self.advance();
        }

        let mut quals = Qualifiers::default();
        self.parse_qualifiers(&mut quals)?;
        let ty = self.parse_type_spec()?;
        let name = self.expect_ident()?;
        let dims = self.parse_dims()?;
        let default = if self.eat(TokenKind::Assign) {
            Some(self.parse_expr()?)
        } else {
            None
        };

        Ok(FormalPar {
            direction,
            quals,
            ty,
            name,
            dims,
            default,
            span: start.merge(self.previous_span()),
        })
    }
}
