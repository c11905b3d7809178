//! Functions, testcases, altsteps and signatures.

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{BehaviourClauses, FuncDecl, FuncKind, ReturnSpec, TypeSpec};
use ttcn_ir::{Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a function, testcase, altstep or signature definition.
    ///
    /// `external` and visibility prefixes are reported and skipped, and an
    /// external function may then omit its body.
    pub(crate) fn parse_func_decl(&mut self) -> Result<FuncDecl, ParseError> {
        let start = self.current_span();
        let mut external = false;
        loop {
            let what = match self.current_kind() {
                TokenKind::External => {
                    external = true;
                    "external functions"
                }
                TokenKind::Public | TokenKind::Private => "visibility modifiers",
                _ => break,
            };
            let span = self.advance().span;
            self.error(&ParseError::unsupported(span, what));
        }

        let kind = match self.current_kind() {
            TokenKind::Function => FuncKind::Function,
            TokenKind::Testcase => FuncKind::Testcase,
            TokenKind::Altstep => FuncKind::Altstep,
            TokenKind::Signature => FuncKind::Signature,
            _ => return Err(self.unexpected("`function`, `testcase`, `altstep` or `signature`")),
        };
        self.advance();

        let name = self.expect_ident()?;
        let modifier = self.parse_opt_modifier("@deterministic", "a behaviour")?;
        let params = self.parse_formal_pars()?;

        let mut clauses = BehaviourClauses::default();
        let mut exceptions = Vec::new();
        let mut noblock = false;
        loop {
            if self.parse_behaviour_clause(&mut clauses)? {
                continue;
            }
            match self.current_kind() {
                TokenKind::Noblock if kind == FuncKind::Signature => {
                    self.advance();
                    noblock = true;
                }
                TokenKind::Exception if kind == FuncKind::Signature => {
                    self.advance();
                    let (types, _) = self.delimited(TokenKind::LParen, TokenKind::RParen, |p| {
                        p.parse_type_spec()
                    })?;
                    exceptions = types;
                }
                _ => break,
            }
        }

        let body = match kind {
            FuncKind::Signature => None,
            _ if external && !self.check(TokenKind::LBrace) => None,
            FuncKind::Altstep => Some(self.parse_altstep_body()?),
            FuncKind::Function | FuncKind::Testcase => Some(self.parse_block()?),
        };

        Ok(FuncDecl {
            kind,
            name,
            modifier,
            params,
            clauses,
            exceptions,
            noblock,
            body,
            span: start.merge(self.previous_span()),
        })
    }

    /// `runs on T`, `mtc T`, `system T` and `return [restriction] T` in
    /// any order.
    pub(crate) fn parse_behaviour_clauses(&mut self) -> Result<BehaviourClauses, ParseError> {
        let mut clauses = BehaviourClauses::default();
        while self.parse_behaviour_clause(&mut clauses)? {}
        Ok(clauses)
    }

    /// Parse one clause into `clauses`; returns `false` if none starts here.
    fn parse_behaviour_clause(
        &mut self,
        clauses: &mut BehaviourClauses,
    ) -> Result<bool, ParseError> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Runs => {
                self.advance();
                self.expect(TokenKind::On)?;
                let ty = self.parse_type_spec()?;
                set_clause(&mut clauses.runs_on, ty, "runs on", start)?;
            }
            TokenKind::Mtc => {
                self.advance();
                let ty = self.parse_type_spec()?;
                set_clause(&mut clauses.mtc, ty, "mtc", start)?;
            }
            TokenKind::System => {
                self.advance();
                let ty = self.parse_type_spec()?;
                set_clause(&mut clauses.system, ty, "system", start)?;
            }
            TokenKind::Return => {
                self.advance();
                let restriction = self.parse_opt_restriction()?;
                let ty = self.parse_type_spec()?;
                if clauses.returns.is_some() {
                    return Err(duplicate_clause("return", start));
                }
                clauses.returns = Some(ReturnSpec {
                    restriction,
                    ty,
                    span: start.merge(self.previous_span()),
                });
            }
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn set_clause(
    slot: &mut Option<TypeSpec>,
    ty: TypeSpec,
    clause: &str,
    span: Span,
) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(duplicate_clause(clause, span));
    }
    *slot = Some(ty);
    Ok(())
}

#[cold]
fn duplicate_clause(clause: &str, span: Span) -> ParseError {
    ParseError::new(ErrorCode::E1009, format!("duplicate `{clause}` clause"), span)
        .with_context("already given")
}
