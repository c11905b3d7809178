//! Modules, module definitions, groups and the control part.

use ttcn_diagnostic::ErrorCode;
use ttcn_ir::ast::{Def, DefKind, Module, Qualifiers, ValueDecl, ValueKind};
use ttcn_ir::{Span, TokenKind};

use crate::recovery::DEF_BOUNDARY;
use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `module Name [language "..."] { defs } [with {...}]`
    pub(crate) fn parse_module(&mut self) -> Result<Module, ParseError> {
        let start = self.expect(TokenKind::Module)?.span;
        let name = self.expect_ident()?;
        let language = self.parse_language_spec()?;
        let (defs, _) = self.parse_def_body()?;
        let with = self.parse_opt_with()?;
        Ok(Module {
            name,
            language,
            defs,
            with,
            span: start.merge(self.previous_span()),
        })
    }

    /// `{ def; def; ... }` of modules, groups and component types.
    ///
    /// A definition that fails to parse is reported and skipped.
    pub(crate) fn parse_def_body(&mut self) -> Result<(Vec<Def>, Span), ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut defs = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() && !self.should_stop() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let start = self.cursor.position();
            match self.parse_module_def() {
                Ok(def) => defs.push(def),
                Err(err) => self.recover(&err, start, DEF_BOUNDARY),
            }
        }
        let close = self.expect_closing(TokenKind::RBrace, open)?;
        Ok((defs, open.merge(close)))
    }

    /// Parse one module definition and its `with` attributes.
    pub(crate) fn parse_module_def(&mut self) -> Result<Def, ParseError> {
        ensure_sufficient_stack(|| self.parse_module_def_kind())
    }

    fn parse_module_def_kind(&mut self) -> Result<Def, ParseError> {
        let start = self.current_span();
        while matches!(self.current_kind(), TokenKind::Public | TokenKind::Private) {
            let span = self.advance().span;
            self.error(&ParseError::unsupported(span, "visibility modifiers"));
        }

        let kind = match self.current_kind() {
            TokenKind::Import => DefKind::Import(self.parse_import()?),
            TokenKind::Type => DefKind::Type(self.parse_type_def()?),
            TokenKind::Const
            | TokenKind::Template
            | TokenKind::Var
            | TokenKind::Timer
            | TokenKind::Port => DefKind::Value(self.parse_value_decl()?),
            TokenKind::Modulepar if self.peek_next_kind() == TokenKind::LBrace => {
                DefKind::ModuleParGroup(self.parse_modulepar_group()?)
            }
            TokenKind::Modulepar => DefKind::Value(self.parse_value_decl()?),
            TokenKind::Function
            | TokenKind::Testcase
            | TokenKind::Altstep
            | TokenKind::Signature
            | TokenKind::External => DefKind::Func(self.parse_func_decl()?),
            TokenKind::Group => {
                self.advance();
                let name = self.expect_ident()?;
                let (defs, _) = self.parse_def_body()?;
                DefKind::Group { name, defs }
            }
            TokenKind::Control => {
                self.advance();
                DefKind::Control(self.parse_block()?)
            }
            TokenKind::Friend => return Err(self.parse_friend()),
            found => {
                return Err(ParseError::new(
                    ErrorCode::E1013,
                    format!("expected definition, found {found}"),
                    self.current_span(),
                )
                .with_context("expected definition"));
            }
        };

        let with = self.parse_opt_with()?;
        Ok(Def {
            kind,
            with,
            span: start.merge(self.previous_span()),
        })
    }

    /// Skip `friend module a, b` and return the error to report for it.
    fn parse_friend(&mut self) -> ParseError {
        let start = self.advance().span;
        if self.eat(TokenKind::Module) {
            while self.eat(TokenKind::Ident) && self.eat(TokenKind::Comma) {}
        }
        ParseError::unsupported(start.merge(self.previous_span()), "friend declarations")
    }

    /// `modulepar { T a := 1; T b, c; }`
    fn parse_modulepar_group(&mut self) -> Result<Vec<ValueDecl>, ParseError> {
        self.expect(TokenKind::Modulepar)?;
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut decls = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let start = self.current_span();
            decls.push(self.parse_value_decl_rest(ValueKind::ModulePar, Qualifiers::default(), start)?);
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(decls)
    }
}
