//! Statements and blocks.

use ttcn_ir::ast::{AltKind, Block, Expr, Stmt, StmtKind};
use ttcn_ir::TokenKind;

use crate::recovery::STMT_BOUNDARY;
use crate::stack::ensure_sufficient_stack;
use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement and its terminator.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        let stmt = ensure_sufficient_stack(|| self.parse_stmt_kind())?;
        self.expect_terminator()?;
        Ok(stmt)
    }

    fn parse_stmt_kind(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::Var
            | TokenKind::Const
            | TokenKind::Template
            | TokenKind::Timer
            | TokenKind::Port => StmtKind::Decl(self.parse_value_decl()?),
            TokenKind::If => return self.parse_if(),
            TokenKind::For => self.parse_for()?,
            TokenKind::While => {
                self.advance();
                let cond = self.parse_condition()?;
                let body = self.parse_block()?;
                StmtKind::While { cond, body }
            }
            TokenKind::Do => {
                self.advance();
                let body = self.parse_block()?;
                self.expect(TokenKind::While)?;
                let cond = self.parse_condition()?;
                StmtKind::DoWhile { body, cond }
            }
            TokenKind::Alt | TokenKind::Interleave => {
                let kind = if self.advance().kind == TokenKind::Alt {
                    AltKind::Alt
                } else {
                    AltKind::Interleave
                };
                let (arms, _) = self.parse_alt_body()?;
                StmtKind::Alt { kind, arms }
            }
            TokenKind::Select => self.parse_select()?,
            TokenKind::Return => {
                self.advance();
                if self.at_stmt_end() {
                    StmtKind::Return(None)
                } else {
                    StmtKind::Return(Some(self.parse_expr()?))
                }
            }
            TokenKind::Break => self.keyword_stmt(StmtKind::Break),
            TokenKind::Continue => self.keyword_stmt(StmtKind::Continue),
            TokenKind::Repeat => self.keyword_stmt(StmtKind::Repeat),
            TokenKind::Stop => self.keyword_stmt(StmtKind::Stop),
            TokenKind::Label => {
                self.advance();
                StmtKind::Label(self.expect_ident()?)
            }
            TokenKind::Goto => {
                self.advance();
                StmtKind::Goto(self.expect_ident()?)
            }
            TokenKind::LBracket if self.context.has(ParseContext::IN_ALTSTEP) => {
                StmtKind::Arm(self.parse_alt_arm()?)
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        Ok(Stmt::new(kind, start.merge(self.previous_span())))
    }

    fn keyword_stmt(&mut self, kind: StmtKind) -> StmtKind {
        self.advance();
        kind
    }

    fn at_stmt_end(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        )
    }

    /// `( expr )`
    fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(TokenKind::LParen)?.span;
        let cond = self.parse_expr()?;
        self.expect_closing(TokenKind::RParen, open)?;
        Ok(cond)
    }

    /// `if (c) {...} [else if ... | else {...}]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.expect(TokenKind::If)?.span;
        let cond = self.parse_condition()?;
        let then_block = self.parse_block()?;
        let else_branch = if self.eat(TokenKind::Else) {
            let branch = if self.check(TokenKind::If) {
                ensure_sufficient_stack(|| self.parse_if())?
            } else {
                let block = self.parse_block()?;
                let span = block.span;
                Stmt::new(StmtKind::Block(block), span)
            };
            Some(Box::new(branch))
        } else {
            None
        };
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_block,
                else_branch,
            },
            start.merge(self.previous_span()),
        ))
    }

    /// `for (init; cond; step) {...}`, each header part optional.
    fn parse_for(&mut self) -> Result<StmtKind, ParseError> {
        self.expect(TokenKind::For)?;
        let open = self.expect(TokenKind::LParen)?.span;

        let init = match self.current_kind() {
            TokenKind::Semicolon => None,
            TokenKind::Var => {
                let start = self.current_span();
                let decl = self.parse_value_decl()?;
                Some(Box::new(Stmt::new(
                    StmtKind::Decl(decl),
                    start.merge(self.previous_span()),
                )))
            }
            _ => {
                let expr = self.parse_expr()?;
                let span = expr.span;
                Some(Box::new(Stmt::new(StmtKind::Expr(expr), span)))
            }
        };
        self.expect(TokenKind::Semicolon)?;

        let cond = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect(TokenKind::Semicolon)?;

        let step = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect_closing(TokenKind::RParen, open)?;

        let body = self.parse_block()?;
        Ok(StmtKind::For {
            init,
            cond,
            step,
            body,
        })
    }

    /// Parse a statement block.
    ///
    /// Guarded alternatives are not statements in nested blocks, even
    /// inside an altstep.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.without_context(ParseContext::IN_ALTSTEP, |p| p.parse_block_stmts())
    }

    /// Parse the body of an altstep, where `[guard] action` is a statement.
    pub(crate) fn parse_altstep_body(&mut self) -> Result<Block, ParseError> {
        self.with_context(ParseContext::IN_ALTSTEP, |p| p.parse_block_stmts())
    }

    fn parse_block_stmts(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut stmts = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() && !self.should_stop() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            let start = self.cursor.position();
            match self.parse_stmt() {
                Ok(stmt) => stmts.push(stmt),
                Err(err) => self.recover(&err, start, STMT_BOUNDARY),
            }
        }
        let close = self.expect_closing(TokenKind::RBrace, open)?;
        Ok(Block {
            stmts,
            span: open.merge(close),
        })
    }
}
