//! Recursive descent parser for TTCN-3.
//!
//! Turns source text into the syntax tree defined in [`ttcn_ir::ast`].
//! Every entry point registers the source in a shared [`FileSet`], lexes it,
//! runs one grammar rule and returns either the tree or every diagnostic of
//! the unit, sorted by position. There is no partial success.
//!
//! Errors inside lists (module bodies, blocks, alternatives) are reported
//! and parsing resumes at the next definition or statement boundary, so a
//! single run reports all independent errors.

mod context;
mod cursor;
mod error;
mod grammar;
mod recovery;
mod snapshot;
mod stack;

#[cfg(test)]
mod tests;

use rayon::prelude::*;
use tracing::debug;
use ttcn_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use ttcn_ir::ast::{Def, Expr, FormalPar, FuncDecl, Module, Node, Stmt, TypeDef, ValueDecl, WithStmt};
use ttcn_ir::{FileSet, SourceFile, Span, Token, TokenKind, TokenList};

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet};
pub use snapshot::ParserSnapshot;
pub use ttcn_diagnostic::{DiagnosticConfig, ParseErrors};

/// Parser configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParserConfig {
    pub diagnostics: DiagnosticConfig,
}

impl ParserConfig {
    /// One syntax error per line and at most ten in total.
    pub fn compact() -> Self {
        ParserConfig {
            diagnostics: DiagnosticConfig::compact(),
        }
    }
}

/// Parser state.
///
/// Owns the diagnostic queue for one unit; productions reach it through
/// `&mut self`, so independent units can be parsed on different threads.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    file: &'a SourceFile,
    diagnostics: DiagnosticQueue,
    context: ParseContext,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which were lexed from `file`.
    pub fn new(tokens: &'a TokenList, file: &'a SourceFile, config: &ParserConfig) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            file,
            diagnostics: DiagnosticQueue::with_config(config.diagnostics.clone()),
            context: ParseContext::NONE,
        }
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn peek_next_kind(&self) -> TokenKind {
        self.cursor.peek_next_kind()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        self.cursor.expect(kind)
    }

    #[inline]
    fn expect_ident(&mut self) -> Result<ttcn_ir::ast::Ident, ParseError> {
        self.cursor.expect_ident()
    }

    /// Expect the closing `kind` of a pair opened at `open`.
    fn expect_closing(&mut self, kind: TokenKind, open: Span) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(ParseError::unclosed(
                open,
                self.current_span(),
                kind,
                self.current_kind(),
            ))
        }
    }

    /// "expected X" at the current token.
    #[cold]
    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::unexpected(self.current_span(), expected, self.current_kind())
    }

    // Context and snapshots

    /// Run `f` with `flag` added to the parse context.
    fn with_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.with(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    /// Run `f` with `flag` removed from the parse context.
    fn without_context<T>(&mut self, flag: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.context;
        self.context = saved.without(flag);
        let result = f(self);
        self.context = saved;
        result
    }

    #[inline]
    fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.cursor.position(), self.context)
    }

    #[inline]
    fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.context = snapshot.context;
    }

    /// Run `f`; on failure rewind to where it started and return `None`.
    fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Option<T> {
        let snapshot = self.snapshot();
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.restore(snapshot);
                None
            }
        }
    }

    // Diagnostics

    /// Record a diagnostic, resolving its position through the source file.
    fn report(&mut self, diag: Diagnostic) {
        let offset = diag.primary_span().unwrap_or(Span::DUMMY).start;
        let line = self.file.line(offset);
        let diag = diag.with_position(Some(self.file.position(offset)));
        if !self.diagnostics.add(diag, line) {
            debug!(line, "diagnostic filtered");
        }
    }

    fn error(&mut self, err: &ParseError) {
        debug!(code = %err.code, span = %err.span, "{}", err.message);
        self.report(err.to_diagnostic());
    }

    /// Whether list loops should stop because the error limit was hit.
    #[inline]
    fn should_stop(&self) -> bool {
        self.diagnostics.limit_reached()
    }

    /// Report `err` and skip to the next token in `set`, and past it if it
    /// is a `;`.
    ///
    /// Always makes progress: if the error left the cursor where the failed
    /// production started, at least one token is skipped.
    fn recover(&mut self, err: &ParseError, start: usize, set: TokenSet) {
        self.error(err);
        if self.cursor.position() == start && !self.is_at_end() {
            self.advance();
        }
        let skipped = recovery::synchronize(&mut self.cursor, set);
        debug!(skipped, resume = %self.current_kind(), "recovered");
        self.eat(TokenKind::Semicolon);
    }

    /// Finish parsing and return every diagnostic, sorted by position.
    pub fn finish(mut self) -> Vec<Diagnostic> {
        self.diagnostics.flush()
    }

    /// Parse a whole unit.
    ///
    /// A unit starting with `module` is a sequence of modules. Anything else
    /// is a sequence of module definitions and statements, as typed into an
    /// interactive session.
    pub fn parse_nodes(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        while !self.is_at_end() && !self.should_stop() {
            let start = self.cursor.position();
            let result = match self.current_kind() {
                TokenKind::Module => self.parse_module().map(Node::Module),
                TokenKind::Semicolon => {
                    self.advance();
                    continue;
                }
                // `testcase.stop`
                TokenKind::Testcase if self.peek_next_kind() == TokenKind::Dot => {
                    self.parse_stmt().map(Node::Stmt)
                }
                kind if recovery::DEF_START.contains(kind) => {
                    self.parse_module_def().map(Node::Def)
                }
                _ => self.parse_stmt().map(Node::Stmt),
            };
            match result {
                Ok(node) => nodes.push(node),
                Err(err) => self.recover(&err, start, recovery::TOP_BOUNDARY),
            }
        }
        nodes
    }
}

// Entry points

/// Lex `src` as unit `name`, run `rule` and collect the diagnostics.
fn run<T>(
    fset: &FileSet,
    name: &str,
    src: &str,
    config: &ParserConfig,
    rule: impl FnOnce(&mut Parser<'_>) -> Option<T>,
) -> Result<T, ParseErrors> {
    let file = fset.add_file(name, src).map_err(|err| {
        ParseErrors::new(vec![Diagnostic::error(ErrorCode::E9001)
            .with_message(format!("cannot register `{name}`: {err}"))])
    })?;
    let lexed = ttcn_lexer::lex(src, file.base());
    let mut parser = Parser::new(&lexed.tokens, &file, config);
    for err in &lexed.errors {
        parser.report(err.to_diagnostic());
    }

    let result = rule(&mut parser);
    let diagnostics = parser.finish();
    match result {
        Some(value) if !diagnostics.iter().any(Diagnostic::is_error) => Ok(value),
        Some(_) | None => Err(ParseErrors::new(diagnostics)),
    }
}

/// Run a single grammar rule that must span the whole input.
///
/// A trailing `;` is accepted, so `var int x;` parses as a declaration.
fn run_fragment<T>(
    fset: &FileSet,
    name: &str,
    src: &str,
    rule: impl FnOnce(&mut Parser<'_>) -> Result<T, ParseError>,
) -> Result<T, ParseErrors> {
    run(fset, name, src, &ParserConfig::default(), |p| {
        let value = match rule(p) {
            Ok(value) => value,
            Err(err) => {
                p.error(&err);
                return None;
            }
        };
        p.eat(TokenKind::Semicolon);
        if !p.is_at_end() {
            let err = ParseError::new(
                ErrorCode::E1015,
                format!("unexpected {} after end of input", p.current_kind()),
                p.current_span(),
            )
            .with_context("trailing input");
            p.error(&err);
        }
        Some(value)
    })
}

/// Parse a unit into its top-level nodes.
///
/// Zero nodes and zero diagnostics is a successful parse of an empty unit.
pub fn parse(fset: &FileSet, name: &str, src: &str) -> Result<Vec<Node>, ParseErrors> {
    parse_with_config(fset, name, src, &ParserConfig::default())
}

pub fn parse_with_config(
    fset: &FileSet,
    name: &str,
    src: &str,
    config: &ParserConfig,
) -> Result<Vec<Node>, ParseErrors> {
    run(fset, name, src, config, |p| Some(p.parse_nodes()))
}

/// Parse independent units in parallel.
///
/// Results are in the order of `units`. All units share `fset`, so their
/// positions stay comparable.
pub fn parse_units(
    fset: &FileSet,
    units: &[(String, String)],
    config: &ParserConfig,
) -> Vec<Result<Vec<Node>, ParseErrors>> {
    units
        .par_iter()
        .map(|(name, src)| parse_with_config(fset, name, src, config))
        .collect()
}

pub fn parse_module(fset: &FileSet, name: &str, src: &str) -> Result<Module, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_module())
}

pub fn parse_module_def(fset: &FileSet, name: &str, src: &str) -> Result<Def, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_module_def())
}

/// Parse a `var`, `const`, `template`, `timer`, `port` or `modulepar`
/// declaration.
pub fn parse_decl(fset: &FileSet, name: &str, src: &str) -> Result<ValueDecl, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_value_decl())
}

/// Parse a function, testcase, altstep or signature.
pub fn parse_func_decl(fset: &FileSet, name: &str, src: &str) -> Result<FuncDecl, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_func_decl())
}

pub fn parse_stmt(fset: &FileSet, name: &str, src: &str) -> Result<Stmt, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_stmt())
}

/// Parse a comma separated list of expressions.
pub fn parse_expr_list(fset: &FileSet, name: &str, src: &str) -> Result<Vec<Expr>, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_expr_list())
}

/// Parse a `type` definition.
pub fn parse_type(fset: &FileSet, name: &str, src: &str) -> Result<TypeDef, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_type_def())
}

/// Parse a parenthesized formal parameter list.
pub fn parse_parameters(
    fset: &FileSet,
    name: &str,
    src: &str,
) -> Result<Vec<FormalPar>, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_formal_pars())
}

/// Parse one statement of a `with { ... }` block.
pub fn parse_with_stmt(fset: &FileSet, name: &str, src: &str) -> Result<WithStmt, ParseErrors> {
    run_fragment(fset, name, src, |p| p.parse_with_stmt())
}
