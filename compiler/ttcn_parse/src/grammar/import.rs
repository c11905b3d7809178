//! Import declarations.
//!
//! ```text
//! import from M [recursive] [language "..."] ( all [except { entries }] | { entries } )
//! entry = group all [except refs] | group g [except { entries }], ...
//!       | kind all [except refs] | kind refs
//! ```

use ttcn_ir::ast::{DefSelector, Expr, GroupEntry, ImportDecl, ImportEntry, ImportSpec, Selection};
use ttcn_ir::TokenKind;

use crate::{ParseError, Parser};

/// Definition kind named by a keyword in imports and attribute scopes.
pub(crate) fn def_selector(kind: TokenKind) -> Option<DefSelector> {
    Some(match kind {
        TokenKind::Group => DefSelector::Group,
        TokenKind::Type => DefSelector::Type,
        TokenKind::Template => DefSelector::Template,
        TokenKind::Const => DefSelector::Const,
        TokenKind::Altstep => DefSelector::Altstep,
        TokenKind::Testcase => DefSelector::Testcase,
        TokenKind::Function => DefSelector::Function,
        TokenKind::Signature => DefSelector::Signature,
        TokenKind::Modulepar => DefSelector::Modulepar,
        TokenKind::Import => DefSelector::Import,
        _ => return None,
    })
}

impl Parser<'_> {
    pub(crate) fn parse_import(&mut self) -> Result<ImportDecl, ParseError> {
        let start = self.expect(TokenKind::Import)?.span;
        self.expect(TokenKind::From)?;
        let module = self.expect_ident()?;
        let recursive = self.eat(TokenKind::Recursive);
        let language = self.parse_language_spec()?;
        let spec = if self.eat(TokenKind::All) {
            let except = if self.eat(TokenKind::Except) {
                Some(self.parse_import_entries()?)
            } else {
                None
            };
            ImportSpec::All { except }
        } else {
            ImportSpec::Selective(self.parse_import_entries()?)
        };
        Ok(ImportDecl {
            module,
            recursive,
            language,
            spec,
            span: start.merge(self.previous_span()),
        })
    }

    /// `{ entry [;] entry ... }`
    fn parse_import_entries(&mut self) -> Result<Vec<ImportEntry>, ParseError> {
        let open = self.expect(TokenKind::LBrace)?.span;
        let mut entries = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.eat(TokenKind::Semicolon) {
                continue;
            }
            entries.push(self.parse_import_entry()?);
        }
        self.expect_closing(TokenKind::RBrace, open)?;
        Ok(entries)
    }

    fn parse_import_entry(&mut self) -> Result<ImportEntry, ParseError> {
        let Some(kind) = def_selector(self.current_kind()) else {
            return Err(self.unexpected("definition kind"));
        };
        self.advance();

        if kind == DefSelector::Group && !self.check(TokenKind::All) {
            let mut groups = Vec::new();
            loop {
                let name = self.parse_type_ref()?;
                let except = if self.eat(TokenKind::Except) {
                    Some(self.parse_import_entries()?)
                } else {
                    None
                };
                let span = name.span.merge(self.previous_span());
                groups.push(GroupEntry { name, except, span });
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
            return Ok(ImportEntry::Groups(groups));
        }

        let selection = self.parse_selection()?;
        Ok(ImportEntry::Kind { kind, selection })
    }

    /// `all [except refs]` or `refs`.
    pub(crate) fn parse_selection(&mut self) -> Result<Selection, ParseError> {
        if self.eat(TokenKind::All) {
            let except = if self.eat(TokenKind::Except) {
                self.parse_ref_list()?
            } else {
                Vec::new()
            };
            Ok(Selection::All { except })
        } else {
            Ok(Selection::Refs(self.parse_ref_list()?))
        }
    }

    /// `a, b.c` or `{ a, b.c }`.
    fn parse_ref_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        if self.check(TokenKind::LBrace) {
            let (refs, _) =
                self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| p.parse_type_ref())?;
            return Ok(refs);
        }
        let mut refs = vec![self.parse_type_ref()?];
        while self.eat(TokenKind::Comma) {
            refs.push(self.parse_type_ref()?);
        }
        Ok(refs)
    }
}
