//! Lexer for TTCN-3 using logos.
//!
//! Produces a [`TokenList`] whose spans are global offsets: the caller passes
//! the base offset the file was registered at in its
//! [`FileSet`](ttcn_ir::FileSet). Comments and whitespace are dropped.
//! Unrecognized input becomes an [`Illegal`](TokenKind::Illegal) token plus a
//! [`LexError`], so the parser always sees the whole file.

mod keywords;
mod lex_error;

use logos::Logos;
use ttcn_ir::{Pos, Span, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos, before keyword resolution.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    #[token("/*", block_comment)]
    BlockComment,

    // Literals
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,
    #[token("\"", string_literal)]
    String,
    #[regex(r"'[^']*'[BHO]")]
    Bitstring,
    #[regex(r"@[A-Za-z_]+")]
    Modifier,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(":=")]
    Assign,
    #[token("->")]
    Arrow,
    #[token("?")]
    Question,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("&")]
    Amp,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<@")]
    Rotl,
    #[token("@>")]
    Rotr,
}

/// Consume a block comment after its opening `/*`. Comments do not nest.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Consume a string literal after its opening quote.
///
/// A doubled quote `""` stands for one quote character; backslash escapes
/// skip the following character. Strings may span lines.
fn string_literal(lex: &mut logos::Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' if bytes.get(i + 1) == Some(&b'"') => i += 2,
            b'"' => {
                lex.bump(i + 1);
                return true;
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    false
}

/// Result of lexing one source file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexOutput {
    /// Always ends with an [`Eof`](TokenKind::Eof) token.
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Lex `source` into tokens whose spans start at `base`.
pub fn lex(source: &str, base: Pos) -> LexOutput {
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = global_span(lexer.span(), base);
        let slice = lexer.slice();
        match result {
            Ok(RawToken::BlockComment) => {}
            Ok(raw) => tokens.push(Token::new(convert(raw, slice), span, slice)),
            Err(()) => {
                errors.push(LexError::classify(slice, span));
                tokens.push(Token::new(TokenKind::Illegal, span, slice));
            }
        }
    }

    let end = global_span(source.len()..source.len(), base).end;
    tokens.push(Token::eof(end));

    LexOutput { tokens, errors }
}

fn global_span(range: std::ops::Range<usize>, base: Pos) -> Span {
    let local = Span::try_from_range(range).unwrap_or(Span::new(u32::MAX, u32::MAX));
    Span::new(
        local.start.saturating_add(base),
        local.end.saturating_add(base),
    )
}

fn convert(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Ident => keywords::lookup(slice).unwrap_or(TokenKind::Ident),
        RawToken::Int => TokenKind::Int,
        RawToken::Float => TokenKind::Float,
        RawToken::String => TokenKind::String,
        RawToken::Bitstring => TokenKind::Bitstring,
        RawToken::Modifier => TokenKind::Modifier,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Question => TokenKind::Question,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Amp => TokenKind::Amp,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Rotl => TokenKind::Rotl,
        RawToken::Rotr => TokenKind::Rotr,
        // Filtered out by `lex`.
        RawToken::BlockComment => TokenKind::Illegal,
    }
}

/// Decode the contents of a string token: strip the quotes and collapse
/// doubled quotes. Backslash escapes are kept verbatim.
pub fn string_value(text: &str) -> String {
    let inner = text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(text);
    inner.replace("\"\"", "\"")
}

#[cfg(test)]
mod tests;
