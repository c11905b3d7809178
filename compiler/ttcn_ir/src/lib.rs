//! TTCN-3 IR - shared front-end data structures
//!
//! This crate contains the types every other front-end crate agrees on:
//! - Spans and the [`FileSet`] that maps them back to `file:line:column`
//! - Tokens and [`TokenList`] for lexer output
//! - The syntax tree ([`ast`]) and a [`visitor`] over it
//!
//! Every type is `Clone + Eq + Hash + Debug`, so parse results can be
//! compared in tests and cached by callers.

pub mod ast;
mod source;
mod span;
mod token;
mod traits;
pub mod visitor;

pub use source::{FileSet, Position, SourceFile};
pub use span::{Pos, Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
pub use traits::Spanned;
