//! Uniform span access.

use crate::ast::{AltArm, Block, Def, Expr, Module, Node, Stmt, TypeSpec};
use crate::{Span, Token};

/// Trait for types that have a source location span.
pub trait Spanned {
    fn span(&self) -> Span;
}

macro_rules! impl_spanned {
    ($($ty:ty),* $(,)?) => {
        $(impl Spanned for $ty {
            #[inline]
            fn span(&self) -> Span {
                self.span
            }
        })*
    };
}

impl_spanned!(Token, Expr, Stmt, Block, AltArm, Def, Module);

impl Spanned for TypeSpec {
    fn span(&self) -> Span {
        TypeSpec::span(self)
    }
}

impl Spanned for Node {
    fn span(&self) -> Span {
        match self {
            Node::Module(m) => m.span,
            Node::Def(d) => d.span,
            Node::Stmt(s) => s.span,
        }
    }
}
