//! Statement nodes.

use crate::ast::{Expr, Ident, ValueDecl};
use crate::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// `{ stmt; stmt; ... }`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AltKind {
    Alt,
    Interleave,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum StmtKind {
    Block(Block),
    /// Local `var`, `const`, `template`, `timer` or `port` declaration.
    Decl(ValueDecl),
    Expr(Expr),
    If {
        cond: Expr,
        then_block: Block,
        /// Either a plain block or a nested `if` for `else if`.
        else_branch: Option<Box<Stmt>>,
    },
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        step: Option<Expr>,
        body: Block,
    },
    While {
        cond: Expr,
        body: Block,
    },
    DoWhile {
        body: Block,
        cond: Expr,
    },
    Alt {
        kind: AltKind,
        arms: Vec<AltArm>,
    },
    /// `select [union] (e) { case (...) {...} case else {...} }`
    Select {
        union: bool,
        discriminant: Expr,
        cases: Vec<SelectCase>,
    },
    /// A guarded alternative directly inside an altstep body.
    Arm(AltArm),
    Return(Option<Expr>),
    Break,
    Continue,
    Repeat,
    Stop,
    Label(Ident),
    Goto(Ident),
}

/// Guard of an alternative.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Guard {
    /// `[]`
    Always,
    /// `[else]`
    Else,
    /// `[expr]`
    When(Expr),
}

/// `[guard] action { body }`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AltArm {
    pub guard: Guard,
    /// Receiving operation, timeout, altstep call, ...; absent for `[else]`.
    pub action: Option<Expr>,
    pub body: Option<Block>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SelectCase {
    /// `None` for `case else`.
    pub values: Option<Vec<Expr>>,
    pub body: Block,
    pub span: Span,
}
