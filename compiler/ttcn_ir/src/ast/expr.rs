//! Expression nodes.
//!
//! Covers plain operator expressions as well as the template forms that make
//! TTCN-3 expressions unusual: matching symbols (`?`, `*`, `-`), value lists,
//! `any from`, `decmatch`, and communication operations, which appear in
//! expression position (`p.receive(t) -> value v`).

use crate::ast::AltArm;
use crate::Span;

/// An identifier with its span.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// Literal values, kept as source text.
///
/// Integers are arbitrary precision in TTCN-3, so the text is not converted
/// here; that is the evaluator's job.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    Int(String),
    Float(String),
    /// String contents without the surrounding quotes.
    String(String),
    /// `'1001'B`, `'AF'H`, `'00FF'O` including quotes and suffix.
    Bitstring(String),
}

/// References that are spelled as keywords.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpecialRef {
    SelfRef,
    Mtc,
    System,
    /// `testcase` in `testcase.stop`.
    Testcase,
}

/// `any` / `all` in `any port`, `all component`, `any from`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quantifier {
    Any,
    All,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AnyAllKind {
    Port,
    Timer,
    Component,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Neg,
    Pos,
    Not,
    Not4b,
}

impl UnaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Not => "not",
            UnaryOp::Not4b => "not4b",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    /// `lo .. hi`
    Range,
    Or,
    Xor,
    And,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Shl,
    Shr,
    Rotl,
    Rotr,
    Or4b,
    Xor4b,
    And4b,
    Add,
    Sub,
    /// `&` string concatenation.
    Concat,
    Mul,
    Div,
    Mod,
    Rem,
}

impl BinaryOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Range => "..",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::And => "and",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Rotl => "<@",
            BinaryOp::Rotr => "@>",
            BinaryOp::Or4b => "or4b",
            BinaryOp::Xor4b => "xor4b",
            BinaryOp::And4b => "and4b",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Concat => "&",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "mod",
            BinaryOp::Rem => "rem",
        }
    }
}

/// `complement(...)`, `superset(...)`, `subset(...)`, `permutation(...)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ListMatchKind {
    Complement,
    Superset,
    Subset,
    Permutation,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Check whether this expression names a storage location
    /// (`x`, `x.f`, `x[1]`), which is what redirect targets must be.
    pub fn is_reference(&self) -> bool {
        match &self.kind {
            ExprKind::Ident(_) => true,
            ExprKind::Selector { base, .. } | ExprKind::Index { base, .. } => base.is_reference(),
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    Ident(String),
    Literal(Literal),
    Bool(bool),
    Omit,
    Null,
    /// `-`: not used / don't care.
    DontCare,
    /// `?`
    AnyValue,
    /// `*`
    AnyOrOmit,
    Special(SpecialRef),
    /// `any port`, `all timer`, ...
    AnyAll {
        quantifier: Quantifier,
        kind: AnyAllKind,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `target := value`, also used for field assignments in composites.
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `qualifier : value`, as in `system:p` or `charstring:"x"`.
    Qualified {
        qualifier: Box<Expr>,
        value: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        /// Modifier between callee and arguments: `regexp @nocase(...)`.
        modifier: Option<String>,
        args: Vec<Expr>,
    },
    Index {
        base: Box<Expr>,
        index: Box<Expr>,
    },
    Selector {
        base: Box<Expr>,
        field: Ident,
    },
    /// `{ ... }`
    Composite(Vec<Expr>),
    /// `( a, b, ... )` with two or more entries.
    ValueList(Vec<Expr>),
    Paren(Box<Expr>),
    /// `t length(n)`
    Length {
        template: Box<Expr>,
        length: Box<Expr>,
    },
    /// `t ifpresent`
    IfPresent(Box<Expr>),
    ListMatch {
        kind: ListMatchKind,
        items: Vec<Expr>,
    },
    Pattern {
        nocase: bool,
        pattern: String,
    },
    /// `any from c` / `all from c`, with optional `-> @index` redirect.
    From {
        quantifier: Quantifier,
        collection: Box<Expr>,
        redirect: Option<Redirect>,
    },
    /// `decmatch [(encoding)] matcher`
    DecMatch {
        encoding: Option<Box<Expr>>,
        matcher: Box<Expr>,
    },
    /// `@decoded [(encoding)] field`; only produced inside value redirects.
    Decoded {
        encoding: Option<Box<Expr>>,
        field: Box<Expr>,
    },
    /// `C.create[(args)] [alive]`
    Create {
        component: Box<Expr>,
        args: Vec<Expr>,
        alive: bool,
    },
    Comm(Box<CommOp>),
    /// Placeholder for a subexpression that failed to parse.
    Error,
}

/// Communication and configuration operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CommKind {
    Send,
    Receive,
    Trigger,
    Call,
    Getcall,
    Reply,
    Getreply,
    Raise,
    Catch,
    Check,
    Map,
    Unmap,
    Connect,
    Disconnect,
}

impl CommKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommKind::Send => "send",
            CommKind::Receive => "receive",
            CommKind::Trigger => "trigger",
            CommKind::Call => "call",
            CommKind::Getcall => "getcall",
            CommKind::Reply => "reply",
            CommKind::Getreply => "getreply",
            CommKind::Raise => "raise",
            CommKind::Catch => "catch",
            CommKind::Check => "check",
            CommKind::Map => "map",
            CommKind::Unmap => "unmap",
            CommKind::Connect => "connect",
            CommKind::Disconnect => "disconnect",
        }
    }
}

/// Operands shared by all communication operations. Which of them may be
/// present depends on the operation.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct CommArgs {
    /// Parenthesized arguments: template, signature, timeout or endpoints.
    pub args: Vec<Expr>,
    /// `getreply(t value v)` value match.
    pub value_match: Option<Box<Expr>>,
    /// `to` clause of outgoing operations.
    pub to: Option<Box<Expr>>,
    /// `from` clause of incoming operations.
    pub from: Option<Box<Expr>>,
    /// `param (...)` of map/unmap.
    pub params: Option<Vec<Expr>>,
    pub redirect: Option<Redirect>,
}

/// A communication operation such as `p.receive(t) from c -> value v`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CommOp {
    /// Port (or component/timer) the operation is applied to.
    pub port: Option<Box<Expr>>,
    pub kind: CommKind,
    pub operands: CommArgs,
    /// Receive-like operation inside `check(...)`.
    pub nested: Option<Box<CommOp>>,
    /// Response alternatives of a blocking `call`.
    pub response: Option<Vec<AltArm>>,
}

/// `-> value v sender s ...`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Redirect {
    pub items: Vec<RedirectItem>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum RedirectItem {
    /// `value v`, or `value (a := f, b := @decoded g)` as assignments.
    Value(Vec<Expr>),
    /// `param (a, b := f, -)`
    Param(Vec<Expr>),
    Sender(Expr),
    Timestamp(Expr),
    /// `@index [value] i`
    Index(Expr),
}

impl RedirectItem {
    pub const fn name(&self) -> &'static str {
        match self {
            RedirectItem::Value(_) => "value",
            RedirectItem::Param(_) => "param",
            RedirectItem::Sender(_) => "sender",
            RedirectItem::Timestamp(_) => "timestamp",
            RedirectItem::Index(_) => "@index",
        }
    }
}
