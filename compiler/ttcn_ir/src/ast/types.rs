//! Type definitions and type references.

use crate::ast::{BehaviourClauses, Def, Dims, Direction, Expr, FormalPar, FuncKind, Ident};
use crate::Span;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StructKind {
    Set,
    Record,
    Union,
}

impl StructKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            StructKind::Set => "set",
            StructKind::Record => "record",
            StructKind::Union => "union",
        }
    }
}

/// Where a type is expected.
///
/// Most of the time this is a reference (`integer`, `M.T`, `T<x>`), but field
/// and element types may also be anonymous nested types.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeSpec {
    /// Named type; `universal charstring` becomes a single identifier.
    Ref(Expr),
    /// `integer (0..255)`
    Constrained {
        base: Box<TypeSpec>,
        constraints: Vec<Expr>,
        span: Span,
    },
    List(Box<ListType>),
    Struct(Box<StructType>),
    Enumerated(EnumType),
}

impl TypeSpec {
    pub fn span(&self) -> Span {
        match self {
            TypeSpec::Ref(e) => e.span,
            TypeSpec::Constrained { span, .. } => *span,
            TypeSpec::List(l) => l.span,
            TypeSpec::Struct(s) => s.span,
            TypeSpec::Enumerated(e) => e.span,
        }
    }
}

/// `record [length(n)] of T` / `set of T`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListType {
    /// `Record` or `Set`.
    pub kind: StructKind,
    pub length: Option<Expr>,
    pub element: TypeSpec,
    pub span: Span,
}

/// `[type] F { T a optional, ... }`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StructType {
    pub kind: StructKind,
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Field {
    /// `@default` union alternative.
    pub default: bool,
    pub ty: TypeSpec,
    pub name: Ident,
    pub dims: Dims,
    pub constraints: Option<Vec<Expr>>,
    pub length: Option<Expr>,
    pub optional: bool,
    pub span: Span,
}

/// `enumerated { A, B(1), C(2..3) }`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct EnumType {
    pub items: Vec<Expr>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PortKind {
    Message,
    Procedure,
    Mixed,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PortAttrib {
    Address(TypeSpec),
    /// `in T1, T2;`
    Messages {
        direction: Direction,
        types: Vec<TypeSpec>,
    },
    /// `map param (...)`
    Map(Vec<FormalPar>),
    /// `unmap param (...)`
    Unmap(Vec<FormalPar>),
}

/// `type ... Name ...`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeDef {
    pub name: Ident,
    /// Array dimensions of a subtype, `type integer A[2]`.
    pub dims: Dims,
    pub kind: TypeDefKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeDefKind {
    /// `type integer Byte (0..255) length(1)`
    Subtype {
        base: TypeSpec,
        constraints: Option<Vec<Expr>>,
        length: Option<Expr>,
    },
    /// `type record length(4) of integer Quad (...) length(4)`
    List {
        list: ListType,
        constraints: Option<Vec<Expr>>,
        length: Option<Expr>,
    },
    Struct(StructType),
    Enumerated(EnumType),
    Port {
        kind: PortKind,
        attribs: Vec<PortAttrib>,
    },
    Component {
        extends: Vec<TypeSpec>,
        defs: Vec<Def>,
    },
    /// `type function F(...) runs on C return T`
    Behaviour {
        kind: FuncKind,
        params: Vec<FormalPar>,
        clauses: BehaviourClauses,
    },
}
