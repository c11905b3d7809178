//! Syntax tree for TTCN-3.
//!
//! The tree is owned: children are boxed or stored in vectors, and every
//! node carries the span of the source text it was built from. A parent's
//! span always encloses the spans of its children.

mod decl;
mod expr;
mod stmt;
mod types;

pub use decl::{
    AttrKind, AttrValue, BehaviourClauses, Declarator, Def, DefKind, DefSelector, Dim, Dims,
    Direction, EvalModifier, FormalPar, FuncDecl, FuncKind, GroupEntry, ImportDecl, ImportEntry,
    ImportSpec, Module, Qualifiers, Restriction, ReturnSpec, ScopeItem, Selection,
    TemplateRestriction, ValueDecl, ValueKind, WithSpec, WithStmt,
};
pub use expr::{
    AnyAllKind, BinaryOp, CommArgs, CommKind, CommOp, Expr, ExprKind, Ident, ListMatchKind,
    Literal, Quantifier, Redirect, RedirectItem, SpecialRef, UnaryOp,
};
pub use stmt::{AltArm, AltKind, Block, Guard, SelectCase, Stmt, StmtKind};
pub use types::{
    EnumType, Field, ListType, PortAttrib, PortKind, StructKind, StructType, TypeDef,
    TypeDefKind, TypeSpec,
};

/// A top-level result of parsing a source: a module, a definition or a
/// statement. Sources that do not start with `module` produce definitions and
/// statements directly.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Node {
    Module(Module),
    Def(Def),
    Stmt(Stmt),
}

impl Node {
    pub fn as_module(&self) -> Option<&Module> {
        match self {
            Node::Module(m) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
