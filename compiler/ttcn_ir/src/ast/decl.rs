//! Modules, definitions and declarations.

use smallvec::SmallVec;

use crate::ast::{Block, Expr, Ident, TypeDef, TypeSpec};
use crate::Span;

/// `module Name [language "..."] { defs } [with {...}]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Module {
    pub name: Ident,
    pub language: Vec<String>,
    pub defs: Vec<Def>,
    pub with: Option<WithSpec>,
    pub span: Span,
}

/// A module-level definition together with its attributes.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Def {
    pub kind: DefKind,
    pub with: Option<WithSpec>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum DefKind {
    Import(ImportDecl),
    Type(TypeDef),
    Value(ValueDecl),
    /// `modulepar { type a := 1; type b; }`
    ModuleParGroup(Vec<ValueDecl>),
    Func(FuncDecl),
    Group {
        name: Ident,
        defs: Vec<Def>,
    },
    Control(Block),
}

// Declarations

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Var,
    Const,
    Template,
    Timer,
    Port,
    ModulePar,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Var => "var",
            ValueKind::Const => "const",
            ValueKind::Template => "template",
            ValueKind::Timer => "timer",
            ValueKind::Port => "port",
            ValueKind::ModulePar => "modulepar",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TemplateRestriction {
    Omit,
    Value,
    Present,
}

/// Template restriction qualifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Restriction {
    /// `template [(omit|value|present)]`
    Template(Option<TemplateRestriction>),
    /// Bare `omit`, `value` or `present` on a formal parameter.
    Bare(TemplateRestriction),
}

/// `@lazy` / `@fuzzy`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EvalModifier {
    Lazy,
    Fuzzy,
}

/// Qualifiers accepted in front of a declaration or formal parameter. At most
/// one of each family may be given.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Qualifiers {
    pub restriction: Option<Restriction>,
    pub modifier: Option<EvalModifier>,
}

/// `[n]`, or `[-]` for an unspecified dimension.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Dim {
    pub size: Option<Expr>,
    pub span: Span,
}

pub type Dims = SmallVec<[Dim; 2]>;

/// One name in a declaration: `x[2] := {1, 2}`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Declarator {
    pub name: Ident,
    pub dims: Dims,
    pub value: Option<Expr>,
    pub span: Span,
}

/// `var|const|template|timer|port|modulepar ...`
///
/// `var int a, b := 1, c;` stays a single declaration with three
/// declarators.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueDecl {
    pub kind: ValueKind,
    pub quals: Qualifiers,
    /// Absent for timers, which have no type.
    pub ty: Option<TypeSpec>,
    /// Formal parameters of a parameterized template.
    pub params: Option<Vec<FormalPar>>,
    /// `modifies base` of a template.
    pub modifies: Option<Expr>,
    pub declarators: Vec<Declarator>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    In,
    Out,
    InOut,
}

/// `[in|out|inout] [quals] Type name[dims] [:= default]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FormalPar {
    pub direction: Option<Direction>,
    pub quals: Qualifiers,
    pub ty: TypeSpec,
    pub name: Ident,
    pub dims: Dims,
    pub default: Option<Expr>,
    pub span: Span,
}

// Behaviour

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FuncKind {
    Function,
    Testcase,
    Altstep,
    Signature,
}

impl FuncKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FuncKind::Function => "function",
            FuncKind::Testcase => "testcase",
            FuncKind::Altstep => "altstep",
            FuncKind::Signature => "signature",
        }
    }
}

/// `return [template] Type`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReturnSpec {
    pub restriction: Option<Restriction>,
    pub ty: TypeSpec,
    pub span: Span,
}

/// `runs on`, `mtc`, `system` and `return` clauses.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct BehaviourClauses {
    pub runs_on: Option<TypeSpec>,
    pub mtc: Option<TypeSpec>,
    pub system: Option<TypeSpec>,
    pub returns: Option<ReturnSpec>,
}

/// Function, testcase, altstep or signature definition.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct FuncDecl {
    pub kind: FuncKind,
    pub name: Ident,
    /// `@deterministic` and friends.
    pub modifier: Option<String>,
    pub params: Vec<FormalPar>,
    pub clauses: BehaviourClauses,
    /// Signature `exception (...)` list.
    pub exceptions: Vec<TypeSpec>,
    /// Signature `noblock`.
    pub noblock: bool,
    /// Absent for signatures.
    pub body: Option<Block>,
    pub span: Span,
}

// Imports

/// Definition kinds that can be named in imports and attribute scopes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DefSelector {
    Group,
    Type,
    Template,
    Const,
    Altstep,
    Testcase,
    Function,
    Signature,
    Modulepar,
    Import,
}

impl DefSelector {
    pub const fn as_str(self) -> &'static str {
        match self {
            DefSelector::Group => "group",
            DefSelector::Type => "type",
            DefSelector::Template => "template",
            DefSelector::Const => "const",
            DefSelector::Altstep => "altstep",
            DefSelector::Testcase => "testcase",
            DefSelector::Function => "function",
            DefSelector::Signature => "signature",
            DefSelector::Modulepar => "modulepar",
            DefSelector::Import => "import",
        }
    }
}

/// `all [except a, b]` or an explicit reference list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Selection {
    All { except: Vec<Expr> },
    Refs(Vec<Expr>),
}

/// `group g [except { ... }]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GroupEntry {
    pub name: Expr,
    pub except: Option<Vec<ImportEntry>>,
    pub span: Span,
}

/// One `;`-terminated entry of a selective import or an exception list.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImportEntry {
    Kind {
        kind: DefSelector,
        selection: Selection,
    },
    Groups(Vec<GroupEntry>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImportSpec {
    /// `import from M all [except { ... }]`
    All { except: Option<Vec<ImportEntry>> },
    /// `import from M { ... }`
    Selective(Vec<ImportEntry>),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ImportDecl {
    pub module: Ident,
    pub recursive: bool,
    pub language: Vec<String>,
    pub spec: ImportSpec,
    pub span: Span,
}

// Attributes

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AttrKind {
    Encode,
    Variant,
    Display,
    Extension,
    Optional,
    Stepsize,
}

impl AttrKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            AttrKind::Encode => "encode",
            AttrKind::Variant => "variant",
            AttrKind::Display => "display",
            AttrKind::Extension => "extension",
            AttrKind::Optional => "optional",
            AttrKind::Stepsize => "stepsize",
        }
    }
}

/// Entry of an attribute scope: `(type all except T, x.y, [-])`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ScopeItem {
    Kind {
        kind: DefSelector,
        selection: Selection,
    },
    Ref(Expr),
    /// Array element scope, `[-]` or `[0]`.
    Elements(Dims),
}

/// `"text"` or `"text"."rule"`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttrValue {
    pub rule: Option<String>,
    pub text: String,
    pub span: Span,
}

/// `encode override @local (scope) "value"`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WithStmt {
    pub kind: AttrKind,
    pub overriding: bool,
    pub modifier: Option<String>,
    pub scope: Option<Vec<ScopeItem>>,
    pub values: Vec<AttrValue>,
    pub span: Span,
}

/// `with { ... }`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct WithSpec {
    pub stmts: Vec<WithStmt>,
    pub span: Span,
}
