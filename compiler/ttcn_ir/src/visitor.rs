//! Syntax tree visitor.
//!
//! Default `visit_*` methods call the matching `walk_*` function, which
//! traverses children depth-first, left to right. Override a `visit_*` method
//! to act on a node and call `walk_*` to keep descending.
//!
//! ```text
//! struct CountCalls(usize);
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if matches!(expr.kind, ExprKind::Call { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{
    AltArm, Block, CommOp, Def, DefKind, FormalPar, Guard, Module, Node, PortAttrib, Redirect,
    RedirectItem, Stmt, StmtKind, TypeDefKind, TypeSpec, ValueDecl,
};
use crate::ast::{Expr, ExprKind};

pub trait Visitor<'ast> {
    fn visit_node(&mut self, node: &'ast Node) {
        walk_node(self, node);
    }

    fn visit_module(&mut self, module: &'ast Module) {
        walk_module(self, module);
    }

    fn visit_def(&mut self, def: &'ast Def) {
        walk_def(self, def);
    }

    fn visit_value_decl(&mut self, decl: &'ast ValueDecl) {
        walk_value_decl(self, decl);
    }

    fn visit_formal_par(&mut self, par: &'ast FormalPar) {
        self.visit_type_spec(&par.ty);
        if let Some(default) = &par.default {
            self.visit_expr(default);
        }
    }

    fn visit_type_spec(&mut self, ty: &'ast TypeSpec) {
        walk_type_spec(self, ty);
    }

    fn visit_block(&mut self, block: &'ast Block) {
        for stmt in &block.stmts {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_alt_arm(&mut self, arm: &'ast AltArm) {
        walk_alt_arm(self, arm);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_comm(&mut self, op: &'ast CommOp) {
        walk_comm(self, op);
    }
}

pub fn walk_node<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, node: &'ast Node) {
    match node {
        Node::Module(m) => visitor.visit_module(m),
        Node::Def(d) => visitor.visit_def(d),
        Node::Stmt(s) => visitor.visit_stmt(s),
    }
}

pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, module: &'ast Module) {
    for def in &module.defs {
        visitor.visit_def(def);
    }
}

pub fn walk_def<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, def: &'ast Def) {
    match &def.kind {
        // Imports and attributes hold references only.
        DefKind::Import(_) => {}
        DefKind::Value(decl) => visitor.visit_value_decl(decl),
        DefKind::ModuleParGroup(decls) => {
            for decl in decls {
                visitor.visit_value_decl(decl);
            }
        }
        DefKind::Func(func) => {
            for par in &func.params {
                visitor.visit_formal_par(par);
            }
            for ty in [&func.clauses.runs_on, &func.clauses.mtc, &func.clauses.system]
                .into_iter()
                .flatten()
            {
                visitor.visit_type_spec(ty);
            }
            if let Some(ret) = &func.clauses.returns {
                visitor.visit_type_spec(&ret.ty);
            }
            for ty in &func.exceptions {
                visitor.visit_type_spec(ty);
            }
            if let Some(body) = &func.body {
                visitor.visit_block(body);
            }
        }
        DefKind::Group { defs, .. } => {
            for def in defs {
                visitor.visit_def(def);
            }
        }
        DefKind::Control(block) => visitor.visit_block(block),
        DefKind::Type(ty) => match &ty.kind {
            TypeDefKind::Subtype {
                base,
                constraints,
                length,
            } => {
                visitor.visit_type_spec(base);
                for c in constraints.iter().flatten() {
                    visitor.visit_expr(c);
                }
                if let Some(len) = length {
                    visitor.visit_expr(len);
                }
            }
            TypeDefKind::List {
                list,
                constraints,
                length,
            } => {
                if let Some(len) = &list.length {
                    visitor.visit_expr(len);
                }
                visitor.visit_type_spec(&list.element);
                for c in constraints.iter().flatten() {
                    visitor.visit_expr(c);
                }
                if let Some(len) = length {
                    visitor.visit_expr(len);
                }
            }
            TypeDefKind::Struct(st) => {
                for field in &st.fields {
                    visitor.visit_type_spec(&field.ty);
                }
            }
            TypeDefKind::Enumerated(en) => {
                for item in &en.items {
                    visitor.visit_expr(item);
                }
            }
            TypeDefKind::Port { attribs, .. } => {
                for attrib in attribs {
                    match attrib {
                        PortAttrib::Address(ty) => visitor.visit_type_spec(ty),
                        PortAttrib::Messages { types, .. } => {
                            for ty in types {
                                visitor.visit_type_spec(ty);
                            }
                        }
                        PortAttrib::Map(pars) | PortAttrib::Unmap(pars) => {
                            for par in pars {
                                visitor.visit_formal_par(par);
                            }
                        }
                    }
                }
            }
            TypeDefKind::Component { extends, defs } => {
                for ty in extends {
                    visitor.visit_type_spec(ty);
                }
                for def in defs {
                    visitor.visit_def(def);
                }
            }
            TypeDefKind::Behaviour { params, .. } => {
                for par in params {
                    visitor.visit_formal_par(par);
                }
            }
        },
    }
}

pub fn walk_value_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast ValueDecl) {
    if let Some(ty) = &decl.ty {
        visitor.visit_type_spec(ty);
    }
    for par in decl.params.iter().flatten() {
        visitor.visit_formal_par(par);
    }
    if let Some(base) = &decl.modifies {
        visitor.visit_expr(base);
    }
    for d in &decl.declarators {
        for dim in &d.dims {
            if let Some(size) = &dim.size {
                visitor.visit_expr(size);
            }
        }
        if let Some(value) = &d.value {
            visitor.visit_expr(value);
        }
    }
}

pub fn walk_type_spec<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, ty: &'ast TypeSpec) {
    match ty {
        TypeSpec::Ref(e) => visitor.visit_expr(e),
        TypeSpec::Constrained {
            base, constraints, ..
        } => {
            visitor.visit_type_spec(base);
            for c in constraints {
                visitor.visit_expr(c);
            }
        }
        TypeSpec::List(list) => {
            if let Some(len) = &list.length {
                visitor.visit_expr(len);
            }
            visitor.visit_type_spec(&list.element);
        }
        TypeSpec::Struct(st) => {
            for field in &st.fields {
                visitor.visit_type_spec(&field.ty);
            }
        }
        TypeSpec::Enumerated(en) => {
            for item in &en.items {
                visitor.visit_expr(item);
            }
        }
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match &stmt.kind {
        StmtKind::Block(block) => visitor.visit_block(block),
        StmtKind::Decl(decl) => visitor.visit_value_decl(decl),
        StmtKind::Expr(e) => visitor.visit_expr(e),
        StmtKind::If {
            cond,
            then_block,
            else_branch,
        } => {
            visitor.visit_expr(cond);
            visitor.visit_block(then_block);
            if let Some(other) = else_branch {
                visitor.visit_stmt(other);
            }
        }
        StmtKind::For {
            init,
            cond,
            step,
            body,
        } => {
            if let Some(init) = init {
                visitor.visit_stmt(init);
            }
            if let Some(cond) = cond {
                visitor.visit_expr(cond);
            }
            if let Some(step) = step {
                visitor.visit_expr(step);
            }
            visitor.visit_block(body);
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond);
            visitor.visit_block(body);
        }
        StmtKind::DoWhile { body, cond } => {
            visitor.visit_block(body);
            visitor.visit_expr(cond);
        }
        StmtKind::Alt { arms, .. } => {
            for arm in arms {
                visitor.visit_alt_arm(arm);
            }
        }
        StmtKind::Select {
            discriminant,
            cases,
            ..
        } => {
            visitor.visit_expr(discriminant);
            for case in cases {
                for value in case.values.iter().flatten() {
                    visitor.visit_expr(value);
                }
                visitor.visit_block(&case.body);
            }
        }
        StmtKind::Arm(arm) => visitor.visit_alt_arm(arm),
        StmtKind::Return(value) => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        StmtKind::Break
        | StmtKind::Continue
        | StmtKind::Repeat
        | StmtKind::Stop
        | StmtKind::Label(_)
        | StmtKind::Goto(_) => {}
    }
}

pub fn walk_alt_arm<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, arm: &'ast AltArm) {
    if let Guard::When(cond) = &arm.guard {
        visitor.visit_expr(cond);
    }
    if let Some(action) = &arm.action {
        visitor.visit_expr(action);
    }
    if let Some(body) = &arm.body {
        visitor.visit_block(body);
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match &expr.kind {
        ExprKind::Ident(_)
        | ExprKind::Literal(_)
        | ExprKind::Bool(_)
        | ExprKind::Omit
        | ExprKind::Null
        | ExprKind::DontCare
        | ExprKind::AnyValue
        | ExprKind::AnyOrOmit
        | ExprKind::Special(_)
        | ExprKind::AnyAll { .. }
        | ExprKind::Pattern { .. }
        | ExprKind::Error => {}

        ExprKind::Unary { operand: inner, .. }
        | ExprKind::Paren(inner)
        | ExprKind::IfPresent(inner)
        | ExprKind::Selector { base: inner, .. } => visitor.visit_expr(inner),

        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        ExprKind::Assign { target: a, value: b }
        | ExprKind::Qualified {
            qualifier: a,
            value: b,
        }
        | ExprKind::Index { base: a, index: b }
        | ExprKind::Length {
            template: a,
            length: b,
        } => {
            visitor.visit_expr(a);
            visitor.visit_expr(b);
        }
        ExprKind::Call { callee, args, .. } => {
            visitor.visit_expr(callee);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::Composite(items)
        | ExprKind::ValueList(items)
        | ExprKind::ListMatch { items, .. } => {
            for item in items {
                visitor.visit_expr(item);
            }
        }
        ExprKind::From {
            collection,
            redirect,
            ..
        } => {
            visitor.visit_expr(collection);
            if let Some(r) = redirect {
                walk_redirect(visitor, r);
            }
        }
        ExprKind::DecMatch {
            encoding,
            matcher: inner,
        }
        | ExprKind::Decoded {
            encoding,
            field: inner,
        } => {
            if let Some(enc) = encoding {
                visitor.visit_expr(enc);
            }
            visitor.visit_expr(inner);
        }
        ExprKind::Create {
            component, args, ..
        } => {
            visitor.visit_expr(component);
            for arg in args {
                visitor.visit_expr(arg);
            }
        }
        ExprKind::Comm(op) => visitor.visit_comm(op),
    }
}

pub fn walk_comm<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, op: &'ast CommOp) {
    if let Some(port) = &op.port {
        visitor.visit_expr(port);
    }
    let ops = &op.operands;
    for arg in &ops.args {
        visitor.visit_expr(arg);
    }
    for e in [&ops.value_match, &ops.to, &ops.from].into_iter().flatten() {
        visitor.visit_expr(e);
    }
    for p in ops.params.iter().flatten() {
        visitor.visit_expr(p);
    }
    if let Some(nested) = &op.nested {
        visitor.visit_comm(nested);
    }
    if let Some(r) = &ops.redirect {
        walk_redirect(visitor, r);
    }
    for arm in op.response.iter().flatten() {
        visitor.visit_alt_arm(arm);
    }
}

fn walk_redirect<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, redirect: &'ast Redirect) {
    for item in &redirect.items {
        match item {
            RedirectItem::Value(targets) | RedirectItem::Param(targets) => {
                for t in targets {
                    visitor.visit_expr(t);
                }
            }
            RedirectItem::Sender(e) | RedirectItem::Timestamp(e) | RedirectItem::Index(e) => {
                visitor.visit_expr(e);
            }
        }
    }
}
