//! Accept/reject tables for the fragment entry points.
//!
//! Each table lists inputs that must parse without diagnostics (`Pass`)
//! and inputs that must produce at least one (`Fail`).

use std::fmt::Debug;

use ttcn_ir::FileSet;

use crate::ParseErrors;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Expect {
    Pass,
    Fail,
}

use Expect::{Fail, Pass};

fn check<T: Debug>(
    cases: &[(Expect, &str)],
    parse: impl Fn(&FileSet, &str) -> Result<T, ParseErrors>,
) {
    super::init_tracing();
    let mut failures = Vec::new();
    for &(expect, input) in cases {
        let fset = FileSet::new();
        match (expect, parse(&fset, input)) {
            (Pass, Err(errs)) => failures.push(format!("parse({input:?}):\n\t{errs}")),
            (Fail, Ok(tree)) => {
                failures.push(format!("breakage vanished: parse({input:?}) = {tree:?}"));
            }
            _ => {}
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn modules() {
    check(
        &[
            (Pass, r#"module m {}"#),
            (Pass, r#"module m language "str1", "str2" {}"#),
            (Pass, r#"module m { const integer x := 1; } with { encode "json" }"#),
            (Pass, r#"module m { group g { type integer I } control { var integer x; } }"#),
            (Fail, r#"module {}"#),
            (Fail, r#"module m { const integer x := 1;"#),
        ],
        |fset, src| crate::parse_module(fset, "test", src),
    );
}

#[test]
fn with_stmts() {
    check(
        &[
            (Pass, r#"encode    "str";"#),
            (Pass, r#"variant   "str";"#),
            (Pass, r#"display   "str";"#),
            (Pass, r#"extension "str";"#),
            (Pass, r#"optional  "str";"#),
            (Pass, r#"stepsize  "str";"#),
            (Pass, r#"encode override        "str";"#),
            (Pass, r#"encode @local          "str";"#),
            (Pass, r#"encode @local          "str"."ruleA";"#),
            (Pass, r#"encode ([-])           "str";"#),
            (Pass, r#"encode (a[-])          "str";"#),
            (Pass, r#"encode (group all)     "str";"#),
            (Pass, r#"encode (type all)      "str";"#),
            (Pass, r#"encode (template all)  "str";"#),
            (Pass, r#"encode (const all)     "str";"#),
            (Pass, r#"encode (altstep all)   "str";"#),
            (Pass, r#"encode (testcase all)  "str";"#),
            (Pass, r#"encode (function all)  "str";"#),
            (Pass, r#"encode (signature all) "str";"#),
            (Pass, r#"encode (modulepar all) "str";"#),
            (Pass, r#"encode (type all except {a,b}) "str";"#),
            (Pass, r#"variant "a", "b";"#),
            (Fail, r#"encode;"#),
            (Fail, r#"encode "str"."#),
            (Fail, r#"import "str";"#),
            (Fail, r#"encode @index "str";"#),
            (Fail, r#"encode @deterministic "str";"#),
        ],
        |fset, src| crate::parse_with_stmt(fset, "test", src),
    );
}

#[test]
fn exprs() {
    check(
        &[
            (Pass, "-"),
            (Pass, "a[-]"),
            (Pass, "-1 * x"),
            (Pass, "-x * y"),
            (Pass, "{x := (1+2)*3, y:=a.f()}"),
            (Pass, "{(1+2)*3, a.f()}"),
            (Pass, "{-,-}"),
            (Pass, "(1,*,?,-,2)"),
            (Pass, "t length(5..23)"),
            (Pass, "t length(5..23) ifpresent"),
            (Pass, "t ifpresent"),
            (Pass, "system:p"),
            (Fail, "modifies t:=23"),
            (Fail, "complement(all from t)"),
            (Pass, "b := any from c.running -> @index value i"),
            (Pass, "p := decmatch M: {f1:= 10, f2 := '1001'B}"),
            (Pass, r#"p := decmatch ("UTF-8") M: {f1:= 10, f2 := '1001'B}"#),
            (Fail, "p := @decoded payload"),
            (Pass, r#"regexp @nocase(x,charstring:"?+(text)?+",0)"#),
            (Pass, "complement(1, any from t)"),
            (Pass, r#"pattern @nocase "ab*c""#),
            (Pass, "superset(1, 2), subset(3), permutation(?, *)"),
            (Pass, "not a and b or c xor d"),
            (Pass, "x << 2 & '0F'H <@ 1"),
            (Pass, "C.create(\"ptc\") alive"),
            (Pass, "universal charstring:\"x\""),
            (Pass, "any port, all timer, all component"),
            (Fail, "1 +"),
            (Fail, "()"),
            (Fail, "(1, 2"),
            (Fail, "any x"),
        ],
        |fset, src| crate::parse_expr_list(fset, "test", src),
    );
}

#[test]
fn func_decls() {
    check(
        &[
            (Pass, "testcase f() {}"),
            (Pass, "testcase f() runs on A[-] {}"),
            (Pass, "testcase f() runs on C system C {}"),
            (Pass, "function f() {}"),
            (Pass, "function f() return int {}"),
            (Pass, "function f() return template int {}"),
            (Pass, "function f() return template(value) int {}"),
            (Pass, "function f() return value int {}"),
            (Pass, "function f @deterministic () {}"),
            (Pass, "function f() runs on A[-] {}"),
            (Pass, "function f() mtc C {}"),
            (Pass, "function f() runs on C mtc C system C {}"),
            (Pass, "altstep as() { var roi[-] a[4][4]; [] receive; [else] {}}"),
            (Fail, "external function f();"),
            (Pass, "signature f();"),
            (Pass, "signature f() exception (integer);"),
            (Pass, "signature f() return int;"),
            (Pass, "signature f() return int exception (integer, a.b[0]);"),
            (Pass, "signature f() noblock;"),
            (Pass, "signature f() noblock exception (integer, a.b[0]);"),
            (Fail, "function f() runs on A runs on B {}"),
            (Fail, "function f()"),
            (Fail, "function f() noblock {}"),
            (Fail, "function () {}"),
            (Fail, "function f @index () {}"),
            (Fail, "altstep a @lazy () {}"),
            (Fail, "function f() return value @lazy int {}"),
            (Fail, "function f() return template(omit) @fuzzy int {}"),
        ],
        |fset, src| crate::parse_func_decl(fset, "test", src),
    );
}

#[test]
fn module_defs() {
    check(
        &[
            (Pass, "import from m all;"),
            (Pass, r#"import from m language "str1", "str2" all;"#),
            (Pass, "import from m all except {}"),
            (
                Pass,
                "import from m all except {
                        template  all;
                        const     all;
                        altstep   all;
                        testcase  all;
                        function  all;
                        signature all;
                        modulepar all;
                        import    all;
                        type      all }",
            ),
            (Pass, "import from m all except { group all }"),
            (Pass, "import from m all except { group x,y }"),
            (
                Pass,
                "import from m {
                        template  all;
                        const     all;
                        altstep   all;
                        testcase  all;
                        function  all;
                        signature all;
                        modulepar all;
                        import    all;
                        type      all }",
            ),
            (Pass, "import from m { group x except { group all }, y }"),
            (Pass, "import from m recursive { type A, B; const all except c }"),
            (Pass, "modulepar { integer a := 1; charstring b, c; }"),
            (Pass, "group g { type integer I; const I x := 1 }"),
            (Pass, "control { var integer x := 1; execute(tc()); }"),
            (Pass, r#"type integer I with { variant "8 bit" }"#),
            (Fail, "friend module m;"),
            (Fail, "public modulepar integer x;"),
            (Fail, "private function fn() {}"),
            (Fail, "x := 1;"),
            (Fail, "import m all;"),
        ],
        |fset, src| crate::parse_module_def(fset, "test", src),
    );
}

#[test]
fn value_decls() {
    check(
        &[
            (Pass, "const integer x;"),
            (Pass, "const int x := 1;"),
            (Pass, "const int x := 1, yi := 2;"),
            (Pass, "const int x[len] := 1, y := 2;"),
            (Pass, "const a[-] x := 1;"),
            (Pass, "const a[1] x[2][3] := x[4];"),
            (Pass, "var int x, y := 2, z;"),
            (Pass, "var template          int x;"),
            (Pass, "var template(omit)    int x;"),
            (Pass, "var template(value)   int x;"),
            (Pass, "var template(present) int x;"),
            (Pass, "var omit    int x;"),
            (Pass, "var value   int x;"),
            (Pass, "var present int x;"),
            (Pass, "var value @lazy int x;"),
            (Pass, "var value @lazy int x, y := ?;"),
            (Pass, "template int x := ?;"),
            (Pass, "template int x modifies y := ?;"),
            (Pass, "template int x(int i) := i;"),
            (Pass, "template @lazy int x := ?;"),
            (Pass, "template @lazy int x(int i) := i;"),
            (Pass, "template @lazy int  x(int i) modifies y := ?;"),
            (Pass, "template @lazy a[-] x(int i) modifies y := ?;"),
            (Pass, "template(omit)    int x := ?;"),
            (Pass, "template(value)   int x := ?;"),
            (Pass, "template(present) int x := ?;"),
            (Pass, "timer x, y := 1.0, y;"),
            (Pass, "port P x[len], y := 1, z := 2 ;"),
            (Pass, "modulepar RoI[-] x, y:=23, z;"),
            (Pass, "var record of integer r := {1, 2};"),
            (Fail, "var template(omit) omit int x;"),
            (Fail, "var @lazy @fuzzy int x;"),
            (Fail, "var @deterministic int x;"),
            (Fail, "var @lazy value int x;"),
            (Fail, "var value @lazy @lazy int x;"),
            (Fail, "var int;"),
            (Fail, "template(maybe) int x := ?;"),
        ],
        |fset, src| crate::parse_decl(fset, "test", src),
    );
}

#[test]
fn formal_pars() {
    check(
        &[
            (Pass, "()"),
            (Pass, "(int y)"),
            (Pass, "(int x, int y)"),
            (Pass, "(in int x, out int y, inout int z)"),
            (Pass, "(in template(value) @fuzzy timer x := 1, out timer y)"),
            (Pass, "(out timer y, in template(value) @fuzzy timer x := 1)"),
            (Pass, "(out timer y := -, in value @fuzzy timer x := 1)"),
            (Pass, "(out timer y := -, in value timer x := (1,2,3))"),
            (Pass, "(int a[2][-])"),
            (Fail, "(int)"),
            (Fail, "(in out int x)"),
            (Fail, "(@fuzzy template(value) int x)"),
            (Fail, "(in @fuzzy value int x)"),
            (Fail, "(out @lazy omit int x)"),
            (Fail, "(value in int x)"),
            (Fail, "(in value template int x)"),
            (Fail, "(int x"),
        ],
        |fset, src| crate::parse_parameters(fset, "test", src),
    );
}

#[test]
fn types() {
    check(
        &[
            // Subtypes
            (Pass, "type integer t"),
            (Pass, "type int t (0..255)"),
            (Pass, "type int t length(2)"),
            (Pass, "type a[0] t (0,1) length(2)"),
            (Pass, "type universal charstring U"),
            // List types
            (Pass, "type set of int s"),
            (Pass, "type set length(2) of int s"),
            (Pass, "type set length(2) of int s length(2)"),
            (Pass, "type set of set of int s"),
            (Pass, "type set length(1) of set length(2) of int() s length(3)"),
            // Struct types
            (Pass, "type set s {}"),
            (Pass, "type set s {int a optional }"),
            (
                Pass,
                "type set s {set length(1) of set length(2) of int() f1[-][-] length(3) optional}",
            ),
            (Pass, "type union s {@default set of int f1 optional}"),
            (Pass, "type record r { record { int a } inner, enumerated { x, y } e }"),
            (Pass, "type enumerated a[1][2] {e, e[3], e[-](1)}"),
            // Port types
            (Pass, "type port p message {address a.b[-]}"),
            (Pass, "type port p message {inout float, a.b[-]}"),
            (Pass, "type port p message {map param (out int i:=1)}"),
            (Pass, "type port p message {unmap param (out int i:=1)}"),
            (Pass, "type port p procedure {}"),
            (Pass, "type port p mixed {}"),
            (Pass, "type port p message { in A; out B, C; address T }"),
            // Component types
            (Pass, "type component C {}"),
            (Pass, "type component C extends C[-], m.Base {}"),
            (Pass, "type component C { var integer x; timer t; port P p }"),
            // Behaviour types
            (Pass, "type function fn() runs on self return template int"),
            (Pass, "type altstep  as() runs on self return int"),
            (Pass, "type testcase tc() runs on C system TSI"),
            // Missing closing braces
            (
                Fail,
                "type set s {set length(1) of set length(2) of int() f1[-][-] length(3) optional",
            ),
            (Fail, "type enumerated a[1][2] {e, e[3], e[-](1)"),
            (Fail, "type port p {}"),
            (Fail, "type record r { int }"),
            (Fail, "type t"),
        ],
        |fset, src| crate::parse_type(fset, "test", src),
    );
}

#[test]
fn stmts() {
    check(
        &[
            // Structural statements
            (Pass, "repeat;"),
            (Pass, "break;"),
            (Pass, "continue;"),
            (Pass, "return;"),
            (Pass, "return x() * 1;"),
            (Pass, "label L1;"),
            (Pass, "goto L2;"),
            (Pass, "for (var int i := 0; i<23; i := i+1) {}"),
            (Pass, "for (i:=x; i<23; i:=i+1) {}"),
            (Pass, "while (23) {}"),
            (Pass, "do {} while (23);"),
            (Pass, "if (1) {}"),
            (Pass, "if (1) {} else {}"),
            (Pass, "if (1) {} else if (2) {} else {}"),
            (Pass, "select union (p.x()) { case(1) {} case else {}}"),
            (Pass, "select  (23) {case(1) {} case else {}}"),
            (Pass, "interleave {}"),
            (Pass, "alt {}"),
            (Pass, "alt { [] receive; [23<foo()] p.timeout { var i x:=23; } [else] {}}"),
            // Value declaration statements
            (Pass, "var comp C := C.create;"),
            (Pass, r#"var comp C := C.create("han solo") alive;"#),
            // Expression statements
            (Pass, "send() to 80;"),
            (Pass, "send() to v_dst;"),
            (Pass, "receive from ip.address:?;"),
            (Pass, "receive from ip.address:? -> @index x;"),
            (Pass, "testcase.stop;"),
            (Pass, "stop;"),
            (Pass, "map (system:p1, c:p);"),
            (Fail, r#"map (p1, p2) param ("localhost", 80);"#),
            (Fail, "unmap;"),
            (Fail, "unmap (true);"),
            (Fail, "unmap (true) param (-,-);"),
            (Pass, "p.call(foo) to 80;"),
            (Pass, "p[i].call(S:{});"),
            (Pass, "any port.check;"),
            (Pass, "p.check(receive);"),
            (Fail, "p.check(from x -> timestamp bar);"),
            (Fail, "p.check(-> @index value i);"),
            (Fail, r#"p.check(receive from x -> value ("foo"));"#),
            (Fail, "p.check(getreply(23 value x) from x -> sender(foo));"),
            (Pass, "p.getreply(23);"),
            (Fail, "p.reply(23 value x);"),
            // Redirects per operation
            (Pass, "p.receive(t) from c -> value v sender s timestamp ts @index i;"),
            (Pass, "p.receive -> value (a := f, b := @decoded g, c := @decoded (\"UTF-8\") h);"),
            (Pass, "p.getcall(s) -> param (a, -, b := f) sender c;"),
            (Pass, "p.getreply(s value 5) -> value v param (x) timestamp t;"),
            (Pass, "p.check(from c -> sender s);"),
            (Pass, "p.check(-> sender s);"),
            (Pass, "p.check(getreply(s) -> value v);"),
            (Pass, "p.call(s, 5.0) to c { [] p.getreply(s) {} [] p.catch(s, e) {} };"),
            (Pass, "any from ports.receive(t) -> @index i;"),
            (Pass, "p.send(t) to all component;"),
            (Pass, "connect (mtc:p, c:q);"),
            (Pass, "map (a:p, b:q) param (1, 2);"),
            (Fail, "p.send(t) -> value v;"),
            (Fail, "p.getcall(s) -> value v;"),
            (Fail, "p.receive -> value v value w;"),
            (Fail, "p.receive -> sender 23;"),
            (Fail, "p.receive -> timestamp;"),
            (Fail, "disconnect (c:p);"),
            (Fail, "connect (a:p, b:q) param (1);"),
            // Malformed statements
            (Fail, "if 1 {}"),
            (Fail, "while (1)"),
            (Fail, "[] p.receive;"),
            (Fail, "x := 1 y := 2;"),
            (Fail, "select (x) { default {} }"),
        ],
        |fset, src| crate::parse_stmt(fset, "test", src),
    );
}
