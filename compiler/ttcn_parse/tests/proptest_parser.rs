//! Property-based tests for the parser.
//!
//! These tests use proptest to generate random inputs and verify
//! parser invariants hold for all inputs.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;
use ttcn_ir::ast::{ExprKind, Node};
use ttcn_ir::FileSet;

// Strategies for generating test inputs

/// Identifiers that can never collide with a keyword.
fn arb_ident() -> impl Strategy<Value = String> {
    "v_[a-z0-9_]{0,8}".prop_map(|s| s)
}

fn arb_int() -> impl Strategy<Value = String> {
    (0u32..=1000).prop_map(|n| n.to_string())
}

fn arb_string() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ ]{0,12}".prop_map(|s| format!("\"{s}\""))
}

fn arb_binop() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("mod"),
        Just("rem"),
        Just("&"),
        Just("=="),
        Just("!="),
        Just("<"),
        Just(">="),
        Just("and"),
        Just("or"),
        Just("xor4b"),
        Just("<<"),
        Just("<@"),
        Just(".."),
    ]
}

/// Operands without operators.
fn arb_simple_expr() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_int(),
        arb_string(),
        arb_ident(),
        Just("true".to_string()),
        Just("omit".to_string()),
        Just("?".to_string()),
        arb_ident().prop_map(|id| format!("{id}.f[0]")),
        arb_ident().prop_map(|id| format!("{id}()")),
    ]
}

fn arb_binary_expr() -> impl Strategy<Value = String> {
    (arb_simple_expr(), arb_binop(), arb_simple_expr())
        .prop_map(|(left, op, right)| format!("{left} {op} {right}"))
}

/// Arbitrary sequences of real tokens, which reach deeper into the grammar
/// than arbitrary characters.
fn arb_token_soup() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("module"),
        Just("type"),
        Just("record"),
        Just("of"),
        Just("var"),
        Just("template"),
        Just("function"),
        Just("altstep"),
        Just("alt"),
        Just("if"),
        Just("else"),
        Just("receive"),
        Just("any"),
        Just("from"),
        Just("->"),
        Just("value"),
        Just("@index"),
        Just("@decoded"),
        Just("complement"),
        Just("map"),
        Just("with"),
        Just("{"),
        Just("}"),
        Just("("),
        Just(")"),
        Just("["),
        Just("]"),
        Just(";"),
        Just(","),
        Just(":="),
        Just(":"),
        Just("."),
        Just("-"),
        Just("x"),
        Just("1"),
    ];
    prop::collection::vec(token, 0..40).prop_map(|tokens| tokens.join(" "))
}

// Property tests

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parsing never panics, and a failed parse always explains itself with
    /// diagnostics sorted by position.
    #[test]
    fn parser_no_panic(input in "\\PC{0,120}") {
        let fset = FileSet::new();
        if let Err(errs) = ttcn_parse::parse(&fset, "prop", &input) {
            prop_assert!(!errs.is_empty());
            let starts: Vec<_> = errs
                .iter()
                .filter_map(|d| d.primary_span().map(|s| s.start))
                .collect();
            prop_assert!(starts.windows(2).all(|w| w[0] <= w[1]), "{:?}", starts);
        }
    }

    /// Token sequences never panic or hang, in any entry point.
    #[test]
    fn token_soup_no_panic(input in arb_token_soup()) {
        let fset = FileSet::new();
        let _ = ttcn_parse::parse(&fset, "prop", &input);
        let _ = ttcn_parse::parse_stmt(&fset, "prop", &input);
        let _ = ttcn_parse::parse_expr_list(&fset, "prop", &input);
        let _ = ttcn_parse::parse_module_def(&fset, "prop", &input);
    }

    /// Binary expressions over simple operands parse to a binary node.
    #[test]
    fn valid_binary_expr_parses(s in arb_binary_expr()) {
        let fset = FileSet::new();
        let exprs = ttcn_parse::parse_expr_list(&fset, "prop", &s);
        prop_assert!(exprs.is_ok(), "{}: {:?}", s, exprs);
        let exprs = exprs.unwrap();
        prop_assert_eq!(exprs.len(), 1);
        prop_assert!(matches!(exprs[0].kind, ExprKind::Binary { .. }), "{}", s);
    }

    /// Parenthesized lists of two or more entries are value lists.
    #[test]
    fn value_lists_parse(items in prop::collection::vec(arb_simple_expr(), 2..6)) {
        let src = format!("({})", items.join(", "));
        let fset = FileSet::new();
        let exprs = ttcn_parse::parse_expr_list(&fset, "prop", &src).unwrap();
        match &exprs[0].kind {
            ExprKind::ValueList(list) => prop_assert_eq!(list.len(), items.len()),
            other => prop_assert!(false, "{}: {:?}", src, other),
        }
    }

    /// Each name in a declaration becomes one declarator.
    #[test]
    fn declarators_match_names(
        names in prop::collection::vec(arb_ident(), 1..6),
        value in arb_simple_expr(),
    ) {
        let list: Vec<_> = names.iter().map(|n| format!("{n} := {value}")).collect();
        let src = format!("var integer {};", list.join(", "));
        let fset = FileSet::new();
        let decl = ttcn_parse::parse_decl(&fset, "prop", &src);
        prop_assert!(decl.is_ok(), "{}: {:?}", src, decl);
        let decl = decl.unwrap();
        let parsed: Vec<_> = decl.declarators.iter().map(|d| d.name.name.clone()).collect();
        prop_assert_eq!(parsed, names);
    }

    /// A module holds one definition per generated constant.
    #[test]
    fn module_definitions_are_kept(values in prop::collection::vec(arb_int(), 0..8)) {
        let defs: String = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!("  const integer c{i} := {v};\n"))
            .collect();
        let src = format!("module M {{\n{defs}}}");
        let fset = FileSet::new();
        let nodes = ttcn_parse::parse(&fset, "prop", &src).unwrap();
        prop_assert_eq!(nodes.len(), 1);
        let Node::Module(module) = &nodes[0] else {
            return Err(TestCaseError::fail("expected a module"));
        };
        prop_assert_eq!(module.defs.len(), values.len());
    }

    /// Each broken line is reported once, in line order.
    #[test]
    fn one_error_per_broken_line(n in 1usize..20) {
        let src = "x := ;\n".repeat(n);
        let fset = FileSet::new();
        let errs = ttcn_parse::parse(&fset, "prop", &src).unwrap_err();
        let lines: Vec<_> = errs
            .iter()
            .filter_map(|d| d.position.as_ref().map(|p| p.line))
            .collect();
        let expected: Vec<_> = (1..=u32::try_from(n).unwrap()).collect();
        prop_assert_eq!(lines, expected);
    }

    /// Parsing the same input twice gives the same result.
    #[test]
    fn parsing_is_deterministic(input in arb_token_soup()) {
        let first = ttcn_parse::parse(&FileSet::new(), "prop", &input);
        let second = ttcn_parse::parse(&FileSet::new(), "prop", &input);
        prop_assert_eq!(first, second);
    }
}
