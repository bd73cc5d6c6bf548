//! Statement parsing: simple statements, control flow and unsupported forms.

use gts_common::diagnostic_codes;
use gts_parser::ParserState;
use gts_parser::ast::{
    AssignOp, BinaryOp, CaseClause, Decl, ElseBranch, Expr, ForStmt, IfStmt, IncDecOp, RangeStmt,
    Stmt, SwitchStmt, Type, UnsupportedStmt, ValueSpec,
};

/// Parse `body` as the body of `main` and return its statements.
fn parse_body(body: &str) -> Vec<Stmt> {
    let source = format!("package main\n\nfunc main() {{\n{body}\n}}\n");
    let mut parser = ParserState::new("test.go".to_string(), source);
    let file = parser.parse_source_file();
    assert!(
        parser.get_diagnostics().is_empty(),
        "unexpected diagnostics: {:?}",
        parser.get_diagnostics()
    );
    match file.decls.into_iter().next() {
        Some(Decl::Function(main)) => main.body.expect("body"),
        other => panic!("expected main, got {other:?}"),
    }
}

fn parse_single(body: &str) -> Stmt {
    let mut stmts = parse_body(body);
    assert_eq!(stmts.len(), 1, "expected one statement: {stmts:?}");
    stmts.remove(0)
}

#[test]
fn test_short_variable_declaration() {
    let Stmt::Assign { op, lhs, rhs, .. } = parse_single("x := 5") else {
        panic!("expected assignment");
    };
    assert_eq!(op, AssignOp::Define);
    assert_eq!(lhs, vec![Expr::ident("x")]);
    assert_eq!(rhs, vec![Expr::int("5")]);
}

#[test]
fn test_compound_assignment_and_multi_target() {
    let stmts = parse_body("total += n\na, b = b, a");
    assert!(matches!(&stmts[0], Stmt::Assign { op: AssignOp::Add, .. }));
    let Stmt::Assign { lhs, rhs, .. } = &stmts[1] else {
        panic!("expected assignment");
    };
    assert_eq!(lhs.len(), 2);
    assert_eq!(rhs.len(), 2);
}

#[test]
fn test_increment_and_decrement() {
    let stmts = parse_body("i++\nj--");
    assert_eq!(
        stmts,
        vec![
            Stmt::IncDec {
                op: IncDecOp::Inc,
                operand: Expr::ident("i"),
            },
            Stmt::IncDec {
                op: IncDecOp::Dec,
                operand: Expr::ident("j"),
            },
        ]
    );
}

#[test]
fn test_local_var_group_expands_to_declarations() {
    let stmts = parse_body("var (\n\ta int\n\tb, c = 1, 2\n)");
    assert_eq!(
        stmts,
        vec![
            Stmt::LocalDecl(ValueSpec {
                name: "a".to_string(),
                ty: Some(Type::named("int")),
                init: None,
            }),
            Stmt::LocalDecl(ValueSpec {
                name: "b".to_string(),
                ty: None,
                init: Some(Expr::int("1")),
            }),
            Stmt::LocalDecl(ValueSpec {
                name: "c".to_string(),
                ty: None,
                init: Some(Expr::int("2")),
            }),
        ]
    );
}

#[test]
fn test_if_with_init_and_else_chain() {
    let Stmt::If(IfStmt {
        init,
        cond,
        else_branch,
        ..
    }) = parse_single("if v, ok := m[k]; ok {\n} else if x > 1 {\n} else {\n\treturn\n}")
    else {
        panic!("expected if");
    };
    assert!(matches!(init.as_deref(), Some(Stmt::Assign { op: AssignOp::Define, .. })));
    assert_eq!(cond, Expr::ident("ok"));
    let Some(ElseBranch::If(elif)) = else_branch else {
        panic!("expected else if");
    };
    assert_eq!(
        elif.cond,
        Expr::binary(Expr::ident("x"), BinaryOp::Gt, Expr::int("1"))
    );
    assert_eq!(
        elif.else_branch,
        Some(ElseBranch::Block(vec![Stmt::Return(Vec::new())]))
    );
}

#[test]
fn test_struct_name_in_if_condition_is_not_a_composite_literal() {
    let Stmt::If(stmt) = parse_single("if p == nil {\n\tp = q\n}") else {
        panic!("expected if");
    };
    assert_eq!(
        stmt.cond,
        Expr::binary(Expr::ident("p"), BinaryOp::Eq, Expr::ident("nil"))
    );
    assert_eq!(stmt.body.len(), 1);
}

#[test]
fn test_three_clause_for() {
    let Stmt::ClassicFor(ForStmt {
        init, cond, post, body, ..
    }) = parse_single("for i := 0; i < 10; i++ {\n\tsum += i\n}")
    else {
        panic!("expected for");
    };
    assert!(matches!(init.as_deref(), Some(Stmt::Assign { .. })));
    assert_eq!(
        cond,
        Some(Expr::binary(Expr::ident("i"), BinaryOp::Lt, Expr::int("10")))
    );
    assert!(matches!(post.as_deref(), Some(Stmt::IncDec { op: IncDecOp::Inc, .. })));
    assert_eq!(body.len(), 1);
}

#[test]
fn test_condition_only_and_infinite_for() {
    let stmts = parse_body("for n > 0 {\n\tn--\n}\nfor {\n\tbreak\n}");
    let Stmt::ClassicFor(cond_only) = &stmts[0] else {
        panic!("expected for");
    };
    assert!(cond_only.init.is_none() && cond_only.post.is_none());
    assert!(cond_only.cond.is_some());
    let Stmt::ClassicFor(infinite) = &stmts[1] else {
        panic!("expected for");
    };
    assert!(infinite.cond.is_none());
    assert_eq!(infinite.body, vec![Stmt::Break]);
}

#[test]
fn test_range_loops() {
    let stmts = parse_body("for i, v := range xs {\n}\nfor k := range m {\n}\nfor range ch {\n}");
    assert_eq!(
        stmts[0],
        Stmt::ForEach(RangeStmt {
            key: Some(Expr::ident("i")),
            value: Some(Expr::ident("v")),
            source: Expr::ident("xs"),
            body: Vec::new(),
        })
    );
    assert!(matches!(
        &stmts[1],
        Stmt::ForEach(RangeStmt { key: Some(_), value: None, .. })
    ));
    assert!(matches!(
        &stmts[2],
        Stmt::ForEach(RangeStmt { key: None, value: None, .. })
    ));
}

#[test]
fn test_range_over_composite_literal_in_header() {
    let Stmt::ForEach(range) = parse_single("for _, n := range []int{1, 2} {\n}") else {
        panic!("expected range");
    };
    assert!(matches!(range.source, Expr::CompositeLit { .. }));
}

#[test]
fn test_expression_switch_with_cases() {
    let Stmt::Switch(SwitchStmt { init, tag, body }) =
        parse_single("switch x {\ncase 1, 2:\n\ty()\ncase 3:\ndefault:\n\tz()\n}")
    else {
        panic!("expected switch");
    };
    assert!(init.is_none());
    assert_eq!(tag, Some(Expr::ident("x")));
    assert_eq!(body.len(), 3);
    assert!(matches!(
        &body[0],
        Stmt::Case(CaseClause { labels: Some(labels), body }) if labels.len() == 2 && body.len() == 1
    ));
    assert!(matches!(&body[1], Stmt::Case(CaseClause { body, .. }) if body.is_empty()));
    assert!(matches!(&body[2], Stmt::Case(CaseClause { labels: None, .. })));
}

#[test]
fn test_tagless_switch() {
    let Stmt::Switch(switch) = parse_single("switch {\ncase a > b:\n\treturn\n}") else {
        panic!("expected switch");
    };
    assert!(switch.tag.is_none());
}

#[test]
fn test_type_switch_becomes_unsupported() {
    let stmts = parse_body("switch v := x.(type) {\ncase int:\n\tuse(v)\n}\ny := 1");
    assert!(matches!(
        stmts[0],
        Stmt::Unsupported {
            kind: UnsupportedStmt::TypeSwitch,
            ..
        }
    ));
    assert!(matches!(stmts[1], Stmt::Assign { .. }));
}

#[test]
fn test_unsupported_statements_keep_their_kind() {
    let stmts = parse_body("defer f()\ngo g()\nch <- 1\nselect {\ncase <-done:\n}\nfallthrough");
    let kinds: Vec<UnsupportedStmt> = stmts
        .iter()
        .map(|s| match s {
            Stmt::Unsupported { kind, .. } => *kind,
            other => panic!("expected unsupported, got {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            UnsupportedStmt::Defer,
            UnsupportedStmt::Go,
            UnsupportedStmt::Send,
            UnsupportedStmt::Select,
            UnsupportedStmt::Fallthrough,
        ]
    );
}

#[test]
fn test_labels_are_dropped() {
    let stmts = parse_body("outer:\nfor {\n\tbreak outer\n}");
    assert_eq!(stmts.len(), 1);
    let Stmt::ClassicFor(stmt) = &stmts[0] else {
        panic!("expected for");
    };
    assert_eq!(stmt.body, vec![Stmt::Break]);
}

#[test]
fn test_return_with_multiple_values() {
    assert_eq!(
        parse_single("return a, nil"),
        Stmt::Return(vec![Expr::ident("a"), Expr::ident("nil")])
    );
}

#[test]
fn test_nested_block() {
    assert_eq!(
        parse_single("{\n\tx()\n}"),
        Stmt::Block(vec![Stmt::Expr(Expr::call(Expr::ident("x"), Vec::new()))])
    );
}

#[test]
fn test_missing_brace_is_reported() {
    let source = "package main\n\nfunc main() {\n\tif x {\n}\n".to_string();
    let mut parser = ParserState::new("bad.go".to_string(), source);
    parser.parse_source_file();
    assert!(
        parser
            .get_diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::EXPECTED_TOKEN)
    );
}

#[test]
fn test_deep_nesting_is_bounded() {
    let depth = 5_000;
    let source = format!(
        "package main\n\nfunc main() {{\n\tx := {}1{}\n}}\n",
        "(".repeat(depth),
        ")".repeat(depth)
    );
    let mut parser = ParserState::new("deep.go".to_string(), source);
    parser.parse_source_file();
    assert!(
        parser
            .get_diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::NESTING_TOO_DEEP)
    );
}

#[test]
fn test_long_else_if_chain_is_bounded() {
    let mut body = String::from("if x == 0 {\n}");
    for i in 1..5_000 {
        body.push_str(&format!(" else if x == {i} {{\n}}"));
    }
    let source = format!("package main\n\nfunc main() {{\n{body}\n}}\n");
    let mut parser = ParserState::new("elif.go".to_string(), source);
    parser.parse_source_file();
    assert!(
        parser
            .get_diagnostics()
            .iter()
            .any(|d| d.code == diagnostic_codes::NESTING_TOO_DEEP)
    );
}
