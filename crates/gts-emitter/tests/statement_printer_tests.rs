//! Statement emission: control flow headers, desugaring and indentation.

use gts_common::diagnostic_codes;
use gts_emitter::{PrintOptions, PrintOutput, print_source_file};

fn translate(source: &str) -> PrintOutput {
    let file = gts_parser::parse_file("test.go", source).expect("source parses");
    print_source_file(&file, PrintOptions::default())
}

fn translate_main(body: &str) -> PrintOutput {
    translate(&format!("package main\n\nfunc main() {{\n{body}\n}}\n"))
}

/// Translate a warning-free body.
fn translate_clean(body: &str) -> String {
    let output = translate_main(body);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected warnings: {:?}",
        output.diagnostics
    );
    output.code
}

fn codes(output: &PrintOutput) -> Vec<u32> {
    output.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn test_three_clause_for_loop() {
    let code = translate_clean("for i := 0; i < 10; i++ {\n\tfmt.Println(i)\n}");
    assert_eq!(code, "for i; i < 10; i = i + 1:\n    print i\n");
}

#[test]
fn test_three_clause_for_with_compound_post() {
    let code = translate_clean("for n := 1; n < 100; n *= 2 {\n}");
    assert_eq!(code, "for n; n < 100; n = n * 2:\n");
}

#[test]
fn test_condition_only_and_infinite_loops() {
    let code = translate_clean("for x < 3 {\n\tx++\n}\nfor {\n\tbreak\n}");
    assert_eq!(code, "while x < 3:\n    x = x + 1\nwhile true:\n    break\n");
}

#[test]
fn test_loop_without_single_variable_falls_back_to_while() {
    let output = translate_main("for a, b := 0, 1; a < 10; a++ {\n\tcontinue\n}");
    assert_eq!(output.code, "while a < 10:\n    continue\n");
    assert_eq!(codes(&output), vec![diagnostic_codes::LOOP_VARIABLE_NOT_RECOVERED]);
}

#[test]
fn test_range_loops() {
    let code = translate_clean(
        "for i, v := range xs {\n\tf(i, v)\n}\nfor k := range m {\n\tf(k)\n}\nfor range xs {\n}",
    );
    assert_eq!(
        code,
        "for i, v in xs:\n    f(i, v)\nfor k in m:\n    f(k)\nfor _ in xs:\n"
    );
}

#[test]
fn test_if_elif_else_chain() {
    let code = translate_clean(
        "if x > 0 {\n\tf()\n} else if x < 0 {\n\tg()\n} else {\n\th()\n}",
    );
    assert_eq!(
        code,
        "if x > 0:\n    f()\nelif x < 0:\n    g()\nelse:\n    h()\n"
    );
}

#[test]
fn test_if_init_statement_is_hoisted() {
    let code = translate_clean("if err := run(); err != nil {\n\treturn\n}");
    assert_eq!(code, "err = run()\nif err != nil:\n    return\n");
}

#[test]
fn test_assignments_and_compound_operators() {
    let code = translate_clean("x := 1\nx = 2\nx += 3\nx -= y\nx <<= 1\nx &^= mask");
    assert_eq!(
        code,
        "x = 1\nx = 2\nx = x + 3\nx = x - y\nx = x << 1\nx = x &^ mask\n"
    );
}

#[test]
fn test_increment_and_decrement() {
    let code = translate_clean("count++\np.n--");
    assert_eq!(code, "count = count + 1\np.n = p.n - 1\n");
}

#[test]
fn test_local_declarations() {
    let code = translate_clean("var n int\nvar s = \"a\"\nvar xs []int = nil\nvar q float64");
    assert_eq!(code, "int n\ns = \"a\"\nlist[int] xs = nil\nfloat q\n");
}

#[test]
fn test_switch_with_cases_and_default() {
    let code = translate_clean(
        "switch x {\ncase 1, 2:\n\ta()\ncase 3:\ndefault:\n\tb()\n\tc()\n}",
    );
    assert_eq!(
        code,
        "switch x:\n    case 1, 2:\n        a()\n    case 3:\n    default:\n        b()\n        c()\n"
    );
}

#[test]
fn test_tagless_switch() {
    let code = translate_clean("switch {\ncase x > 1:\n\tf()\n}");
    assert_eq!(code, "switch:\n    case x > 1:\n        f()\n");
}

#[test]
fn test_type_switch_is_a_single_placeholder() {
    let output = translate_main("switch v := x.(type) {\ncase int:\n\tf(v)\n}\ng()");
    assert_eq!(output.code, "# type switch not supported\ng()\n");
    assert_eq!(codes(&output), vec![diagnostic_codes::TYPE_SWITCH_NOT_SUPPORTED]);
}

#[test]
fn test_unsupported_statements_become_placeholders() {
    let output = translate_main("go worker()\ndefer close()\nf()");
    assert_eq!(output.code, "# unknown statement\n# unknown statement\nf()\n");
    let messages: Vec<&str> = output
        .diagnostics
        .iter()
        .map(|d| d.message_text.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "'go' statements are not supported; emitted a placeholder.",
            "'defer' statements are not supported; emitted a placeholder.",
        ]
    );
}

#[test]
fn test_multi_assignment_is_a_placeholder() {
    let output = translate_main("a, b = b, a\nq, err := div(4, 2)");
    assert_eq!(output.code, "# unknown statement\n# unknown statement\n");
    assert_eq!(
        codes(&output),
        vec![
            diagnostic_codes::MULTI_ASSIGNMENT_NOT_SUPPORTED,
            diagnostic_codes::MULTI_ASSIGNMENT_NOT_SUPPORTED,
        ]
    );
    assert_eq!(
        output.diagnostics[1].message_text,
        "Assignments with 2 targets and 1 values are not supported; emitted a placeholder."
    );
}

#[test]
fn test_returns() {
    let output = translate(
        "package main\n\nfunc f() {\n\treturn\n}\n\nfunc g() (int, int) {\n\treturn 1, 2\n}\n",
    );
    assert_eq!(output.code, "fn f():\n    return\n\nfn g():\n    return 1, 2\n\n");
}

#[test]
fn test_nested_blocks_flatten_into_the_enclosing_body() {
    let code = translate_clean("{\n\tx := 1\n\t{\n\t\ty := x\n\t}\n}");
    assert_eq!(code, "x = 1\ny = x\n");
}

#[test]
fn test_nested_bodies_indent_and_return_to_depth() {
    let source = "package main\n\nfunc walk(xs []int) {\n\tfor _, x := range xs {\n\t\tif x > 0 {\n\t\t\tswitch x {\n\t\t\tcase 1:\n\t\t\t\tf()\n\t\t\t}\n\t\t}\n\t}\n\tdone()\n}\n";
    let output = translate(source);
    assert_eq!(
        output.code,
        "fn walk(list[int] xs):\n    for _, x in xs:\n        if x > 0:\n            switch x:\n                case 1:\n                    f()\n    done()\n\n"
    );
}

#[test]
fn test_break_and_continue_drop_labels() {
    let code = translate_clean("outer:\nfor {\n\tfor {\n\t\tbreak outer\n\t}\n\tcontinue outer\n}");
    assert_eq!(code, "while true:\n    while true:\n        break\n    continue\n");
}
