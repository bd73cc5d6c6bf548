//! End-to-end translation tests.
//!
//! These run the full pipeline (scan, parse, print) on whole Go files and
//! compare the Scar output line for line.

use gts::{PrintOptions, PrintOutput, diagnostic_codes, translate};

fn translate_ok(source: &str) -> PrintOutput {
    translate("main.go", source, PrintOptions::default()).expect("source should parse")
}

fn main_body(body: &str) -> String {
    let output = translate_ok(&format!("package main\n\nfunc main() {{\n{body}\n}}\n"));
    assert!(
        output.diagnostics.is_empty(),
        "unexpected warnings: {:?}",
        output.diagnostics
    );
    output.code
}

#[test]
fn test_classic_for_loop_with_compound_body() {
    let code = main_body("sum := 0\nfor i := 0; i < 10; i++ {\n\tsum += i\n}");
    assert_eq!(code, "sum = 0\nfor i; i < 10; i = i + 1:\n    sum = sum + i\n");
}

#[test]
fn test_if_else_with_returns() {
    let output = translate_ok(
        "package main\n\nfunc check(err error) error {\n\tif err != nil {\n\t\treturn err\n\t} else {\n\t\treturn nil\n\t}\n}\n",
    );
    assert_eq!(
        output.code,
        "fn check(error err) -> error:\n    if err != nil:\n        return err\n    else:\n        return nil\n\n"
    );
}

#[test]
fn test_printf_with_format_arguments() {
    let code = main_body("fmt.Printf(\"%d-%s\", n, s)");
    assert_eq!(code, "print \"%d-%s\" | n, s\n");
}

#[test]
fn test_main_is_inlined() {
    let output = translate_ok("package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n");
    assert_eq!(output.code, "print \"hi\"\n");
    assert!(!output.code.contains("fn main"));
}

#[test]
fn test_append_becomes_add() {
    assert_eq!(main_body("xs = append(xs, 5)"), "xs = xs.add(5)\n");
}

#[test]
fn test_string_literals_pass_through_unchanged() {
    let code = main_body("s := \"tab\\there \\\"q\\\" \\u00e9\"\nr := `raw\\n`\nc := 'x'");
    assert_eq!(
        code,
        "s = \"tab\\there \\\"q\\\" \\u00e9\"\nr = `raw\\n`\nc = 'x'\n"
    );
}

#[test]
fn test_translation_is_deterministic() {
    let source = "package main\n\nimport (\n\t\"os\"\n\t\"strings\"\n)\n\ntype T struct {\n\ta int\n}\n\nfunc main() {\n\tgo f()\n\tx := T{1}\n}\n";
    let first = translate_ok(source);
    let second = translate_ok(source);
    assert_eq!(first.code, second.code);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_unsupported_statement_emits_one_line_at_current_depth() {
    let output = translate_ok(
        "package main\n\nfunc run() {\n\tif ok {\n\t\tdefer cleanup()\n\t\tdone()\n\t}\n}\n",
    );
    assert_eq!(
        output.code,
        "fn run():\n    if ok:\n        # unknown statement\n        done()\n\n"
    );
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].code, diagnostic_codes::STATEMENT_NOT_SUPPORTED);
}

#[test]
fn test_indentation_is_balanced() {
    let output = translate_ok(
        "package main\n\nfunc deep(xs []int) int {\n\ttotal := 0\n\tfor _, x := range xs {\n\t\tif x > 0 {\n\t\t\tfor j := 0; j < x; j++ {\n\t\t\t\ttotal++\n\t\t\t}\n\t\t}\n\t}\n\treturn total\n}\n\nvar after = 1\n",
    );
    let lines: Vec<&str> = output.code.lines().collect();
    assert_eq!(lines[0], "fn deep(list[int] xs) -> int:");
    assert_eq!(lines[5], "                total = total + 1");
    assert_eq!(lines[6], "    return total");
    assert_eq!(lines[8], "after = 1");
    for line in &lines {
        let indent = line.len() - line.trim_start_matches(' ').len();
        assert_eq!(indent % 4, 0, "misaligned line {line:?}");
    }
}

#[test]
fn test_full_program() {
    let source = r#"package main

import (
	"fmt"
	"math"
	"strconv"
	"strings"
)

type Shape interface {
	Area() float64
}

type Rect struct {
	w, h float64
}

func (r *Rect) Area() float64 {
	return r.w * r.h
}

func describe(names []string, count int) string {
	if count == 0 {
		return "none"
	}
	return strings.Join(names, ",")
}

func main() {
	shapes := []float64{1.5, 2.5}
	total := 0.0
	for _, s := range shapes {
		total += s
	}
	counts := make([]int, 3)
	counts = append(counts, len(shapes))
	switch len(counts) {
	case 4:
		fmt.Println("four")
	default:
		fmt.Printf("%d\n", len(counts))
	}
	fmt.Println(math.Sqrt(total))
}
"#;
    let output = translate_ok(source);
    let expected = r#"import "std/math"
import "std/strings"
import "std/strings"

interface Shape:
    fn Area() -> float

class Rect:
    init:
        float this.w
        float this.h

fn Area(this Rect) -> float:
    return r.w * r.h

fn describe(list[string] names, int count) -> string:
    if count == 0:
        return "none"
    return strings.Join(names, ",")

shapes = [1.5, 2.5]
total = 0.0
for _, s in shapes:
    total = total + s
counts = new list[int](3)
counts = counts.add(len(shapes))
switch len(counts):
    case 4:
        print "four"
    default:
        print "%d\n" | len(counts)
print math.Sqrt(total)
"#;
    assert_eq!(output.code, expected);
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_syntax_errors_fail_the_translation() {
    let errors = translate("bad.go", "package main\n\nfunc main() {\n\tif {\n}\n", PrintOptions::default())
        .expect_err("should not parse");
    assert!(!errors.is_empty());
    assert!(errors.iter().all(gts::Diagnostic::is_error));
    assert!(errors.windows(2).all(|pair| pair[0].start <= pair[1].start));
}

#[test]
fn test_keep_main_option() {
    let options = PrintOptions {
        keep_main: true,
        ..PrintOptions::default()
    };
    let output = translate("main.go", "package main\n\nfunc main() {\n\trun()\n}\n", options)
        .expect("source should parse");
    assert_eq!(output.code, "fn main():\n    run()\n\n");
}

#[test]
fn test_long_chains_report_nesting_instead_of_overflowing() {
    for expr in [
        format!("a.b(){}", ".c()".repeat(3000)),
        vec!["1"; 10_000].join(" + "),
        format!("xs{}", "[0]".repeat(3000)),
    ] {
        let source = format!("package main\n\nfunc main() {{\n\tx := {expr}\n}}\n");
        let errors = translate("chain.go", &source, PrintOptions::default())
            .expect_err("chain past the nesting limit should not translate");
        assert!(
            errors
                .iter()
                .any(|d| d.code == diagnostic_codes::NESTING_TOO_DEEP)
        );
    }
}

#[test]
fn test_chain_below_the_nesting_limit_translates() {
    let code = main_body(&format!("x := a.b(){}", ".c()".repeat(100)));
    assert_eq!(code, format!("x = a.b(){}\n", ".c()".repeat(100)));
}
