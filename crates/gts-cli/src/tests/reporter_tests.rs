use gts_common::{Diagnostic, Span, diagnostic_codes};

use super::reporter::Reporter;

const SOURCE: &str = "package main\n\nfunc main() {\n\tgo run()\n}\n";

fn go_statement_warning() -> Diagnostic {
    let start = u32::try_from(SOURCE.find("go run").expect("offset")).expect("fits");
    Diagnostic::from_code(
        "main.go",
        Span::new(start, start + 8),
        diagnostic_codes::STATEMENT_NOT_SUPPORTED,
        &["go"],
    )
}

#[test]
fn formats_location_category_and_code() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("main.go", SOURCE);

    let rendered = reporter.format_diagnostic(&go_statement_warning());
    let first_line = rendered.lines().next().expect("header line");
    assert_eq!(
        first_line,
        "main.go:4:2 - warning GTS9002: 'go' statements are not supported; emitted a placeholder."
    );
}

#[test]
fn snippet_underlines_the_span() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("main.go", SOURCE);

    let rendered = reporter.format_diagnostic(&go_statement_warning());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "    4       go run()");
    assert_eq!(lines[2], "            ~~~~~~~~");
}

#[test]
fn unknown_file_falls_back_to_name() {
    let mut reporter = Reporter::new(false);
    let diagnostic = Diagnostic::error(
        "does/not/exist.go".to_string(),
        0,
        0,
        "'package' clause expected.".to_string(),
        diagnostic_codes::PACKAGE_CLAUSE_EXPECTED,
    );
    assert_eq!(
        reporter.render(&[diagnostic]),
        "does/not/exist.go - error GTS1009: 'package' clause expected."
    );
}

#[test]
fn render_separates_diagnostics_with_newlines() {
    let mut reporter = Reporter::new(false);
    reporter.add_source("main.go", SOURCE);
    let diagnostic = go_statement_warning();
    let rendered = reporter.render(&[diagnostic.clone(), diagnostic]);
    assert_eq!(rendered.matches("GTS9002").count(), 2);
}
