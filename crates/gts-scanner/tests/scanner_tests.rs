//! Tests for the Go scanner: token kinds, literal spans and semicolon insertion.

use gts_scanner::{ScannerState, SyntaxKind};

fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(source.to_string());
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_text().to_string()));
    }
    tokens
}

fn kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_scans_keywords_and_identifiers() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("package main"),
        vec![PackageKeyword, Identifier, SemicolonToken]
    );
    assert_eq!(
        kinds("func (p *Point) Len() int {}"),
        vec![
            FuncKeyword,
            OpenParenToken,
            Identifier,
            AsteriskToken,
            Identifier,
            CloseParenToken,
            Identifier,
            OpenParenToken,
            CloseParenToken,
            Identifier,
            OpenBraceToken,
            CloseBraceToken,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_inserts_semicolons_after_line_final_tokens() {
    use SyntaxKind::*;
    let tokens = kinds("x := 1\ny++\nreturn\n");
    assert_eq!(
        tokens,
        vec![
            Identifier,
            ColonEqualsToken,
            IntLiteral,
            SemicolonToken,
            Identifier,
            PlusPlusToken,
            SemicolonToken,
            ReturnKeyword,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_no_semicolon_after_operators_or_open_braces() {
    use SyntaxKind::*;
    let tokens = kinds("if a &&\n b {\n}\n");
    assert_eq!(
        tokens,
        vec![
            IfKeyword,
            Identifier,
            AmpersandAmpersandToken,
            Identifier,
            OpenBraceToken,
            CloseBraceToken,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_semicolon_inserted_at_end_of_file() {
    let tokens = kinds("x");
    assert_eq!(tokens, vec![SyntaxKind::Identifier, SyntaxKind::SemicolonToken]);
}

#[test]
fn test_line_comment_does_not_swallow_semicolon() {
    use SyntaxKind::*;
    let tokens = kinds("x = 1 // trailing\ny = 2");
    assert_eq!(
        tokens,
        vec![
            Identifier,
            EqualsToken,
            IntLiteral,
            SemicolonToken,
            Identifier,
            EqualsToken,
            IntLiteral,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_string_literals_keep_their_quoting() {
    let tokens = scan_all(r#"s := "a \"quoted\" \\ word""#);
    assert_eq!(tokens[2].0, SyntaxKind::StringLiteral);
    assert_eq!(tokens[2].1, r#""a \"quoted\" \\ word""#);

    let raw = scan_all("s := `raw\nline`");
    assert_eq!(raw[2].0, SyntaxKind::StringLiteral);
    assert_eq!(raw[2].1, "`raw\nline`");
}

#[test]
fn test_rune_and_number_literals() {
    let tokens = scan_all("'a' '\\n' 42 0x1F 3.14 1e-9 .5 2i 1_000");
    let expected = [
        (SyntaxKind::RuneLiteral, "'a'"),
        (SyntaxKind::RuneLiteral, "'\\n'"),
        (SyntaxKind::IntLiteral, "42"),
        (SyntaxKind::IntLiteral, "0x1F"),
        (SyntaxKind::FloatLiteral, "3.14"),
        (SyntaxKind::FloatLiteral, "1e-9"),
        (SyntaxKind::FloatLiteral, ".5"),
        (SyntaxKind::ImagLiteral, "2i"),
        (SyntaxKind::IntLiteral, "1_000"),
    ];
    for (i, (kind, text)) in expected.iter().enumerate() {
        assert_eq!(tokens[i].0, *kind, "token {i}");
        assert_eq!(tokens[i].1, *text, "token {i}");
    }
}

#[test]
fn test_longest_match_operators() {
    use SyntaxKind::*;
    assert_eq!(
        kinds("a &^= b <<= c <- d ... e &^ f"),
        vec![
            Identifier,
            AmpersandCaretEqualsToken,
            Identifier,
            LessThanLessThanEqualsToken,
            Identifier,
            ArrowToken,
            Identifier,
            DotDotDotToken,
            Identifier,
            AmpersandCaretToken,
            Identifier,
            SemicolonToken,
        ]
    );
}

#[test]
fn test_reports_unterminated_string() {
    let mut scanner = ScannerState::new("s := \"oops\n".to_string());
    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    let diags = scanner.get_scanner_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, gts_common::diagnostic_codes::UNTERMINATED_STRING_LITERAL);
    assert_eq!(diags[0].pos, 5);
}

#[test]
fn test_reports_invalid_character() {
    let mut scanner = ScannerState::new("x := @".to_string());
    let mut saw_unknown = false;
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        saw_unknown |= kind == SyntaxKind::Unknown;
    }
    assert!(saw_unknown);
    assert_eq!(scanner.get_scanner_diagnostics()[0].code, gts_common::diagnostic_codes::INVALID_CHARACTER);
}

#[test]
fn test_restore_state_rewinds_tokens_and_diagnostics() {
    let mut scanner = ScannerState::new("a := \"open\nb".to_string());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    let snapshot = scanner.save_state();

    while scanner.scan() != SyntaxKind::EndOfFileToken {}
    assert_eq!(scanner.get_scanner_diagnostics().len(), 1);

    scanner.restore_state(snapshot);
    assert!(scanner.get_scanner_diagnostics().is_empty());
    assert_eq!(scanner.token(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_text(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::ColonEqualsToken);
}
