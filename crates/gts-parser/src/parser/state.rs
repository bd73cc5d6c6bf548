//! Parser state: token cursor, diagnostics, recursion guard and recovery.

use gts_common::diagnostic_codes;
use gts_common::diagnostics::diagnostic_messages;
use gts_common::limits::MAX_PARSER_RECURSION_DEPTH;
use gts_common::{Diagnostic, Span, format_message};
use gts_scanner::{ScannerState, SyntaxKind};

/// A syntax error found while parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub start: u32,
    pub length: u32,
    pub message: String,
    pub code: u32,
}

/// Recursive-descent parser over the Go token stream.
///
/// Parsing never stops at the first error: each error is recorded and the
/// parser skips ahead to a statement or declaration boundary. Callers must
/// treat a non-empty [`ParserState::get_diagnostics`] as a failed parse.
pub struct ParserState {
    pub(crate) scanner: ScannerState,
    pub(crate) file_name: String,
    pub(crate) current_token: SyntaxKind,
    pub(crate) parse_diagnostics: Vec<ParseDiagnostic>,
    /// Parenthesis nesting of the current expression. Set to `-1` while
    /// parsing an `if`/`for`/`switch` header, where `T{` opens the body
    /// rather than a composite literal.
    pub(crate) expr_level: i32,
    recursion_depth: u32,
    /// Start of the last reported error; suppresses cascades at one position.
    last_error_pos: Option<u32>,
}

impl ParserState {
    #[must_use]
    pub fn new(file_name: String, source_text: String) -> Self {
        Self {
            scanner: ScannerState::new(source_text),
            file_name,
            current_token: SyntaxKind::Unknown,
            parse_diagnostics: Vec::new(),
            expr_level: 0,
            recursion_depth: 0,
            last_error_pos: None,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn get_diagnostics(&self) -> &[ParseDiagnostic] {
        &self.parse_diagnostics
    }

    /// Convert collected errors to shared diagnostics, sorted by position.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let file_name = self.file_name;
        let mut diagnostics: Vec<Diagnostic> = self
            .parse_diagnostics
            .into_iter()
            .map(|d| Diagnostic::error(file_name.clone(), d.start, d.length, d.message, d.code))
            .collect();
        diagnostics.sort_by_key(|d| d.start);
        diagnostics
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.current_token = self.scanner.scan();
        self.current_token
    }

    #[inline]
    pub(crate) const fn token(&self) -> SyntaxKind {
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    pub(crate) fn token_pos(&self) -> u32 {
        u32_from_usize(self.scanner.token_start())
    }

    pub(crate) fn token_end(&self) -> u32 {
        u32_from_usize(self.scanner.token_end())
    }

    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_pos(), self.token_end())
    }

    /// Span from `start` up to the current token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.token_pos().max(start))
    }

    pub(crate) fn token_text(&self) -> String {
        self.scanner.token_text().to_string()
    }

    /// Consume `kind` or report `'kind' expected`.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            return true;
        }
        let found = self.describe_current_token();
        let message = format_message(diagnostic_messages::EXPECTED_TOKEN, &[kind.text(), &found]);
        self.parse_error_at_current_token(&message, diagnostic_codes::EXPECTED_TOKEN);
        false
    }

    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume an identifier and return its text, or report an error and return "".
    pub(crate) fn parse_identifier(&mut self) -> String {
        if self.is_token(SyntaxKind::Identifier) {
            let name = self.token_text();
            self.next_token();
            name
        } else {
            self.parse_expected(SyntaxKind::Identifier);
            String::new()
        }
    }

    /// Statement terminator: `;` (explicit or inserted), or nothing before a
    /// closing `)` or `}`.
    pub(crate) fn parse_semicolon(&mut self) {
        match self.token() {
            SyntaxKind::SemicolonToken => {
                self.next_token();
            }
            SyntaxKind::CloseParenToken | SyntaxKind::CloseBraceToken => {}
            _ => {
                self.parse_expected(SyntaxKind::SemicolonToken);
            }
        }
    }

    fn describe_current_token(&self) -> String {
        match self.token() {
            SyntaxKind::SemicolonToken if self.scanner.is_automatic_semicolon() => {
                "newline".to_string()
            }
            kind if kind.is_literal() || kind == SyntaxKind::Identifier => self.token_text(),
            kind => kind.text().to_string(),
        }
    }

    // =========================================================================
    // Look-ahead
    // =========================================================================

    /// Run `f` speculatively and rewind the token stream afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.scanner.save_state();
        let current = self.current_token;
        let diagnostic_count = self.parse_diagnostics.len();
        let last_error_pos = self.last_error_pos;
        let expr_level = self.expr_level;

        let result = f(self);

        self.scanner.restore_state(snapshot);
        self.current_token = current;
        self.parse_diagnostics.truncate(diagnostic_count);
        self.last_error_pos = last_error_pos;
        self.expr_level = expr_level;
        result
    }

    /// Kind of the token after the current one.
    pub(crate) fn peek_token(&mut self) -> SyntaxKind {
        self.look_ahead(|p| p.next_token())
    }

    // =========================================================================
    // Diagnostics and recovery
    // =========================================================================

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        if self.last_error_pos == Some(start) {
            return;
        }
        self.last_error_pos = Some(start);
        tracing::debug!(start, code, message, "parse error");
        self.parse_diagnostics.push(ParseDiagnostic {
            start,
            length,
            message: message.to_string(),
            code,
        });
    }

    /// Skip tokens up to (not past) a `;` at the current nesting depth or a
    /// closing brace that ends the enclosing block.
    pub(crate) fn skip_to_statement_end(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::EndOfFileToken => return,
                SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken if depth == 0 => return,
                SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken => depth += 1,
                SyntaxKind::CloseBraceToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.next_token();
        }
    }

    /// Skip a balanced `open ... close` group starting at the current token.
    pub(crate) fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        if !self.parse_expected(open) {
            return;
        }
        let mut depth = 1u32;
        while depth > 0 && !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.is_token(open) {
                depth += 1;
            } else if self.is_token(close) {
                depth -= 1;
            }
            self.next_token();
        }
    }

    /// Move past the current token when a list loop made no progress.
    pub(crate) fn ensure_progress(&mut self, before: u32) {
        if self.token_pos() == before && !self.is_token(SyntaxKind::EndOfFileToken) {
            self.next_token();
        }
    }

    pub(crate) fn enter_recursion(&mut self) -> bool {
        if self.recursion_depth >= MAX_PARSER_RECURSION_DEPTH {
            self.parse_error_at_current_token(
                diagnostic_messages::NESTING_TOO_DEEP,
                diagnostic_codes::NESTING_TOO_DEEP,
            );
            return false;
        }
        self.recursion_depth += 1;
        true
    }

    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_depth = self.recursion_depth.saturating_sub(1);
    }

    pub(crate) fn exit_recursions(&mut self, count: u32) {
        self.recursion_depth = self.recursion_depth.saturating_sub(count);
    }

    /// Fold scanner-level diagnostics into the parse diagnostics.
    pub(crate) fn collect_scanner_diagnostics(&mut self) {
        for diag in self.scanner.take_diagnostics() {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: u32_from_usize(diag.pos),
                length: u32_from_usize(diag.length),
                message: diag.message.to_string(),
                code: diag.code,
            });
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);
    }
}

pub(crate) fn u32_from_usize(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
