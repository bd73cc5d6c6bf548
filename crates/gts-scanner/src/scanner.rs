//! Scanner state machine for Go source text.
//!
//! The scanner produces one token per `scan()` call and implements Go's
//! automatic semicolon insertion: a newline (or end of file, or a block comment
//! spanning lines) after an identifier, literal, `break`, `continue`,
//! `fallthrough`, `return`, `++`, `--`, `)`, `]` or `}` yields a `;` token.
//! Comments are skipped; the translator does not carry them over.

use gts_common::diagnostics::{diagnostic_codes, diagnostic_messages};
use memchr::{memchr, memmem};

use crate::char_codes::{is_decimal_digit, is_horizontal_whitespace, is_identifier_part, is_letter, is_number_part};
use crate::syntax_kind::SyntaxKind;

/// A lexical error found while scanning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Saved scanner position for speculative look-ahead.
#[derive(Clone, Copy, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_end: usize,
    insert_semicolon: bool,
    automatic_semicolon: bool,
    diagnostic_count: usize,
}

pub struct ScannerState {
    text: String,
    pos: usize,
    token: SyntaxKind,
    token_start: usize,
    token_end: usize,
    /// Set when a newline at the current position must become a semicolon.
    insert_semicolon: bool,
    /// Whether the current `;` token was inserted by the scanner.
    automatic_semicolon: bool,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl ScannerState {
    #[must_use]
    pub fn new(text: String) -> Self {
        Self {
            text,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_end: 0,
            insert_semicolon: false,
            automatic_semicolon: false,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn token(&self) -> SyntaxKind {
        self.token
    }

    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    #[must_use]
    pub const fn token_end(&self) -> usize {
        self.token_end
    }

    /// Source text of the current token (`"\n"` or `""` for inserted semicolons).
    #[must_use]
    pub fn token_text(&self) -> &str {
        self.text.get(self.token_start..self.token_end).unwrap_or("")
    }

    #[must_use]
    pub const fn is_automatic_semicolon(&self) -> bool {
        self.automatic_semicolon
    }

    #[must_use]
    pub fn get_scanner_diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<ScannerDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    #[must_use]
    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_start: self.token_start,
            token_end: self.token_end,
            insert_semicolon: self.insert_semicolon,
            automatic_semicolon: self.automatic_semicolon,
            diagnostic_count: self.diagnostics.len(),
        }
    }

    /// Rewind to a snapshot, dropping diagnostics reported after it was taken.
    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_start = snapshot.token_start;
        self.token_end = snapshot.token_end;
        self.insert_semicolon = snapshot.insert_semicolon;
        self.automatic_semicolon = snapshot.automatic_semicolon;
        self.diagnostics.truncate(snapshot.diagnostic_count);
    }

    /// Scan the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.automatic_semicolon = false;
        if let Some(kind) = self.skip_trivia() {
            return kind;
        }

        self.token_start = self.pos;
        let kind = self.scan_token();
        self.token_end = self.pos;
        self.token = kind;
        self.insert_semicolon = kind.triggers_semicolon_insertion();
        kind
    }

    /// Skip whitespace and comments. Returns a token when trivia itself
    /// terminates the statement (inserted semicolon) or ends the input.
    fn skip_trivia(&mut self) -> Option<SyntaxKind> {
        let len = self.text.len();
        loop {
            while self.pos < len && is_horizontal_whitespace(self.byte_at(self.pos)) {
                self.pos += 1;
            }

            if self.pos >= len {
                if self.insert_semicolon {
                    return Some(self.automatic_semicolon_at(self.pos, self.pos));
                }
                self.token_start = len;
                self.token_end = len;
                self.token = SyntaxKind::EndOfFileToken;
                return Some(SyntaxKind::EndOfFileToken);
            }

            match (self.byte_at(self.pos), self.byte_at(self.pos + 1)) {
                (b'\n', _) => {
                    if self.insert_semicolon {
                        let start = self.pos;
                        self.pos += 1;
                        return Some(self.automatic_semicolon_at(start, self.pos));
                    }
                    self.pos += 1;
                }
                (b'/', b'/') => {
                    // The newline ending the comment is handled on the next iteration.
                    let rest = &self.text.as_bytes()[self.pos..];
                    self.pos = memchr(b'\n', rest).map_or(len, |i| self.pos + i);
                }
                (b'/', b'*') => {
                    let start = self.pos;
                    let body_start = self.pos + 2;
                    let body = &self.text.as_bytes()[body_start..];
                    let (end, spans_lines) = match memmem::find(body, b"*/") {
                        Some(i) => (body_start + i + 2, memchr(b'\n', &body[..i]).is_some()),
                        None => {
                            self.push_diagnostic(
                                start,
                                len - start,
                                diagnostic_messages::UNTERMINATED_COMMENT,
                                diagnostic_codes::UNTERMINATED_COMMENT,
                            );
                            (len, true)
                        }
                    };
                    self.pos = end;
                    if spans_lines && self.insert_semicolon {
                        return Some(self.automatic_semicolon_at(start, start));
                    }
                }
                _ => return None,
            }
        }
    }

    fn automatic_semicolon_at(&mut self, start: usize, end: usize) -> SyntaxKind {
        self.insert_semicolon = false;
        self.automatic_semicolon = true;
        self.token_start = start;
        self.token_end = end;
        self.token = SyntaxKind::SemicolonToken;
        SyntaxKind::SemicolonToken
    }

    fn scan_token(&mut self) -> SyntaxKind {
        let ch = self.byte_at(self.pos);
        if is_letter(ch) {
            return self.scan_identifier();
        }
        if is_decimal_digit(ch) || (ch == b'.' && is_decimal_digit(self.byte_at(self.pos + 1))) {
            return self.scan_number();
        }

        match ch {
            b'"' => self.scan_interpreted_string(),
            b'`' => self.scan_raw_string(),
            b'\'' => self.scan_rune(),
            _ => self.scan_operator(ch),
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        while self.pos < self.text.len() && is_identifier_part(self.byte_at(self.pos)) {
            self.pos += 1;
        }
        SyntaxKind::keyword(&self.text[start..self.pos]).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        let mut kind = SyntaxKind::IntLiteral;
        let is_hex = self.byte_at(self.pos) == b'0' && matches!(self.byte_at(self.pos + 1), b'x' | b'X');
        if self.byte_at(self.pos) == b'0' && matches!(self.byte_at(self.pos + 1), b'x' | b'X' | b'b' | b'B' | b'o' | b'O') {
            self.pos += 2;
        }

        if is_hex {
            self.consume_while(is_number_part);
            if self.byte_at(self.pos) == b'.' {
                kind = SyntaxKind::FloatLiteral;
                self.pos += 1;
                self.consume_while(is_number_part);
            }
            if matches!(self.byte_at(self.pos), b'p' | b'P') {
                kind = SyntaxKind::FloatLiteral;
                self.scan_exponent();
            }
        } else {
            self.consume_while(|b| is_decimal_digit(b) || b == b'_');
            if self.byte_at(self.pos) == b'.' && self.byte_at(self.pos + 1) != b'.' {
                kind = SyntaxKind::FloatLiteral;
                self.pos += 1;
                self.consume_while(|b| is_decimal_digit(b) || b == b'_');
            }
            if matches!(self.byte_at(self.pos), b'e' | b'E') {
                kind = SyntaxKind::FloatLiteral;
                self.scan_exponent();
            }
        }

        if self.byte_at(self.pos) == b'i' {
            self.pos += 1;
            kind = SyntaxKind::ImagLiteral;
        }
        kind
    }

    fn scan_exponent(&mut self) {
        self.pos += 1;
        if matches!(self.byte_at(self.pos), b'+' | b'-') {
            self.pos += 1;
        }
        self.consume_while(|b| is_decimal_digit(b) || b == b'_');
    }

    fn scan_interpreted_string(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.pos >= self.text.len() || self.byte_at(self.pos) == b'\n' {
                self.push_diagnostic(
                    start,
                    self.pos - start,
                    diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                    diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                );
                break;
            }
            match self.byte_at(self.pos) {
                b'"' => {
                    self.pos += 1;
                    break;
                }
                b'\\' if self.byte_at(self.pos + 1) != b'\n' => self.pos += 2,
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.text.len());
        SyntaxKind::StringLiteral
    }

    fn scan_raw_string(&mut self) -> SyntaxKind {
        let start = self.pos;
        let body_start = self.pos + 1;
        match memchr(b'`', &self.text.as_bytes()[body_start..]) {
            Some(i) => self.pos = body_start + i + 1,
            None => {
                self.pos = self.text.len();
                self.push_diagnostic(
                    start,
                    self.pos - start,
                    diagnostic_messages::UNTERMINATED_STRING_LITERAL,
                    diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                );
            }
        }
        SyntaxKind::StringLiteral
    }

    fn scan_rune(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        loop {
            if self.pos >= self.text.len() || self.byte_at(self.pos) == b'\n' {
                self.push_diagnostic(
                    start,
                    self.pos - start,
                    diagnostic_messages::UNTERMINATED_RUNE_LITERAL,
                    diagnostic_codes::UNTERMINATED_RUNE_LITERAL,
                );
                break;
            }
            match self.byte_at(self.pos) {
                b'\'' => {
                    self.pos += 1;
                    break;
                }
                b'\\' if self.byte_at(self.pos + 1) != b'\n' => self.pos += 2,
                _ => self.pos += 1,
            }
        }
        self.pos = self.pos.min(self.text.len());
        SyntaxKind::RuneLiteral
    }

    fn scan_operator(&mut self, ch: u8) -> SyntaxKind {
        use SyntaxKind as K;

        let next = self.byte_at(self.pos + 1);
        let third = self.byte_at(self.pos + 2);
        let (kind, width) = match ch {
            b'+' => match next {
                b'+' => (K::PlusPlusToken, 2),
                b'=' => (K::PlusEqualsToken, 2),
                _ => (K::PlusToken, 1),
            },
            b'-' => match next {
                b'-' => (K::MinusMinusToken, 2),
                b'=' => (K::MinusEqualsToken, 2),
                _ => (K::MinusToken, 1),
            },
            b'*' if next == b'=' => (K::AsteriskEqualsToken, 2),
            b'*' => (K::AsteriskToken, 1),
            b'/' if next == b'=' => (K::SlashEqualsToken, 2),
            b'/' => (K::SlashToken, 1),
            b'%' if next == b'=' => (K::PercentEqualsToken, 2),
            b'%' => (K::PercentToken, 1),
            b'&' => match (next, third) {
                (b'&', _) => (K::AmpersandAmpersandToken, 2),
                (b'^', b'=') => (K::AmpersandCaretEqualsToken, 3),
                (b'^', _) => (K::AmpersandCaretToken, 2),
                (b'=', _) => (K::AmpersandEqualsToken, 2),
                _ => (K::AmpersandToken, 1),
            },
            b'|' => match next {
                b'|' => (K::BarBarToken, 2),
                b'=' => (K::BarEqualsToken, 2),
                _ => (K::BarToken, 1),
            },
            b'^' if next == b'=' => (K::CaretEqualsToken, 2),
            b'^' => (K::CaretToken, 1),
            b'<' => match (next, third) {
                (b'<', b'=') => (K::LessThanLessThanEqualsToken, 3),
                (b'<', _) => (K::LessThanLessThanToken, 2),
                (b'=', _) => (K::LessThanEqualsToken, 2),
                (b'-', _) => (K::ArrowToken, 2),
                _ => (K::LessThanToken, 1),
            },
            b'>' => match (next, third) {
                (b'>', b'=') => (K::GreaterThanGreaterThanEqualsToken, 3),
                (b'>', _) => (K::GreaterThanGreaterThanToken, 2),
                (b'=', _) => (K::GreaterThanEqualsToken, 2),
                _ => (K::GreaterThanToken, 1),
            },
            b'=' if next == b'=' => (K::EqualsEqualsToken, 2),
            b'=' => (K::EqualsToken, 1),
            b'!' if next == b'=' => (K::ExclamationEqualsToken, 2),
            b'!' => (K::ExclamationToken, 1),
            b':' if next == b'=' => (K::ColonEqualsToken, 2),
            b':' => (K::ColonToken, 1),
            b'.' if next == b'.' && third == b'.' => (K::DotDotDotToken, 3),
            b'.' => (K::DotToken, 1),
            b'~' => (K::TildeToken, 1),
            b'(' => (K::OpenParenToken, 1),
            b'[' => (K::OpenBracketToken, 1),
            b'{' => (K::OpenBraceToken, 1),
            b',' => (K::CommaToken, 1),
            b')' => (K::CloseParenToken, 1),
            b']' => (K::CloseBracketToken, 1),
            b'}' => (K::CloseBraceToken, 1),
            b';' => (K::SemicolonToken, 1),
            _ => {
                self.push_diagnostic(
                    self.pos,
                    1,
                    diagnostic_messages::INVALID_CHARACTER,
                    diagnostic_codes::INVALID_CHARACTER,
                );
                (K::Unknown, 1)
            }
        };
        self.pos += width;
        kind
    }

    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.text.len() && pred(self.byte_at(self.pos)) {
            self.pos += 1;
        }
    }

    /// Byte at `pos`, or 0 past the end of input.
    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    fn push_diagnostic(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::ScannerState;
    use crate::SyntaxKind;

    #[test]
    fn block_comment_across_lines_inserts_semicolon() {
        let mut scanner = ScannerState::new("x /* a\nb */ y".to_string());
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
        assert!(scanner.is_automatic_semicolon());
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "y");
    }

    #[test]
    fn single_line_block_comment_is_plain_trivia() {
        let mut scanner = ScannerState::new("x /* a */ y".to_string());
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }
}
