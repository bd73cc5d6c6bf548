//! Diagnostic types and message lookup.
//!
//! Parse errors use codes in the 1000 range. Translation coverage gaps (constructs
//! the printer replaces with a placeholder) use codes in the 9000 range and are
//! always reported as warnings.

use serde::Serialize;

use crate::span::Span;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 3,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Message => "message",
        }
    }
}

/// A diagnostic attached to a byte range of a source file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
        }
    }

    /// Create a new warning diagnostic.
    #[must_use]
    pub const fn warning(file: String, start: u32, length: u32, message: String, code: u32) -> Self {
        Self {
            file,
            start,
            length,
            message_text: message,
            category: DiagnosticCategory::Warning,
            code,
        }
    }

    /// Create a diagnostic from a registered code, using its template and category.
    ///
    /// Unknown codes fall back to an error with the code number as the message.
    #[must_use]
    pub fn from_code(file: &str, span: Span, code: u32, args: &[&str]) -> Self {
        let (category, message) = match get_diagnostic_message(code) {
            Some(m) => (m.category, format_message(m.message, args)),
            None => (DiagnosticCategory::Error, format!("GTS{code}")),
        };
        Self {
            file: file.to_string(),
            start: span.start,
            length: span.len(),
            message_text: message,
            category,
            code,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.category, DiagnosticCategory::Error)
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span::new(self.start, self.start.saturating_add(self.length))
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    // Scanner / parser
    pub const INVALID_CHARACTER: u32 = 1001;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1002;
    pub const UNTERMINATED_COMMENT: u32 = 1003;
    pub const UNTERMINATED_RUNE_LITERAL: u32 = 1004;
    pub const EXPECTED_TOKEN: u32 = 1005;
    pub const EXPRESSION_EXPECTED: u32 = 1006;
    pub const TYPE_EXPECTED: u32 = 1007;
    pub const DECLARATION_EXPECTED: u32 = 1008;
    pub const PACKAGE_CLAUSE_EXPECTED: u32 = 1009;
    pub const STATEMENT_EXPECTED: u32 = 1010;
    pub const NESTING_TOO_DEEP: u32 = 1011;

    // Translation coverage gaps
    pub const TYPE_SWITCH_NOT_SUPPORTED: u32 = 9001;
    pub const STATEMENT_NOT_SUPPORTED: u32 = 9002;
    pub const EXPRESSION_NOT_SUPPORTED: u32 = 9003;
    pub const COMPOSITE_LITERAL_NOT_SUPPORTED: u32 = 9004;
    pub const TYPE_NOT_SUPPORTED: u32 = 9005;
    pub const MULTI_ASSIGNMENT_NOT_SUPPORTED: u32 = 9006;
    pub const LOOP_VARIABLE_NOT_RECOVERED: u32 = 9007;
    pub const PRINT_ARGUMENTS_DROPPED: u32 = 9008;
}

pub mod diagnostic_messages {
    pub const INVALID_CHARACTER: &str = "Invalid character.";
    pub const UNTERMINATED_STRING_LITERAL: &str = "Unterminated string literal.";
    pub const UNTERMINATED_COMMENT: &str = "'*/' expected.";
    pub const UNTERMINATED_RUNE_LITERAL: &str = "Unterminated rune literal.";
    pub const EXPECTED_TOKEN: &str = "'{0}' expected, found '{1}'.";
    pub const EXPRESSION_EXPECTED: &str = "Expression expected.";
    pub const TYPE_EXPECTED: &str = "Type expected.";
    pub const DECLARATION_EXPECTED: &str = "Declaration expected.";
    pub const PACKAGE_CLAUSE_EXPECTED: &str = "'package' clause expected.";
    pub const STATEMENT_EXPECTED: &str = "Statement expected.";
    pub const NESTING_TOO_DEEP: &str = "Source nesting is too deep.";

    pub const TYPE_SWITCH_NOT_SUPPORTED: &str = "Type switches are not supported; emitted a placeholder.";
    pub const STATEMENT_NOT_SUPPORTED: &str = "'{0}' statements are not supported; emitted a placeholder.";
    pub const EXPRESSION_NOT_SUPPORTED: &str = "{0} is not supported; emitted a placeholder.";
    pub const COMPOSITE_LITERAL_NOT_SUPPORTED: &str = "Only sequence composite literals are supported; emitted a placeholder.";
    pub const TYPE_NOT_SUPPORTED: &str = "{0} types are not supported; emitted 'unknown'.";
    pub const MULTI_ASSIGNMENT_NOT_SUPPORTED: &str = "Assignments with {0} targets and {1} values are not supported; emitted a placeholder.";
    pub const LOOP_VARIABLE_NOT_RECOVERED: &str = "Could not determine the loop variable; emitted a 'while' loop without init and post.";
    pub const PRINT_ARGUMENTS_DROPPED: &str = "'print' takes one value; dropped {0} trailing argument(s).";
}

use DiagnosticCategory::{Error, Warning};

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage { code: diagnostic_codes::INVALID_CHARACTER, category: Error, message: diagnostic_messages::INVALID_CHARACTER },
    DiagnosticMessage { code: diagnostic_codes::UNTERMINATED_STRING_LITERAL, category: Error, message: diagnostic_messages::UNTERMINATED_STRING_LITERAL },
    DiagnosticMessage { code: diagnostic_codes::UNTERMINATED_COMMENT, category: Error, message: diagnostic_messages::UNTERMINATED_COMMENT },
    DiagnosticMessage { code: diagnostic_codes::UNTERMINATED_RUNE_LITERAL, category: Error, message: diagnostic_messages::UNTERMINATED_RUNE_LITERAL },
    DiagnosticMessage { code: diagnostic_codes::EXPECTED_TOKEN, category: Error, message: diagnostic_messages::EXPECTED_TOKEN },
    DiagnosticMessage { code: diagnostic_codes::EXPRESSION_EXPECTED, category: Error, message: diagnostic_messages::EXPRESSION_EXPECTED },
    DiagnosticMessage { code: diagnostic_codes::TYPE_EXPECTED, category: Error, message: diagnostic_messages::TYPE_EXPECTED },
    DiagnosticMessage { code: diagnostic_codes::DECLARATION_EXPECTED, category: Error, message: diagnostic_messages::DECLARATION_EXPECTED },
    DiagnosticMessage { code: diagnostic_codes::PACKAGE_CLAUSE_EXPECTED, category: Error, message: diagnostic_messages::PACKAGE_CLAUSE_EXPECTED },
    DiagnosticMessage { code: diagnostic_codes::STATEMENT_EXPECTED, category: Error, message: diagnostic_messages::STATEMENT_EXPECTED },
    DiagnosticMessage { code: diagnostic_codes::NESTING_TOO_DEEP, category: Error, message: diagnostic_messages::NESTING_TOO_DEEP },
    DiagnosticMessage { code: diagnostic_codes::TYPE_SWITCH_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::TYPE_SWITCH_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::STATEMENT_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::STATEMENT_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::EXPRESSION_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::EXPRESSION_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::COMPOSITE_LITERAL_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::COMPOSITE_LITERAL_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::TYPE_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::TYPE_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::MULTI_ASSIGNMENT_NOT_SUPPORTED, category: Warning, message: diagnostic_messages::MULTI_ASSIGNMENT_NOT_SUPPORTED },
    DiagnosticMessage { code: diagnostic_codes::LOOP_VARIABLE_NOT_RECOVERED, category: Warning, message: diagnostic_messages::LOOP_VARIABLE_NOT_RECOVERED },
    DiagnosticMessage { code: diagnostic_codes::PRINT_ARGUMENTS_DROPPED, category: Warning, message: diagnostic_messages::PRINT_ARGUMENTS_DROPPED },
];

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}
