//! Go parser for the gts translator.
//!
//! This crate provides:
//! - `ast` - the owned syntax tree for the supported Go subset
//! - `ParserState` - the recursive-descent parser producing it

pub mod ast;

pub mod parser;
pub use parser::{ParseDiagnostic, ParserState};

use gts_common::Diagnostic;

/// Parse `source` as the Go file `file_name`.
///
/// # Errors
///
/// Returns every syntax error, sorted by position, when the source does not
/// parse cleanly.
pub fn parse_file(file_name: &str, source: &str) -> Result<ast::SourceFile, Vec<Diagnostic>> {
    let mut parser = ParserState::new(file_name.to_string(), source.to_string());
    let file = parser.parse_source_file();
    if parser.get_diagnostics().is_empty() {
        Ok(file)
    } else {
        Err(parser.into_diagnostics())
    }
}
