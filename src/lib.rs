//! gts - a syntax-directed Go → Scar source translator.
//!
//! The pipeline is scan → parse → print, one crate per phase:
//! - [`scanner`] tokenizes Go source with automatic semicolon insertion
//! - [`parser`] builds the owned syntax tree
//! - [`emitter`] walks the tree and writes Scar text
//!
//! [`translate`] runs the whole pipeline on one source text.

pub use gts_common as common;
pub use gts_emitter as emitter;
pub use gts_parser as parser;
pub use gts_scanner as scanner;

pub use gts_common::{Diagnostic, DiagnosticCategory, LineMap, Position, Span, diagnostic_codes};
pub use gts_emitter::{PrintOptions, PrintOutput};
pub use gts_parser::ast::SourceFile;

/// Translate the Go file `file_name` with the given options.
///
/// # Errors
///
/// Returns the syntax errors, sorted by position, when `source` does not
/// parse. No partial translation is produced in that case.
pub fn translate(
    file_name: &str,
    source: &str,
    options: PrintOptions,
) -> Result<PrintOutput, Vec<Diagnostic>> {
    let file = gts_parser::parse_file(file_name, source)?;
    let output = gts_emitter::print_source_file(&file, options);
    tracing::debug!(
        file = file_name,
        bytes = output.code.len(),
        warnings = output.diagnostics.len(),
        "translated"
    );
    Ok(output)
}
