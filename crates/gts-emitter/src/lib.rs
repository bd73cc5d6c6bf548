//! Scar code printer for the gts translator.
//!
//! This crate turns a parsed Go [`SourceFile`](gts_parser::ast::SourceFile)
//! into Scar source text:
//! - `SourceWriter` - line buffer with four-space indentation
//! - `Printer` - syntax-directed translation of imports, declarations,
//!   statements, expressions and types
//!
//! Translation is total: constructs Scar cannot express become placeholder
//! comments and are reported as warning diagnostics.

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod printer;
pub use printer::{PrintOptions, PrintOutput, Printer, expr_to_string, map_import, map_type_name};

use gts_parser::ast::SourceFile;

/// Translate a parsed file with the given options.
#[must_use]
pub fn print_source_file(file: &SourceFile, options: PrintOptions) -> PrintOutput {
    let mut printer = Printer::new(&file.file_name, options);
    printer.print_source_file(file);
    printer.finish()
}
