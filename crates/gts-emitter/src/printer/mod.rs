//! Printer - syntax-directed Go → Scar translation.
//!
//! The printer walks the tree once, depth-first and in source order, writing
//! lines through a [`SourceWriter`]. Methods are split across submodules:
//! - `types` - type mapping
//! - `expressions` - expression rendering and built-in call rewrites
//! - `statements` - statement emission and indentation around bodies
//! - `declarations` - functions, classes, interfaces and value groups
//! - `imports` - import path table

mod declarations;
mod expressions;
mod imports;
mod statements;
mod types;

pub use expressions::expr_to_string;
pub use imports::map_import;
pub use types::map_type_name;

use crate::source_writer::SourceWriter;
use gts_common::{Diagnostic, Span};
use gts_parser::ast::SourceFile;
use rustc_hash::FxHashMap;

/// Emitted for expressions with no Scar rendering.
pub const UNKNOWN_EXPRESSION: &str = "# unknown expression";
/// Emitted for composite literals that are not sequences.
pub const COMPOSITE_LITERAL: &str = "# composite literal";
/// Emitted, one line, for statements with no Scar rendering.
pub const UNKNOWN_STATEMENT: &str = "# unknown statement";
/// Emitted, one line, for a type switch.
pub const TYPE_SWITCH_NOT_SUPPORTED: &str = "# type switch not supported";
/// Emitted for types with no Scar rendering.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Printer configuration.
#[derive(Clone, Debug, Default)]
pub struct PrintOptions {
    /// Import path → Scar module, consulted before the built-in table. An empty
    /// module name drops the import.
    pub import_overrides: FxHashMap<String, String>,
    /// Print `func main` as a regular function instead of inlining its body.
    pub keep_main: bool,
}

/// Result of printing one file.
#[derive(Clone, Debug, Default)]
pub struct PrintOutput {
    pub code: String,
    /// Coverage-gap warnings, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Translation state for one source file.
pub struct Printer {
    writer: SourceWriter,
    options: PrintOptions,
    file_name: String,
    diagnostics: Vec<Diagnostic>,
}

impl Printer {
    #[must_use]
    pub fn new(file_name: &str, options: PrintOptions) -> Self {
        Self {
            writer: SourceWriter::new(),
            options,
            file_name: file_name.to_string(),
            diagnostics: Vec::new(),
        }
    }

    /// Emit imports, then every declaration in source order.
    pub fn print_source_file(&mut self, file: &SourceFile) {
        let _span = tracing::debug_span!("print", file = %file.file_name).entered();
        self.emit_imports(&file.imports);
        for decl in &file.decls {
            self.emit_declaration(decl);
        }
        tracing::debug!(
            lines = self.writer.line_count(),
            warnings = self.diagnostics.len(),
            "printed source file"
        );
    }

    #[must_use]
    pub fn get_output(&self) -> &str {
        self.writer.get_output()
    }

    #[must_use]
    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn finish(self) -> PrintOutput {
        PrintOutput {
            code: self.writer.finish(),
            diagnostics: self.diagnostics,
        }
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    fn write_line(&mut self, text: &str) {
        self.writer.write_line(text);
    }

    fn blank_line(&mut self) {
        self.writer.blank_line();
    }

    const fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    const fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    /// Record a coverage gap. Never affects the emitted text.
    fn report(&mut self, code: u32, span: Span, args: &[&str]) {
        let diagnostic = Diagnostic::from_code(&self.file_name, span, code, args);
        tracing::warn!(code, start = span.start, "{}", diagnostic.message_text);
        self.diagnostics.push(diagnostic);
    }
}
