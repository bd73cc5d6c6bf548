//! Read → parse → print → write for one input file.

use anyhow::{Context, Result};
use gts_common::Diagnostic;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;
use crate::config::{self, ResolvedOptions};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    /// The translation was written to this path.
    Written(PathBuf),
    /// Text for stdout: the translation (`--stdout`) or the AST (`--emit-ast`).
    Printed(String),
}

#[derive(Debug, Default)]
pub struct TranslationResult {
    /// Parse errors, or coverage warnings when parsing succeeded.
    pub diagnostics: Vec<Diagnostic>,
    /// `None` when the input failed to parse; nothing is written then.
    pub artifact: Option<Artifact>,
}

impl TranslationResult {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// The input path with its `.go` extension replaced by `extension`, or with
/// `.extension` appended when the input has no `.go` suffix.
#[must_use]
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "go") {
        return input.with_extension(extension);
    }
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Run the CLI for `args`.
///
/// I/O and config failures are errors; parse failures are reported through
/// [`TranslationResult::diagnostics`] with no artifact.
pub fn run(args: &CliArgs) -> Result<TranslationResult> {
    let config = config::load_for_args(args)?;
    let options = config::resolve_options(args, config.as_ref());
    translate_file(args, &options)
}

pub fn translate_file(args: &CliArgs, options: &ResolvedOptions) -> Result<TranslationResult> {
    let input = &args.input;
    let file_name = input.display().to_string();
    let _span = tracing::info_span!("translate", file = %file_name).entered();

    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    tracing::debug!(bytes = source.len(), "read input");

    let file = match gts_parser::parse_file(&file_name, &source) {
        Ok(file) => file,
        Err(diagnostics) => {
            tracing::debug!(errors = diagnostics.len(), "parse failed");
            return Ok(TranslationResult {
                diagnostics,
                artifact: None,
            });
        }
    };

    if args.emit_ast {
        let mut json = serde_json::to_string_pretty(&file).context("failed to serialize AST")?;
        json.push('\n');
        return Ok(TranslationResult {
            diagnostics: Vec::new(),
            artifact: Some(Artifact::Printed(json)),
        });
    }

    let output = gts_emitter::print_source_file(&file, options.print.clone());
    let artifact = if args.stdout {
        Artifact::Printed(output.code)
    } else {
        let out_path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input, &options.out_extension));
        std::fs::write(&out_path, &output.code)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::debug!(path = %out_path.display(), "wrote output");
        Artifact::Written(out_path)
    };

    Ok(TranslationResult {
        diagnostics: output.diagnostics,
        artifact: Some(artifact),
    })
}
