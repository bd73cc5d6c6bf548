use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the gts binary.
#[derive(Parser, Debug)]
#[command(name = "gts", version, about = "Translate Go source files to Scar")]
pub struct CliArgs {
    /// Go source file to translate.
    pub input: PathBuf,

    /// Where to write the Scar output. Defaults to the input path with its
    /// `.go` extension replaced.
    pub output: Option<PathBuf>,

    /// Print the translation to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Path to a gts.json config file. By default a gts.json next to the
    /// input is used when present.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Translate `func main` as a regular function instead of inlining its
    /// body at the top level.
    #[arg(long = "keep-main")]
    pub keep_main: bool,

    /// Print the parsed syntax tree as JSON and exit without translating.
    #[arg(long = "emit-ast")]
    pub emit_ast: bool,

    /// Only report errors; coverage warnings are not printed.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable color and formatting in diagnostics.
    #[arg(long)]
    pub pretty: Option<bool>,
}
