#![allow(clippy::print_stderr)]

use anyhow::{Result, bail};
use clap::Parser;
use gts_common::Diagnostic;
use std::io::IsTerminal;

use gts_cli::args::CliArgs;
use gts_cli::driver::{self, Artifact};
use gts_cli::reporter::Reporter;

fn main() -> Result<()> {
    // Only installs a subscriber when GTS_LOG or RUST_LOG is set.
    gts_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = driver::run(&args)?;

    let shown: Vec<Diagnostic> = result
        .diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.is_error() || !args.quiet)
        .cloned()
        .collect();
    if !shown.is_empty() {
        let color = args
            .pretty
            .unwrap_or_else(|| std::io::stderr().is_terminal());
        let mut reporter = Reporter::new(color);
        eprintln!("{}", reporter.render(&shown));
    }

    if result.has_errors() {
        bail!("failed to parse {}", args.input.display());
    }

    match result.artifact {
        Some(Artifact::Printed(text)) => print!("{text}"),
        Some(Artifact::Written(path)) => println!(
            "Successfully converted {} to {}",
            args.input.display(),
            path.display()
        ),
        None => {}
    }
    Ok(())
}
