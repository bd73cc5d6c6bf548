use clap::Parser;
use std::path::{Path, PathBuf};

use super::args::CliArgs;

#[test]
fn parses_input_only() {
    let args = CliArgs::try_parse_from(["gts", "main.go"]).expect("input should parse");

    assert_eq!(args.input, PathBuf::from("main.go"));
    assert!(args.output.is_none());
    assert!(args.config.is_none());
    assert!(!args.stdout);
    assert!(!args.keep_main);
    assert!(!args.emit_ast);
    assert!(!args.quiet);
    assert_eq!(args.pretty, None);
}

#[test]
fn parses_output_and_flags() {
    let args = CliArgs::try_parse_from([
        "gts",
        "src/app.go",
        "out/app.scar",
        "--config",
        "configs/gts.json",
        "--keep-main",
        "--quiet",
        "--pretty",
        "false",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.output.as_deref(), Some(Path::new("out/app.scar")));
    assert_eq!(args.config.as_deref(), Some(Path::new("configs/gts.json")));
    assert!(args.keep_main);
    assert!(args.quiet);
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn short_flags() {
    let args = CliArgs::try_parse_from(["gts", "-q", "-c", "gts.json", "a.go", "--stdout"])
        .expect("short flags should parse");
    assert!(args.quiet);
    assert!(args.stdout);
    assert_eq!(args.config.as_deref(), Some(Path::new("gts.json")));
}

#[test]
fn input_is_required() {
    assert!(CliArgs::try_parse_from(["gts"]).is_err());
}
