use clap::Parser;

use super::args::CliArgs;
use super::config::{GtsConfig, find_config, parse_config, resolve_options};

fn args(argv: &[&str]) -> CliArgs {
    let mut full = vec!["gts"];
    full.extend_from_slice(argv);
    CliArgs::try_parse_from(full).expect("args should parse")
}

#[test]
fn parses_camel_case_fields() {
    let config = parse_config(
        r#"{ "imports": { "net/http": "std/http", "fmt": "" }, "keepMain": true, "outExtension": "sc" }"#,
    )
    .expect("config should parse");

    assert_eq!(config.imports.get("net/http").map(String::as_str), Some("std/http"));
    assert_eq!(config.imports.get("fmt").map(String::as_str), Some(""));
    assert_eq!(config.keep_main, Some(true));
    assert_eq!(config.out_extension.as_deref(), Some("sc"));
}

#[test]
fn empty_object_is_all_defaults() {
    let config = parse_config("{}").expect("empty config should parse");
    assert!(config.imports.is_empty());
    assert_eq!(config.keep_main, None);
    assert_eq!(config.out_extension, None);
}

#[test]
fn rejects_unknown_fields_and_bad_json() {
    assert!(parse_config(r#"{ "keep_main": true }"#).is_err());
    assert!(parse_config("{ imports: }").is_err());
}

#[test]
fn defaults_without_config() {
    let resolved = resolve_options(&args(&["main.go"]), None);
    assert!(!resolved.print.keep_main);
    assert!(resolved.print.import_overrides.is_empty());
    assert_eq!(resolved.out_extension, "scar");
}

#[test]
fn config_values_apply_and_flags_override() {
    let mut config = GtsConfig {
        keep_main: Some(false),
        out_extension: Some(".sc".to_string()),
        ..GtsConfig::default()
    };
    config
        .imports
        .insert("net/http".to_string(), "std/http".to_string());

    let resolved = resolve_options(&args(&["main.go", "--keep-main"]), Some(&config));
    assert!(resolved.print.keep_main);
    assert_eq!(resolved.out_extension, "sc");
    assert_eq!(
        resolved.print.import_overrides.get("net/http").map(String::as_str),
        Some("std/http")
    );
}

#[test]
fn find_config_looks_next_to_the_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("main.go");
    assert!(find_config(&input).is_none());

    std::fs::write(dir.path().join("gts.json"), "{}").expect("write config");
    assert_eq!(find_config(&input), Some(dir.path().join("gts.json")));
}
