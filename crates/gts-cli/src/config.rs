use anyhow::{Context, Result};
use gts_emitter::PrintOptions;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "gts.json";
pub const DEFAULT_OUT_EXTENSION: &str = "scar";

/// Contents of a `gts.json` file.
///
/// ```json
/// { "imports": { "net/http": "std/http" }, "keepMain": false, "outExtension": "scar" }
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GtsConfig {
    /// Import path → Scar module overrides. An empty module drops the import.
    #[serde(default)]
    pub imports: FxHashMap<String, String>,
    #[serde(default)]
    pub keep_main: Option<bool>,
    #[serde(default)]
    pub out_extension: Option<String>,
}

/// Options after merging the config file with command-line flags.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub print: PrintOptions,
    /// Extension for the default output path, without the leading dot.
    pub out_extension: String,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            print: PrintOptions::default(),
            out_extension: DEFAULT_OUT_EXTENSION.to_string(),
        }
    }
}

pub fn parse_config(source: &str) -> Result<GtsConfig> {
    serde_json::from_str(source).context("failed to parse gts.json")
}

pub fn load_config(path: &Path) -> Result<GtsConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid config {}", path.display()))
}

/// `gts.json` in the input's directory, if there is one.
pub fn find_config(input: &Path) -> Option<PathBuf> {
    let dir = match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the explicit `--config` file, or the one found next to the input.
pub fn load_for_args(args: &CliArgs) -> Result<Option<GtsConfig>> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match find_config(&args.input) {
            Some(path) => path,
            None => return Ok(None),
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    load_config(&path).map(Some)
}

/// Merge config values with flags. Flags win.
pub fn resolve_options(args: &CliArgs, config: Option<&GtsConfig>) -> ResolvedOptions {
    let mut resolved = ResolvedOptions::default();
    if let Some(config) = config {
        resolved.print.import_overrides = config.imports.clone();
        resolved.print.keep_main = config.keep_main.unwrap_or(false);
        if let Some(extension) = &config.out_extension {
            let extension = extension.trim_start_matches('.');
            if !extension.is_empty() {
                resolved.out_extension = extension.to_string();
            }
        }
    }
    if args.keep_main {
        resolved.print.keep_main = true;
    }
    resolved
}
