//! Go import path → Scar module table.

use super::Printer;
use gts_parser::ast::ImportSpec;

/// Built-in module for a Go import path. Paths without an entry are dropped.
#[must_use]
pub fn map_import(path: &str) -> Option<&'static str> {
    Some(match path {
        "crypto/sha256" | "crypto/sha512" | "crypto/sha1" | "crypto/md5" => "std/crypto",
        "io" | "bufio" => "std/io",
        "json" | "encoding/json" => "std/json",
        "regexp" => "std/regex",
        "os" => "std/os",
        "strings" | "strconv" => "std/strings",
        "math" => "std/math",
        "time" => "std/time",
        "math/rand" => "std/random",
        _ => return None,
    })
}

impl Printer {
    /// `import "<module>"` per mapped path in declaration order, then a blank
    /// line if anything was imported.
    pub(super) fn emit_imports(&mut self, imports: &[ImportSpec]) {
        let mut emitted_any = false;
        for import in imports {
            let module = match self.options.import_overrides.get(&import.path) {
                Some(module) if module.is_empty() => None,
                Some(module) => Some(module.clone()),
                None => map_import(&import.path).map(str::to_string),
            };
            let Some(module) = module else {
                tracing::debug!(path = %import.path, "import has no Scar module; dropped");
                continue;
            };
            self.write_line(&format!("import \"{module}\""));
            emitted_any = true;
        }
        if emitted_any {
            self.blank_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::map_import;

    #[test]
    fn table_entries() {
        assert_eq!(map_import("crypto/md5"), Some("std/crypto"));
        assert_eq!(map_import("bufio"), Some("std/io"));
        assert_eq!(map_import("encoding/json"), Some("std/json"));
        assert_eq!(map_import("strconv"), Some("std/strings"));
        assert_eq!(map_import("math/rand"), Some("std/random"));
    }

    #[test]
    fn unknown_paths_are_dropped() {
        assert_eq!(map_import("fmt"), None);
        assert_eq!(map_import("net/http"), None);
    }
}
