use super::{Printer, UNKNOWN_TYPE};
use gts_common::diagnostic_codes;
use gts_parser::ast::Type;

/// Scar spelling of a Go type name; unknown names pass through.
#[must_use]
pub fn map_type_name(name: &str) -> &str {
    match name {
        "int" | "int32" => "int",
        "int64" => "i64",
        "string" => "string",
        "bool" => "bool",
        "byte" => "char",
        "float32" | "float64" => "float",
        other => other,
    }
}

impl Printer {
    pub(super) fn map_type(&mut self, ty: &Type) -> String {
        match ty {
            Type::Named(name) => map_type_name(name).to_string(),
            Type::Qualified { owner, name } => format!("{owner}.{name}"),
            Type::Array { elem, .. } => format!("list[{}]", self.map_type(elem)),
            Type::Map { key, value } => {
                format!("map[{}: {}]", self.map_type(key), self.map_type(value))
            }
            Type::Pointer(pointee) => format!("ref {}", self.map_type(pointee)),
            Type::Instance { base, args } => {
                let base = self.map_type(base);
                let args: Vec<String> = args.iter().map(|a| self.map_type(a)).collect();
                format!("{base}[{}]", args.join(", "))
            }
            Type::Unsupported { kind, span } => {
                self.report(
                    diagnostic_codes::TYPE_NOT_SUPPORTED,
                    *span,
                    &[kind.description()],
                );
                UNKNOWN_TYPE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::map_type_name;

    #[test]
    fn primitive_names() {
        assert_eq!(map_type_name("int32"), "int");
        assert_eq!(map_type_name("int64"), "i64");
        assert_eq!(map_type_name("byte"), "char");
        assert_eq!(map_type_name("float32"), "float");
        assert_eq!(map_type_name("uint8"), "uint8");
        assert_eq!(map_type_name("Point"), "Point");
    }
}
