use super::Printer;
use gts_parser::ast::{
    Decl, Field, FuncDecl, MethodSpec, Receiver, TypeBody, TypeDecl, ValueGroup,
};

impl Printer {
    pub(super) fn emit_declaration(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(func) => self.emit_function(func),
            Decl::Type(type_decl) => self.emit_type_declaration(type_decl),
            Decl::Values(group) => self.emit_value_group(group),
        }
    }

    fn emit_function(&mut self, func: &FuncDecl) {
        tracing::debug!(name = %func.name, method = func.receiver.is_some(), "function");

        if func.is_entry_point() && !self.options.keep_main {
            // The entry point's body becomes the top-level script.
            if let Some(body) = &func.body {
                self.emit_statements(body);
            }
            return;
        }

        let mut params = Vec::new();
        if let Some(receiver) = &func.receiver {
            params.push(self.receiver_parameter(receiver));
        }
        params.extend(self.parameter_list(&func.params));
        let ret = self.return_suffix(&func.results);
        self.write_line(&format!("fn {}({}){ret}:", func.name, params.join(", ")));
        if let Some(body) = &func.body {
            self.emit_body(body);
        }
        self.blank_line();
    }

    /// `this <Type>`, with the pointer-ness of the receiver dropped.
    fn receiver_parameter(&mut self, receiver: &Receiver) -> String {
        let mapped = self.map_type(&receiver.ty);
        let mapped = mapped.strip_prefix("ref ").unwrap_or(&mapped);
        format!("this {mapped}")
    }

    /// `<type> <name>` for every declared name. Unnamed parameters have
    /// nothing to bind and are left out.
    fn parameter_list(&mut self, fields: &[Field]) -> Vec<String> {
        let mut params = Vec::new();
        for field in fields {
            if field.names.is_empty() {
                continue;
            }
            let mut ty = self.map_type(&field.ty);
            if field.variadic {
                ty = format!("list[{ty}]");
            }
            params.extend(field.names.iter().map(|name| format!("{ty} {name}")));
        }
        params
    }

    /// ` -> <type>` for exactly one result with at most one name.
    fn return_suffix(&mut self, results: &[Field]) -> String {
        match results {
            [result] if result.names.len() <= 1 => format!(" -> {}", self.map_type(&result.ty)),
            _ => String::new(),
        }
    }

    fn emit_type_declaration(&mut self, decl: &TypeDecl) {
        tracing::debug!(name = %decl.name, "type declaration");
        match &decl.body {
            TypeBody::Struct(fields) => self.emit_class(&decl.name, fields),
            TypeBody::Interface(methods) => self.emit_interface(&decl.name, methods),
            TypeBody::Other(_) => {
                tracing::debug!(name = %decl.name, "type declaration has no Scar form; skipped");
            }
        }
    }

    /// ```text
    /// class Point:
    ///     init:
    ///         int this.x
    /// ```
    fn emit_class(&mut self, name: &str, fields: &[Field]) {
        self.write_line(&format!("class {name}:"));
        self.increase_indent();
        self.write_line("init:");
        self.increase_indent();
        for field in fields {
            let ty = self.map_type(&field.ty);
            for field_name in &field.names {
                self.write_line(&format!("{ty} this.{field_name}"));
            }
        }
        self.decrease_indent();
        self.decrease_indent();
        self.blank_line();
    }

    fn emit_interface(&mut self, name: &str, methods: &[MethodSpec]) {
        self.write_line(&format!("interface {name}:"));
        self.increase_indent();
        for method in methods {
            let params = self.parameter_list(&method.params).join(", ");
            // Interface signatures keep the first result even when there are more.
            let ret = match method.results.first() {
                Some(result) => format!(" -> {}", self.map_type(&result.ty)),
                None => String::new(),
            };
            self.write_line(&format!("fn {}({params}){ret}", method.name));
        }
        self.decrease_indent();
        self.blank_line();
    }

    fn emit_value_group(&mut self, group: &ValueGroup) {
        tracing::debug!(kind = ?group.kind, entries = group.entries.len(), "value group");
        for spec in &group.entries {
            self.emit_value_spec(spec);
        }
        self.blank_line();
    }
}
