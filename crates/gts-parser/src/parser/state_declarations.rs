//! Parser state - source file, imports and top-level declarations.

use super::state::ParserState;
use crate::ast::{
    Decl, FuncDecl, ImportSpec, Receiver, SourceFile, Type, TypeBody, TypeDecl, ValueGroup,
    ValueKind, ValueSpec,
};
use gts_common::diagnostic_codes;
use gts_common::diagnostics::diagnostic_messages;
use gts_scanner::SyntaxKind;

impl ParserState {
    /// Parse a whole source file.
    ///
    /// Always returns a tree; check [`ParserState::get_diagnostics`] before
    /// using it.
    pub fn parse_source_file(&mut self) -> SourceFile {
        self.next_token();

        let package = if self.parse_optional(SyntaxKind::PackageKeyword) {
            self.parse_identifier()
        } else {
            self.parse_error_at_current_token(
                diagnostic_messages::PACKAGE_CLAUSE_EXPECTED,
                diagnostic_codes::PACKAGE_CLAUSE_EXPECTED,
            );
            String::new()
        };
        self.parse_semicolon();

        let mut imports = Vec::new();
        while self.is_token(SyntaxKind::ImportKeyword) {
            self.parse_import_decl(&mut imports);
            self.parse_top_level_semicolon();
        }

        let mut decls = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            let before = self.token_pos();
            self.parse_top_level_declaration(&mut decls, &mut imports);
            self.parse_top_level_semicolon();
            self.ensure_progress(before);
        }

        self.collect_scanner_diagnostics();
        tracing::debug!(
            file = %self.file_name,
            imports = imports.len(),
            decls = decls.len(),
            errors = self.parse_diagnostics.len(),
            "parsed source file"
        );

        SourceFile {
            file_name: self.file_name.clone(),
            package,
            imports,
            decls,
        }
    }

    fn parse_top_level_semicolon(&mut self) {
        if !self.is_token(SyntaxKind::EndOfFileToken) {
            self.parse_semicolon();
        }
    }

    fn parse_top_level_declaration(&mut self, decls: &mut Vec<Decl>, imports: &mut Vec<ImportSpec>) {
        match self.token() {
            SyntaxKind::FuncKeyword => decls.push(Decl::Function(self.parse_function_declaration())),
            SyntaxKind::TypeKeyword => {
                decls.extend(self.parse_type_decls().into_iter().map(Decl::Type));
            }
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                decls.push(Decl::Values(self.parse_value_group()));
            }
            // Imports after declarations are invalid Go but harmless to accept.
            SyntaxKind::ImportKeyword => self.parse_import_decl(imports),
            SyntaxKind::SemicolonToken => {}
            _ => {
                self.parse_error_at_current_token(
                    diagnostic_messages::DECLARATION_EXPECTED,
                    diagnostic_codes::DECLARATION_EXPECTED,
                );
                self.skip_to_statement_end();
            }
        }
    }

    // =========================================================================
    // Imports
    // =========================================================================

    /// `import "fmt"` or `import ( "fmt"; str "strings" )`
    fn parse_import_decl(&mut self, imports: &mut Vec<ImportSpec>) {
        self.parse_expected(SyntaxKind::ImportKeyword);
        if self.parse_optional(SyntaxKind::OpenParenToken) {
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let before = self.token_pos();
                if let Some(spec) = self.parse_import_spec() {
                    imports.push(spec);
                }
                self.parse_semicolon();
                self.ensure_progress(before);
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
        } else if let Some(spec) = self.parse_import_spec() {
            imports.push(spec);
        }
    }

    fn parse_import_spec(&mut self) -> Option<ImportSpec> {
        let start = self.token_pos();
        let name = match self.token() {
            SyntaxKind::Identifier => Some(self.parse_identifier()),
            SyntaxKind::DotToken => {
                self.next_token();
                Some(".".to_string())
            }
            _ => None,
        };
        if !self.is_token(SyntaxKind::StringLiteral) {
            self.parse_expected(SyntaxKind::StringLiteral);
            return None;
        }
        let path = unquote(&self.token_text());
        self.next_token();
        Some(ImportSpec {
            name,
            path,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// `func [(recv T)] name[TypeParams](params) results [{ body }]`
    pub(crate) fn parse_function_declaration(&mut self) -> FuncDecl {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::FuncKeyword);

        let receiver = if self.is_token(SyntaxKind::OpenParenToken) {
            let mut fields = self.parse_parameters().into_iter();
            fields.next().map(|field| Receiver {
                name: field.names.into_iter().next(),
                ty: field.ty,
            })
        } else {
            None
        };

        let name = self.parse_identifier();
        if self.is_token(SyntaxKind::OpenBracketToken) {
            // Type parameters are erased.
            self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
        }
        let (params, results) = self.parse_signature();
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            Some(self.parse_block())
        } else {
            None
        };

        FuncDecl {
            name,
            receiver,
            params,
            results,
            body,
            span: self.span_from(start),
        }
    }

    // =========================================================================
    // Type declarations
    // =========================================================================

    /// `type T ...` or `type ( A ...; B ... )`
    pub(crate) fn parse_type_decls(&mut self) -> Vec<TypeDecl> {
        self.parse_expected(SyntaxKind::TypeKeyword);
        let mut decls = Vec::new();
        if self.parse_optional(SyntaxKind::OpenParenToken) {
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let before = self.token_pos();
                if !self.is_token(SyntaxKind::SemicolonToken) {
                    decls.push(self.parse_type_spec());
                }
                self.parse_semicolon();
                self.ensure_progress(before);
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
        } else {
            decls.push(self.parse_type_spec());
        }
        decls
    }

    fn parse_type_spec(&mut self) -> TypeDecl {
        let start = self.token_pos();
        let name = self.parse_identifier();
        if self.is_token(SyntaxKind::OpenBracketToken) && self.look_ahead_is_type_parameter_list() {
            self.skip_balanced(SyntaxKind::OpenBracketToken, SyntaxKind::CloseBracketToken);
        }
        self.parse_optional(SyntaxKind::EqualsToken);

        let body = match self.token() {
            SyntaxKind::StructKeyword => {
                self.next_token();
                TypeBody::Struct(self.parse_struct_fields())
            }
            SyntaxKind::InterfaceKeyword => {
                self.next_token();
                TypeBody::Interface(self.parse_interface_methods())
            }
            _ => TypeBody::Other(self.parse_type()),
        };

        TypeDecl {
            name,
            body,
            span: self.span_from(start),
        }
    }

    /// Distinguish `type List[T any] ...` from `type Buf [N]byte`.
    ///
    /// A type parameter list starts with an identifier followed by another
    /// identifier, a constraint keyword, `*`, `~`, `[` or `,`.
    fn look_ahead_is_type_parameter_list(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if !p.is_token(SyntaxKind::Identifier) {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::Identifier
                    | SyntaxKind::InterfaceKeyword
                    | SyntaxKind::TildeToken
                    | SyntaxKind::AsteriskToken
                    | SyntaxKind::OpenBracketToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::MapKeyword
                    | SyntaxKind::FuncKeyword
                    | SyntaxKind::ChanKeyword
            )
        })
    }

    // =========================================================================
    // var / const
    // =========================================================================

    /// `var a, b int = 1, 2`, `const ( X = 1; Y )` and friends.
    ///
    /// Each name becomes its own [`ValueSpec`]; names beyond the number of
    /// values get no initializer.
    pub(crate) fn parse_value_group(&mut self) -> ValueGroup {
        let kind = if self.is_token(SyntaxKind::ConstKeyword) {
            ValueKind::Const
        } else {
            ValueKind::Var
        };
        self.next_token();

        let mut entries = Vec::new();
        if self.parse_optional(SyntaxKind::OpenParenToken) {
            while !self.is_token(SyntaxKind::CloseParenToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                let before = self.token_pos();
                if !self.is_token(SyntaxKind::SemicolonToken) {
                    self.parse_value_spec(&mut entries);
                }
                self.parse_semicolon();
                self.ensure_progress(before);
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
        } else {
            self.parse_value_spec(&mut entries);
        }
        ValueGroup { kind, entries }
    }

    fn parse_value_spec(&mut self, entries: &mut Vec<ValueSpec>) {
        let mut names = vec![self.parse_identifier()];
        while self.parse_optional(SyntaxKind::CommaToken) {
            names.push(self.parse_identifier());
        }

        let ty: Option<Type> = if matches!(
            self.token(),
            SyntaxKind::EqualsToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBraceToken
        ) {
            None
        } else {
            Some(self.parse_type())
        };

        let values = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_expression_list()
        } else {
            Vec::new()
        };

        let mut values = values.into_iter();
        entries.extend(names.into_iter().map(|name| ValueSpec {
            name,
            ty: ty.clone(),
            init: values.next(),
        }));
    }
}

/// Strip the quotes from an interpreted or raw import path literal.
fn unquote(literal: &str) -> String {
    literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| literal.strip_prefix('`').and_then(|s| s.strip_suffix('`')))
        .unwrap_or(literal)
        .to_string()
}
