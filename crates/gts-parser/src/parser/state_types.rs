//! Parser state - types, signatures, struct fields and interface methods.

use super::state::ParserState;
use crate::ast::{ArrayLength, Expr, Field, MethodSpec, Type, UnsupportedType};
use gts_common::diagnostic_codes;
use gts_common::diagnostics::diagnostic_messages;
use gts_scanner::SyntaxKind;

/// One comma-separated entry of a parameter list before grouping.
struct ParamEntry {
    name: Option<String>,
    ty: Option<Type>,
    variadic: bool,
}

impl ParserState {
    pub(crate) fn is_start_of_type(&self) -> bool {
        matches!(
            self.token(),
            SyntaxKind::Identifier
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::MapKeyword
                | SyntaxKind::FuncKeyword
                | SyntaxKind::ChanKeyword
                | SyntaxKind::ArrowToken
                | SyntaxKind::StructKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::OpenParenToken
        )
    }

    pub(crate) fn parse_type(&mut self) -> Type {
        if !self.enter_recursion() {
            self.next_token();
            return self.bad_type();
        }
        let ty = self.parse_type_worker();
        self.exit_recursion();
        ty
    }

    fn parse_type_worker(&mut self) -> Type {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::Identifier => {
                let name = self.token_text();
                self.next_token();
                let base = if self.parse_optional(SyntaxKind::DotToken) {
                    Type::Qualified {
                        owner: name,
                        name: self.parse_identifier(),
                    }
                } else {
                    Type::Named(name)
                };
                if self.is_token(SyntaxKind::OpenBracketToken) {
                    self.parse_type_instance(base)
                } else {
                    base
                }
            }
            SyntaxKind::OpenBracketToken => {
                self.next_token();
                let len = match self.token() {
                    SyntaxKind::CloseBracketToken => ArrayLength::Dynamic,
                    SyntaxKind::DotDotDotToken => {
                        self.next_token();
                        ArrayLength::Ellipsis
                    }
                    _ => {
                        self.expr_level += 1;
                        let len = self.parse_expression();
                        self.expr_level -= 1;
                        ArrayLength::Fixed(Box::new(len))
                    }
                };
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let elem = self.parse_type();
                Type::Array {
                    len,
                    elem: Box::new(elem),
                }
            }
            SyntaxKind::MapKeyword => {
                self.next_token();
                self.parse_expected(SyntaxKind::OpenBracketToken);
                let key = self.parse_type();
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let value = self.parse_type();
                Type::map(key, value)
            }
            SyntaxKind::AsteriskToken => {
                self.next_token();
                Type::pointer(self.parse_type())
            }
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let inner = self.parse_type();
                self.parse_expected(SyntaxKind::CloseParenToken);
                inner
            }
            SyntaxKind::FuncKeyword => {
                self.next_token();
                self.parse_signature();
                self.unsupported_type(UnsupportedType::Func, start)
            }
            SyntaxKind::ChanKeyword => {
                self.next_token();
                self.parse_optional(SyntaxKind::ArrowToken);
                self.parse_type();
                self.unsupported_type(UnsupportedType::Chan, start)
            }
            SyntaxKind::ArrowToken => {
                self.next_token();
                self.parse_expected(SyntaxKind::ChanKeyword);
                self.parse_type();
                self.unsupported_type(UnsupportedType::Chan, start)
            }
            SyntaxKind::StructKeyword => {
                self.next_token();
                self.parse_struct_fields();
                self.unsupported_type(UnsupportedType::Struct, start)
            }
            SyntaxKind::InterfaceKeyword => {
                self.next_token();
                self.parse_interface_methods();
                self.unsupported_type(UnsupportedType::Interface, start)
            }
            _ => {
                self.parse_error_at_current_token(
                    diagnostic_messages::TYPE_EXPECTED,
                    diagnostic_codes::TYPE_EXPECTED,
                );
                self.bad_type()
            }
        }
    }

    /// `Base[A, B]` after a type name.
    fn parse_type_instance(&mut self, base: Type) -> Type {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let mut args = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            args.push(self.parse_type());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
            self.ensure_progress(before);
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        Type::Instance {
            base: Box::new(base),
            args,
        }
    }

    fn unsupported_type(&self, kind: UnsupportedType, start: u32) -> Type {
        Type::Unsupported {
            kind,
            span: self.span_from(start),
        }
    }

    fn bad_type(&self) -> Type {
        Type::Unsupported {
            kind: UnsupportedType::Bad,
            span: self.token_span(),
        }
    }

    /// Convert an expression that named a type (e.g. the callee of a
    /// conversion or the type of a composite literal) into a [`Type`].
    pub(crate) fn expr_to_type(expr: Expr) -> Option<Type> {
        match expr {
            Expr::Ident(name) => Some(Type::Named(name)),
            Expr::Selector { owner, member } => match *owner {
                Expr::Ident(owner) => Some(Type::Qualified {
                    owner,
                    name: member,
                }),
                _ => None,
            },
            Expr::Type(ty) => Some(ty),
            Expr::Index { collection, index } => {
                let base = Self::expr_to_type(*collection)?;
                let arg = Self::expr_to_type(*index)?;
                Some(Type::Instance {
                    base: Box::new(base),
                    args: vec![arg],
                })
            }
            _ => None,
        }
    }

    // =========================================================================
    // Signatures
    // =========================================================================

    /// `(params) results`
    pub(crate) fn parse_signature(&mut self) -> (Vec<Field>, Vec<Field>) {
        let params = self.parse_parameters();
        let results = self.parse_results();
        (params, results)
    }

    pub(crate) fn parse_results(&mut self) -> Vec<Field> {
        if self.is_token(SyntaxKind::OpenParenToken) {
            self.parse_parameters()
        } else if self.is_start_of_type() {
            vec![Field::unnamed(self.parse_type())]
        } else {
            Vec::new()
        }
    }

    /// Parse a parenthesized parameter list and group names with their types.
    ///
    /// `(a, b int, c string)` yields two fields; `(int, string)` yields two
    /// unnamed fields. Bare identifiers are names only when some later entry in
    /// the list carries both a name and a type.
    pub(crate) fn parse_parameters(&mut self) -> Vec<Field> {
        if !self.parse_expected(SyntaxKind::OpenParenToken) {
            return Vec::new();
        }
        self.expr_level += 1;
        let mut entries = Vec::new();
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            entries.push(self.parse_parameter_entry());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
            self.ensure_progress(before);
        }
        self.expr_level -= 1;
        self.parse_expected(SyntaxKind::CloseParenToken);
        group_parameters(entries)
    }

    fn parse_parameter_entry(&mut self) -> ParamEntry {
        if self.parse_optional(SyntaxKind::DotDotDotToken) {
            return ParamEntry {
                name: None,
                ty: Some(self.parse_type()),
                variadic: true,
            };
        }
        if !self.is_token(SyntaxKind::Identifier) {
            return ParamEntry {
                name: None,
                ty: Some(self.parse_type()),
                variadic: false,
            };
        }

        let name = self.token_text();
        self.next_token();
        match self.token() {
            SyntaxKind::CommaToken | SyntaxKind::CloseParenToken => ParamEntry {
                name: Some(name),
                ty: None,
                variadic: false,
            },
            SyntaxKind::DotToken => {
                self.next_token();
                let member = self.parse_identifier();
                let qualified = Type::Qualified {
                    owner: name,
                    name: member,
                };
                let ty = if self.is_token(SyntaxKind::OpenBracketToken) {
                    self.parse_type_instance(qualified)
                } else {
                    qualified
                };
                ParamEntry {
                    name: None,
                    ty: Some(ty),
                    variadic: false,
                }
            }
            SyntaxKind::DotDotDotToken => {
                self.next_token();
                ParamEntry {
                    name: Some(name),
                    ty: Some(self.parse_type()),
                    variadic: true,
                }
            }
            _ => ParamEntry {
                name: Some(name),
                ty: Some(self.parse_type()),
                variadic: false,
            },
        }
    }

    // =========================================================================
    // Struct and interface bodies
    // =========================================================================

    /// `{ a, b int; Embedded; *Other; c string "tag" }`
    pub(crate) fn parse_struct_fields(&mut self) -> Vec<Field> {
        let mut fields = Vec::new();
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return fields;
        }
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            if let Some(field) = self.parse_struct_field() {
                fields.push(field);
            }
            // Field tags carry no meaning for translation.
            self.parse_optional(SyntaxKind::StringLiteral);
            self.parse_semicolon();
            self.ensure_progress(before);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        fields
    }

    fn parse_struct_field(&mut self) -> Option<Field> {
        match self.token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::AsteriskToken => Some(Field::unnamed(self.parse_type())),
            SyntaxKind::Identifier => {
                let embedded = self.look_ahead(|p| {
                    p.next_token();
                    matches!(
                        p.token(),
                        SyntaxKind::SemicolonToken
                            | SyntaxKind::CloseBraceToken
                            | SyntaxKind::StringLiteral
                            | SyntaxKind::DotToken
                    )
                });
                if embedded {
                    return Some(Field::unnamed(self.parse_type()));
                }
                let mut names = vec![self.parse_identifier()];
                while self.parse_optional(SyntaxKind::CommaToken) {
                    names.push(self.parse_identifier());
                }
                Some(Field {
                    names,
                    ty: self.parse_type(),
                    variadic: false,
                })
            }
            _ => {
                self.parse_error_at_current_token(
                    diagnostic_messages::DECLARATION_EXPECTED,
                    diagnostic_codes::DECLARATION_EXPECTED,
                );
                self.skip_to_statement_end();
                None
            }
        }
    }

    /// `{ Method(a int) string; Embedded; ~int | ~string }`
    ///
    /// Embedded interfaces and type-set elements are skipped.
    pub(crate) fn parse_interface_methods(&mut self) -> Vec<MethodSpec> {
        let mut methods = Vec::new();
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return methods;
        }
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            let is_method = self.is_token(SyntaxKind::Identifier)
                && self.peek_token() == SyntaxKind::OpenParenToken;
            if is_method {
                let name = self.parse_identifier();
                let (params, results) = self.parse_signature();
                methods.push(MethodSpec {
                    name,
                    params,
                    results,
                });
            } else {
                self.skip_to_statement_end();
            }
            self.parse_semicolon();
            self.ensure_progress(before);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        methods
    }
}

/// Attach pending bare identifiers to the next entry that has both a name and
/// a type; anything else is a type on its own.
fn group_parameters(entries: Vec<ParamEntry>) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    for entry in entries {
        match (entry.name, entry.ty) {
            (Some(name), None) => pending.push(name),
            (Some(name), Some(ty)) => {
                let mut names = std::mem::take(&mut pending);
                names.push(name);
                fields.push(Field {
                    names,
                    ty,
                    variadic: entry.variadic,
                });
            }
            (None, ty) => {
                flush_as_types(&mut pending, &mut fields);
                if let Some(ty) = ty {
                    fields.push(Field {
                        names: Vec::new(),
                        ty,
                        variadic: entry.variadic,
                    });
                }
            }
        }
    }
    flush_as_types(&mut pending, &mut fields);
    fields
}

fn flush_as_types(pending: &mut Vec<String>, fields: &mut Vec<Field>) {
    fields.extend(pending.drain(..).map(|name| Field::unnamed(Type::Named(name))));
}
