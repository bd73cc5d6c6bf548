//! Top-level nodes: the source file, imports and declarations.

use super::expressions::Expr;
use super::statements::Stmt;
use super::types::Type;
use gts_common::Span;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceFile {
    pub file_name: String,
    pub package: String,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<Decl>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportSpec {
    /// Local alias, including `_` and `.`.
    pub name: Option<String>,
    /// Import path without quotes.
    pub path: String,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Decl {
    Function(FuncDecl),
    Type(TypeDecl),
    Values(ValueGroup),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FuncDecl {
    pub name: String,
    pub receiver: Option<Receiver>,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
    /// `None` for a body-less (external) declaration.
    pub body: Option<Vec<Stmt>>,
    pub span: Span,
}

impl FuncDecl {
    /// The package entry point: `func main()` without a receiver.
    #[must_use]
    pub fn is_entry_point(&self) -> bool {
        self.name == "main" && self.receiver.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Receiver {
    pub name: Option<String>,
    pub ty: Type,
}

/// A parameter, result or struct field group: `a, b int`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    /// Empty for unnamed parameters and embedded fields.
    pub names: Vec<String>,
    pub ty: Type,
    pub variadic: bool,
}

impl Field {
    #[must_use]
    pub fn unnamed(ty: Type) -> Self {
        Self {
            names: Vec::new(),
            ty,
            variadic: false,
        }
    }

    #[must_use]
    pub fn named(names: &[&str], ty: Type) -> Self {
        Self {
            names: names.iter().map(|n| (*n).to_string()).collect(),
            ty,
            variadic: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    pub body: TypeBody,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum TypeBody {
    Struct(Vec<Field>),
    Interface(Vec<MethodSpec>),
    /// Aliases and defined types over non-struct, non-interface types.
    Other(Type),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MethodSpec {
    pub name: String,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueGroup {
    pub kind: ValueKind,
    pub entries: Vec<ValueSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Var,
    Const,
}

/// A single binding `name [T] [= init]`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueSpec {
    pub name: String,
    pub ty: Option<Type>,
    pub init: Option<Expr>,
}
