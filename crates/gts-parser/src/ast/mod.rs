//! Owned syntax tree for the supported Go subset.
//!
//! The tree is a plain sum-type hierarchy: every node exclusively owns its
//! children and nothing points back up. Constructs outside the subset are kept
//! as `Unsupported` nodes carrying their span so later phases can report them.

pub mod declarations;
pub mod expressions;
pub mod statements;
pub mod types;

pub use declarations::{
    Decl, Field, FuncDecl, ImportSpec, MethodSpec, Receiver, SourceFile, TypeBody, TypeDecl,
    ValueGroup, ValueKind, ValueSpec,
};
pub use expressions::{BinaryOp, Expr, LiteralKind, UnaryOp, UnsupportedExpr};
pub use statements::{
    AssignOp, CaseClause, ElseBranch, ForStmt, IfStmt, IncDecOp, RangeStmt, Stmt, SwitchStmt,
    UnsupportedStmt,
};
pub use types::{ArrayLength, Type, UnsupportedType};
