//! Statement nodes.

use super::declarations::ValueSpec;
use super::expressions::{BinaryOp, Expr};
use gts_common::Span;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Stmt {
    Expr(Expr),
    Assign {
        op: AssignOp,
        lhs: Vec<Expr>,
        rhs: Vec<Expr>,
        span: Span,
    },
    /// One binding of a local `var`/`const` declaration.
    LocalDecl(ValueSpec),
    If(IfStmt),
    /// Three-clause, condition-only and infinite `for` loops.
    ClassicFor(ForStmt),
    /// `for k, v := range x`
    ForEach(RangeStmt),
    Return(Vec<Expr>),
    Block(Vec<Stmt>),
    IncDec { op: IncDecOp, operand: Expr },
    Switch(SwitchStmt),
    Case(CaseClause),
    Break,
    Continue,
    Unsupported { kind: UnsupportedStmt, span: Span },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IfStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: Vec<Stmt>,
    pub else_branch: Option<ElseBranch>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ElseBranch {
    If(Box<IfStmt>),
    Block(Vec<Stmt>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangeStmt {
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub source: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SwitchStmt {
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    /// `Stmt::Case` clauses in source order.
    pub body: Vec<Stmt>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseClause {
    /// `None` for the `default` clause.
    pub labels: Option<Vec<Expr>>,
    pub body: Vec<Stmt>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `:=`
    Define,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    AndNot,
}

impl AssignOp {
    /// The binary operator a compound assignment desugars to.
    #[must_use]
    pub const fn binary_op(self) -> Option<BinaryOp> {
        Some(match self {
            Self::Assign | Self::Define => return None,
            Self::Add => BinaryOp::Add,
            Self::Sub => BinaryOp::Sub,
            Self::Mul => BinaryOp::Mul,
            Self::Div => BinaryOp::Div,
            Self::Rem => BinaryOp::Rem,
            Self::BitAnd => BinaryOp::BitAnd,
            Self::BitOr => BinaryOp::BitOr,
            Self::BitXor => BinaryOp::BitXor,
            Self::Shl => BinaryOp::Shl,
            Self::Shr => BinaryOp::Shr,
            Self::AndNot => BinaryOp::AndNot,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IncDecOp {
    Inc,
    Dec,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnsupportedStmt {
    TypeSwitch,
    Select,
    Go,
    Defer,
    Goto,
    Fallthrough,
    Send,
    /// A `type` declaration inside a function body.
    TypeDecl,
    /// Produced while recovering from a syntax error.
    Bad,
}

impl UnsupportedStmt {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::TypeSwitch => "type switch",
            Self::Select => "select",
            Self::Go => "go",
            Self::Defer => "defer",
            Self::Goto => "goto",
            Self::Fallthrough => "fallthrough",
            Self::Send => "send",
            Self::TypeDecl => "local type",
            Self::Bad => "malformed",
        }
    }
}
