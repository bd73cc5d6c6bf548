//! Expression nodes.

use super::types::Type;
use gts_common::Span;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Expr {
    Ident(String),
    /// A literal with its exact source spelling, quotes included.
    Literal { kind: LiteralKind, text: String },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        /// Last argument was written `xs...`.
        spread: bool,
    },
    Selector { owner: Box<Expr>, member: String },
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
    /// `T{a, b}`; `ty` is `None` for elided element literals like the inner
    /// braces of `[][]int{{1}}`.
    CompositeLit {
        ty: Option<Type>,
        elements: Vec<Expr>,
        span: Span,
    },
    /// `operand.(T)`
    TypeAssert { ty: Type, operand: Box<Expr> },
    Paren(Box<Expr>),
    /// A type in expression position, e.g. the first argument of `make`.
    Type(Type),
    /// `key: value` inside a composite literal.
    KeyValue { key: Box<Expr>, value: Box<Expr> },
    Unsupported { kind: UnsupportedExpr, span: Span },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LiteralKind {
    Int,
    Float,
    Imag,
    Rune,
    String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
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
    LogicalAnd,
    LogicalOr,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    AddressOf,
    Receive,
}

impl UnaryOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "^",
            Self::AddressOf => "&",
            Self::Receive => "<-",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnsupportedExpr {
    FuncLit,
    Slice,
    /// `*p`
    Deref,
    /// `f[A, B]` with more than one index.
    Instantiation,
    /// `x.(type)`, only valid in a type switch header.
    TypeSwitchGuard,
    /// Produced while recovering from a syntax error.
    Bad,
}

impl UnsupportedExpr {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FuncLit => "A function literal",
            Self::Slice => "A slice expression",
            Self::Deref => "A pointer dereference",
            Self::Instantiation => "A generic instantiation",
            Self::TypeSwitchGuard => "A type switch guard",
            Self::Bad => "A malformed expression",
        }
    }
}

impl Expr {
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::Ident(name.to_string())
    }

    #[must_use]
    pub fn literal(kind: LiteralKind, text: &str) -> Self {
        Self::Literal {
            kind,
            text: text.to_string(),
        }
    }

    #[must_use]
    pub fn int(text: &str) -> Self {
        Self::literal(LiteralKind::Int, text)
    }

    #[must_use]
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn selector(owner: Self, member: &str) -> Self {
        Self::Selector {
            owner: Box::new(owner),
            member: member.to_string(),
        }
    }

    #[must_use]
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::Call {
            callee: Box::new(callee),
            args,
            spread: false,
        }
    }

    /// The identifier name, if this is a bare identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// `pkg.member` where `pkg` is a bare identifier.
    #[must_use]
    pub fn as_qualified_name(&self) -> Option<(&str, &str)> {
        match self {
            Self::Selector { owner, member } => owner.as_ident().map(|o| (o, member.as_str())),
            _ => None,
        }
    }
}
