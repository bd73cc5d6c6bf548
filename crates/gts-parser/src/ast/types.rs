//! Type expressions.

use super::expressions::Expr;
use gts_common::Span;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Type {
    /// A bare type name such as `int` or `Point`.
    Named(String),
    /// `owner.Name`, a type from another package.
    Qualified { owner: String, name: String },
    /// `[]T`, `[N]T` or `[...]T`.
    Array { len: ArrayLength, elem: Box<Type> },
    Map { key: Box<Type>, value: Box<Type> },
    Pointer(Box<Type>),
    /// Generic instantiation `Base[A, B]`.
    Instance { base: Box<Type>, args: Vec<Type> },
    Unsupported { kind: UnsupportedType, span: Span },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum ArrayLength {
    /// Slice: no length at all.
    Dynamic,
    Fixed(Box<Expr>),
    /// `[...]T` in a composite literal.
    Ellipsis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum UnsupportedType {
    Func,
    Chan,
    Struct,
    Interface,
    /// Produced while recovering from a syntax error.
    Bad,
}

impl UnsupportedType {
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Func => "function",
            Self::Chan => "channel",
            Self::Struct => "anonymous struct",
            Self::Interface => "anonymous interface",
            Self::Bad => "malformed",
        }
    }
}

impl Type {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    #[must_use]
    pub fn slice(elem: Self) -> Self {
        Self::Array {
            len: ArrayLength::Dynamic,
            elem: Box::new(elem),
        }
    }

    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn pointer(pointee: Self) -> Self {
        Self::Pointer(Box::new(pointee))
    }

    /// Slices and arrays, the only sequence types the translator renders as lists.
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map { .. })
    }
}
