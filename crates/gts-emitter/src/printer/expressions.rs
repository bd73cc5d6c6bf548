//! Expression rendering.
//!
//! Expressions render to strings rather than lines; the statement emitter
//! decides where they land. Calls to a handful of Go built-ins and `fmt`
//! printing functions are rewritten to their Scar forms.

use super::{COMPOSITE_LITERAL, Printer, UNKNOWN_EXPRESSION};
use gts_common::{Span, diagnostic_codes};
use gts_parser::ast::{Expr, Type, UnsupportedExpr};

/// Calls with a dedicated Scar rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Builtin {
    /// `fmt.Println`, `fmt.Print`, `println`, `print`
    Print,
    /// `fmt.Printf`, `printf`
    Printf,
    Make,
    Len,
    Append,
}

impl Builtin {
    fn classify(callee: &Expr) -> Option<Self> {
        if let Some(name) = callee.as_ident() {
            return match name {
                "println" | "print" => Some(Self::Print),
                "printf" => Some(Self::Printf),
                "make" => Some(Self::Make),
                "len" => Some(Self::Len),
                "append" => Some(Self::Append),
                _ => None,
            };
        }
        match callee.as_qualified_name()? {
            ("fmt", "Println" | "Print") => Some(Self::Print),
            ("fmt", "Printf") => Some(Self::Printf),
            _ => None,
        }
    }
}

impl Printer {
    pub(super) fn translate_expr(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Ident(name) => name.clone(),
            Expr::Literal { text, .. } => text.clone(),
            Expr::Binary { op, left, right } => {
                let left = self.translate_expr(left);
                let right = self.translate_expr(right);
                format!("{left} {} {right}", op.as_str())
            }
            Expr::Unary { op, operand } => {
                format!("{}{}", op.as_str(), self.translate_expr(operand))
            }
            Expr::Call {
                callee,
                args,
                spread,
            } => self.translate_call(callee, args, *spread),
            Expr::Selector { owner, member } => {
                format!("{}.{member}", self.translate_expr(owner))
            }
            Expr::Index { collection, index } => {
                let collection = self.translate_expr(collection);
                format!("{collection}[{}]", self.translate_expr(index))
            }
            Expr::CompositeLit { ty, elements, span } => {
                self.translate_composite_literal(ty.as_ref(), elements, *span)
            }
            Expr::TypeAssert { ty, operand } => {
                let ty = self.map_type(ty);
                format!("({ty}){}", self.translate_expr(operand))
            }
            Expr::Paren(inner) => format!("({})", self.translate_expr(inner)),
            Expr::Type(ty) => self.map_type(ty),
            Expr::KeyValue { .. } => {
                self.report(
                    diagnostic_codes::EXPRESSION_NOT_SUPPORTED,
                    Span::default(),
                    &["A keyed element"],
                );
                UNKNOWN_EXPRESSION.to_string()
            }
            Expr::Unsupported { kind, span } => {
                if *kind != UnsupportedExpr::Bad {
                    self.report(
                        diagnostic_codes::EXPRESSION_NOT_SUPPORTED,
                        *span,
                        &[kind.description()],
                    );
                }
                UNKNOWN_EXPRESSION.to_string()
            }
        }
    }

    pub(super) fn translate_expr_list(&mut self, exprs: &[Expr]) -> String {
        let parts: Vec<String> = exprs.iter().map(|e| self.translate_expr(e)).collect();
        parts.join(", ")
    }

    fn translate_call(&mut self, callee: &Expr, args: &[Expr], spread: bool) -> String {
        match (Builtin::classify(callee), args) {
            (Some(Builtin::Print), [first, rest @ ..]) if !spread => {
                if !rest.is_empty() {
                    let dropped = rest.len().to_string();
                    self.report(
                        diagnostic_codes::PRINT_ARGUMENTS_DROPPED,
                        Span::default(),
                        &[&dropped],
                    );
                }
                format!("print {}", self.translate_expr(first))
            }
            (Some(Builtin::Printf), [format, rest @ ..]) if !spread => {
                let format = self.translate_expr(format);
                if rest.is_empty() {
                    format!("print {format}")
                } else {
                    format!("print {format} | {}", self.translate_expr_list(rest))
                }
            }
            (Some(Builtin::Make), [Expr::Type(ty), rest @ ..]) if ty.is_sequence() => {
                let mapped = self.map_type(ty);
                // A capacity argument has no Scar counterpart.
                let size = match rest.first() {
                    Some(size) => self.translate_expr(size),
                    None => String::new(),
                };
                format!("new {mapped}({size})")
            }
            (Some(Builtin::Make), [Expr::Type(Type::Map { .. }), ..]) => "[]".to_string(),
            (Some(Builtin::Len), [arg]) => format!("len({})", self.translate_expr(arg)),
            (Some(Builtin::Append), [collection, element]) if !spread => {
                let collection = self.translate_expr(collection);
                format!("{collection}.add({})", self.translate_expr(element))
            }
            _ => {
                let callee = self.translate_expr(callee);
                format!("{callee}({})", self.translate_expr_list(args))
            }
        }
    }

    /// Sequence literals become `[a, b]`; elided inner literals inherit the
    /// element type of the enclosing sequence.
    fn translate_composite_literal(
        &mut self,
        ty: Option<&Type>,
        elements: &[Expr],
        span: Span,
    ) -> String {
        let Some(Type::Array { elem, .. }) = ty else {
            self.report(diagnostic_codes::COMPOSITE_LITERAL_NOT_SUPPORTED, span, &[]);
            return COMPOSITE_LITERAL.to_string();
        };
        let parts: Vec<String> = elements
            .iter()
            .map(|element| match element {
                Expr::CompositeLit {
                    ty: None,
                    elements,
                    span,
                } => self.translate_composite_literal(Some(elem.as_ref()), elements, *span),
                Expr::KeyValue { .. } => {
                    self.report(
                        diagnostic_codes::EXPRESSION_NOT_SUPPORTED,
                        span,
                        &["A keyed element"],
                    );
                    UNKNOWN_EXPRESSION.to_string()
                }
                other => self.translate_expr(other),
            })
            .collect();
        format!("[{}]", parts.join(", "))
    }
}

/// Render an expression outside of any file context, discarding diagnostics.
#[must_use]
pub fn expr_to_string(expr: &Expr) -> String {
    Printer::new("", super::PrintOptions::default()).translate_expr(expr)
}
