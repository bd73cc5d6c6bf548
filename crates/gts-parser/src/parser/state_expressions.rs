//! Parser state - expressions.

use super::state::ParserState;
use crate::ast::{BinaryOp, Expr, LiteralKind, Type, UnaryOp, UnsupportedExpr};
use gts_common::diagnostic_codes;
use gts_common::diagnostics::diagnostic_messages;
use gts_scanner::SyntaxKind;

impl ParserState {
    pub(crate) fn parse_expression(&mut self) -> Expr {
        self.parse_binary_expression(1)
    }

    pub(crate) fn parse_expression_list(&mut self) -> Vec<Expr> {
        let mut list = vec![self.parse_expression()];
        while self.parse_optional(SyntaxKind::CommaToken) {
            list.push(self.parse_expression());
        }
        list
    }

    /// Precedence climbing over Go's five binary levels; all are left-associative.
    ///
    /// Every operator in a chain deepens the left spine of the tree, so each
    /// one counts against the recursion limit like a nested expression.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> Expr {
        let mut left = self.parse_unary_expression();
        let mut links = 0;
        loop {
            let precedence = self.token().binary_precedence();
            if precedence == 0 || precedence < min_precedence {
                break;
            }
            let Some(op) = binary_operator(self.token()) else {
                break;
            };
            if !self.enter_recursion() {
                break;
            }
            links += 1;
            self.next_token();
            let right = self.parse_binary_expression(precedence + 1);
            left = Expr::binary(left, op, right);
        }
        self.exit_recursions(links);
        left
    }

    fn parse_unary_expression(&mut self) -> Expr {
        if !self.enter_recursion() {
            let span = self.token_span();
            self.next_token();
            return Expr::Unsupported {
                kind: UnsupportedExpr::Bad,
                span,
            };
        }
        let start = self.token_pos();
        let op = match self.token() {
            SyntaxKind::PlusToken => Some(UnaryOp::Plus),
            SyntaxKind::MinusToken => Some(UnaryOp::Neg),
            SyntaxKind::ExclamationToken => Some(UnaryOp::Not),
            SyntaxKind::CaretToken => Some(UnaryOp::BitNot),
            SyntaxKind::AmpersandToken => Some(UnaryOp::AddressOf),
            SyntaxKind::ArrowToken => Some(UnaryOp::Receive),
            _ => None,
        };
        let expr = if let Some(op) = op {
            self.next_token();
            let operand = self.parse_unary_expression();
            Expr::Unary {
                op,
                operand: Box::new(operand),
            }
        } else if self.is_token(SyntaxKind::AsteriskToken) {
            self.next_token();
            self.parse_unary_expression();
            Expr::Unsupported {
                kind: UnsupportedExpr::Deref,
                span: self.span_from(start),
            }
        } else {
            self.parse_primary_expression()
        };
        self.exit_recursion();
        expr
    }

    /// Operand followed by selectors, indexes, calls and composite literal
    /// bodies. Each postfix link counts against the recursion limit.
    fn parse_primary_expression(&mut self) -> Expr {
        let start = self.token_pos();
        let mut expr = self.parse_operand();
        let mut links = 0;
        loop {
            let is_postfix = match self.token() {
                SyntaxKind::OpenBraceToken => self.starts_composite_literal(&expr),
                kind => matches!(
                    kind,
                    SyntaxKind::DotToken | SyntaxKind::OpenBracketToken | SyntaxKind::OpenParenToken
                ),
            };
            if !is_postfix || !self.enter_recursion() {
                break;
            }
            links += 1;
            expr = match self.token() {
                SyntaxKind::DotToken => self.parse_selector_or_assertion(expr, start),
                SyntaxKind::OpenBracketToken => self.parse_index_or_slice(expr, start),
                SyntaxKind::OpenParenToken => self.parse_call_arguments(expr),
                _ => {
                    let ty = Self::expr_to_type(expr);
                    self.parse_composite_literal(ty, start)
                }
            };
        }
        self.exit_recursions(links);
        expr
    }

    fn parse_operand(&mut self) -> Expr {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::Identifier => Expr::Ident(self.parse_identifier()),
            SyntaxKind::IntLiteral => self.parse_literal(LiteralKind::Int),
            SyntaxKind::FloatLiteral => self.parse_literal(LiteralKind::Float),
            SyntaxKind::ImagLiteral => self.parse_literal(LiteralKind::Imag),
            SyntaxKind::RuneLiteral => self.parse_literal(LiteralKind::Rune),
            SyntaxKind::StringLiteral => self.parse_literal(LiteralKind::String),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                self.expr_level += 1;
                let inner = self.parse_expression();
                self.expr_level -= 1;
                self.parse_expected(SyntaxKind::CloseParenToken);
                Expr::Paren(Box::new(inner))
            }
            SyntaxKind::FuncKeyword => {
                self.next_token();
                self.parse_signature();
                if self.is_token(SyntaxKind::OpenBraceToken) {
                    let saved_level = std::mem::replace(&mut self.expr_level, 0);
                    self.parse_block();
                    self.expr_level = saved_level;
                    Expr::Unsupported {
                        kind: UnsupportedExpr::FuncLit,
                        span: self.span_from(start),
                    }
                } else {
                    Expr::Type(Type::Unsupported {
                        kind: crate::ast::UnsupportedType::Func,
                        span: self.span_from(start),
                    })
                }
            }
            SyntaxKind::OpenBracketToken
            | SyntaxKind::MapKeyword
            | SyntaxKind::ChanKeyword
            | SyntaxKind::StructKeyword
            | SyntaxKind::InterfaceKeyword => Expr::Type(self.parse_type()),
            _ => {
                self.parse_error_at_current_token(
                    diagnostic_messages::EXPRESSION_EXPECTED,
                    diagnostic_codes::EXPRESSION_EXPECTED,
                );
                Expr::Unsupported {
                    kind: UnsupportedExpr::Bad,
                    span: self.token_span(),
                }
            }
        }
    }

    fn parse_literal(&mut self, kind: LiteralKind) -> Expr {
        let text = self.token_text();
        self.next_token();
        Expr::Literal { kind, text }
    }

    /// `x.name` or `x.(T)` or `x.(type)`.
    fn parse_selector_or_assertion(&mut self, owner: Expr, start: u32) -> Expr {
        self.parse_expected(SyntaxKind::DotToken);
        if self.is_token(SyntaxKind::Identifier) {
            let member = self.parse_identifier();
            return Expr::Selector {
                owner: Box::new(owner),
                member,
            };
        }
        self.parse_expected(SyntaxKind::OpenParenToken);
        if self.parse_optional(SyntaxKind::TypeKeyword) {
            self.parse_expected(SyntaxKind::CloseParenToken);
            return Expr::Unsupported {
                kind: UnsupportedExpr::TypeSwitchGuard,
                span: self.span_from(start),
            };
        }
        let ty = self.parse_type();
        self.parse_expected(SyntaxKind::CloseParenToken);
        Expr::TypeAssert {
            ty,
            operand: Box::new(owner),
        }
    }

    /// `x[i]`, `x[lo:hi]`, `x[lo:hi:max]` or `f[A, B]`.
    fn parse_index_or_slice(&mut self, collection: Expr, start: u32) -> Expr {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        self.expr_level += 1;

        let index = if self.is_token(SyntaxKind::ColonToken) {
            None
        } else {
            Some(self.parse_expression())
        };

        let unsupported = match self.token() {
            SyntaxKind::ColonToken => {
                while self.parse_optional(SyntaxKind::ColonToken) {
                    if !self.is_token(SyntaxKind::ColonToken)
                        && !self.is_token(SyntaxKind::CloseBracketToken)
                    {
                        self.parse_expression();
                    }
                }
                Some(UnsupportedExpr::Slice)
            }
            SyntaxKind::CommaToken => {
                while self.parse_optional(SyntaxKind::CommaToken) {
                    if self.is_token(SyntaxKind::CloseBracketToken) {
                        break;
                    }
                    self.parse_expression();
                }
                Some(UnsupportedExpr::Instantiation)
            }
            _ => None,
        };

        self.expr_level -= 1;
        self.parse_expected(SyntaxKind::CloseBracketToken);
        match (unsupported, index) {
            (None, Some(index)) => Expr::Index {
                collection: Box::new(collection),
                index: Box::new(index),
            },
            (kind, _) => Expr::Unsupported {
                kind: kind.unwrap_or(UnsupportedExpr::Bad),
                span: self.span_from(start),
            },
        }
    }

    fn parse_call_arguments(&mut self, callee: Expr) -> Expr {
        self.parse_expected(SyntaxKind::OpenParenToken);
        self.expr_level += 1;
        let mut args = Vec::new();
        let mut spread = false;
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            args.push(self.parse_expression());
            if self.parse_optional(SyntaxKind::DotDotDotToken) {
                spread = true;
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
            self.ensure_progress(before);
        }
        self.expr_level -= 1;
        self.parse_expected(SyntaxKind::CloseParenToken);
        Expr::Call {
            callee: Box::new(callee),
            args,
            spread,
        }
    }

    /// `T{` starts a composite literal only for expressions that can name a
    /// type. Inside a control clause header a bare type name followed by `{`
    /// is the start of the block instead.
    fn starts_composite_literal(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Type(ty) => matches!(ty, Type::Array { .. } | Type::Map { .. }),
            Expr::Ident(_) | Expr::Index { .. } => self.expr_level >= 0,
            Expr::Selector { owner, .. } => {
                matches!(**owner, Expr::Ident(_)) && self.expr_level >= 0
            }
            _ => false,
        }
    }

    /// `{ elem, key: value, {nested} }`
    pub(crate) fn parse_composite_literal(&mut self, ty: Option<Type>, start: u32) -> Expr {
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let saved_level = std::mem::replace(&mut self.expr_level, 1);
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            let element = self.parse_element();
            if self.parse_optional(SyntaxKind::ColonToken) {
                let value = self.parse_element();
                elements.push(Expr::KeyValue {
                    key: Box::new(element),
                    value: Box::new(value),
                });
            } else {
                elements.push(element);
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
            self.ensure_progress(before);
        }
        self.expr_level = saved_level;
        // Tolerate a missing trailing comma before a `}` on its own line.
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        Expr::CompositeLit {
            ty,
            elements,
            span: self.span_from(start),
        }
    }

    fn parse_element(&mut self) -> Expr {
        if self.is_token(SyntaxKind::OpenBraceToken) {
            let start = self.token_pos();
            self.parse_composite_literal(None, start)
        } else {
            self.parse_expression()
        }
    }
}

fn binary_operator(kind: SyntaxKind) -> Option<BinaryOp> {
    Some(match kind {
        SyntaxKind::PlusToken => BinaryOp::Add,
        SyntaxKind::MinusToken => BinaryOp::Sub,
        SyntaxKind::AsteriskToken => BinaryOp::Mul,
        SyntaxKind::SlashToken => BinaryOp::Div,
        SyntaxKind::PercentToken => BinaryOp::Rem,
        SyntaxKind::AmpersandToken => BinaryOp::BitAnd,
        SyntaxKind::BarToken => BinaryOp::BitOr,
        SyntaxKind::CaretToken => BinaryOp::BitXor,
        SyntaxKind::LessThanLessThanToken => BinaryOp::Shl,
        SyntaxKind::GreaterThanGreaterThanToken => BinaryOp::Shr,
        SyntaxKind::AmpersandCaretToken => BinaryOp::AndNot,
        SyntaxKind::AmpersandAmpersandToken => BinaryOp::LogicalAnd,
        SyntaxKind::BarBarToken => BinaryOp::LogicalOr,
        SyntaxKind::EqualsEqualsToken => BinaryOp::Eq,
        SyntaxKind::ExclamationEqualsToken => BinaryOp::NotEq,
        SyntaxKind::LessThanToken => BinaryOp::Lt,
        SyntaxKind::LessThanEqualsToken => BinaryOp::LtEq,
        SyntaxKind::GreaterThanToken => BinaryOp::Gt,
        SyntaxKind::GreaterThanEqualsToken => BinaryOp::GtEq,
        _ => return None,
    })
}
