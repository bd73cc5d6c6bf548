//! Parser state - statements and blocks.

use super::state::ParserState;
use crate::ast::{
    AssignOp, CaseClause, ElseBranch, Expr, ForStmt, IfStmt, IncDecOp, RangeStmt, Stmt,
    SwitchStmt, UnsupportedExpr, UnsupportedStmt,
};
use gts_common::diagnostic_codes;
use gts_common::diagnostics::diagnostic_messages;
use gts_scanner::SyntaxKind;

/// Result of parsing a simple statement in a context that also admits a
/// range clause or a label.
enum SimpleStatement {
    Stmt(Stmt),
    Range {
        key: Option<Expr>,
        value: Option<Expr>,
        source: Expr,
    },
    Label,
}

impl ParserState {
    /// `{ statements }`
    pub(crate) fn parse_block(&mut self) -> Vec<Stmt> {
        if !self.enter_recursion() {
            self.skip_balanced(SyntaxKind::OpenBraceToken, SyntaxKind::CloseBraceToken);
            return Vec::new();
        }
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let statements = self.parse_statement_list();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.exit_recursion();
        statements
    }

    /// Statements up to a closing `}` or the next `case`/`default` clause.
    fn parse_statement_list(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken
                | SyntaxKind::EndOfFileToken
                | SyntaxKind::CaseKeyword
                | SyntaxKind::DefaultKeyword
        ) {
            let before = self.token_pos();
            self.parse_statement(&mut statements);
            self.parse_semicolon();
            self.ensure_progress(before);
        }
        statements
    }

    /// Parse one statement, appending zero or more nodes to `out`.
    ///
    /// Local `var (...)` groups expand to several declarations, while empty
    /// statements and labels add nothing of their own.
    pub(crate) fn parse_statement(&mut self, out: &mut Vec<Stmt>) {
        let start = self.token_pos();
        match self.token() {
            SyntaxKind::SemicolonToken => {}
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                let group = self.parse_value_group();
                out.extend(group.entries.into_iter().map(Stmt::LocalDecl));
            }
            SyntaxKind::TypeKeyword => {
                self.parse_type_decls();
                out.push(self.unsupported_stmt(UnsupportedStmt::TypeDecl, start));
            }
            SyntaxKind::GoKeyword | SyntaxKind::DeferKeyword => {
                let kind = if self.is_token(SyntaxKind::GoKeyword) {
                    UnsupportedStmt::Go
                } else {
                    UnsupportedStmt::Defer
                };
                self.next_token();
                self.parse_expression();
                out.push(self.unsupported_stmt(kind, start));
            }
            SyntaxKind::ReturnKeyword => {
                self.next_token();
                let values = if matches!(
                    self.token(),
                    SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken
                ) {
                    Vec::new()
                } else {
                    self.parse_expression_list()
                };
                out.push(Stmt::Return(values));
            }
            SyntaxKind::BreakKeyword | SyntaxKind::ContinueKeyword => {
                let stmt = if self.is_token(SyntaxKind::BreakKeyword) {
                    Stmt::Break
                } else {
                    Stmt::Continue
                };
                self.next_token();
                // Labels are dropped.
                self.parse_optional(SyntaxKind::Identifier);
                out.push(stmt);
            }
            SyntaxKind::GotoKeyword => {
                self.next_token();
                self.parse_identifier();
                out.push(self.unsupported_stmt(UnsupportedStmt::Goto, start));
            }
            SyntaxKind::FallthroughKeyword => {
                self.next_token();
                out.push(self.unsupported_stmt(UnsupportedStmt::Fallthrough, start));
            }
            SyntaxKind::OpenBraceToken => out.push(Stmt::Block(self.parse_block())),
            SyntaxKind::IfKeyword => out.push(Stmt::If(self.parse_if_statement())),
            SyntaxKind::ForKeyword => out.push(self.parse_for_statement()),
            SyntaxKind::SwitchKeyword => out.push(self.parse_switch_statement()),
            SyntaxKind::SelectKeyword => {
                self.parse_select_statement();
                out.push(self.unsupported_stmt(UnsupportedStmt::Select, start));
            }
            kind if self.is_start_of_simple_statement(kind) => {
                match self.parse_simple_statement(false, true) {
                    SimpleStatement::Stmt(stmt) => out.push(stmt),
                    SimpleStatement::Label => {
                        if !matches!(
                            self.token(),
                            SyntaxKind::CloseBraceToken | SyntaxKind::SemicolonToken
                        ) {
                            self.parse_statement(out);
                        }
                    }
                    SimpleStatement::Range { .. } => {}
                }
            }
            _ => {
                self.parse_error_at_current_token(
                    diagnostic_messages::STATEMENT_EXPECTED,
                    diagnostic_codes::STATEMENT_EXPECTED,
                );
                self.skip_to_statement_end();
            }
        }
    }

    fn is_start_of_simple_statement(&self, kind: SyntaxKind) -> bool {
        kind == SyntaxKind::Identifier
            || kind.is_literal()
            || self.is_start_of_type()
            || matches!(
                kind,
                SyntaxKind::PlusToken
                    | SyntaxKind::MinusToken
                    | SyntaxKind::ExclamationToken
                    | SyntaxKind::CaretToken
                    | SyntaxKind::AmpersandToken
            )
    }

    fn unsupported_stmt(&self, kind: UnsupportedStmt, start: u32) -> Stmt {
        Stmt::Unsupported {
            kind,
            span: self.span_from(start),
        }
    }

    /// Expression statements, assignments, `++`/`--`, sends, and (where
    /// allowed) range clauses and labels.
    fn parse_simple_statement(&mut self, range_ok: bool, label_ok: bool) -> SimpleStatement {
        let start = self.token_pos();

        if range_ok && self.parse_optional(SyntaxKind::RangeKeyword) {
            return SimpleStatement::Range {
                key: None,
                value: None,
                source: self.parse_expression(),
            };
        }

        let mut lhs = self.parse_expression_list();

        if let Some(op) = assignment_operator(self.token()) {
            self.next_token();
            if range_ok
                && matches!(op, AssignOp::Assign | AssignOp::Define)
                && self.parse_optional(SyntaxKind::RangeKeyword)
            {
                let source = self.parse_expression();
                let mut targets = lhs.into_iter();
                return SimpleStatement::Range {
                    key: targets.next(),
                    value: targets.next(),
                    source,
                };
            }
            let rhs = self.parse_expression_list();
            return SimpleStatement::Stmt(Stmt::Assign {
                op,
                lhs,
                rhs,
                span: self.span_from(start),
            });
        }

        if lhs.len() > 1 {
            self.parse_expected(SyntaxKind::ColonEqualsToken);
            return SimpleStatement::Stmt(Stmt::Unsupported {
                kind: UnsupportedStmt::Bad,
                span: self.span_from(start),
            });
        }
        let expr = lhs.pop().unwrap_or(Expr::Unsupported {
            kind: UnsupportedExpr::Bad,
            span: self.span_from(start),
        });

        match self.token() {
            SyntaxKind::ColonToken if label_ok && matches!(expr, Expr::Ident(_)) => {
                self.next_token();
                SimpleStatement::Label
            }
            SyntaxKind::ArrowToken => {
                self.next_token();
                self.parse_expression();
                SimpleStatement::Stmt(self.unsupported_stmt(UnsupportedStmt::Send, start))
            }
            SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken => {
                let op = if self.is_token(SyntaxKind::PlusPlusToken) {
                    IncDecOp::Inc
                } else {
                    IncDecOp::Dec
                };
                self.next_token();
                SimpleStatement::Stmt(Stmt::IncDec { op, operand: expr })
            }
            _ => SimpleStatement::Stmt(Stmt::Expr(expr)),
        }
    }

    /// Simple statement in a control clause header, where labels and ranges
    /// are not meaningful.
    fn parse_header_statement(&mut self) -> Stmt {
        match self.parse_simple_statement(false, false) {
            SimpleStatement::Stmt(stmt) => stmt,
            SimpleStatement::Range { .. } | SimpleStatement::Label => Stmt::Unsupported {
                kind: UnsupportedStmt::Bad,
                span: self.token_span(),
            },
        }
    }

    /// Interpret a header statement as the condition expression.
    fn statement_to_condition(&mut self, stmt: Stmt) -> Expr {
        match stmt {
            Stmt::Expr(expr) => expr,
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

    // =========================================================================
    // Control flow
    // =========================================================================

    /// `if [init;] cond { ... } [else if ... | else { ... }]`
    fn parse_if_statement(&mut self) -> IfStmt {
        self.parse_expected(SyntaxKind::IfKeyword);
        let saved_level = std::mem::replace(&mut self.expr_level, -1);

        let mut init = None;
        let cond = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_error_at_current_token(
                diagnostic_messages::EXPRESSION_EXPECTED,
                diagnostic_codes::EXPRESSION_EXPECTED,
            );
            Expr::Unsupported {
                kind: UnsupportedExpr::Bad,
                span: self.token_span(),
            }
        } else {
            let first = if self.is_token(SyntaxKind::SemicolonToken) {
                None
            } else {
                Some(self.parse_header_statement())
            };
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                init = first.map(Box::new);
                let stmt = self.parse_header_statement();
                self.statement_to_condition(stmt)
            } else {
                match first {
                    Some(stmt) => self.statement_to_condition(stmt),
                    None => Expr::Unsupported {
                        kind: UnsupportedExpr::Bad,
                        span: self.token_span(),
                    },
                }
            }
        };

        self.expr_level = saved_level;
        let body = self.parse_block();

        let else_branch = if self.parse_optional(SyntaxKind::ElseKeyword) {
            match self.token() {
                // `else if` chains nest like blocks do.
                SyntaxKind::IfKeyword if self.enter_recursion() => {
                    let nested = self.parse_if_statement();
                    self.exit_recursion();
                    Some(ElseBranch::If(Box::new(nested)))
                }
                SyntaxKind::IfKeyword => {
                    self.skip_to_statement_end();
                    None
                }
                SyntaxKind::OpenBraceToken => Some(ElseBranch::Block(self.parse_block())),
                _ => {
                    self.parse_expected(SyntaxKind::IfKeyword);
                    None
                }
            }
        } else {
            None
        };

        IfStmt {
            init,
            cond,
            body,
            else_branch,
        }
    }

    /// All four `for` forms: infinite, condition-only, three-clause and range.
    fn parse_for_statement(&mut self) -> Stmt {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::ForKeyword);
        let saved_level = std::mem::replace(&mut self.expr_level, -1);

        let mut init = None;
        let mut cond = None;
        let mut post = None;
        let mut range = None;

        if !self.is_token(SyntaxKind::OpenBraceToken) {
            let first = if self.is_token(SyntaxKind::SemicolonToken) {
                None
            } else {
                match self.parse_simple_statement(true, false) {
                    SimpleStatement::Range { key, value, source } => {
                        range = Some((key, value, source));
                        None
                    }
                    SimpleStatement::Stmt(stmt) => Some(stmt),
                    SimpleStatement::Label => None,
                }
            };

            if range.is_none() {
                if self.parse_optional(SyntaxKind::SemicolonToken) {
                    init = first.map(Box::new);
                    if !self.is_token(SyntaxKind::SemicolonToken) {
                        let stmt = self.parse_header_statement();
                        cond = Some(self.statement_to_condition(stmt));
                    }
                    self.parse_expected(SyntaxKind::SemicolonToken);
                    if !self.is_token(SyntaxKind::OpenBraceToken) {
                        post = Some(Box::new(self.parse_header_statement()));
                    }
                } else if let Some(stmt) = first {
                    cond = Some(self.statement_to_condition(stmt));
                }
            }
        }

        self.expr_level = saved_level;
        let body = self.parse_block();

        match range {
            Some((key, value, source)) => Stmt::ForEach(RangeStmt {
                key,
                value,
                source,
                body,
            }),
            None => Stmt::ClassicFor(ForStmt {
                init,
                cond,
                post,
                body,
                span: self.span_from(start),
            }),
        }
    }

    /// `switch [init;] [tag] { case ...: ... default: ... }`
    ///
    /// Type switches are recognised by their `x.(type)` guard and reduced to a
    /// single unsupported node once their body has been consumed.
    fn parse_switch_statement(&mut self) -> Stmt {
        let start = self.token_pos();
        self.parse_expected(SyntaxKind::SwitchKeyword);
        let saved_level = std::mem::replace(&mut self.expr_level, -1);

        let mut init = None;
        let mut tag_stmt = None;
        if !self.is_token(SyntaxKind::OpenBraceToken) {
            let first = if self.is_token(SyntaxKind::SemicolonToken) {
                None
            } else {
                Some(self.parse_header_statement())
            };
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                init = first.map(Box::new);
                if !self.is_token(SyntaxKind::OpenBraceToken) {
                    tag_stmt = Some(self.parse_header_statement());
                }
            } else {
                tag_stmt = first;
            }
        }
        self.expr_level = saved_level;

        let is_type_switch = tag_stmt.as_ref().is_some_and(is_type_switch_guard);
        let tag = match tag_stmt {
            Some(stmt) if !is_type_switch => Some(self.statement_to_condition(stmt)),
            _ => None,
        };

        let body = self.parse_case_clauses();
        if is_type_switch {
            return self.unsupported_stmt(UnsupportedStmt::TypeSwitch, start);
        }
        Stmt::Switch(SwitchStmt { init, tag, body })
    }

    fn parse_case_clauses(&mut self) -> Vec<Stmt> {
        let mut clauses = Vec::new();
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return clauses;
        }
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            let labels = match self.token() {
                SyntaxKind::CaseKeyword => {
                    self.next_token();
                    Some(self.parse_expression_list())
                }
                SyntaxKind::DefaultKeyword => {
                    self.next_token();
                    None
                }
                _ => {
                    self.parse_expected(SyntaxKind::CaseKeyword);
                    self.skip_to_statement_end();
                    self.ensure_progress(before);
                    continue;
                }
            };
            self.parse_expected(SyntaxKind::ColonToken);
            let body = self.parse_statement_list();
            clauses.push(Stmt::Case(CaseClause { labels, body }));
            self.ensure_progress(before);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        clauses
    }

    /// `select { case v := <-ch: ... }`, parsed only to be skipped.
    fn parse_select_statement(&mut self) {
        self.parse_expected(SyntaxKind::SelectKeyword);
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return;
        }
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let before = self.token_pos();
            if self.parse_optional(SyntaxKind::CaseKeyword) {
                self.parse_header_statement();
            } else {
                self.parse_expected(SyntaxKind::DefaultKeyword);
            }
            self.parse_expected(SyntaxKind::ColonToken);
            self.parse_statement_list();
            self.ensure_progress(before);
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
    }
}

fn is_type_switch_guard(stmt: &Stmt) -> bool {
    let is_guard = |e: &Expr| {
        matches!(
            e,
            Expr::Unsupported {
                kind: UnsupportedExpr::TypeSwitchGuard,
                ..
            }
        )
    };
    match stmt {
        Stmt::Expr(expr) => is_guard(expr),
        Stmt::Assign {
            op: AssignOp::Define,
            rhs,
            ..
        } => rhs.first().is_some_and(is_guard),
        _ => false,
    }
}

fn assignment_operator(kind: SyntaxKind) -> Option<AssignOp> {
    Some(match kind {
        SyntaxKind::EqualsToken => AssignOp::Assign,
        SyntaxKind::ColonEqualsToken => AssignOp::Define,
        SyntaxKind::PlusEqualsToken => AssignOp::Add,
        SyntaxKind::MinusEqualsToken => AssignOp::Sub,
        SyntaxKind::AsteriskEqualsToken => AssignOp::Mul,
        SyntaxKind::SlashEqualsToken => AssignOp::Div,
        SyntaxKind::PercentEqualsToken => AssignOp::Rem,
        SyntaxKind::AmpersandEqualsToken => AssignOp::BitAnd,
        SyntaxKind::BarEqualsToken => AssignOp::BitOr,
        SyntaxKind::CaretEqualsToken => AssignOp::BitXor,
        SyntaxKind::LessThanLessThanEqualsToken => AssignOp::Shl,
        SyntaxKind::GreaterThanGreaterThanEqualsToken => AssignOp::Shr,
        SyntaxKind::AmpersandCaretEqualsToken => AssignOp::AndNot,
        _ => return None,
    })
}
