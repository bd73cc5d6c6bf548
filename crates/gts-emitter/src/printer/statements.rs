//! Statement emission.
//!
//! Every method here leaves the indentation depth as it found it: bodies are
//! wrapped in a matching `increase_indent`/`decrease_indent` pair.

use super::{Printer, TYPE_SWITCH_NOT_SUPPORTED, UNKNOWN_STATEMENT};
use crate::source_writer::SourceWriter;
use gts_common::diagnostic_codes;
use gts_parser::ast::{
    AssignOp, CaseClause, ElseBranch, Expr, ForStmt, IfStmt, IncDecOp, RangeStmt, Stmt,
    SwitchStmt, UnsupportedStmt, ValueSpec,
};

impl Printer {
    pub(super) fn emit_statement(&mut self, stmt: &Stmt) {
        tracing::trace!(depth = self.writer.indent_level(), "statement");
        match stmt {
            Stmt::Expr(expr) => {
                let line = self.translate_expr(expr);
                self.write_line(&line);
            }
            Stmt::Assign { op, lhs, rhs, span } => match (lhs.as_slice(), rhs.as_slice()) {
                ([target], [value]) => self.emit_assignment(*op, target, value),
                _ => {
                    let targets = lhs.len().to_string();
                    let values = rhs.len().to_string();
                    self.report(
                        diagnostic_codes::MULTI_ASSIGNMENT_NOT_SUPPORTED,
                        *span,
                        &[&targets, &values],
                    );
                    self.write_line(UNKNOWN_STATEMENT);
                }
            },
            Stmt::LocalDecl(spec) => self.emit_value_spec(spec),
            Stmt::If(if_stmt) => self.emit_if(if_stmt, "if"),
            Stmt::ClassicFor(for_stmt) => self.emit_for(for_stmt),
            Stmt::ForEach(range) => self.emit_range(range),
            Stmt::Return(values) => {
                if values.is_empty() {
                    self.write_line("return");
                } else {
                    let values = self.translate_expr_list(values);
                    self.write_line(&format!("return {values}"));
                }
            }
            Stmt::Block(stmts) => self.emit_statements(stmts),
            Stmt::IncDec { op, operand } => {
                let operand = self.translate_expr(operand);
                let sign = match op {
                    IncDecOp::Inc => "+",
                    IncDecOp::Dec => "-",
                };
                self.write_line(&format!("{operand} = {operand} {sign} 1"));
            }
            Stmt::Switch(switch) => self.emit_switch(switch),
            Stmt::Case(clause) => self.emit_case(clause),
            Stmt::Break => self.write_line("break"),
            Stmt::Continue => self.write_line("continue"),
            Stmt::Unsupported { kind, span } => {
                if *kind == UnsupportedStmt::TypeSwitch {
                    self.report(diagnostic_codes::TYPE_SWITCH_NOT_SUPPORTED, *span, &[]);
                    self.write_line(TYPE_SWITCH_NOT_SUPPORTED);
                } else {
                    self.report(
                        diagnostic_codes::STATEMENT_NOT_SUPPORTED,
                        *span,
                        &[kind.keyword()],
                    );
                    self.write_line(UNKNOWN_STATEMENT);
                }
            }
        }
    }

    pub(super) fn emit_statements(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.emit_statement(stmt);
        }
    }

    /// Emit `stmts` one level deeper than the current line.
    pub(super) fn emit_body(&mut self, stmts: &[Stmt]) {
        self.increase_indent();
        self.emit_statements(stmts);
        self.decrease_indent();
    }

    /// `x = v`, with compound operators spelled out: `x += v` → `x = x + v`.
    fn emit_assignment(&mut self, op: AssignOp, target: &Expr, value: &Expr) {
        let target = self.translate_expr(target);
        let value = self.translate_expr(value);
        let line = match op.binary_op() {
            Some(binary) => format!("{target} = {target} {} {value}", binary.as_str()),
            None => format!("{target} = {value}"),
        };
        self.write_line(&line);
    }

    /// One `var`/`const` binding. An untyped binding without a value has
    /// nothing to say in Scar and is skipped.
    pub(super) fn emit_value_spec(&mut self, spec: &ValueSpec) {
        let ty = spec.ty.as_ref().map(|ty| self.map_type(ty));
        let init = spec.init.as_ref().map(|init| self.translate_expr(init));
        let line = match (ty, init) {
            (Some(ty), Some(init)) => format!("{ty} {} = {init}", spec.name),
            (Some(ty), None) => format!("{ty} {}", spec.name),
            (None, Some(init)) => format!("{} = {init}", spec.name),
            (None, None) => return,
        };
        self.write_line(&line);
    }

    /// `if`/`elif` chain. Each link's init statement is emitted just before
    /// its own header.
    fn emit_if(&mut self, stmt: &IfStmt, keyword: &str) {
        if let Some(init) = &stmt.init {
            self.emit_statement(init);
        }
        let cond = self.translate_expr(&stmt.cond);
        self.write_line(&format!("{keyword} {cond}:"));
        self.emit_body(&stmt.body);
        match &stmt.else_branch {
            Some(ElseBranch::If(next)) => self.emit_if(next, "elif"),
            Some(ElseBranch::Block(body)) => {
                self.write_line("else:");
                self.emit_body(body);
            }
            None => {}
        }
    }

    fn emit_for(&mut self, stmt: &ForStmt) {
        let header = match (&stmt.init, &stmt.cond, &stmt.post) {
            (Some(init), Some(cond), Some(post)) => {
                let cond = self.translate_expr(cond);
                match loop_variable(init) {
                    Some(var) => {
                        let post = self.render_inline(post);
                        format!("for {var}; {cond}; {post}:")
                    }
                    None => {
                        self.report(diagnostic_codes::LOOP_VARIABLE_NOT_RECOVERED, stmt.span, &[]);
                        format!("while {cond}:")
                    }
                }
            }
            (_, Some(cond), _) => format!("while {}:", self.translate_expr(cond)),
            (_, None, _) => "while true:".to_string(),
        };
        self.write_line(&header);
        self.emit_body(&stmt.body);
    }

    fn emit_range(&mut self, stmt: &RangeStmt) {
        let source = self.translate_expr(&stmt.source);
        let bindings = match (&stmt.key, &stmt.value) {
            (Some(key), Some(value)) => {
                let key = self.translate_expr(key);
                format!("{key}, {}", self.translate_expr(value))
            }
            (Some(key), None) => self.translate_expr(key),
            (None, _) => "_".to_string(),
        };
        self.write_line(&format!("for {bindings} in {source}:"));
        self.emit_body(&stmt.body);
    }

    fn emit_switch(&mut self, stmt: &SwitchStmt) {
        if let Some(init) = &stmt.init {
            self.emit_statement(init);
        }
        let header = match &stmt.tag {
            Some(tag) => format!("switch {}:", self.translate_expr(tag)),
            None => "switch:".to_string(),
        };
        self.write_line(&header);
        self.emit_body(&stmt.body);
    }

    fn emit_case(&mut self, clause: &CaseClause) {
        let header = match &clause.labels {
            Some(labels) => format!("case {}:", self.translate_expr_list(labels)),
            None => "default:".to_string(),
        };
        self.write_line(&header);
        self.emit_body(&clause.body);
    }

    /// Render a statement to a single trimmed line using a scratch writer.
    fn render_inline(&mut self, stmt: &Stmt) -> String {
        let saved = std::mem::replace(&mut self.writer, SourceWriter::fragment());
        self.emit_statement(stmt);
        let rendered = std::mem::replace(&mut self.writer, saved).finish();
        let lines: Vec<&str> = rendered.lines().map(str::trim).collect();
        lines.join("; ")
    }
}

/// The variable a three-clause loop's init statement introduces: the single
/// identifier target of `i := 0` / `i = 0`, or the name of `var i = 0`.
fn loop_variable(init: &Stmt) -> Option<&str> {
    match init {
        Stmt::Assign {
            op: AssignOp::Define | AssignOp::Assign,
            lhs,
            rhs,
            ..
        } if rhs.len() == 1 => match lhs.as_slice() {
            [target] => target.as_ident(),
            _ => None,
        },
        Stmt::LocalDecl(spec) => Some(&spec.name),
        _ => None,
    }
}
