// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Statement rendering - shared by both views.

use super::expr::render_expr;
use crate::fragment::Fragment;
use itertools::Itertools;
use syrup_ast::{Expr, Stmt, StmtBlock};

/// Render a statement block: every statement terminated with `;`,
/// newline-joined, source order preserved.
pub fn render_stmt_block(block: &StmtBlock) -> Fragment {
    render_stmts(&block.stmts)
}

/// Render a statement list the way a statement block does.
pub fn render_stmts(stmts: &[Stmt]) -> Fragment {
    let items = stmts
        .iter()
        .map(|stmt| Fragment::seq(vec![render_stmt(stmt), Fragment::text(";")]))
        .collect();
    Fragment::join(items, "\n")
}

/// Render a single statement, unterminated.
pub fn render_stmt(stmt: &Stmt) -> Fragment {
    match stmt {
        Stmt::Expr(expr) => render_expr(expr),
        Stmt::If {
            cond,
            body,
            else_body,
        } => render_if(cond, body, else_body.as_ref()),
        Stmt::While { cond, body } => Fragment::seq(vec![
            Fragment::text("while "),
            render_expr(cond),
            braced_body(body),
        ]),
        Stmt::For {
            start,
            cond,
            next,
            body,
        } => Fragment::seq(vec![
            Fragment::text("for ("),
            render_expr(start),
            Fragment::text("; "),
            render_expr(cond),
            Fragment::text("; "),
            render_expr(next),
            Fragment::text(")"),
            braced_body(body),
        ]),
        Stmt::ForEach { var, target, body } => Fragment::seq(vec![
            Fragment::text(format!("for (auto {} : ", var)),
            render_expr(target),
            Fragment::text(")"),
            braced_body(body),
        ]),
        Stmt::Try {
            body,
            filter,
            catch_body,
        } => render_try(body, filter.as_ref(), catch_body),
        Stmt::Using { names } => {
            Fragment::text(names.iter().map(|name| format!("using {}", name)).join(";\n"))
        }
        Stmt::TypeDef { ty, name } => Fragment::text(format!("typedef {} {}", ty, name)),
    }
}

fn render_if(cond: &Expr, body: &StmtBlock, else_body: Option<&StmtBlock>) -> Fragment {
    let mut parts = vec![Fragment::text("if "), render_expr(cond), braced_body(body)];
    if let Some(else_body) = else_body {
        parts.push(Fragment::text(" else"));
        parts.push(braced_body(else_body));
    }
    Fragment::seq(parts)
}

fn render_try(body: &StmtBlock, filter: Option<&Expr>, catch_body: &StmtBlock) -> Fragment {
    let filter = match filter {
        Some(filter) => render_expr(filter),
        None => Fragment::text("..."),
    };
    Fragment::seq(vec![
        Fragment::text("try"),
        braced_body(body),
        Fragment::text(" catch ("),
        filter,
        Fragment::text(")"),
        braced_body(catch_body),
    ])
}

/// ` { <indented block> }` as used by every block-carrying statement.
fn braced_body(body: &StmtBlock) -> Fragment {
    Fragment::seq(vec![
        Fragment::text(" {\n"),
        Fragment::indent(render_stmt_block(body)),
        Fragment::text("\n}"),
    ])
}
