// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Expression rendering - shared by both views.

use super::stmt::render_stmts;
use crate::fragment::Fragment;
use itertools::Itertools;
use syrup_ast::{Alloc, Expr};

/// Render an expression to a fragment.
pub fn render_expr(expr: &Expr) -> Fragment {
    match expr {
        Expr::Bracket(inner) => parenthesized(render_expr(inner)),
        Expr::Assign { left, right } => Fragment::seq(vec![
            render_expr(left),
            Fragment::text(" = "),
            render_expr(right),
        ]),
        Expr::Alloc(alloc) => render_alloc(alloc),
        Expr::Bin { op, left, right } => Fragment::seq(vec![
            Fragment::text("("),
            render_expr(left),
            Fragment::text(format!(" {} ", op)),
            render_expr(right),
            Fragment::text(")"),
        ]),
        Expr::Infix { func, left, right } => Fragment::seq(vec![
            Fragment::text(format!("{}(", func)),
            render_expr(left),
            Fragment::text(", "),
            render_expr(right),
            Fragment::text(")"),
        ]),
        Expr::Prefix { op, expr } => Fragment::seq(vec![
            Fragment::text(format!("({}", op)),
            render_expr(expr),
            Fragment::text(")"),
        ]),
        Expr::Suffix { op, expr } => Fragment::seq(vec![
            Fragment::text("("),
            render_expr(expr),
            Fragment::text(format!("{})", op)),
        ]),
        Expr::Dict { base, indices } => {
            let mut parts = vec![render_expr(base)];
            for index in indices {
                parts.push(Fragment::text("["));
                parts.push(render_expr(index));
                parts.push(Fragment::text("]"));
            }
            Fragment::seq(parts)
        }
        Expr::Call {
            callee,
            generic_args,
            args,
        } => render_call(callee, generic_args, args),
        Expr::Lambda {
            body,
            params,
            by_ref,
        } => render_lambda(body, params, *by_ref),
        Expr::Access { base, op, name } => Fragment::seq(vec![
            render_expr(base),
            Fragment::text(format!("{}{}", op, name)),
        ]),
        Expr::NewType { elem_type, args } => Fragment::seq(vec![
            Fragment::text(format!("new {}(", elem_type)),
            comma_joined(args),
            Fragment::text(")"),
        ]),
        Expr::NewArray { elem_type, dims } => {
            let mut parts = vec![Fragment::text(format!("new {}", elem_type))];
            for dim in dims {
                parts.push(Fragment::text("["));
                parts.push(render_expr(dim));
                parts.push(Fragment::text("]"));
            }
            Fragment::seq(parts)
        }
        Expr::Cond {
            cond,
            then_expr,
            else_expr,
        } => Fragment::seq(vec![
            Fragment::text("("),
            render_expr(cond),
            Fragment::text(" ? "),
            render_expr(then_expr),
            Fragment::text(" : "),
            render_expr(else_expr),
            Fragment::text(")"),
        ]),
        Expr::Tuple(exprs) => Fragment::seq(vec![
            Fragment::text("make_tuple("),
            comma_joined(exprs),
            Fragment::text(")"),
        ]),
        Expr::Cast { target_type, expr } => Fragment::seq(vec![
            Fragment::text(format!("({})(", target_type)),
            render_expr(expr),
            Fragment::text(")"),
        ]),
        Expr::Block(stmts) => Fragment::seq(vec![
            Fragment::text("({\n"),
            Fragment::indent(render_stmts(stmts)),
            Fragment::text("\n})"),
        ]),
        Expr::ExprList(exprs) => comma_joined(exprs),
        Expr::Const { text, .. } => Fragment::text(text.clone()),
    }
}

/// Render an allocation. Multiple names become one declaration per name;
/// the enclosing statement position supplies the final terminator.
pub fn render_alloc(alloc: &Alloc) -> Fragment {
    let decls = alloc
        .bindings()
        .map(|(name, init)| render_binding(&alloc.ty, name, init, alloc.uses_equals))
        .collect();
    Fragment::join(decls, ";\n")
}

fn render_binding(ty: &str, name: &str, init: Option<&Expr>, uses_equals: bool) -> Fragment {
    let head = if ty.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", ty, name)
    };
    match init {
        None => Fragment::text(head),
        Some(init) if uses_equals => Fragment::seq(vec![
            Fragment::text(format!("{} = ", head)),
            render_expr(init),
        ]),
        Some(init) => Fragment::seq(vec![
            Fragment::text(format!("{}(", head)),
            render_expr(init),
            Fragment::text(")"),
        ]),
    }
}

fn render_call(callee: &Expr, generic_args: &[String], args: &[Expr]) -> Fragment {
    let mut parts = vec![render_expr(callee)];
    if !generic_args.is_empty() {
        parts.push(Fragment::text(format!("<{}>", generic_args.iter().join(", "))));
    }
    parts.push(Fragment::text("("));
    parts.push(comma_joined(args));
    parts.push(Fragment::text(")"));
    Fragment::seq(parts)
}

fn render_lambda(body: &Expr, params: &[Alloc], by_ref: bool) -> Fragment {
    let capture = if by_ref { "&" } else { "=" };
    Fragment::seq(vec![
        Fragment::text(format!("([{}](", capture)),
        Fragment::join(params.iter().map(render_alloc).collect(), ", "),
        Fragment::text(") { return "),
        render_expr(body),
        Fragment::text("; })"),
    ])
}

fn parenthesized(inner: Fragment) -> Fragment {
    Fragment::seq(vec![Fragment::text("("), inner, Fragment::text(")")])
}

/// Comma-joined expression list.
pub fn comma_joined(exprs: &[Expr]) -> Fragment {
    Fragment::join(exprs.iter().map(render_expr).collect(), ", ")
}
