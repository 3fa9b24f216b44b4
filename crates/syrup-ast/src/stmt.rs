// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Statement nodes and statement blocks.

use crate::expr::Expr;
use anyhow::{bail, Result};

/// Statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Expression in statement position
    Expr(Expr),

    /// Conditional; else-if chains arrive pre-nested inside `else_body`
    If {
        cond: Expr,
        body: StmtBlock,
        else_body: Option<StmtBlock>,
    },

    /// While loop
    While { cond: Expr, body: StmtBlock },

    /// C-style loop
    For {
        start: Expr,
        cond: Expr,
        next: Expr,
        body: StmtBlock,
    },

    /// Range-based loop; the loop variable is a bare identifier
    ForEach {
        var: String,
        target: Expr,
        body: StmtBlock,
    },

    /// Try/catch; a missing filter catches everything
    Try {
        body: StmtBlock,
        filter: Option<Expr>,
        catch_body: StmtBlock,
    },

    /// Using directive in statement position
    Using { names: Vec<String> },

    /// Type alias in statement position
    TypeDef { ty: String, name: String },
}

impl Stmt {
    /// Range-based loop built from a front-end loop-variable expression.
    /// Only identifier constants are legal loop variables.
    pub fn for_each(var: Expr, target: Expr, body: StmtBlock) -> Result<Stmt> {
        match var.as_ident() {
            Some(name) => Ok(Stmt::ForEach {
                var: name.to_string(),
                target,
                body,
            }),
            None => bail!("loop variable must be a bare identifier"),
        }
    }
}

/// Ordered statement list. Renderers preserve source order exactly.
#[derive(Debug, Clone, Default)]
pub struct StmtBlock {
    pub stmts: Vec<Stmt>,
}

impl StmtBlock {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_accepts_identifier_variable() {
        let stmt = Stmt::for_each(
            Expr::ident("item"),
            Expr::ident("items"),
            StmtBlock::default(),
        )
        .unwrap();

        match stmt {
            Stmt::ForEach { var, .. } => assert_eq!(var, "item"),
            other => panic!("expected ForEach, got {:?}", other),
        }
    }

    #[test]
    fn test_for_each_rejects_non_identifier_variable() {
        let result = Stmt::for_each(
            Expr::number("42"),
            Expr::ident("items"),
            StmtBlock::default(),
        );
        assert!(result.is_err());

        let result = Stmt::for_each(
            Expr::bin("+", Expr::ident("a"), Expr::ident("b")),
            Expr::ident("items"),
            StmtBlock::default(),
        );
        assert!(result.is_err());
    }
}
