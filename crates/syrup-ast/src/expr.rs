// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Expression nodes of the sugar surface syntax.

use crate::stmt::Stmt;
use anyhow::{ensure, Result};

/// Front-end classification of a constant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstKind {
    /// Bare identifier
    Ident,
    /// String literal, stored with its quotes
    String,
    /// Numeric literal
    Number,
}

/// Expression node. Expressions are usable anywhere a statement is
/// (see [`Stmt::Expr`]).
#[derive(Debug, Clone)]
pub enum Expr {
    /// Explicitly bracketed expression
    Bracket(Box<Expr>),

    /// Assignment: `left = right`
    Assign { left: Box<Expr>, right: Box<Expr> },

    /// Variable allocation/declaration
    Alloc(Alloc),

    /// Binary operation, rendered fully parenthesized
    Bin {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Two-argument function written infix-style in the surface syntax
    Infix {
        func: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Prefix operator
    Prefix { op: String, expr: Box<Expr> },

    /// Suffix operator
    Suffix { op: String, expr: Box<Expr> },

    /// Subscripting: `base[i][j]...`
    Dict { base: Box<Expr>, indices: Vec<Expr> },

    /// Call, with optional explicit generic arguments
    Call {
        callee: Box<Expr>,
        generic_args: Vec<String>,
        args: Vec<Expr>,
    },

    /// Lambda literal; `by_ref` selects the capture default
    Lambda {
        body: Box<Expr>,
        params: Vec<Alloc>,
        by_ref: bool,
    },

    /// Member access; `op` is `.` or `->`
    Access {
        base: Box<Expr>,
        op: String,
        name: String,
    },

    /// Heap allocation of a single object: `new T(args)`
    NewType { elem_type: String, args: Vec<Expr> },

    /// Heap allocation of an array, one expression per dimension
    NewArray { elem_type: String, dims: Vec<Expr> },

    /// Conditional expression
    Cond {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },

    /// Tuple construction
    Tuple(Vec<Expr>),

    /// Cast to a named type
    Cast { target_type: String, expr: Box<Expr> },

    /// Expression-valued statement block
    Block(Vec<Stmt>),

    /// Comma-joined expression list
    ExprList(Vec<Expr>),

    /// Constant token, rendered verbatim
    Const { text: String, kind: ConstKind },
}

impl Expr {
    /// Identifier constant.
    pub fn ident(text: impl Into<String>) -> Expr {
        Expr::Const {
            text: text.into(),
            kind: ConstKind::Ident,
        }
    }

    /// Numeric constant.
    pub fn number(text: impl Into<String>) -> Expr {
        Expr::Const {
            text: text.into(),
            kind: ConstKind::Number,
        }
    }

    /// String constant; `text` carries its own quotes.
    pub fn string(text: impl Into<String>) -> Expr {
        Expr::Const {
            text: text.into(),
            kind: ConstKind::String,
        }
    }

    /// Assignment expression.
    pub fn assign(left: Expr, right: Expr) -> Expr {
        Expr::Assign {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Binary operation.
    pub fn bin(op: impl Into<String>, left: Expr, right: Expr) -> Expr {
        Expr::Bin {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The identifier text if this is an identifier constant.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Expr::Const {
                text,
                kind: ConstKind::Ident,
            } => Some(text),
            _ => None,
        }
    }
}

/// One allocation: a target type, one or more names, optional
/// initializers parallel to the names.
///
/// `uses_equals` selects `T name = init` over the direct-initialization
/// form `T name(init)`.
#[derive(Debug, Clone)]
pub struct Alloc {
    pub ty: String,
    pub names: Vec<String>,
    pub inits: Vec<Expr>,
    pub uses_equals: bool,
}

impl Alloc {
    /// Single-declaration form: one name, optional initializer.
    pub fn single(
        ty: impl Into<String>,
        name: impl Into<String>,
        init: Option<Expr>,
        uses_equals: bool,
    ) -> Alloc {
        Alloc {
            ty: ty.into(),
            names: vec![name.into()],
            inits: init.into_iter().collect(),
            uses_equals,
        }
    }

    /// Parallel-list form. Requires at least one name, and either no
    /// initializers or exactly one per name.
    pub fn parallel(
        ty: impl Into<String>,
        names: Vec<String>,
        inits: Vec<Expr>,
        uses_equals: bool,
    ) -> Result<Alloc> {
        ensure!(!names.is_empty(), "allocation must declare at least one name");
        ensure!(
            inits.is_empty() || inits.len() == names.len(),
            "allocation declares {} names but {} initializers",
            names.len(),
            inits.len()
        );
        Ok(Alloc {
            ty: ty.into(),
            names,
            inits,
            uses_equals,
        })
    }

    /// Per-name (name, initializer) pairs, in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, Option<&Expr>)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.inits.get(i)))
    }
}
