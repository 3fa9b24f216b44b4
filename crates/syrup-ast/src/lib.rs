// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Syrup abstract syntax tree
//!
//! This crate provides the pure data model of the sugar surface syntax:
//! expressions, statements, and translation-unit declarations. Nodes are
//! built once by the front end, validated at construction, and immutable
//! thereafter. It does NOT emit target text - that responsibility belongs
//! to backend crates (syrup-cpp-backend, etc.).

mod decl;
mod expr;
mod stmt;

// Translation-unit nodes (from decl.rs)
pub use decl::{
    ClassDef, EnumDef, FuncAttr, FuncDef, GlobalBlock, GlobalNode, GlobalTypeDef, GlobalUsing,
    Import, NamespaceDef, Root,
};

// Expression nodes (from expr.rs)
pub use expr::{Alloc, ConstKind, Expr};

// Statement nodes (from stmt.rs)
pub use stmt::{Stmt, StmtBlock};
