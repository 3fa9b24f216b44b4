// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! C++ renderer - pure translation with minimal logic.
//!
//! This module takes the syrup AST and renders it to C++ text. The
//! renderer is intentionally "dumb" - it pattern matches AST nodes and
//! emits corresponding fragments without semantic analysis. Two views
//! share the expression and statement handlers: the structural view
//! (self-contained translation units) and the implementation view
//! (out-of-class definitions qualified by the enclosing namespace path).

mod cpp_writer;
mod expr;
mod helpers;
mod implementation;
mod naming;
mod source;
mod stmt;

pub use cpp_writer::CppWriter;
pub use expr::{render_alloc, render_expr};
pub use implementation::ImplementationRenderer;
pub use naming::NamespacePath;
pub use source::{render_global, render_root, render_translation_unit};
pub use stmt::{render_stmt, render_stmt_block};
