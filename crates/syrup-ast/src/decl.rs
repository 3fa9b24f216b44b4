// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Translation-unit level nodes.

use crate::expr::Alloc;
use crate::stmt::{Stmt, StmtBlock};

/// A full translation unit as handed over by the front end.
#[derive(Debug, Clone)]
pub struct Root {
    pub block: GlobalBlock,
}

impl Root {
    pub fn new(block: GlobalBlock) -> Self {
        Self { block }
    }
}

/// Ordered list of top-level nodes.
#[derive(Debug, Clone, Default)]
pub struct GlobalBlock {
    pub list: Vec<GlobalNode>,
}

impl GlobalBlock {
    pub fn new(list: Vec<GlobalNode>) -> Self {
        Self { list }
    }
}

/// Top-level node.
#[derive(Debug, Clone)]
pub enum GlobalNode {
    /// `#include` group
    Import(Import),
    /// Function definition
    FuncDef(FuncDef),
    /// Class definition
    Class(ClassDef),
    /// Namespace definition
    Namespace(NamespaceDef),
    /// Enumeration
    Enum(EnumDef),
    /// File-scope using directive
    Using(GlobalUsing),
    /// File-scope type alias
    TypeDef(GlobalTypeDef),
    /// File-scope statement (e.g. a variable definition)
    Stmt(Stmt),
}

/// Import group. Names carrying their own quotes are user headers;
/// bare names are system headers.
#[derive(Debug, Clone)]
pub struct Import {
    pub names: Vec<String>,
}

impl Import {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

/// Named attribute attached to a function definition, with optional
/// arguments.
#[derive(Debug, Clone)]
pub struct FuncAttr {
    pub name: String,
    pub args: Vec<String>,
}

impl FuncAttr {
    /// Argument-less attribute.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// Function definition.
#[derive(Debug, Clone)]
pub struct FuncDef {
    /// Return type; `None` for constructor-like or void-by-omission forms
    pub return_type: Option<String>,
    pub name: String,
    /// Parameters, each an [`Alloc`] without initializer
    pub args: Vec<Alloc>,
    /// Generic parameter names; non-empty means every view emits a
    /// template preamble for this function
    pub generic_params: Vec<String>,
    pub attributes: Vec<FuncAttr>,
    pub body: StmtBlock,
}

impl FuncDef {
    pub fn new(return_type: Option<String>, name: impl Into<String>, body: StmtBlock) -> Self {
        Self {
            return_type,
            name: name.into(),
            args: Vec::new(),
            generic_params: Vec::new(),
            attributes: Vec::new(),
            body,
        }
    }

    /// Whether an attribute with this name is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|attr| attr.name == name)
    }
}

/// Class definition; `block` is `None` for a bare forward declaration.
#[derive(Debug, Clone)]
pub struct ClassDef {
    pub name: String,
    pub block: Option<GlobalBlock>,
}

/// Namespace definition.
#[derive(Debug, Clone)]
pub struct NamespaceDef {
    pub name: String,
    pub block: GlobalBlock,
}

/// Enumeration: name plus ordered enumerator names.
#[derive(Debug, Clone)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}

/// File-scope using directive.
#[derive(Debug, Clone)]
pub struct GlobalUsing {
    pub names: Vec<String>,
}

/// File-scope type alias.
#[derive(Debug, Clone)]
pub struct GlobalTypeDef {
    pub ty: String,
    pub name: String,
}
