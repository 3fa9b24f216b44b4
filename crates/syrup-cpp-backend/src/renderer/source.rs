// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Structural view - self-contained translation units.
//!
//! Every node renders as a complete block of C++ text: full bodies,
//! explicit parenthesization, nested braces.

use super::helpers::render_func_def;
use super::stmt::render_stmt;
use crate::fragment::Fragment;
use itertools::Itertools;
use log::debug;
use syrup_ast::{ClassDef, EnumDef, GlobalBlock, GlobalNode, Import, NamespaceDef, Root};

/// Render a full translation unit.
pub fn render_translation_unit(root: &Root) -> String {
    debug!(
        "rendering structural view ({} top-level nodes)",
        root.block.list.len()
    );
    render_root(root).flatten()
}

/// Top-level items, one blank line between consecutive items.
pub fn render_root(root: &Root) -> Fragment {
    Fragment::join(root.block.list.iter().map(render_global).collect(), "\n\n")
}

/// Render one top-level node.
pub fn render_global(node: &GlobalNode) -> Fragment {
    match node {
        GlobalNode::Import(import) => render_import(import),
        GlobalNode::FuncDef(func) => render_func_def(func, &func.name),
        GlobalNode::Class(class) => render_class(class),
        GlobalNode::Namespace(ns) => render_namespace(ns),
        GlobalNode::Enum(enum_def) => render_enum(enum_def),
        GlobalNode::Using(using) => {
            Fragment::text(using.names.iter().map(|name| format!("using {};", name)).join("\n"))
        }
        GlobalNode::TypeDef(typedef) => {
            Fragment::text(format!("typedef {} {};", typedef.ty, typedef.name))
        }
        GlobalNode::Stmt(stmt) => Fragment::seq(vec![render_stmt(stmt), Fragment::text(";")]),
    }
}

fn render_import(import: &Import) -> Fragment {
    Fragment::text(import.names.iter().map(|name| include_line(name)).join("\n"))
}

/// `#include` line for one imported name. Names carrying their own quotes
/// are user headers and pass through verbatim.
fn include_line(name: &str) -> String {
    if name.starts_with('"') {
        format!("#include {}", name)
    } else {
        format!("#include <{}>", name)
    }
}

fn render_class(class: &ClassDef) -> Fragment {
    let block = match &class.block {
        Some(block) => block,
        None => return Fragment::text(format!("class {};", class.name)),
    };
    Fragment::seq(vec![
        Fragment::text(format!("class {} {{\npublic:\n", class.name)),
        Fragment::indent(render_members(block)),
        Fragment::text("\n};"),
    ])
}

fn render_namespace(ns: &NamespaceDef) -> Fragment {
    Fragment::seq(vec![
        Fragment::text(format!("namespace {} {{\n", ns.name)),
        Fragment::indent(render_members(&ns.block)),
        Fragment::text("\n}"),
    ])
}

/// Block members, one blank line between consecutive members.
fn render_members(block: &GlobalBlock) -> Fragment {
    Fragment::join(block.list.iter().map(render_global).collect(), "\n\n")
}

fn render_enum(enum_def: &EnumDef) -> Fragment {
    Fragment::seq(vec![
        Fragment::text(format!("enum {} {{\n", enum_def.name)),
        Fragment::indent(Fragment::text(enum_def.values.iter().join(",\n"))),
        Fragment::text("\n};"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use syrup_ast::{Alloc, Expr, FuncDef, Stmt, StmtBlock};

    #[test]
    fn test_import_wraps_bare_names_in_angle_brackets() {
        let import = Import::new(vec!["iostream".to_string(), "\"util.h\"".to_string()]);
        assert_eq!(
            render_global(&GlobalNode::Import(import)).flatten(),
            "#include <iostream>\n#include \"util.h\""
        );
    }

    #[test]
    fn test_enum_renders_values_on_own_lines() {
        let enum_def = EnumDef {
            name: "Color".to_string(),
            values: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
        };
        assert_eq!(
            render_global(&GlobalNode::Enum(enum_def)).flatten(),
            "enum Color {\n    Red,\n    Green,\n    Blue\n};"
        );
    }

    #[test]
    fn test_class_without_block_is_forward_declaration() {
        let class = ClassDef {
            name: "Node".to_string(),
            block: None,
        };
        assert_eq!(render_global(&GlobalNode::Class(class)).flatten(), "class Node;");
    }

    #[test]
    fn test_class_members_are_indented() {
        let field = GlobalNode::Stmt(Stmt::Expr(Expr::Alloc(Alloc::single(
            "int", "x", None, true,
        ))));
        let method = GlobalNode::FuncDef(FuncDef::new(
            Some("int".to_string()),
            "get",
            StmtBlock::new(vec![Stmt::Expr(Expr::ident("x"))]),
        ));
        let class = ClassDef {
            name: "Counter".to_string(),
            block: Some(GlobalBlock::new(vec![field, method])),
        };
        assert_eq!(
            render_global(&GlobalNode::Class(class)).flatten(),
            "class Counter {\npublic:\n    int x;\n\n    int get() {\n        x;\n    }\n};"
        );
    }

    #[test]
    fn test_namespace_nests_and_indents() {
        let func = GlobalNode::FuncDef(FuncDef::new(
            Some("void".to_string()),
            "init",
            StmtBlock::default(),
        ));
        let ns = NamespaceDef {
            name: "detail".to_string(),
            block: GlobalBlock::new(vec![func]),
        };
        assert_eq!(
            render_global(&GlobalNode::Namespace(ns)).flatten(),
            "namespace detail {\n    void init() {\n\n    }\n}"
        );
    }

    #[test]
    fn test_global_using_and_typedef_self_terminate() {
        let using = GlobalNode::Using(syrup_ast::GlobalUsing {
            names: vec!["std".to_string()],
        });
        assert_eq!(render_global(&using).flatten(), "using std;");

        let typedef = GlobalNode::TypeDef(syrup_ast::GlobalTypeDef {
            ty: "unsigned int".to_string(),
            name: "uint".to_string(),
        });
        assert_eq!(render_global(&typedef).flatten(), "typedef unsigned int uint;");
    }
}
