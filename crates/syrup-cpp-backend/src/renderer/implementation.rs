// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Implementation view - out-of-class, namespace-qualified definitions.
//!
//! Emits the body of an implementation file paired with an externally
//! generated header. Declaration-only nodes (imports, usings, type
//! aliases, enums) belong to the header view and are filtered out here;
//! nesting into classes and namespaces becomes `::` qualification on the
//! emitted names instead of brace nesting.

use super::helpers::{join_grouped, render_func_def};
use super::naming::NamespacePath;
use super::source;
use crate::fragment::Fragment;
use crate::options::CppBackendOptions;
use log::debug;
use syrup_ast::{ClassDef, GlobalBlock, GlobalNode, Root};

/// Renderer for the implementation view of a translation unit.
pub struct ImplementationRenderer {
    options: CppBackendOptions,
}

impl ImplementationRenderer {
    pub fn new(options: CppBackendOptions) -> Self {
        Self { options }
    }

    /// Render the implementation-file body for a unit.
    pub fn render_translation_unit(&self, root: &Root) -> String {
        debug!(
            "rendering implementation view against header {}",
            self.options.header_file_name
        );
        self.render_root(root).flatten()
    }

    fn render_root(&self, root: &Root) -> Fragment {
        Fragment::seq(vec![
            Fragment::text(format!(
                "#include \"{}\"\n\n",
                self.options.header_file_name
            )),
            self.render_block(&root.block, &NamespacePath::root()),
        ])
    }

    fn render_block(&self, block: &GlobalBlock, path: &NamespacePath) -> Fragment {
        join_grouped(&block.list, keep_in_view, |node| {
            self.render_global(node, path)
        })
    }

    fn render_global(&self, node: &GlobalNode, path: &NamespacePath) -> Fragment {
        match node {
            GlobalNode::FuncDef(func) => render_func_def(func, &path.qualify(&func.name)),
            GlobalNode::Class(class) => self.render_class(class, path),
            GlobalNode::Namespace(ns) => self.render_block(&ns.block, &path.child(&ns.name)),
            // remaining kinds keep their structural rendering
            other => source::render_global(other),
        }
    }

    /// Out-of-line definitions for the class's functions. Fields and
    /// nested types are not part of this view and are skipped.
    fn render_class(&self, class: &ClassDef, path: &NamespacePath) -> Fragment {
        let path = path.child(&class.name);
        let funcs = class
            .block
            .iter()
            .flat_map(|block| block.list.iter())
            .filter_map(|node| match node {
                GlobalNode::FuncDef(func) => {
                    Some(render_func_def(func, &path.qualify(&func.name)))
                }
                _ => None,
            })
            .collect();
        Fragment::join(funcs, "\n\n")
    }
}

/// Nodes surfaced by this view; the rest belong to the header view.
fn keep_in_view(node: &GlobalNode) -> bool {
    !matches!(
        node,
        GlobalNode::Import(_)
            | GlobalNode::Using(_)
            | GlobalNode::TypeDef(_)
            | GlobalNode::Enum(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use syrup_ast::{Expr, FuncDef, Import, NamespaceDef, Stmt, StmtBlock};

    fn renderer() -> ImplementationRenderer {
        ImplementationRenderer::new(CppBackendOptions::default())
    }

    fn returning(expr: Expr) -> StmtBlock {
        StmtBlock::new(vec![Stmt::Expr(expr)])
    }

    #[test]
    fn test_root_starts_with_quoted_header_include() {
        let root = Root::new(GlobalBlock::new(vec![GlobalNode::FuncDef(FuncDef::new(
            Some("int".to_string()),
            "f",
            StmtBlock::default(),
        ))]));
        let out = renderer().render_translation_unit(&root);
        assert_eq!(out, "#include \"main.h\"\n\n\nint f() {\n\n}");
    }

    #[test]
    fn test_header_only_nodes_are_filtered_out() {
        let root = Root::new(GlobalBlock::new(vec![
            GlobalNode::Import(Import::new(vec!["iostream".to_string()])),
            GlobalNode::FuncDef(FuncDef::new(
                Some("int".to_string()),
                "f",
                StmtBlock::default(),
            )),
        ]));
        let out = renderer().render_translation_unit(&root);
        assert!(!out.contains("#include <iostream>"));
        assert!(out.contains("int f()"));
    }

    #[test]
    fn test_class_functions_are_qualified() {
        let method = FuncDef::new(
            Some("int".to_string()),
            "get",
            returning(Expr::ident("x")),
        );
        let class = ClassDef {
            name: "Counter".to_string(),
            block: Some(GlobalBlock::new(vec![GlobalNode::FuncDef(method)])),
        };
        let root = Root::new(GlobalBlock::new(vec![GlobalNode::Class(class)]));
        let out = renderer().render_translation_unit(&root);
        assert_eq!(
            out,
            "#include \"main.h\"\n\n\nint Counter::get() {\n    x;\n}"
        );
    }

    #[test]
    fn test_class_fields_are_skipped() {
        let field = GlobalNode::Stmt(Stmt::Expr(Expr::ident("x")));
        let class = ClassDef {
            name: "Counter".to_string(),
            block: Some(GlobalBlock::new(vec![field])),
        };
        let root = Root::new(GlobalBlock::new(vec![GlobalNode::Class(class)]));
        let out = renderer().render_translation_unit(&root);
        assert_eq!(out, "#include \"main.h\"\n\n\n");
    }

    #[test]
    fn test_namespace_nesting_becomes_qualification() {
        let method = FuncDef::new(Some("int".to_string()), "f", StmtBlock::default());
        let class = ClassDef {
            name: "A".to_string(),
            block: Some(GlobalBlock::new(vec![GlobalNode::FuncDef(method)])),
        };
        let ns = NamespaceDef {
            name: "B".to_string(),
            block: GlobalBlock::new(vec![GlobalNode::Class(class)]),
        };
        let root = Root::new(GlobalBlock::new(vec![GlobalNode::Namespace(ns)]));
        let out = renderer().render_translation_unit(&root);
        assert_eq!(out, "#include \"main.h\"\n\n\n\nint B::A::f() {\n\n}");
    }
}
