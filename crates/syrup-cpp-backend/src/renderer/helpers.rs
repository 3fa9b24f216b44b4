// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared rendering policies used by both views.

use super::expr::render_alloc;
use super::stmt::render_stmt_block;
use crate::fragment::Fragment;
use itertools::Itertools;
use syrup_ast::{Alloc, FuncDef, GlobalNode};

/// Signature prefix from attributes: `inline`, then `static`.
pub fn attr_prefix(func: &FuncDef) -> String {
    let mut prefix = String::new();
    if func.has_attr("inline") {
        prefix.push_str("inline ");
    }
    if func.has_attr("static") {
        prefix.push_str("static ");
    }
    prefix
}

/// Signature suffix from attributes.
pub fn attr_suffix(func: &FuncDef) -> String {
    if func.has_attr("const") {
        " const".to_string()
    } else {
        String::new()
    }
}

/// `template <typename T, typename U>` preamble line, for generic
/// functions only.
pub fn template_preamble(generic_params: &[String]) -> Option<String> {
    if generic_params.is_empty() {
        return None;
    }
    let params = generic_params
        .iter()
        .map(|param| format!("typename {}", param))
        .join(", ");
    Some(format!("template <{}>", params))
}

/// Render a function definition under the given display name. The two
/// views differ only in the name they pass (bare vs. qualified).
pub fn render_func_def(func: &FuncDef, display_name: &str) -> Fragment {
    let mut parts = Vec::new();
    if let Some(preamble) = template_preamble(&func.generic_params) {
        parts.push(Fragment::text(format!("{}\n", preamble)));
    }
    let mut signature = attr_prefix(func);
    if let Some(ty) = &func.return_type {
        signature.push_str(ty);
        signature.push(' ');
    }
    signature.push_str(display_name);
    signature.push('(');
    parts.push(Fragment::text(signature));
    parts.push(render_args(&func.args));
    parts.push(Fragment::text(format!("){} {{\n", attr_suffix(func))));
    parts.push(Fragment::indent(render_stmt_block(&func.body)));
    parts.push(Fragment::text("\n}"));
    Fragment::seq(parts)
}

/// Parameter list: `Alloc` nodes comma-joined.
pub fn render_args(args: &[Alloc]) -> Fragment {
    Fragment::join(args.iter().map(render_alloc).collect(), ", ")
}

/// Whether this node kind opens a visual group in block-level output.
fn is_significant(node: &GlobalNode) -> bool {
    matches!(
        node,
        GlobalNode::FuncDef(_)
            | GlobalNode::Class(_)
            | GlobalNode::Enum(_)
            | GlobalNode::Import(_)
            | GlobalNode::Using(_)
            | GlobalNode::Namespace(_)
    )
}

/// Join block entries under the grouped blank-line policy: an entry takes
/// a leading blank line when it or its predecessor is significant, except
/// between two adjacent imports. A missing predecessor counts as
/// non-significant, so a significant entry opening the block still takes
/// its blank. `keep` filters entries out before any grouping decision.
pub fn join_grouped<K, R>(nodes: &[GlobalNode], keep: K, mut render: R) -> Fragment
where
    K: Fn(&GlobalNode) -> bool,
    R: FnMut(&GlobalNode) -> Fragment,
{
    let mut items = Vec::new();
    let mut prev: Option<&GlobalNode> = None;
    for node in nodes.iter().filter(|node| keep(node)) {
        let rendered = render(node);
        let prev_significant = prev.map_or(false, is_significant);
        let consecutive_imports = matches!(prev, Some(GlobalNode::Import(_)))
            && matches!(node, GlobalNode::Import(_));
        let separated = (prev_significant || is_significant(node)) && !consecutive_imports;
        if separated {
            items.push(Fragment::seq(vec![Fragment::text("\n"), rendered]));
        } else {
            items.push(rendered);
        }
        prev = Some(node);
    }
    Fragment::join(items, "\n")
}
