// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Render output fragments.
//!
//! A fragment is an immutable tree of rendered text: literal runs, ordered
//! sequences, separator-joined lists, and indentation regions. Flattening a
//! fragment to final text is a pure operation; indentation is applied lazily
//! at line starts by the writer, so blank lines never carry trailing spaces.

use crate::renderer::CppWriter;

/// One piece of render output.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Literal text, emitted verbatim
    Text(String),
    /// Ordered children, concatenated
    Seq(Vec<Fragment>),
    /// Children joined with a separator
    Join { items: Vec<Fragment>, sep: String },
    /// Child emitted one indentation level deeper
    Indent(Box<Fragment>),
}

impl Fragment {
    /// Literal text fragment.
    pub fn text(text: impl Into<String>) -> Fragment {
        Fragment::Text(text.into())
    }

    /// Concatenation of `items` in order.
    pub fn seq(items: Vec<Fragment>) -> Fragment {
        Fragment::Seq(items)
    }

    /// `items` joined with `sep`.
    pub fn join(items: Vec<Fragment>, sep: impl Into<String>) -> Fragment {
        Fragment::Join {
            items,
            sep: sep.into(),
        }
    }

    /// `inner` shifted one indentation level deeper.
    pub fn indent(inner: Fragment) -> Fragment {
        Fragment::Indent(Box::new(inner))
    }

    /// Flatten to final text.
    pub fn flatten(&self) -> String {
        let mut writer = CppWriter::new();
        self.write_to(&mut writer);
        writer.into_string()
    }

    fn write_to(&self, writer: &mut CppWriter) {
        match self {
            Fragment::Text(text) => writer.write(text),
            Fragment::Seq(items) => {
                for item in items {
                    item.write_to(writer);
                }
            }
            Fragment::Join { items, sep } => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        writer.write(sep);
                    }
                    item.write_to(writer);
                }
            }
            Fragment::Indent(inner) => {
                writer.indent();
                inner.write_to(writer);
                writer.dedent();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_text_is_verbatim() {
        assert_eq!(Fragment::text("int x;").flatten(), "int x;");
    }

    #[test]
    fn test_flatten_join_inserts_separator() {
        let fragment = Fragment::join(
            vec![Fragment::text("a"), Fragment::text("b"), Fragment::text("c")],
            ", ",
        );
        assert_eq!(fragment.flatten(), "a, b, c");
    }

    #[test]
    fn test_flatten_empty_join_is_empty() {
        assert_eq!(Fragment::join(vec![], "\n").flatten(), "");
    }

    #[test]
    fn test_indent_applies_at_line_starts() {
        let fragment = Fragment::seq(vec![
            Fragment::text("{\n"),
            Fragment::indent(Fragment::join(
                vec![Fragment::text("a;"), Fragment::text("b;")],
                "\n",
            )),
            Fragment::text("\n}"),
        ]);
        assert_eq!(fragment.flatten(), "{\n    a;\n    b;\n}");
    }

    #[test]
    fn test_nested_indent_accumulates() {
        let inner = Fragment::seq(vec![
            Fragment::text("{\n"),
            Fragment::indent(Fragment::text("x;")),
            Fragment::text("\n}"),
        ]);
        let fragment = Fragment::seq(vec![
            Fragment::text("{\n"),
            Fragment::indent(inner),
            Fragment::text("\n}"),
        ]);
        assert_eq!(fragment.flatten(), "{\n    {\n        x;\n    }\n}");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let fragment = Fragment::seq(vec![
            Fragment::text("{\n"),
            Fragment::indent(Fragment::text("")),
            Fragment::text("\n}"),
        ]);
        assert_eq!(fragment.flatten(), "{\n\n}");
    }
}
