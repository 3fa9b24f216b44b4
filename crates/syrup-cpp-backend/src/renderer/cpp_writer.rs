// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Simple line-based writer for generating C++ code with proper indentation.

/// Indentation unit of the emitted C++.
const INDENT_UNIT: &str = "    ";

/// Writer context for generating C++ code.
/// Tracks indentation and handles line-based output. Indentation is
/// applied lazily when the first character of a line is written, so
/// empty lines stay empty.
pub struct CppWriter {
    out: String,
    indent: usize,
    at_line_start: bool,
}

impl CppWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Write a string, handling indentation at line starts.
    pub fn write(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' {
                self.out.push('\n');
                self.at_line_start = true;
            } else {
                if self.at_line_start {
                    for _ in 0..self.indent {
                        self.out.push_str(INDENT_UNIT);
                    }
                }
                self.at_line_start = false;
                self.out.push(c);
            }
        }
    }

    /// Increase indentation for subsequent lines.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation for subsequent lines.
    pub fn dedent(&mut self) {
        if self.indent > 0 {
            self.indent -= 1;
        }
    }

    /// Finished output (consumes self).
    pub fn into_string(self) -> String {
        self.out
    }
}
