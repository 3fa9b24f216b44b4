// Copyright (c) Syrup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Namespace qualification for out-of-line definitions.

use itertools::Itertools;

/// The enclosing class/namespace names active at a point of traversal.
///
/// The path is threaded down the recursion by parameter: descending into a
/// scope passes `path.child(name)` while the caller keeps its own value, so
/// unwinding on return is automatic.
#[derive(Debug, Clone, Default)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// Empty path (file scope).
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended with one enclosing scope.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Qualify `name` with the current path: `a::b::name`. An empty path
    /// leaves the name bare.
    pub fn qualify(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_string()
        } else {
            format!("{}::{}", self.segments.iter().join("::"), name)
        }
    }
}
