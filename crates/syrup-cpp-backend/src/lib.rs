//! C++ text backend for the syrup AST.
//!
//! Two independent views render the same immutable tree: the structural
//! view emits self-contained translation units, and the implementation
//! view emits out-of-class, namespace-qualified definitions paired with
//! an externally generated header.

pub mod fragment;
pub mod options;
pub mod renderer;

pub use fragment::Fragment;
pub use options::CppBackendOptions;
pub use renderer::{render_translation_unit, ImplementationRenderer};
