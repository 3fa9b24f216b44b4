use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Options for the C++ backend. Configured via a toml source by the
/// external driver; every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CppBackendOptions {
    /// Header paired with the implementation view, emitted verbatim in
    /// the leading `#include "..."` line.
    pub header_file_name: String,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,
}

impl Default for CppBackendOptions {
    fn default() -> Self {
        Self {
            header_file_name: "main.h".to_string(),
            verbosity_level: LevelFilter::Info,
        }
    }
}

impl CppBackendOptions {
    /// Parse options from toml text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse C++ backend options")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CppBackendOptions::default();
        assert_eq!(options.header_file_name, "main.h");
        assert_eq!(options.verbosity_level, LevelFilter::Info);
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let options =
            CppBackendOptions::from_toml_str("header_file_name = \"calc.h\"").unwrap();
        assert_eq!(options.header_file_name, "calc.h");
        assert_eq!(options.verbosity_level, LevelFilter::Info);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(CppBackendOptions::from_toml_str("no_such_option = 1").is_err());
    }
}
