//! Optional `compkit.toml` configuration.
//!
//! Every field is optional: the file only supplies defaults that sit
//! between command-line flags and the built-in values.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CompkitError, CompkitResult};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "compkit.toml";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompkitConfig {
    pub scaffold: ScaffoldSection,
    pub style: StyleSection,
    pub types: TypesSection,
}

/// `[scaffold]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldSection {
    /// Base directory component folders are created in.
    pub components_dir: Option<PathBuf>,
    /// Template variant used when `--type` is omitted.
    pub template: Option<String>,
    pub styled: Option<bool>,
    pub typed: Option<bool>,
}

/// `[style]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleSection {
    /// Directory validated by `dir` and `watch` when no path is given.
    pub directory: Option<PathBuf>,
    pub watch_interval_ms: Option<u64>,
}

/// `[types]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TypesSection {
    /// Directory default output files are placed in.
    pub output_dir: Option<PathBuf>,
}

impl CompkitConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> CompkitResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> CompkitResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CompkitError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the configuration for an invocation.
    ///
    /// An explicit path must exist. Otherwise `compkit.toml` in `dir` is
    /// used when present, and an empty configuration when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CompkitResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading discovered configuration");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> CompkitResult<()> {
        if self.style.watch_interval_ms == Some(0) {
            return Err(CompkitError::config(
                "style.watch_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = CompkitConfig::from_toml_str("").unwrap();
        assert_eq!(config, CompkitConfig::default());
    }

    #[test]
    fn test_full_config() {
        let text = r#"
[scaffold]
components_dir = "src/components"
template = "form"
styled = false
typed = true

[style]
directory = "src"
watch_interval_ms = 250

[types]
output_dir = "src/types"
"#;
        let config = CompkitConfig::from_toml_str(text).unwrap();
        assert_eq!(config.scaffold.components_dir, Some(PathBuf::from("src/components")));
        assert_eq!(config.scaffold.template.as_deref(), Some("form"));
        assert_eq!(config.scaffold.styled, Some(false));
        assert_eq!(config.style.watch_interval_ms, Some(250));
        assert_eq!(config.types.output_dir, Some(PathBuf::from("src/types")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = CompkitConfig::from_toml_str("[scaffold]\ncolour = true\n");
        assert!(matches!(result, Err(CompkitError::Toml(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = CompkitConfig::from_toml_str("[style]\nwatch_interval_ms = 0\n");
        assert!(matches!(result, Err(CompkitError::Config(_))));
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CompkitConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config, CompkitConfig::default());
    }

    #[test]
    fn test_discover_finds_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[scaffold]\ntyped = false\n").unwrap();
        let config = CompkitConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.scaffold.typed, Some(false));
    }

    #[test]
    fn test_discover_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = CompkitConfig::discover(Some(&missing), dir.path());
        assert!(matches!(result, Err(CompkitError::Config(_))));
    }
}
