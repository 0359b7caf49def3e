//! TOML configuration file support.
//!
//! Instead of repeating the block prefix on every invocation, users can put
//! it in a config file:
//!
//! ```toml
//! # isa-descriptors.toml
//! [block]
//! prefix = "Study Design"
//! start_line = 0
//!
//! [output]
//! pretty = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for isa-descriptors.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Block location settings.
    #[serde(default)]
    pub block: BlockConfig,

    /// Output formatting settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where to find the design descriptor block.
#[derive(Debug, Default, Deserialize)]
pub struct BlockConfig {
    /// Row label prefix, joined to each canonical label with a space.
    pub prefix: Option<String>,

    /// Number of rows to skip before the block starts.
    pub start_line: Option<usize>,
}

/// Output formatting.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// Block settings after CLI flags have been applied over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSettings {
    /// Row label prefix.
    pub prefix: Option<String>,

    /// Number of rows to skip before the block starts.
    pub start_line: usize,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply CLI overrides on top of the file settings.
    pub fn resolve(&self, prefix: Option<String>, start_line: Option<usize>) -> BlockSettings {
        BlockSettings {
            prefix: prefix.or_else(|| self.block.prefix.clone()),
            start_line: start_line.or(self.block.start_line).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [block]
            prefix = "Study Design"
            start_line = 12

            [output]
            pretty = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.block.prefix.as_deref(), Some("Study Design"));
        assert_eq!(config.block.start_line, Some(12));
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [block]
            prefix = "Study Design"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.block.start_line, None);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.block.prefix, None);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::from_str("[block]\nprefix = \"Study Design\"\nstart_line = 3").unwrap();

        let settings = config.resolve(Some("Assay Design".to_string()), None);
        assert_eq!(settings.prefix.as_deref(), Some("Assay Design"));
        assert_eq!(settings.start_line, 3);

        let settings = config.resolve(None, Some(7));
        assert_eq!(settings.prefix.as_deref(), Some("Study Design"));
        assert_eq!(settings.start_line, 7);
    }
}
