//! Generation settings, optionally loaded from a TOML file
//!
//! Every key is optional; anything left out keeps its default:
//!
//! ```toml
//! [output]
//! style = "pretty"
//! trailing_newline = true
//!
//! [lint]
//! enabled = true
//! deny_warnings = false
//! max_enumerated_propositions = 16
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::lint::LintConfig;
use crate::output::{OutputConfig, OutputStyle};

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// JSON output configuration
    pub output: OutputConfig,
    /// Self-check configuration
    pub lint: LintConfig,
}

/// TOML structure for deserializing config files
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlConfig {
    output: TomlOutput,
    lint: LintConfig,
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct TomlOutput {
    style: OutputStyle,
    trailing_newline: bool,
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        Ok(GenerateConfig {
            output: OutputConfig::new()
                .with_style(parsed.output.style)
                .with_trailing_newline(parsed.output.trailing_newline),
            lint: parsed.lint,
        })
    }

    /// Set the output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set the lint configuration
    pub fn with_lint(mut self, lint: LintConfig) -> Self {
        self.lint = lint;
        self
    }

    /// Set the output style
    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.output.style = style;
        self
    }

    /// Enable or disable lint checks
    pub fn with_lint_enabled(mut self, enabled: bool) -> Self {
        self.lint.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerateConfig::default();
        assert_eq!(config.output.style, OutputStyle::Compact);
        assert!(!config.output.trailing_newline);
        assert!(!config.lint.enabled);
        assert!(!config.lint.deny_warnings);
        assert_eq!(config.lint.max_enumerated_propositions, 16);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[output]
style = "pretty"
trailing_newline = true

[lint]
enabled = true
deny_warnings = true
max_enumerated_propositions = 8
"#;
        let config = GenerateConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.output.style, OutputStyle::Pretty);
        assert!(config.output.trailing_newline);
        assert!(config.lint.enabled);
        assert!(config.lint.deny_warnings);
        assert_eq!(config.lint.max_enumerated_propositions, 8);
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let config = GenerateConfig::from_str("[lint]\nenabled = true\n").expect("Should parse");
        assert!(config.lint.enabled);
        assert_eq!(config.lint.max_enumerated_propositions, 16);
        assert_eq!(config.output.style, OutputStyle::Compact);
    }

    #[test]
    fn test_empty_config() {
        let config = GenerateConfig::from_str("").expect("Should parse");
        assert_eq!(config.output.style, OutputStyle::Compact);
    }

    #[test]
    fn test_unknown_style_is_error() {
        let result = GenerateConfig::from_str("[output]\nstyle = \"fancy\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_is_error() {
        assert!(GenerateConfig::from_str("[output]\nindent = 4\n").is_err());
    }

    #[test]
    fn test_unknown_lint_key_is_error() {
        let result = GenerateConfig::from_str("[lint]\nmax_enumerated_props = 4\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GenerateConfig::from_file(Path::new("/nonexistent/gossip.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GenerateConfig::new()
            .with_style(OutputStyle::Minified)
            .with_lint_enabled(true);
        assert_eq!(config.output.style, OutputStyle::Minified);
        assert!(config.lint.enabled);
    }
}
