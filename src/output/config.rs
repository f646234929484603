//! Configuration for JSON output

use serde::Deserialize;

/// Layout of the serialized document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Single line with `", "` and `": "` separators
    #[default]
    Compact,
    /// Indented with two spaces
    Pretty,
    /// No whitespace at all
    Minified,
}

/// Configuration options for JSON output
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub style: OutputStyle,

    /// Whether to end the document with a newline
    pub trailing_newline: bool,
}

impl OutputConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: OutputStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}
