//! Generator configuration.
//!
//! Options can be built in code or read from JSON:
//!
//! ```json
//! { "indent": "\t", "lineEnd": "\r\n" }
//! ```
//!
//! Missing keys fall back to two-space indentation and `\n` line ends.

use std::path::Path;

use anyhow::{Context, Result, bail};

fn default_indent() -> String {
    "  ".to_string()
}

fn default_line_end() -> String {
    "\n".to_string()
}

/// Whitespace settings for generated source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOptions {
    /// Text written once per indentation level.
    #[serde(default = "default_indent")]
    pub indent: String,
    /// Text written at the end of every line.
    #[serde(default = "default_line_end")]
    pub line_end: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            line_end: default_line_end(),
        }
    }
}

impl GeneratorOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_line_end(mut self, line_end: impl Into<String>) -> Self {
        self.line_end = line_end.into();
        self
    }

    /// Parse and validate options from a JSON object.
    pub fn from_json(source: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(source).context("failed to parse generator options JSON")?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read generator options: {}", path.display()))?;
        Self::from_json(&source)
            .with_context(|| format!("invalid generator options: {}", path.display()))
    }

    /// Reject settings that would produce invalid or misleading output.
    ///
    /// Indentation may only contain spaces and tabs; line ends must be `\n`
    /// or `\r\n` so line numbers in reported ranges stay meaningful.
    pub fn validate(&self) -> Result<()> {
        if let Some(ch) = self.indent.chars().find(|ch| !matches!(ch, ' ' | '\t')) {
            bail!(
                "unsupported character {:?} in indent; only spaces and tabs are allowed",
                ch
            );
        }
        if !matches!(self.line_end.as_str(), "\n" | "\r\n") {
            bail!(
                "unsupported lineEnd {:?}; expected \"\\n\" or \"\\r\\n\"",
                self.line_end
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/options.rs"]
mod tests;
