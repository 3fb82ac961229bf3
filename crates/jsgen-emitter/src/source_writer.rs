//! Append-only output buffer with line/column tracking.
//!
//! Every byte the generator produces goes through [`SourceWriter`], so the
//! cursor returned by [`SourceWriter::location`] is always the position the
//! next character will occupy.

use jsgen_common::{LocationTracker, SourceLocation};

use crate::options::GeneratorOptions;

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    tracker: LocationTracker,
    indent_level: u32,
    indent: String,
    line_end: String,
}

impl SourceWriter {
    pub fn new(options: &GeneratorOptions) -> Self {
        Self {
            output: String::with_capacity(1024),
            tracker: LocationTracker::new(),
            indent_level: 0,
            indent: options.indent.clone(),
            line_end: options.line_end.clone(),
        }
    }

    /// Append raw text.
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
        self.tracker.advance(text);
    }

    /// Write the configured line end.
    pub fn write_line(&mut self) {
        self.output.push_str(&self.line_end);
        self.tracker.advance(&self.line_end);
    }

    /// Write the indent string once per current level.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent);
            self.tracker.advance(&self.indent);
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Position of the next character to be written.
    pub fn location(&self) -> SourceLocation {
        self.tracker.current()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
#[path = "../tests/source_writer.rs"]
mod tests;
