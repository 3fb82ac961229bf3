use std::fmt::Write;

use jsgen_ast::Node;
use jsgen_ast::nodes::{TaggedTemplateExpression, TemplateElement};

use super::Generator;
use super::parenthesize::tag_needs_parentheses;

/// JavaScript `Number.prototype.toString()` rendering of `value`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Unlike `Number.prototype.toString`, a literal keeps the sign of zero
    if value == 0.0 && value.is_sign_negative() {
        return "-0".to_string();
    }
    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(value).to_string()
}

/// ASCII identifier check used to choose between `a.b` and `a["b"]`.
pub fn is_identifier_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == b'_' || first == b'$')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}

/// Double-quoted JavaScript string literal for `value`.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{8}' => out.push_str("\\b"),
            '\r' => out.push_str("\\r"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            // Remaining C0 controls, DEL, U+2028 and U+2029
            c if (c as u32) < 0x20 || c == '\x7F' || c == '\u{2028}' || c == '\u{2029}' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape the raw text of a template chunk.
fn escape_template_chunk(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\u{8}' => out.push_str("\\b"),
            '\r' => out.push_str("\\r"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out
}

impl Generator {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_number(&mut self, value: f64) {
        self.write_text(&format_number(value));
    }

    pub(super) fn emit_string(&mut self, value: &str) {
        self.write_text(&quote_string(value));
    }

    pub(super) fn emit_template_element(&mut self, value: &str) {
        self.write_text(&escape_template_chunk(value));
    }

    /// Backquoted template; chunks are written escaped, anything else as a
    /// `${...}` substitution.
    pub(super) fn emit_template_literal(&mut self, quasis: Vec<Node>) {
        self.write_text("`");
        for mut quasi in quasis {
            quasi.force();
            if quasi.is::<TemplateElement>() {
                self.emit(quasi);
            } else {
                self.write_text("${");
                self.emit(quasi);
                self.write_text("}");
            }
        }
        self.write_text("`");
    }

    pub(super) fn emit_tagged_template(&mut self, expr: TaggedTemplateExpression) {
        let TaggedTemplateExpression { mut tag, quasi } = expr;
        tag.force();
        let parenthesize = tag_needs_parentheses(&tag);
        self.emit_wrapped(tag, parenthesize);
        self.emit(quasi);
    }
}

#[cfg(test)]
#[path = "../../tests/literals.rs"]
mod tests;
