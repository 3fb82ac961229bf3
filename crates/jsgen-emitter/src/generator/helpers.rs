use jsgen_ast::Node;
use jsgen_ast::nodes::MemberIdentifier;

use super::Generator;
use super::literals::is_identifier_name;

impl Generator {
    // =========================================================================
    // Lists
    // =========================================================================

    /// `(a, b, c)`: sequences, call arguments and parameter lists.
    pub(super) fn emit_comma_list(&mut self, nodes: Vec<Node>) {
        self.write_text("(");
        self.emit_comma_separated(nodes);
        self.write_text(")");
    }

    pub(super) fn emit_comma_separated(&mut self, nodes: Vec<Node>) {
        let mut first = true;
        for node in nodes {
            if !first {
                self.write_text(", ");
            }
            first = false;
            self.emit(node);
        }
    }

    /// Array literal or pattern. A hole leaves an empty slot, so a trailing
    /// hole still prints its separator: `[a, , ]` has length two.
    pub(super) fn emit_array(&mut self, elements: Vec<Option<Node>>) {
        self.write_text("[");
        let last = elements.len().saturating_sub(1);
        for (i, element) in elements.into_iter().enumerate() {
            match element {
                Some(node) => {
                    self.emit(node);
                    if i < last {
                        self.write_text(", ");
                    }
                }
                None => self.write_text(", "),
            }
        }
        self.write_text("]");
    }

    /// Object literal or pattern: one property per line, `{}` when empty.
    pub(super) fn emit_object(&mut self, properties: Vec<Node>) {
        self.write_text("{");
        if !properties.is_empty() {
            self.write_line();
            self.increase_indent();
            let last = properties.len() - 1;
            for (i, property) in properties.into_iter().enumerate() {
                self.write_indent();
                self.emit(property);
                if i < last {
                    self.write_text(",");
                }
                self.write_line();
            }
            self.decrease_indent();
            self.write_indent();
        }
        self.write_text("}");
    }

    /// `{ ... }` with each entry on its own indented line.
    pub(super) fn emit_block(&mut self, body: Vec<Node>) {
        self.write_text("{");
        if !body.is_empty() {
            self.write_line();
            self.increase_indent();
            for statement in body {
                self.emit_statement(statement);
            }
            self.decrease_indent();
            self.write_indent();
        }
        self.write_text("}");
    }

    /// Indent, node, line end.
    pub(super) fn emit_statement(&mut self, node: Node) {
        self.write_indent();
        self.emit(node);
        self.write_line();
    }

    // =========================================================================
    // Member Keys
    // =========================================================================

    /// Member access suffix: `.name`, `["not an identifier"]` or `[expr]`.
    pub(super) fn emit_member_property(&mut self, property: Node) {
        self.emit_key_slot(property, true);
    }

    /// Property or method key: `name`, `"not an identifier"` or `[expr]`.
    pub(super) fn emit_key(&mut self, key: Node) {
        self.emit_key_slot(key, false);
    }

    fn emit_key_slot(&mut self, mut key: Node, with_dot: bool) {
        key.force();
        match key {
            Node::MemberIdentifier(identifier) => self.emit_member_name(&identifier.name, with_dot),
            Node::Tracked(tracked) if tracked.node().is::<MemberIdentifier>() => {
                let (inner, on_written) = tracked.into_parts();
                let range = self.with_range(|this| this.emit_key_slot(inner, with_dot));
                on_written(range);
            }
            computed => {
                self.write_text("[");
                self.emit(computed);
                self.write_text("]");
            }
        }
    }

    pub(super) fn emit_member_name(&mut self, name: &str, with_dot: bool) {
        if is_identifier_name(name) {
            if with_dot {
                self.write_text(".");
            }
            self.write_text(name);
        } else if with_dot {
            self.write_text("[");
            self.emit_string(name);
            self.write_text("]");
        } else {
            self.emit_string(name);
        }
    }
}
