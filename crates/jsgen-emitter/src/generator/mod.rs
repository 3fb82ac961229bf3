//! The unparser.
//!
//! [`Generator`] lowers a [`Node`] tree into JavaScript source, inserting only
//! the parentheses that operator precedence and associativity require, and
//! reports the line/column range each top-level write occupied.
//!
//! Emission is split by node family:
//! - `statements`: statements, declarations and blocks
//! - `expressions`: operators, calls, members, functions, classes
//! - `literals`: literals, identifiers, templates and string quoting
//! - `helpers`: comma lists, arrays, objects and member keys
//! - `parenthesize`: the wrapping predicates

mod expressions;
mod helpers;
mod literals;
pub mod parenthesize;
mod statements;

use jsgen_ast::Node;
use jsgen_common::{SourceLocation, SourceRange};

use crate::options::GeneratorOptions;
use crate::source_writer::SourceWriter;

pub use literals::{format_number, is_identifier_name, quote_string};

/// Writes node trees into a single output buffer.
#[derive(Debug)]
pub struct Generator {
    writer: SourceWriter,
    options: GeneratorOptions,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            writer: SourceWriter::new(&options),
            options,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Write `node` as one line at the current indentation: indent, node
    /// text, line end.
    ///
    /// Returns the range of the node text only; the indent and the trailing
    /// line end are outside it.
    pub fn write(&mut self, node: impl Into<Node>) -> SourceRange {
        self.write_node(node.into())
    }

    #[tracing::instrument(level = "trace", skip(self, node), fields(kind = ?node.kind()))]
    fn write_node(&mut self, node: Node) -> SourceRange {
        self.writer.write_indent();
        let range = self.with_range(|this| this.emit(node));
        self.writer.write_line();
        tracing::trace!(%range, "wrote node");
        range
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        self.writer.output()
    }

    pub fn into_output(self) -> String {
        self.writer.into_output()
    }

    /// Position of the next character to be written.
    pub fn location(&self) -> SourceLocation {
        self.writer.location()
    }

    /// Render a single node with default options, without the trailing line
    /// end.
    pub fn emit_to_string(node: impl Into<Node>) -> String {
        let mut generator = Self::new();
        generator.emit(node.into());
        generator.into_output()
    }

    /// Run `f` and report the range of whatever it wrote.
    fn with_range(&mut self, f: impl FnOnce(&mut Self)) -> SourceRange {
        let begin = self.writer.location();
        f(self);
        SourceRange::new(begin, self.writer.location())
    }

    /// Emit any node. Deferred nodes are built first; tracked nodes report
    /// their range to their callback after being written.
    pub(crate) fn emit(&mut self, mut node: Node) {
        node.force();
        match node {
            // Structural
            Node::Program(program) => self.emit_program(*program),
            Node::Super(_) => self.write_text("super"),
            Node::MemberIdentifier(identifier) => self.emit_member_name(&identifier.name, false),
            Node::Property(property) => self.emit_property(*property),
            Node::SwitchCase(case) => self.emit_switch_case(*case),
            Node::CatchClause(clause) => self.emit_catch_clause(*clause),
            Node::VariableDeclarator(declarator) => self.emit_variable_declarator(*declarator),
            Node::TemplateElement(element) => self.emit_template_element(&element.value),
            Node::MethodDefinition(method) => self.emit_method_definition(*method),

            // Statements
            Node::EmptyStatement(_) => self.write_text(";"),
            Node::BlockStatement(block) => self.emit_block(block.body),
            Node::ExpressionStatement(stmt) => self.emit_expression_statement(*stmt),
            Node::IfStatement(stmt) => self.emit_if_statement(*stmt),
            Node::LabeledStatement(stmt) => self.emit_labeled_statement(*stmt),
            Node::BreakStatement(stmt) => self.emit_control_transfer("break", stmt.label),
            Node::ContinueStatement(stmt) => self.emit_control_transfer("continue", stmt.label),
            Node::WithStatement(stmt) => self.emit_with_statement(*stmt),
            Node::SwitchStatement(stmt) => self.emit_switch_statement(*stmt),
            Node::ReturnStatement(stmt) => self.emit_return_statement(*stmt),
            Node::ThrowStatement(stmt) => self.emit_throw_statement(*stmt),
            Node::TryStatement(stmt) => self.emit_try_statement(*stmt),
            Node::WhileStatement(stmt) => self.emit_while_statement(*stmt),
            Node::DoWhileStatement(stmt) => self.emit_do_while_statement(*stmt),
            Node::ForStatement(stmt) => self.emit_for_statement(*stmt),
            Node::ForInStatement(stmt) => {
                let stmt = *stmt;
                self.emit_for_iteration("in", stmt.left, stmt.right, stmt.body, stmt.is_await);
            }
            Node::ForOfStatement(stmt) => {
                let stmt = *stmt;
                self.emit_for_iteration("of", stmt.left, stmt.right, stmt.body, stmt.is_await);
            }
            Node::DebuggerStatement(_) => self.write_text("debugger;"),
            Node::VariableDeclaration(decl) => {
                self.emit_variable_declaration(*decl);
                self.write_text(";");
            }
            Node::FunctionDeclaration(decl) => self.emit_function_declaration(*decl),
            Node::ClassDeclaration(decl) => {
                let decl = *decl;
                self.emit_class(Some(decl.id), decl.super_class, decl.body);
            }

            // Expressions
            Node::ThisExpression(_) => self.write_text("this"),
            Node::ArrayExpression(array) => self.emit_array(array.elements),
            Node::ObjectExpression(object) => self.emit_object(object.properties),
            Node::FunctionExpression(func) => self.emit_function_expression(*func),
            Node::ArrowFunctionExpression(arrow) => self.emit_arrow_function(*arrow),
            Node::ClassExpression(class) => {
                let class = *class;
                self.emit_class(class.id, class.super_class, class.body);
            }
            Node::SequenceExpression(sequence) => self.emit_comma_list(sequence.expressions),
            Node::UnaryExpression(unary) => self.emit_unary(*unary),
            Node::BinaryExpression(binary) => self.emit_binary(*binary),
            Node::AssignmentExpression(assignment) => self.emit_assignment(*assignment),
            Node::UpdateExpression(update) => self.emit_update(*update),
            Node::LogicalExpression(logical) => self.emit_logical(*logical),
            Node::ConditionalExpression(conditional) => self.emit_conditional(*conditional),
            Node::CallExpression(call) => self.emit_call(*call),
            Node::NewExpression(new) => self.emit_new(*new),
            Node::MemberExpression(member) => self.emit_member(*member),
            Node::YieldExpression(expr) => self.emit_yield(*expr),
            Node::AwaitExpression(expr) => self.emit_await(*expr),
            Node::TemplateLiteral(template) => self.emit_template_literal(template.quasis),
            Node::TaggedTemplateExpression(expr) => self.emit_tagged_template(*expr),
            Node::MetaProperty(meta) => {
                self.write_text(&meta.meta);
                self.write_text(".");
                self.write_text(&meta.property);
            }

            // Patterns
            Node::Identifier(identifier) => self.write_text(&identifier.name),
            Node::ArrayPattern(pattern) => self.emit_array(pattern.elements),
            Node::ObjectPattern(pattern) => self.emit_object(pattern.properties),
            Node::AssignmentPattern(pattern) => {
                let pattern = *pattern;
                self.emit(pattern.left);
                self.write_text(" = ");
                self.emit(pattern.right);
            }
            Node::RestElement(rest) => {
                self.write_text("...");
                self.emit(rest.argument);
            }
            Node::SpreadElement(spread) => {
                self.write_text("...");
                self.emit(spread.argument);
            }

            // Literals
            Node::NullLiteral(_) => self.write_text("null"),
            Node::BoolLiteral(literal) => self.write_text(if literal.value { "true" } else { "false" }),
            Node::NumberLiteral(literal) => self.emit_number(literal.value),
            Node::StringLiteral(literal) => self.emit_string(&literal.value),
            Node::RegExpLiteral(literal) => {
                self.write_text("/");
                self.write_text(&literal.pattern);
                self.write_text("/");
                self.write_text(&literal.flags);
            }
            Node::RawLiteral(literal) => self.write_text(&literal.raw),

            // Wrappers
            Node::Tracked(tracked) => {
                let (inner, on_written) = tracked.into_parts();
                let range = self.with_range(|this| this.emit(inner));
                on_written(range);
            }
            // `force` never leaves a deferred node behind
            Node::Deferred(deferred) => self.emit(deferred.build()),
        }
    }

    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    fn write_text(&mut self, text: &str) {
        self.writer.write(text);
    }

    fn write_line(&mut self) {
        self.writer.write_line();
    }

    fn write_indent(&mut self) {
        self.writer.write_indent();
    }

    fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    /// `node` wrapped in parentheses when `parenthesize` is set.
    fn emit_wrapped(&mut self, node: Node, parenthesize: bool) {
        if parenthesize {
            self.write_text("(");
            self.emit(node);
            self.write_text(")");
        } else {
            self.emit(node);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/generator.rs"]
mod tests;
