use jsgen_ast::Node;
use jsgen_ast::nodes::{
    CatchClause, DoWhileStatement, ExpressionStatement, ForStatement, FunctionDeclaration,
    IfStatement, LabeledStatement, Program, ReturnStatement, SwitchCase, SwitchStatement,
    ThrowStatement, TryStatement, VariableDeclaration, VariableDeclarator, WhileStatement,
    WithStatement,
};

use super::Generator;
use super::parenthesize::{consequent_needs_block, expression_statement_needs_parentheses};

impl Generator {
    // =========================================================================
    // Program and Simple Statements
    // =========================================================================

    /// Statements on consecutive lines. The first starts at the cursor and the
    /// last has no line end, so a top-level write frames it like any node.
    pub(super) fn emit_program(&mut self, program: Program) {
        let mut first = true;
        for statement in program.body {
            if !first {
                self.write_line();
                self.write_indent();
            }
            first = false;
            self.emit(statement);
        }
    }

    pub(super) fn emit_expression_statement(&mut self, stmt: ExpressionStatement) {
        let mut expression = stmt.expression;
        let parenthesize = expression_statement_needs_parentheses(&mut expression);
        self.emit_wrapped(expression, parenthesize);
        self.write_text(";");
    }

    pub(super) fn emit_labeled_statement(&mut self, stmt: LabeledStatement) {
        self.write_text(&stmt.label);
        self.write_text(": ");
        self.emit(stmt.body);
    }

    /// `break`/`continue` with an optional label.
    pub(super) fn emit_control_transfer(&mut self, keyword: &str, label: Option<Node>) {
        self.write_text(keyword);
        if let Some(label) = label {
            self.write_text(" ");
            self.emit(label);
        }
        self.write_text(";");
    }

    pub(super) fn emit_return_statement(&mut self, stmt: ReturnStatement) {
        self.write_text("return");
        if let Some(argument) = stmt.argument {
            self.write_text(" ");
            self.emit(argument);
        }
        self.write_text(";");
    }

    pub(super) fn emit_throw_statement(&mut self, stmt: ThrowStatement) {
        self.write_text("throw ");
        self.emit(stmt.argument);
        self.write_text(";");
    }

    // =========================================================================
    // Control Flow
    // =========================================================================

    pub(super) fn emit_if_statement(&mut self, stmt: IfStatement) {
        let IfStatement {
            test,
            mut consequent,
            alternate,
        } = stmt;
        self.write_text("if (");
        self.emit(test);
        self.write_text(") ");
        if alternate.is_some() && consequent_needs_block(&mut consequent) {
            self.emit_block(vec![consequent]);
        } else {
            self.emit(consequent);
        }
        if let Some(alternate) = alternate {
            self.write_text(" else ");
            self.emit(alternate);
        }
    }

    pub(super) fn emit_with_statement(&mut self, stmt: WithStatement) {
        self.write_text("with (");
        self.emit(stmt.object);
        self.write_text(") ");
        self.emit(stmt.body);
    }

    pub(super) fn emit_switch_statement(&mut self, stmt: SwitchStatement) {
        self.write_text("switch (");
        self.emit(stmt.discriminant);
        self.write_text(") ");
        self.emit_block(stmt.cases);
    }

    /// `case test:` / `default:`, consequent indented one level below it.
    pub(super) fn emit_switch_case(&mut self, case: SwitchCase) {
        let SwitchCase { test, consequent } = case;
        match test {
            Some(test) => {
                self.write_text("case ");
                self.emit(test);
                self.write_text(":");
            }
            None => self.write_text("default:"),
        }
        if consequent.is_empty() {
            return;
        }
        self.write_line();
        self.increase_indent();
        let last = consequent.len() - 1;
        for (i, statement) in consequent.into_iter().enumerate() {
            if i < last {
                self.emit_statement(statement);
            } else {
                self.write_indent();
                self.emit(statement);
            }
        }
        self.decrease_indent();
    }

    pub(super) fn emit_try_statement(&mut self, stmt: TryStatement) {
        let TryStatement {
            block,
            handler,
            finalizer,
        } = stmt;
        self.write_text("try ");
        self.emit(block);
        if let Some(handler) = handler {
            self.write_text(" ");
            self.emit(handler);
        }
        if let Some(finalizer) = finalizer {
            self.write_text(" finally ");
            self.emit(finalizer);
        }
    }

    pub(super) fn emit_catch_clause(&mut self, clause: CatchClause) {
        self.write_text("catch ");
        if let Some(param) = clause.param {
            self.write_text("(");
            self.emit(param);
            self.write_text(") ");
        }
        self.emit(clause.body);
    }

    pub(super) fn emit_while_statement(&mut self, stmt: WhileStatement) {
        self.write_text("while (");
        self.emit(stmt.test);
        self.write_text(") ");
        self.emit(stmt.body);
    }

    pub(super) fn emit_do_while_statement(&mut self, stmt: DoWhileStatement) {
        self.write_text("do ");
        self.emit(stmt.body);
        self.write_text(" while (");
        self.emit(stmt.test);
        self.write_text(");");
    }

    // =========================================================================
    // Loops
    // =========================================================================

    /// `for (init; test; update) body`; empty clauses leave their slot blank.
    pub(super) fn emit_for_statement(&mut self, stmt: ForStatement) {
        let ForStatement {
            init,
            test,
            update,
            body,
        } = stmt;
        self.write_text("for (");
        if let Some(init) = init {
            self.emit_for_head(init);
        }
        self.write_text("; ");
        if let Some(test) = test {
            self.emit(test);
        }
        self.write_text("; ");
        if let Some(update) = update {
            self.emit(update);
        }
        self.write_text(") ");
        self.emit(body);
    }

    /// `for [await ](left in|of right) body`
    pub(super) fn emit_for_iteration(
        &mut self,
        keyword: &str,
        left: Node,
        right: Node,
        body: Node,
        is_await: bool,
    ) {
        self.write_text("for ");
        if is_await {
            self.write_text("await ");
        }
        self.write_text("(");
        self.emit_for_head(left);
        self.write_text(" ");
        self.write_text(keyword);
        self.write_text(" ");
        self.emit(right);
        self.write_text(") ");
        self.emit(body);
    }

    /// Loop heads take declarations without their terminating `;`.
    fn emit_for_head(&mut self, mut head: Node) {
        head.force();
        match head {
            Node::VariableDeclaration(declaration) => self.emit_variable_declaration(*declaration),
            Node::Tracked(tracked) if tracked.node().is::<VariableDeclaration>() => {
                let (inner, on_written) = tracked.into_parts();
                let range = self.with_range(|this| this.emit_for_head(inner));
                on_written(range);
            }
            other => self.emit(other),
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `kind a = 1, b` without the trailing `;`.
    pub(super) fn emit_variable_declaration(&mut self, declaration: VariableDeclaration) {
        self.write_text(declaration.kind.symbol());
        self.write_text(" ");
        self.emit_comma_separated(declaration.declarations);
    }

    pub(super) fn emit_variable_declarator(&mut self, declarator: VariableDeclarator) {
        self.emit(declarator.id);
        if let Some(init) = declarator.init {
            self.write_text(" = ");
            self.emit(init);
        }
    }

    pub(super) fn emit_function_declaration(&mut self, declaration: FunctionDeclaration) {
        let FunctionDeclaration {
            id,
            params,
            body,
            is_async,
            is_generator,
        } = declaration;
        self.emit_function(is_async, is_generator, Some(&id), params, body);
    }
}
