use jsgen_ast::deferred::OnWritten;
use jsgen_ast::nodes::{
    ArrowFunctionExpression, AssignmentExpression, AwaitExpression, BinaryExpression,
    CallExpression, ConditionalExpression, FunctionExpression, Identifier, LogicalExpression,
    MemberExpression, MethodDefinition, NewExpression, Property, UnaryExpression,
    UpdateExpression, YieldExpression,
};
use jsgen_ast::{BinaryOp, MethodKind, Node, OperandLocation, TrackedNode, UpdateLocation};

use super::Generator;
use super::parenthesize::{
    BinaryParent, arrow_body_needs_parentheses, await_argument_needs_parentheses,
    binary_operand_needs_parentheses, conditional_test_needs_parentheses,
    member_operand_needs_parentheses, new_callee_needs_parentheses, unary_operand_collides,
    unary_operand_needs_parentheses,
};

impl Generator {
    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn emit_unary(&mut self, unary: UnaryExpression) {
        let UnaryExpression { op, mut argument } = unary;
        self.write_text(op.symbol());
        argument.force();
        let parenthesize = unary_operand_needs_parentheses(&argument);
        if op.is_keyword() || (!parenthesize && unary_operand_collides(op, &argument)) {
            self.write_text(" ");
        }
        self.emit_wrapped(argument, parenthesize);
    }

    pub(super) fn emit_binary(&mut self, binary: BinaryExpression) {
        let BinaryExpression { left, op, right } = binary;
        let parent = BinaryParent::Binary(op);
        if op == BinaryOp::In {
            // Self-wrapped so it can never leak into a `for (...)` head
            self.write_text("(");
            self.emit_operands(parent, left, op.symbol(), right);
            self.write_text(")");
        } else {
            self.emit_operands(parent, left, op.symbol(), right);
        }
    }

    pub(super) fn emit_logical(&mut self, logical: LogicalExpression) {
        let LogicalExpression { left, op, right } = logical;
        self.emit_operands(BinaryParent::Logical(op), left, op.symbol(), right);
    }

    fn emit_operands(
        &mut self,
        parent: BinaryParent,
        mut left: Node,
        symbol: &str,
        mut right: Node,
    ) {
        left.force();
        let parenthesize = binary_operand_needs_parentheses(parent, &left, OperandLocation::Left);
        self.emit_wrapped(left, parenthesize);

        self.write_text(" ");
        self.write_text(symbol);
        self.write_text(" ");

        right.force();
        let parenthesize =
            binary_operand_needs_parentheses(parent, &right, OperandLocation::Right);
        self.emit_wrapped(right, parenthesize);
    }

    pub(super) fn emit_assignment(&mut self, assignment: AssignmentExpression) {
        let AssignmentExpression { left, op, right } = assignment;
        self.emit(left);
        self.write_text(" ");
        self.write_text(op.symbol());
        self.write_text(" ");
        self.emit(right);
    }

    pub(super) fn emit_update(&mut self, update: UpdateExpression) {
        let UpdateExpression {
            op,
            argument,
            location,
        } = update;
        match location {
            UpdateLocation::Prefix => {
                self.write_text(op.symbol());
                self.emit(argument);
            }
            UpdateLocation::Suffix => {
                self.emit(argument);
                self.write_text(op.symbol());
            }
        }
    }

    pub(super) fn emit_conditional(&mut self, conditional: ConditionalExpression) {
        let ConditionalExpression {
            mut test,
            consequent,
            alternate,
        } = conditional;
        test.force();
        let parenthesize = conditional_test_needs_parentheses(&test);
        self.emit_wrapped(test, parenthesize);
        self.write_text(" ? ");
        self.emit(consequent);
        self.write_text(" : ");
        self.emit(alternate);
    }

    pub(super) fn emit_yield(&mut self, expr: YieldExpression) {
        self.write_text(if expr.delegate { "yield*" } else { "yield" });
        if let Some(argument) = expr.argument {
            self.write_text(" ");
            self.emit(argument);
        }
    }

    pub(super) fn emit_await(&mut self, expr: AwaitExpression) {
        let mut argument = expr.argument;
        self.write_text("await ");
        argument.force();
        let parenthesize = await_argument_needs_parentheses(&argument);
        self.emit_wrapped(argument, parenthesize);
    }

    // =========================================================================
    // Calls and Member Access
    // =========================================================================

    pub(super) fn emit_call(&mut self, call: CallExpression) {
        let CallExpression {
            mut callee,
            arguments,
        } = call;
        callee.force();
        let parenthesize = member_operand_needs_parentheses(&callee);
        self.emit_wrapped(callee, parenthesize);
        self.emit_comma_list(arguments);
    }

    pub(super) fn emit_new(&mut self, new: NewExpression) {
        let NewExpression {
            mut callee,
            arguments,
        } = new;
        let parenthesize = new_callee_needs_parentheses(&mut callee);
        self.write_text("new ");
        self.emit_wrapped(callee, parenthesize);
        self.emit_comma_list(arguments);
    }

    pub(super) fn emit_member(&mut self, member: MemberExpression) {
        let MemberExpression {
            mut object,
            property,
        } = member;
        object.force();
        let parenthesize = member_operand_needs_parentheses(&object);
        self.emit_wrapped(object, parenthesize);
        self.emit_member_property(property);
    }

    // =========================================================================
    // Functions, Classes and Properties
    // =========================================================================

    pub(super) fn emit_function_expression(&mut self, func: FunctionExpression) {
        let FunctionExpression {
            id,
            params,
            body,
            is_async,
            is_generator,
        } = func;
        self.emit_function(is_async, is_generator, id.as_deref(), params, body);
    }

    /// `[async ]function[*] [name](params) body`
    #[tracing::instrument(
        level = "trace",
        skip(self, params, body),
        fields(param_count = params.len())
    )]
    pub(super) fn emit_function(
        &mut self,
        is_async: bool,
        is_generator: bool,
        name: Option<&str>,
        params: Vec<Node>,
        body: Node,
    ) {
        if is_async {
            self.write_text("async ");
        }
        self.write_text(if is_generator { "function* " } else { "function " });
        if let Some(name) = name {
            self.write_text(name);
        }
        self.emit_comma_list(params);
        self.write_text(" ");
        self.emit(body);
    }

    pub(super) fn emit_arrow_function(&mut self, arrow: ArrowFunctionExpression) {
        let ArrowFunctionExpression {
            mut params,
            mut body,
            is_async,
        } = arrow;
        if is_async {
            self.write_text("async ");
        }
        let single_identifier = params.len() == 1 && {
            params[0].force();
            params[0].is::<Identifier>()
        };
        if single_identifier {
            self.emit_comma_separated(params);
        } else {
            self.emit_comma_list(params);
        }
        self.write_text(" => ");
        let parenthesize = arrow_body_needs_parentheses(&mut body);
        self.emit_wrapped(body, parenthesize);
    }

    /// `class [Name][ extends Super] { ... }`, one member per line.
    pub(super) fn emit_class(
        &mut self,
        name: Option<String>,
        super_class: Option<Node>,
        body: Vec<Node>,
    ) {
        self.write_text("class ");
        if let Some(name) = name {
            self.write_text(&name);
            self.write_text(" ");
        }
        if let Some(mut super_class) = super_class {
            self.write_text("extends ");
            super_class.force();
            let parenthesize = member_operand_needs_parentheses(&super_class);
            self.emit_wrapped(super_class, parenthesize);
            self.write_text(" ");
        }
        self.emit_block(body);
    }

    /// `[static ][async ][get |set ][*]key(params) body`
    ///
    /// A value that is not a function expression is written as a class field
    /// (`key = value;`).
    pub(super) fn emit_method_definition(&mut self, method: MethodDefinition) {
        let MethodDefinition {
            key,
            value,
            kind,
            is_static,
        } = method;
        if is_static {
            self.write_text("static ");
        }

        let (func, on_written) = match take_function(value) {
            Ok(parts) => parts,
            Err(value) => {
                self.emit_key(key);
                self.write_text(" = ");
                self.emit(value);
                self.write_text(";");
                return;
            }
        };

        if func.is_async {
            self.write_text("async ");
        }
        match kind {
            MethodKind::Get => self.write_text("get "),
            MethodKind::Set => self.write_text("set "),
            MethodKind::Constructor | MethodKind::Method => {}
        }
        if func.is_generator {
            self.write_text("*");
        }
        self.emit_key(key);
        let range = self.with_range(|this| {
            this.emit_comma_list(func.params);
            this.write_text(" ");
            this.emit(func.body);
        });
        if let Some(on_written) = on_written {
            on_written(range);
        }
    }

    pub(super) fn emit_property(&mut self, property: Property) {
        let Property { key, value } = property;
        self.emit_key(key);
        self.write_text(": ");
        self.emit(value);
    }
}

/// Unwrap a (possibly tracked) function expression. A tracked function's
/// callback is handed back so the caller can report the part it writes.
fn take_function(mut node: Node) -> Result<(FunctionExpression, Option<OnWritten>), Node> {
    node.force();
    match node {
        Node::FunctionExpression(func) => Ok((*func, None)),
        Node::Tracked(tracked) if tracked.node().is::<FunctionExpression>() => {
            let (inner, on_written) = tracked.into_parts();
            match take_function(inner) {
                Ok((func, None)) => Ok((func, Some(on_written))),
                Ok((func, Some(inner_written))) => {
                    let both: OnWritten = Box::new(move |range| {
                        inner_written(range);
                        on_written(range);
                    });
                    Ok((func, Some(both)))
                }
                Err(inner) => Err(TrackedNode::new(inner, on_written).into()),
            }
        }
        other => Err(other),
    }
}
