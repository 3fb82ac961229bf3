//! Builder helpers for assembling trees without spelling out payload structs.
//!
//! Every helper returns a finished [`Node`], so calls nest the same way the
//! generated source does:
//!
//! ```
//! use jsgen_ast::{BinaryOp, Node};
//!
//! let sum = Node::binary(Node::id("a"), BinaryOp::Add, Node::number(1.0));
//! let stmt = Node::expr_stmt(Node::call(Node::prop(Node::id("console"), "log"), vec![sum]));
//! assert!(stmt.is_statement());
//! ```

use jsgen_common::SourceRange;

use crate::deferred::DeferredNode;
use crate::node::Node;
use crate::nodes::*;
use crate::specs::{
    AssignmentOp, BinaryOp, LogicalOp, MethodKind, UnaryOp, UpdateLocation, UpdateOp, VariableKind,
};

// =========================================================================
// Identifiers and literals
// =========================================================================

impl Node {
    /// Create an identifier reference
    pub fn id(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }.into()
    }

    /// Create a member name / property key
    pub fn member_id(name: impl Into<String>) -> Self {
        MemberIdentifier { name: name.into() }.into()
    }

    pub fn number(value: f64) -> Self {
        NumberLiteral { value }.into()
    }

    pub fn string(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
        }
        .into()
    }

    pub fn boolean(value: bool) -> Self {
        BoolLiteral { value }.into()
    }

    pub fn null() -> Self {
        NullLiteral.into()
    }

    /// Text emitted verbatim
    pub fn raw(raw: impl Into<String>) -> Self {
        RawLiteral { raw: raw.into() }.into()
    }

    pub fn regexp(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        RegExpLiteral {
            pattern: pattern.into(),
            flags: flags.into(),
        }
        .into()
    }

    pub fn this() -> Self {
        ThisExpression.into()
    }

    pub fn super_() -> Self {
        Super.into()
    }

    /// `meta.property`, e.g. `new.target`
    pub fn meta_property(meta: impl Into<String>, property: impl Into<String>) -> Self {
        MetaProperty {
            meta: meta.into(),
            property: property.into(),
        }
        .into()
    }

    /// Template literal from alternating chunks and substitutions
    pub fn template(quasis: Vec<Self>) -> Self {
        TemplateLiteral { quasis }.into()
    }

    pub fn template_element(value: impl Into<String>) -> Self {
        TemplateElement {
            value: value.into(),
        }
        .into()
    }

    pub fn tagged_template(tag: Self, quasi: Self) -> Self {
        TaggedTemplateExpression { tag, quasi }.into()
    }
}

// =========================================================================
// Operators
// =========================================================================

impl Node {
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        BinaryExpression { left, op, right }.into()
    }

    pub fn logical(left: Self, op: LogicalOp, right: Self) -> Self {
        LogicalExpression { left, op, right }.into()
    }

    /// Create an assignment expression: `target = value`
    pub fn assign(target: Self, value: Self) -> Self {
        Self::assign_op(target, AssignmentOp::Assign, value)
    }

    pub fn assign_op(target: Self, op: AssignmentOp, value: Self) -> Self {
        AssignmentExpression {
            left: target,
            op,
            right: value,
        }
        .into()
    }

    pub fn unary(op: UnaryOp, argument: Self) -> Self {
        UnaryExpression { op, argument }.into()
    }

    pub fn update(op: UpdateOp, location: UpdateLocation, argument: Self) -> Self {
        UpdateExpression {
            op,
            argument,
            location,
        }
        .into()
    }

    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        ConditionalExpression {
            test,
            consequent,
            alternate,
        }
        .into()
    }

    /// Create a comma expression: `(a, b)`
    pub fn sequence(expressions: Vec<Self>) -> Self {
        SequenceExpression { expressions }.into()
    }
}

// =========================================================================
// Calls and member access
// =========================================================================

impl Node {
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        CallExpression {
            callee,
            arguments: args,
        }
        .into()
    }

    /// Create a new expression: `new Constructor(args)`
    pub fn new_expr(callee: Self, args: Vec<Self>) -> Self {
        NewExpression {
            callee,
            arguments: args,
        }
        .into()
    }

    /// Create a property access: `object.name` (quoted when `name` is not an
    /// identifier)
    pub fn prop(object: Self, name: impl Into<String>) -> Self {
        MemberExpression {
            object,
            property: Self::member_id(name),
        }
        .into()
    }

    /// Create an element access: `object[index]`
    pub fn elem(object: Self, index: Self) -> Self {
        MemberExpression {
            object,
            property: index,
        }
        .into()
    }

    pub fn spread(argument: Self) -> Self {
        SpreadElement { argument }.into()
    }

    pub fn yield_(argument: Option<Self>, delegate: bool) -> Self {
        YieldExpression { argument, delegate }.into()
    }

    pub fn await_(argument: Self) -> Self {
        AwaitExpression { argument }.into()
    }
}

// =========================================================================
// Object, array and function literals
// =========================================================================

impl Node {
    /// Array literal; `None` entries are holes
    pub fn array(elements: Vec<Option<Self>>) -> Self {
        ArrayExpression { elements }.into()
    }

    /// Create an object literal from [`Node::property`] entries
    pub fn object(properties: Vec<Self>) -> Self {
        ObjectExpression { properties }.into()
    }

    /// Create a property with a named key: `key: value`
    pub fn property(key: impl Into<String>, value: Self) -> Self {
        Property {
            key: Self::member_id(key),
            value,
        }
        .into()
    }

    /// Create a property with a computed key: `[key]: value`
    pub fn computed_property(key: Self, value: Self) -> Self {
        Property { key, value }.into()
    }

    pub fn func_expr(name: Option<String>, params: Vec<Self>, body: Vec<Self>) -> Self {
        FunctionExpression {
            id: name,
            params,
            body: Self::block(body),
            is_async: false,
            is_generator: false,
        }
        .into()
    }

    /// Arrow with a block or expression body
    pub fn arrow(params: Vec<Self>, body: Self) -> Self {
        ArrowFunctionExpression {
            params,
            body,
            is_async: false,
        }
        .into()
    }

    pub fn class_expr(name: Option<String>, super_class: Option<Self>, body: Vec<Self>) -> Self {
        ClassExpression {
            id: name,
            super_class,
            body,
        }
        .into()
    }

    /// Create a plain class method: `key(params) { body }`
    pub fn method(key: impl Into<String>, params: Vec<Self>, body: Vec<Self>) -> Self {
        MethodDefinition {
            key: Self::member_id(key),
            value: Self::func_expr(None, params, body),
            kind: MethodKind::Method,
            is_static: false,
        }
        .into()
    }
}

// =========================================================================
// Patterns
// =========================================================================

impl Node {
    pub fn array_pattern(elements: Vec<Option<Self>>) -> Self {
        ArrayPattern { elements }.into()
    }

    pub fn object_pattern(properties: Vec<Self>) -> Self {
        ObjectPattern { properties }.into()
    }

    /// Create a defaulted binding: `left = right`
    pub fn with_default(left: Self, right: Self) -> Self {
        AssignmentPattern { left, right }.into()
    }

    pub fn rest(argument: Self) -> Self {
        RestElement { argument }.into()
    }
}

// =========================================================================
// Statements
// =========================================================================

impl Node {
    pub fn program(body: Vec<Self>) -> Self {
        Program { body }.into()
    }

    pub fn block(body: Vec<Self>) -> Self {
        BlockStatement { body }.into()
    }

    pub fn empty() -> Self {
        EmptyStatement.into()
    }

    pub fn expr_stmt(expression: Self) -> Self {
        ExpressionStatement { expression }.into()
    }

    /// Create a single-binding declaration: `kind name = init;`
    pub fn var_decl(kind: VariableKind, name: impl Into<String>, init: Option<Self>) -> Self {
        Self::var_decls(kind, vec![Self::declarator(Self::id(name), init)])
    }

    pub fn var_decls(kind: VariableKind, declarations: Vec<Self>) -> Self {
        VariableDeclaration { kind, declarations }.into()
    }

    pub fn declarator(id: Self, init: Option<Self>) -> Self {
        VariableDeclarator { id, init }.into()
    }

    pub fn ret(argument: Option<Self>) -> Self {
        ReturnStatement { argument }.into()
    }

    pub fn throw(argument: Self) -> Self {
        ThrowStatement { argument }.into()
    }

    pub fn if_stmt(test: Self, consequent: Self, alternate: Option<Self>) -> Self {
        IfStatement {
            test,
            consequent,
            alternate,
        }
        .into()
    }

    pub fn while_stmt(test: Self, body: Self) -> Self {
        WhileStatement { test, body }.into()
    }

    pub fn func_decl(name: impl Into<String>, params: Vec<Self>, body: Vec<Self>) -> Self {
        FunctionDeclaration {
            id: name.into(),
            params,
            body: Self::block(body),
            is_async: false,
            is_generator: false,
        }
        .into()
    }

    pub fn class_decl(name: impl Into<String>, super_class: Option<Self>, body: Vec<Self>) -> Self {
        ClassDeclaration {
            id: name.into(),
            super_class,
            body,
        }
        .into()
    }
}

// =========================================================================
// Deferred subtrees
// =========================================================================

impl Node {
    /// Subtree built on first use
    pub fn deferred(builder: impl FnOnce() -> Node + 'static) -> Self {
        DeferredNode::new(builder).into()
    }

    /// Subtree built on first use whose written range is reported to
    /// `on_written`
    pub fn deferred_with_callback(
        builder: impl FnOnce() -> Node + 'static,
        on_written: impl FnOnce(SourceRange) + 'static,
    ) -> Self {
        DeferredNode::with_callback(builder, on_written).into()
    }
}
