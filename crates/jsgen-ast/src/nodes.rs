//! Node payloads.
//!
//! One struct per node kind. Children are owned [`Node`] values; optional
//! children are `Option<Node>` and ordered children are `Vec<Node>` in source
//! order. Array literals and patterns use `Vec<Option<Node>>` where `None` is
//! an elision (hole).

use crate::node::Node;
use crate::specs::{
    AssignmentOp, BinaryOp, LogicalOp, MethodKind, UnaryOp, UpdateLocation, UpdateOp, VariableKind,
};

// =============================================================================
// Structural nodes
// =============================================================================

/// A list of top-level statements.
#[derive(Debug)]
pub struct Program {
    pub body: Vec<Node>,
}

/// `super`
#[derive(Debug)]
pub struct Super;

/// Non-computed member name / property key: the `b` in `a.b` or `{ b: 1 }`.
///
/// Names that are not valid bare identifiers are rendered quoted
/// (`a["x y"]`, `{ "x y": 1 }`).
#[derive(Debug)]
pub struct MemberIdentifier {
    pub name: String,
}

/// Object literal / object pattern member: `key: value`.
#[derive(Debug)]
pub struct Property {
    /// Either a [`MemberIdentifier`] or a computed key expression.
    pub key: Node,
    pub value: Node,
}

/// `case test:` or `default:` followed by its statements.
#[derive(Debug)]
pub struct SwitchCase {
    /// `None` for `default:`
    pub test: Option<Node>,
    pub consequent: Vec<Node>,
}

#[derive(Debug)]
pub struct CatchClause {
    pub param: Option<Node>,
    pub body: Node,
}

/// `id = init` inside a variable declaration.
#[derive(Debug)]
pub struct VariableDeclarator {
    pub id: Node,
    pub init: Option<Node>,
}

/// Literal text chunk of a template literal.
#[derive(Debug)]
pub struct TemplateElement {
    pub value: String,
}

/// A method inside a class body.
#[derive(Debug)]
pub struct MethodDefinition {
    /// Either a [`MemberIdentifier`] or a computed key expression.
    pub key: Node,
    /// A function expression; its name is ignored.
    pub value: Node,
    pub kind: MethodKind,
    pub is_static: bool,
}

// =============================================================================
// Statements
// =============================================================================

#[derive(Debug)]
pub struct EmptyStatement;

#[derive(Debug)]
pub struct BlockStatement {
    pub body: Vec<Node>,
}

#[derive(Debug)]
pub struct ExpressionStatement {
    pub expression: Node,
}

#[derive(Debug)]
pub struct IfStatement {
    pub test: Node,
    pub consequent: Node,
    pub alternate: Option<Node>,
}

#[derive(Debug)]
pub struct LabeledStatement {
    pub label: String,
    pub body: Node,
}

#[derive(Debug)]
pub struct BreakStatement {
    pub label: Option<Node>,
}

#[derive(Debug)]
pub struct ContinueStatement {
    pub label: Option<Node>,
}

#[derive(Debug)]
pub struct WithStatement {
    pub object: Node,
    pub body: Node,
}

#[derive(Debug)]
pub struct SwitchStatement {
    pub discriminant: Node,
    /// [`SwitchCase`] nodes.
    pub cases: Vec<Node>,
}

#[derive(Debug)]
pub struct ReturnStatement {
    pub argument: Option<Node>,
}

#[derive(Debug)]
pub struct ThrowStatement {
    pub argument: Node,
}

#[derive(Debug)]
pub struct TryStatement {
    pub block: Node,
    /// A [`CatchClause`] node.
    pub handler: Option<Node>,
    pub finalizer: Option<Node>,
}

#[derive(Debug)]
pub struct WhileStatement {
    pub test: Node,
    pub body: Node,
}

#[derive(Debug)]
pub struct DoWhileStatement {
    pub body: Node,
    pub test: Node,
}

#[derive(Debug)]
pub struct ForStatement {
    pub init: Option<Node>,
    pub test: Option<Node>,
    pub update: Option<Node>,
    pub body: Node,
}

#[derive(Debug)]
pub struct ForInStatement {
    pub left: Node,
    pub right: Node,
    pub body: Node,
    pub is_await: bool,
}

#[derive(Debug)]
pub struct ForOfStatement {
    pub left: Node,
    pub right: Node,
    pub body: Node,
    pub is_await: bool,
}

#[derive(Debug)]
pub struct DebuggerStatement;

#[derive(Debug)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    /// [`VariableDeclarator`] nodes.
    pub declarations: Vec<Node>,
}

#[derive(Debug)]
pub struct FunctionDeclaration {
    pub id: String,
    pub params: Vec<Node>,
    pub body: Node,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Debug)]
pub struct ClassDeclaration {
    pub id: String,
    pub super_class: Option<Node>,
    /// [`MethodDefinition`] nodes.
    pub body: Vec<Node>,
}

// =============================================================================
// Expressions
// =============================================================================

#[derive(Debug)]
pub struct ThisExpression;

#[derive(Debug)]
pub struct ArrayExpression {
    pub elements: Vec<Option<Node>>,
}

#[derive(Debug)]
pub struct ObjectExpression {
    pub properties: Vec<Node>,
}

#[derive(Debug)]
pub struct FunctionExpression {
    pub id: Option<String>,
    pub params: Vec<Node>,
    pub body: Node,
    pub is_async: bool,
    pub is_generator: bool,
}

#[derive(Debug)]
pub struct ArrowFunctionExpression {
    pub params: Vec<Node>,
    /// A block statement or a single expression.
    pub body: Node,
    pub is_async: bool,
}

#[derive(Debug)]
pub struct ClassExpression {
    pub id: Option<String>,
    pub super_class: Option<Node>,
    pub body: Vec<Node>,
}

#[derive(Debug)]
pub struct SequenceExpression {
    pub expressions: Vec<Node>,
}

#[derive(Debug)]
pub struct UnaryExpression {
    pub op: UnaryOp,
    pub argument: Node,
}

#[derive(Debug)]
pub struct BinaryExpression {
    pub left: Node,
    pub op: BinaryOp,
    pub right: Node,
}

#[derive(Debug)]
pub struct AssignmentExpression {
    pub left: Node,
    pub op: AssignmentOp,
    pub right: Node,
}

#[derive(Debug)]
pub struct UpdateExpression {
    pub op: UpdateOp,
    pub argument: Node,
    pub location: UpdateLocation,
}

#[derive(Debug)]
pub struct LogicalExpression {
    pub left: Node,
    pub op: LogicalOp,
    pub right: Node,
}

#[derive(Debug)]
pub struct ConditionalExpression {
    pub test: Node,
    pub consequent: Node,
    pub alternate: Node,
}

#[derive(Debug)]
pub struct CallExpression {
    pub callee: Node,
    pub arguments: Vec<Node>,
}

#[derive(Debug)]
pub struct NewExpression {
    pub callee: Node,
    pub arguments: Vec<Node>,
}

#[derive(Debug)]
pub struct MemberExpression {
    pub object: Node,
    /// A [`MemberIdentifier`] for `a.b`, any other expression for `a[b]`.
    pub property: Node,
}

#[derive(Debug)]
pub struct YieldExpression {
    pub argument: Option<Node>,
    pub delegate: bool,
}

#[derive(Debug)]
pub struct AwaitExpression {
    pub argument: Node,
}

#[derive(Debug)]
pub struct TemplateLiteral {
    /// [`TemplateElement`] chunks interleaved with substituted expressions.
    pub quasis: Vec<Node>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression {
    pub tag: Node,
    /// A [`TemplateLiteral`] node.
    pub quasi: Node,
}

/// `new.target`, `import.meta`
#[derive(Debug)]
pub struct MetaProperty {
    pub meta: String,
    pub property: String,
}

// =============================================================================
// Patterns
// =============================================================================

/// A bare reference name.
#[derive(Debug)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug)]
pub struct ArrayPattern {
    pub elements: Vec<Option<Node>>,
}

#[derive(Debug)]
pub struct ObjectPattern {
    pub properties: Vec<Node>,
}

/// `left = right` default inside a pattern or parameter list.
#[derive(Debug)]
pub struct AssignmentPattern {
    pub left: Node,
    pub right: Node,
}

#[derive(Debug)]
pub struct RestElement {
    pub argument: Node,
}

#[derive(Debug)]
pub struct SpreadElement {
    pub argument: Node,
}

// =============================================================================
// Literals
// =============================================================================

#[derive(Debug)]
pub struct NullLiteral;

#[derive(Debug)]
pub struct BoolLiteral {
    pub value: bool,
}

/// Rendered with JavaScript `Number.prototype.toString` semantics.
#[derive(Debug)]
pub struct NumberLiteral {
    pub value: f64,
}

#[derive(Debug)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug)]
pub struct RegExpLiteral {
    pub pattern: String,
    pub flags: String,
}

/// Emitted verbatim, e.g. `1e-30` where the textual form must survive.
#[derive(Debug)]
pub struct RawLiteral {
    pub raw: String,
}
