//! Node precedence registry.
//!
//! Maps every expression-like node kind to the binding strength the emitter
//! compares when deciding whether a child needs parentheses. Higher binds
//! tighter. Binary and logical expressions share one registry slot each; the
//! emitter falls back to the operator tables in [`crate::specs`] when two
//! operands tie.

use crate::node::{AstNode, Node, NodeKind};

/// Primary expressions: never need wrapping.
pub const PRECEDENCE_PRIMARY: u8 = 20;
/// Member access, calls and `new`.
pub const PRECEDENCE_MEMBER: u8 = 19;
pub const PRECEDENCE_LITERAL: u8 = 18;
/// Sentinel for constructs that are always parenthesized when they appear as
/// an operand: object literals, functions, arrows and class expressions.
pub const PRECEDENCE_NEEDS_PARENTHESES: u8 = 17;
pub const PRECEDENCE_UPDATE: u8 = 16;
pub const PRECEDENCE_UNARY: u8 = 15;
pub const PRECEDENCE_BINARY: u8 = 14;
pub const PRECEDENCE_LOGICAL: u8 = 13;
pub const PRECEDENCE_CONDITIONAL: u8 = 4;
pub const PRECEDENCE_ASSIGNMENT: u8 = 3;
pub const PRECEDENCE_YIELD: u8 = 2;
pub const PRECEDENCE_REST: u8 = 1;
/// Returned for kinds missing from the registry.
pub const PRECEDENCE_UNKNOWN: u8 = 0;

/// Registry lookup. `None` for statements, structural kinds and unbuilt
/// deferred nodes.
pub const fn precedence_for_kind(kind: NodeKind) -> Option<u8> {
    let precedence = match kind {
        NodeKind::ArrayExpression
        | NodeKind::TaggedTemplateExpression
        | NodeKind::SequenceExpression
        | NodeKind::ThisExpression
        | NodeKind::Super
        | NodeKind::Identifier
        | NodeKind::MetaProperty
        | NodeKind::TemplateLiteral
        | NodeKind::ArrayPattern => PRECEDENCE_PRIMARY,

        NodeKind::MemberExpression | NodeKind::CallExpression | NodeKind::NewExpression => {
            PRECEDENCE_MEMBER
        }

        NodeKind::NullLiteral
        | NodeKind::BoolLiteral
        | NodeKind::NumberLiteral
        | NodeKind::StringLiteral
        | NodeKind::RegExpLiteral
        | NodeKind::RawLiteral => PRECEDENCE_LITERAL,

        NodeKind::ObjectExpression
        | NodeKind::ObjectPattern
        | NodeKind::FunctionExpression
        | NodeKind::ArrowFunctionExpression
        | NodeKind::ClassExpression => PRECEDENCE_NEEDS_PARENTHESES,

        NodeKind::UpdateExpression => PRECEDENCE_UPDATE,
        NodeKind::UnaryExpression => PRECEDENCE_UNARY,
        NodeKind::BinaryExpression => PRECEDENCE_BINARY,
        NodeKind::LogicalExpression => PRECEDENCE_LOGICAL,
        NodeKind::ConditionalExpression => PRECEDENCE_CONDITIONAL,
        NodeKind::AssignmentExpression | NodeKind::AssignmentPattern => PRECEDENCE_ASSIGNMENT,
        NodeKind::AwaitExpression | NodeKind::YieldExpression => PRECEDENCE_YIELD,
        NodeKind::RestElement | NodeKind::SpreadElement => PRECEDENCE_REST,

        _ => return None,
    };
    Some(precedence)
}

/// Precedence of a node as registered for its kind.
///
/// A miss is a registry defect, not a caller error: it is logged and treated
/// as the weakest binding so the child gets parenthesized.
pub fn precedence_of(node: &Node) -> u8 {
    let kind = node.kind();
    match precedence_for_kind(kind) {
        Some(precedence) => precedence,
        None => {
            tracing::warn!(?kind, "node kind has no registered precedence");
            PRECEDENCE_UNKNOWN
        }
    }
}

/// Registry lookup keyed by payload type.
pub const fn precedence_of_kind<T: AstNode>() -> Option<u8> {
    precedence_for_kind(T::KIND)
}

/// Whether the node is one of the always-wrapped constructs.
pub fn needs_parentheses(node: &Node) -> bool {
    precedence_for_kind(node.kind()) == Some(PRECEDENCE_NEEDS_PARENTHESES)
}

#[cfg(test)]
#[path = "../tests/precedence.rs"]
mod tests;
