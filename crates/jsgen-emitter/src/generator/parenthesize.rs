//! Parenthesization predicates.
//!
//! All checks look at an already built child. Functions taking `&mut Node`
//! walk further down the tree and build deferred descendants on the way.

use jsgen_ast::nodes::{
    AssignmentExpression, BinaryExpression, CallExpression, ConditionalExpression,
    ForInStatement, ForOfStatement, ForStatement, IfStatement, LabeledStatement,
    LogicalExpression, MemberExpression, NumberLiteral, RawLiteral, TaggedTemplateExpression,
    UnaryExpression, UpdateExpression, WhileStatement, WithStatement,
};
use jsgen_ast::precedence::{
    PRECEDENCE_BINARY, PRECEDENCE_CONDITIONAL, PRECEDENCE_LOGICAL, PRECEDENCE_MEMBER,
    PRECEDENCE_NEEDS_PARENTHESES, PRECEDENCE_UNARY, needs_parentheses,
};
use jsgen_ast::{
    BinaryOp, LogicalOp, Node, NodeKind, OperandLocation, UnaryOp, UpdateLocation, precedence_of,
};

/// The operator whose operand is being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryParent {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

impl BinaryParent {
    /// Registry slot of the parent node.
    const fn node_precedence(self) -> u8 {
        match self {
            BinaryParent::Binary(_) => PRECEDENCE_BINARY,
            BinaryParent::Logical(_) => PRECEDENCE_LOGICAL,
        }
    }

    const fn op_precedence(self) -> u8 {
        match self {
            BinaryParent::Binary(op) => op.precedence(),
            BinaryParent::Logical(op) => op.precedence(),
        }
    }
}

/// Tie-break between operators sharing a registry slot. Left operands group
/// with equal operators; right operands must be wrapped to keep their
/// grouping.
const fn operator_needs_parentheses(
    operand_op: u8,
    parent_op: u8,
    location: OperandLocation,
) -> bool {
    match location {
        OperandLocation::Left => operand_op < parent_op,
        OperandLocation::Right => operand_op <= parent_op,
    }
}

/// Whether an operand of a binary or logical expression must be wrapped.
pub fn binary_operand_needs_parentheses(
    parent: BinaryParent,
    operand: &Node,
    location: OperandLocation,
) -> bool {
    let operand_precedence = precedence_of(operand);
    let parent_precedence = parent.node_precedence();

    if operand_precedence == PRECEDENCE_NEEDS_PARENTHESES {
        return true;
    }
    let right_associative =
        matches!(parent, BinaryParent::Binary(op) if op.is_right_associative());
    if right_associative
        && location == OperandLocation::Left
        && starts_with_unary_operator(operand)
    {
        // `-a ** b` is a syntax error
        return true;
    }
    if operand_precedence != parent_precedence {
        return operand_precedence < parent_precedence;
    }

    if let Some(binary) = operand.downcast_ref::<BinaryExpression>() {
        if right_associative && parent == BinaryParent::Binary(binary.op) {
            return location == OperandLocation::Left;
        }
        return operator_needs_parentheses(
            binary.op.precedence(),
            parent.op_precedence(),
            location,
        );
    }
    if let Some(logical) = operand.downcast_ref::<LogicalExpression>() {
        return operator_needs_parentheses(
            logical.op.precedence(),
            parent.op_precedence(),
            location,
        );
    }
    false
}

/// Operands that print with a leading prefix operator and so cannot be the
/// base of `**` unwrapped.
fn starts_with_unary_operator(node: &Node) -> bool {
    match node.kind() {
        NodeKind::UnaryExpression | NodeKind::AwaitExpression => true,
        NodeKind::NumberLiteral => node
            .downcast_ref::<NumberLiteral>()
            .is_some_and(|literal| is_negative_number(literal.value)),
        NodeKind::RawLiteral => node
            .downcast_ref::<RawLiteral>()
            .is_some_and(|literal| literal.raw.starts_with(['-', '+'])),
        _ => false,
    }
}

/// Number literals printed with a leading `-`, including `-0`.
fn is_negative_number(value: f64) -> bool {
    value < 0.0 || (value == 0.0 && value.is_sign_negative())
}

/// Unary operands bind tighter than the operator or are wrapped; the
/// always-wrapped constructs are wrapped here as well.
pub fn unary_operand_needs_parentheses(operand: &Node) -> bool {
    precedence_of(operand) < PRECEDENCE_UNARY || needs_parentheses(operand)
}

/// Whether a space must separate `op` from its (unwrapped) operand so the two
/// signs do not fuse into `--`/`++` or read as a different operator.
pub fn unary_operand_collides(op: UnaryOp, operand: &Node) -> bool {
    let sign = match op {
        UnaryOp::Negative => '-',
        UnaryOp::Positive => '+',
        _ => return false,
    };
    leading_sign(operand) == Some(sign)
}

fn leading_sign(node: &Node) -> Option<char> {
    match node.kind() {
        NodeKind::UnaryExpression => {
            let unary = node.downcast_ref::<UnaryExpression>()?;
            match unary.op {
                UnaryOp::Negative => Some('-'),
                UnaryOp::Positive => Some('+'),
                _ => None,
            }
        }
        NodeKind::UpdateExpression => {
            let update = node.downcast_ref::<UpdateExpression>()?;
            match update.location {
                UpdateLocation::Prefix => update.op.symbol().chars().next(),
                UpdateLocation::Suffix => None,
            }
        }
        NodeKind::NumberLiteral => {
            let literal = node.downcast_ref::<NumberLiteral>()?;
            is_negative_number(literal.value).then_some('-')
        }
        NodeKind::RawLiteral => node.downcast_ref::<RawLiteral>()?.raw.chars().next(),
        _ => None,
    }
}

/// Callee, member object and superclass positions accept only
/// member-precedence expressions unwrapped.
pub fn member_operand_needs_parentheses(node: &Node) -> bool {
    precedence_of(node) < PRECEDENCE_MEMBER
}

/// The test of `a ? b : c` is wrapped unless it binds tighter than `?:`.
/// An unwrapped arrow would take the whole conditional as its body.
pub fn conditional_test_needs_parentheses(node: &Node) -> bool {
    precedence_of(node) <= PRECEDENCE_CONDITIONAL || needs_parentheses(node)
}

/// Await binds like a unary operator.
pub fn await_argument_needs_parentheses(node: &Node) -> bool {
    unary_operand_needs_parentheses(node)
}

/// A template tag must be a member-level expression.
pub fn tag_needs_parentheses(node: &Node) -> bool {
    precedence_of(node) <= PRECEDENCE_NEEDS_PARENTHESES
}

/// Whether the callee of `new` must be wrapped.
///
/// Besides low-precedence callees, any callee whose member-object chain ends
/// in a call is wrapped: `new (f())()` constructs the call's result, while
/// `new f()()` would call the constructed object.
pub fn new_callee_needs_parentheses(callee: &mut Node) -> bool {
    callee.force();
    member_operand_needs_parentheses(callee) || chain_reaches_call(callee)
}

fn chain_reaches_call(node: &mut Node) -> bool {
    node.force();
    if node.is::<CallExpression>() {
        return true;
    }
    match node.downcast_mut::<MemberExpression>() {
        Some(member) => chain_reaches_call(&mut member.object),
        None => false,
    }
}

/// Whether an expression statement must be wrapped because its text would
/// begin with `{`, `function` or `class` and be read as a declaration or
/// block.
pub fn expression_statement_needs_parentheses(expression: &mut Node) -> bool {
    expression.force();
    match expression.kind() {
        NodeKind::ObjectExpression
        | NodeKind::ObjectPattern
        | NodeKind::FunctionExpression
        | NodeKind::ClassExpression => true,
        NodeKind::AssignmentExpression => expression
            .downcast_mut::<AssignmentExpression>()
            .is_some_and(|assignment| expression_statement_needs_parentheses(&mut assignment.left)),
        NodeKind::BinaryExpression => {
            let Some(binary) = expression.downcast_mut::<BinaryExpression>() else {
                return false;
            };
            if binary.op == BinaryOp::In {
                return false;
            }
            let parent = BinaryParent::Binary(binary.op);
            leftmost_operand_needs_parentheses(parent, &mut binary.left)
        }
        NodeKind::LogicalExpression => {
            let Some(logical) = expression.downcast_mut::<LogicalExpression>() else {
                return false;
            };
            let parent = BinaryParent::Logical(logical.op);
            leftmost_operand_needs_parentheses(parent, &mut logical.left)
        }
        NodeKind::ConditionalExpression => {
            let Some(conditional) = expression.downcast_mut::<ConditionalExpression>() else {
                return false;
            };
            conditional.test.force();
            !conditional_test_needs_parentheses(&conditional.test)
                && expression_statement_needs_parentheses(&mut conditional.test)
        }
        NodeKind::UpdateExpression => {
            let Some(update) = expression.downcast_mut::<UpdateExpression>() else {
                return false;
            };
            update.location == UpdateLocation::Suffix
                && expression_statement_needs_parentheses(&mut update.argument)
        }
        NodeKind::CallExpression => {
            let Some(call) = expression.downcast_mut::<CallExpression>() else {
                return false;
            };
            leftmost_member_operand_needs_parentheses(&mut call.callee)
        }
        NodeKind::MemberExpression => {
            let Some(member) = expression.downcast_mut::<MemberExpression>() else {
                return false;
            };
            leftmost_member_operand_needs_parentheses(&mut member.object)
        }
        NodeKind::TaggedTemplateExpression => {
            let Some(tagged) = expression.downcast_mut::<TaggedTemplateExpression>() else {
                return false;
            };
            tagged.tag.force();
            !tag_needs_parentheses(&tagged.tag)
                && expression_statement_needs_parentheses(&mut tagged.tag)
        }
        _ => false,
    }
}

fn leftmost_operand_needs_parentheses(parent: BinaryParent, left: &mut Node) -> bool {
    left.force();
    !binary_operand_needs_parentheses(parent, left, OperandLocation::Left)
        && expression_statement_needs_parentheses(left)
}

fn leftmost_member_operand_needs_parentheses(object: &mut Node) -> bool {
    object.force();
    !member_operand_needs_parentheses(object) && expression_statement_needs_parentheses(object)
}

/// Arrow bodies follow the expression-statement rule: a body beginning with
/// `{` would be read as a block.
pub fn arrow_body_needs_parentheses(body: &mut Node) -> bool {
    expression_statement_needs_parentheses(body)
}

/// Whether `consequent`, followed by ` else`, would donate the `else` to an
/// inner `if`: its text ends in an `if` statement without an alternate.
pub fn consequent_needs_block(consequent: &mut Node) -> bool {
    consequent.force();
    match consequent.kind() {
        NodeKind::IfStatement => {
            let Some(stmt) = consequent.downcast_mut::<IfStatement>() else {
                return false;
            };
            match stmt.alternate.as_mut() {
                Some(alternate) => consequent_needs_block(alternate),
                None => true,
            }
        }
        NodeKind::LabeledStatement => consequent
            .downcast_mut::<LabeledStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        NodeKind::WhileStatement => consequent
            .downcast_mut::<WhileStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        NodeKind::WithStatement => consequent
            .downcast_mut::<WithStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        NodeKind::ForStatement => consequent
            .downcast_mut::<ForStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        NodeKind::ForInStatement => consequent
            .downcast_mut::<ForInStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        NodeKind::ForOfStatement => consequent
            .downcast_mut::<ForOfStatement>()
            .is_some_and(|stmt| consequent_needs_block(&mut stmt.body)),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../../tests/parenthesize.rs"]
mod tests;
