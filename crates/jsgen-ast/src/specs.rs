//! Operator tables.
//!
//! Every operator enum maps to its JavaScript symbol through a static array
//! indexed by the enum ordinal. Binary and logical operators additionally carry
//! a precedence; the parenthesization rules in the emitter compare these numbers
//! directly, so they must stay in sync with the node precedence registry.

/// Assignment operators: `=`, `+=`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssignmentOp {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

const ASSIGNMENT_OP_SYMBOLS: [&str; 13] = [
    "=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=",
];

impl AssignmentOp {
    pub const ALL: [AssignmentOp; 13] = [
        AssignmentOp::Assign,
        AssignmentOp::Add,
        AssignmentOp::Subtract,
        AssignmentOp::Multiply,
        AssignmentOp::Divide,
        AssignmentOp::Modulus,
        AssignmentOp::Power,
        AssignmentOp::LeftShift,
        AssignmentOp::RightShift,
        AssignmentOp::UnsignedRightShift,
        AssignmentOp::BitwiseAnd,
        AssignmentOp::BitwiseOr,
        AssignmentOp::BitwiseXor,
    ];

    pub const fn symbol(self) -> &'static str {
        ASSIGNMENT_OP_SYMBOLS[self as usize]
    }
}

/// Binary (non short-circuiting) operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    In,
    InstanceOf,
}

const BINARY_OP_SYMBOLS: [&str; 22] = [
    "+",
    "-",
    "*",
    "/",
    "%",
    "**",
    "<<",
    ">>",
    ">>>",
    "&",
    "|",
    "^",
    "==",
    "!=",
    "===",
    "!==",
    "<",
    "<=",
    ">",
    ">=",
    "in",
    "instanceof",
];

const BINARY_OP_PRECEDENCE: [u8; 22] = [
    11, // add
    11, // subtract
    12, // multiply
    12, // divide
    12, // modulus
    13, // power
    10, // lshift
    10, // rshift
    10, // unsigned rshift
    7,  // bitwise and
    5,  // bitwise or
    6,  // bitwise xor
    8,  // equal
    8,  // not equal
    8,  // strict equal
    8,  // strict not equal
    9,  // less
    9,  // less equal
    9,  // greater
    9,  // greater equal
    9,  // in
    9,  // instanceof
];

impl BinaryOp {
    pub const ALL: [BinaryOp; 22] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulus,
        BinaryOp::Power,
        BinaryOp::LeftShift,
        BinaryOp::RightShift,
        BinaryOp::UnsignedRightShift,
        BinaryOp::BitwiseAnd,
        BinaryOp::BitwiseOr,
        BinaryOp::BitwiseXor,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::StrictEqual,
        BinaryOp::StrictNotEqual,
        BinaryOp::Less,
        BinaryOp::LessEqual,
        BinaryOp::Greater,
        BinaryOp::GreaterEqual,
        BinaryOp::In,
        BinaryOp::InstanceOf,
    ];

    pub const fn symbol(self) -> &'static str {
        BINARY_OP_SYMBOLS[self as usize]
    }

    pub const fn precedence(self) -> u8 {
        BINARY_OP_PRECEDENCE[self as usize]
    }

    /// Only exponentiation groups right-to-left.
    pub const fn is_right_associative(self) -> bool {
        matches!(self, BinaryOp::Power)
    }
}

/// Short-circuiting logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogicalOp {
    And,
    Or,
}

const LOGICAL_OP_SYMBOLS: [&str; 2] = ["&&", "||"];
const LOGICAL_OP_PRECEDENCE: [u8; 2] = [4, 3];

impl LogicalOp {
    pub const ALL: [LogicalOp; 2] = [LogicalOp::And, LogicalOp::Or];

    pub const fn symbol(self) -> &'static str {
        LOGICAL_OP_SYMBOLS[self as usize]
    }

    pub const fn precedence(self) -> u8 {
        LOGICAL_OP_PRECEDENCE[self as usize]
    }
}

/// Prefix unary operators (excluding `++`/`--`, see [`UpdateOp`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnaryOp {
    Positive,
    Negative,
    LogicalNot,
    BitwiseNot,
    TypeOf,
    Void,
    Delete,
}

const UNARY_OP_SYMBOLS: [&str; 7] = ["+", "-", "!", "~", "typeof", "void", "delete"];

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Positive,
        UnaryOp::Negative,
        UnaryOp::LogicalNot,
        UnaryOp::BitwiseNot,
        UnaryOp::TypeOf,
        UnaryOp::Void,
        UnaryOp::Delete,
    ];

    pub const fn symbol(self) -> &'static str {
        UNARY_OP_SYMBOLS[self as usize]
    }

    /// Named operators (`typeof`, `void`, `delete`) need a space before the operand.
    pub const fn is_keyword(self) -> bool {
        self.symbol().len() > 1
    }
}

/// `++` / `--`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

const UPDATE_OP_SYMBOLS: [&str; 2] = ["++", "--"];

impl UpdateOp {
    pub const ALL: [UpdateOp; 2] = [UpdateOp::Increment, UpdateOp::Decrement];

    pub const fn symbol(self) -> &'static str {
        UPDATE_OP_SYMBOLS[self as usize]
    }
}

/// `var` / `let` / `const`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

const VARIABLE_KIND_SYMBOLS: [&str; 3] = ["var", "let", "const"];

impl VariableKind {
    pub const ALL: [VariableKind; 3] = [VariableKind::Var, VariableKind::Let, VariableKind::Const];

    pub const fn symbol(self) -> &'static str {
        VARIABLE_KIND_SYMBOLS[self as usize]
    }
}

/// Placement of an update operator relative to its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateLocation {
    Prefix,
    Suffix,
}

/// Which side of a binary/logical operator an operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandLocation {
    Left,
    Right,
}

/// Accessor kind of a class method definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[cfg(test)]
#[path = "../tests/specs.rs"]
mod tests;
