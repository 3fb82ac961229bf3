//! Node model for the jsgen JavaScript generator.
//!
//! This crate provides the tree the generator consumes:
//! - Operator tables (`AssignmentOp`, `BinaryOp`, `LogicalOp`, `UnaryOp`, ...)
//! - Node payloads and the `Node` tagged union
//! - Builder helpers (`Node::id`, `Node::binary`, `Node::call`, ...)
//! - The node precedence registry used for parenthesization
//! - Deferred (lazily built) and tracked subtrees

// Operator symbols and precedences
pub mod specs;
pub use specs::{
    AssignmentOp, BinaryOp, LogicalOp, MethodKind, OperandLocation, UnaryOp, UpdateLocation,
    UpdateOp, VariableKind,
};

// Payload structs, one per node kind
pub mod nodes;

pub mod node;
pub use node::{AstNode, Node, NodeKind};

// Builder helpers on `Node`
pub mod factory;

pub mod precedence;
pub use precedence::{
    PRECEDENCE_NEEDS_PARENTHESES, PRECEDENCE_UNKNOWN, precedence_for_kind, precedence_of,
};

// Lazily built subtrees
pub mod deferred;
pub use deferred::{DeferredNode, TrackedNode};
