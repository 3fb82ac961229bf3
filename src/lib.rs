//! JavaScript unparser.
//!
//! Build a tree with the [`Node`] factory helpers, hand it to a [`Generator`],
//! and get back source text with only the parentheses the grammar needs plus
//! the line/column range of every written node.
//!
//! ```
//! use jsgen::{BinaryOp, Generator, Node};
//!
//! let expr = Node::binary(
//!     Node::binary(Node::id("a"), BinaryOp::Add, Node::id("b")),
//!     BinaryOp::Multiply,
//!     Node::id("c"),
//! );
//! assert_eq!(Generator::emit_to_string(expr), "(a + b) * c");
//! ```

pub use jsgen_ast as ast;
pub use jsgen_common as common;
pub use jsgen_emitter as emitter;

// Common types
pub use jsgen_common::{LocationTracker, SourceLocation, SourceRange};

// Node model and operator tables
pub use jsgen_ast::{
    AssignmentOp, AstNode, BinaryOp, DeferredNode, LogicalOp, MethodKind, Node, NodeKind,
    TrackedNode, UnaryOp, UpdateLocation, UpdateOp, VariableKind,
};

// Generator
pub use jsgen_emitter::{Generator, GeneratorOptions};

// Tracing configuration (text / tree / JSON output for debugging)
pub mod tracing_config;
